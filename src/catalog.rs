//! catalog.rs
//!
//! Per-language message catalog for the liturgy document builders. Every
//! label, heading and rubric printed by a builder is looked up here by key,
//! so the English and Spanish documents are produced by the same builder
//! code.
//!
//! Lookup order for `translate(key, lang)`: the requested language, then
//! English, then the key itself. A missing Spanish entry therefore prints
//! the English text rather than an empty line.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// The ISO 639-1 code stored on documents.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

type Table = HashMap<&'static str, &'static str>;

static ENGLISH: &[(&str, &str)] = &[
    // Summary
    ("mass.title", "Mass Liturgy"),
    ("mass.summary", "Mass Summary"),
    ("mass.information", "Mass Information"),
    ("mass.date_time", "Date & Time:"),
    ("mass.location", "Location:"),
    ("mass.liturgical_event", "Liturgical Event:"),
    ("mass.liturgical_color", "Liturgical Color:"),
    ("mass.intention", "Mass Intention:"),
    ("mass.requested_by", "Requested By:"),
    ("mass.ministers", "Ministers"),
    ("mass.presider", "Presider:"),
    ("mass.homilist", "Homilist:"),
    ("mass.announcer", "Pre-Mass Announcements:"),
    ("mass.roles", "Mass Roles"),
    ("mass.unassigned", "Unassigned"),
    // Introductory rites
    ("rites.introductory", "INTRODUCTORY RITES"),
    ("rites.procession", "[The priest and ministers enter in procession]"),
    ("rites.entrance_hymn", "Entrance Hymn"),
    ("rites.entrance_hymn_rubric", "[The entrance hymn is sung as the procession enters]"),
    ("rites.greeting", "Greeting"),
    ("rites.sign_of_cross", "In the name of the Father, and of the Son, and of the Holy Spirit."),
    ("rites.amen", "Amen."),
    (
        "rites.grace",
        "The grace of our Lord Jesus Christ, and the love of God, and the communion of the Holy Spirit be with you all.",
    ),
    ("rites.and_with_your_spirit", "And with your spirit."),
    ("rites.announcements", "Announcements"),
    ("rites.announcements_by", "Announcements by"),
    ("rites.penitential_act", "Penitential Act"),
    (
        "rites.penitential_invitation",
        "Brothers and sisters, let us acknowledge our sins, and so prepare ourselves to celebrate the sacred mysteries.",
    ),
    ("rites.pause_silence", "[Brief pause for silence]"),
    (
        "rites.confiteor",
        "I confess to almighty God and to you, my brothers and sisters, that I have greatly sinned, in my thoughts and in my words, in what I have done and in what I have failed to do, through my fault, through my fault, through my most grievous fault; therefore I ask blessed Mary ever-Virgin, all the Angels and Saints, and you, my brothers and sisters, to pray for me to the Lord our God.",
    ),
    (
        "rites.absolution",
        "May almighty God have mercy on us, forgive us our sins, and bring us to everlasting life.",
    ),
    ("rites.gloria", "Gloria"),
    ("rites.gloria_rubric", "[The Gloria is sung or said]"),
    ("rites.collect", "Collect (Opening Prayer)"),
    ("rites.let_us_pray", "Let us pray."),
    ("rites.pause_prayer", "[Brief pause for silent prayer]"),
    ("rites.collect_rubric", "[The priest says the Collect of the day]"),
    // Liturgy of the Word
    ("word.title", "LITURGY OF THE WORD"),
    ("word.first_reading", "First Reading"),
    ("word.first_reading_rubric", "[The first reading is proclaimed from the Lectionary]"),
    ("word.psalm", "Responsorial Psalm"),
    ("word.psalm_rubric", "[The responsorial psalm is sung or recited]"),
    ("word.second_reading", "Second Reading"),
    ("word.second_reading_rubric", "[The second reading is proclaimed from the Lectionary]"),
    ("word.acclamation", "Gospel Acclamation"),
    ("word.all_stand", "[All stand]"),
    ("word.alleluia", "Alleluia, alleluia."),
    ("word.gospel", "Gospel"),
    ("word.lord_be_with_you", "The Lord be with you."),
    ("word.gospel_rubric", "[The Gospel is proclaimed]"),
    ("word.homily", "Homily"),
    ("word.homily_by", "Homily by"),
    // Shared sections
    ("petitions.title", "Petitions"),
    ("petitions.reader", "Reader:"),
    ("petitions.people", "People:"),
    ("petitions.intro", "The response is \"Lord, hear our prayer.\" [Pause]"),
    ("petitions.suffix", ", let us pray to the Lord."),
    ("petitions.response", "Lord, hear our prayer."),
    ("announcements.title", "Announcements"),
    ("reading.no_pericope", "No pericope"),
    ("reading.no_text", "No reading text"),
    ("reading.none_selected", "None Selected"),
    ("reading.priest_greeting", "Priest: The Lord be with you."),
    ("reading.glory_to_you", "Glory to you, O Lord."),
    ("reading.praise_to_you", "Praise to you, Lord Jesus Christ."),
    ("psalm.title", "Psalm"),
    ("psalm.sung", "Sung"),
    ("psalm.no_text", "No psalm text"),
    // Simple event script
    ("event.script_title", "{} Script"),
    ("event.date", "Date"),
    ("event.time", "Time"),
    ("event.location", "Location"),
    ("event.details", "Details"),
    ("event.at", "at"),
    ("event.yes", "Yes"),
    ("event.no", "No"),
    // Sacrament summaries
    ("sacrament.coordinator", "Coordinator:"),
    ("sacrament.lead_musician", "Lead Musician:"),
    ("sacrament.cantor", "Cantor:"),
    ("sacrament.reception_location", "Reception Location:"),
    ("sacrament.note", "Note:"),
    ("sacrament.missing_date_time", "Missing Date and Time"),
    ("liturgy.sacred", "Sacred Liturgy"),
    ("liturgy.first_reading", "First Reading:"),
    ("liturgy.first_reader", "First Reading Lector:"),
    ("liturgy.psalm", "Psalm:"),
    ("liturgy.psalm_choice", "Psalm Choice:"),
    ("liturgy.psalm_reader", "Psalm Lector:"),
    ("liturgy.second_reading", "Second Reading:"),
    ("liturgy.second_reader", "Second Reading Lector:"),
    ("liturgy.gospel", "Gospel Reading:"),
    ("liturgy.petitions_reader", "Petitions Read By:"),
    ("reading.first_title", "FIRST READING"),
    ("reading.second_title", "SECOND READING"),
    ("reading.gospel_title", "GOSPEL"),
    ("reading.thanks_be_to_god", "Thanks be to God."),
    // Wedding
    ("wedding.title", "Wedding"),
    ("wedding.rehearsal", "Rehearsal"),
    ("wedding.rehearsal_date_time", "Rehearsal Date & Time:"),
    ("wedding.rehearsal_location", "Rehearsal Location:"),
    ("wedding.rehearsal_dinner_location", "Rehearsal Dinner Location:"),
    ("wedding.bride", "Bride:"),
    ("wedding.groom", "Groom:"),
    ("wedding.location", "Wedding Location:"),
    ("wedding.witness_1", "Best Man:"),
    ("wedding.witness_2", "Maid/Matron of Honor:"),
    ("wedding.note", "Wedding Note:"),
    // Quinceañera
    ("quinceanera.title", "Quinceañera Celebration"),
    ("quinceanera.title_for", "Quinceañera Celebration for"),
    ("quinceanera.person", "Quinceañera:"),
    ("quinceanera.family_contact", "Family Contact:"),
    ("quinceanera.location", "Celebration Location:"),
    ("quinceanera.date_time", "Celebration Date & Time:"),
    ("quinceanera.thanksgiving", "Act of Thanksgiving and Personal Commitment"),
    (
        "quinceanera.thanksgiving_rubric",
        "Before the final blessing, the priest invites the quinceañera to make an act of thanksgiving and of a personal commitment to lead a Christian life. The quinceañera may do so in these or similar words:",
    ),
    (
        "quinceanera.thanksgiving_prayer",
        "Heavenly Father,\nI thank you for the gift of life\nfor creating me in your image and likeness\nand for calling me to be your daughter through baptism.\n\nThank you for sending your Son Jesus to save me\nand your Holy Spirit to sanctify me.\n\nTo that which in your goodness and love\nyou will for me, I say \"yes,\"\nWith your grace I commit myself\nto serve my brothers and sisters all my life.\n\nMary, Mother of Jesus and our Mother,\nI dedicate myself to you.\nSince you are my model of faith,\nhelp me to continue learning from you what I need\nto be a Christian woman.\n\nHelp me to hear the Word of God as you did,\nholding it in my heart and loving others,\nso that, as I walk with Jesus in this life,\nI may worship Him with you in all eternity.\n\nAmen.",
    ),
    ("quinceanera.priest_responds", "The priest responds:"),
    ("quinceanera.completion", "may God who has begun this good work in you bring it to completion."),
];

static SPANISH: &[(&str, &str)] = &[
    ("mass.title", "Liturgia de la Misa"),
    ("mass.summary", "Resumen de la Misa"),
    ("mass.information", "Información de la Misa"),
    ("mass.date_time", "Fecha y Hora:"),
    ("mass.location", "Lugar:"),
    ("mass.liturgical_event", "Evento Litúrgico:"),
    ("mass.liturgical_color", "Color Litúrgico:"),
    ("mass.intention", "Intención de la Misa:"),
    ("mass.requested_by", "Solicitada por:"),
    ("mass.ministers", "Ministros"),
    ("mass.presider", "Celebrante:"),
    ("mass.homilist", "Homilista:"),
    ("mass.announcer", "Anuncios pre-Misa:"),
    ("mass.roles", "Roles de la Misa"),
    ("mass.unassigned", "Sin asignar"),
    ("rites.introductory", "RITOS INICIALES"),
    ("rites.procession", "[El sacerdote y los ministros entran en procesión]"),
    ("rites.entrance_hymn", "Canto de Entrada"),
    ("rites.entrance_hymn_rubric", "[Se canta el himno de entrada mientras la procesión entra]"),
    ("rites.greeting", "Saludo"),
    ("rites.sign_of_cross", "En el nombre del Padre, y del Hijo, y del Espíritu Santo."),
    ("rites.amen", "Amén."),
    (
        "rites.grace",
        "La gracia de nuestro Señor Jesucristo, el amor del Padre y la comunión del Espíritu Santo estén con todos ustedes.",
    ),
    ("rites.and_with_your_spirit", "Y con tu espíritu."),
    ("rites.announcements", "Anuncios"),
    ("rites.announcements_by", "Anuncios por"),
    ("rites.penitential_act", "Acto Penitencial"),
    (
        "rites.penitential_invitation",
        "Hermanos, reconozcamos nuestros pecados, para prepararnos a celebrar los sagrados misterios.",
    ),
    ("rites.pause_silence", "[Breve pausa para el silencio]"),
    (
        "rites.confiteor",
        "Yo confieso ante Dios todopoderoso y ante ustedes, hermanos, que he pecado mucho de pensamiento, palabra, obra y omisión. Por mi culpa, por mi culpa, por mi gran culpa. Por eso ruego a Santa María, siempre Virgen, a los ángeles, a los santos y a ustedes, hermanos, que intercedan por mí ante Dios, nuestro Señor.",
    ),
    (
        "rites.absolution",
        "Dios todopoderoso tenga misericordia de nosotros, perdone nuestros pecados y nos lleve a la vida eterna.",
    ),
    ("rites.gloria", "Gloria"),
    ("rites.gloria_rubric", "[Se canta o se dice el Gloria]"),
    ("rites.collect", "Oración Colecta"),
    ("rites.let_us_pray", "Oremos."),
    ("rites.pause_prayer", "[Breve pausa para la oración en silencio]"),
    ("rites.collect_rubric", "[El sacerdote dice la Colecta del día]"),
    ("word.title", "LITURGIA DE LA PALABRA"),
    ("word.first_reading", "Primera Lectura"),
    ("word.first_reading_rubric", "[Se proclama la primera lectura del Leccionario]"),
    ("word.psalm", "Salmo Responsorial"),
    ("word.psalm_rubric", "[Se canta o se recita el salmo responsorial]"),
    ("word.second_reading", "Segunda Lectura"),
    ("word.second_reading_rubric", "[Se proclama la segunda lectura del Leccionario]"),
    ("word.acclamation", "Aclamación del Evangelio"),
    ("word.all_stand", "[Todos de pie]"),
    ("word.alleluia", "Aleluya, aleluya."),
    ("word.gospel", "Evangelio"),
    ("word.lord_be_with_you", "El Señor esté con ustedes."),
    ("word.gospel_rubric", "[Se proclama el Evangelio]"),
    ("word.homily", "Homilía"),
    ("word.homily_by", "Homilía por"),
    ("petitions.title", "Peticiones"),
    ("petitions.reader", "Lector:"),
    ("petitions.people", "Asamblea:"),
    ("petitions.intro", "La respuesta es \"Te rogamos, óyenos.\" [Pausa]"),
    ("petitions.suffix", ", roguemos al Señor."),
    ("petitions.response", "Te rogamos, óyenos."),
    ("announcements.title", "Anuncios"),
    ("reading.no_pericope", "Sin cita"),
    ("reading.no_text", "Sin texto de lectura"),
    ("reading.none_selected", "Ninguna seleccionada"),
    ("reading.priest_greeting", "Sacerdote: El Señor esté con ustedes."),
    ("reading.glory_to_you", "Gloria a ti, Señor."),
    ("reading.praise_to_you", "Gloria a ti, Señor Jesús."),
    ("psalm.title", "Salmo"),
    ("psalm.sung", "Cantado"),
    ("psalm.no_text", "Sin texto del salmo"),
    ("event.script_title", "Guion de {}"),
    ("event.date", "Fecha"),
    ("event.time", "Hora"),
    ("event.location", "Lugar"),
    ("event.details", "Detalles"),
    ("event.at", "a las"),
    ("event.yes", "Sí"),
    ("event.no", "No"),
    ("sacrament.coordinator", "Coordinador(a):"),
    ("sacrament.lead_musician", "Músico Principal:"),
    ("sacrament.cantor", "Cantor(a):"),
    ("sacrament.reception_location", "Lugar de la Recepción:"),
    ("sacrament.note", "Nota:"),
    ("sacrament.missing_date_time", "Falta Fecha y Hora"),
    ("liturgy.sacred", "Sagrada Liturgia"),
    ("liturgy.first_reading", "Primera Lectura:"),
    ("liturgy.first_reader", "Lector de la Primera Lectura:"),
    ("liturgy.psalm", "Salmo:"),
    ("liturgy.psalm_choice", "Elección del Salmo:"),
    ("liturgy.psalm_reader", "Lector del Salmo:"),
    ("liturgy.second_reading", "Segunda Lectura:"),
    ("liturgy.second_reader", "Lector de la Segunda Lectura:"),
    ("liturgy.gospel", "Lectura del Evangelio:"),
    ("liturgy.petitions_reader", "Peticiones Leídas Por:"),
    ("reading.first_title", "PRIMERA LECTURA"),
    ("reading.second_title", "SEGUNDA LECTURA"),
    ("reading.gospel_title", "EVANGELIO"),
    ("reading.thanks_be_to_god", "Te alabamos, Señor."),
    ("wedding.title", "Boda"),
    ("wedding.rehearsal", "Ensayo"),
    ("wedding.rehearsal_date_time", "Fecha y Hora del Ensayo:"),
    ("wedding.rehearsal_location", "Lugar del Ensayo:"),
    ("wedding.rehearsal_dinner_location", "Lugar de la Cena del Ensayo:"),
    ("wedding.bride", "Novia:"),
    ("wedding.groom", "Novio:"),
    ("wedding.location", "Lugar de la Boda:"),
    ("wedding.witness_1", "Testigo Principal:"),
    ("wedding.witness_2", "Dama de Honor:"),
    ("wedding.note", "Nota de la Boda:"),
    ("quinceanera.title", "Celebración de Quinceañera"),
    ("quinceanera.title_for", "Celebración de Quinceañera para"),
    ("quinceanera.person", "Quinceañera:"),
    ("quinceanera.family_contact", "Contacto Familiar:"),
    ("quinceanera.location", "Lugar de la Celebración:"),
    ("quinceanera.date_time", "Fecha y Hora de la Celebración:"),
    ("quinceanera.thanksgiving", "Acto de Acción de Gracias y Compromiso Personal"),
    (
        "quinceanera.thanksgiving_rubric",
        "Antes de la bendición final, el sacerdote invita a la quinceañera a hacer un acto de acción de gracias y de compromiso personal para llevar una vida cristiana. La quinceañera puede hacerlo con estas o similares palabras:",
    ),
    (
        "quinceanera.thanksgiving_prayer",
        "Padre celestial,\nte doy gracias por el don de la vida,\npor crearme a tu imagen y semejanza\ny por llamarme a ser tu hija por medio del bautismo.\n\nGracias por enviar a tu Hijo Jesús para salvarme\ny a tu Espíritu Santo para santificarme.\n\nA lo que en tu bondad y amor\nquieras para mí, digo \"sí\".\nCon tu gracia me comprometo\na servir a mis hermanos y hermanas toda mi vida.\n\nMaría, Madre de Jesús y Madre nuestra,\nme dedico a ti.\nYa que tú eres mi modelo de fe,\nayúdame a seguir aprendiendo de ti lo que necesito\npara ser una mujer cristiana.\n\nAyúdame a escuchar la Palabra de Dios como tú lo hiciste,\nguardándola en mi corazón y amando a los demás,\npara que, mientras camino con Jesús en esta vida,\npueda adorarlo contigo en la eternidad.\n\nAmén.",
    ),
    ("quinceanera.priest_responds", "El sacerdote responde:"),
    ("quinceanera.completion", "que Dios, que ha comenzado esta buena obra en ti, la lleve a su cumplimiento."),
];

static CATALOG: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Language::English, ENGLISH.iter().copied().collect());
    m.insert(Language::Spanish, SPANISH.iter().copied().collect());
    m
});

/// Looks up `key` for `language`, falling back to English and then to the
/// key itself.
///
/// ```
/// # use parish_liturgy::catalog::{translate, Language};
/// assert_eq!(translate("mass.presider", Language::Spanish), "Celebrante:");
/// assert_eq!(translate("mass.presider", Language::English), "Presider:");
/// assert_eq!(translate("no.such.key", Language::Spanish), "no.such.key");
/// ```
pub fn translate(key: &str, language: Language) -> &str {
    CATALOG
        .get(&language)
        .and_then(|table| table.get(key))
        .or_else(|| CATALOG.get(&Language::English).and_then(|table| table.get(key)))
        .copied()
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_english_key_has_spanish_text() {
        let spanish: HashSet<&str> = SPANISH.iter().map(|(k, _)| *k).collect();
        for (key, _) in ENGLISH {
            assert!(spanish.contains(key), "missing Spanish text for {}", key);
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for table in [ENGLISH, SPANISH] {
            let keys: HashSet<&str> = table.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys.len(), table.len());
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Spanish.to_string(), "es");
        assert_eq!(
            serde_json::from_str::<Language>("\"es\"").unwrap(),
            Language::Spanish
        );
    }
}
