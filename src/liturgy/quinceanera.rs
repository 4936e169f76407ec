//! liturgy/quinceanera.rs
//!
//! The full quinceañera script. After the summary page and the Liturgy of
//! the Word comes the act of thanksgiving, in which the young woman
//! commits herself to a Christian life and the priest answers her.

use serde::Deserialize;

use crate::catalog::{translate, Language};
use crate::formatters::format_person_name;
use crate::model::Person;
use crate::value::non_empty;

use super::shared::{
    build_announcements_section, contact_row, event_subtitle, location_row, person_row,
    LiturgyOfTheWord, ParishEvent, WordOptions,
};
use super::{
    join_sections, ContentElement, ContentSection, DocumentKind, LiturgyDocument, SpacerSize,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quinceanera {
    #[serde(default)]
    pub id: String,
    /// The young woman celebrating.
    #[serde(default)]
    pub quinceanera: Option<Person>,
    #[serde(default)]
    pub family_contact: Option<Person>,
    #[serde(default)]
    pub coordinator: Option<Person>,
    #[serde(default)]
    pub presider: Option<Person>,
    #[serde(default)]
    pub homilist: Option<Person>,
    #[serde(default)]
    pub lead_musician: Option<Person>,
    #[serde(default)]
    pub cantor: Option<Person>,
    #[serde(default)]
    pub quinceanera_event: Option<ParishEvent>,
    #[serde(default)]
    pub quinceanera_reception: Option<ParishEvent>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub announcements: Option<String>,
    #[serde(flatten)]
    pub word: LiturgyOfTheWord,
}

fn title(quinceanera: &Quinceanera, language: Language) -> String {
    match &quinceanera.quinceanera {
        Some(person) => format!(
            "{} {}",
            translate("quinceanera.title_for", language),
            format_person_name(Some(person))
        ),
        None => translate("quinceanera.title", language).to_string(),
    }
}

fn build_summary_section(quinceanera: &Quinceanera, language: Language) -> ContentSection {
    let t = |key: &'static str| translate(key, language);
    let event = quinceanera.quinceanera_event.as_ref();

    let mut elements = vec![ContentElement::section_title(t("quinceanera.title"))];
    elements.extend(person_row(t("quinceanera.person"), quinceanera.quinceanera.as_ref()));
    elements.extend(contact_row(
        t("quinceanera.family_contact"),
        quinceanera.family_contact.as_ref(),
    ));
    elements.extend(person_row(t("sacrament.coordinator"), quinceanera.coordinator.as_ref()));
    elements.extend(person_row(t("mass.presider"), quinceanera.presider.as_ref()));
    elements.extend(person_row(t("mass.homilist"), quinceanera.homilist.as_ref()));
    elements.extend(person_row(
        t("sacrament.lead_musician"),
        quinceanera.lead_musician.as_ref(),
    ));
    elements.extend(person_row(t("sacrament.cantor"), quinceanera.cantor.as_ref()));
    elements.extend(location_row(t("quinceanera.location"), event));
    if let Some(event) = event.filter(|e| non_empty(&e.start_date).is_some()) {
        elements.push(ContentElement::info_row(t("quinceanera.date_time"), event.date_time()));
    }
    elements.extend(location_row(
        t("sacrament.reception_location"),
        quinceanera.quinceanera_reception.as_ref(),
    ));
    if let Some(note) = non_empty(&quinceanera.note) {
        elements.push(ContentElement::info_row(t("sacrament.note"), note));
    }

    elements.extend(quinceanera.word.summary_rows(language));

    ContentSection {
        page_break_after: true,
        ..ContentSection::new("summary", elements)
    }
}

/// The act of thanksgiving and personal commitment before the final
/// blessing. The priest's answer names her, or `N.` when unknown.
fn build_thanksgiving_section(quinceanera: &Quinceanera, language: Language) -> ContentSection {
    let t = |key: &'static str| translate(key, language);
    let name = match &quinceanera.quinceanera {
        Some(person) => format_person_name(Some(person)),
        None => "N.".to_string(),
    };

    let elements = vec![
        ContentElement::section_title(t("quinceanera.thanksgiving")),
        ContentElement::spacer(SpacerSize::Medium),
        ContentElement::rubric(t("quinceanera.thanksgiving_rubric")),
        ContentElement::spacer(SpacerSize::Small),
        ContentElement::PrayerText {
            text: t("quinceanera.thanksgiving_prayer").to_string(),
        },
        ContentElement::spacer(SpacerSize::Medium),
        ContentElement::rubric(t("quinceanera.priest_responds")),
        ContentElement::spacer(SpacerSize::Small),
        ContentElement::PriestText {
            text: format!("{}, {}", name, t("quinceanera.completion")),
        },
    ];

    ContentSection::new("act-of-thanksgiving", elements).with_title(t("quinceanera.thanksgiving"))
}

/// Builds the full quinceañera script in `language`. The presider
/// proclaims the Gospel.
pub fn build_quinceanera_script(quinceanera: &Quinceanera, language: Language) -> LiturgyDocument {
    let options = WordOptions {
        first_title_key: "word.title",
        gospel_reader: quinceanera.presider.as_ref(),
        gospel_dialogue: false,
        gospel_acclamations: true,
    };

    let mut sections = vec![Some(build_summary_section(quinceanera, language))];
    sections.extend(quinceanera.word.build_sections(&options, language));
    sections.push(Some(build_thanksgiving_section(quinceanera, language)));
    sections.push(build_announcements_section(
        quinceanera.announcements.as_deref(),
        language,
    ));

    let template = match language {
        Language::English => "quinceanera-full-script-english",
        Language::Spanish => "quinceanera-full-script-spanish",
    };

    LiturgyDocument {
        id: quinceanera.id.clone(),
        kind: DocumentKind::Quinceanera,
        language,
        template: template.to_string(),
        title: title(quinceanera, language),
        subtitle: Some(event_subtitle(quinceanera.quinceanera_event.as_ref(), language)),
        sections: join_sections(sections),
    }
}

pub fn build_full_script_english(quinceanera: &Quinceanera) -> LiturgyDocument {
    build_quinceanera_script(quinceanera, Language::English)
}

pub fn build_full_script_spanish(quinceanera: &Quinceanera) -> LiturgyDocument {
    build_quinceanera_script(quinceanera, Language::Spanish)
}
