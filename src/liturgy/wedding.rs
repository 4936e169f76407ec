//! liturgy/wedding.rs
//!
//! The full wedding ceremony script: a summary page covering the
//! rehearsal, the wedding party and the chosen readings, then the readings
//! each on its own page, the petitions and the announcements.

use serde::Deserialize;

use crate::catalog::{translate, Language};
use crate::formatters::format_person_name;
use crate::model::Person;
use crate::value::non_empty;

use super::shared::{
    build_announcements_section, contact_row, event_subtitle, location_row, person_row,
    LiturgyOfTheWord, ParishEvent, WordOptions,
};
use super::{join_sections, ContentElement, ContentSection, DocumentKind, LiturgyDocument};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wedding {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub bride: Option<Person>,
    #[serde(default)]
    pub groom: Option<Person>,
    #[serde(default)]
    pub coordinator: Option<Person>,
    #[serde(default)]
    pub presider: Option<Person>,
    #[serde(default)]
    pub lead_musician: Option<Person>,
    /// Best man.
    #[serde(default)]
    pub witness_1: Option<Person>,
    /// Maid or matron of honor.
    #[serde(default)]
    pub witness_2: Option<Person>,
    #[serde(default)]
    pub rehearsal_event: Option<ParishEvent>,
    #[serde(default)]
    pub rehearsal_dinner_event: Option<ParishEvent>,
    #[serde(default)]
    pub wedding_event: Option<ParishEvent>,
    #[serde(default)]
    pub reception_event: Option<ParishEvent>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub announcements: Option<String>,
    #[serde(flatten)]
    pub word: LiturgyOfTheWord,
}

const GOSPEL: WordOptions<'static> = WordOptions {
    first_title_key: "reading.first_title",
    gospel_reader: None,
    gospel_dialogue: true,
    gospel_acclamations: true,
};

/// `Bride & Groom`, or the plain word when either is missing.
fn title(wedding: &Wedding, language: Language) -> String {
    match (&wedding.bride, &wedding.groom) {
        (Some(bride), Some(groom)) => format!(
            "{} & {}",
            format_person_name(Some(bride)),
            format_person_name(Some(groom))
        ),
        _ => translate("wedding.title", language).to_string(),
    }
}

fn build_summary_section(wedding: &Wedding, language: Language) -> ContentSection {
    let t = |key: &'static str| translate(key, language);
    let mut elements = Vec::new();

    if wedding.rehearsal_event.is_some() || wedding.rehearsal_dinner_event.is_some() {
        elements.push(ContentElement::section_title(t("wedding.rehearsal")));
        if let Some(rehearsal) = &wedding.rehearsal_event {
            if non_empty(&rehearsal.start_date).is_some() {
                elements.push(ContentElement::info_row(
                    t("wedding.rehearsal_date_time"),
                    rehearsal.date_time(),
                ));
            }
        }
        elements.extend(location_row(
            t("wedding.rehearsal_location"),
            wedding.rehearsal_event.as_ref(),
        ));
        elements.extend(location_row(
            t("wedding.rehearsal_dinner_location"),
            wedding.rehearsal_dinner_event.as_ref(),
        ));
    }

    elements.push(ContentElement::section_title(t("wedding.title")));
    elements.extend(contact_row(t("wedding.bride"), wedding.bride.as_ref()));
    elements.extend(contact_row(t("wedding.groom"), wedding.groom.as_ref()));
    elements.extend(person_row(t("sacrament.coordinator"), wedding.coordinator.as_ref()));
    elements.extend(person_row(t("mass.presider"), wedding.presider.as_ref()));
    elements.extend(person_row(t("sacrament.lead_musician"), wedding.lead_musician.as_ref()));
    elements.extend(location_row(t("wedding.location"), wedding.wedding_event.as_ref()));
    elements.extend(location_row(
        t("sacrament.reception_location"),
        wedding.reception_event.as_ref(),
    ));
    elements.extend(person_row(t("wedding.witness_1"), wedding.witness_1.as_ref()));
    elements.extend(person_row(t("wedding.witness_2"), wedding.witness_2.as_ref()));
    if let Some(notes) = non_empty(&wedding.notes) {
        elements.push(ContentElement::info_row(t("wedding.note"), notes));
    }

    elements.extend(wedding.word.summary_rows(language));

    ContentSection {
        page_break_after: true,
        ..ContentSection::new("summary", elements)
    }
}

/// Builds the full wedding script in `language`.
pub fn build_wedding_script(wedding: &Wedding, language: Language) -> LiturgyDocument {
    let mut sections = vec![Some(build_summary_section(wedding, language))];
    sections.extend(wedding.word.build_sections(&GOSPEL, language));
    sections.push(build_announcements_section(
        wedding.announcements.as_deref(),
        language,
    ));

    let template = match language {
        Language::English => "wedding-full-script-english",
        Language::Spanish => "wedding-full-script-spanish",
    };

    LiturgyDocument {
        id: wedding.id.clone(),
        kind: DocumentKind::Wedding,
        language,
        template: template.to_string(),
        title: title(wedding, language),
        subtitle: Some(event_subtitle(wedding.wedding_event.as_ref(), language)),
        sections: join_sections(sections),
    }
}

pub fn build_full_script_english(wedding: &Wedding) -> LiturgyDocument {
    build_wedding_script(wedding, Language::English)
}

pub fn build_full_script_spanish(wedding: &Wedding) -> LiturgyDocument {
    build_wedding_script(wedding, Language::Spanish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liturgy::shared::Reading;
    use crate::model::Location;

    fn person(first: &str, last: &str) -> Person {
        Person {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            ..Default::default()
        }
    }

    fn reading(pericope: &str) -> Reading {
        Reading {
            pericope: Some(pericope.into()),
            text: Some(format!("Text of {}", pericope)),
            ..Default::default()
        }
    }

    fn church() -> Location {
        Location {
            name: Some("St. Mary".into()),
            city: Some("Austin".into()),
            state: Some("TX".into()),
            ..Default::default()
        }
    }

    fn june_wedding() -> Wedding {
        let mut bride = person("Maria", "Lopez");
        bride.extra.insert("phone_number".into(), "512-555-0101".into());
        Wedding {
            id: "w-1".into(),
            bride: Some(bride),
            groom: Some(person("John", "Smith")),
            presider: Some(person("Fr. Paul", "Kim")),
            witness_1: Some(person("Luis", "Lopez")),
            rehearsal_event: Some(ParishEvent {
                start_date: Some("2025-06-13".into()),
                start_time: Some("18:00:00".into()),
                location: Some(church()),
            }),
            wedding_event: Some(ParishEvent {
                start_date: Some("2025-06-14".into()),
                start_time: Some("14:00:00".into()),
                location: Some(church()),
            }),
            notes: Some("Unity candle".into()),
            announcements: Some("Reception follows in the hall".into()),
            word: LiturgyOfTheWord {
                first_reading: Some(reading("Genesis 2:18-24")),
                first_reader: Some(person("Ana", "Ruiz")),
                psalm: Some(reading("Psalm 128")),
                psalm_is_sung: Some(true),
                gospel_reading: Some(reading("John 15:9-12")),
                petitions: Some("For Maria and John.\nFor our families".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn rows(section: &ContentSection) -> Vec<(&str, &str)> {
        section
            .elements
            .iter()
            .filter_map(|e| match e {
                ContentElement::InfoRow { label, value } => Some((label.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_english_document() {
        let doc = build_full_script_english(&june_wedding());
        assert_eq!(doc.kind, DocumentKind::Wedding);
        assert_eq!(doc.template, "wedding-full-script-english");
        assert_eq!(doc.title, "Maria Lopez & John Smith");
        assert_eq!(doc.subtitle.as_deref(), Some("June 14, 2025 at 2:00 PM"));

        let ids: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["summary", "first-reading", "psalm", "gospel", "petitions", "announcements"]
        );
        assert!(doc.sections[0].page_break_after);
        assert!(doc.sections[2].page_break_before);
        assert!(doc.sections[3].page_break_before);
        assert!(doc.sections[4].page_break_after);
        assert!(!doc.sections[5].page_break_after);
    }

    #[test]
    fn test_summary_rows() {
        let doc = build_full_script_english(&june_wedding());
        assert_eq!(
            rows(&doc.sections[0]),
            vec![
                ("Rehearsal Date & Time:", "June 13, 2025 at 6:00 PM"),
                ("Rehearsal Location:", "St. Mary (Austin, TX)"),
                ("Bride:", "Maria Lopez (512-555-0101)"),
                ("Groom:", "John Smith"),
                ("Presider:", "Fr. Paul Kim"),
                ("Wedding Location:", "St. Mary (Austin, TX)"),
                ("Best Man:", "Luis Lopez"),
                ("Wedding Note:", "Unity candle"),
                ("First Reading:", "Genesis 2:18-24"),
                ("First Reading Lector:", "Ana Ruiz"),
                ("Psalm:", "Psalm 128"),
                ("Psalm Choice:", "Sung"),
                ("Gospel Reading:", "John 15:9-12"),
            ]
        );
    }

    #[test]
    fn test_gospel_dialogue_and_acclamations() {
        let doc = build_full_script_english(&june_wedding());
        let gospel = &doc.sections[3];
        assert_eq!(gospel.elements[0], ContentElement::ReadingTitle { text: "GOSPEL".into() });
        assert_eq!(
            gospel.elements[2],
            ContentElement::priest_dialogue("Priest: The Lord be with you.")
        );
        assert_eq!(
            gospel.elements.last(),
            Some(&ContentElement::Response {
                label: "People:".into(),
                text: "Praise to you, Lord Jesus Christ.".into()
            })
        );
    }

    #[test]
    fn test_spanish_document() {
        let doc = build_full_script_spanish(&june_wedding());
        assert_eq!(doc.template, "wedding-full-script-spanish");
        assert_eq!(doc.language, Language::Spanish);
        assert_eq!(doc.subtitle.as_deref(), Some("June 14, 2025 at 2:00 PM"));

        let summary = rows(&doc.sections[0]);
        assert!(summary.contains(&("Novia:", "Maria Lopez (512-555-0101)")));
        assert!(summary.contains(&("Testigo Principal:", "Luis Lopez")));
        assert!(summary.contains(&("Elección del Salmo:", "Cantado")));
        assert_eq!(
            doc.sections[1].elements[0],
            ContentElement::ReadingTitle { text: "PRIMERA LECTURA".into() }
        );
        assert!(doc.sections[1].elements.contains(&ContentElement::Response {
            label: "Asamblea:".into(),
            text: "Te alabamos, Señor.".into()
        }));
    }

    #[test]
    fn test_empty_wedding() {
        let doc = build_full_script_english(&Wedding::default());
        assert_eq!(doc.title, "Wedding");
        assert_eq!(doc.subtitle.as_deref(), Some("Missing Date and Time"));
        let ids: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["summary", "first-reading"]);
        assert_eq!(
            doc.sections[1].elements,
            vec![ContentElement::text("None Selected")]
        );
        assert!(!doc.sections[1].page_break_after);
        assert_eq!(
            doc.sections[0].elements,
            vec![
                ContentElement::section_title("Wedding"),
                ContentElement::section_title("Sacred Liturgy"),
            ]
        );
    }

    #[test]
    fn test_petitions_read_by_second_reader() {
        let mut wedding = june_wedding();
        wedding.word.second_reader = Some(person("Tom", "Lee"));
        wedding.word.petition_reader = Some(person("Rosa", "Diaz"));
        wedding.word.petitions_read_by_second_reader = Some(true);

        let doc = build_full_script_english(&wedding);
        assert!(rows(&doc.sections[0]).contains(&("Petitions Read By:", "Tom Lee")));
        let petitions = doc.sections.iter().find(|s| s.id == "petitions").unwrap();
        assert_eq!(petitions.elements[1], ContentElement::ReaderName { text: "Tom Lee".into() });
    }

    #[test]
    fn test_decodes_flattened_record() {
        let wedding: Wedding = serde_json::from_value(serde_json::json!({
            "id": "w-2",
            "bride": { "first_name": "Maria", "last_name": "Lopez" },
            "psalm_is_sung": null,
            "petitions": "For peace",
            "gospel_reading": { "pericope": "Matthew 5:1-12" }
        }))
        .unwrap();
        assert_eq!(wedding.word.petitions.as_deref(), Some("For peace"));
        assert_eq!(wedding.word.psalm_is_sung, None);
        assert!(wedding.word.gospel_reading.is_some());
    }
}
