//! liturgy/shared.rs
//!
//! Sections shared by the sacrament builders: readings, the responsorial
//! psalm, petitions and announcements, plus the Liturgy of the Word record
//! that weddings and quinceañeras have in common.

use serde::Deserialize;

use crate::catalog::{translate, Language};
use crate::formatters::{
    format_event_date_time, format_location_with_address, format_person_name,
    format_person_with_phone,
};
use crate::model::{Location, Person};
use crate::value::non_empty;

use super::{ContentElement, ContentSection, SpacerSize};

/// A scripture reading from the lectionary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub pericope: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
}

/// A scheduled parish event such as a Mass or a rehearsal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParishEvent {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl ParishEvent {
    /// `December 25, 2025 at 10:00 AM`. Scripts print this English form
    /// in every language.
    pub fn date_time(&self) -> String {
        format_event_date_time(
            non_empty(&self.start_date),
            self.start_time.as_deref(),
            Language::English,
        )
    }
}

/// Document subtitle: the event's date and time, or a placeholder line
/// when either is missing.
pub fn event_subtitle(event: Option<&ParishEvent>, language: Language) -> String {
    match event {
        Some(event) if non_empty(&event.start_date).is_some() && non_empty(&event.start_time).is_some() => {
            event.date_time()
        }
        _ => translate("sacrament.missing_date_time", language).to_string(),
    }
}

/// An info row naming `person`; nothing when there is nobody.
pub fn person_row(label: &str, person: Option<&Person>) -> Option<ContentElement> {
    person.map(|person| ContentElement::info_row(label, format_person_name(Some(person))))
}

/// Like [`person_row`], with the phone number when known.
pub fn contact_row(label: &str, person: Option<&Person>) -> Option<ContentElement> {
    person.map(|person| ContentElement::info_row(label, format_person_with_phone(Some(person))))
}

/// An info row with the event's place and address; nothing without one.
pub fn location_row(label: &str, event: Option<&ParishEvent>) -> Option<ContentElement> {
    let location = event.and_then(|e| e.location.as_ref())?;
    Some(ContentElement::info_row(label, format_location_with_address(Some(location))))
}

/// Keeps a section only if it has something to print.
fn present(section: ContentSection) -> Option<ContentSection> {
    Some(section).filter(|s| !s.elements.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct ReadingSectionConfig<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub reading: Option<&'a Reading>,
    /// `None` for the Gospel, which the priest or deacon proclaims.
    pub reader: Option<&'a Person>,
    pub response_text: Option<&'a str>,
    pub include_gospel_dialogue: bool,
    /// "Glory to you, O Lord." before and "Praise to you, Lord Jesus
    /// Christ." after the text.
    pub include_gospel_acclamations: bool,
    pub page_break_before: bool,
    pub show_none_selected: bool,
}

fn people_response(text: impl Into<String>, language: Language) -> ContentElement {
    ContentElement::Response {
        label: translate("petitions.people", language).to_string(),
        text: text.into(),
    }
}

pub fn build_reading_section(config: &ReadingSectionConfig, language: Language) -> ContentSection {
    let mut elements = Vec::new();

    if let Some(reading) = config.reading {
        elements.push(ContentElement::ReadingTitle {
            text: config.title.to_string(),
        });
        elements.push(ContentElement::Pericope {
            text: non_empty(&reading.pericope)
                .unwrap_or(translate("reading.no_pericope", language))
                .to_string(),
        });

        if let Some(reader) = config.reader {
            elements.push(ContentElement::ReaderName {
                text: format_person_name(Some(reader)),
            });
        }

        if config.include_gospel_dialogue {
            elements.push(ContentElement::priest_dialogue(translate(
                "reading.priest_greeting",
                language,
            )));
            elements.push(people_response(
                translate("rites.and_with_your_spirit", language),
                language,
            ));
        }

        if config.include_gospel_acclamations {
            elements.push(people_response(translate("reading.glory_to_you", language), language));
        }

        if let Some(introduction) = non_empty(&reading.introduction) {
            elements.push(ContentElement::Introduction {
                text: introduction.to_string(),
            });
        }

        elements.push(ContentElement::ReadingText {
            text: non_empty(&reading.text)
                .unwrap_or(translate("reading.no_text", language))
                .to_string(),
        });

        if let Some(conclusion) = non_empty(&reading.conclusion) {
            elements.push(ContentElement::Conclusion {
                text: conclusion.to_string(),
            });
        }

        if let Some(response) = config.response_text.filter(|r| !r.is_empty()) {
            elements.push(people_response(response, language));
        }

        if config.include_gospel_acclamations {
            elements.push(people_response(translate("reading.praise_to_you", language), language));
        }
    } else if config.show_none_selected {
        elements.push(ContentElement::text(translate("reading.none_selected", language)));
    }

    ContentSection {
        page_break_before: config.page_break_before,
        ..ContentSection::new(config.id, elements)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PsalmSectionConfig<'a> {
    pub psalm: Option<&'a Reading>,
    pub psalm_reader: Option<&'a Person>,
    pub psalm_is_sung: bool,
}

/// The responsorial psalm. Starts on a new page when there is a psalm.
pub fn build_psalm_section(config: &PsalmSectionConfig, language: Language) -> ContentSection {
    let mut elements = Vec::new();

    if let Some(psalm) = config.psalm {
        elements.push(ContentElement::ReadingTitle {
            text: translate("psalm.title", language).to_string(),
        });
        elements.push(ContentElement::Pericope {
            text: non_empty(&psalm.pericope)
                .unwrap_or(translate("reading.no_pericope", language))
                .to_string(),
        });

        if config.psalm_is_sung {
            elements.push(ContentElement::ReaderName {
                text: translate("psalm.sung", language).to_string(),
            });
        } else if let Some(reader) = config.psalm_reader {
            elements.push(ContentElement::ReaderName {
                text: format_person_name(Some(reader)),
            });
        }

        if let Some(introduction) = non_empty(&psalm.introduction) {
            elements.push(ContentElement::Introduction {
                text: introduction.to_string(),
            });
        }

        elements.push(ContentElement::ReadingText {
            text: non_empty(&psalm.text)
                .unwrap_or(translate("psalm.no_text", language))
                .to_string(),
        });

        if let Some(conclusion) = non_empty(&psalm.conclusion) {
            elements.push(ContentElement::Conclusion {
                text: conclusion.to_string(),
            });
        }
    }

    ContentSection {
        page_break_before: config.psalm.is_some(),
        ..ContentSection::new("psalm", elements)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PetitionsSectionConfig<'a> {
    /// Newline-separated petitions.
    pub petitions: Option<&'a str>,
    pub petition_reader: Option<&'a Person>,
    pub second_reader: Option<&'a Person>,
    pub petitions_read_by_second_reader: bool,
}

impl<'a> PetitionsSectionConfig<'a> {
    /// The second reader when asked to read the petitions, otherwise the
    /// petition reader.
    pub fn reader(&self) -> Option<&'a Person> {
        match (self.petitions_read_by_second_reader, self.second_reader) {
            (true, Some(second_reader)) => Some(second_reader),
            _ => self.petition_reader,
        }
    }
}

/// Petitions, one reader line and one people response per non-blank line.
/// `None` when there are no petitions.
pub fn build_petitions_section(
    config: &PetitionsSectionConfig,
    language: Language,
) -> Option<ContentSection> {
    let petitions = config.petitions.filter(|p| !p.is_empty())?;

    let reader_name = format_person_name(config.reader());
    let reader_label = translate("petitions.reader", language);

    let mut elements = vec![ContentElement::ReadingTitle {
        text: translate("petitions.title", language).to_string(),
    }];
    if !reader_name.is_empty() {
        elements.push(ContentElement::ReaderName { text: reader_name });
    }
    elements.push(ContentElement::spacer(SpacerSize::Medium));
    elements.push(ContentElement::Petition {
        label: reader_label.to_string(),
        text: translate("petitions.intro", language).to_string(),
    });

    for line in petitions.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let line = line.strip_suffix('.').unwrap_or(line);
        elements.push(ContentElement::Petition {
            label: reader_label.to_string(),
            text: format!("{}{}", line, translate("petitions.suffix", language)),
        });
        elements.push(people_response(translate("petitions.response", language), language));
    }

    Some(ContentSection {
        page_break_before: true,
        page_break_after: true,
        ..ContentSection::new("petitions", elements)
    })
}

/// Announcements text under a heading. `None` when there is none.
pub fn build_announcements_section(
    announcements: Option<&str>,
    language: Language,
) -> Option<ContentSection> {
    let announcements = announcements.filter(|a| !a.is_empty())?;
    Some(ContentSection::new(
        "announcements",
        vec![
            ContentElement::section_title(translate("announcements.title", language)),
            ContentElement::ReadingText {
                text: announcements.to_string(),
            },
        ],
    ))
}

//-----------------------------------
// Liturgy of the Word
//-----------------------------------

/// Readings, readers and petitions chosen for a sacrament celebrated
/// within a liturgy of the word. Embedded in the wedding and quinceañera
/// records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LiturgyOfTheWord {
    #[serde(default)]
    pub first_reading: Option<Reading>,
    #[serde(default)]
    pub first_reader: Option<Person>,
    #[serde(default)]
    pub psalm: Option<Reading>,
    #[serde(default)]
    pub psalm_reader: Option<Person>,
    #[serde(default)]
    pub psalm_is_sung: Option<bool>,
    #[serde(default)]
    pub second_reading: Option<Reading>,
    #[serde(default)]
    pub second_reader: Option<Person>,
    #[serde(default)]
    pub gospel_reading: Option<Reading>,
    #[serde(default)]
    pub petition_reader: Option<Person>,
    #[serde(default)]
    pub petitions_read_by_second_reader: Option<bool>,
    /// Newline-separated petitions.
    #[serde(default)]
    pub petitions: Option<String>,
}

/// How a sacrament proclaims its Gospel and titles its first reading.
#[derive(Debug, Clone, Copy)]
pub struct WordOptions<'a> {
    /// Catalog key of the first reading's heading.
    pub first_title_key: &'static str,
    pub gospel_reader: Option<&'a Person>,
    pub gospel_dialogue: bool,
    pub gospel_acclamations: bool,
}

impl LiturgyOfTheWord {
    pub fn petitions_config(&self) -> PetitionsSectionConfig<'_> {
        PetitionsSectionConfig {
            petitions: self.petitions.as_deref(),
            petition_reader: self.petition_reader.as_ref(),
            second_reader: self.second_reader.as_ref(),
            petitions_read_by_second_reader: self.petitions_read_by_second_reader.unwrap_or(false),
        }
    }

    /// The "Sacred Liturgy" block of a summary page.
    pub fn summary_rows(&self, language: Language) -> Vec<ContentElement> {
        let t = |key: &'static str| translate(key, language);
        let pericope = |label: &str, reading: &Option<Reading>| {
            reading.as_ref().map(|reading| {
                ContentElement::info_row(label, non_empty(&reading.pericope).unwrap_or_default())
            })
        };

        let mut elements = vec![ContentElement::section_title(t("liturgy.sacred"))];
        elements.extend(pericope(t("liturgy.first_reading"), &self.first_reading));
        elements.extend(person_row(t("liturgy.first_reader"), self.first_reader.as_ref()));
        elements.extend(pericope(t("liturgy.psalm"), &self.psalm));
        if self.psalm_is_sung.unwrap_or(false) {
            elements.push(ContentElement::info_row(t("liturgy.psalm_choice"), t("psalm.sung")));
        } else {
            elements.extend(person_row(t("liturgy.psalm_reader"), self.psalm_reader.as_ref()));
        }
        elements.extend(pericope(t("liturgy.second_reading"), &self.second_reading));
        elements.extend(person_row(t("liturgy.second_reader"), self.second_reader.as_ref()));
        elements.extend(pericope(t("liturgy.gospel"), &self.gospel_reading));
        elements.extend(person_row(
            t("liturgy.petitions_reader"),
            self.petitions_config().reader(),
        ));
        elements
    }

    /// First reading, psalm, second reading, Gospel and petitions, in that
    /// order. The first reading is always printed; the others only when
    /// chosen.
    pub fn build_sections(&self, options: &WordOptions, language: Language) -> Vec<Option<ContentSection>> {
        let t = |key: &'static str| translate(key, language);

        let first = ReadingSectionConfig {
            id: "first-reading",
            title: t(options.first_title_key),
            reading: self.first_reading.as_ref(),
            reader: self.first_reader.as_ref(),
            response_text: Some(t("reading.thanks_be_to_god")),
            show_none_selected: true,
            ..Default::default()
        };
        let psalm = PsalmSectionConfig {
            psalm: self.psalm.as_ref(),
            psalm_reader: self.psalm_reader.as_ref(),
            psalm_is_sung: self.psalm_is_sung.unwrap_or(false),
        };
        let second = ReadingSectionConfig {
            id: "second-reading",
            title: t("reading.second_title"),
            reading: self.second_reading.as_ref(),
            reader: self.second_reader.as_ref(),
            response_text: Some(t("reading.thanks_be_to_god")),
            page_break_before: self.second_reading.is_some(),
            ..Default::default()
        };
        let gospel = ReadingSectionConfig {
            id: "gospel",
            title: t("reading.gospel_title"),
            reading: self.gospel_reading.as_ref(),
            reader: options.gospel_reader,
            include_gospel_dialogue: options.gospel_dialogue,
            include_gospel_acclamations: options.gospel_acclamations,
            page_break_before: self.gospel_reading.is_some(),
            ..Default::default()
        };

        vec![
            Some(build_reading_section(&first, language)),
            present(build_psalm_section(&psalm, language)),
            present(build_reading_section(&second, language)),
            present(build_reading_section(&gospel, language)),
            build_petitions_section(&self.petitions_config(), language),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            full_name: Some(name.into()),
            ..Default::default()
        }
    }

    fn petition_texts(section: &ContentSection) -> Vec<&str> {
        section
            .elements
            .iter()
            .filter_map(|e| match e {
                ContentElement::Petition { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_petitions_lines() {
        let reader = person("Ana Ruiz");
        let config = PetitionsSectionConfig {
            petitions: Some("For the Church.\n\n  For peace in the world  \nFor the sick"),
            petition_reader: Some(&reader),
            ..Default::default()
        };
        let section = build_petitions_section(&config, Language::English).unwrap();
        assert_eq!(
            petition_texts(&section),
            vec![
                "The response is \"Lord, hear our prayer.\" [Pause]",
                "For the Church, let us pray to the Lord.",
                "For peace in the world, let us pray to the Lord.",
                "For the sick, let us pray to the Lord.",
            ]
        );
        assert_eq!(
            section.elements[1],
            ContentElement::ReaderName { text: "Ana Ruiz".into() }
        );
        let responses = section
            .elements
            .iter()
            .filter(|e| matches!(e, ContentElement::Response { text, .. } if text == "Lord, hear our prayer."))
            .count();
        assert_eq!(responses, 3);
        assert!(section.page_break_before);
    }

    #[test]
    fn test_petitions_spanish() {
        let config = PetitionsSectionConfig {
            petitions: Some("Por la Iglesia."),
            ..Default::default()
        };
        let section = build_petitions_section(&config, Language::Spanish).unwrap();
        assert_eq!(petition_texts(&section)[1], "Por la Iglesia, roguemos al Señor.");
        assert_eq!(
            section.elements.last(),
            Some(&ContentElement::Response {
                label: "Asamblea:".into(),
                text: "Te rogamos, óyenos.".into()
            })
        );
        // No reader: title, spacer, intro.
        assert_eq!(section.elements[1], ContentElement::spacer(SpacerSize::Medium));
    }

    #[test]
    fn test_petitions_reader_selection() {
        let second = person("Second Reader");
        let petitioner = person("Petition Reader");
        let mut config = PetitionsSectionConfig {
            petitions: Some("For all"),
            petition_reader: Some(&petitioner),
            second_reader: Some(&second),
            petitions_read_by_second_reader: true,
        };
        let section = build_petitions_section(&config, Language::English).unwrap();
        assert_eq!(section.elements[1], ContentElement::ReaderName { text: "Second Reader".into() });

        config.petitions_read_by_second_reader = false;
        let section = build_petitions_section(&config, Language::English).unwrap();
        assert_eq!(section.elements[1], ContentElement::ReaderName { text: "Petition Reader".into() });

        config.petitions_read_by_second_reader = true;
        config.second_reader = None;
        let section = build_petitions_section(&config, Language::English).unwrap();
        assert_eq!(section.elements[1], ContentElement::ReaderName { text: "Petition Reader".into() });
    }

    #[test]
    fn test_no_petitions() {
        assert!(build_petitions_section(&PetitionsSectionConfig::default(), Language::English).is_none());
        let blank = PetitionsSectionConfig { petitions: Some(""), ..Default::default() };
        assert!(build_petitions_section(&blank, Language::English).is_none());
    }

    #[test]
    fn test_announcements() {
        assert!(build_announcements_section(None, Language::English).is_none());
        let section = build_announcements_section(Some("Bake sale Sunday"), Language::Spanish).unwrap();
        assert_eq!(section.id, "announcements");
        assert_eq!(section.elements[0], ContentElement::section_title("Anuncios"));
    }

    #[test]
    fn test_gospel_reading() {
        let gospel = Reading {
            pericope: Some("Luke 2:1-14".into()),
            text: Some("In those days a decree went out...".into()),
            conclusion: Some("The Gospel of the Lord.".into()),
            ..Default::default()
        };
        let config = ReadingSectionConfig {
            id: "gospel",
            title: "Gospel",
            reading: Some(&gospel),
            include_gospel_dialogue: true,
            include_gospel_acclamations: true,
            ..Default::default()
        };
        let section = build_reading_section(&config, Language::English);
        assert_eq!(
            section.elements,
            vec![
                ContentElement::ReadingTitle { text: "Gospel".into() },
                ContentElement::Pericope { text: "Luke 2:1-14".into() },
                ContentElement::priest_dialogue("Priest: The Lord be with you."),
                people_response("And with your spirit.", Language::English),
                people_response("Glory to you, O Lord.", Language::English),
                ContentElement::ReadingText { text: "In those days a decree went out...".into() },
                ContentElement::Conclusion { text: "The Gospel of the Lord.".into() },
                people_response("Praise to you, Lord Jesus Christ.", Language::English),
            ]
        );
    }

    #[test]
    fn test_reading_defaults() {
        let empty = Reading::default();
        let lector = person("Tom Lee");
        let config = ReadingSectionConfig {
            id: "first-reading",
            title: "First Reading",
            reading: Some(&empty),
            reader: Some(&lector),
            response_text: Some("Thanks be to God."),
            page_break_before: true,
            ..Default::default()
        };
        let section = build_reading_section(&config, Language::English);
        assert!(section.page_break_before);
        assert_eq!(section.elements[1], ContentElement::Pericope { text: "No pericope".into() });
        assert_eq!(section.elements[2], ContentElement::ReaderName { text: "Tom Lee".into() });
        assert_eq!(section.elements[3], ContentElement::ReadingText { text: "No reading text".into() });

        let none = ReadingSectionConfig {
            id: "second-reading",
            show_none_selected: true,
            ..Default::default()
        };
        let section = build_reading_section(&none, Language::English);
        assert_eq!(section.elements, vec![ContentElement::text("None Selected")]);
        let hidden = ReadingSectionConfig { id: "x", ..Default::default() };
        assert!(build_reading_section(&hidden, Language::English).elements.is_empty());
    }

    #[test]
    fn test_psalm() {
        let psalm = Reading {
            pericope: Some("Psalm 96".into()),
            text: Some("Today is born our Savior".into()),
            ..Default::default()
        };
        let cantor = person("Cantor");
        let config = PsalmSectionConfig {
            psalm: Some(&psalm),
            psalm_reader: Some(&cantor),
            psalm_is_sung: true,
        };
        let section = build_psalm_section(&config, Language::English);
        assert!(section.page_break_before);
        assert_eq!(section.elements[2], ContentElement::ReaderName { text: "Sung".into() });

        let section = build_psalm_section(&PsalmSectionConfig::default(), Language::English);
        assert!(!section.page_break_before);
        assert!(section.elements.is_empty());
    }
}
