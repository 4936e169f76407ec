//! liturgy/mod.rs
//!
//! Print-ready liturgy documents.
//!
//! A builder turns a sacrament or event record into a [`LiturgyDocument`]:
//! a list of [`ContentSection`]s, each an ordered list of typed
//! [`ContentElement`]s. The PDF and Word exporters of the parish
//! application decide how each element type looks; nothing here carries
//! layout beyond page breaks and spacer sizes.
//!
//! Builders:
//!
//! - [`mass`]: the full Mass script in English or Spanish.
//! - [`wedding`] and [`quinceanera`]: full ceremony scripts in English or
//!   Spanish, built around the shared Liturgy of the Word sections.
//! - [`simple_event`]: a cover page and a details page generated from an
//!   event type's field definitions.
//! - [`shared`]: reading, psalm, petitions and announcements sections used
//!   by the sacrament builders.

use serde::Serialize;

use crate::catalog::Language;

pub mod mass;
pub mod quinceanera;
pub mod shared;
pub mod simple_event;
pub mod wedding;

/// What a document was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Mass,
    Wedding,
    Quinceanera,
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiturgyDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub language: Language,
    /// Template identifier, e.g. `mass-full-script-english`.
    pub template: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub sections: Vec<ContentSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub page_break_before: bool,
    pub page_break_after: bool,
    pub elements: Vec<ContentElement>,
}

impl ContentSection {
    pub fn new(id: impl Into<String>, elements: Vec<ContentElement>) -> Self {
        ContentSection {
            id: id.into(),
            elements,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatting {
    Italic,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerSize {
    Small,
    Medium,
    Large,
}

/// One printable element. Serialized with a `type` tag such as
/// `"info-row"` or `"priest-dialogue"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentElement {
    SectionTitle { text: String },
    EventTitle { text: String },
    InfoRow { label: String, value: String },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        formatting: Vec<Formatting>,
    },
    ReadingTitle { text: String },
    Pericope { text: String },
    ReaderName { text: String },
    Introduction { text: String },
    ReadingText { text: String },
    Conclusion { text: String },
    PriestDialogue { text: String },
    /// A prayer said by the faithful, printed with its line breaks.
    PrayerText { text: String },
    /// Words spoken by the priest outside a dialogue.
    PriestText { text: String },
    Petition { label: String, text: String },
    Response { label: String, text: String },
    Spacer { size: SpacerSize },
}

impl ContentElement {
    pub fn section_title(text: impl Into<String>) -> Self {
        ContentElement::SectionTitle { text: text.into() }
    }

    pub fn info_row(label: impl Into<String>, value: impl Into<String>) -> Self {
        ContentElement::InfoRow {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ContentElement::Text {
            text: text.into(),
            formatting: Vec::new(),
        }
    }

    /// Italic text, used for rubrics.
    pub fn rubric(text: impl Into<String>) -> Self {
        ContentElement::Text {
            text: text.into(),
            formatting: vec![Formatting::Italic],
        }
    }

    pub fn priest_dialogue(text: impl Into<String>) -> Self {
        ContentElement::PriestDialogue { text: text.into() }
    }

    pub fn spacer(size: SpacerSize) -> Self {
        ContentElement::Spacer { size }
    }
}

/// Drops missing sections and sets page breaks so that every section but
/// the last is followed by one.
pub fn assemble_sections(sections: Vec<Option<ContentSection>>) -> Vec<ContentSection> {
    let mut sections: Vec<ContentSection> = sections.into_iter().flatten().collect();
    let count = sections.len();
    for (i, section) in sections.iter_mut().enumerate() {
        section.page_break_after = i + 1 < count;
    }
    sections
}

/// Drops missing sections and clears the page break after the last one.
/// Other breaks are left as each section builder set them.
pub fn join_sections(sections: Vec<Option<ContentSection>>) -> Vec<ContentSection> {
    let mut sections: Vec<ContentSection> = sections.into_iter().flatten().collect();
    if let Some(last) = sections.last_mut() {
        last.page_break_after = false;
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assemble_sections_page_breaks() {
        let mut last = ContentSection::new("c", vec![]);
        last.page_break_after = true;
        let sections = assemble_sections(vec![
            Some(ContentSection::new("a", vec![])),
            None,
            Some(ContentSection::new("b", vec![])),
            None,
            Some(last),
        ]);
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let breaks: Vec<bool> = sections.iter().map(|s| s.page_break_after).collect();
        assert_eq!(breaks, vec![true, true, false]);
    }

    #[test]
    fn test_join_sections_keeps_inner_breaks() {
        let mut summary = ContentSection::new("summary", vec![]);
        summary.page_break_after = true;
        let mut petitions = ContentSection::new("petitions", vec![]);
        petitions.page_break_before = true;
        petitions.page_break_after = true;

        let sections = join_sections(vec![
            Some(summary),
            Some(ContentSection::new("first-reading", vec![])),
            None,
            Some(petitions),
        ]);
        let breaks: Vec<(bool, bool)> = sections
            .iter()
            .map(|s| (s.page_break_before, s.page_break_after))
            .collect();
        assert_eq!(breaks, vec![(false, true), (false, false), (true, false)]);
        assert!(join_sections(vec![None]).is_empty());
    }

    #[test]
    fn test_assemble_no_sections() {
        assert!(assemble_sections(vec![None, None]).is_empty());
    }

    #[test]
    fn test_element_json_shape() {
        assert_eq!(
            serde_json::to_value(ContentElement::info_row("Presider:", "Fr. John")).unwrap(),
            json!({ "type": "info-row", "label": "Presider:", "value": "Fr. John" })
        );
        assert_eq!(
            serde_json::to_value(ContentElement::rubric("[All stand]")).unwrap(),
            json!({ "type": "text", "text": "[All stand]", "formatting": ["italic"] })
        );
        assert_eq!(
            serde_json::to_value(ContentElement::text("Amen.")).unwrap(),
            json!({ "type": "text", "text": "Amen." })
        );
        assert_eq!(
            serde_json::to_value(ContentElement::spacer(SpacerSize::Large)).unwrap(),
            json!({ "type": "spacer", "size": "large" })
        );
    }

    #[test]
    fn test_section_json_shape() {
        let section = ContentSection::new("summary", vec![]).with_title("Mass Summary");
        assert_eq!(
            serde_json::to_value(section).unwrap(),
            json!({
                "id": "summary",
                "title": "Mass Summary",
                "pageBreakBefore": false,
                "pageBreakAfter": false,
                "elements": []
            })
        );
    }
}
