//! script.rs
//!
//! Turns an editable script into HTML sections ready for printing.
//!
//! A text section goes through placeholder substitution twice, so that a
//! field value which itself contains placeholders (a reading body quoting
//! `{{first_reader.full_name}}`, for instance) is expanded as well, and is
//! then sanitized. Placeholders nested a third level deep are left as
//! written. A petition section ignores its own content and prints the
//! event's petitions instead.
//!
//! Sections come out in the order they went in, one for one. The `order`
//! field is copied through but never used for sorting.

use crate::catalog::Language;
use crate::config::RenderConfig;
use crate::date::{format_date_spanish, DateFormatter};
use crate::model::{FieldValue, MasterEvent, ProcessedSection, Script, ScriptSection, SectionType};
use crate::placeholders::{render_red_text, replace_field_placeholders};
use crate::sanitize::sanitize;

/// Number of substitution passes applied to a text section.
pub const SUBSTITUTION_PASSES: usize = 2;

const NO_PETITIONS_CONFIGURED: &str = "<p><em>No petitions configured for this event.</em></p>";
const NO_PETITIONS_ADDED: &str = "<p><em>No petitions have been added to this event.</em></p>";

/// Renders scripts with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    format_date: DateFormatter,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(RenderConfig::default())
    }
}

impl Renderer {
    /// Spanish documents always use Spanish dates; otherwise `date_style`
    /// picks the wording.
    pub fn new(config: RenderConfig) -> Self {
        let format_date: DateFormatter = match config.language {
            Language::Spanish => format_date_spanish,
            Language::English => config.date_style.formatter(),
        };
        Renderer {
            config,
            format_date,
        }
    }

    /// Replaces the date formatter chosen by the configuration.
    pub fn with_date_formatter(mut self, format_date: DateFormatter) -> Self {
        self.format_date = format_date;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Substitutes placeholders in `content` and sanitizes the result.
    pub fn process_section_content(&self, content: &str, event: &MasterEvent) -> String {
        let mut html = content.to_string();
        for pass in 1..=SUBSTITUTION_PASSES {
            log::trace!("substitution pass {} on {} bytes", pass, html.len());
            html = replace_field_placeholders(&html, event, self.format_date);
        }
        let html = render_red_text(&html, self.config.red_text, &self.config.red_color);
        sanitize(&html)
    }

    /// Processes one section.
    pub fn process_section(&self, section: &ScriptSection, event: &MasterEvent) -> ProcessedSection {
        let section_type = SectionType::classify(section.section_type.as_deref());
        let html_content = match section_type {
            SectionType::Petition => petition_content(event),
            SectionType::Text => self.process_section_content(&section.content, event),
        };

        ProcessedSection {
            id: section.id.clone(),
            name: section.name.clone(),
            html_content,
            page_break_after: section.page_break_after,
            order: section.order,
            section_type,
        }
    }

    /// Processes every section of `script`, preserving input order.
    pub fn process_script(&self, script: &Script, event: &MasterEvent) -> Vec<ProcessedSection> {
        script
            .sections
            .iter()
            .map(|section| self.process_section(section, event))
            .collect()
    }
}

/// Processes `script` for `event` with the default configuration.
pub fn process_script(script: &Script, event: &MasterEvent) -> Vec<ProcessedSection> {
    Renderer::default().process_script(script, event)
}

/// Substitutes and sanitizes one section's content with the default
/// configuration.
///
/// ```
/// # use parish_liturgy::model::{FieldValue, MasterEvent, ResolvedFields};
/// # use parish_liturgy::script::process_script_section;
/// let event = MasterEvent {
///     resolved_fields: Some(
///         [
///             ("reading", FieldValue::text("<p>Read by {{lector}}</p>")),
///             ("lector", FieldValue::text("Ana")),
///         ]
///         .into_iter()
///         .collect::<ResolvedFields>(),
///     ),
///     ..Default::default()
/// };
/// assert_eq!(process_script_section("{{reading}}", &event), "<p>Read by Ana</p>");
/// ```
pub fn process_script_section(content: &str, event: &MasterEvent) -> String {
    Renderer::default().process_section_content(content, event)
}

/// HTML for a petition section: the text of the first petition field that
/// has any, sanitized but not substituted.
pub fn petition_content(event: &MasterEvent) -> String {
    let fields = match &event.resolved_fields {
        Some(fields) => fields,
        None => {
            log::debug!("event {} has no resolved fields for petitions", event.id);
            return NO_PETITIONS_CONFIGURED.to_string();
        }
    };

    let text = fields.iter().find_map(|(_, field)| match &field.value {
        FieldValue::Petition(Some(petition)) => {
            petition.text.as_deref().filter(|text| !text.is_empty())
        }
        _ => None,
    });

    match text {
        Some(text) => sanitize(text),
        None => {
            log::debug!("event {} has no petition text", event.id);
            NO_PETITIONS_ADDED.to_string()
        }
    }
}
