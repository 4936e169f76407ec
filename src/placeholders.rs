//! placeholders.rs
//!
//! Placeholder substitution for script content.
//!
//! # Grammar
//!
//! - `{{field}}`: the field's display value.
//! - `{{field.property}}`: a property of the referenced record, e.g.
//!   `{{bride.first_name}}` or `{{ceremony.time}}`.
//! - `{{parish.name}}`, `{{parish.city}}`, `{{parish.state}}`,
//!   `{{parish.city_state}}`: parish information.
//! - `{{field | male text | female text}}`: picks a text by the gender of
//!   the person in `field`, or prints `male text/female text` when the
//!   gender is not known.
//!
//! Anything that cannot be resolved prints `empty`. One call performs a
//! single pass over the content; nested placeholders produced by a field
//! value are handled by running the pass again (see `script.rs`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::RedText;
use crate::date::DateFormatter;
use crate::fields::{resolve_field_value_with, EMPTY};
use crate::model::{FieldValue, MasterEvent, Parish};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
    static ref RED_TEXT: Regex = Regex::new(r"\{red\}(.*?)\{/red\}").unwrap();
}

const PARISH_PREFIX: &str = "parish.";

/// A parish placeholder as offered by the editor's insert menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParishPlaceholder {
    pub key: &'static str,
    pub label: &'static str,
    pub example: &'static str,
}

/// Every parish placeholder the engine understands.
pub static PARISH_PLACEHOLDERS: [ParishPlaceholder; 4] = [
    ParishPlaceholder {
        key: "parish.name",
        label: "Parish Name",
        example: "St. Mary Catholic Church",
    },
    ParishPlaceholder {
        key: "parish.city",
        label: "Parish City",
        example: "Austin",
    },
    ParishPlaceholder {
        key: "parish.state",
        label: "Parish State",
        example: "TX",
    },
    ParishPlaceholder {
        key: "parish.city_state",
        label: "City, State",
        example: "Austin, TX",
    },
];

/// Replaces every `{{...}}` token in `content` once.
///
/// ```
/// # use parish_liturgy::model::{FieldValue, MasterEvent, ResolvedFields};
/// # use parish_liturgy::placeholders::replace_field_placeholders;
/// # use parish_liturgy::date::format_date_pretty;
/// let event = MasterEvent {
///     resolved_fields: Some(
///         [("presider", FieldValue::text("Fr. John"))].into_iter().collect::<ResolvedFields>(),
///     ),
///     ..Default::default()
/// };
/// assert_eq!(
///     replace_field_placeholders("Presider: {{presider}}, Deacon: {{deacon}}", &event, format_date_pretty),
///     "Presider: Fr. John, Deacon: empty"
/// );
/// ```
pub fn replace_field_placeholders(
    content: &str,
    event: &MasterEvent,
    format_date: DateFormatter,
) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures| {
            resolve_placeholder(&caps[1], event, format_date)
        })
        .into_owned()
}

/// Resolves the text between `{{` and `}}`.
fn resolve_placeholder(inner: &str, event: &MasterEvent, format_date: DateFormatter) -> String {
    let parts: Vec<&str> = inner.split('|').map(str::trim).collect();

    if let [field_ref, male_text, female_text] = parts[..] {
        return resolve_gendered_text(field_ref, male_text, female_text, event);
    }

    let reference = parts[0];
    if reference.starts_with(PARISH_PREFIX) {
        return resolve_parish_placeholder(reference, event.parish.as_ref());
    }

    // `.field` is a field literally named ".field", not a property path.
    let (field_name, property_path) = match reference.find('.') {
        Some(dot) if dot > 0 => (&reference[..dot], Some(&reference[dot + 1..])),
        _ => (reference, None),
    };

    match event.field(field_name) {
        Some(field) => resolve_field_value_with(field, property_path, format_date),
        None => {
            log::debug!("placeholder {{{{{}}}}} references unknown field", reference);
            EMPTY.to_string()
        }
    }
}

/// Resolves `parish.*`. Unknown keys and a missing parish print `empty`.
pub fn resolve_parish_placeholder(placeholder: &str, parish: Option<&Parish>) -> String {
    let parish = match parish {
        Some(parish) => parish,
        None => return EMPTY.to_string(),
    };
    let city = parish.city.as_deref().filter(|s| !s.is_empty());
    let state = parish.state.as_deref().filter(|s| !s.is_empty());

    let resolved = match placeholder {
        "parish.name" => parish.name.clone().filter(|s| !s.is_empty()),
        "parish.city" => city.map(str::to_string),
        "parish.state" => state.map(str::to_string),
        "parish.city_state" => match (city, state) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (city, state) => city.or(state).map(str::to_string),
        },
        _ => None,
    };
    resolved.unwrap_or_else(|| EMPTY.to_string())
}

/// Picks `male_text` or `female_text` by the gender of the person held in
/// the base field of `field_ref` (the part before any `.`). Falls back to
/// `male_text/female_text` whenever the gender cannot be determined.
pub fn resolve_gendered_text(
    field_ref: &str,
    male_text: &str,
    female_text: &str,
    event: &MasterEvent,
) -> String {
    let field_name = field_ref.split('.').next().unwrap_or(field_ref);

    let gender = event.field(field_name).and_then(|field| match &field.value {
        FieldValue::Person(Some(person)) => person.gender.as_deref(),
        _ => None,
    });

    match gender {
        Some("male") => male_text.to_string(),
        Some("female") => female_text.to_string(),
        _ => format!("{}/{}", male_text, female_text),
    }
}

/// Applies the `{red}...{/red}` rubric markup mode to `content`.
///
/// ```
/// # use parish_liturgy::config::RedText;
/// # use parish_liturgy::placeholders::render_red_text;
/// let text = "{red}All stand.{/red} Let us pray.";
/// assert_eq!(render_red_text(text, RedText::Keep, "#c41e3a"), text);
/// assert_eq!(render_red_text(text, RedText::Strip, "#c41e3a"), "All stand. Let us pray.");
/// assert_eq!(
///     render_red_text(text, RedText::Html, "#c41e3a"),
///     r#"<span style="color: #c41e3a">All stand.</span> Let us pray."#
/// );
/// ```
pub fn render_red_text(content: &str, mode: RedText, color: &str) -> String {
    match mode {
        RedText::Keep => content.to_string(),
        RedText::Strip => RED_TEXT.replace_all(content, "$1").into_owned(),
        RedText::Html => RED_TEXT
            .replace_all(content, |caps: &Captures| {
                format!(r#"<span style="color: {}">{}</span>"#, color, &caps[1])
            })
            .into_owned(),
    }
}
