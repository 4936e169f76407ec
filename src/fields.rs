//! fields.rs
//!
//! Turns a resolved field into the string that replaces its placeholder.
//!
//! Every path that has nothing to show yields the literal `"empty"`. Staff
//! see that token in the printed script and know a field still needs to be
//! filled in, so it is reproduced exactly and never localized.

use crate::date::{format_date_pretty, time_of_day, DateFormatter};
use crate::model::{FieldValue, ResolvedFieldValue};
use crate::value::{display, is_truthy, non_empty};

/// Placeholder output for missing data.
pub const EMPTY: &str = "empty";

/// Resolves `field` to its display string, optionally narrowed by a
/// property path (`{{field.path}}`), using the default date wording.
pub fn resolve_field_value(field: &ResolvedFieldValue, property_path: Option<&str>) -> String {
    resolve_field_value_with(field, property_path, format_date_pretty)
}

/// Same as [`resolve_field_value`] with an injected date formatter.
pub fn resolve_field_value_with(
    field: &ResolvedFieldValue,
    property_path: Option<&str>,
    format_date: DateFormatter,
) -> String {
    // An empty path behaves like no path.
    let property_path = property_path.filter(|p| !p.is_empty());

    let resolved = match &field.value {
        FieldValue::Person(person) => person.as_ref().and_then(|person| match property_path {
            Some(path) => person.property(path),
            None => non_empty(&person.full_name).map(str::to_string),
        }),

        FieldValue::CalendarEvent(calendar_event) => {
            calendar_event.as_ref().and_then(|ce| match property_path {
                Some("date") => ce.date_value().map(format_date),
                Some("time") => ce.time_value().and_then(time_of_day),
                Some("location") => ce
                    .location
                    .as_ref()
                    .and_then(|location| non_empty(&location.name))
                    .map(str::to_string),
                Some(path) => ce.property(path),
                None => ce.date_value().map(format_date),
            })
        }

        FieldValue::Date(raw) => {
            if is_truthy(raw) {
                Some(format_date(&display(raw)))
            } else {
                None
            }
        }

        FieldValue::Location(location) => location
            .as_ref()
            .and_then(|l| non_empty(&l.name))
            .map(str::to_string),

        FieldValue::Group(group) => group
            .as_ref()
            .and_then(|g| non_empty(&g.name))
            .map(str::to_string),

        FieldValue::ListItem(item) => item
            .as_ref()
            .and_then(|i| non_empty(&i.value))
            .map(str::to_string),

        FieldValue::Document(document) => document
            .as_ref()
            .and_then(|d| non_empty(&d.file_name))
            .map(str::to_string),

        FieldValue::Content { content, raw } => content
            .as_ref()
            .and_then(|c| non_empty(&c.body))
            .map(str::to_string)
            // Legacy inline text stored directly on the field.
            .or_else(|| is_truthy(raw).then(|| display(raw))),

        FieldValue::Petition(petition) => petition
            .as_ref()
            .and_then(|p| non_empty(&p.text))
            .map(str::to_string),

        // text, rich_text, number, yes_no, time, datetime and unknown types:
        // only null and "" count as missing, so `0` and `false` still print.
        FieldValue::Scalar { raw, .. } => match raw {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            other => Some(display(other)),
        },
    };

    resolved.unwrap_or_else(|| EMPTY.to_string())
}
