//! model.rs
//!
//! In-memory records consumed by the templating engine. All of them arrive
//! already fetched and denormalized by the parish application and are read
//! only here.
//!
//! The wire shape of a resolved field is `{ field_type, raw_value,
//! resolved_value }`. On deserialization it is turned into the `FieldValue`
//! sum type, so the resolver matches exhaustively on field types instead of
//! inspecting a type string next to an untyped payload. A `resolved_value`
//! that does not decode into the referenced record is treated as absent,
//! which renders as `"empty"` like any other missing reference.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value::truthy_display;

//-----------------------------------
// Referenced records
//-----------------------------------

/// A person as denormalized into a resolved field.
///
/// Properties beyond the named ones are kept in `extra` so that
/// `{{field.some_property}}` placeholders can still reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `"male"` or `"female"` when known.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    /// Looks up a property by its column name, returning `None` for missing
    /// or falsy values.
    pub fn property(&self, name: &str) -> Option<String> {
        let named = match name {
            "id" => &self.id,
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "full_name" => &self.full_name,
            "gender" => &self.gender,
            _ => return self.extra.get(name).and_then(truthy_display),
        };
        named.clone().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An entry of a parish-defined custom list (e.g. "Wedding Songs").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// A content library entry (readings, prayers, blessings). The body is HTML
/// and may itself contain placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Petition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Petition text, already HTML.
    #[serde(default)]
    pub text: Option<String>,
}

/// A dated occurrence attached to an event (rehearsal, ceremony, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub input_field_definition_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
    #[serde(default)]
    pub is_all_day: Option<bool>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CalendarEvent {
    /// `date`, falling back to `start_datetime`.
    pub fn date_value(&self) -> Option<&str> {
        non_empty_str(&self.date).or_else(|| non_empty_str(&self.start_datetime))
    }

    /// `time`, falling back to `start_datetime`.
    pub fn time_value(&self) -> Option<&str> {
        non_empty_str(&self.time).or_else(|| non_empty_str(&self.start_datetime))
    }

    /// Looks up a scalar property by name, returning `None` for missing or
    /// falsy values.
    pub fn property(&self, name: &str) -> Option<String> {
        let named = match name {
            "id" => &self.id,
            "input_field_definition_id" => &self.input_field_definition_id,
            "date" => &self.date,
            "time" => &self.time,
            "start_datetime" => &self.start_datetime,
            "is_all_day" => return self.is_all_day.filter(|b| *b).map(|b| b.to_string()),
            _ => return self.extra.get(name).and_then(truthy_display),
        };
        named.clone().filter(|s| !s.is_empty())
    }
}

fn non_empty_str(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Parish information available to `{{parish.*}}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parish {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

//-----------------------------------
// Field types and values
//-----------------------------------

/// The admin-configurable type of an event field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Person,
    Group,
    Location,
    ListItem,
    Document,
    Text,
    RichText,
    Content,
    Petition,
    CalendarEvent,
    Date,
    Time,
    Datetime,
    Number,
    YesNo,
    #[serde(rename = "mass-intention")]
    MassIntention,
    Spacer,
    #[serde(other)]
    Unknown,
}

/// A resolved field value, one variant per kind of payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Person(Option<Person>),
    CalendarEvent(Option<CalendarEvent>),
    /// `raw_value` holds the `YYYY-MM-DD` string.
    Date(Value),
    Location(Option<Location>),
    Group(Option<Group>),
    ListItem(Option<ListItem>),
    Document(Option<Document>),
    /// Resolved content, plus the legacy inline text kept in `raw_value`.
    Content { content: Option<Content>, raw: Value },
    Petition(Option<Petition>),
    /// Primitive types (text, rich_text, number, yes_no, time, datetime, and
    /// anything unrecognized): only `raw_value` matters.
    Scalar { field_type: FieldType, raw: Value },
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Person(_) => FieldType::Person,
            FieldValue::CalendarEvent(_) => FieldType::CalendarEvent,
            FieldValue::Date(_) => FieldType::Date,
            FieldValue::Location(_) => FieldType::Location,
            FieldValue::Group(_) => FieldType::Group,
            FieldValue::ListItem(_) => FieldType::ListItem,
            FieldValue::Document(_) => FieldType::Document,
            FieldValue::Content { .. } => FieldType::Content,
            FieldValue::Petition(_) => FieldType::Petition,
            FieldValue::Scalar { field_type, .. } => *field_type,
        }
    }

    /// A text field holding `value`.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Scalar {
            field_type: FieldType::Text,
            raw: Value::String(value.into()),
        }
    }
}

/// The wire shape of a resolved field.
#[derive(Debug, Deserialize)]
struct FieldRecord {
    #[serde(default)]
    field_name: Option<String>,
    /// Missing or `null` on records saved before the type was stored.
    #[serde(default)]
    field_type: Option<FieldType>,
    #[serde(default)]
    raw_value: Value,
    #[serde(default)]
    resolved_value: Value,
}

/// Decodes a referenced record; `null` or a mismatched shape is absent.
fn decode<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(err) => {
            log::debug!("discarding undecodable resolved_value: {}", err);
            None
        }
    }
}

impl From<FieldRecord> for FieldValue {
    fn from(record: FieldRecord) -> Self {
        let FieldRecord {
            field_type,
            raw_value,
            resolved_value,
            ..
        } = record;
        match field_type.unwrap_or(FieldType::Unknown) {
            FieldType::Person => FieldValue::Person(decode(resolved_value)),
            FieldType::CalendarEvent => FieldValue::CalendarEvent(decode(resolved_value)),
            FieldType::Date => FieldValue::Date(raw_value),
            FieldType::Location => FieldValue::Location(decode(resolved_value)),
            FieldType::Group => FieldValue::Group(decode(resolved_value)),
            FieldType::ListItem => FieldValue::ListItem(decode(resolved_value)),
            FieldType::Document => FieldValue::Document(decode(resolved_value)),
            FieldType::Content => FieldValue::Content {
                content: decode(resolved_value),
                raw: raw_value,
            },
            FieldType::Petition => FieldValue::Petition(decode(resolved_value)),
            other => FieldValue::Scalar {
                field_type: other,
                raw: raw_value,
            },
        }
    }
}

/// A field of an event, resolved by the application's field-resolution
/// layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "FieldRecord")]
pub struct ResolvedFieldValue {
    pub field_name: Option<String>,
    pub value: FieldValue,
}

impl From<FieldRecord> for ResolvedFieldValue {
    fn from(record: FieldRecord) -> Self {
        let field_name = record.field_name.clone();
        ResolvedFieldValue {
            field_name,
            value: FieldValue::from(record),
        }
    }
}

impl From<FieldValue> for ResolvedFieldValue {
    fn from(value: FieldValue) -> Self {
        ResolvedFieldValue {
            field_name: None,
            value,
        }
    }
}

impl ResolvedFieldValue {
    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }
}

/// Resolved fields keyed by property name, in the order the application
/// produced them. Petition sections pick the *first* petition field, so the
/// order is significant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ResolvedFields(IndexMap<String, ResolvedFieldValue>);

impl ResolvedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedFieldValue> {
        self.0.get(name)
    }

    /// Inserts a field. Replacing an existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ResolvedFieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedFieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResolvedFields
where
    K: Into<String>,
    V: Into<ResolvedFieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ResolvedFields(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

//-----------------------------------
// Events and scripts
//-----------------------------------

/// A scheduled occurrence (Mass, baptism, OCIA session, ...) with its
/// resolved fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MasterEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub resolved_fields: Option<ResolvedFields>,
    #[serde(default)]
    pub parish: Option<Parish>,
    /// Raw field values keyed by property name.
    #[serde(default)]
    pub field_values: Option<Map<String, Value>>,
    #[serde(default)]
    pub calendar_events: Vec<CalendarEvent>,
}

impl MasterEvent {
    pub fn field(&self, name: &str) -> Option<&ResolvedFieldValue> {
        self.resolved_fields.as_ref().and_then(|fields| fields.get(name))
    }
}

/// One input field of an event type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputFieldDefinition {
    #[serde(default)]
    pub id: String,
    /// Label shown to staff, e.g. "First Reader".
    pub name: String,
    /// Template variable name, e.g. `first_reader`.
    pub property_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub order: i64,
}

/// An admin-defined event category ("Wedding", "Funeral", ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventType {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input_field_definitions: Vec<InputFieldDefinition>,
}

/// A script section as stored by the script editor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScriptSection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Categorization hint; `None` means `"text"`.
    #[serde(default)]
    pub section_type: Option<String>,
    /// HTML with `{{...}}` placeholders.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub page_break_after: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub sections: Vec<ScriptSection>,
}

/// How a processed section was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Text,
    Petition,
}

impl SectionType {
    /// `"petition"` is special; every other value, and none, is text.
    pub fn classify(section_type: Option<&str>) -> Self {
        match section_type {
            Some("petition") => SectionType::Petition,
            _ => SectionType::Text,
        }
    }
}

/// A script section ready for the print and PDF renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedSection {
    pub id: String,
    pub name: String,
    pub html_content: String,
    pub page_break_after: bool,
    pub order: i64,
    pub section_type: SectionType,
}
