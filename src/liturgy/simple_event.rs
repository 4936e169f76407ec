//! liturgy/simple_event.rs
//!
//! Printable scripts for events that have no hand-written template. The
//! document is generated from the event type's field definitions: a cover
//! page with the event's date, time and location, then one row per field
//! in the definitions' `order`.

use serde_json::Value;

use crate::catalog::{translate, Language};
use crate::date::{format_date_for, format_time, split_datetime};
use crate::error::{Error, Result};
use crate::formatters::{format_event_date_time, format_location_name};
use crate::model::{CalendarEvent, EventType, FieldType, FieldValue, InputFieldDefinition, MasterEvent};
use crate::value::{display, is_truthy, non_empty};

use super::{ContentElement, ContentSection, DocumentKind, LiturgyDocument, SpacerSize};

pub const TEMPLATE: &str = "simple-event-script";

/// Builds the English script for `event`.
///
/// Fails when the event has no raw field values or the event type defines
/// no fields.
pub fn build_simple_event_script(event: &MasterEvent, event_type: &EventType) -> Result<LiturgyDocument> {
    build_simple_event_script_in(event, event_type, Language::English)
}

pub fn build_simple_event_script_in(
    event: &MasterEvent,
    event_type: &EventType,
    language: Language,
) -> Result<LiturgyDocument> {
    let field_values = event.field_values.as_ref().ok_or(Error::MissingFieldValues)?;
    if event_type.input_field_definitions.is_empty() {
        return Err(Error::MissingFieldDefinitions);
    }

    let sections = vec![
        build_cover_section(primary_calendar_event(event, event_type), event_type, language),
        build_details_section(event, event_type, field_values, language),
    ];

    Ok(LiturgyDocument {
        id: event.id.clone(),
        kind: DocumentKind::Event,
        language,
        template: TEMPLATE.to_string(),
        title: translate("event.script_title", language).replace("{}", &event_type.name),
        // The subtitle follows the first calendar event even when the cover
        // page shows the primary one.
        subtitle: event
            .calendar_events
            .first()
            .and_then(|ce| start_date_time(ce, language)),
        sections,
    })
}

/// The calendar event linked to the primary calendar field, else the first
/// one.
fn primary_calendar_event<'a>(event: &'a MasterEvent, event_type: &EventType) -> Option<&'a CalendarEvent> {
    let primary_field = event_type
        .input_field_definitions
        .iter()
        .find(|def| def.field_type == FieldType::CalendarEvent && def.is_primary);

    primary_field
        .and_then(|def| {
            event
                .calendar_events
                .iter()
                .find(|ce| ce.input_field_definition_id.as_deref() == Some(def.id.as_str()))
        })
        .or_else(|| event.calendar_events.first())
}

/// Date part and, unless the event lasts all day, time part of the start.
fn start_parts(calendar_event: &CalendarEvent) -> Option<(&str, Option<&str>)> {
    let start = non_empty(&calendar_event.start_datetime)?;
    let (date, time) = split_datetime(start);
    let time = time.filter(|_| calendar_event.is_all_day != Some(true));
    Some((date, time))
}

fn start_date_time(calendar_event: &CalendarEvent, language: Language) -> Option<String> {
    let (date, time) = start_parts(calendar_event)?;
    Some(format_event_date_time(Some(date), time, language))
}

fn build_cover_section(
    primary: Option<&CalendarEvent>,
    event_type: &EventType,
    language: Language,
) -> ContentSection {
    let mut elements = vec![ContentElement::EventTitle {
        text: event_type.name.clone(),
    }];

    if let Some(calendar_event) = primary {
        if let Some((date, time)) = start_parts(calendar_event) {
            elements.push(ContentElement::info_row(
                translate("event.date", language),
                format_date_for(date, language),
            ));
            if let Some(time) = time {
                elements.push(ContentElement::info_row(
                    translate("event.time", language),
                    format_time(time),
                ));
            }
        }
        let location = calendar_event.location.as_ref();
        if location.and_then(|l| non_empty(&l.name)).is_some() {
            elements.push(ContentElement::info_row(
                translate("event.location", language),
                format_location_name(location),
            ));
        }
    }

    elements.push(ContentElement::spacer(SpacerSize::Large));
    ContentSection::new("cover-page", elements)
}

fn build_details_section(
    event: &MasterEvent,
    event_type: &EventType,
    field_values: &serde_json::Map<String, Value>,
    language: Language,
) -> ContentSection {
    let mut definitions: Vec<&InputFieldDefinition> = event_type.input_field_definitions.iter().collect();
    definitions.sort_by_key(|def| def.order);

    let mut elements = Vec::new();
    for def in definitions {
        match def.field_type {
            FieldType::Spacer => {
                elements.push(ContentElement::spacer(SpacerSize::Medium));
                continue;
            }
            // Shown on the cover page.
            FieldType::CalendarEvent => continue,
            _ => {}
        }

        let raw = match field_values.get(&def.property_name) {
            Some(Value::Null) | None => continue,
            Some(raw) => raw,
        };

        elements.push(ContentElement::info_row(
            def.name.as_str(),
            format_field_value(def, raw, event, language),
        ));
    }

    ContentSection::new("custom-fields", elements).with_title(translate("event.details", language))
}

/// Display text of one field. Reference fields show their resolved record's
/// name, falling back to the raw value (usually an id).
fn format_field_value(def: &InputFieldDefinition, raw: &Value, event: &MasterEvent, language: Language) -> String {
    let resolved = event.field(&def.property_name).map(|field| &field.value);
    let name = match (def.field_type, resolved) {
        (FieldType::Person, Some(FieldValue::Person(Some(p)))) => non_empty(&p.full_name),
        (FieldType::Group, Some(FieldValue::Group(Some(g)))) => non_empty(&g.name),
        (FieldType::Location, Some(FieldValue::Location(Some(l)))) => non_empty(&l.name),
        (FieldType::ListItem, Some(FieldValue::ListItem(Some(i)))) => non_empty(&i.value),
        (FieldType::Document, Some(FieldValue::Document(Some(d)))) => non_empty(&d.file_name),
        (FieldType::Content, Some(FieldValue::Content { content: Some(c), .. })) => non_empty(&c.title),
        (FieldType::Petition, Some(FieldValue::Petition(Some(p)))) => non_empty(&p.title),
        _ => None,
    };
    if let Some(name) = name {
        return name.to_string();
    }

    let text = display(raw);
    match def.field_type {
        FieldType::Date => format_date_for(&text, language),
        FieldType::Time => format_time(&text),
        FieldType::Datetime => {
            let (date, time) = split_datetime(&text);
            format_event_date_time(Some(date), time, language)
        }
        FieldType::YesNo => {
            let key = if is_truthy(raw) { "event.yes" } else { "event.no" };
            translate(key, language).to_string()
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Content, Location, Person, ResolvedFields};
    use serde_json::json;

    fn definition(id: &str, name: &str, property: &str, field_type: FieldType, order: i64) -> InputFieldDefinition {
        InputFieldDefinition {
            id: id.into(),
            name: name.into(),
            property_name: property.into(),
            field_type,
            is_primary: false,
            order,
        }
    }

    fn baptism_type() -> EventType {
        let mut primary = definition("def-ceremony", "Ceremony", "ceremony", FieldType::CalendarEvent, 0);
        primary.is_primary = true;
        EventType {
            id: "type-1".into(),
            name: "Baptism".into(),
            input_field_definitions: vec![
                definition("def-notes", "Notes", "notes", FieldType::Text, 9),
                definition("def-child", "Child", "child", FieldType::Person, 1),
                definition("def-rehearsal", "Rehearsal", "rehearsal", FieldType::CalendarEvent, 2),
                primary,
                definition("def-gap", "", "gap", FieldType::Spacer, 3),
                definition("def-date", "Birth Date", "birth_date", FieldType::Date, 4),
                definition("def-yes", "Certificate Issued", "certificate", FieldType::YesNo, 5),
                definition("def-reading", "Reading", "reading", FieldType::Content, 6),
                definition("def-missing", "Godparent", "godparent", FieldType::Person, 7),
                definition("def-count", "Guests", "guests", FieldType::Number, 8),
            ],
        }
    }

    fn baptism_event() -> MasterEvent {
        let mut fields = ResolvedFields::new();
        fields.insert(
            "child",
            FieldValue::Person(Some(Person {
                full_name: Some("Lucas Garcia".into()),
                ..Default::default()
            })),
        );
        fields.insert(
            "reading",
            FieldValue::Content {
                content: Some(Content {
                    title: Some("Ezekiel 36".into()),
                    ..Default::default()
                }),
                raw: json!("content-1"),
            },
        );

        let field_values = json!({
            "child": "person-1",
            "birth_date": "2025-03-14",
            "certificate": false,
            "reading": "content-1",
            "godparent": null,
            "guests": 40,
            "notes": "Bring the white garment"
        });

        MasterEvent {
            id: "event-9".into(),
            resolved_fields: Some(fields),
            field_values: field_values.as_object().cloned(),
            calendar_events: vec![
                CalendarEvent {
                    input_field_definition_id: Some("def-rehearsal".into()),
                    start_datetime: Some("2025-04-25T18:00:00".into()),
                    ..Default::default()
                },
                CalendarEvent {
                    input_field_definition_id: Some("def-ceremony".into()),
                    start_datetime: Some("2025-04-26T11:30:00".into()),
                    location: Some(Location {
                        name: Some("St. Mary".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_document() {
        let doc = build_simple_event_script(&baptism_event(), &baptism_type()).unwrap();
        assert_eq!(doc.title, "Baptism Script");
        assert_eq!(doc.template, "simple-event-script");
        assert_eq!(doc.kind, DocumentKind::Event);
        assert_eq!(doc.subtitle.as_deref(), Some("April 25, 2025 at 6:00 PM"));
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections.iter().all(|s| !s.page_break_before && !s.page_break_after));
    }

    #[test]
    fn test_cover_page_uses_primary_calendar_event() {
        let doc = build_simple_event_script(&baptism_event(), &baptism_type()).unwrap();
        assert_eq!(
            doc.sections[0].elements,
            vec![
                ContentElement::EventTitle { text: "Baptism".into() },
                ContentElement::info_row("Date", "April 26, 2025"),
                ContentElement::info_row("Time", "11:30 AM"),
                ContentElement::info_row("Location", "St. Mary"),
                ContentElement::spacer(SpacerSize::Large),
            ]
        );
    }

    #[test]
    fn test_details_in_field_order() {
        let doc = build_simple_event_script(&baptism_event(), &baptism_type()).unwrap();
        let details = &doc.sections[1];
        assert_eq!(details.title.as_deref(), Some("Details"));
        assert_eq!(
            details.elements,
            vec![
                ContentElement::info_row("Child", "Lucas Garcia"),
                ContentElement::spacer(SpacerSize::Medium),
                ContentElement::info_row("Birth Date", "March 14, 2025"),
                ContentElement::info_row("Certificate Issued", "No"),
                ContentElement::info_row("Reading", "Ezekiel 36"),
                ContentElement::info_row("Guests", "40"),
                ContentElement::info_row("Notes", "Bring the white garment"),
            ]
        );
    }

    #[test]
    fn test_all_day_event_has_no_time() {
        let mut event = baptism_event();
        for ce in &mut event.calendar_events {
            ce.is_all_day = Some(true);
        }
        let doc = build_simple_event_script(&event, &baptism_type()).unwrap();
        assert_eq!(doc.subtitle.as_deref(), Some("April 25, 2025"));
        assert!(!doc.sections[0].elements.contains(&ContentElement::info_row("Time", "11:30 AM")));
    }

    #[test]
    fn test_falls_back_to_first_calendar_event() {
        let mut event_type = baptism_type();
        for def in &mut event_type.input_field_definitions {
            def.is_primary = false;
        }
        let doc = build_simple_event_script(&baptism_event(), &event_type).unwrap();
        assert_eq!(doc.sections[0].elements[1], ContentElement::info_row("Date", "April 25, 2025"));
        assert_eq!(doc.subtitle.as_deref(), Some("April 25, 2025 at 6:00 PM"));
    }

    #[test]
    fn test_unresolved_reference_shows_raw_value() {
        let mut event = baptism_event();
        event.resolved_fields = None;
        let doc = build_simple_event_script(&event, &baptism_type()).unwrap();
        assert_eq!(doc.sections[1].elements[0], ContentElement::info_row("Child", "person-1"));
    }

    #[test]
    fn test_datetime_and_time_values() {
        let event = MasterEvent {
            field_values: json!({ "starts": "2025-12-24T22:00:00", "bells": "23:45:00" })
                .as_object()
                .cloned(),
            ..Default::default()
        };
        let event_type = EventType {
            id: String::new(),
            name: "Vigil".into(),
            input_field_definitions: vec![
                definition("a", "Starts", "starts", FieldType::Datetime, 1),
                definition("b", "Bells", "bells", FieldType::Time, 2),
            ],
        };
        let doc = build_simple_event_script(&event, &event_type).unwrap();
        assert_eq!(doc.subtitle, None);
        assert_eq!(
            doc.sections[1].elements,
            vec![
                ContentElement::info_row("Starts", "December 24, 2025 at 10:00 PM"),
                ContentElement::info_row("Bells", "11:45 PM"),
            ]
        );
    }

    #[test]
    fn test_spanish_labels() {
        let doc = build_simple_event_script_in(&baptism_event(), &baptism_type(), Language::Spanish).unwrap();
        assert_eq!(doc.title, "Guion de Baptism");
        assert_eq!(doc.subtitle.as_deref(), Some("25 de abril de 2025 a las 6:00 PM"));
        assert_eq!(doc.sections[0].elements[1], ContentElement::info_row("Fecha", "26 de abril de 2025"));
        assert_eq!(doc.sections[1].title.as_deref(), Some("Detalles"));
    }

    #[test]
    fn test_input_contract() {
        let mut event = baptism_event();
        event.field_values = None;
        assert!(matches!(
            build_simple_event_script(&event, &baptism_type()),
            Err(Error::MissingFieldValues)
        ));

        let empty_type = EventType {
            id: String::new(),
            name: "Empty".into(),
            input_field_definitions: vec![],
        };
        let err = build_simple_event_script(&baptism_event(), &empty_type).unwrap_err();
        assert_eq!(err.to_string(), "event type must have input_field_definitions");
    }
}
