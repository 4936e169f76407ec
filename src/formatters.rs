//! formatters.rs
//!
//! Display helpers for people, places and event times, shared by the
//! liturgy document builders.

use crate::catalog::{translate, Language};
use crate::date::{format_date_for, format_time};
use crate::model::{Location, Person};
use crate::value::non_empty;

/// Full name when set, otherwise first and last name.
///
/// ```
/// # use parish_liturgy::formatters::format_person_name;
/// # use parish_liturgy::model::Person;
/// let person = Person {
///     first_name: Some("John".into()),
///     last_name: Some("Smith".into()),
///     ..Default::default()
/// };
/// assert_eq!(format_person_name(Some(&person)), "John Smith");
/// assert_eq!(format_person_name(None), "");
/// ```
pub fn format_person_name(person: Option<&Person>) -> String {
    let person = match person {
        Some(person) => person,
        None => return String::new(),
    };
    if let Some(full_name) = non_empty(&person.full_name) {
        return full_name.to_string();
    }
    [non_empty(&person.first_name), non_empty(&person.last_name)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The name followed by the phone number in parentheses, when known.
pub fn format_person_with_phone(person: Option<&Person>) -> String {
    let name = format_person_name(person);
    match person.and_then(|p| p.property("phone_number")) {
        Some(phone) => format!("{} ({})", name, phone),
        None => name,
    }
}

pub fn format_location_name(location: Option<&Location>) -> String {
    location
        .and_then(|l| non_empty(&l.name))
        .unwrap_or_default()
        .to_string()
}

/// Street, city and state, joined by `", "`, skipping blanks.
pub fn format_address(location: &Location) -> String {
    [
        non_empty(&location.street),
        non_empty(&location.city),
        non_empty(&location.state),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

/// `Name (street, city, state)`, or whichever half is present.
pub fn format_location_with_address(location: Option<&Location>) -> String {
    let location = match location {
        Some(location) => location,
        None => return String::new(),
    };
    let name = non_empty(&location.name);
    let address = format_address(location);
    match (name, address.is_empty()) {
        (Some(name), false) => format!("{} ({})", name, address),
        (Some(name), true) => name.to_string(),
        (None, _) => address,
    }
}

/// `December 25, 2025 at 10:00 AM` in English, `25 de diciembre de 2025 a
/// las 10:00 AM` in Spanish. Either half may be missing.
pub fn format_event_date_time(date: Option<&str>, time: Option<&str>, language: Language) -> String {
    let date = date.filter(|d| !d.is_empty()).map(|d| format_date_for(d, language));
    let time = time.filter(|t| !t.is_empty()).map(format_time);
    match (date, time) {
        (Some(date), Some(time)) => {
            format!("{} {} {}", date, translate("event.at", language), time)
        }
        (Some(date), None) => date,
        (None, Some(time)) => time,
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapel() -> Location {
        Location {
            name: Some("St. Joseph Chapel".into()),
            street: Some("100 Main St".into()),
            city: Some("Austin".into()),
            state: Some("TX".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_person_name_prefers_full_name() {
        let person = Person {
            full_name: Some("Fr. John Smith".into()),
            first_name: Some("John".into()),
            ..Default::default()
        };
        assert_eq!(format_person_name(Some(&person)), "Fr. John Smith");

        let first_only = Person { first_name: Some("Ana".into()), ..Default::default() };
        assert_eq!(format_person_name(Some(&first_only)), "Ana");
    }

    #[test]
    fn test_person_with_phone() {
        let mut person = Person { full_name: Some("Maria Lopez".into()), ..Default::default() };
        assert_eq!(format_person_with_phone(Some(&person)), "Maria Lopez");
        person.extra.insert("phone_number".into(), "512-555-0101".into());
        assert_eq!(format_person_with_phone(Some(&person)), "Maria Lopez (512-555-0101)");
        assert_eq!(format_person_with_phone(None), "");
    }

    #[test]
    fn test_locations() {
        let location = chapel();
        assert_eq!(format_location_name(Some(&location)), "St. Joseph Chapel");
        assert_eq!(format_address(&location), "100 Main St, Austin, TX");
        assert_eq!(
            format_location_with_address(Some(&location)),
            "St. Joseph Chapel (100 Main St, Austin, TX)"
        );

        let bare = Location { name: Some("Hall".into()), ..Default::default() };
        assert_eq!(format_location_with_address(Some(&bare)), "Hall");
        assert_eq!(format_location_with_address(None), "");
        assert_eq!(format_location_name(None), "");
    }

    #[test]
    fn test_event_date_time() {
        assert_eq!(
            format_event_date_time(Some("2025-12-25"), Some("10:00:00"), Language::English),
            "December 25, 2025 at 10:00 AM"
        );
        assert_eq!(
            format_event_date_time(Some("2025-12-25"), Some("10:00:00"), Language::Spanish),
            "25 de diciembre de 2025 a las 10:00 AM"
        );
        assert_eq!(
            format_event_date_time(Some("2025-12-25"), None, Language::English),
            "December 25, 2025"
        );
        assert_eq!(format_event_date_time(None, Some("18:30"), Language::English), "6:30 PM");
        assert_eq!(format_event_date_time(Some(""), None, Language::Spanish), "");
    }
}
