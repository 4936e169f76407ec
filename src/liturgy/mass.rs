//! liturgy/mass.rs
//!
//! The full Mass script: a summary page, the order of Mass from the
//! entrance procession to the homily, the petitions and the announcements.
//!
//! The English and Spanish documents are produced by the same code. The
//! fixed parts of the rite are listed once in [`INTRODUCTORY_RITES`] and
//! [`PENITENTIAL_ACT_TO_GOSPEL`] as catalog keys, and every label comes from
//! the message catalog.

use serde::Deserialize;

use crate::catalog::{translate, Language};
use crate::formatters::{format_location_with_address, format_person_name};
use crate::model::Person;
use crate::value::non_empty;

use super::shared::{
    build_announcements_section, build_petitions_section, ParishEvent, PetitionsSectionConfig,
};
use super::{assemble_sections, ContentElement, ContentSection, DocumentKind, LiturgyDocument};

//-----------------------------------
// Input record
//-----------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LiturgicalEventData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub liturgical_season: Option<String>,
}

/// A day of the liturgical calendar (e.g. "Nativity of the Lord").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LiturgicalEvent {
    #[serde(default)]
    pub event_data: Option<LiturgicalEventData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MassIntention {
    #[serde(default)]
    pub mass_offered_for: Option<String>,
    #[serde(default)]
    pub requested_by: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MassRole {
    #[serde(default)]
    pub name: Option<String>,
}

/// A liturgical role (lector, server, ...) and who fills it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoleAssignment {
    #[serde(default)]
    pub role: Option<MassRole>,
    #[serde(default)]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Mass {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub event: Option<ParishEvent>,
    #[serde(default)]
    pub liturgical_event: Option<LiturgicalEvent>,
    #[serde(default)]
    pub liturgical_color: Option<String>,
    #[serde(default)]
    pub presider: Option<Person>,
    #[serde(default)]
    pub homilist: Option<Person>,
    #[serde(default)]
    pub pre_mass_announcement_person: Option<Person>,
    #[serde(default)]
    pub pre_mass_announcement_topic: Option<String>,
    #[serde(default)]
    pub announcements: Option<String>,
    /// Newline-separated petitions.
    #[serde(default)]
    pub petitions: Option<String>,
    #[serde(default)]
    pub mass_intention: Option<MassIntention>,
    #[serde(default)]
    pub role_assignments: Vec<RoleAssignment>,
}

impl Mass {
    /// The homilist when one is set and is not the presider.
    fn distinct_homilist(&self) -> Option<&Person> {
        let presider_id = self.presider.as_ref().and_then(|p| p.id.as_deref());
        self.homilist
            .as_ref()
            .filter(|homilist| homilist.id.as_deref() != presider_id)
    }
}

//-----------------------------------
// Order of Mass
//-----------------------------------

/// A fixed line of the rite, by catalog key.
#[derive(Debug, Clone, Copy)]
enum Line {
    Heading(&'static str),
    Rubric(&'static str),
    Priest(&'static str),
    People(&'static str),
}

impl Line {
    fn element(self, language: Language) -> ContentElement {
        match self {
            Line::Heading(key) => ContentElement::section_title(translate(key, language)),
            Line::Rubric(key) => ContentElement::rubric(translate(key, language)),
            Line::Priest(key) => ContentElement::priest_dialogue(translate(key, language)),
            Line::People(key) => ContentElement::text(translate(key, language)),
        }
    }
}

/// From the procession to the greeting.
static INTRODUCTORY_RITES: &[Line] = &[
    Line::Heading("rites.introductory"),
    Line::Rubric("rites.procession"),
    Line::Heading("rites.entrance_hymn"),
    Line::Rubric("rites.entrance_hymn_rubric"),
    Line::Heading("rites.greeting"),
    Line::Priest("rites.sign_of_cross"),
    Line::People("rites.amen"),
    Line::Priest("rites.grace"),
    Line::People("rites.and_with_your_spirit"),
];

/// From the penitential act to the proclamation of the Gospel.
static PENITENTIAL_ACT_TO_GOSPEL: &[Line] = &[
    Line::Heading("rites.penitential_act"),
    Line::Priest("rites.penitential_invitation"),
    Line::Rubric("rites.pause_silence"),
    Line::Priest("rites.confiteor"),
    Line::Priest("rites.absolution"),
    Line::People("rites.amen"),
    Line::Heading("rites.gloria"),
    Line::Rubric("rites.gloria_rubric"),
    Line::Heading("rites.collect"),
    Line::Priest("rites.let_us_pray"),
    Line::Rubric("rites.pause_prayer"),
    Line::Rubric("rites.collect_rubric"),
    Line::Heading("word.title"),
    Line::Heading("word.first_reading"),
    Line::Rubric("word.first_reading_rubric"),
    Line::Heading("word.psalm"),
    Line::Rubric("word.psalm_rubric"),
    Line::Heading("word.second_reading"),
    Line::Rubric("word.second_reading_rubric"),
    Line::Heading("word.acclamation"),
    Line::Rubric("word.all_stand"),
    Line::People("word.alleluia"),
    Line::Heading("word.gospel"),
    Line::Priest("word.lord_be_with_you"),
    Line::People("rites.and_with_your_spirit"),
    Line::Rubric("word.gospel_rubric"),
];

//-----------------------------------
// Sections
//-----------------------------------

fn build_summary_section(mass: &Mass, language: Language) -> ContentSection {
    let t = |key: &'static str| translate(key, language);
    let mut elements = vec![ContentElement::section_title(t("mass.information"))];

    if let Some(event) = &mass.event {
        if non_empty(&event.start_date).is_some() {
            elements.push(ContentElement::info_row(t("mass.date_time"), event.date_time()));
        }
        if event.location.is_some() {
            elements.push(ContentElement::info_row(
                t("mass.location"),
                format_location_with_address(event.location.as_ref()),
            ));
        }
    }

    let event_data = mass
        .liturgical_event
        .as_ref()
        .and_then(|e| e.event_data.as_ref());
    if let Some(data) = event_data {
        if let Some(name) = non_empty(&data.name) {
            let value = match non_empty(&data.liturgical_season) {
                Some(season) => format!("{} ({})", name, season),
                None => name.to_string(),
            };
            elements.push(ContentElement::info_row(t("mass.liturgical_event"), value));
        }
    }

    if let Some(color) = non_empty(&mass.liturgical_color) {
        elements.push(ContentElement::info_row(t("mass.liturgical_color"), color));
    }

    if let Some(intention) = &mass.mass_intention {
        if let Some(offered_for) = non_empty(&intention.mass_offered_for) {
            elements.push(ContentElement::info_row(t("mass.intention"), offered_for));
        }
        if intention.requested_by.is_some() {
            elements.push(ContentElement::info_row(
                t("mass.requested_by"),
                format_person_name(intention.requested_by.as_ref()),
            ));
        }
    }

    let homilist = mass.distinct_homilist();
    if mass.presider.is_some() || homilist.is_some() {
        elements.push(ContentElement::section_title(t("mass.ministers")));
        if mass.presider.is_some() {
            elements.push(ContentElement::info_row(
                t("mass.presider"),
                format_person_name(mass.presider.as_ref()),
            ));
        }
        if homilist.is_some() {
            elements.push(ContentElement::info_row(
                t("mass.homilist"),
                format_person_name(homilist),
            ));
        }
    }

    if mass.pre_mass_announcement_person.is_some() {
        elements.push(ContentElement::info_row(
            t("mass.announcer"),
            format_person_name(mass.pre_mass_announcement_person.as_ref()),
        ));
    }

    if !mass.role_assignments.is_empty() {
        elements.push(ContentElement::section_title(t("mass.roles")));
        for assignment in &mass.role_assignments {
            let role = assignment
                .role
                .as_ref()
                .and_then(|r| non_empty(&r.name))
                .unwrap_or_default();
            let person = match &assignment.person {
                Some(person) => format_person_name(Some(person)),
                None => t("mass.unassigned").to_string(),
            };
            elements.push(ContentElement::info_row(format!("{}:", role), person));
        }
    }

    ContentSection::new("summary", elements).with_title(t("mass.summary"))
}

fn build_liturgy_section(mass: &Mass, language: Language) -> ContentSection {
    let t = |key: &'static str| translate(key, language);
    let mut elements: Vec<ContentElement> = INTRODUCTORY_RITES
        .iter()
        .map(|line| line.element(language))
        .collect();

    let announcer = mass.pre_mass_announcement_person.as_ref();
    if announcer.is_some() || non_empty(&mass.announcements).is_some() {
        elements.push(ContentElement::section_title(t("rites.announcements")));
        if announcer.is_some() {
            let topic = match non_empty(&mass.pre_mass_announcement_topic) {
                Some(topic) => format!(" - {}", topic),
                None => String::new(),
            };
            elements.push(ContentElement::rubric(format!(
                "[{} {}{}]",
                t("rites.announcements_by"),
                format_person_name(announcer),
                topic
            )));
        }
    }

    elements.extend(
        PENITENTIAL_ACT_TO_GOSPEL
            .iter()
            .map(|line| line.element(language)),
    );

    elements.push(ContentElement::section_title(t("word.homily")));
    let homily_rubric = match mass.homilist.as_ref().or(mass.presider.as_ref()) {
        Some(homilist) => format!(
            "[{} {}]",
            t("word.homily_by"),
            format_person_name(Some(homilist))
        ),
        None => format!("[{}]", t("word.homily")),
    };
    elements.push(ContentElement::rubric(homily_rubric));

    ContentSection::new("liturgy", elements).with_title(t("mass.title"))
}

//-----------------------------------
// Documents
//-----------------------------------

/// Builds the full Mass script in `language`.
pub fn build_mass_script(mass: &Mass, language: Language) -> LiturgyDocument {
    let petitions = PetitionsSectionConfig {
        petitions: mass.petitions.as_deref(),
        ..Default::default()
    };

    let sections = assemble_sections(vec![
        Some(build_summary_section(mass, language)),
        Some(build_liturgy_section(mass, language)),
        build_petitions_section(&petitions, language),
        build_announcements_section(mass.announcements.as_deref(), language),
    ]);

    let template = match language {
        Language::English => "mass-full-script-english",
        Language::Spanish => "mass-full-script-spanish",
    };

    LiturgyDocument {
        id: mass.id.clone(),
        kind: DocumentKind::Mass,
        language,
        template: template.to_string(),
        title: translate("mass.title", language).to_string(),
        subtitle: None,
        sections,
    }
}

pub fn build_full_script_english(mass: &Mass) -> LiturgyDocument {
    build_mass_script(mass, Language::English)
}

pub fn build_full_script_spanish(mass: &Mass) -> LiturgyDocument {
    build_mass_script(mass, Language::Spanish)
}
