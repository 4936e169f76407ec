//! lib.rs
//!
//! Templating engine for parish liturgy scripts.
//!
//! Parish staff write scripts for weddings, funerals, baptisms and other
//! events in a rich-text editor, referring to event data with placeholders
//! such as `{{bride.first_name}}`, `{{parish.city_state}}` or
//! `{{groom | his | her}}`. This crate turns such a script, together with an
//! event whose fields have already been resolved by the parish application,
//! into sanitized HTML sections. It also builds the structured documents of
//! the fixed liturgies (the Mass, simple event scripts) that the print and
//! PDF exporters consume.
//!
//! # Modules
//!
//! - [`sanitize`]: strips executable markup from HTML.
//! - [`fields`]: turns one resolved field into its display string.
//! - [`placeholders`]: the `{{...}}` grammar.
//! - [`script`]: processes whole scripts, section by section.
//! - [`liturgy`]: Mass and simple event documents.
//! - [`config`]: rendering options, optionally read from TOML.
//!
//! # Usage
//!
//! ```
//! use parish_liturgy::model::{FieldValue, MasterEvent, ResolvedFields, Script, ScriptSection};
//! use parish_liturgy::process_script;
//!
//! let event = MasterEvent {
//!     id: "wedding-1".into(),
//!     resolved_fields: Some(
//!         [("couple", FieldValue::text("John and Maria"))]
//!             .into_iter()
//!             .collect::<ResolvedFields>(),
//!     ),
//!     ..Default::default()
//! };
//! let script = Script {
//!     sections: vec![ScriptSection {
//!         id: "welcome".into(),
//!         name: "Welcome".into(),
//!         content: "<p>Welcome to the wedding of {{couple}}.</p>".into(),
//!         ..Default::default()
//!     }],
//! };
//!
//! let sections = process_script(&script, &event);
//! assert_eq!(sections[0].html_content, "<p>Welcome to the wedding of John and Maria.</p>");
//! ```
//!
//! The library logs through the `log` facade and installs no logger.

pub mod catalog;
pub mod config;
pub mod date;
pub mod error;
pub mod fields;
pub mod fileio;
pub mod formatters;
pub mod liturgy;
pub mod model;
pub mod placeholders;
pub mod sanitize;
pub mod script;
pub mod value;

pub use catalog::Language;
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use fields::resolve_field_value;
pub use placeholders::replace_field_placeholders;
pub use sanitize::sanitize;
pub use script::{process_script, process_script_section, Renderer};
