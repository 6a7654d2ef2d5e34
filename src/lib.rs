//! Core library for the institute website: localization resolution and the
//! registration form submission workflow.
//!
//! The website itself (layout, routing, animation) lives elsewhere; this
//! crate owns the two pieces with real contracts:
//!
//! - `i18n`: language selection, persisted preference, and safe lookup into
//!   the nested translation tables for English, Somali and Arabic.
//! - `schema` + `dialog` + `payload` + `relay`: one generic form engine
//!   driving the seminar, workshop and program-application flows, from
//!   validation through multipart submission to the form relay.

pub mod config;
pub mod dialog;
pub mod i18n;
pub mod notify;
pub mod payload;
pub mod registration;
pub mod relay;
pub mod schema;
