//! Shabbat times server.
//!
//! A small JSON API that answers: "When does Shabbat start and end this week
//! in this city?" by asking Hebcal and reshaping its response.

pub mod config;
pub mod domain;
pub mod hebcal;
pub mod web;
