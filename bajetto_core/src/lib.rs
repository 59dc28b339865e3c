//! Field validation and display formatting for the Bajetto finance client.
//!
//! Two independent halves: [`validators`] and [`form`] classify user input,
//! [`format`] renders amounts, dates and labels. Limits and display defaults
//! live in [`config`].

extern crate self as bajetto_core;

pub mod config;
pub mod errors;
pub mod form;
pub mod format;
pub mod prelude;
pub mod validators;
