//! Terminal movie picker backed by the OMDb search API.
//!
//! A dropdown of fixed titles drives a detail card that looks up the
//! selected movie and shows its poster URL, title, year and IMDb id.

pub mod config;
pub mod logging;
pub mod omdb;
pub mod ui;
