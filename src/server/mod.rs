//! JSON HTTP API over the translator

pub mod api;
