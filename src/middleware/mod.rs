//! Request extractors shared across handlers.

pub mod origin;
