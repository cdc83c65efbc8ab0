//! HTTP handlers.

pub mod items;
