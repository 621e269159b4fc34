//! Command handlers.

pub mod generate;
pub mod provenance;
pub mod validate;
pub mod verify;
