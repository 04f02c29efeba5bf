//! Subcommand implementations.

/// Language table listing.
pub mod languages;

/// Translation command handler.
pub mod translate;
