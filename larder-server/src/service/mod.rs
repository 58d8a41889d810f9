//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between the store and the request validators.

pub mod recipe;
pub mod validation;

// Re-export for convenience
pub use recipe as recipe_service;
