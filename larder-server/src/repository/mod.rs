//! Repository Module
//!
//! Data access layer for the server. The service layer only talks to the
//! `RecipeStore` trait; which backend sits behind it is decided at startup.
//!
//! All stores are trait-based to enable testing and swapping backends.

mod memory;
mod postgres;
mod recipe;

// Re-export traits
pub use recipe::{RecipeStore, StoreError};

// Re-export implementations
pub use memory::InMemoryRecipeStore;
pub use postgres::PgRecipeStore;
