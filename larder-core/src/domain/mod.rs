//! Core domain types
//!
//! This module contains the core domain structures used across Larder crates.
//! These types are shared between the server (for persistence) and the
//! client (for display).

pub mod link;
pub mod recipe;
