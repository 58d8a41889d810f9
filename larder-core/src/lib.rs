//! Larder Core
//!
//! Core types and abstractions for the Larder recipe service.
//!
//! This crate contains:
//! - Domain types: Core business entities (Recipe, Link)
//! - DTOs: Data transfer objects exchanged with clients
//! - Identifier generation and hypermedia link composition

pub mod domain;
pub mod dto;
pub mod id;
pub mod links;
