//! Data Transfer Objects
//!
//! This module contains DTOs exchanged between the Larder server and its
//! clients. DTOs are the wire shapes of requests and responses; domain types
//! never carry transport concerns such as links.

pub mod recipe;
