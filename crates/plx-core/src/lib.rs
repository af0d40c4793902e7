//! # plx-core
//!
//! Core types, derived analysis values, and error types for Parallax.
//!
//! This crate provides the foundational types shared across all Parallax crates:
//! - Entity structs mirroring the backend contract (projects, status, models,
//!   query analyses, history, scraped data)
//! - Status enums
//! - Derived display values (bias breakdowns, score bands, relative ages)
//! - Client route builders used as navigation targets
//! - JSON Schemas for the wire types
//! - Cross-cutting error types
//! - CLI response types

pub mod analysis;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod routes;
pub mod schema;
