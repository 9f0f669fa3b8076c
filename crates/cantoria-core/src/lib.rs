//! Core domain model for cantoria.
//!
//! This crate defines the song catalog data model (Song, SongDetails,
//! SongFilter), the SQLite schema, and the `Database` storage layer.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
