//! In-memory photo gallery.
//!
//! A [`Gallery`] is an ordered, doubly traversable list of named photos with
//! a viewing cursor. Photos are appended at the tail, removed by name, and
//! browsed one step at a time in either direction.
//!
//! # Modules
//!
//! - [`error`] — [`GalleryError`] and the [`GalleryResult`] alias
//! - [`config`] — [`GalleryConfig`]: name limit and cursor wrap-around
//! - [`entry`] — [`Entry`] and name truncation
//! - [`gallery`] — the arena-backed [`Gallery`] itself

pub mod config;
pub mod entry;
pub mod error;
pub mod gallery;

pub use config::{GalleryConfig, DEFAULT_MAX_NAME_CHARS};
pub use entry::{truncate_name, Entry};
pub use error::{GalleryError, GalleryResult};
pub use gallery::{Direction, Gallery, GallerySnapshot, Iter};
