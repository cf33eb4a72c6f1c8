//! catalog
//!
//! This crate models the review catalog: games, the reviews written
//! about them, and the authors of those reviews, along with the
//! [`Library`] service that stores them.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::useless_conversion,
    clippy::unwrap_used,
    clippy::todo,
    clippy::unimplemented
)]

pub mod authors;
pub mod dataset;
pub mod games;
pub mod library;
pub mod memory;
pub mod reviews;

pub use dataset::{Dataset, DatasetError};
pub use library::Library;
pub use memory::MemoryLibrary;
