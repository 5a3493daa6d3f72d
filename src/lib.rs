//! Imagery Atlas Merge Library
//!
//! This library merges two imagery atlas documents (an original and an
//! expanded catalog of geospatial datasets and the platforms hosting them)
//! into a single document.
//!
//! # Overview
//!
//! A merge:
//!
//! 1. Concatenates the dataset lists, original first, keeping duplicates
//! 2. Unions the platform lists by `id`, the first record seen winning
//! 3. Appends a few built-in platforms whose `id` is still absent
//! 4. Writes the merged document as pretty-printed JSON
//!
//! Dataset and platform records are opaque JSON: only `id` and `type` are
//! inspected, every other field passes through unchanged and in order.
//!
//! # Usage
//!
//! ```ignore
//! use imagery_atlas_merge::{merge_atlas, render_report, MergeOptions};
//!
//! let original = // load the original AtlasDocument
//! let expanded = // load the expanded AtlasDocument
//! let result = merge_atlas(original, expanded, &MergeOptions::default())?;
//!
//! print!("{}", render_report(&result.document));
//! ```

pub mod atlas;
pub mod collect;
pub mod error;
pub mod loader;
pub mod merge;
pub mod report;
pub mod supplemental;

// Re-export main types for convenience
pub use crate::atlas::{
    merge_atlas, run, to_json_string, write_document, AtlasPaths, MergeOptions, MergeResult,
};
pub use crate::collect::{parse_document, AtlasDocument};
pub use crate::error::MergeError;
pub use crate::loader::{DocumentLoader, FilesystemLoader};
pub use crate::report::{count_by_type, render_report, MergeStats, TypeCount};
pub use crate::supplemental::{
    supplemental_platforms, PlatformRecord, EXPANDED_DOCUMENT, MERGED_DOCUMENT, ORIGINAL_DOCUMENT,
    SUPPLEMENTAL_PLATFORMS,
};
