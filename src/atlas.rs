//! Main merge logic
//!
//! Combines an original and an expanded atlas document into one, then
//! tops up the platform list with the built-in supplemental records.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collect::AtlasDocument;
use crate::error::MergeError;
use crate::loader::DocumentLoader;
use crate::merge::{concat_datasets, union_by_id};
use crate::report::MergeStats;
use crate::supplemental::{
    supplemental_platforms, EXPANDED_DOCUMENT, MERGED_DOCUMENT, ORIGINAL_DOCUMENT,
};

/// Options for merging
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Append the built-in supplemental platforms after both inputs
    pub add_supplemental_platforms: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            add_supplemental_platforms: true,
        }
    }
}

/// Input and output locations for a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasPaths {
    pub original: PathBuf,
    pub expanded: PathBuf,
    pub output: PathBuf,
}

impl Default for AtlasPaths {
    fn default() -> Self {
        Self {
            original: PathBuf::from(ORIGINAL_DOCUMENT),
            expanded: PathBuf::from(EXPANDED_DOCUMENT),
            output: PathBuf::from(MERGED_DOCUMENT),
        }
    }
}

/// Result of a merge
#[derive(Debug)]
pub struct MergeResult {
    /// The merged document
    pub document: AtlasDocument,
    /// Statistics about the merge
    pub stats: MergeStats,
}

/// Merge two atlas documents
///
/// Datasets: original then expanded, duplicates kept. Platforms: original,
/// then expanded and supplemental records whose id is not yet present.
pub fn merge_atlas(
    original: AtlasDocument,
    expanded: AtlasDocument,
    options: &MergeOptions,
) -> Result<MergeResult, MergeError> {
    let mut stats = MergeStats {
        original_datasets: original.datasets.len(),
        expanded_datasets: expanded.datasets.len(),
        original_platforms: original.platforms.len(),
        ..MergeStats::default()
    };

    let datasets = concat_datasets(original.datasets, expanded.datasets);

    let mut platforms = original.platforms;
    let outcome = union_by_id(&mut platforms, expanded.platforms);
    stats.expanded_platforms_added = outcome.added;
    stats.expanded_platforms_skipped = outcome.skipped;

    if options.add_supplemental_platforms {
        let outcome = union_by_id(&mut platforms, supplemental_platforms()?);
        stats.supplemental_added = outcome.added;
        stats.supplemental_skipped = outcome.skipped;
    }

    debug!(?stats, "Merged atlas documents");

    Ok(MergeResult {
        document: AtlasDocument::new(datasets, platforms),
        stats,
    })
}

/// Serialize an atlas document to a JSON string
///
/// Pretty output uses two-space indentation.
pub fn to_json_string(document: &AtlasDocument, pretty: bool) -> Result<String, MergeError> {
    if pretty {
        Ok(serde_json::to_string_pretty(document)?)
    } else {
        Ok(serde_json::to_string(document)?)
    }
}

/// Write an atlas document to `path`, replacing any existing file
pub fn write_document(document: &AtlasDocument, path: &Path) -> Result<(), MergeError> {
    let content = to_json_string(document, true)?;
    fs::write(path, content).map_err(|e| MergeError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load both inputs, merge them and write the result
///
/// Both documents are loaded before anything is written, so a missing or
/// malformed input never produces an output file. Relative output paths
/// are resolved by the caller.
pub fn run(
    loader: &dyn DocumentLoader,
    paths: &AtlasPaths,
    options: &MergeOptions,
) -> Result<MergeResult, MergeError> {
    let original = loader.load(&paths.original)?;
    let expanded = loader.load(&paths.expanded)?;

    let result = merge_atlas(original, expanded, options)?;

    write_document(&result.document, &paths.output)?;
    debug!(
        "Wrote merged atlas to {} ({} datasets, {} platforms)",
        paths.output.display(),
        result.document.datasets.len(),
        result.document.platforms.len()
    );

    Ok(result)
}
