//! Merge statistics and the stdout report

use serde_json::Value;
use std::collections::HashMap;

use crate::collect::{dataset_type, AtlasDocument};

/// Static summary of what the expanded atlas adds
pub const ADDITIONS_SUMMARY: [&str; 4] = [
    "- Added comprehensive LiDAR sources (USGS 3DEP COPC/EPT, NOAA, ICESat-2, GEDI, OpenTopography)",
    "- Expanded SAR/radar (SRTM, TerraSAR-X, TanDEM-X, COSMO-SkyMed)",
    "- Expanded aerial imagery (UK EA, Germany DOP, USGS historical, OpenAerialMap, IGN France)",
    "- Added corresponding platforms for data access",
];

/// Number of datasets sharing one `type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub type_name: String,
    pub count: usize,
}

/// Per-source counts collected during a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Datasets taken from the original document
    pub original_datasets: usize,
    /// Datasets taken from the expanded document
    pub expanded_datasets: usize,
    /// Platforms taken from the original document
    pub original_platforms: usize,
    /// Expanded platforms appended
    pub expanded_platforms_added: usize,
    /// Expanded platforms dropped as duplicates
    pub expanded_platforms_skipped: usize,
    /// Supplemental platforms appended
    pub supplemental_added: usize,
    /// Supplemental platforms dropped as duplicates
    pub supplemental_skipped: usize,
}

impl MergeStats {
    pub fn total_datasets(&self) -> usize {
        self.original_datasets + self.expanded_datasets
    }

    pub fn total_platforms(&self) -> usize {
        self.original_platforms + self.expanded_platforms_added + self.supplemental_added
    }
}

/// Count datasets by `type`, most frequent first
///
/// Groups are created in order of first appearance and the sort is stable,
/// so equal counts keep that order.
pub fn count_by_type(datasets: &[Value]) -> Vec<TypeCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<TypeCount> = Vec::new();

    for dataset in datasets {
        let type_name = dataset_type(dataset);
        match index.get(&type_name) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(type_name.clone(), counts.len());
                counts.push(TypeCount {
                    type_name,
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Render the human-readable merge report, one line per entry
pub fn render_report(document: &AtlasDocument) -> String {
    let mut lines = vec![
        "Merge completed:".to_string(),
        format!("Total datasets: {}", document.datasets.len()),
        format!("Total platforms: {}", document.platforms.len()),
        String::new(),
        "Dataset types:".to_string(),
    ];
    lines.extend(
        count_by_type(&document.datasets)
            .into_iter()
            .map(|entry| format!("  {}: {}", entry.type_name, entry.count)),
    );
    lines.push(String::new());
    lines.push("New additions summary:".to_string());
    lines.extend(ADDITIONS_SUMMARY.iter().map(|line| line.to_string()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
