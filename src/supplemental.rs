//! Built-in platform records and default file names
//!
//! These platforms are referenced by datasets in the expanded atlas but
//! are not described by either input document. They are appended after
//! both inputs have been merged, and only when their id is still absent.

use serde::Serialize;
use serde_json::Value;

use crate::error::MergeError;

/// Default file name of the original atlas document
pub const ORIGINAL_DOCUMENT: &str = "imagery-atlas-data.json";

/// Default file name of the expanded atlas document
pub const EXPANDED_DOCUMENT: &str = "imagery-atlas-data-expanded.json";

/// Default file name of the merged output
pub const MERGED_DOCUMENT: &str = "imagery-atlas-data-merged.json";

/// A platform record with the full set of descriptive fields
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub url: &'a str,
    pub catalog_url: &'a str,
    pub api_url: &'a str,
    pub api: &'a str,
    pub registration: &'a str,
    pub api_key: &'a str,
    pub rate_limit: &'a str,
    pub pricing: &'a str,
    pub formats: &'a [&'a str],
    pub description: &'a str,
    pub strengths: &'a [&'a str],
    pub limitations: &'a [&'a str],
    pub datasets: &'a [&'a str],
}

pub const SUPPLEMENTAL_PLATFORMS: [PlatformRecord<'static>; 4] = [
    PlatformRecord {
        id: "aws-terrain-tiles",
        name: "AWS Terrain Tiles",
        url: "https://registry.opendata.aws/terrain-tiles/",
        catalog_url: "https://registry.opendata.aws/terrain-tiles/",
        api_url: "S3 REST API",
        api: "S3 REST, no auth required",
        registration: "Not required",
        api_key: "Not required",
        rate_limit: "S3 limits",
        pricing: "Free",
        formats: &["PNG (Terrarium format)"],
        description: "Pre-processed SRTM elevation data as PNG tiles optimized for web mapping. Uses Terrarium encoding for elevation values.",
        strengths: &[
            "No auth required",
            "Web-optimized tiles",
            "Instant access",
            "Good for visualization",
        ],
        limitations: &[
            "Limited to SRTM data",
            "PNG format requires decoding",
            "Visualization oriented",
        ],
        datasets: &["srtm-dem-30m"],
    },
    PlatformRecord {
        id: "aws-open-data",
        name: "AWS Open Data",
        url: "https://registry.opendata.aws/",
        catalog_url: "https://registry.opendata.aws/",
        api_url: "S3 REST API",
        api: "S3 REST, various formats",
        registration: "Not required",
        api_key: "Not required",
        rate_limit: "S3 limits",
        pricing: "Free (egress charges may apply)",
        formats: &["Various"],
        description: "Registry of open datasets hosted on AWS S3. Includes many geospatial datasets with different access patterns.",
        strengths: &[
            "No auth required",
            "Multiple datasets",
            "Cloud-native access",
            "Well documented",
        ],
        limitations: &[
            "Egress charges outside AWS",
            "Various access patterns",
            "No unified API",
        ],
        datasets: &["usgs-3dep-lidar-copc", "usgs-3dep-lidar-ept"],
    },
    PlatformRecord {
        id: "copernicus-dem",
        name: "Copernicus DEM Portal",
        url: "https://spacedata.copernicus.eu/collections/copernicus-digital-elevation-model",
        catalog_url: "https://spacedata.copernicus.eu/collections/copernicus-digital-elevation-model",
        api_url: "REST API",
        api: "REST download API",
        registration: "Not required",
        api_key: "Not required",
        rate_limit: "Fair use",
        pricing: "Free",
        formats: &["GeoTIFF"],
        description: "Official Copernicus Digital Elevation Model portal providing 30m and 90m resolution DEMs based on TanDEM-X.",
        strengths: &[
            "Official EU source",
            "High quality",
            "Free access",
            "Global coverage",
        ],
        limitations: &["Manual download", "Limited API features"],
        datasets: &["tandem-x-global-dem"],
    },
    PlatformRecord {
        id: "asi-cosmo",
        name: "ASI COSMO-SkyMed",
        url: "https://www.asi.it/earth-observation/cosmo-skymed/",
        catalog_url: "https://www.asi.it/earth-observation/cosmo-skymed/",
        api_url: "Commercial access",
        api: "Commercial distribution",
        registration: "Commercial contract required",
        api_key: "Commercial access",
        rate_limit: "Commercial terms",
        pricing: "Commercial licensing",
        formats: &["HDF5", "GeoTIFF"],
        description: "Italian Space Agency portal for COSMO-SkyMed X-band SAR constellation data. Commercial access only.",
        strengths: &[
            "High resolution X-band SAR",
            "Rapid revisit (constellation)",
            "Multiple polarizations",
        ],
        limitations: &["Commercial only", "No free access", "Complex licensing"],
        datasets: &["cosmo-skymed"],
    },
];

/// The supplemental platforms as JSON records, in fixed order
pub fn supplemental_platforms() -> Result<Vec<Value>, MergeError> {
    SUPPLEMENTAL_PLATFORMS
        .iter()
        .map(|record| serde_json::to_value(record).map_err(MergeError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_supplemental_order() {
        let platforms = supplemental_platforms().unwrap();
        let ids: Vec<&str> = platforms.iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert_eq!(
            ids,
            vec!["aws-terrain-tiles", "aws-open-data", "copernicus-dem", "asi-cosmo"]
        );
    }

    #[test]
    fn test_supplemental_field_names_and_order() {
        let platforms = supplemental_platforms().unwrap();
        let keys: Vec<&String> = platforms[0].as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "name",
                "url",
                "catalogUrl",
                "apiUrl",
                "api",
                "registration",
                "apiKey",
                "rateLimit",
                "pricing",
                "formats",
                "description",
                "strengths",
                "limitations",
                "datasets",
            ]
        );
    }

    #[test]
    fn test_supplemental_record_values() {
        let platforms = supplemental_platforms().unwrap();
        let cosmo = &platforms[3];
        assert_eq!(cosmo["formats"], json!(["HDF5", "GeoTIFF"]));
        assert_eq!(cosmo["registration"], "Commercial contract required");
        assert_eq!(
            platforms[1]["datasets"],
            json!(["usgs-3dep-lidar-copc", "usgs-3dep-lidar-ept"])
        );
        assert_eq!(platforms[0]["apiKey"], "Not required");
    }
}
