//! Observation dataset — the static, keyed collection of JWST records.
//!
//! The dataset is a JSON object mapping an opaque key (also the image file
//! stem) to an [`ObservationRecord`]. Document order is kept: it is the order
//! the gallery presents items in.
//!
//! The loader also accepts the site's JavaScript module form
//! (`const data = { ... }; export default data`), which is how the metadata
//! was shipped to the web front end.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors from loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset must be a JSON object keyed by observation id")]
    NotAnObject,

    #[error("duplicate observation key '{0}'")]
    DuplicateKey(String),
}

/// Metadata for one archived telescope observation.
///
/// All fields are display-only. Timestamps and exposure time are kept as the
/// archive wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationRecord {
    pub target_name: String,
    /// Free text, e.g. "Galaxy", "Star", "Solar System".
    pub target_classification: String,
    pub instrument_name: String,
    /// Filter designations, possibly `;`-joined.
    pub filters: String,
    pub obs_title: String,
    pub parent_obsid: String,
    pub description: String,
    /// Comma-joined tag list.
    pub keywords: String,
    pub file_name: String,
    pub start_time: String,
    pub end_time: String,
    /// `H:MM:SS.ffffff`
    pub exposure_time: String,
    pub calib_level: i64,
    pub fits_url: String,
    pub size: u64,
}

impl ObservationRecord {
    /// Individual filter designations.
    pub fn filter_list(&self) -> Vec<&str> {
        split_list(&self.filters, ';')
    }

    /// Individual keyword tags.
    pub fn keyword_list(&self) -> Vec<&str> {
        split_list(&self.keywords, ',')
    }

    /// Byte count as a short human-readable string ("12.4 MB").
    pub fn size_display(&self) -> String {
        format_bytes(self.size)
    }
}

fn split_list(s: &str, sep: char) -> Vec<&str> {
    s.split(sep)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Ordered, immutable collection of keyed observation records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<(String, ObservationRecord)>,
}

impl Dataset {
    /// Build from already-ordered entries, rejecting duplicate keys.
    pub fn from_entries(entries: Vec<(String, ObservationRecord)>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (key, _) in &entries {
            if !seen.insert(key.as_str()) {
                return Err(DatasetError::DuplicateKey(key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a dataset from JSON text, or from a JS module that wraps it.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let body = strip_module_wrapper(text).ok_or(DatasetError::NotAnObject)?;
        let raw: RawEntries = serde_json::from_str(body)?;
        let dataset = Self::from_entries(raw.0)?;
        tracing::debug!(records = dataset.len(), "parsed observation dataset");
        Ok(dataset)
    }

    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ObservationRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    /// Position of `key` in document order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObservationRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}

/// Returns the outermost `{ ... }` of `text`. Bare JSON objects pass through
/// unchanged; a `const x = {...}; export default x` wrapper is peeled off.
fn strip_module_wrapper(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Keyed entries in document order. `serde_json::Map` would sort keys unless
/// `preserve_order` is enabled, so the map is visited directly.
struct RawEntries(Vec<(String, ObservationRecord)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping observation keys to records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, ObservationRecord>()? {
                    entries.push((key, record));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "NGC1068_NIRCam_2024-01-08": {
            "target_name": "NGC1068",
            "target_classification": "Galaxy",
            "instrument_name": "NIRCAM/IMAGE",
            "filters": "F212N;F200W",
            "keywords": "galaxies, active galactic nuclei",
            "exposure_time": "0:10:44.424000",
            "calib_level": 3,
            "size": 1048576
        },
        "M82_MIRI_2023-12-30": {
            "target_name": "M82",
            "target_classification": "Galaxy"
        },
        "A_Jupiter": {
            "target_name": "Jupiter",
            "target_classification": "Solar System"
        }
    }"#;

    #[test]
    fn preserves_document_order() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        let keys: Vec<&str> = ds.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["NGC1068_NIRCam_2024-01-08", "M82_MIRI_2023-12-30", "A_Jupiter"]
        );
    }

    #[test]
    fn missing_fields_default() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        let m82 = ds.get("M82_MIRI_2023-12-30").unwrap();
        assert_eq!(m82.target_name, "M82");
        assert!(m82.filters.is_empty());
        assert_eq!(m82.calib_level, 0);
        assert_eq!(m82.size, 0);
    }

    #[test]
    fn exposure_time_kept_verbatim() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        let ngc = ds.get("NGC1068_NIRCam_2024-01-08").unwrap();
        assert_eq!(ngc.exposure_time, "0:10:44.424000");
    }

    #[test]
    fn js_module_wrapper_is_accepted() {
        let wrapped = format!("const datav7 ={SAMPLE};\nexport default datav7");
        let plain = Dataset::from_json_str(SAMPLE).unwrap();
        let from_js = Dataset::from_json_str(&wrapped).unwrap();
        assert_eq!(plain, from_js);
    }

    #[test]
    fn duplicate_key_rejected() {
        let text = r#"{"a": {"target_name": "x"}, "a": {"target_name": "y"}}"#;
        match Dataset::from_json_str(text) {
            Err(DatasetError::DuplicateKey(k)) => assert_eq!(k, "a"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn array_is_not_a_dataset() {
        assert!(Dataset::from_json_str("[1, 2, 3]").is_err());
        assert!(matches!(
            Dataset::from_json_str("no braces here"),
            Err(DatasetError::NotAnObject)
        ));
    }

    #[test]
    fn empty_object_is_empty_dataset() {
        let ds = Dataset::from_json_str("{}").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
    }

    #[test]
    fn list_helpers_split_and_trim() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        let ngc = ds.get("NGC1068_NIRCam_2024-01-08").unwrap();
        assert_eq!(ngc.filter_list(), vec!["F212N", "F200W"]);
        assert_eq!(
            ngc.keyword_list(),
            vec!["galaxies", "active galactic nuclei"]
        );
        assert_eq!(ngc.size_display(), "1.0 MB");
    }

    #[test]
    fn size_display_small_values() {
        let record = ObservationRecord {
            size: 512,
            ..Default::default()
        };
        assert_eq!(record.size_display(), "512 B");
    }

    #[test]
    fn position_follows_order() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(ds.position("A_Jupiter"), Some(2));
        assert_eq!(ds.position("missing"), None);
    }
}
