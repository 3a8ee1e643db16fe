//! Image path derivation.
//!
//! Every gallery item's image lives at `prefix + key + extension`. The
//! derivation is plain concatenation and cannot fail; whether the file exists
//! is the renderer's concern.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "./processed_png/";
pub const DEFAULT_EXTENSION: &str = ".png";

/// Source-directory prefix and file extension for processed images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePaths {
    pub prefix: String,
    pub extension: String,
}

impl Default for ImagePaths {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ImagePaths {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Display path for the image of `key`.
    pub fn derive(&self, key: &str) -> String {
        let mut path = String::with_capacity(self.prefix.len() + key.len() + self.extension.len());
        path.push_str(&self.prefix);
        path.push_str(key);
        path.push_str(&self.extension);
        path
    }
}

/// Join a derived image path onto an asset root directory.
///
/// Derived paths are site-relative (`./processed_png/x.png` or
/// `/processed_png/x.png`), so leading `./` and `/` are dropped before joining.
pub fn resolve(asset_root: &Path, image_path: &str) -> PathBuf {
    let mut rel = image_path;
    loop {
        if let Some(rest) = rel.strip_prefix("./") {
            rel = rest;
        } else if let Some(rest) = rel.strip_prefix('/') {
            rel = rest;
        } else {
            break;
        }
    }
    asset_root.join(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_concatenates_prefix_key_extension() {
        let paths = ImagePaths::new("./processed_png/", ".png");
        assert_eq!(
            paths.derive("NGC1068_NIRCam_2024-01-08"),
            "./processed_png/NGC1068_NIRCam_2024-01-08.png"
        );
    }

    #[test]
    fn default_matches_site_layout() {
        assert_eq!(ImagePaths::default().derive("M82"), "./processed_png/M82.png");
    }

    #[test]
    fn empty_key_still_builds_a_path() {
        assert_eq!(ImagePaths::default().derive(""), "./processed_png/.png");
    }

    #[test]
    fn resolve_strips_relative_markers() {
        let root = Path::new("public");
        assert_eq!(
            resolve(root, "./processed_png/M82.png"),
            PathBuf::from("public/processed_png/M82.png")
        );
        assert_eq!(
            resolve(root, "/processed_png/M82.png"),
            PathBuf::from("public/processed_png/M82.png")
        );
        assert_eq!(resolve(root, "M82.png"), PathBuf::from("public/M82.png"));
    }
}
