//! Shared fixtures for widget tests.

use ratatui::buffer::Buffer;

use nebulanet_core::dataset::ObservationRecord;
use nebulanet_core::gallery::GalleryItem;
use nebulanet_core::{Dataset, Gallery, ImagePaths};

pub const SAMPLE_JSON: &str = r#"{
    "NGC1068_NIRCam_2024-01-08": {
        "target_name": "NGC1068",
        "target_classification": "Galaxy",
        "instrument_name": "NIRCAM/IMAGE",
        "filters": "F212N;F200W",
        "obs_title": "Imaging the Nuclear Region",
        "exposure_time": "0:10:44.424000",
        "calib_level": 3,
        "size": 125849280
    },
    "M82_NIRCam_2023-12-30": {
        "target_name": "M82",
        "target_classification": "Galaxy",
        "instrument_name": "NIRCAM/IMAGE",
        "filters": "F164N",
        "obs_title": "Star formation in a starburst galaxy",
        "keywords": "starburst galaxies, interstellar medium"
    },
    "Jupiter_MIRI_2023-11-21": {
        "target_name": "Jupiter",
        "target_classification": "Solar System; Planet",
        "instrument_name": "MIRI/IFU",
        "filters": "CH1;CH2"
    }
}"#;

pub fn sample_gallery() -> Gallery {
    let ds = Dataset::from_json_str(SAMPLE_JSON).unwrap();
    Gallery::from_dataset(&ds, &ImagePaths::default())
}

pub fn gallery_of(len: usize) -> Gallery {
    let paths = ImagePaths::default();
    Gallery::new(
        (0..len)
            .map(|i| GalleryItem::new(format!("obs_{i}"), ObservationRecord::default(), &paths))
            .collect(),
    )
}

/// Flatten a buffer into one string, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                content.push_str(cell.symbol());
            }
        }
        content.push('\n');
    }
    content
}
