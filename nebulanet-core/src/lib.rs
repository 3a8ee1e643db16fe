//! NebulaNet Core — observation dataset, image paths, gallery engine, site pages.
//!
//! - [`dataset`]: keyed JWST observation records, loaded in document order
//! - [`paths`]: `prefix + key + extension` image path derivation
//! - [`gallery`]: cyclic carousel state with a single active index and the
//!   render projection shared by the slider and indicator views
//! - [`site`]: routes and static page content
//! - [`layout`]: wide vs compact presentation
//! - [`config`]: TOML site configuration

pub mod config;
pub mod dataset;
pub mod gallery;
pub mod layout;
pub mod paths;
pub mod site;

pub use config::{ConfigError, SiteConfig};
pub use dataset::{Dataset, DatasetError, ObservationRecord};
pub use gallery::{Gallery, GalleryItem, GalleryView, JumpOutcome};
pub use layout::{LayoutConfig, LayoutMode};
pub use paths::ImagePaths;
pub use site::Route;
