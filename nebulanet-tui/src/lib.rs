//! NebulaNet TUI — terminal front end for the JWST gallery site.
//!
//! Pages:
//! 1. Home — landing header, image slider, indicator strip
//! 2. About — project description and FITS scaling notes
//! 3. Sources — reference links grouped by project module
//! 4. Telescope — pointer to the 3D telescope model

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;
