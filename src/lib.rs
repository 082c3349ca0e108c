//! Gridshot
//!
//! Lay out up to fifty images in a fixed 10x5 grid under a text title and
//! render the result into a single PNG.
//!
//! # Features
//!
//! - **Slot grid**: fifty fixed slots, filled by placement or duplication of
//!   the previous slot, cleared individually
//! - **Uniform cells**: every image is scaled to the same row height and
//!   centered in a column as wide as the widest image present
//! - **Headless**: decoding, layout and rasterization are pure Rust
//!
//! # Example
//!
//! ```no_run
//! use gridshot::{ComposerConfig, GridComposer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut composer = GridComposer::new(ComposerConfig::default())?;
//! composer.place_bytes(0, &std::fs::read("cat.png")?)?;
//! composer.duplicate(0)?;
//!
//! let composite = composer.compose("Pets")?;
//! std::fs::write(&composite.file_name, &composite.png_data)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod slots;
pub use slots::{ImageHandle, SlotGrid};

pub mod decode;
pub use decode::decode_image;

// Async-friendly decode service backed by tokio's blocking pool
pub mod async_api;

pub mod rendering;

pub mod filename;

pub mod composer;
pub use composer::{Composite, GridComposer};

pub mod command;
pub use command::{Command, Outcome};

// JSON line protocol used by the `gridshot` binary
pub mod host;

/// Number of columns in the grid
pub const GRID_COLUMNS: usize = 10;
/// Number of rows in the grid
pub const GRID_ROWS: usize = 5;
/// Total number of slots
pub const SLOT_COUNT: usize = GRID_COLUMNS * GRID_ROWS;

/// Configuration for the composer
///
/// The defaults reproduce the classic layout: 100 px rows, a 50 px white
/// title band with 24 px bold black text, and a transparent background
/// behind empty cells.
///
/// # Examples
///
/// ```
/// let cfg = gridshot::ComposerConfig::default();
/// assert_eq!(cfg.target_height, 100);
/// assert_eq!(cfg.title_height, 50);
/// ```
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Height every image is scaled to, in pixels
    pub target_height: u32,
    /// Height of the title band above the grid, in pixels
    pub title_height: u32,
    /// Title used when the user supplies an empty one
    pub placeholder_title: String,
    /// Integer scale applied to the 8x8 title glyphs
    pub title_scale: u32,
    /// Whether the title is drawn bold
    pub title_bold: bool,
    /// Fill of the title band
    pub title_background: [u8; 4],
    /// Title text color
    pub title_color: [u8; 4],
    /// Fill behind the grid; empty cells show this color
    pub background: [u8; 4],
    /// Largest canvas width that will be rendered
    pub max_canvas_width: u32,
    /// Largest canvas height that will be rendered
    pub max_canvas_height: u32,
    /// Resampling filter used when scaling images into cells
    pub filter: image::imageops::FilterType,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            target_height: 100,
            title_height: 50,
            placeholder_title: "Untitled".to_string(),
            title_scale: 3,
            title_bold: true,
            title_background: [255, 255, 255, 255],
            title_color: [0, 0, 0, 255],
            background: [0, 0, 0, 0],
            max_canvas_width: 32767,
            max_canvas_height: 32767,
            filter: image::imageops::FilterType::Triangle,
        }
    }
}

impl ComposerConfig {
    /// Check that the configuration can produce a canvas
    pub fn validate(&self) -> Result<()> {
        if self.target_height == 0 {
            return Err(Error::ConfigError("target_height must be positive".into()));
        }
        if self.title_scale == 0 {
            return Err(Error::ConfigError("title_scale must be positive".into()));
        }
        if self.max_canvas_width == 0 || self.max_canvas_height == 0 {
            return Err(Error::ConfigError("canvas limits must be positive".into()));
        }
        if self.canvas_height() > self.max_canvas_height as u64 {
            return Err(Error::ConfigError(format!(
                "{} rows of {}px plus a {}px title exceed the {}px height limit",
                GRID_ROWS,
                self.target_height,
                self.title_height,
                self.max_canvas_height
            )));
        }
        Ok(())
    }

    /// Canvas height for this configuration; independent of slot contents
    pub fn canvas_height(&self) -> u64 {
        self.target_height as u64 * GRID_ROWS as u64 + self.title_height as u64
    }
}
