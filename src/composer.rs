//! `GridComposer`: the slot grid plus on-demand composition

use chrono::{Local, NaiveDateTime};
use image::RgbaImage;
use log::{debug, info};

use crate::async_api::decode_image_async;
use crate::filename::{effective_title, suggested_file_name};
use crate::rendering::{encode_png, render_grid};
use crate::{decode_image, ComposerConfig, Error, ImageHandle, Result, SlotGrid, SLOT_COUNT};

/// A rendered composite, ready for download
#[derive(Debug, Clone)]
pub struct Composite {
    pub width: u32,
    pub height: u32,
    /// PNG-encoded canvas
    pub png_data: Vec<u8>,
    /// `{title}_{YYYYMMDD}_{HHmm}.png`
    pub file_name: String,
}

/// Owns the fifty slots and renders them under a title.
///
/// Every operation either completes or leaves the grid untouched. Nothing is
/// cached between compositions; each one is computed from the current slots.
#[derive(Debug, Clone)]
pub struct GridComposer {
    config: ComposerConfig,
    slots: SlotGrid,
}

impl Default for GridComposer {
    fn default() -> Self {
        Self {
            config: ComposerConfig::default(),
            slots: SlotGrid::new(),
        }
    }
}

impl GridComposer {
    pub fn new(config: ComposerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, slots: SlotGrid::new() })
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn slots(&self) -> &SlotGrid {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&ImageHandle> {
        self.slots.get(index)
    }

    /// Put `image` into an empty slot
    pub fn place(&mut self, index: usize, image: ImageHandle) -> Result<()> {
        self.slots.place(index, image)
    }

    /// Fails unless `index` is an empty slot inside the grid
    pub fn check_vacant(&self, index: usize) -> Result<()> {
        if index >= SLOT_COUNT {
            return Err(Error::SlotOutOfRange(index));
        }
        if self.slots.is_occupied(index) {
            return Err(Error::SlotOccupied(index));
        }
        Ok(())
    }

    /// Decode `bytes` and place the result.
    ///
    /// The slot is checked before decoding so an occupied or out-of-range
    /// slot never pays for a decode.
    pub fn place_bytes(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        self.check_vacant(index)?;
        let image = decode_image(bytes)?;
        self.slots.place(index, image)
    }

    /// `place_bytes` with the decode running on tokio's blocking pool
    pub async fn place_bytes_async(&mut self, index: usize, bytes: Vec<u8>) -> Result<()> {
        self.check_vacant(index)?;
        let image = decode_image_async(bytes).await?;
        self.slots.place(index, image)
    }

    /// Copy the image at `index` into `index + 1`; returns the target slot
    pub fn duplicate(&mut self, index: usize) -> Result<usize> {
        self.slots.duplicate(index)
    }

    /// Clear a slot; clearing an empty slot is a no-op
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.slots.remove(index).map(|_| ())
    }

    /// Whether composition is possible
    pub fn has_any_image(&self) -> bool {
        self.slots.has_any_image()
    }

    /// Remove every image
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Render the canvas without encoding it
    pub fn render(&self, title: &str) -> Result<RgbaImage> {
        let title = effective_title(title, &self.config.placeholder_title);
        render_grid(&self.slots, title, &self.config)
    }

    /// Compose using the local wall clock for the file name
    pub fn compose(&self, title: &str) -> Result<Composite> {
        self.compose_at(title, Local::now().naive_local())
    }

    /// Compose with an explicit timestamp for the file name
    pub fn compose_at(&self, title: &str, timestamp: NaiveDateTime) -> Result<Composite> {
        let title = effective_title(title, &self.config.placeholder_title);
        let canvas = render_grid(&self.slots, title, &self.config)?;
        let png_data = encode_png(&canvas)?;
        let file_name = suggested_file_name(title, timestamp);
        info!(
            "composed {} images into {}x{} ({} bytes) as {}",
            self.slots.occupied_count(),
            canvas.width(),
            canvas.height(),
            png_data.len(),
            file_name
        );
        debug!("title {:?}", title);
        Ok(Composite {
            width: canvas.width(),
            height: canvas.height(),
            png_data,
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn new_rejects_bad_config() {
        let cfg = ComposerConfig { title_scale: 0, ..Default::default() };
        assert!(GridComposer::new(cfg).is_err());
    }

    #[test]
    fn new_rejects_canvas_taller_than_limit() {
        let cfg = ComposerConfig { target_height: 1_000_000_000, ..Default::default() };
        assert!(matches!(GridComposer::new(cfg), Err(Error::ConfigError(_))));
        let cfg = ComposerConfig { target_height: 7_000, ..Default::default() };
        assert!(matches!(GridComposer::new(cfg), Err(Error::ConfigError(_))));
    }

    #[test]
    fn place_bytes_checks_slot_before_decoding() {
        let mut c = GridComposer::default();
        c.place(0, ImageHandle::new(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]))).unwrap())
            .unwrap();
        // garbage bytes, but the occupied slot is reported first
        assert_eq!(c.place_bytes(0, b"nope"), Err(Error::SlotOccupied(0)));
        assert_eq!(c.place_bytes(50, b"nope"), Err(Error::SlotOutOfRange(50)));
        assert!(matches!(c.place_bytes(1, b"nope"), Err(Error::InvalidImageData(_))));
        assert!(!c.slots().is_occupied(1));
    }

    #[tokio::test]
    async fn async_placement_checks_slot_first() {
        let mut c = GridComposer::default();
        c.place(4, ImageHandle::new(RgbaImage::new(2, 2)).unwrap()).unwrap();
        assert_eq!(c.place_bytes_async(4, b"nope".to_vec()).await, Err(Error::SlotOccupied(4)));
        assert_eq!(c.place_bytes_async(60, Vec::new()).await, Err(Error::SlotOutOfRange(60)));
        assert!(matches!(
            c.place_bytes_async(5, b"nope".to_vec()).await,
            Err(Error::InvalidImageData(_))
        ));
        assert_eq!(c.check_vacant(5), Ok(()));
    }

    #[test]
    fn render_uses_placeholder_for_empty_title() {
        let mut c = GridComposer::default();
        c.place(0, ImageHandle::new(RgbaImage::new(100, 100)).unwrap()).unwrap();
        let with_placeholder = c.render("").unwrap();
        let explicit = c.render("Untitled").unwrap();
        assert_eq!(with_placeholder, explicit);
    }
}
