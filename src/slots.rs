//! Fixed-size slot collection backing the 10x5 grid

use std::sync::Arc;

use image::RgbaImage;
use log::debug;

use crate::{Error, Result, GRID_COLUMNS, SLOT_COUNT};

/// A decoded raster image.
///
/// Cloning is cheap: clones share the same pixel buffer, which is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pixels: Arc<RgbaImage>,
}

impl ImageHandle {
    /// Wrap decoded pixels. Images with a zero dimension have no aspect
    /// ratio and are rejected.
    pub fn new(pixels: RgbaImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(Error::InvalidImageData(format!(
                "image has no pixels ({}x{})",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels: Arc::new(pixels) })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// A new handle viewing the same pixel data
    pub fn share(&self) -> Self {
        Self { pixels: Arc::clone(&self.pixels) }
    }

    /// Whether both handles view the same pixel buffer
    pub fn same_pixels(&self, other: &ImageHandle) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_pixels(other) || *self.pixels == *other.pixels
    }
}

/// Row and column of a slot index
pub fn slot_position(index: usize) -> (usize, usize) {
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}

/// Exactly `SLOT_COUNT` optional images. Indices never shift: removing an
/// image leaves a hole.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: Vec<Option<ImageHandle>>,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotGrid {
    pub fn new() -> Self {
        Self { slots: vec![None; SLOT_COUNT] }
    }

    fn check(index: usize) -> Result<()> {
        if index >= SLOT_COUNT {
            return Err(Error::SlotOutOfRange(index));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_any_image()
    }

    /// The image at `index`, if any. Out-of-range indices read as empty.
    pub fn get(&self, index: usize) -> Option<&ImageHandle> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Store `image` at `index`; never overwrites.
    pub fn place(&mut self, index: usize, image: ImageHandle) -> Result<()> {
        Self::check(index)?;
        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(Error::SlotOccupied(index));
        }
        debug!("slot {}: placed {}x{} image", index, image.width(), image.height());
        *slot = Some(image);
        Ok(())
    }

    /// Copy the image at `source` into the following slot and return the
    /// target index. The copy shares pixel data with the original.
    pub fn duplicate(&mut self, source: usize) -> Result<usize> {
        Self::check(source)?;
        let image = self.get(source).ok_or(Error::EmptySlot(source))?.share();
        let target = source + 1;
        if target >= SLOT_COUNT {
            return Err(Error::NoNextSlot(source));
        }
        if self.slots[target].is_some() {
            return Err(Error::TargetOccupied(target));
        }
        debug!("slot {}: duplicated into slot {}", source, target);
        self.slots[target] = Some(image);
        Ok(target)
    }

    /// Clear `index` and return what it held. Clearing an empty slot is a
    /// no-op.
    pub fn remove(&mut self, index: usize) -> Result<Option<ImageHandle>> {
        Self::check(index)?;
        let previous = self.slots[index].take();
        if previous.is_some() {
            debug!("slot {}: removed image", index);
        }
        Ok(previous)
    }

    pub fn has_any_image(&self) -> bool {
        self.slots.iter().any(|s| s.is_some())
    }

    /// Occupied slots in index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ImageHandle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|img| (i, img)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}
