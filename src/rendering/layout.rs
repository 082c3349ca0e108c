/// Grid geometry: cell width, canvas size and per-slot placement

use crate::slots::slot_position;
use crate::{ComposerConfig, Error, ImageHandle, Result, SlotGrid, GRID_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }
}

/// Where one occupied slot lands on the canvas
#[derive(Debug, Clone)]
pub struct CellPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Destination of the scaled image, already centered in its column
    pub rect: Rect,
    pub image: ImageHandle,
}

#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Uniform column width (widest rendered image)
    pub cell_width: u32,
    /// Row height (every image is scaled to exactly this)
    pub cell_height: u32,
    pub width: u32,
    pub height: u32,
    pub title_band: Rect,
    pub cells: Vec<CellPlacement>,
}

/// Width of an image scaled to `target_height` with its aspect ratio kept,
/// rounded to whole pixels and never less than one.
pub fn rendered_width(width: u32, height: u32, target_height: u32) -> u32 {
    let w = target_height as f64 * (width as f64 / height as f64);
    w.round().max(1.0) as u32
}

/// Compute the layout for the current slots.
///
/// - Column width is the widest rendered width among occupied slots
/// - Canvas is ten columns wide and five rows plus the title band tall
/// - Each image is centered horizontally inside its column
pub fn layout_grid(slots: &SlotGrid, config: &ComposerConfig) -> Result<GridLayout> {
    let target = config.target_height;
    let cell_width = slots
        .occupied()
        .map(|(_, img)| rendered_width(img.width(), img.height(), target))
        .max()
        .ok_or(Error::EmptyGrid)?;

    let width = cell_width as u64 * GRID_COLUMNS as u64;
    let height = config.canvas_height();
    if width > config.max_canvas_width as u64 || height > config.max_canvas_height as u64 {
        return Err(Error::CanvasTooLarge { width, height });
    }
    let width = width as u32;

    let cells = slots
        .occupied()
        .map(|(index, img)| {
            let (row, col) = slot_position(index);
            let w = rendered_width(img.width(), img.height(), target);
            let x = col as i64 * cell_width as i64 + (cell_width - w) as i64 / 2;
            let y = row as i64 * target as i64 + config.title_height as i64;
            CellPlacement {
                index,
                row,
                col,
                rect: Rect { x, y, width: w, height: target },
                image: img.share(),
            }
        })
        .collect();

    Ok(GridLayout {
        cell_width,
        cell_height: target,
        width,
        height: height as u32,
        title_band: Rect { x: 0, y: 0, width, height: config.title_height },
        cells,
    })
}
