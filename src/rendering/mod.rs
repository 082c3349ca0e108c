//! Rendering pipeline: layout -> display list -> raster -> PNG

pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

pub use layout::{layout_grid, rendered_width, CellPlacement, GridLayout, Rect};
pub use paint::{build_display_list, PaintCommand};
pub use raster::{encode_png, rasterize};

use image::RgbaImage;

use crate::{ComposerConfig, Result, SlotGrid};

/// Run the whole pipeline for `slots` under an already-resolved `title`.
pub fn render_grid(slots: &SlotGrid, title: &str, config: &ComposerConfig) -> Result<RgbaImage> {
    let layout = layout_grid(slots, config)?;
    let commands = build_display_list(&layout, title, config);
    Ok(rasterize(layout.width, layout.height, &commands, config.filter))
}
