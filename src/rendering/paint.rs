/// Display list for a composite: fills, title text and scaled images

use super::layout::{GridLayout, Rect};
use super::text::measure_text;
use crate::{ComposerConfig, ImageHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        rect: Rect,
        rgba: [u8; 4],
    },
    Text {
        x: i64,
        y: i64,
        text: String,
        scale: u32,
        bold: bool,
        rgba: [u8; 4],
    },
    Image {
        rect: Rect,
        image: ImageHandle,
    },
}

/// Build the paint commands for `layout`, back to front.
///
/// `title` must already have the placeholder applied.
pub fn build_display_list(
    layout: &GridLayout,
    title: &str,
    config: &ComposerConfig,
) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(layout.cells.len() + 3);

    // A fully transparent background is what a fresh canvas already holds
    if config.background[3] != 0 {
        cmds.push(PaintCommand::SolidRect {
            rect: Rect { x: 0, y: 0, width: layout.width, height: layout.height },
            rgba: config.background,
        });
    }

    cmds.push(PaintCommand::SolidRect {
        rect: layout.title_band,
        rgba: config.title_background,
    });

    let (text_w, text_h) = measure_text(title, config.title_scale, config.title_bold);
    let band = layout.title_band;
    cmds.push(PaintCommand::Text {
        x: band.x + (band.width as i64 - text_w as i64) / 2,
        y: band.y + (band.height as i64 - text_h as i64) / 2,
        text: title.to_string(),
        scale: config.title_scale,
        bold: config.title_bold,
        rgba: config.title_color,
    });

    for cell in &layout.cells {
        cmds.push(PaintCommand::Image {
            rect: cell.rect,
            image: cell.image.share(),
        });
    }

    cmds
}
