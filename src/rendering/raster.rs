/// Rasterizer: executes a display list onto an RGBA canvas

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Pixel, Rgba, RgbaImage};

use super::layout::Rect;
use super::paint::PaintCommand;
use super::text::draw_text;
use crate::{Error, Result};

/// Paint `commands` in order onto a transparent `width` x `height` canvas.
pub fn rasterize(
    width: u32,
    height: u32,
    commands: &[PaintCommand],
    filter: FilterType,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { rect, rgba } => fill_rect(&mut canvas, *rect, *rgba),
            PaintCommand::Text { x, y, text, scale, bold, rgba } => {
                draw_text(&mut canvas, *x, *y, text, *scale, *bold, *rgba)
            }
            PaintCommand::Image { rect, image } => {
                let src = image.pixels();
                if src.dimensions() == (rect.width, rect.height) {
                    imageops::overlay(&mut canvas, src, rect.x, rect.y);
                } else {
                    let scaled = imageops::resize(src, rect.width, rect.height, filter);
                    imageops::overlay(&mut canvas, &scaled, rect.x, rect.y);
                }
            }
        }
    }
    canvas
}

fn fill_rect(canvas: &mut RgbaImage, rect: Rect, rgba: [u8; 4]) {
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = rect.right().clamp(0, canvas.width() as i64) as u32;
    let y1 = rect.bottom().clamp(0, canvas.height() as i64) as u32;
    let color = Rgba(rgba);
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.get_pixel_mut(x, y).blend(&color);
        }
    }
}

/// Encode the canvas as PNG
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageHandle;

    #[test]
    fn image_is_scaled_into_rect() {
        let src = ImageHandle::new(RgbaImage::from_pixel(4, 2, Rgba([0, 255, 0, 255]))).unwrap();
        let cmds = vec![PaintCommand::Image {
            rect: Rect { x: 2, y: 1, width: 8, height: 4 },
            image: src,
        }];
        let canvas = rasterize(12, 6, &cmds, FilterType::Triangle);
        assert_eq!(canvas.get_pixel(2, 1), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(9, 4), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(1, 1)[3], 0);
        assert_eq!(canvas.get_pixel(10, 4)[3], 0);
        assert_eq!(canvas.get_pixel(2, 5)[3], 0);
    }

    #[test]
    fn solid_rect_is_clipped() {
        let cmds = vec![PaintCommand::SolidRect {
            rect: Rect { x: -5, y: -5, width: 10, height: 10 },
            rgba: [255, 255, 255, 255],
        }];
        let canvas = rasterize(8, 8, &cmds, FilterType::Nearest);
        assert_eq!(canvas.get_pixel(4, 4), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn encodes_png_signature() {
        let png = encode_png(&RgbaImage::new(3, 3)).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
