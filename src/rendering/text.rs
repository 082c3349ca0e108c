/// Bitmap text for the title band.
///
/// Glyphs come from the 8x8 public-domain font sets in `font8x8`, scaled by
/// an integer factor. Bold is a second strike one pixel to the right.
/// Characters outside the covered sets render as `?`.

use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};

pub const GLYPH_SIZE: u32 = 8;

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| HIRAGANA_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Pixel size of `text` when drawn with `draw_text`
pub fn measure_text(text: &str, scale: u32, bold: bool) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let advance = GLYPH_SIZE * scale;
    (count * advance + bold as u32, advance)
}

/// Draw `text` with its top-left corner at (`x`, `y`), clipped to the canvas.
pub fn draw_text(
    canvas: &mut RgbaImage,
    x: i64,
    y: i64,
    text: &str,
    scale: u32,
    bold: bool,
    rgba: [u8; 4],
) {
    let advance = (GLYPH_SIZE * scale) as i64;
    let strikes: &[i64] = if bold { &[0, 1] } else { &[0] };
    for (i, c) in text.chars().enumerate() {
        let gx = x + i as i64 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for bit in 0..GLYPH_SIZE as i64 {
                // lsb is the leftmost pixel
                if (bits >> bit) & 1 == 0 {
                    continue;
                }
                for dx in strikes {
                    let px = gx + bit * scale as i64 + dx;
                    let py = y + row as i64 * scale as i64;
                    fill_block(canvas, px, py, scale, rgba);
                }
            }
        }
    }
}

fn fill_block(canvas: &mut RgbaImage, x: i64, y: i64, size: u32, rgba: [u8; 4]) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    for yy in y.max(0)..(y + size as i64).min(h) {
        for xx in x.max(0)..(x + size as i64).min(w) {
            canvas.put_pixel(xx as u32, yy as u32, Rgba(rgba));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_scales_with_length() {
        assert_eq!(measure_text("", 3, true), (0, 0));
        assert_eq!(measure_text("Demo", 3, false), (96, 24));
        assert_eq!(measure_text("Demo", 3, true), (97, 24));
        assert_eq!(measure_text("ab", 1, false), (16, 8));
    }

    #[test]
    fn draws_inside_canvas_only() {
        let mut canvas = RgbaImage::new(40, 20);
        draw_text(&mut canvas, -4, -4, "HI", 2, true, [0, 0, 0, 255]);
        draw_text(&mut canvas, 30, 10, "HI", 2, true, [0, 0, 0, 255]);
        let inked = canvas.pixels().filter(|p| p.0 == [0, 0, 0, 255]).count();
        assert!(inked > 0);
    }

    #[test]
    fn unknown_characters_still_ink() {
        let mut canvas = RgbaImage::new(16, 8);
        draw_text(&mut canvas, 0, 0, "無題", 1, false, [0, 0, 0, 255]);
        assert!(canvas.pixels().any(|p| p.0[3] == 255));
    }
}
