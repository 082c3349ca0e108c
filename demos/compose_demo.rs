//! Compose demo - builds a small grid from generated images and writes it out

use gridshot::{ComposerConfig, GridComposer, ImageHandle};
use image::{Rgba, RgbaImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Gridshot - Compose Example\n");

    let mut composer = GridComposer::new(ComposerConfig::default())?;

    let palette = [[230, 57, 70, 255], [69, 123, 157, 255], [42, 157, 143, 255]];
    for (i, rgba) in palette.iter().enumerate() {
        let img = RgbaImage::from_pixel(100 + 50 * i as u32, 100, Rgba(*rgba));
        composer.place(i * 11, ImageHandle::new(img)?)?;
    }

    // Right-click equivalent: copy slot 0 into slot 1
    let target = composer.duplicate(0)?;
    println!("Duplicated slot 0 into slot {}", target);

    // Slot 49 has no successor
    composer.place(49, ImageHandle::new(RgbaImage::from_pixel(80, 80, Rgba([0, 0, 0, 255])))?)?;
    if let Err(e) = composer.duplicate(49) {
        println!("Expected failure: {}", e);
    }

    let composite = composer.compose("Demo")?;
    std::fs::write(&composite.file_name, &composite.png_data)?;
    println!(
        "Wrote {} ({}x{}, {} bytes)",
        composite.file_name,
        composite.width,
        composite.height,
        composite.png_data.len()
    );

    Ok(())
}
