#![allow(dead_code)]

use std::io::Cursor;

use gridshot::ImageHandle;
use image::{ImageFormat, Rgba, RgbaImage};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

pub fn solid(w: u32, h: u32, rgba: [u8; 4]) -> ImageHandle {
    ImageHandle::new(RgbaImage::from_pixel(w, h, Rgba(rgba))).expect("non-empty image")
}

pub fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut out = Vec::new();
    RgbaImage::from_pixel(w, h, Rgba(rgba))
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .expect("encode fixture");
    out
}
