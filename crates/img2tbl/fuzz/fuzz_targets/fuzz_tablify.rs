#![no_main]

use arbitrary::Arbitrary;
use image::{DynamicImage, RgbaImage};
use img2tbl::{tablify_image, TablifyOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
    max_size: Option<u8>,
    cell_size: u8,
    indent: u8,
    keep_alpha: bool,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as u32).min(64);
    let height = (input.height as u32).min(64);

    // RGBA = 4 bytes per pixel
    let expected_size = (width * height * 4) as usize;
    if input.pixels.len() < expected_size {
        return;
    }

    let Some(bitmap) = RgbaImage::from_raw(width, height, input.pixels[..expected_size].to_vec())
    else {
        return;
    };

    let opts = TablifyOptions {
        max_size: input.max_size.map(u32::from),
        cell_size: u32::from(input.cell_size),
        indent: usize::from(input.indent.min(8)),
        keep_alpha: input.keep_alpha,
    };

    // Conversion should never panic, and every pixel gets a cell
    let doc = tablify_image(&DynamicImage::ImageRgba8(bitmap), &opts);
    let cells = doc.html.matches("<td class=").count();
    assert_eq!(cells, (doc.width * doc.height) as usize);
});
