//! Shared test utilities: synthetic images and input folders.

use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

/// Write a gradient image of the given size; format follows the extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    save_for_extension(DynamicImage::ImageRgb8(img), path);
}

/// Write a PNG split into three equal horizontal bands: red, green, blue.
pub fn create_banded_png(path: &Path, width: u32, height: u32) {
    let band = height / 3;
    let img = RgbImage::from_fn(width, height, |_, y| match y / band.max(1) {
        0 => Rgb([255, 0, 0]),
        1 => Rgb([0, 255, 0]),
        _ => Rgb([0, 0, 255]),
    });
    img.save(path).unwrap();
}

/// Fill `dir` with the given `(file name, width, height)` images.
pub fn populate_images(dir: &Path, images: &[(&str, u32, u32)]) {
    std::fs::create_dir_all(dir).unwrap();
    for (name, w, h) in images {
        create_test_image(&dir.join(name), *w, *h);
    }
}

fn save_for_extension(img: DynamicImage, path: &Path) {
    let is_gif = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"));
    let img = if is_gif {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        img
    };
    img.save(path).unwrap();
}
