//! Aspect-preserving downscale policy.

use image::imageops::FilterType;
use image::DynamicImage;

/// Compute the size an image should be resized to, or `None` to keep it.
///
/// A wide (or square) image whose width exceeds `max_size` gets width
/// `max_size`; otherwise an image whose height exceeds `max_size` gets
/// height `max_size`. The other side is scaled proportionally and rounded
/// half away from zero.
pub fn target_size(width: u32, height: u32, max_size: u32) -> Option<(u32, u32)> {
    let max = f64::from(max_size);
    if width > max_size && width >= height {
        let h = (max / f64::from(width) * f64::from(height)).round();
        Some((max_size, h as u32))
    } else if height > max_size {
        let w = (max / f64::from(height) * f64::from(width)).round();
        Some((w as u32, max_size))
    } else {
        None
    }
}

/// Apply [`target_size`] to `img`, resampling with a bicubic filter.
pub fn constrain(img: DynamicImage, max_size: Option<u32>) -> DynamicImage {
    let Some(max_size) = max_size else {
        return img;
    };
    let (width, height) = (img.width(), img.height());
    match target_size(width, height, max_size) {
        Some((new_width, new_height)) if new_width == 0 || new_height == 0 => {
            tracing::debug!(width, height, new_width, new_height, "resize leaves no pixels");
            blank_like(&img, new_width, new_height)
        }
        Some((new_width, new_height)) => {
            tracing::debug!(width, height, new_width, new_height, "resizing image");
            img.resize_exact(new_width, new_height, FilterType::CatmullRom)
        }
        None => img,
    }
}

/// Bitmap of the requested size (one side zero) in the pixel format of `img`.
fn blank_like(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::new_rgba8(width, height)
    } else {
        DynamicImage::new_rgb8(width, height)
    }
}
