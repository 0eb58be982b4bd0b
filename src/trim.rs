use image::{DynamicImage, GenericImageView, Rgba};
use log::debug;

/// Per-channel distance from the background that still counts as background.
pub const DEFAULT_THRESHOLD: u8 = 10;

/// Crop away borders matching the top-left pixel.
///
/// Images that are entirely background come back unchanged rather than empty.
pub fn trim(img: &DynamicImage, threshold: u8) -> DynamicImage {
    match content_bounds(img, threshold) {
        Some((x, y, w, h)) if (w, h) != img.dimensions() => {
            debug!(
                "trimmed {}x{} to {w}x{h} at {x},{y}",
                img.width(),
                img.height()
            );
            img.crop_imm(x, y, w, h)
        }
        _ => img.clone(),
    }
}

/// Smallest `(x, y, width, height)` covering every non-background pixel.
fn content_bounds(img: &DynamicImage, threshold: u8) -> Option<(u32, u32, u32, u32)> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    let bg = img.get_pixel(0, 0);

    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.pixels() {
        if is_background(px, bg, threshold) {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((lx, ly, rx, ry)) => (lx.min(x), ly.min(y), rx.max(x), ry.max(y)),
        });
    }

    bounds.map(|(lx, ly, rx, ry)| (lx, ly, rx - lx + 1, ry - ly + 1))
}

fn is_background(px: Rgba<u8>, bg: Rgba<u8>, threshold: u8) -> bool {
    px.0.iter().zip(bg.0.iter()).all(|(a, b)| a.abs_diff(*b) <= threshold)
}
