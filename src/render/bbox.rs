use image::{imageops, Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Smallest rectangle `(x, y, width, height)` holding every non-background
/// pixel, or `None` for a blank image.
pub fn content_bounds(img: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);
    let mut found = false;

    for (x, y, px) in img.enumerate_pixels() {
        if *px != BACKGROUND {
            found = true;
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }

    found.then(|| (min.0, min.1, max.0 - min.0 + 1, max.1 - min.1 + 1))
}

/// Trim the white margin around the drawing, keeping `pad` pixels of it on
/// every side (limited by the uncropped canvas).
pub fn tight_crop(img: &RgbImage, pad: u32) -> RgbImage {
    let Some((x, y, w, h)) = content_bounds(img) else {
        return img.clone();
    };
    let left = x.saturating_sub(pad);
    let top = y.saturating_sub(pad);
    let right = (x + w + pad).min(img.width());
    let bottom = (y + h + pad).min(img.height());
    imageops::crop_imm(img, left, top, right - left, bottom - top).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_with_dot(w: u32, h: u32, dots: &[(u32, u32)]) -> RgbImage {
        let mut img = RgbImage::from_pixel(w, h, BACKGROUND);
        for &(x, y) in dots {
            img.put_pixel(x, y, Rgb([255, 0, 0]));
        }
        img
    }

    #[test]
    fn blank_image_has_no_bounds() {
        let img = canvas_with_dot(10, 10, &[]);
        assert_eq!(content_bounds(&img), None);
        assert_eq!(tight_crop(&img, 2).dimensions(), (10, 10));
    }

    #[test]
    fn bounds_cover_all_content() {
        let img = canvas_with_dot(50, 40, &[(10, 5), (30, 20)]);
        assert_eq!(content_bounds(&img), Some((10, 5, 21, 16)));
    }

    #[test]
    fn crop_keeps_padding() {
        let img = canvas_with_dot(50, 40, &[(10, 5), (30, 20)]);
        let cropped = tight_crop(&img, 3);
        assert_eq!(cropped.dimensions(), (27, 22));
        assert_eq!(*cropped.get_pixel(3, 3), Rgb([255, 0, 0]));
    }

    #[test]
    fn padding_is_limited_by_canvas() {
        let img = canvas_with_dot(20, 20, &[(0, 0), (19, 19)]);
        assert_eq!(tight_crop(&img, 5).dimensions(), (20, 20));
    }
}
