/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! RGB to component video transform and back
//!
//! Forward normalizes each channel by the image's own denominator
//! and projects to brightness plus two chroma axes. The inverse
//! always produces channels against a denominator of 255, whatever
//! the source image used.
//!
//! Both directions are purely elementwise.

use quadpak_core::array2::Array2;
use quadpak_core::pixmap::{Pixmap, Rgb};

use crate::constants::OUT_DENOMINATOR;

/// One pixel in component video form, brightness in roughly `[0, 1]`
/// and two signed chroma axes in roughly `[-0.5, 0.5]`
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct CvPixel {
    pub y:  f32,
    pub pb: f32,
    pub pr: f32
}

/// Transform one pixel to component video
///
/// `denominator` is the value of a full intensity sample in `pixel`.
pub fn pixel_to_cv(pixel: Rgb, denominator: u16) -> CvPixel {
    let scale = f32::from(denominator);
    let r = f32::from(pixel.r) / scale;
    let g = f32::from(pixel.g) / scale;
    let b = f32::from(pixel.b) / scale;

    CvPixel {
        y:  0.299 * r + 0.587 * g + 0.114 * b,
        pb: -0.168736 * r - 0.331264 * g + 0.5 * b,
        pr: 0.5 * r - 0.418688 * g - 0.081312 * b
    }
}

/// Transform one component video pixel back to RGB against the fixed
/// output denominator of 255
///
/// Channels are clamped to `[0, 1]` before scaling, out of range
/// brightness or chroma saturates instead of wrapping.
pub fn pixel_from_cv(cv: CvPixel) -> Rgb {
    let r = cv.y + 1.402 * cv.pr;
    let g = cv.y - 0.344136 * cv.pb - 0.714136 * cv.pr;
    let b = cv.y + 1.772 * cv.pb;

    let scale = f32::from(OUT_DENOMINATOR);

    Rgb {
        r: (r.clamp(0.0, 1.0) * scale) as u16,
        g: (g.clamp(0.0, 1.0) * scale) as u16,
        b: (b.clamp(0.0, 1.0) * scale) as u16
    }
}

/// Transform a whole image to component video
pub fn rgb_to_cv<I, O>(image: &Pixmap<I>) -> O
where
    I: Array2<Rgb>,
    O: Array2<CvPixel>
{
    let denominator = image.denominator();
    let mut out = O::new(image.width(), image.height(), CvPixel::default());

    out.for_each_mut(|col, row, cv| {
        *cv = pixel_to_cv(*image.pixels().at(col, row), denominator);
    });
    out
}

/// Transform a component video array back to an RGB image with a
/// denominator of 255
pub fn cv_to_rgb<I, O>(cv: &I) -> Pixmap<O>
where
    I: Array2<CvPixel>,
    O: Array2<Rgb>
{
    let mut out = O::new(cv.width(), cv.height(), Rgb::default());

    out.for_each_mut(|col, row, pixel| {
        *pixel = pixel_from_cv(*cv.at(col, row));
    });
    Pixmap::new(out, OUT_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use quadpak_core::pixmap::Rgb;

    use super::{pixel_from_cv, pixel_to_cv, CvPixel};

    #[test]
    fn mid_gray_has_no_chroma() {
        let cv = pixel_to_cv(Rgb::new(128, 128, 128), 255);

        assert!((cv.y - 0.502).abs() < 1e-3);
        assert!(cv.pb.abs() < 1e-6);
        assert!(cv.pr.abs() < 1e-6);
    }

    #[test]
    fn white_is_full_brightness() {
        let cv = pixel_to_cv(Rgb::new(255, 255, 255), 255);

        assert!((cv.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn denominator_scales_the_channels() {
        // 15 on a 0..15 scale is the same white as 255 on 0..255
        let small = pixel_to_cv(Rgb::new(15, 15, 15), 15);
        let wide = pixel_to_cv(Rgb::new(255, 255, 255), 255);

        assert!((small.y - wide.y).abs() < 1e-6);
    }

    #[test]
    fn pure_brightness_reconstructs_exactly() {
        assert_eq!(pixel_from_cv(CvPixel { y: 1.0, pb: 0.0, pr: 0.0 }), Rgb::new(255, 255, 255));
        assert_eq!(pixel_from_cv(CvPixel { y: 0.0, pb: 0.0, pr: 0.0 }), Rgb::new(0, 0, 0));
    }

    #[test]
    fn out_of_range_channels_saturate() {
        let hot = pixel_from_cv(CvPixel { y: 1.4, pb: 0.5, pr: 0.5 });

        assert_eq!(hot, Rgb::new(255, 255, 255));

        let cold = pixel_from_cv(CvPixel { y: -0.4, pb: 0.0, pr: 0.0 });

        assert_eq!(cold, Rgb::new(0, 0, 0));
    }

    #[test]
    fn transform_round_trips_within_one_step() {
        for pixel in [Rgb::new(10, 200, 70), Rgb::new(255, 0, 128), Rgb::new(33, 33, 34)] {
            let back = pixel_from_cv(pixel_to_cv(pixel, 255));

            assert!(i32::from(back.r).abs_diff(i32::from(pixel.r)) <= 1, "{pixel:?} {back:?}");
            assert!(i32::from(back.g).abs_diff(i32::from(pixel.g)) <= 1, "{pixel:?} {back:?}");
            assert!(i32::from(back.b).abs_diff(i32::from(pixel.b)) <= 1, "{pixel:?} {back:?}");
        }
    }
}
