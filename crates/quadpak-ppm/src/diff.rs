/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Root mean square distance between two images
//!
//! Backs the `ppmdiff` tool, which scores how close a decompressed
//! image landed to its source. Images are compared over their
//! overlapping region with every channel normalized by its own
//! image's denominator, so pixmaps with different maxvals compare
//! on equal footing.

use quadpak_core::array2::Array2;
use quadpak_core::pixmap::{Pixmap, Rgb};

/// Compute the root mean square distance between two images
///
/// Returns `None` when the images are incomparable, that is when
/// their widths or heights differ by more than one. Otherwise the
/// distance is taken over the overlapping `min(width) x min(height)`
/// region and lies in `0.0..=1.0` for in range samples.
///
/// # Example
/// ```
/// use quadpak_core::array2::{Array2, FlatArray2};
/// use quadpak_core::pixmap::{Pixmap, Rgb};
/// use quadpak_ppm::rmse;
///
/// let white = Pixmap::new(FlatArray2::new(2, 2, Rgb::new(255, 255, 255)), 255);
/// let black = Pixmap::new(FlatArray2::new(2, 2, Rgb::new(0, 0, 0)), 255);
///
/// assert_eq!(rmse(&white, &white), Some(0.0));
/// assert_eq!(rmse(&white, &black), Some(1.0));
/// ```
pub fn rmse<A, B>(first: &Pixmap<A>, second: &Pixmap<B>) -> Option<f64>
where
    A: Array2<Rgb>,
    B: Array2<Rgb>
{
    if first.width().abs_diff(second.width()) > 1
        || first.height().abs_diff(second.height()) > 1
    {
        return None;
    }
    let width = first.width().min(second.width());
    let height = first.height().min(second.height());

    if width == 0 || height == 0 {
        return Some(0.0);
    }
    let first_scale = f64::from(first.denominator());
    let second_scale = f64::from(second.denominator());

    let mut sum = 0.0_f64;

    for row in 0..height {
        for col in 0..width {
            let ours = first.pixels().at(col, row);
            let theirs = second.pixels().at(col, row);

            let red = f64::from(ours.r) / first_scale - f64::from(theirs.r) / second_scale;
            let green = f64::from(ours.g) / first_scale - f64::from(theirs.g) / second_scale;
            let blue = f64::from(ours.b) / first_scale - f64::from(theirs.b) / second_scale;

            sum += red * red + green * green + blue * blue;
        }
    }
    Some((sum / (3 * width * height) as f64).sqrt())
}
