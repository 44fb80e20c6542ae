/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! 2x2 block transform
//!
//! Each 2x2 quad of component video pixels collapses into one
//! [`Coeffs`] record: the quad's mean brightness `a`, three
//! brightness differences `b`, `c`, `d` and the quad's average
//! chroma. The brightness half of the transform is an exact inverse
//! pair, averaging the chroma is where information is lost.
//!
//! Quads are addressed by their top left corner at even `(col, row)`,
//! the coefficient array has half the width and height of its source.

use quadpak_core::array2::Array2;

use crate::color::CvPixel;

/// One 2x2 block in transformed form
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Coeffs {
    /// mean brightness of the quad
    pub a:  f32,
    /// bottom minus top brightness
    pub b:  f32,
    /// right minus left brightness
    pub c:  f32,
    /// diagonal brightness difference
    pub d:  f32,
    /// average chroma, blue axis
    pub pb: f32,
    /// average chroma, red axis
    pub pr: f32
}

/// Transform one quad, given as `[top left, top right, bottom left,
/// bottom right]`, into its coefficients
pub fn coeffs_from_quad(quad: [CvPixel; 4]) -> Coeffs {
    let [y1, y2, y3, y4] = quad.map(|pixel| pixel.y);

    Coeffs {
        a:  (y1 + y2 + y3 + y4) / 4.0,
        b:  (y3 + y4 - y1 - y2) / 4.0,
        c:  (y2 + y4 - y1 - y3) / 4.0,
        d:  (y1 + y4 - y2 - y3) / 4.0,
        pb: (quad[0].pb + quad[1].pb + quad[2].pb + quad[3].pb) / 4.0,
        pr: (quad[0].pr + quad[1].pr + quad[2].pr + quad[3].pr) / 4.0
    }
}

/// Expand coefficients back into a `[top left, top right, bottom
/// left, bottom right]` quad
///
/// The averaged chroma pair is broadcast to all four pixels.
pub fn quad_from_coeffs(coeffs: Coeffs) -> [CvPixel; 4] {
    let Coeffs { a, b, c, d, pb, pr } = coeffs;

    [
        CvPixel { y: a - b - c + d, pb, pr },
        CvPixel { y: a - b + c - d, pb, pr },
        CvPixel { y: a + b - c - d, pb, pr },
        CvPixel { y: a + b + c + d, pb, pr }
    ]
}

/// Collapse a component video array into its per block coefficients
///
/// # Panics
/// If either dimension of `cv` is odd
pub fn cv_to_coeffs<I, O>(cv: &I) -> O
where
    I: Array2<CvPixel>,
    O: Array2<Coeffs>
{
    assert!(
        cv.width() % 2 == 0 && cv.height() % 2 == 0,
        "block transform needs even dimensions, got {}x{}",
        cv.width(),
        cv.height()
    );

    let mut out = O::new(cv.width() / 2, cv.height() / 2, Coeffs::default());

    out.for_each_mut(|col, row, coeffs| {
        let (origin_col, origin_row) = (col * 2, row * 2);
        let quad = [
            *cv.at(origin_col, origin_row),
            *cv.at(origin_col + 1, origin_row),
            *cv.at(origin_col, origin_row + 1),
            *cv.at(origin_col + 1, origin_row + 1)
        ];

        *coeffs = coeffs_from_quad(quad);
    });
    out
}

/// Expand per block coefficients back into a component video array
/// of twice the width and height
pub fn coeffs_to_cv<I, O>(coeffs: &I) -> O
where
    I: Array2<Coeffs>,
    O: Array2<CvPixel>
{
    let mut out = O::new(coeffs.width() * 2, coeffs.height() * 2, CvPixel::default());

    coeffs.for_each(|col, row, coeff| {
        let [tl, tr, bl, br] = quad_from_coeffs(*coeff);
        let (origin_col, origin_row) = (col * 2, row * 2);

        *out.at_mut(origin_col, origin_row) = tl;
        *out.at_mut(origin_col + 1, origin_row) = tr;
        *out.at_mut(origin_col, origin_row + 1) = bl;
        *out.at_mut(origin_col + 1, origin_row + 1) = br;
    });
    out
}
