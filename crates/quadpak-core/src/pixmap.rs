/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! RGB raster images
//!
//! A [`Pixmap`] couples a 2D container of [`Rgb`] samples with the
//! denominator the samples are scaled against. Samples are stored as
//! raw integers, `sample as f32 / denominator as f32` recovers the
//! intensity in `[0.0, 1.0]`.

use crate::array2::{Array2, FlatArray2};

/// One pixel, three integer samples scaled against a shared
/// denominator
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Rgb {
        Rgb { r, g, b }
    }
}

/// An RGB raster plus the denominator its samples are scaled against
///
/// Generic over the storage container, anything implementing
/// [`Array2`] works, the default is the row-major [`FlatArray2`].
#[derive(Clone, Debug)]
pub struct Pixmap<A: Array2<Rgb> = FlatArray2<Rgb>> {
    pixels:      A,
    denominator: u16
}

impl<A: Array2<Rgb>> Pixmap<A> {
    /// Wrap a pixel container and its denominator
    ///
    /// # Panics
    /// If `denominator` is zero, samples scaled against zero are
    /// meaningless.
    pub fn new(pixels: A, denominator: u16) -> Pixmap<A> {
        assert!(denominator > 0, "denominator cannot be zero");

        Pixmap { pixels, denominator }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// The value a sample of full intensity takes
    pub const fn denominator(&self) -> u16 {
        self.denominator
    }

    /// Borrow the pixel container
    pub const fn pixels(&self) -> &A {
        &self.pixels
    }

    /// Mutably borrow the pixel container
    pub fn pixels_mut(&mut self) -> &mut A {
        &mut self.pixels
    }

    /// Drop the last column and/or row so both dimensions are even
    ///
    /// Images already even in both dimensions are returned untouched.
    pub fn trim_to_even(self) -> Pixmap<A> {
        let width = self.width() & !1;
        let height = self.height() & !1;

        if width == self.width() && height == self.height() {
            return self;
        }

        let mut trimmed = A::new(width, height, Rgb::default());

        trimmed.for_each_mut(|col, row, pixel| {
            *pixel = *self.pixels.at(col, row);
        });

        Pixmap { pixels: trimmed, denominator: self.denominator }
    }
}
