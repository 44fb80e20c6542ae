/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use quadpak_core::array2::Array2;
use quadpak_core::pixmap::{Pixmap, Rgb};

/// Possible errors that may occur when writing a Portable Pixmap
pub enum PpmEncodeErrors {
    IoErrors(io::Error)
}

impl From<io::Error> for PpmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PpmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PpmEncodeErrors::IoErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmEncodeErrors {}

/// A PPM encoder
///
/// Writes pixmaps as binary `P6` streams, taking the maxval from
/// the image's own denominator. Denominators above 255 get two
/// byte big endian samples, the netpbm convention.
pub struct PpmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PpmEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PpmEncoder<'a, W> {
        PpmEncoder { writer }
    }

    /// Write the `P6` header line for an image
    fn write_headers(
        &mut self, width: usize, height: usize, max_val: u16
    ) -> Result<(), PpmEncodeErrors> {
        let header = format!("P6\n{width}\n{height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `image` as a binary `P6` stream
    ///
    /// # Errors
    /// When the underlying writer fails.
    ///
    /// # Example
    /// ```
    /// use quadpak_core::array2::{Array2, FlatArray2};
    /// use quadpak_core::pixmap::{Pixmap, Rgb};
    /// use quadpak_ppm::PpmEncoder;
    ///
    /// let image = Pixmap::new(FlatArray2::new(1, 1, Rgb::new(9, 8, 7)), 255);
    /// let mut sink = Vec::new();
    ///
    /// PpmEncoder::new(&mut sink).encode(&image).unwrap();
    ///
    /// assert_eq!(sink, b"P6\n1\n1\n255\n\x09\x08\x07");
    /// ```
    pub fn encode<A: Array2<Rgb>>(&mut self, image: &Pixmap<A>) -> Result<(), PpmEncodeErrors> {
        let denominator = image.denominator();

        self.write_headers(image.width(), image.height(), denominator)?;

        let samples = image.width() * image.height() * 3;
        let mut raster;

        if denominator > 255 {
            raster = Vec::with_capacity(samples * 2);

            image.pixels().for_each(|_, _, pixel| {
                raster.extend_from_slice(&pixel.r.to_be_bytes());
                raster.extend_from_slice(&pixel.g.to_be_bytes());
                raster.extend_from_slice(&pixel.b.to_be_bytes());
            });
        } else {
            raster = Vec::with_capacity(samples);

            image.pixels().for_each(|_, _, pixel| {
                raster.push(pixel.r as u8);
                raster.push(pixel.g as u8);
                raster.push(pixel.b as u8);
            });
        }
        self.writer.write_all(&raster)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quadpak_core::array2::{Array2, FlatArray2};
    use quadpak_core::pixmap::{Pixmap, Rgb};

    use crate::decoder::PpmDecoder;
    use crate::encoder::PpmEncoder;

    #[test]
    fn eight_bit_images_encode_to_p6() {
        let mut pixels = FlatArray2::new(2, 1, Rgb::default());
        *pixels.at_mut(0, 0) = Rgb::new(1, 2, 3);
        *pixels.at_mut(1, 0) = Rgb::new(255, 0, 128);

        let image = Pixmap::new(pixels, 255);
        let mut sink = Vec::new();

        PpmEncoder::new(&mut sink).encode(&image).unwrap();

        assert_eq!(sink, b"P6\n2\n1\n255\n\x01\x02\x03\xFF\x00\x80");
    }

    #[test]
    fn wide_denominators_use_two_byte_samples() {
        let image = Pixmap::new(FlatArray2::new(1, 1, Rgb::new(1000, 0, 256)), 1000);
        let mut sink = Vec::new();

        PpmEncoder::new(&mut sink).encode(&image).unwrap();

        assert_eq!(sink, b"P6\n1\n1\n1000\n\x03\xE8\x00\x00\x01\x00");
    }

    #[test]
    fn encoded_images_decode_back_unchanged() {
        let mut pixels = FlatArray2::new(3, 2, Rgb::default());

        pixels.for_each_mut(|col, row, pixel| {
            *pixel = Rgb::new(
                (col * 90) as u16,
                (row * 120) as u16,
                ((col + row) * 40) as u16
            );
        });
        let image = Pixmap::new(pixels, 255);
        let mut sink = Vec::new();

        PpmEncoder::new(&mut sink).encode(&image).unwrap();

        let decoded = PpmDecoder::new(&sink).decode().unwrap();

        assert_eq!(decoded.denominator(), image.denominator());
        assert_eq!(decoded.pixels(), image.pixels());
    }

    #[test]
    fn failing_writers_surface_as_errors() {
        struct BrokenSink;

        impl std::io::Write for BrokenSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "nope"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let image = Pixmap::new(FlatArray2::new(1, 1, Rgb::default()), 255);
        let result = PpmEncoder::new(&mut BrokenSink).encode(&image);

        assert!(result.is_err());
    }
}
