/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use quadpak_core::array2::{Array2, FlatArray2};
use quadpak_core::bytestream::QByteWriter;
use quadpak_core::log::trace;
use quadpak_core::pixmap::{Pixmap, Rgb};

use crate::blocks::{self, Coeffs};
use crate::codeword;
use crate::color::{self, CvPixel};
use crate::constants::{CODEWORD_SIZE, QUAD_MAGIC};
use crate::errors::QuadEncodeErrors;
use crate::quantize::{self, QuantCoeffs};

/// Compresses an RGB image into the 2x2 block codeword format
///
/// The encoder borrows the image and produces the compressed bytes
/// from [`encode`], the image itself is never modified.
///
/// Each stage of the pipeline allocates a fresh array for its
/// output, color transform, block transform, quantization and
/// codeword packing run as one full pass each.
///
/// [`encode`]: QuadEncoder::encode
///
/// # Example
/// ```
/// use quadpak::QuadEncoder;
/// use quadpak_core::array2::{Array2, FlatArray2};
/// use quadpak_core::pixmap::{Pixmap, Rgb};
///
/// let pixels: FlatArray2<Rgb> = FlatArray2::new(4, 4, Rgb::new(90, 120, 200));
/// let image = Pixmap::new(pixels, 255);
///
/// let bytes = QuadEncoder::new(&image).encode().unwrap();
/// // 4x4 pixels make four codewords
/// assert_eq!(bytes.len() - b"COMP40 Compressed image format 2\n4 4\n".len(), 16);
/// ```
pub struct QuadEncoder<'a, A: Array2<Rgb> = FlatArray2<Rgb>> {
    image: &'a Pixmap<A>
}

impl<'a, A: Array2<Rgb>> QuadEncoder<'a, A> {
    /// Create a new encoder over a borrowed image
    pub fn new(image: &'a Pixmap<A>) -> QuadEncoder<'a, A> {
        QuadEncoder { image }
    }

    /// Compress the image, returning the bytes of the stream
    ///
    /// The header carries the pixel dimensions, the body one big
    /// endian 4 byte codeword per 2x2 block in row major order.
    ///
    /// # Errors
    /// [`QuadEncodeErrors::Overflow`] if a quantized coefficient
    /// refuses to fit its codeword field, which the quantizer rules
    /// out for any real image.
    ///
    /// # Panics
    /// If the image has odd width or height, trim it with
    /// [`Pixmap::trim_to_even`] first.
    pub fn encode(&self) -> Result<Vec<u8>, QuadEncodeErrors> {
        trace!(
            "compressing a {}x{} image with denominator {}",
            self.image.width(),
            self.image.height(),
            self.image.denominator()
        );

        let cv: FlatArray2<CvPixel> = color::rgb_to_cv(self.image);
        let coeffs: FlatArray2<Coeffs> = blocks::cv_to_coeffs(&cv);
        let quantized: FlatArray2<QuantCoeffs> = quantize::quantize_coeffs(&coeffs);
        let words: FlatArray2<u32> = codeword::pack_coeffs(&quantized)?;

        let header = format!("{QUAD_MAGIC}\n{} {}\n", 2 * words.width(), 2 * words.height());
        let mut output = vec![0_u8; header.len() + words.width() * words.height() * CODEWORD_SIZE];

        let mut stream = QByteWriter::new(&mut output);

        stream.write_bytes(header.as_bytes());
        words.for_each(|_, _, word| stream.write_u32_be(*word));

        trace!("compressed into {} bytes", output.len());

        Ok(output)
    }
}
