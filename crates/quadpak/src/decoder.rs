/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use quadpak_core::array2::{Array2, FlatArray2};
use quadpak_core::bytestream::QByteReader;
use quadpak_core::log::trace;
use quadpak_core::options::DecoderOptions;
use quadpak_core::pixmap::{Pixmap, Rgb};

use crate::blocks::{self, Coeffs};
use crate::codeword;
use crate::color::{self, CvPixel};
use crate::constants::{CODEWORD_SIZE, QUAD_MAGIC};
use crate::errors::QuadDecodeErrors;
use crate::quantize::{self, QuantCoeffs};

/// Decompresses the 2x2 block codeword format back into an RGB image
///
/// The decoder is initialized by calling [`new`] and either of
/// [`decode_headers`] to parse the header or [`decode`] to return
/// the reconstructed image. Dimensions become available once headers
/// are parsed.
///
/// [`new`]: QuadDecoder::new
/// [`decode_headers`]: QuadDecoder::decode_headers
/// [`decode`]: QuadDecoder::decode
pub struct QuadDecoder<'a> {
    stream:          QByteReader<'a>,
    options:         DecoderOptions,
    words_width:     usize,
    words_height:    usize,
    decoded_headers: bool
}

impl<'a> QuadDecoder<'a> {
    /// Create a new decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed stream
    ///
    /// # Example
    /// ```
    /// use quadpak::QuadDecoder;
    ///
    /// let mut decoder = QuadDecoder::new(b"not a compressed image");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> QuadDecoder<'a> {
        QuadDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder that obeys the specified restrictions
    ///
    /// E.g. can be used to set width and height limits to prevent
    /// huge allocations driven by a hostile header
    ///
    /// # Arguments
    /// - `data`: The compressed stream
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use quadpak::QuadDecoder;
    /// use quadpak_core::options::DecoderOptions;
    ///
    /// // refuse anything wider than 64 pixels
    /// let options = DecoderOptions::default().set_max_width(64);
    /// let decoder = QuadDecoder::new_with_options(b"", options);
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> QuadDecoder<'a> {
        QuadDecoder {
            stream: QByteReader::new(data),
            options,
            words_width: 0,
            words_height: 0,
            decoded_headers: false
        }
    }

    /// Parse the stream header, storing the dimensions in the
    /// decoder
    ///
    /// Calling this again after a successful parse does nothing.
    ///
    /// # Errors
    /// An instance of [`QuadDecodeErrors`] when the magic line is
    /// wrong, the dimension line is malformed or the dimensions
    /// exceed the configured limits
    pub fn decode_headers(&mut self) -> Result<(), QuadDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self
            .stream
            .get_as_ref(QUAD_MAGIC.len())
            .map_err(|_| QuadDecodeErrors::InvalidMagicBytes)?;

        if magic != QUAD_MAGIC.as_bytes() {
            return Err(QuadDecodeErrors::InvalidMagicBytes);
        }
        if self.stream.get_u8() != b'\n' {
            return Err(QuadDecodeErrors::InvalidHeader("no newline after the magic line"));
        }
        let width = self.read_dimension(b' ')?;
        let height = self.read_dimension(b'\n')?;

        if width > self.options.get_max_width() {
            return Err(QuadDecodeErrors::LargeDimensions(self.options.get_max_width(), width));
        }
        if height > self.options.get_max_height() {
            return Err(QuadDecodeErrors::LargeDimensions(self.options.get_max_height(), height));
        }

        trace!("compressed image width: {width}, height: {height}");

        // the header stores pixel dimensions, codewords cover 2x2
        self.words_width = width / 2;
        self.words_height = height / 2;
        self.decoded_headers = true;

        Ok(())
    }

    /// Read one decimal dimension followed by `terminator`
    fn read_dimension(&mut self, terminator: u8) -> Result<usize, QuadDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0_usize;

        while !self.stream.eof() {
            let byte = self.stream.get_u8();

            if byte.is_ascii_digit() {
                // an overflowing dimension gets caught by the limit
                // checks right after
                value = value.wrapping_mul(10).wrapping_add(usize::from(byte - b'0'));
                digits += 1;
            } else if byte == terminator && digits > 0 {
                return Ok(value);
            } else {
                break;
            }
        }
        Err(QuadDecodeErrors::InvalidHeader("malformed dimension line"))
    }

    /// Return the width and height the decoded image will have
    ///
    /// Or `None` if the headers have not been parsed yet
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.words_width * 2, self.words_height * 2));
        }
        None
    }

    /// Decompress the stream into an RGB image with a denominator
    /// of 255
    ///
    /// Bytes past the declared codeword count are ignored.
    ///
    /// # Errors
    /// An instance of [`QuadDecodeErrors`], either a header problem
    /// or [`QuadDecodeErrors::TruncatedStream`] when the body holds
    /// fewer codewords than the header promises
    pub fn decode(&mut self) -> Result<Pixmap<FlatArray2<Rgb>>, QuadDecodeErrors> {
        self.decode_headers()?;

        let expected = self.words_width * self.words_height * CODEWORD_SIZE;

        if !self.stream.has(expected) {
            return Err(QuadDecodeErrors::TruncatedStream(expected, self.stream.remaining()));
        }

        let mut words: FlatArray2<u32> = FlatArray2::new(self.words_width, self.words_height, 0);

        words.for_each_mut(|_, _, word| *word = self.stream.get_u32_be());

        let quantized: FlatArray2<QuantCoeffs> = codeword::unpack_coeffs(&words);
        let coeffs: FlatArray2<Coeffs> = quantize::dequantize_coeffs(&quantized);
        let cv: FlatArray2<CvPixel> = blocks::coeffs_to_cv(&coeffs);

        Ok(color::cv_to_rgb(&cv))
    }
}

#[cfg(test)]
mod tests {
    use quadpak_core::options::DecoderOptions;

    use super::QuadDecoder;
    use crate::errors::QuadDecodeErrors;

    #[test]
    fn wrong_magic_is_rejected() {
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 9\n2 2\n\0\0\0\0");

        assert!(matches!(decoder.decode(), Err(QuadDecodeErrors::InvalidMagicBytes)));
    }

    #[test]
    fn malformed_dimension_line_is_rejected() {
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 2\n2x2\n");

        assert!(matches!(decoder.decode(), Err(QuadDecodeErrors::InvalidHeader(_))));
    }

    #[test]
    fn missing_body_bytes_are_a_truncation() {
        // header promises 2x2 pixels, one codeword, body has 3 bytes
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 2\n2 2\n\x00\x00\x00");

        assert!(matches!(decoder.decode(), Err(QuadDecodeErrors::TruncatedStream(4, 3))));
    }

    #[test]
    fn exact_body_length_is_valid() {
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 2\n2 2\n\x00\x00\x00\x00");
        let image = decoder.decode().unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.denominator(), 255);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut decoder =
            QuadDecoder::new(b"COMP40 Compressed image format 2\n2 2\n\x00\x00\x00\x00junk");

        assert!(decoder.decode().is_ok());
    }

    #[test]
    fn dimensions_follow_the_header() {
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 2\n6 4\n");

        assert_eq!(decoder.dimensions(), None);
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((6, 4)));
    }

    #[test]
    fn odd_header_dimensions_round_down() {
        let mut decoder = QuadDecoder::new(b"COMP40 Compressed image format 2\n5 3\n");

        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((4, 2)));
    }

    #[test]
    fn dimension_limits_are_enforced() {
        let options = DecoderOptions::default().set_max_width(4);
        let mut decoder =
            QuadDecoder::new_with_options(b"COMP40 Compressed image format 2\n6 4\n", options);

        assert!(matches!(decoder.decode(), Err(QuadDecodeErrors::LargeDimensions(4, 6))));
    }
}
