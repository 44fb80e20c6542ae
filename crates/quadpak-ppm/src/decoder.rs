/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use quadpak_core::array2::{Array2, FlatArray2};
use quadpak_core::bytestream::QByteReader;
use quadpak_core::log::info;
use quadpak_core::options::DecoderOptions;
use quadpak_core::pixmap::{Pixmap, Rgb};

/// Possible errors that may occur when reading a Portable Pixmap
pub enum PpmDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    /// A header field is present but carries a value the format
    /// does not allow
    InvalidHeader(String),
    /// Header dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the dimension found in the header
    LargeDimensions(usize, usize)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PpmDecodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            PpmDecodeErrors::GenericStatic(val) => writeln!(f, "{val}"),
            PpmDecodeErrors::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            PpmDecodeErrors::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
        }
    }
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmDecodeErrors {}

/// An instance of a PPM decoder
///
/// The decoder reads the binary `P6` and plain `P3` flavors and
/// hands back a [`Pixmap`] whose denominator is the maxval the
/// header declared.
pub struct PpmDecoder<'a> {
    stream:          QByteReader<'a>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    denominator:     u16,
    plain:           bool,
    decoded_headers: bool
}

impl<'a> PpmDecoder<'a> {
    /// Create a new PPM decoder with default options
    ///
    /// # Arguments
    /// - `data`: PPM encoded bytes
    ///
    /// # Example
    /// ```
    /// use quadpak_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(b"NOT A VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PpmDecoder<'a> {
        PpmDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - `data`: PPM encoded bytes
    /// - `options`: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use quadpak_core::options::DecoderOptions;
    /// use quadpak_ppm::PpmDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1 << 4);
    /// let mut decoder = PpmDecoder::new_with_options(b"P6\n32 32\n255\n", options);
    ///
    /// // thirty two pixels wide, the limit says sixteen
    /// assert!(decoder.decode_headers().is_err());
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PpmDecoder<'a> {
        PpmDecoder {
            stream: QByteReader::new(data),
            options,
            width: 0,
            height: 0,
            denominator: 0,
            plain: false,
            decoded_headers: false
        }
    }

    /// Read the PPM header and store it in the internal state
    ///
    /// Calling this again after a successful call is a no op.
    ///
    /// # Errors
    /// On a wrong magic, a malformed or out of range header field,
    /// or dimensions above the configured limits.
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.stream.has(2) {
            let len = self.stream.remaining();
            let msg = format!("Expected at least 2 bytes of magic but stream has {len}");

            return Err(PpmDecodeErrors::Generic(msg));
        }
        let p = self.stream.get_u8();
        let version = self.stream.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as the first byte but got '{}'", p as char);

            return Err(PpmDecodeErrors::Generic(msg));
        }
        match version {
            b'3' => self.plain = true,
            b'6' => self.plain = false,
            _ => {
                let msg = format!(
                    "Unsupported PPM version `{}`, supported versions are 3 and 6",
                    version as char
                );

                return Err(PpmDecodeErrors::Generic(msg));
            }
        }
        skip_spaces(&mut self.stream);
        self.width = self.get_integer();

        if self.width > self.options.get_max_width() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        skip_spaces(&mut self.stream);
        self.height = self.get_integer();

        if self.height > self.options.get_max_height() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        info!("Width: {}, height: {}", self.width, self.height);

        skip_spaces(&mut self.stream);
        let max_value = self.get_integer();

        if !(1..=usize::from(u16::MAX)).contains(&max_value) {
            let msg = format!("Maxval {max_value} is outside the supported range 1..=65535");

            return Err(PpmDecodeErrors::InvalidHeader(msg));
        }
        self.denominator = max_value as u16;

        if !self.plain {
            // the raster begins right after a single whitespace byte
            let byte = self.stream.get_u8();

            if !byte.is_ascii_whitespace() {
                let msg = format!(
                    "Expected one whitespace byte after the maxval but got '{}'",
                    byte as char
                );

                return Err(PpmDecodeErrors::InvalidHeader(msg));
            }
        }
        info!("Maxval: {}", self.denominator);

        self.decoded_headers = true;

        Ok(())
    }

    /// Read digits off the stream until a non digit byte, which is
    /// left in place for the next reader
    fn get_integer(&mut self) -> usize {
        let mut value = 0_usize;

        while !self.stream.eof() {
            let byte = self.stream.get_u8();

            if byte.is_ascii_digit() {
                // if it overflows, we have bigger problems.
                value = value.wrapping_mul(10).wrapping_add(usize::from(byte - b'0'));
            } else {
                // rewind to the previous byte
                self.stream.rewind(1);
                break;
            }
        }
        value
    }

    /// Return the image dimensions as a `(width, height)` tuple or
    /// `None` if the headers have not been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the maxval the header declared or `None` if the
    /// headers have not been decoded
    pub const fn denominator(&self) -> Option<u16> {
        if self.decoded_headers {
            Some(self.denominator)
        } else {
            None
        }
    }

    /// Decode a PPM stream into pixels
    ///
    /// Bytes past the raster are left unread, a stream may carry
    /// trailing data without upsetting the decoder.
    ///
    /// # Errors
    /// On any header error, a raster shorter than the header
    /// promises, or a sample above the declared maxval.
    ///
    /// # Example
    /// ```
    /// use quadpak_core::array2::Array2;
    /// use quadpak_ppm::PpmDecoder;
    ///
    /// let mut decoder = PpmDecoder::new(b"P3\n1 1\n255\n12 0 255\n");
    /// let image = decoder.decode().unwrap();
    ///
    /// assert_eq!(image.width(), 1);
    /// assert_eq!(image.pixels().at(0, 0).b, 255);
    /// ```
    pub fn decode(&mut self) -> Result<Pixmap<FlatArray2<Rgb>>, PpmDecodeErrors> {
        self.decode_headers()?;

        let mut pixels = FlatArray2::new(self.width, self.height, Rgb::default());

        if self.plain {
            self.decode_plain(&mut pixels)?;
        } else {
            self.decode_raw(&mut pixels)?;
        }
        Ok(Pixmap::new(pixels, self.denominator))
    }

    /// Read the binary raster of a `P6` stream
    fn decode_raw(&mut self, pixels: &mut FlatArray2<Rgb>) -> Result<(), PpmDecodeErrors> {
        let sample_size = if self.denominator > 255 { 2 } else { 1 };
        let size = self.width * self.height * 3 * sample_size;
        let remaining = self.stream.remaining();

        if remaining < size {
            let msg = format!("Expected {size} bytes of raster but stream has {remaining}");

            return Err(PpmDecodeErrors::Generic(msg));
        }
        for row in 0..self.height {
            for col in 0..self.width {
                let (r, g, b) = if sample_size == 2 {
                    (
                        self.stream.get_u16_be(),
                        self.stream.get_u16_be(),
                        self.stream.get_u16_be()
                    )
                } else {
                    (
                        u16::from(self.stream.get_u8()),
                        u16::from(self.stream.get_u8()),
                        u16::from(self.stream.get_u8())
                    )
                };
                *pixels.at_mut(col, row) = Rgb::new(
                    self.check_sample(r)?,
                    self.check_sample(g)?,
                    self.check_sample(b)?
                );
            }
        }
        Ok(())
    }

    /// Read the whitespace separated decimal raster of a `P3` stream
    fn decode_plain(&mut self, pixels: &mut FlatArray2<Rgb>) -> Result<(), PpmDecodeErrors> {
        for row in 0..self.height {
            for col in 0..self.width {
                let r = self.get_plain_sample()?;
                let g = self.get_plain_sample()?;
                let b = self.get_plain_sample()?;

                *pixels.at_mut(col, row) = Rgb::new(r, g, b);
            }
        }
        Ok(())
    }

    /// Read one decimal sample, requiring at least one digit
    fn get_plain_sample(&mut self) -> Result<u16, PpmDecodeErrors> {
        skip_spaces(&mut self.stream);

        if self.stream.eof() {
            return Err(PpmDecodeErrors::GenericStatic(
                "No more bytes, the raster ends before the promised sample count"
            ));
        }
        let byte = self.stream.get_u8();

        if !byte.is_ascii_digit() {
            let msg = format!("Expected a digit in the raster but got '{}'", byte as char);

            return Err(PpmDecodeErrors::Generic(msg));
        }
        self.stream.rewind(1);

        let value = self.get_integer();

        if value > usize::from(self.denominator) {
            let msg = format!(
                "Sample {value} is greater than the maxval {}",
                self.denominator
            );

            return Err(PpmDecodeErrors::Generic(msg));
        }
        Ok(value as u16)
    }

    /// Reject samples above the declared maxval
    fn check_sample(&self, sample: u16) -> Result<u16, PpmDecodeErrors> {
        if sample > self.denominator {
            let msg = format!(
                "Sample {sample} is greater than the maxval {}",
                self.denominator
            );

            return Err(PpmDecodeErrors::Generic(msg));
        }
        Ok(sample)
    }
}

/// Skip whitespace and `#` comments, stopping at the first byte
/// that is neither or at the end of the stream
fn skip_spaces(stream: &mut QByteReader) {
    while !stream.eof() {
        let mut byte = stream.get_u8();

        if byte == b'#' {
            // a comment runs to the end of its line
            while byte != b'\n' && !stream.eof() {
                byte = stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            stream.rewind(1);
            break;
        }
    }
}
