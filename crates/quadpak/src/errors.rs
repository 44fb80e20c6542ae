/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors from packing a value into a bit field too narrow for it
///
/// Carries the rejected value and the declared field width.
pub enum OverflowErrors {
    /// The unsigned value cannot be represented in the field width
    Unsigned(u64, u32),
    /// The signed value cannot be represented in the field width
    Signed(i64, u32)
}

impl Debug for OverflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            OverflowErrors::Unsigned(value, width) => {
                writeln!(
                    f,
                    "Value {value} does not fit an unsigned field of {width} bits"
                )
            }
            OverflowErrors::Signed(value, width) => {
                writeln!(
                    f,
                    "Value {value} does not fit a signed field of {width} bits"
                )
            }
        }
    }
}

/// Possible errors that may occur during compression
pub enum QuadEncodeErrors {
    /// A quantized coefficient does not fit its codeword field
    ///
    /// The quantizer always produces values that fit, so this
    /// points at hand-built coefficients fed to the packer
    Overflow(OverflowErrors)
}

impl Debug for QuadEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadEncodeErrors::Overflow(err) => {
                writeln!(f, "Cannot pack coefficients, {err:?}")
            }
        }
    }
}

/// Possible errors that may occur during decompression
pub enum QuadDecodeErrors {
    /// The stream does not start with the compressed format magic line
    ///
    /// Indicates the input is not a compressed image
    InvalidMagicBytes,
    /// The dimension line after the magic is malformed
    InvalidHeader(&'static str),
    /// Header dimensions exceed the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the dimension found in the header
    LargeDimensions(usize, usize),
    /// The stream ends before the declared codeword count is satisfied
    ///
    /// # Arguments
    /// - 1st argument is the number of body bytes the header promises
    /// - 2nd argument is the number of bytes actually left
    TruncatedStream(usize, usize)
}

impl Debug for QuadDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadDecodeErrors::InvalidMagicBytes => {
                writeln!(
                    f,
                    "Wrong magic bytes, expected `COMP40 Compressed image format 2` as stream start"
                )
            }
            QuadDecodeErrors::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            QuadDecodeErrors::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            QuadDecodeErrors::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Truncated stream, expected {expected} bytes of codewords but stream has {found}"
                )
            }
        }
    }
}

impl Display for OverflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for QuadEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for QuadDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OverflowErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QuadEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QuadDecodeErrors {}

impl From<OverflowErrors> for QuadEncodeErrors {
    fn from(value: OverflowErrors) -> Self {
        QuadEncodeErrors::Overflow(value)
    }
}
