/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder options
//!
//! Limits a decoder consults before trusting dimensions read from a
//! stream. A hostile header can otherwise request an absurd
//! allocation before a single pixel is decoded.
//!
//! Options use a builder pattern, setters consume and return the
//! options struct
//!
//! ```
//! use quadpak_core::options::DecoderOptions;
//!
//! let options = DecoderOptions::default().set_max_width(1 << 10);
//!
//! assert_eq!(options.get_max_width(), 1 << 10);
//! ```

/// Limits applied to dimensions read from untrusted streams
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// maximum width for which decoders will not try to decode
    /// images larger than the specified width
    max_width:  usize,
    /// maximum height for which decoders will not try to decode
    /// images larger than the specified height
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions { max_width: 1 << 14, max_height: 1 << 14 }
    }
}

impl DecoderOptions {
    /// Get the maximum width configured for which the decoder
    /// can accept
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum height configured for which the decoder
    /// can accept
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}
