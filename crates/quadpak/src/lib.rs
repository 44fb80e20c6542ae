/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A lossy still image codec built on 2x2 pixel blocks
//!
//! Every 2x2 block of the source collapses into one 32 bit codeword
//! holding the block's quantized mean brightness, three brightness
//! differences and its average chroma. Compression discards
//! information, decompressing gives an image close to, never equal
//! to, the source.
//!
//! The pipeline runs color transform, block transform, quantization
//! and codeword packing as separate full passes, each stage
//! allocating a fresh array for its output. [`QuadEncoder`] and
//! [`QuadDecoder`] wrap the pipeline behind the usual decoder and
//! encoder surface, the stage modules stay public for callers that
//! want only a piece of it.
//!
//! # Features
//! - `log`: routes this crate's trace statements to the `log` crate
#![macro_use]

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use quadpak_core;

pub mod bitpack;
pub mod blocks;
pub mod chroma;
pub mod codeword;
pub mod color;
mod constants;
mod decoder;
mod encoder;
mod errors;
pub mod quantize;
