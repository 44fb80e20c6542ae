/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the quadpak crates
//!
//! This crate provides the small set of building blocks the
//! compressed-image codec, the pixel-map codec and the command line
//! tools all lean on
//!
//! It currently contains
//!
//! - A bytestream reader and writer with big endian aware reads and writes
//! - A generic 2D container with a flat and a cache-tiled implementation
//! - The pixel map type handed between the pixel-map codec and the compressor
//! - Decoder options shared by the decoders
//!
//! # Features
//!  - `std`: Link the standard library, on by default. Without it the
//!     crate is `no_std` and only needs `alloc`
//!  - `log`: Route the crate's logging statements to the `log` crate,
//!     otherwise they compile to nothing
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod array2;
pub mod bytestream;
pub mod options;
pub mod pixmap;

#[cfg(feature = "log")]
pub use log;

#[cfg(not(feature = "log"))]
pub mod log;
