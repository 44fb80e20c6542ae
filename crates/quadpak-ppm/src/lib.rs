/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Portable Pixmap images
//!
//! Supports the binary `P6` and plain `P3` flavors with maxvals up
//! to 65535, 16 bit samples are read and written big endian as
//! netpbm does. Decoded images keep their stated maxval as the
//! [`Pixmap`](quadpak_core::pixmap::Pixmap) denominator rather than
//! being rescaled.
//!
//! The crate also carries [`rmse`], the root mean square distance
//! between two pixmaps, which backs the `ppmdiff` tool.
//!
//! # Features
//! - `log`: routes this crate's log statements to the `log` crate
#![macro_use]
pub use decoder::*;
pub use diff::*;
pub use encoder::*;
pub use quadpak_core;
mod decoder;
mod diff;
mod encoder;
