/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Magic line opening every compressed stream, newline not included
pub const QUAD_MAGIC: &str = "COMP40 Compressed image format 2";

/// Bytes one packed codeword occupies on the wire
pub const CODEWORD_SIZE: usize = 4;

// Field layout inside one 32 bit codeword, from the most significant
// bit down: a (6, unsigned), b, c, d (6 each, signed), pb and pr
// (4 each, unsigned chroma indices)
pub const A_WIDTH: u32 = 6;
pub const A_LSB: u32 = 26;
pub const B_WIDTH: u32 = 6;
pub const B_LSB: u32 = 20;
pub const C_WIDTH: u32 = 6;
pub const C_LSB: u32 = 14;
pub const D_WIDTH: u32 = 6;
pub const D_LSB: u32 = 8;
pub const PB_WIDTH: u32 = 4;
pub const PB_LSB: u32 = 4;
pub const PR_WIDTH: u32 = 4;
pub const PR_LSB: u32 = 0;

/// Scale turning the average brightness into a 6 bit code
pub const A_SCALE: f32 = 63.0;
/// Scale turning the brightness differences into signed 6 bit codes
pub const BCD_SCALE: f32 = 100.0;
/// Magnitude the brightness differences are clamped to before scaling
pub const BCD_CLAMP: f32 = 0.3;

/// Denominator every decompressed image is scaled against
pub const OUT_DENOMINATOR: u16 = 255;
