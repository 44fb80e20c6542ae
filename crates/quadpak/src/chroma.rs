/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Chroma quantization table
//!
//! Average chroma values are stored on the wire as 4 bit indices
//! into a fixed 16 entry table of representative levels. The table
//! values are part of the stream format, changing them breaks every
//! already compressed image, so they are carried here verbatim.

/// The published 16 chroma levels, strictly increasing
const CHROMA_LEVELS: [f32; 16] = [
    -0.35, -0.20, -0.15, -0.10, -0.077, -0.055, -0.033, -0.011, 0.011, 0.033, 0.055, 0.077, 0.10,
    0.15, 0.20, 0.35
];

/// Map a chroma value to the index of its nearest table level
///
/// Values beyond either end of the table saturate to the first or
/// last index, so any input maps to a valid index.
pub fn index_of(chroma: f32) -> u8 {
    let mut lo = 0_usize;
    let mut hi = CHROMA_LEVELS.len() - 1;

    // bisect on the midpoints between adjacent levels
    while lo < hi {
        let mid = (lo + hi) / 2;
        let split = (CHROMA_LEVELS[mid] + CHROMA_LEVELS[mid + 1]) / 2.0;

        if chroma < split {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo as u8
}

/// Recover the chroma level stored at `index`
///
/// # Panics
/// If `index` is 16 or larger
pub fn value_of(index: u8) -> f32 {
    CHROMA_LEVELS[usize::from(index)]
}
