/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Arbitrary width bit field packing over a 64 bit word
//!
//! Fields are addressed by their width in bits and the position of
//! their least significant bit inside the word, with bit 0 as the
//! least significant bit of the word. Any `width` in `[0, 64]` with
//! `width + lsb <= 64` is a valid field, so a zero width field and a
//! field spanning the whole word both work, with no shift ever equal
//! to the word width.
//!
//! All operations are pure functions, setters return a new word and
//! never touch bits outside the addressed field.

use crate::errors::OverflowErrors;

/// Panics when the field does not lie inside a 64 bit word
fn check_field(width: u32, lsb: u32) {
    assert!(width <= 64, "field width {width} exceeds 64 bits");
    assert!(
        lsb <= 64 && width + lsb <= 64,
        "field of width {width} at bit {lsb} reaches past the word"
    );
}

/// Check whether `value` is representable in an unsigned field of
/// `width` bits
///
/// A zero width field holds only the value `0`.
///
/// # Panics
/// If `width > 64`
pub fn fits_unsigned(value: u64, width: u32) -> bool {
    assert!(width <= 64, "field width {width} exceeds 64 bits");

    if width == 64 {
        return true;
    }
    value >> width == 0
}

/// Check whether `value` is representable in a two's complement
/// field of `width` bits
///
/// No value fits a zero width field, a signed field always spends
/// one bit on the sign.
///
/// # Panics
/// If `width > 64`
pub fn fits_signed(value: i64, width: u32) -> bool {
    assert!(width <= 64, "field width {width} exceeds 64 bits");

    if width == 0 {
        return false;
    }
    if width == 64 {
        return true;
    }
    let bound = 1_i64 << (width - 1);

    (-bound..bound).contains(&value)
}

/// Extract the `width` bit unsigned field at `lsb` from `word`
///
/// A zero width field reads as `0`.
///
/// # Panics
/// If `width > 64` or `width + lsb > 64`
pub fn get_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    check_field(width, lsb);

    if width == 0 {
        return 0;
    }
    if width == 64 {
        return word;
    }
    (word >> lsb) & ((1 << width) - 1)
}

/// Extract the `width` bit field at `lsb` from `word`, sign extended
/// from its most significant bit
///
/// A zero width field reads as `0`.
///
/// # Panics
/// If `width > 64` or `width + lsb > 64`
pub fn get_signed(word: u64, width: u32, lsb: u32) -> i64 {
    check_field(width, lsb);

    if width == 0 {
        return 0;
    }
    if width == 64 {
        return word as i64;
    }
    let raw = (word >> lsb) & ((1 << width) - 1);

    // park the field at the top of the word, the arithmetic shift
    // back drags the sign bit down with it
    ((raw << (64 - width)) as i64) >> (64 - width)
}

/// Return `word` with its `width` bit field at `lsb` replaced by
/// `value`, all other bits untouched
///
/// # Errors
/// [`OverflowErrors::Unsigned`] when `value` does not fit the field.
///
/// # Panics
/// If `width > 64` or `width + lsb > 64`
pub fn set_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64, OverflowErrors> {
    check_field(width, lsb);

    if !fits_unsigned(value, width) {
        return Err(OverflowErrors::Unsigned(value, width));
    }
    if width == 0 {
        return Ok(word);
    }
    if width == 64 {
        return Ok(value);
    }
    let mask = ((1_u64 << width) - 1) << lsb;

    Ok((word & !mask) | (value << lsb))
}

/// Return `word` with its `width` bit field at `lsb` replaced by the
/// low `width` bits of the two's complement representation of
/// `value`, all other bits untouched
///
/// # Errors
/// [`OverflowErrors::Signed`] when `value` does not fit the field.
///
/// # Panics
/// If `width > 64` or `width + lsb > 64`
pub fn set_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64, OverflowErrors> {
    check_field(width, lsb);

    if !fits_signed(value, width) {
        return Err(OverflowErrors::Signed(value, width));
    }
    if width == 64 {
        return Ok(value as u64);
    }
    // width 0 never gets here, no signed value fits it
    let field = (value as u64) & ((1 << width) - 1);
    let mask = ((1_u64 << width) - 1) << lsb;

    Ok((word & !mask) | (field << lsb))
}
