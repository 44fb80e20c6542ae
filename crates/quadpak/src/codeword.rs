/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Codeword assembly and disassembly
//!
//! One quantized block becomes one 32 bit codeword, fields packed
//! msb first: `a` at bit 26, `b` at 20, `c` at 14, `d` at 8, `pb` at
//! 4 and `pr` at 0. The layout lives in [`crate::constants`], the
//! bit surgery in [`crate::bitpack`].

use quadpak_core::array2::Array2;

use crate::bitpack;
use crate::constants::{
    A_LSB, A_WIDTH, B_LSB, B_WIDTH, C_LSB, C_WIDTH, D_LSB, D_WIDTH, PB_LSB, PB_WIDTH, PR_LSB,
    PR_WIDTH
};
use crate::errors::OverflowErrors;
use crate::quantize::QuantCoeffs;

/// Pack one block's quantized coefficients into a codeword
///
/// # Errors
/// [`OverflowErrors`] when a coefficient does not fit its field,
/// codes straight from the quantizer always fit.
pub fn pack(quantized: QuantCoeffs) -> Result<u32, OverflowErrors> {
    let mut word = 0_u64;

    word = bitpack::set_unsigned(word, A_WIDTH, A_LSB, u64::from(quantized.a))?;
    word = bitpack::set_signed(word, B_WIDTH, B_LSB, i64::from(quantized.b))?;
    word = bitpack::set_signed(word, C_WIDTH, C_LSB, i64::from(quantized.c))?;
    word = bitpack::set_signed(word, D_WIDTH, D_LSB, i64::from(quantized.d))?;
    word = bitpack::set_unsigned(word, PB_WIDTH, PB_LSB, u64::from(quantized.pb))?;
    word = bitpack::set_unsigned(word, PR_WIDTH, PR_LSB, u64::from(quantized.pr))?;

    Ok(word as u32)
}

/// Split one codeword back into quantized coefficients
pub fn unpack(word: u32) -> QuantCoeffs {
    let word = u64::from(word);

    QuantCoeffs {
        a:  bitpack::get_unsigned(word, A_WIDTH, A_LSB) as u8,
        b:  bitpack::get_signed(word, B_WIDTH, B_LSB) as i8,
        c:  bitpack::get_signed(word, C_WIDTH, C_LSB) as i8,
        d:  bitpack::get_signed(word, D_WIDTH, D_LSB) as i8,
        pb: bitpack::get_unsigned(word, PB_WIDTH, PB_LSB) as u8,
        pr: bitpack::get_unsigned(word, PR_WIDTH, PR_LSB) as u8
    }
}

/// Pack a whole array of quantized blocks
///
/// # Errors
/// The first [`OverflowErrors`] hit, nothing is returned for the
/// blocks packed before it.
pub fn pack_coeffs<I, O>(quantized: &I) -> Result<O, OverflowErrors>
where
    I: Array2<QuantCoeffs>,
    O: Array2<u32>
{
    let mut out = O::new(quantized.width(), quantized.height(), 0);

    for row in 0..quantized.height() {
        for col in 0..quantized.width() {
            *out.at_mut(col, row) = pack(*quantized.at(col, row))?;
        }
    }
    Ok(out)
}

/// Unpack a whole array of codewords
pub fn unpack_coeffs<I, O>(words: &I) -> O
where
    I: Array2<u32>,
    O: Array2<QuantCoeffs>
{
    let mut out = O::new(words.width(), words.height(), QuantCoeffs::default());

    out.for_each_mut(|col, row, quantized| {
        *quantized = unpack(*words.at(col, row));
    });
    out
}

#[cfg(test)]
mod tests {
    use super::{pack, unpack};
    use crate::quantize::QuantCoeffs;

    #[test]
    fn fields_land_at_their_documented_positions() {
        let a_only = pack(QuantCoeffs { a: 63, ..QuantCoeffs::default() }).unwrap();
        assert_eq!(a_only, 63 << 26);

        let b_only = pack(QuantCoeffs { b: -1, ..QuantCoeffs::default() }).unwrap();
        assert_eq!(b_only, 0x3f << 20);

        let d_only = pack(QuantCoeffs { d: 1, ..QuantCoeffs::default() }).unwrap();
        assert_eq!(d_only, 1 << 8);

        let pb_only = pack(QuantCoeffs { pb: 15, ..QuantCoeffs::default() }).unwrap();
        assert_eq!(pb_only, 15 << 4);

        let pr_only = pack(QuantCoeffs { pr: 15, ..QuantCoeffs::default() }).unwrap();
        assert_eq!(pr_only, 15);
    }

    #[test]
    fn extreme_codes_round_trip() {
        let quantized = QuantCoeffs { a: 63, b: -32, c: 31, d: -1, pb: 15, pr: 0 };

        assert_eq!(unpack(pack(quantized).unwrap()), quantized);
    }

    #[test]
    fn every_bit_of_the_word_is_claimed() {
        let all_ones = QuantCoeffs { a: 63, b: -1, c: -1, d: -1, pb: 15, pr: 15 };

        assert_eq!(pack(all_ones).unwrap(), u32::MAX);
    }

    #[test]
    fn out_of_contract_codes_fail_to_pack() {
        assert!(pack(QuantCoeffs { a: 64, ..QuantCoeffs::default() }).is_err());
        assert!(pack(QuantCoeffs { b: 32, ..QuantCoeffs::default() }).is_err());
        assert!(pack(QuantCoeffs { pb: 16, ..QuantCoeffs::default() }).is_err());
    }
}
