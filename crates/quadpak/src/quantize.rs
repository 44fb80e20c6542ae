/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Coefficient quantization
//!
//! Maps block coefficients to the small integer codes the codeword
//! stores and back. Brightness codes scale by 63 and 100, chroma
//! goes through the fixed table in [`crate::chroma`].
//!
//! Rounding is to the nearest integer with ties away from zero,
//! `0.315` scales to `32` and `-0.315` to `-32`.
//!
//! The forward direction clamps the differences before scaling, the
//! inverse unscales first and re-clamps after, so a hostile code
//! outside the produced range still lands inside `[-0.3, 0.3]`.

use quadpak_core::array2::Array2;

use crate::blocks::Coeffs;
use crate::chroma;
use crate::constants::{A_SCALE, BCD_CLAMP, BCD_SCALE};

/// One block's coefficients as wire ready integer codes
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct QuantCoeffs {
    /// mean brightness code, `[0, 63]`
    pub a:  u8,
    /// difference codes, `[-30, 30]` when produced by [`quantize`]
    pub b:  i8,
    pub c:  i8,
    pub d:  i8,
    /// chroma table indices, `[0, 15]`
    pub pb: u8,
    pub pr: u8
}

/// Quantize one block's coefficients
pub fn quantize(coeffs: Coeffs) -> QuantCoeffs {
    QuantCoeffs {
        a:  (coeffs.a * A_SCALE).round() as u8,
        b:  (coeffs.b.clamp(-BCD_CLAMP, BCD_CLAMP) * BCD_SCALE).round() as i8,
        c:  (coeffs.c.clamp(-BCD_CLAMP, BCD_CLAMP) * BCD_SCALE).round() as i8,
        d:  (coeffs.d.clamp(-BCD_CLAMP, BCD_CLAMP) * BCD_SCALE).round() as i8,
        pb: chroma::index_of(coeffs.pb),
        pr: chroma::index_of(coeffs.pr)
    }
}

/// Recover approximate coefficients from their integer codes
pub fn dequantize(quantized: QuantCoeffs) -> Coeffs {
    Coeffs {
        a:  f32::from(quantized.a) / A_SCALE,
        b:  (f32::from(quantized.b) / BCD_SCALE).clamp(-BCD_CLAMP, BCD_CLAMP),
        c:  (f32::from(quantized.c) / BCD_SCALE).clamp(-BCD_CLAMP, BCD_CLAMP),
        d:  (f32::from(quantized.d) / BCD_SCALE).clamp(-BCD_CLAMP, BCD_CLAMP),
        pb: chroma::value_of(quantized.pb),
        pr: chroma::value_of(quantized.pr)
    }
}

/// Quantize every block of a coefficient array
pub fn quantize_coeffs<I, O>(coeffs: &I) -> O
where
    I: Array2<Coeffs>,
    O: Array2<QuantCoeffs>
{
    let mut out = O::new(coeffs.width(), coeffs.height(), QuantCoeffs::default());

    out.for_each_mut(|col, row, quantized| {
        *quantized = quantize(*coeffs.at(col, row));
    });
    out
}

/// Dequantize every block of a code array
pub fn dequantize_coeffs<I, O>(quantized: &I) -> O
where
    I: Array2<QuantCoeffs>,
    O: Array2<Coeffs>
{
    let mut out = O::new(quantized.width(), quantized.height(), Coeffs::default());

    out.for_each_mut(|col, row, coeffs| {
        *coeffs = dequantize(*quantized.at(col, row));
    });
    out
}

#[cfg(test)]
mod tests {
    use super::{dequantize, quantize, QuantCoeffs};
    use crate::blocks::Coeffs;

    #[test]
    fn differences_clamp_before_scaling() {
        let coeffs = Coeffs { a: 0.0, b: 5.0, c: -5.0, d: 0.31, pb: 0.0, pr: 0.0 };
        let quantized = quantize(coeffs);

        assert_eq!(quantized.b, 30);
        assert_eq!(quantized.c, -30);
        assert_eq!(quantized.d, 30);
    }

    #[test]
    fn brightness_covers_the_full_code_range() {
        assert_eq!(quantize(Coeffs { a: 0.0, ..Coeffs::default() }).a, 0);
        assert_eq!(quantize(Coeffs { a: 1.0, ..Coeffs::default() }).a, 63);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 0.5 * 63 is exactly 31.5
        assert_eq!(quantize(Coeffs { a: 0.5, ..Coeffs::default() }).a, 32);
        assert_eq!(quantize(Coeffs { b: 0.125, ..Coeffs::default() }).b, 13);
        assert_eq!(quantize(Coeffs { b: -0.125, ..Coeffs::default() }).b, -13);
    }

    #[test]
    fn hostile_codes_reclamp_on_the_way_out() {
        let coeffs = dequantize(QuantCoeffs { b: 100, c: -100, ..QuantCoeffs::default() });

        assert_eq!(coeffs.b, 0.3);
        assert_eq!(coeffs.c, -0.3);
    }

    #[test]
    fn quantization_is_stable_for_representable_codes() {
        for a in 0..=63_u8 {
            for bcd in [-30_i8, -13, 0, 7, 30] {
                for chroma_index in [0_u8, 7, 8, 15] {
                    let quantized = QuantCoeffs {
                        a,
                        b: bcd,
                        c: -bcd,
                        d: bcd,
                        pb: chroma_index,
                        pr: 15 - chroma_index
                    };

                    assert_eq!(quantize(dequantize(quantized)), quantized);
                }
            }
        }
    }
}
