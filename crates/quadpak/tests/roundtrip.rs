/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! End to end compression tests

use nanorand::Rng;
use quadpak::quantize::QuantCoeffs;
use quadpak::{blocks, codeword, color, quantize, QuadDecoder, QuadDecodeErrors, QuadEncoder};
use quadpak_core::array2::{Array2, BlockedArray2, FlatArray2};
use quadpak_core::pixmap::{Pixmap, Rgb};

const MAGIC_LINE: &[u8] = b"COMP40 Compressed image format 2\n";

/// An image whose 2x2 blocks each hold one random mid-range color
///
/// Block constant input keeps the brightness differences at zero, so
/// the only loss left is brightness and chroma quantization.
fn block_constant_image(width: usize, height: usize) -> Pixmap<FlatArray2<Rgb>> {
    let mut rand = nanorand::WyRand::new();
    let mut blocks: FlatArray2<Rgb> = FlatArray2::new(width / 2, height / 2, Rgb::default());

    blocks.for_each_mut(|_, _, pixel| {
        *pixel = Rgb::new(
            64 + u16::from(rand.generate::<u8>() % 128),
            64 + u16::from(rand.generate::<u8>() % 128),
            64 + u16::from(rand.generate::<u8>() % 128)
        );
    });

    let mut pixels: FlatArray2<Rgb> = FlatArray2::new(width, height, Rgb::default());

    pixels.for_each_mut(|col, row, pixel| {
        *pixel = *blocks.at(col / 2, row / 2);
    });
    Pixmap::new(pixels, 255)
}

fn channel_deviation(a: Rgb, b: Rgb) -> u16 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn uniform_gray_block_hits_the_expected_codeword() {
    let pixels: FlatArray2<Rgb> = FlatArray2::new(2, 2, Rgb::new(128, 128, 128));
    let image = Pixmap::new(pixels, 255);

    let bytes = QuadEncoder::new(&image).encode().unwrap();
    let header_len = MAGIC_LINE.len() + b"2 2\n".len();

    assert_eq!(bytes.len(), header_len + 4);

    let word = u32::from_be_bytes(bytes[header_len..].try_into().unwrap());
    let quantized = codeword::unpack(word);

    // mid gray brightness 128/255 scales to code 32 of 63
    assert_eq!(quantized.a, 32);
    assert_eq!(quantized.b, 0);
    assert_eq!(quantized.c, 0);
    assert_eq!(quantized.d, 0);
    // the chroma table has no zero level, gray sits between the two
    // innermost entries
    assert!(quantized.pb == 7 || quantized.pb == 8);
    assert!(quantized.pr == 7 || quantized.pr == 8);
}

#[test]
fn uniform_gray_block_decodes_close_to_its_source() {
    let pixels: FlatArray2<Rgb> = FlatArray2::new(2, 2, Rgb::new(128, 128, 128));
    let image = Pixmap::new(pixels, 255);

    let bytes = QuadEncoder::new(&image).encode().unwrap();
    let decoded = QuadDecoder::new(&bytes).decode().unwrap();

    // one brightness step plus one innermost chroma level of drift
    decoded.pixels().for_each(|_, _, pixel| {
        assert!(channel_deviation(*pixel, Rgb::new(128, 128, 128)) <= 8, "{pixel:?}");
    });
}

#[test]
fn block_constant_images_stay_within_tolerance() {
    let image = block_constant_image(16, 10);
    let bytes = QuadEncoder::new(&image).encode().unwrap();

    let decoded = QuadDecoder::new(&bytes).decode().unwrap();

    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 10);
    assert_eq!(decoded.denominator(), 255);

    decoded.pixels().for_each(|col, row, pixel| {
        let source = *image.pixels().at(col, row);

        assert!(
            channel_deviation(*pixel, source) <= 30,
            "({col},{row}) drifted from {source:?} to {pixel:?}"
        );
    });
}

#[test]
fn arbitrary_images_keep_their_shape() {
    let mut rand = nanorand::WyRand::new();

    for (width, height) in [(2, 2), (4, 6), (14, 2), (8, 8)] {
        let mut pixels: FlatArray2<Rgb> = FlatArray2::new(width, height, Rgb::default());

        pixels.for_each_mut(|_, _, pixel| {
            *pixel = Rgb::new(
                u16::from(rand.generate::<u8>()),
                u16::from(rand.generate::<u8>()),
                u16::from(rand.generate::<u8>())
            );
        });

        let image = Pixmap::new(pixels, 255);
        let bytes = QuadEncoder::new(&image).encode().unwrap();
        let decoded = QuadDecoder::new(&bytes).decode().unwrap();

        assert_eq!(decoded.width(), width);
        assert_eq!(decoded.height(), height);
        assert_eq!(decoded.denominator(), 255);
    }
}

#[test]
fn wide_denominators_normalize_to_255() {
    let pixels: FlatArray2<Rgb> = FlatArray2::new(4, 4, Rgb::new(500, 500, 500));
    let image = Pixmap::new(pixels, 1000);

    let bytes = QuadEncoder::new(&image).encode().unwrap();
    let decoded = QuadDecoder::new(&bytes).decode().unwrap();

    assert_eq!(decoded.denominator(), 255);
    // 500 of 1000 is the same mid gray as 128 of 255
    decoded.pixels().for_each(|_, _, pixel| {
        assert!(channel_deviation(*pixel, Rgb::new(128, 128, 128)) <= 10, "{pixel:?}");
    });
}

#[test]
fn flat_and_blocked_storage_compress_identically() {
    let flat_image = block_constant_image(12, 8);

    let mut tiled: BlockedArray2<Rgb> = BlockedArray2::new_with_blocksize(12, 8, 3, Rgb::default());

    tiled.for_each_mut(|col, row, pixel| {
        *pixel = *flat_image.pixels().at(col, row);
    });
    let tiled_image = Pixmap::new(tiled, 255);

    let from_flat = QuadEncoder::new(&flat_image).encode().unwrap();
    let from_tiled = QuadEncoder::new(&tiled_image).encode().unwrap();

    assert_eq!(from_flat, from_tiled);
}

#[test]
fn encoded_bytes_match_the_stage_pipeline() {
    let mut pixels: FlatArray2<Rgb> = FlatArray2::new(4, 2, Rgb::default());

    pixels.for_each_mut(|col, row, pixel| {
        *pixel = Rgb::new((40 * col) as u16, (90 * row) as u16, 77);
    });
    let image = Pixmap::new(pixels, 255);

    let bytes = QuadEncoder::new(&image).encode().unwrap();

    // run the public stages by hand and lay the stream out manually
    let cv: FlatArray2<quadpak::color::CvPixel> = color::rgb_to_cv(&image);
    let coeffs: FlatArray2<quadpak::blocks::Coeffs> = blocks::cv_to_coeffs(&cv);
    let quantized: FlatArray2<QuantCoeffs> = quantize::quantize_coeffs(&coeffs);

    let mut expected = Vec::new();

    expected.extend_from_slice(MAGIC_LINE);
    expected.extend_from_slice(b"4 2\n");
    quantized.for_each(|_, _, q| {
        expected.extend_from_slice(&codeword::pack(*q).unwrap().to_be_bytes());
    });

    assert_eq!(bytes, expected);
}

#[test]
fn handcrafted_stream_decodes_through_the_stage_pipeline() {
    let mut quantized: FlatArray2<QuantCoeffs> = FlatArray2::new(2, 1, QuantCoeffs::default());

    *quantized.at_mut(0, 0) = QuantCoeffs { a: 40, b: -12, c: 7, d: 0, pb: 3, pr: 12 };
    *quantized.at_mut(1, 0) = QuantCoeffs { a: 5, b: 30, c: -30, d: 15, pb: 0, pr: 15 };

    let mut stream = Vec::new();

    stream.extend_from_slice(MAGIC_LINE);
    stream.extend_from_slice(b"4 2\n");
    quantized.for_each(|_, _, q| {
        stream.extend_from_slice(&codeword::pack(*q).unwrap().to_be_bytes());
    });

    let decoded = QuadDecoder::new(&stream).decode().unwrap();

    let coeffs: FlatArray2<quadpak::blocks::Coeffs> = quantize::dequantize_coeffs(&quantized);
    let cv: FlatArray2<quadpak::color::CvPixel> = blocks::coeffs_to_cv(&coeffs);
    let expected: Pixmap<FlatArray2<Rgb>> = color::cv_to_rgb(&cv);

    assert_eq!(decoded.width(), expected.width());
    assert_eq!(decoded.height(), expected.height());
    expected.pixels().for_each(|col, row, pixel| {
        assert_eq!(pixel, decoded.pixels().at(col, row), "({col},{row})");
    });
}

#[test]
fn truncating_an_encode_breaks_the_decode() {
    let image = block_constant_image(4, 4);
    let mut bytes = QuadEncoder::new(&image).encode().unwrap();

    bytes.pop();

    let result = QuadDecoder::new(&bytes).decode();

    assert!(matches!(result, Err(QuadDecodeErrors::TruncatedStream(16, 15))));
}
