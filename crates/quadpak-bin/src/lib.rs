/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::error::Error;
use std::process::exit;

use clap::error::ErrorKind;
use clap::ArgMatches;
use log::error;
use quadpak::{QuadDecoder, QuadEncoder};
use quadpak_core::options::DecoderOptions;
use quadpak_ppm::{PpmDecoder, PpmEncoder};

mod cmd_args;
mod cmd_parsers;
pub mod file_io;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // clap exits with 2 on usage problems, this tool
            // promises 1, help stays a success
            let failed = err.kind() != ErrorKind::DisplayHelp;
            let _ = err.print();

            exit(i32::from(failed));
        }
    };
    cmd_parsers::setup_logger(&options);

    if let Err(err) = run(&options) {
        error!("Could not complete the run, reason {:?}", err);
        exit(1);
    }
}

fn run(options: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let path = options.get_one::<String>("file").map(String::as_str);
    let input = file_io::read_input(path)?;
    let decoder_options = cmd_parsers::get_decoder_options(options);

    let output = if options.get_flag("decompress") {
        decompress(&input, decoder_options)?
    } else {
        compress(&input, decoder_options)?
    };
    file_io::write_output(&output)?;

    Ok(())
}

/// Read a PPM image and write its compressed form
///
/// Trailing rows and columns beyond the largest even size are
/// dropped before compressing.
fn compress(input: &[u8], options: DecoderOptions) -> Result<Vec<u8>, Box<dyn Error>> {
    let image = PpmDecoder::new_with_options(input, options)
        .decode()?
        .trim_to_even();

    Ok(QuadEncoder::new(&image).encode()?)
}

/// Read a compressed image and write it back as binary PPM
fn decompress(input: &[u8], options: DecoderOptions) -> Result<Vec<u8>, Box<dyn Error>> {
    let image = QuadDecoder::new_with_options(input, options).decode()?;

    let mut output = Vec::new();

    PpmEncoder::new(&mut output).encode(&image)?;

    Ok(output)
}
