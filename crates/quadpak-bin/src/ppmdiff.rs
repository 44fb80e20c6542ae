/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::error::Error;
use std::io;
use std::process::exit;

use clap::error::ErrorKind;
use clap::{Arg, Command};
use log::{error, Level};
use quadpak_bin::file_io::read_input;
use quadpak_ppm::{rmse, PpmDecoder};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("ppmdiff")
        .about("Measure the root mean square distance between two PPM images")
        .arg(Arg::new("first")
            .help("First image to compare, `-` reads standard input")
            .required(true))
        .arg(Arg::new("second")
            .help("Second image to compare, `-` reads standard input")
            .required(true))
}

fn main() {
    let options = match create_cmd_args().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let failed = err.kind() != ErrorKind::DisplayHelp;
            let _ = err.print();

            exit(i32::from(failed));
        }
    };
    simple_logger::init_with_level(Level::Warn).unwrap();

    let first = options.get_one::<String>("first").unwrap();
    let second = options.get_one::<String>("second").unwrap();

    if first == "-" && second == "-" {
        error!("At most one of the images can come from standard input");
        exit(1);
    }
    match distance(first, second) {
        Ok(Some(value)) => println!("{value:.4}"),
        Ok(None) => {
            // images too far apart in size score a stock 1.0 on
            // the error stream, the tool still succeeds
            eprintln!("1.0");
        }
        Err(err) => {
            error!("Could not compare the images, reason {:?}", err);
            exit(1);
        }
    }
}

fn source(path: &str) -> Result<Vec<u8>, io::Error> {
    if path == "-" {
        read_input(None)
    } else {
        read_input(Some(path))
    }
}

fn distance(first: &str, second: &str) -> Result<Option<f64>, Box<dyn Error>> {
    let first_data = source(first)?;
    let second_data = source(second)?;

    let first_image = PpmDecoder::new(&first_data).decode()?;
    let second_image = PpmDecoder::new(&second_data).decode()?;

    Ok(rmse(&first_image, &second_image))
}
