/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::io;
use std::io::{Read, Write};

/// Read the whole input, a file when a path is given, standard
/// input otherwise
pub fn read_input(path: Option<&str>) -> Result<Vec<u8>, io::Error> {
    match path {
        Some(file) => read(file),
        None => {
            let mut data = Vec::new();

            io::stdin().lock().read_to_end(&mut data)?;

            Ok(data)
        }
    }
}

/// Write bytes to standard output
pub fn write_output(data: &[u8]) -> Result<(), io::Error> {
    let mut stdout = io::stdout().lock();

    stdout.write_all(data)?;
    stdout.flush()
}
