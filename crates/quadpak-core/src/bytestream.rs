/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing.
//!
//! The formats this family of crates deals with are big endian
//! on the wire, hence only big endian aware reads and writes are
//! provided.
pub use reader::QByteReader;
pub use writer::QByteWriter;

mod reader;
mod writer;
