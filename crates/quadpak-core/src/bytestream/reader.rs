/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

static ERROR_MSG: &str = "No more bytes";

/// Encapsulates a simple byte reader over an in memory buffer
///
/// Reads that cannot be satisfied return a default value (usually `0`)
/// unless the `_err` variant of the read is used, which returns a
/// `Result` instead.
pub struct QByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> QByteReader<'a> {
    /// Create a new reader for the stream
    pub const fn new(buf: &'a [u8]) -> QByteReader<'a> {
        QByteReader { stream: buf, position: 0 }
    }

    /// Return true if the reader cannot satisfy another
    /// single byte read
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Return true whether `num` bytes can be read from the
    /// stream without hitting the end
    ///
    /// # Example
    /// ```
    /// use quadpak_core::bytestream::QByteReader;
    /// let stream = QByteReader::new(&[1, 2, 3]);
    /// assert!(stream.has(3));
    /// assert!(!stream.has(4));
    /// ```
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    /// Return the number of unread bytes in this stream
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return the current position of the reader
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Skip `num` bytes ahead of the stream
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num);
    }

    /// Undo a read of `num` bytes, moving the cursor back
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Read a single byte from the stream, returning `0`
    /// if the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Look at `num` bytes starting `offset` bytes from the current
    /// position without moving the cursor
    pub fn peek_at(&self, offset: usize, num: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.saturating_add(offset);
        let end = start.saturating_add(num);

        self.stream.get(start..end).ok_or(ERROR_MSG)
    }

    /// Return a reference to the next `num` bytes and advance
    /// the cursor past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        match self.stream.get(self.position..self.position + num) {
            Some(bytes) => {
                self.position += num;
                Ok(bytes)
            }
            None => Err(ERROR_MSG)
        }
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$int_type:tt) => {
        impl<'a> QByteReader<'a> {
            #[doc = concat!("Read ", stringify!($int_type), " as a big endian integer")]
            #[doc = "returning `0` if the underlying buffer cannot satisfy the read."]
            #[inline(always)]
            pub fn $name(&mut self) -> $int_type {
                const SIZE: usize = core::mem::size_of::<$int_type>();

                match self.stream.get(self.position..self.position + SIZE) {
                    Some(bytes) => {
                        self.position += SIZE;
                        $int_type::from_be_bytes(bytes.try_into().unwrap())
                    }
                    None => 0
                }
            }

            #[doc = concat!("Read ", stringify!($int_type), " as a big endian integer")]
            #[doc = "erroring out if the underlying buffer cannot satisfy the read."]
            #[inline(always)]
            pub fn $name2(&mut self) -> Result<$int_type, &'static str> {
                const SIZE: usize = core::mem::size_of::<$int_type>();

                match self.stream.get(self.position..self.position + SIZE) {
                    Some(bytes) => {
                        self.position += SIZE;
                        Ok($int_type::from_be_bytes(bytes.try_into().unwrap()))
                    }
                    None => Err(ERROR_MSG)
                }
            }
        }
    };
}

get_single_type!(get_u16_be, get_u16_be_err, u16);
get_single_type!(get_u32_be, get_u32_be_err, u32);
