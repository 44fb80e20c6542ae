/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
/// Encapsulates a simple byte writer with
/// support for big endian aware writes
///
/// Writes that cannot be satisfied are silently dropped, callers
/// are expected to size the destination buffer up front or guard
/// writes with [`has`](Self::has).
pub struct QByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

#[cfg(feature = "std")]
impl<'a> std::io::Write for QByteWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let min = buf.len().min(self.bytes_left());
        self.buffer[self.position..self.position + min].copy_from_slice(&buf[0..min]);
        self.position += min;

        Ok(min)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> QByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> QByteWriter<'a> {
        QByteWriter { buffer: data, position: 0 }
    }

    /// Return the number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use quadpak_core::bytestream::QByteWriter;
    /// let mut storage = [0; 10];
    ///
    /// let writer = QByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(), 10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use quadpak_core::bytestream::QByteWriter;
    /// let mut stream = QByteWriter::new(&mut []);
    /// assert_eq!(stream.position(), 0);
    /// ```
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support
    /// the following write
    ///
    /// # Example
    /// ```
    /// use quadpak_core::bytestream::QByteWriter;
    /// let mut data = [0; 10];
    /// let mut stream = QByteWriter::new(&mut data);
    /// assert!(stream.has(5));
    /// assert!(!stream.has(100));
    /// ```
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Write a single byte into the stream or don't write
    /// anything if the buffer is full
    ///
    /// Should be combined with [`has`](Self::has)
    pub fn write_u8(&mut self, byte: u8) {
        if let Some(m_byte) = self.buffer.get_mut(self.position) {
            self.position += 1;
            *m_byte = byte;
        }
    }

    /// Write as many bytes from `buf` as the remaining space
    /// allows, dropping whatever does not fit
    pub fn write_bytes(&mut self, buf: &[u8]) {
        let min = buf.len().min(self.bytes_left());

        self.buffer[self.position..self.position + min].copy_from_slice(&buf[0..min]);
        self.position += min;
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<'a> QByteWriter<'a> {
            #[doc = concat!("Write ", stringify!($int_type), " as a big endian integer")]
            #[doc = "or don't write anything if the buffer cannot support the write."]
            #[doc = "\nShould be combined with the [`has`](Self::has) method to ensure a write succeeds"]
            #[inline]
            pub fn $name(&mut self, byte: $int_type) {
                const SIZE: usize = core::mem::size_of::<$int_type>();

                if let Some(m_byte) = self.buffer.get_mut(self.position..self.position + SIZE) {
                    self.position += SIZE;
                    m_byte.copy_from_slice(&byte.to_be_bytes());
                }
            }
        }
    };
}

write_single_type!(write_u16_be, u16);
write_single_type!(write_u32_be, u32);
