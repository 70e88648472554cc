// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seekable byte streams for codec I/O.
//!
//! `ReadStream`/`WriteStream` wrap `byteorder`'s primitive accessors with
//! the position/seek/skip/size surface the original `io::SeekableReadStream`
//! / `io::SeekableWriteStream` exposed. Both are blanket-implemented, so
//! `std::fs::File` and `std::io::Cursor<Vec<u8>>` work as either without
//! adapters — codec tests exercise a `Cursor` in memory, never touching
//! the filesystem.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

/// A seekable, little-endian-primitive-reading byte source.
pub trait ReadStream: Read + Seek {
    /// Current position from the start of the stream.
    fn pos(&mut self) -> io::Result<u64> {
        self.stream_position()
    }

    /// Total size of the stream in bytes.
    fn size(&mut self) -> io::Result<u64> {
        let current = self.stream_position()?;
        let end = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(current))?;
        Ok(end)
    }

    /// Advance the stream by `n` bytes without reading them.
    fn skip(&mut self, n: i64) -> io::Result<u64> {
        self.seek(SeekFrom::Current(n))
    }

    /// Read a little-endian `u8`.
    fn read_u8(&mut self) -> io::Result<u8> {
        ReadBytesExt::read_u8(self)
    }

    /// Read a little-endian `i8`.
    fn read_i8(&mut self) -> io::Result<i8> {
        ReadBytesExt::read_i8(self)
    }

    /// Read a little-endian `u16`.
    fn read_u16(&mut self) -> io::Result<u16> {
        ReadBytesExt::read_u16::<LE>(self)
    }

    /// Read a little-endian `u32`.
    fn read_u32(&mut self) -> io::Result<u32> {
        ReadBytesExt::read_u32::<LE>(self)
    }

    /// Read a little-endian `i32`.
    fn read_i32(&mut self) -> io::Result<i32> {
        ReadBytesExt::read_i32::<LE>(self)
    }

    /// Read a little-endian `f32`.
    fn read_f32(&mut self) -> io::Result<f32> {
        ReadBytesExt::read_f32::<LE>(self)
    }

    /// Read exactly `len` bytes.
    fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0_u8; len];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read a string.
    ///
    /// If `zero_terminated`, reads bytes up to and including a `0x00`
    /// terminator and returns everything before it (lossy UTF-8). If not,
    /// reads exactly `len` bytes with no terminator handling.
    fn read_string(&mut self, len: usize, zero_terminated: bool) -> io::Result<String> {
        let raw = self.read_bytes(len)?;
        let slice = if zero_terminated {
            raw.iter().position(|&b| b == 0).map_or(raw.as_slice(), |nul| &raw[..nul])
        } else {
            raw.as_slice()
        };
        Ok(String::from_utf8_lossy(slice).into_owned())
    }
}

impl<T: Read + Seek + ?Sized> ReadStream for T {}

/// A seekable, little-endian-primitive-writing byte sink.
pub trait WriteStream: Write + Seek {
    /// Current position from the start of the stream.
    fn pos(&mut self) -> io::Result<u64> {
        self.stream_position()
    }

    /// Write a little-endian `u8`.
    fn write_u8(&mut self, v: u8) -> io::Result<()> {
        WriteBytesExt::write_u8(self, v)
    }

    /// Write a little-endian `u16`.
    fn write_u16(&mut self, v: u16) -> io::Result<()> {
        WriteBytesExt::write_u16::<LE>(self, v)
    }

    /// Write a little-endian `u32`.
    fn write_u32(&mut self, v: u32) -> io::Result<()> {
        WriteBytesExt::write_u32::<LE>(self, v)
    }

    /// Write a little-endian `i32`.
    fn write_i32(&mut self, v: i32) -> io::Result<()> {
        WriteBytesExt::write_i32::<LE>(self, v)
    }

    /// Write a little-endian `f32`.
    fn write_f32(&mut self, v: f32) -> io::Result<()> {
        WriteBytesExt::write_f32::<LE>(self, v)
    }

    /// Write raw bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }

    /// Write a string, optionally appending a `0x00` terminator.
    fn write_string(&mut self, s: &str, zero_terminated: bool) -> io::Result<()> {
        self.write_all(s.as_bytes())?;
        if zero_terminated {
            self.write_u8(0)?;
        }
        Ok(())
    }
}

impl<T: Write + Seek + ?Sized> WriteStream for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_primitives_through_a_cursor() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.write_u32(0xdead_beef).unwrap();
        cursor.write_i32(-42).unwrap();
        cursor.write_f32(1.5).unwrap();
        cursor.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(cursor.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(cursor.read_i32().unwrap(), -42);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn zero_terminated_string_stops_at_nul() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.write_string("hi", true).unwrap();
        cursor.write_bytes(b"garbage").unwrap();
        cursor.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(cursor.read_string(10, true).unwrap(), "hi");
    }

    #[test]
    fn fixed_length_string_reads_exact_bytes() {
        let mut cursor = Cursor::new(Vec::new());
        cursor.write_string("abcd", false).unwrap();
        cursor.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(cursor.read_string(4, false).unwrap(), "abcd");
    }

    #[test]
    fn skip_and_pos_track_position() {
        let mut cursor = Cursor::new(vec![0_u8; 16]);
        assert_eq!(cursor.pos().unwrap(), 0);
        cursor.skip(4).unwrap();
        assert_eq!(cursor.pos().unwrap(), 4);
    }

    #[test]
    fn size_reports_total_length_and_restores_position() {
        let mut cursor = Cursor::new(vec![0_u8; 32]);
        cursor.skip(10).unwrap();
        assert_eq!(cursor.size().unwrap(), 32);
        assert_eq!(cursor.pos().unwrap(), 10);
    }
}
