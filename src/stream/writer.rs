// src/stream/writer.rs
//! Output filter

use std::io::{self, Write};

use tracing::trace;

use super::check_region;
use crate::error::Result;
use crate::transform::rot13;

/// Writes to `W`, rotating every byte on the way in
///
/// Nothing is buffered: each unit reaches the sink before the call returns.
#[derive(Debug)]
pub struct Rot13Writer<W> {
    inner: W,
}

impl<W: Write> Rot13Writer<W> {
    pub fn new(inner: W) -> Self {
        Rot13Writer { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Rotate `value` and write its low byte to the sink
    pub fn write_unit(&mut self, value: i32) -> io::Result<()> {
        self.inner.write_all(&[rot13(value) as u8])
    }

    /// Write `buf[offset..offset + len]` one rotated byte at a time.
    ///
    /// The region is validated before anything is written. A sink error
    /// propagates immediately; bytes before the failing one have already
    /// been handed to the sink.
    pub fn write_region(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<()> {
        check_region(offset, len, buf.len())?;
        trace!(offset, len, "rot13 write");

        for &byte in &buf[offset..offset + len] {
            self.write_unit(i32::from(byte))?;
        }
        Ok(())
    }

    pub fn write_buf(&mut self, buf: &[u8]) -> Result<()> {
        self.write_region(buf, 0, buf.len())
    }
}

impl<W: Write> Write for Rot13Writer<W> {
    /// Returns `Err` only when the first byte fails; after partial progress
    /// the count written so far is reported and the next call goes back to
    /// the sink.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (written, &byte) in buf.iter().enumerate() {
            if let Err(err) = self.write_unit(i32::from(byte)) {
                if written == 0 {
                    return Err(err);
                }
                trace!(written, requested = buf.len(), error = %err, "short rot13 write");
                return Ok(written);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
