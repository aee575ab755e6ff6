// src/stream/reader.rs
//! Input filter

use std::io::{self, Read};

use tracing::{trace, warn};

use super::check_region;
use crate::config::{self, StreamOptions};
use crate::consts::END_OF_STREAM;
use crate::error::Result;
use crate::transform::rot13;

/// Reads from `R`, rotating every byte on the way out
///
/// The wrapped source is owned by the filter and dropped with it.
#[derive(Debug)]
pub struct Rot13Reader<R> {
    inner: R,
    options: StreamOptions,
    // strict-mode error held back by `Read::read` after a partial fill
    deferred: Option<io::Error>,
}

impl<R: Read> Rot13Reader<R> {
    /// Wrap `inner` using the stream options from the global config.
    ///
    /// The first call in a process may read `rot13.toml` (or `ROT13_CONFIG`)
    /// from disk; [`with_options`](Self::with_options) never does.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, config::load().stream)
    }

    pub fn with_options(inner: R, options: StreamOptions) -> Self {
        Rot13Reader {
            inner,
            options,
            deferred: None,
        }
    }

    pub fn options(&self) -> StreamOptions {
        self.options
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// One raw unit from the source: a byte value, or `END_OF_STREAM`
    fn next_raw(&mut self) -> io::Result<i32> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(END_OF_STREAM),
                Ok(_) => return Ok(i32::from(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Surface an error held back by an earlier `Read::read`
    fn take_deferred(&mut self) -> io::Result<()> {
        match self.deferred.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Rotate units into `out` until it is full, the source ends, or the
    /// source fails. Returns the count filled and the error, if any.
    fn fill(&mut self, out: &mut [u8]) -> (usize, Option<io::Error>) {
        let mut filled = 0;
        while filled < out.len() {
            match self.read_unit() {
                Ok(END_OF_STREAM) => break,
                Ok(unit) => {
                    out[filled] = unit as u8;
                    filled += 1;
                }
                Err(err) => return (filled, Some(err)),
            }
        }
        (filled, None)
    }

    /// Read and rotate a single unit.
    ///
    /// Returns a byte value in `0..=255`, or [`END_OF_STREAM`] once the source
    /// is exhausted. Errors from the source propagate unchanged.
    pub fn read_unit(&mut self) -> io::Result<i32> {
        self.take_deferred()?;
        self.next_raw().map(rot13)
    }

    /// Fill `buf[offset..offset + len]` with rotated bytes.
    ///
    /// Returns `Ok(None)` when the source was already at end of stream, and
    /// `Ok(Some(n))` with the number of bytes filled otherwise. A short count
    /// means the source ran dry. A zero-length request returns `Some(0)`
    /// without touching the source.
    ///
    /// An error on the first unit always propagates. An error on any later
    /// unit ends the read with the count so far when
    /// [`StreamOptions::truncate_on_error`] is set, and propagates otherwise
    /// (the bytes already filled stay in `buf`, but their count is lost;
    /// the `Read` impl reports the count first and the error on the next call).
    pub fn read_region(
        &mut self,
        buf: &mut [u8],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>> {
        check_region(offset, len, buf.len())?;
        if len == 0 {
            return Ok(Some(0));
        }

        match self.fill(&mut buf[offset..offset + len]) {
            (0, Some(err)) => Err(err.into()),
            (0, None) => Ok(None),
            (filled, Some(err)) if self.options.truncate_on_error => {
                warn!(filled, requested = len, error = %err, "read error, truncating");
                Ok(Some(filled))
            }
            (_, Some(err)) => Err(err.into()),
            (filled, None) => {
                trace!(offset, filled, requested = len, "rot13 read");
                Ok(Some(filled))
            }
        }
    }

    /// [`read_region`](Self::read_region) over the whole of `buf`
    pub fn read_buf(&mut self, buf: &mut [u8]) -> Result<Option<usize>> {
        let len = buf.len();
        self.read_region(buf, 0, len)
    }
}

impl<R: Read> Read for Rot13Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        match self.fill(buf) {
            (0, Some(err)) => Err(err),
            (filled, Some(err)) => {
                if self.options.truncate_on_error {
                    warn!(filled, requested = buf.len(), error = %err, "read error, truncating");
                } else {
                    self.deferred = Some(err);
                }
                Ok(filled)
            }
            (filled, None) => Ok(filled),
        }
    }
}
