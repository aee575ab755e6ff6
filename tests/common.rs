// tests/common.rs
//! Shared test utilities — logging setup and scripted streams

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read, Write};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// One step of a [`ScriptedReader`]
pub enum Step {
    Byte(u8),
    Fail(io::ErrorKind),
}

/// Source that yields a fixed script of bytes and errors, one per `read`,
/// then end of stream. Counts every call it receives.
pub struct ScriptedReader {
    script: VecDeque<Step>,
    pub calls: usize,
}

impl ScriptedReader {
    pub fn new(script: Vec<Step>) -> Self {
        ScriptedReader {
            script: script.into(),
            calls: 0,
        }
    }

    pub fn bytes(data: &[u8]) -> Self {
        Self::new(data.iter().copied().map(Step::Byte).collect())
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        if buf.is_empty() {
            return Ok(0);
        }
        match self.script.pop_front() {
            None => Ok(0),
            Some(Step::Byte(b)) => {
                buf[0] = b;
                Ok(1)
            }
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
        }
    }
}

/// Sink that accepts `capacity` bytes, then fails every write
pub struct FailingWriter {
    pub written: Vec<u8>,
    capacity: usize,
    pub flushes: usize,
}

impl FailingWriter {
    pub fn new(capacity: usize) -> Self {
        FailingWriter {
            written: Vec::new(),
            capacity,
            flushes: 0,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() >= self.capacity {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink full"));
        }
        let n = buf.len().min(self.capacity - self.written.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
