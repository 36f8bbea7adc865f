//! Re-readable request body.
//!
//! The body is an owned byte buffer with a read position. Every read starts
//! from the beginning and rewinds when done, so inspecting the body never
//! exhausts it and dispatch can read it again afterwards.

use std::io::{Cursor, Read};

#[derive(Debug, Clone, Default)]
pub struct ReusableBody {
    buf: Cursor<Vec<u8>>,
}

impl ReusableBody {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            buf: Cursor::new(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.get_ref().is_empty()
    }

    /// Reads the whole body and rewinds.
    pub fn read_all(&mut self) -> Vec<u8> {
        self.buf.set_position(0);
        self.buf.get_ref().clone()
    }

    /// Reads the body as text (invalid UTF-8 is replaced) and rewinds.
    pub fn read_text(&mut self) -> String {
        String::from_utf8_lossy(&self.read_all()).into_owned()
    }
}

impl Read for ReusableBody {
    fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
        self.buf.read(out)
    }
}
