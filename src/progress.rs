// Progress reporting is decoupled from rendering: the uploader only knows it
// has a sink that wants cumulative byte counts.

use indicatif::ProgressBar;
use std::io::{self, Read};

/// Receives the total number of bytes sent so far.
pub trait ProgressSink {
    fn update(&self, bytes_sent: u64);
}

impl ProgressSink for ProgressBar {
    fn update(&self, bytes_sent: u64) {
        self.set_position(bytes_sent);
    }
}

/// Reader that forwards every read to `inner` and reports the running total.
pub struct ProgressReader<R> {
    inner: R,
    bytes_read: u64,
    sink: Box<dyn ProgressSink + Send>,
}

impl<R: Read> ProgressReader<R> {
    pub fn new(inner: R, sink: Box<dyn ProgressSink + Send>) -> Self {
        Self {
            inner,
            bytes_read: 0,
            sink,
        }
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.bytes_read += n as u64;
            self.sink.update(self.bytes_read);
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reports_cumulative_bytes() {
        let data = vec![7u8; 10_000];
        let bar = ProgressBar::hidden();
        let mut reader = ProgressReader::new(Cursor::new(data.clone()), Box::new(bar.clone()));

        let mut small = [0u8; 100];
        reader.read_exact(&mut small).unwrap();
        assert_eq!(bar.position(), 100);

        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(bar.position(), 10_000);
        assert_eq!(small.len() + rest.len(), data.len());
    }

    #[test]
    fn passes_bytes_through_unchanged() {
        let mut reader = ProgressReader::new(Cursor::new(b"hello".to_vec()), Box::new(ProgressBar::hidden()));
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
    }
}
