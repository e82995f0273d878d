use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Buffer size used when reading input files.
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Yields the trimmed, non-empty lines of a text stream.
///
/// A single line buffer is reused for the whole stream, so memory usage is bounded by
/// the longest line rather than by the size of the input.
///
/// # Remarks
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines must be valid UTF-8; a line
/// which is not yields an error of kind [`io::ErrorKind::InvalidData`], and what
/// happens next is up to the caller.
pub struct LineReader<R: BufRead> {
    reader: R,
    line: String,
    bytes_read: u64,
}

impl LineReader<BufReader<File>> {
    /// Opens a file for line reading.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            bytes_read: 0,
        }
    }

    /// Returns the next non-empty line with surrounding whitespace removed,
    /// or [`None`] at the end of the stream.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        loop {
            let mut buffer = std::mem::take(&mut self.line).into_bytes();
            buffer.clear();
            let read = read_raw_line(&mut self.reader, &mut buffer)?;
            if read == 0 {
                return Ok(None);
            }

            self.bytes_read += read as u64;
            self.line = String::from_utf8(buffer)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))?;
            if !self.line.trim().is_empty() {
                break;
            }
        }

        Ok(Some(self.line.trim()))
    }

    /// Raw bytes consumed so far, including skipped blank lines and line terminators.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

/// Appends bytes up to and including the next `\n` or `\r` to `buffer`.
/// Returns the number of bytes consumed, 0 at the end of the stream.
///
/// A `\r\n` pair is read as two terminators; the empty line between them is
/// dropped by [`LineReader::next_line`] like any other blank line.
fn read_raw_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<usize> {
    let mut total = 0;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(total);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                buffer.extend_from_slice(&available[..=end]);
                reader.consume(end + 1);
                return Ok(total + end + 1);
            }
            None => {
                let len = available.len();
                buffer.extend_from_slice(available);
                reader.consume(len);
                total += len;
            }
        }
    }
}
