#![allow(missing_docs, dead_code)]

use std::io;

use streamline::{ByteReader, Chunked, Line, ReadError};

/// A short access log mixing `\n` and `\r\n` with empty lines and no trailing
/// delimiter.
pub const ACCESS_LOG: &[u8] = b"GET /index.html 200\r\nGET /missing 404\n\nPOST /api/items 201\r\n\r\nDELETE /api/items/7 204";

/// Reads all lines of `input`, concatenating them without delimiters.
pub fn read_concatenated(
    input: &[u8],
    buffer_length: usize,
    max_fill: usize,
) -> Result<Vec<u8>, ReadError<io::Error>> {
    let mut buf = vec![0u8; buffer_length];
    let mut reader = ByteReader::new(Chunked::new(input, max_fill), &mut buf).unwrap();
    let mut out = Vec::new();
    while let Line::Data(line) = reader.read_line()? {
        out.extend_from_slice(line);
    }
    Ok(out)
}

#[test]
fn access_log_has_six_lines() {
    assert_eq!(ACCESS_LOG.split(|&b| b == b'\n').count(), 6);
}
