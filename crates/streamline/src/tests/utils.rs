use std::{io, vec::Vec};

use crate::{ByteReader, Chunked, Line, ReadError};

pub(crate) type Lines = Vec<Vec<u8>>;

/// Reads every line of `input` through a `capacity` byte buffer, with the
/// source handing out at most `max_fill` bytes per fill.
pub(crate) fn read_all(
    input: &[u8],
    capacity: usize,
    max_fill: usize,
) -> Result<Lines, ReadError<io::Error>> {
    let mut buf = std::vec![0u8; capacity];
    let mut reader = ByteReader::new(Chunked::new(input, max_fill), &mut buf).unwrap();
    let mut lines = Vec::new();
    while let Line::Data(line) = reader.read_line()? {
        lines.push(line.to_vec());
    }
    Ok(lines)
}

/// Straightforward split used as the oracle: `\n` ends a line, one `\r` right
/// before it is dropped, a trailing run without `\n` is the last line.
pub(crate) fn reference_lines(input: &[u8]) -> Lines {
    let mut lines = Vec::new();
    let mut rest = input;
    while let Some(i) = rest.iter().position(|&b| b == b'\n') {
        let line = &rest[..i];
        lines.push(line.strip_suffix(b"\r").unwrap_or(line).to_vec());
        rest = &rest[i + 1..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_vec());
    }
    lines
}

/// Whether every line of `input` fits a `capacity` byte buffer: each run
/// between `\n`s, `\r` included, must leave one byte free for the delimiter
/// or for observing the end of data.
pub(crate) fn fits(input: &[u8], capacity: usize) -> bool {
    input.split(|&b| b == b'\n').all(|segment| segment.len() < capacity)
}

/// Maps arbitrary bytes onto a small alphabet dense in `\n` and `\r`.
pub(crate) fn shape(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .map(|&b| match b % 8 {
            0 => b'\n',
            1 => b'\r',
            _ => b'a' + b % 26,
        })
        .collect()
}

#[test]
fn reference_lines_examples() {
    assert_eq!(
        reference_lines(b"abc\r\ndef\nghi"),
        [b"abc".to_vec(), b"def".to_vec(), b"ghi".to_vec()]
    );
    assert_eq!(reference_lines(b"\n\n"), [Vec::<u8>::new(), Vec::new()]);
    assert_eq!(reference_lines(b"x\r"), [b"x\r".to_vec()]);
    assert!(reference_lines(b"").is_empty());
}

#[test]
fn fits_counts_the_delimiter() {
    assert!(fits(b"ab\n", 3));
    assert!(!fits(b"ab\n", 2));
    assert!(!fits(b"ab", 2));
    assert!(fits(b"", 1));
    assert!(!fits(b"a\r\n", 2));
}
