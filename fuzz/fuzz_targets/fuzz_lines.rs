#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamline::{ByteReader, Chunked, Line, ReadError, TextReader, Utf8Lossy};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Buffer length, folded into `1..=256`.
    capacity: u8,
    /// Largest fill, folded into `1..=64`.
    max_fill: u8,
    keep_carriage_return: bool,
    data: Vec<u8>,
}

/// The lines a plain split produces: `\n` ends a line, one `\r` before it is
/// dropped unless kept, a trailing run without `\n` is the last line.
fn expected_lines(data: &[u8], keep_carriage_return: bool) -> Vec<&[u8]> {
    let mut segments: Vec<&[u8]> = data.split(|&b| b == b'\n').collect();
    // `split` yields an empty tail after a final `\n` (or for empty input).
    if segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    let terminated = data.iter().filter(|&&b| b == b'\n').count();
    segments
        .into_iter()
        .enumerate()
        .map(|(i, s)| match s.strip_suffix(b"\r") {
            Some(trimmed) if i < terminated && !keep_carriage_return => trimmed,
            _ => s,
        })
        .collect()
}

fn check(input: &Input) {
    let capacity = 1 + usize::from(input.capacity);
    let max_fill = 1 + usize::from(input.max_fill % 64);
    let fits = input
        .data
        .split(|&b| b == b'\n')
        .all(|segment| segment.len() < capacity);
    let options = streamline::ReaderOptions {
        keep_carriage_return: input.keep_carriage_return,
        ..Default::default()
    };

    let mut buf = vec![0u8; capacity];
    let source = Chunked::new(&input.data[..], max_fill);
    let mut reader = ByteReader::with_options(source, &mut buf, options).unwrap();
    let expected = expected_lines(&input.data, input.keep_carriage_return);
    let mut seen = 0;
    loop {
        match reader.read_line() {
            Ok(Line::Data(line)) => {
                assert_eq!(line, expected[seen], "line {}", seen + 1);
                seen += 1;
            }
            Ok(Line::End) => {
                assert!(fits);
                assert_eq!(seen, expected.len());
                assert!(reader.read_line().unwrap().is_end());
                break;
            }
            Err(ReadError::LineTooLong { line, capacity: c }) => {
                assert!(!fits);
                assert_eq!(c, capacity);
                assert_eq!(line, seen + 1);
                break;
            }
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    // Decoding must never overflow the character buffer.
    let mut bytes = vec![0u8; capacity];
    let mut chars = vec!['\0'; capacity];
    let mut text = TextReader::new(&input.data[..], &mut bytes, &mut chars, Utf8Lossy).unwrap();
    while let Ok(Line::Data(_)) = text.read_line() {}
}

fuzz_target!(|input: Input| check(&input));
