use std::{string::String, vec::Vec};

use crate::{
    Chunked, DecodeError, Latin1, Line, ReadError, ReaderOptions, TextReader, Utf8, Utf8Lossy,
};

fn to_string(line: Line<'_, [char]>) -> Option<String> {
    line.data().map(|chars| chars.iter().collect())
}

#[test]
fn decodes_each_line() {
    let mut bytes = [0u8; 10];
    let mut chars = ['\0'; 10];
    let mut reader =
        TextReader::new(&b"abc\r\ndef\nghi"[..], &mut bytes, &mut chars, Utf8).unwrap();
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("abc"));
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("def"));
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("ghi"));
    assert_eq!(reader.read_line().unwrap(), Line::End);
    assert_eq!(reader.read_line().unwrap(), Line::End);
    assert!(reader.is_exhausted());
}

#[test]
fn multibyte_characters_split_across_fills() {
    let input = "żółw\n🐢\r\nend".as_bytes();
    let mut bytes = [0u8; 12];
    let mut chars = ['\0'; 12];
    let mut reader =
        TextReader::new(Chunked::new(input, 1), &mut bytes, &mut chars, Utf8).unwrap();
    let mut lines = Vec::new();
    while let Some(line) = to_string(reader.read_line().unwrap()) {
        lines.push(line);
    }
    assert_eq!(lines, ["żółw", "🐢", "end"]);
    assert_eq!(reader.line_number(), 3);
}

#[test]
fn empty_lines_decode_to_empty_views() {
    let mut bytes = [0u8; 4];
    let mut chars = ['\0'; 4];
    let mut reader = TextReader::new(&b"\n\nx"[..], &mut bytes, &mut chars, Utf8).unwrap();
    assert_eq!(reader.read_line().unwrap(), Line::Data(&[][..]));
    assert_eq!(reader.read_line().unwrap(), Line::Data(&[][..]));
    assert_eq!(reader.read_line().unwrap(), Line::Data(&['x'][..]));
    assert!(reader.read_line().unwrap().is_end());
}

#[test]
fn decode_failure_skips_the_line() {
    let mut bytes = [0u8; 8];
    let mut chars = ['\0'; 8];
    let mut reader =
        TextReader::new(&b"ok\na\xffb\nnext"[..], &mut bytes, &mut chars, Utf8).unwrap();
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("ok"));

    let err = reader.read_line().unwrap_err();
    assert!(matches!(
        err,
        ReadError::Decode {
            line: 2,
            source: DecodeError::InvalidSequence {
                encoding: "UTF-8",
                offset: 1
            }
        }
    ));
    assert_eq!(
        std::string::ToString::to_string(&err),
        "cannot decode line 2: invalid UTF-8 sequence at byte 1"
    );

    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("next"));
    assert!(reader.read_line().unwrap().is_end());
}

#[test]
fn lossy_decoder_replaces_invalid_bytes() {
    let mut bytes = [0u8; 8];
    let mut chars = ['\0'; 8];
    let mut reader =
        TextReader::new(&b"a\xffb\n"[..], &mut bytes, &mut chars, Utf8Lossy).unwrap();
    assert_eq!(
        to_string(reader.read_line().unwrap()).as_deref(),
        Some("a\u{FFFD}b")
    );
}

#[test]
fn latin1_maps_every_byte() {
    let mut bytes = [0u8; 8];
    let mut chars = ['\0'; 8];
    let mut reader = TextReader::new(&b"caf\xe9\n"[..], &mut bytes, &mut chars, Latin1).unwrap();
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("café"));
}

#[test]
fn decoder_producing_nothing_ends_reader() {
    let silent = |_: &[u8], _: &mut [char]| -> Result<usize, DecodeError> { Ok(0) };
    let mut bytes = [0u8; 8];
    let mut chars = ['\0'; 8];
    let mut reader = TextReader::new(&b"\nabc\ndef\n"[..], &mut bytes, &mut chars, silent).unwrap();
    // An empty line is still a line.
    assert_eq!(reader.read_line().unwrap(), Line::Data(&[][..]));
    assert_eq!(reader.read_line().unwrap(), Line::End);
    assert_eq!(reader.read_line().unwrap(), Line::End);
    assert!(reader.is_exhausted());
    assert!(!reader.byte_reader().is_exhausted());
}

#[test]
fn line_too_long_propagates() {
    let mut bytes = [0u8; 3];
    let mut chars = ['\0'; 3];
    let mut reader = TextReader::new(&b"abcdef\n"[..], &mut bytes, &mut chars, Utf8).unwrap();
    assert!(matches!(
        reader.read_line(),
        Err(ReadError::LineTooLong { line: 1, capacity: 3 })
    ));
    assert_eq!(reader.capacity(), 3);
}

#[test]
fn byte_order_mark_is_skipped_on_first_line_only() {
    let options = ReaderOptions {
        skip_byte_order_mark: true,
        ..Default::default()
    };
    let input = "\u{FEFF}head\n\u{FEFF}body".as_bytes();
    let mut bytes = [0u8; 16];
    let mut chars = ['\0'; 16];
    let mut reader =
        TextReader::with_options(input, &mut bytes, &mut chars, Utf8, options).unwrap();
    assert_eq!(to_string(reader.read_line().unwrap()).as_deref(), Some("head"));
    assert_eq!(
        to_string(reader.read_line().unwrap()).as_deref(),
        Some("\u{FEFF}body")
    );
}

#[test]
fn byte_order_mark_is_kept_by_default() {
    let input = "\u{FEFF}head".as_bytes();
    let mut bytes = [0u8; 16];
    let mut chars = ['\0'; 16];
    let mut reader = TextReader::new(input, &mut bytes, &mut chars, Utf8).unwrap();
    assert_eq!(
        to_string(reader.read_line().unwrap()).as_deref(),
        Some("\u{FEFF}head")
    );
}

#[test]
fn source_is_handed_back() {
    let mut bytes = [0u8; 4];
    let mut chars = ['\0'; 4];
    let reader = TextReader::new(&b"rest"[..], &mut bytes, &mut chars, Latin1).unwrap();
    assert_eq!(*reader.decoder(), Latin1);
    assert_eq!(reader.into_inner(), b"rest");
}
