//! Text decoding for [`TextReader`](crate::TextReader).

use bstr::ByteSlice;

use crate::DecodeError;

/// Converts the raw bytes of one line into characters.
///
/// Implementations write into the front of `out` and return the number of
/// characters written. [`TextReader`](crate::TextReader) guarantees `out` is
/// at least as long as `bytes`, which is enough for every encoding in this
/// module.
///
/// Closures of the matching shape are decoders too:
///
/// ```rust
/// use streamline::{DecodeError, Decoder};
///
/// let mut upper = |bytes: &[u8], out: &mut [char]| -> Result<usize, DecodeError> {
///     for (slot, b) in out.iter_mut().zip(bytes) {
///         *slot = char::from(b.to_ascii_uppercase());
///     }
///     Ok(bytes.len())
/// };
/// let mut out = ['\0'; 2];
/// assert_eq!(upper.decode(b"ok", &mut out), Ok(2));
/// assert_eq!(out, ['O', 'K']);
/// ```
pub trait Decoder {
    /// Decodes `bytes` into `out`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidSequence`] when `bytes` is not valid for the
    /// encoding, [`DecodeError::OutputTooSmall`] when `out` runs out.
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError>;
}

impl<F> Decoder for F
where
    F: FnMut(&[u8], &mut [char]) -> Result<usize, DecodeError>,
{
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError> {
        self(bytes, out)
    }
}

/// Strict UTF-8. Fails on the first invalid sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

/// UTF-8 with every invalid sequence replaced by U+FFFD.
///
/// Invalid input is substituted one maximal subpart at a time, the same way
/// [`String::from_utf8_lossy`](std::string::String::from_utf8_lossy) does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Lossy;

/// ISO-8859-1: every byte is the code point of the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latin1;

/// Strict 7-bit ASCII.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

impl Decoder for Utf8 {
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError> {
        decode_utf8_with(bytes, out, |offset| {
            Err(DecodeError::InvalidSequence {
                encoding: "UTF-8",
                offset,
            })
        })
    }
}

impl Decoder for Utf8Lossy {
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError> {
        decode_utf8_with(bytes, out, |_| Ok(char::REPLACEMENT_CHARACTER))
    }
}

impl Decoder for Latin1 {
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError> {
        let out = single_byte_output(bytes, out)?;
        for (slot, &b) in out.iter_mut().zip(bytes) {
            *slot = char::from(b);
        }
        Ok(bytes.len())
    }
}

impl Decoder for Ascii {
    fn decode(&mut self, bytes: &[u8], out: &mut [char]) -> Result<usize, DecodeError> {
        let out = single_byte_output(bytes, out)?;
        for (offset, (slot, &b)) in out.iter_mut().zip(bytes).enumerate() {
            if !b.is_ascii() {
                return Err(DecodeError::InvalidSequence {
                    encoding: "ASCII",
                    offset,
                });
            }
            *slot = char::from(b);
        }
        Ok(bytes.len())
    }
}

fn single_byte_output<'o>(bytes: &[u8], out: &'o mut [char]) -> Result<&'o mut [char], DecodeError> {
    let capacity = out.len();
    out.get_mut(..bytes.len())
        .ok_or(DecodeError::OutputTooSmall {
            capacity,
            needed: bytes.len(),
        })
}

/// Walks `bytes` one scalar at a time, asking `invalid` what to do with each
/// invalid sequence (given its offset).
fn decode_utf8_with(
    bytes: &[u8],
    out: &mut [char],
    mut invalid: impl FnMut(usize) -> Result<char, DecodeError>,
) -> Result<usize, DecodeError> {
    let mut offset = 0;
    let mut written = 0;
    while offset < bytes.len() {
        let (ch, size) = bstr::decode_utf8(&bytes[offset..]);
        let ch = match ch {
            Some(ch) => ch,
            None => invalid(offset)?,
        };
        let Some(slot) = out.get_mut(written) else {
            return Err(DecodeError::OutputTooSmall {
                capacity: out.len(),
                needed: written + bytes[offset..].chars().count(),
            });
        };
        *slot = ch;
        written += 1;
        offset += size;
    }
    Ok(written)
}
