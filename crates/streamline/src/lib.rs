//! Zero-allocation line reading over caller-supplied buffers.
//!
//! [`ByteReader`] splits any [`Source`] into lines delimited by `\n` or
//! `\r\n`, handing each line out as a slice of a buffer the caller owns. The
//! buffer never grows: a line that cannot fit is reported as
//! [`ReadError::LineTooLong`] instead of triggering an allocation.
//! [`TextReader`] layers a [`Decoder`] on top and decodes every line into a
//! second caller-supplied buffer of `char`s.
//!
//! ```rust
//! use streamline::{ByteReader, Line};
//!
//! let mut buf = [0u8; 16];
//! let mut reader = ByteReader::new(&b"abc\r\ndef\nghi"[..], &mut buf).unwrap();
//!
//! let mut lines = Vec::new();
//! while let Line::Data(line) = reader.read_line().unwrap() {
//!     lines.push(line.to_vec());
//! }
//! assert_eq!(lines, [b"abc".to_vec(), b"def".to_vec(), b"ghi".to_vec()]);
//! assert!(reader.read_line().unwrap().is_end());
//! ```
//!
//! A returned line borrows the reader mutably, so it cannot be held across
//! the next `read_line` call, which may overwrite the same buffer memory.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Emits a `tracing` event when the `tracing` feature is enabled and
/// expands to nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}

mod byte_reader;
mod decoder;
mod error;
mod line;
mod options;
mod source;
mod text_reader;

#[cfg(test)]
mod tests;

pub use byte_reader::ByteReader;
pub use decoder::{Ascii, Decoder, Latin1, Utf8, Utf8Lossy};
pub use error::{ConfigError, DecodeError, ReadError};
pub use line::Line;
pub use options::ReaderOptions;
pub use source::{Chunked, Source};
pub use text_reader::TextReader;
