use thiserror::Error;

/// Invalid arguments given to a reader constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The byte buffer has length zero.
    #[error("buffer must hold at least one byte")]
    EmptyBuffer,
    /// The character buffer is shorter than the byte buffer.
    #[error("character buffer holds {chars} characters but the byte buffer holds {bytes} bytes")]
    CharBufferTooSmall {
        /// Length of the character buffer.
        chars: usize,
        /// Length of the byte buffer.
        bytes: usize,
    },
}

/// Failure reported by a [`Decoder`](crate::Decoder).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not valid in `encoding`.
    #[error("invalid {encoding} sequence at byte {offset}")]
    InvalidSequence {
        /// Name of the encoding.
        encoding: &'static str,
        /// Byte offset of the offending sequence within the line.
        offset: usize,
    },
    /// The output slice cannot hold the decoded characters.
    #[error("output buffer holds {capacity} characters, {needed} needed")]
    OutputTooSmall {
        /// Length of the output slice.
        capacity: usize,
        /// Characters required.
        needed: usize,
    },
}

/// Failure of a `read_line` call.
///
/// `E` is the error type of the underlying [`Source`](crate::Source).
#[derive(Error, Debug, PartialEq)]
pub enum ReadError<E> {
    /// A line filled the whole buffer without a delimiter. The reader is
    /// unusable afterwards and keeps returning this error.
    #[error("line {line} is longer than the {capacity} byte buffer")]
    LineTooLong {
        /// 1-based number of the offending line.
        line: usize,
        /// Buffer capacity in bytes.
        capacity: usize,
    },
    /// The source failed to fill the buffer. Buffered data is kept, so the
    /// call may be retried.
    #[error("source error: {0}")]
    Source(#[source] E),
    /// A line could not be decoded. It has already been consumed; the next
    /// call continues with the following line.
    #[error("cannot decode line {line}: {source}")]
    Decode {
        /// 1-based number of the offending line.
        line: usize,
        /// What the decoder rejected.
        #[source]
        source: DecodeError,
    },
}

impl<E> ReadError<E> {
    /// The 1-based line number the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ReadError::LineTooLong { line, .. } | ReadError::Decode { line, .. } => Some(*line),
            ReadError::Source(_) => None,
        }
    }
}
