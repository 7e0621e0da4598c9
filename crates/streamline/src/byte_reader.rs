use core::fmt;

use bstr::ByteSlice;

use crate::{ConfigError, Line, ReadError, ReaderOptions, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Reading,
    /// The source reported end of data and the last partial line, if any,
    /// has been handed out.
    Exhausted,
    /// A line did not fit; terminal.
    Overflowed,
}

/// Splits a [`Source`] into `\n` or `\r\n` delimited lines without
/// allocating.
///
/// Lines are returned as slices of the borrowed buffer, which is also the
/// reader's only storage. The window `start..end` of that buffer holds bytes
/// read from the source but not yet returned; everything before `start` is
/// dead and reclaimed by moving the window to the front before the next
/// fill.
///
/// A line must fit in the buffer together with its `\n`. A final line without
/// a delimiter needs one spare byte, which is where the end of data is
/// observed.
pub struct ByteReader<'buf, S> {
    source: S,
    buf: &'buf mut [u8],
    start: usize,
    end: usize,
    state: State,
    lines: usize,
    options: ReaderOptions,
}

impl<'buf, S: Source> ByteReader<'buf, S> {
    /// Creates a reader over `source` that uses `buf` as its only storage.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyBuffer`] if `buf` is empty.
    pub fn new(source: S, buf: &'buf mut [u8]) -> Result<Self, ConfigError> {
        Self::with_options(source, buf, ReaderOptions::default())
    }

    /// Like [`ByteReader::new`] with explicit [`ReaderOptions`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyBuffer`] if `buf` is empty.
    pub fn with_options(
        source: S,
        buf: &'buf mut [u8],
        options: ReaderOptions,
    ) -> Result<Self, ConfigError> {
        if buf.is_empty() {
            return Err(ConfigError::EmptyBuffer);
        }
        Ok(Self {
            source,
            buf,
            start: 0,
            end: 0,
            state: State::Reading,
            lines: 0,
            options,
        })
    }

    /// Returns the next line without its delimiter, or [`Line::End`] once the
    /// source is drained.
    ///
    /// Only touches the source when the buffered bytes hold no `\n`. The
    /// decision whether a `\r` belongs to a `\r\n` pair is made when the `\n`
    /// is found, so pairs split across fills are still recognized. A `\r` at
    /// the very end of the data is ordinary content.
    ///
    /// # Errors
    ///
    /// - [`ReadError::LineTooLong`] when the buffer fills up without a `\n`.
    ///   Every later call fails the same way.
    /// - [`ReadError::Source`] when the source fails. The partial line stays
    ///   buffered and the call may be retried.
    ///
    /// # Panics
    ///
    /// Panics if the source claims to have written more bytes than the slice
    /// it was given.
    pub fn read_line(&mut self) -> Result<Line<'_, [u8]>, ReadError<S::Error>> {
        loop {
            match self.state {
                State::Reading => {}
                State::Exhausted => return Ok(Line::End),
                State::Overflowed => return Err(self.too_long()),
            }

            if let Some(i) = memchr::memchr(b'\n', &self.buf[self.start..self.end]) {
                let begin = self.start;
                let mut end = begin + i;
                if i > 0 && !self.options.keep_carriage_return && self.buf[end - 1] == b'\r' {
                    end -= 1;
                }
                self.start = begin + i + 1;
                self.lines += 1;
                return Ok(Line::Data(&self.buf[begin..end]));
            }

            let len = self.end - self.start;
            let capacity = self.buf.len();
            if len == capacity {
                self.state = State::Overflowed;
                trace_event!(
                    debug,
                    line = self.lines + 1,
                    capacity,
                    "line does not fit the buffer"
                );
                return Err(self.too_long());
            }

            if self.start > 0 {
                self.buf.copy_within(self.start..self.end, 0);
                trace_event!(trace, moved = len, "compacted window");
                self.start = 0;
                self.end = len;
            }

            let filled = self
                .source
                .fill(&mut self.buf[len..])
                .map_err(ReadError::Source)?;
            assert!(
                filled <= capacity - len,
                "source wrote {filled} bytes into a {} byte slice",
                capacity - len
            );
            trace_event!(trace, filled, buffered = len, "filled buffer");

            if filled == 0 {
                self.state = State::Exhausted;
                trace_event!(trace, lines = self.lines, "source exhausted");
                if len == 0 {
                    return Ok(Line::End);
                }
                self.start = len;
                self.lines += 1;
                return Ok(Line::Data(&self.buf[..len]));
            }
            self.end = len + filled;
        }
    }

    fn too_long(&self) -> ReadError<S::Error> {
        ReadError::LineTooLong {
            line: self.lines + 1,
            capacity: self.buf.len(),
        }
    }
}

impl<S> ByteReader<'_, S> {
    /// Size of the borrowed buffer, which is also the upper bound on a line.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of lines returned so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.lines
    }

    /// Whether the end of the data has been reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Bytes read from the source that no line has covered yet.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// The options this reader was built with.
    #[must_use]
    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Gets a reference to the source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Gets a mutable reference to the source.
    ///
    /// Reading from it directly skips over data the reader has not seen.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the source. Buffered bytes are lost.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> fmt::Debug for ByteReader<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteReader")
            .field("capacity", &self.buf.len())
            .field("buffered", &self.buffered().as_bstr())
            .field("state", &self.state)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
