use crate::{ByteReader, ConfigError, Decoder, Line, ReadError, ReaderOptions, Source};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A [`ByteReader`] whose lines are decoded into a borrowed `char` buffer.
///
/// The character buffer is reused by every call, so a returned line is only
/// valid until the next `read_line`.
///
/// ```rust
/// use streamline::{Line, TextReader, Utf8};
///
/// let mut bytes = [0u8; 8];
/// let mut chars = ['\0'; 8];
/// let source = "grüß\r\nok".as_bytes();
/// let mut reader = TextReader::new(source, &mut bytes, &mut chars, Utf8).unwrap();
///
/// let first: String = reader.read_line().unwrap().data().unwrap().iter().collect();
/// assert_eq!(first, "grüß");
/// assert_eq!(reader.read_line().unwrap(), Line::Data(&['o', 'k'][..]));
/// assert!(reader.read_line().unwrap().is_end());
/// ```
pub struct TextReader<'buf, S, D> {
    bytes: ByteReader<'buf, S>,
    chars: &'buf mut [char],
    decoder: D,
    finished: bool,
}

impl<'buf, S: Source, D: Decoder> TextReader<'buf, S, D> {
    /// Creates a reader that splits `source` using `byte_buf` and decodes
    /// each line into `char_buf`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyBuffer`] if `byte_buf` is empty.
    /// - [`ConfigError::CharBufferTooSmall`] if `char_buf` is shorter than
    ///   `byte_buf`.
    pub fn new(
        source: S,
        byte_buf: &'buf mut [u8],
        char_buf: &'buf mut [char],
        decoder: D,
    ) -> Result<Self, ConfigError> {
        Self::with_options(source, byte_buf, char_buf, decoder, ReaderOptions::default())
    }

    /// Like [`TextReader::new`] with explicit [`ReaderOptions`].
    ///
    /// # Errors
    ///
    /// See [`TextReader::new`].
    pub fn with_options(
        source: S,
        byte_buf: &'buf mut [u8],
        char_buf: &'buf mut [char],
        decoder: D,
        options: ReaderOptions,
    ) -> Result<Self, ConfigError> {
        if byte_buf.is_empty() {
            return Err(ConfigError::EmptyBuffer);
        }
        if char_buf.len() < byte_buf.len() {
            return Err(ConfigError::CharBufferTooSmall {
                chars: char_buf.len(),
                bytes: byte_buf.len(),
            });
        }
        Ok(Self {
            bytes: ByteReader::with_options(source, byte_buf, options)?,
            chars: char_buf,
            decoder,
            finished: false,
        })
    }

    /// Reads and decodes the next line.
    ///
    /// A decoder that produces no characters for a non-empty line ends the
    /// reader.
    ///
    /// # Errors
    ///
    /// Everything [`ByteReader::read_line`] reports, plus
    /// [`ReadError::Decode`] when the decoder rejects a line. The rejected
    /// line is consumed either way; the next call moves on to the following
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if the decoder claims more characters than the buffer holds.
    pub fn read_line(&mut self) -> Result<Line<'_, [char]>, ReadError<S::Error>> {
        if self.finished {
            return Ok(Line::End);
        }

        let line = self.bytes.line_number() + 1;
        let skip_bom = line == 1 && self.bytes.options().skip_byte_order_mark;
        let bytes = match self.bytes.read_line()? {
            Line::Data(bytes) => bytes,
            Line::End => {
                self.finished = true;
                return Ok(Line::End);
            }
        };

        let n = self
            .decoder
            .decode(bytes, self.chars)
            .map_err(|source| ReadError::Decode { line, source })?;
        if n == 0 && !bytes.is_empty() {
            trace_event!(debug, line, "decoder produced nothing, ending");
            self.finished = true;
            return Ok(Line::End);
        }

        let decoded = &self.chars[..n];
        match decoded.split_first() {
            Some((&BYTE_ORDER_MARK, rest)) if skip_bom => Ok(Line::Data(rest)),
            _ => Ok(Line::Data(decoded)),
        }
    }
}

impl<S, D> TextReader<'_, S, D> {
    /// Size of the byte buffer, the upper bound on the raw length of a line.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of lines returned so far, including any rejected by the
    /// decoder.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.bytes.line_number()
    }

    /// Whether the end of the data has been reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.finished || self.bytes.is_exhausted()
    }

    /// Raw bytes read from the source that no line has covered yet.
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        self.bytes.buffered()
    }

    /// The underlying byte reader.
    #[must_use]
    pub fn byte_reader(&self) -> &ByteReader<'_, S> {
        &self.bytes
    }

    /// The decoder in use.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Gets a reference to the source.
    pub fn get_ref(&self) -> &S {
        self.bytes.get_ref()
    }

    /// Gets a mutable reference to the source.
    pub fn get_mut(&mut self) -> &mut S {
        self.bytes.get_mut()
    }

    /// Returns the source. Buffered bytes are lost.
    pub fn into_inner(self) -> S {
        self.bytes.into_inner()
    }
}

impl<S, D: core::fmt::Debug> core::fmt::Debug for TextReader<'_, S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextReader")
            .field("bytes", &self.bytes)
            .field("char_capacity", &self.chars.len())
            .field("decoder", &self.decoder)
            .field("finished", &self.finished)
            .finish()
    }
}
