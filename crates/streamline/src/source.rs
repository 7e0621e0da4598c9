//! The byte-producing side of a reader.

/// A sequential, blocking producer of bytes.
///
/// With the `std` feature every [`std::io::Read`] is a `Source`; callers that
/// want to keep ownership of a reader pass `&mut reader`.
pub trait Source {
    /// Error raised when the source cannot produce data.
    type Error;

    /// Writes up to `buf.len()` bytes to the front of `buf` and returns how
    /// many were written.
    ///
    /// `Ok(0)` means the end of the data. Readers never call this with an
    /// empty `buf`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying producer reports.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

#[cfg(feature = "std")]
impl<R: std::io::Read + ?Sized> Source for R {
    type Error = std::io::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                res => return res,
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl Source for &[u8] {
    type Error = core::convert::Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// A [`Source`] adapter that hands out at most `max_fill` bytes per fill.
///
/// Useful for forcing lines and `\r\n` pairs to straddle refills.
///
/// ```rust
/// use streamline::{ByteReader, Chunked, Line};
///
/// let mut buf = [0u8; 4];
/// let source = Chunked::new(&b"a\r\nb"[..], 1);
/// let mut reader = ByteReader::new(source, &mut buf).unwrap();
/// assert_eq!(reader.read_line().unwrap(), Line::Data(&b"a"[..]));
/// assert_eq!(reader.read_line().unwrap(), Line::Data(&b"b"[..]));
/// assert!(reader.read_line().unwrap().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Chunked<S> {
    inner: S,
    max_fill: usize,
}

impl<S> Chunked<S> {
    /// Wraps `inner`, capping every fill at `max_fill` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `max_fill` is zero.
    #[must_use]
    pub fn new(inner: S, max_fill: usize) -> Self {
        assert!(max_fill > 0, "max_fill must be at least one byte");
        Self { inner, max_fill }
    }

    /// Unwraps the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Source> Source for Chunked<S> {
    type Error = S::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.max_fill);
        self.inner.fill(&mut buf[..n])
    }
}
