/// Configuration shared by [`ByteReader`](crate::ByteReader) and
/// [`TextReader`](crate::TextReader).
///
/// # Examples
///
/// ```rust
/// use streamline::{ByteReader, Line, ReaderOptions};
///
/// let options = ReaderOptions {
///     keep_carriage_return: true,
///     ..Default::default()
/// };
/// let mut buf = [0u8; 8];
/// let mut reader = ByteReader::with_options(&b"a\r\nb"[..], &mut buf, options).unwrap();
/// assert_eq!(reader.read_line().unwrap(), Line::Data(&b"a\r"[..]));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Whether to keep the `\r` of a `\r\n` delimiter as part of the line.
    ///
    /// A lone `\r` that is not followed by `\n` is always content, whatever
    /// this option says.
    ///
    /// # Default
    ///
    /// `false`
    pub keep_carriage_return: bool,

    /// Whether [`TextReader`](crate::TextReader) drops a leading U+FEFF byte
    /// order mark from the first decoded line.
    ///
    /// Has no effect on [`ByteReader`](crate::ByteReader).
    ///
    /// # Default
    ///
    /// `false`
    pub skip_byte_order_mark: bool,
}
