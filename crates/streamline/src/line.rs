/// Outcome of a single `read_line` call.
///
/// An empty line is `Data` with an empty view; only `End` means the source
/// has nothing more to give.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Line<'a, T: ?Sized> {
    /// A line with its delimiter removed.
    Data(&'a T),
    /// No further lines remain. Returned again on every later call.
    End,
}

impl<T: ?Sized> Clone for Line<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Line<'_, T> {}

impl<'a, T: ?Sized> Line<'a, T> {
    /// Returns `true` for the end-marker.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Line::End)
    }

    /// The line view, or `None` at the end of the data.
    #[must_use]
    pub fn data(self) -> Option<&'a T> {
        match self {
            Line::Data(view) => Some(view),
            Line::End => None,
        }
    }
}

impl<'a, T: ?Sized> From<Line<'a, T>> for Option<&'a T> {
    fn from(line: Line<'a, T>) -> Self {
        line.data()
    }
}
