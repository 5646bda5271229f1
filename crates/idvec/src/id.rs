use std::fmt;

/// Stable handle to an element of an [`IdVec`](crate::IdVec).
///
/// Stays bound to the same element until that element is removed, after
/// which the value may be handed out again for a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    /// Sentinel that fails every validity test.
    pub const INVALID: Self = Self(-1);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns `false` if the id cannot be valid in any store.
    ///
    /// Needs no store: only the sign is inspected.
    #[inline]
    pub const fn could_be_valid(self) -> bool {
        self.0 >= 0
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Converts to a map index, `None` for negative values.
    #[inline]
    pub fn as_usize(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        // Vec lengths never exceed isize::MAX, so this cannot wrap.
        Self(index as i64)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Id> for i64 {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
