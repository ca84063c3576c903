/// The outcome of a routing query.
///
/// An unreachable target is an ordinary, frequent outcome in map-matching
/// and is therefore a value rather than an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<T> {
    Found(T),
    Unreachable,
}

impl<T> Resolution<T> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Resolution::Unreachable)
    }

    /// Converts into an [`Option`], discarding the unreachable marker.
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::Unreachable => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::Unreachable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Found(value) => Resolution::Found(f(value)),
            Resolution::Unreachable => Resolution::Unreachable,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Resolution::Found(value),
            None => Resolution::Unreachable,
        }
    }
}
