//! Entries of a wanted set.

/// One entry of a wanted set passed to stream lookups.
///
/// A token satisfies a wanted set when its kind or its exact value appears
/// in it. An empty wanted set is satisfied by any token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Want<'a, K> {
    /// Match tokens of this kind.
    Kind(K),
    /// Match tokens whose text is exactly this string.
    Value(&'a str),
}

impl<K: PartialEq> Want<'_, K> {
    /// Whether a token with the given kind and text satisfies this entry.
    #[inline]
    pub fn admits(&self, kind: &K, value: &str) -> bool {
        match self {
            Want::Kind(k) => k == kind,
            Want::Value(v) => *v == value,
        }
    }
}
