//! Ordered rule sets.

/// Ordered mapping from token kind to pattern fragment.
///
/// Declaration order is the tie-break: when several fragments match at the
/// same offset, the earliest rule wins even if a later one matches more
/// text. A kind may appear more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet<K> {
    rules: Vec<(K, String)>,
}

impl<K> PatternSet<K> {
    pub fn new() -> Self {
        PatternSet { rules: Vec::new() }
    }

    /// Append a rule.
    #[must_use]
    pub fn rule(mut self, kind: K, pattern: impl Into<String>) -> Self {
        self.push(kind, pattern);
        self
    }

    pub fn push(&mut self, kind: K, pattern: impl Into<String>) {
        self.rules.push((kind, pattern.into()));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.rules.iter().map(|(kind, pattern)| (kind, pattern.as_str()))
    }
}

impl PatternSet<()> {
    /// A single rule whose tokens all have the unit kind.
    pub fn untyped(pattern: impl Into<String>) -> Self {
        PatternSet::new().rule((), pattern)
    }
}

impl<K> Default for PatternSet<K> {
    fn default() -> Self {
        PatternSet::new()
    }
}

impl<K, S: Into<String>> FromIterator<(K, S)> for PatternSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        PatternSet {
            rules: iter
                .into_iter()
                .map(|(kind, pattern)| (kind, pattern.into()))
                .collect(),
        }
    }
}

impl<K, S: Into<String>, const N: usize> From<[(K, S); N]> for PatternSet<K> {
    fn from(rules: [(K, S); N]) -> Self {
        rules.into_iter().collect()
    }
}

#[cfg(test)]
mod tests;
