//! The string values a token hands to the templating system.

/// A finite, restartable sequence of token values.
///
/// Built from a cache snapshot; iterating it again (or cloning it) replays the
/// same values without touching the token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenValues {
    values: Vec<String>,
}

impl TokenValues {
    /// No values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exactly one value.
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.values
    }
}

impl<S: Into<String>> FromIterator<S> for TokenValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for TokenValues {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenValues {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
