//! Ordered placeholder substitutions.

use indexmap::IndexMap;
use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

/// A compiled pattern and the text that replaces each of its matches.
#[derive(Debug, Clone)]
pub struct Substitution {
    matcher: Regex,
    replacement: String,
}

impl Substitution {
    /// Compiles `pattern` as a regular expression.
    pub fn new<S: Into<String>>(pattern: &str, replacement: S) -> Result<Self> {
        let matcher = Regex::new(pattern).map_err(Error::PatternError)?;
        Ok(Self { matcher, replacement: replacement.into() })
    }

    /// Matches `token` verbatim, e.g. `$(SourceFilesPath)`.
    pub fn literal<S: Into<String>>(token: &str, replacement: S) -> Result<Self> {
        Self::new(&regex::escape(token), replacement)
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Substitutions applied one after another, in insertion order.
///
/// Each step sees the output of the previous one, so `[("A", "B"), ("B", "C")]`
/// turns `"AA"` into `"CC"`. Replacement text is inserted as-is; `$` has no
/// special meaning in it.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionMap {
    substitutions: Vec<Substitution>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a regular-expression substitution.
    ///
    /// # Errors
    /// * `Error::PatternError` if `pattern` does not compile
    pub fn push<S: Into<String>>(&mut self, pattern: &str, replacement: S) -> Result<&mut Self> {
        self.substitutions.push(Substitution::new(pattern, replacement)?);
        Ok(self)
    }

    /// Appends a substitution matching `token` literally.
    pub fn push_literal<S: Into<String>>(&mut self, token: &str, replacement: S) -> Result<&mut Self> {
        self.substitutions.push(Substitution::literal(token, replacement)?);
        Ok(self)
    }

    /// Builds a map from literal placeholder tokens.
    ///
    /// # Errors
    /// * `Error::PatternError` if a token exceeds the pattern size limit
    pub fn from_literals<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (token, replacement) in pairs {
            map.push_literal(token.as_ref(), replacement)?;
        }
        Ok(map)
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.substitutions.iter()
    }

    /// Runs every substitution over `content` in order.
    ///
    /// A pattern with no matches leaves the content untouched.
    pub fn apply(&self, content: &str) -> String {
        self.substitutions.iter().fold(content.to_string(), |current, substitution| {
            substitution
                .matcher
                .replace_all(&current, NoExpand(&substitution.replacement))
                .into_owned()
        })
    }
}

impl TryFrom<IndexMap<String, String>> for SubstitutionMap {
    type Error = Error;

    /// Compiles every key as a regular expression, keeping declaration order.
    fn try_from(pairs: IndexMap<String, String>) -> Result<Self> {
        let substitutions = pairs
            .into_iter()
            .map(|(pattern, replacement)| Substitution::new(&pattern, replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { substitutions })
    }
}
