//! Request building shared by both providers.
//!
//! [`Endpoint`] joins path segments onto a provider base URL and
//! [`QueryParams`] collects the query string, dropping absent values.

use std::fmt::Display;

use reqwest::Url;

use crate::error::{MixjarError, Result};

/// A provider URL under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Parse a base URL.
    ///
    /// The base must be a hierarchical URL (`http://host/...`); any query
    /// or fragment on it is discarded.
    pub fn parse(base: &str) -> Result<Self> {
        let mut url = Url::parse(base)
            .map_err(|e| MixjarError::InvalidConfig(format!("invalid base URL {base:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(MixjarError::InvalidConfig(format!(
                "base URL {base:?} cannot carry path segments"
            )));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { url })
    }

    /// Append path segments in order.
    ///
    /// A trailing empty segment left by the base (or a previous
    /// [`with_trailing_slash`](Self::with_trailing_slash)) is replaced, so
    /// `join(["a"]).join(["b"])` equals `join(["a", "b"])`.
    pub fn join<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = segments.into_iter().peekable();
        if segments.peek().is_none() {
            return self;
        }
        if let Ok(mut path) = self.url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        self
    }

    /// Terminate the path with `/`.
    pub fn with_trailing_slash(mut self) -> Self {
        if let Ok(mut path) = self.url.path_segments_mut() {
            path.pop_if_empty().push("");
        }
        self
    }

    /// Borrow the URL built so far.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Finish building.
    pub fn into_url(self) -> Url {
        self.url
    }
}

/// Ordered query parameters.
///
/// Optional values that are absent or empty are never written: no `name=null`, no `name=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a mandatory parameter, replacing any previous value.
    pub fn set<V: Display>(mut self, name: &'static str, value: V) -> Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    /// Set a parameter only when a value is present and renders non-empty.
    pub fn push<V: Display>(self, name: &'static str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(value) if !value.is_empty() => self.set(name, value),
            _ => self,
        }
    }

    /// Name/value pairs in insertion order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Value of a parameter, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
