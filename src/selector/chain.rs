//! The selector-chain mini-DSL.
//!
//! A selector field is a single string that may encode multiple fallback
//! selectors separated by `|`, evaluated left to right. The string form is
//! parsed once at the boundary into typed entries so extraction logic never
//! re-parses selector text.

use std::borrow::Cow;

use crate::patterns::META_SELECTOR;

/// One entry of a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Attribute/value lookup against `<meta>` elements, yielding their
    /// `content` attribute. Parsed from the textual shape
    /// `meta[attr='value']` (either quote style).
    Meta { attr: String, value: String },

    /// Any other selector, run as a generic CSS query. First match wins.
    Query(String),
}

impl Selector {
    /// Classify a single trimmed selector string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = META_SELECTOR.captures(raw) {
            let attr = caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            return Self::Meta { attr, value };
        }
        Self::Query(raw.to_string())
    }

    /// The CSS form of this entry, usable with the query engine.
    ///
    /// Meta entries are reconstructed into an attribute query so fragment
    /// selection can treat every entry uniformly.
    #[must_use]
    pub fn as_css(&self) -> Cow<'_, str> {
        match self {
            Self::Meta { attr, value } => Cow::Owned(format!(r#"meta[{attr}="{value}"]"#)),
            Self::Query(css) => Cow::Borrowed(css),
        }
    }
}

/// An ordered sequence of fallback selectors split from one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Split a selector field on `|`, trimming segments and dropping empty
    /// ones.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        let selectors = field
            .split('|')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Selector::parse)
            .collect();
        Self { selectors }
    }

    /// Whether the chain holds no selectors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Iterate entries in fallback order.
    pub fn iter(&self) -> std::slice::Iter<'_, Selector> {
        self.selectors.iter()
    }
}
