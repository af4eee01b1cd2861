use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Failures reported by a DOM query port. The select adapter passes these
/// through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("no such element: {0}")]
    NoSuchElement(String),
    #[error("stale element reference: {0}")]
    StaleElement(String),
    #[error("element not interactable: {0}")]
    NotInteractable(String),
    #[error("driver timeout: {0}")]
    Timeout(String),
    #[error("driver i/o error: {0}")]
    Io(String),
}

impl DriverError {
    pub fn no_such_element(selector: &Selector) -> Self {
        DriverError::NoSuchElement(selector.to_string())
    }
}

/// Opaque reference to a rendered DOM node.
///
/// Handles are only meaningful while the node stays rendered; a popup that is
/// closed and opened again produces new handles.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle(pub String);

impl NodeHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for NodeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

/// Structural query understood by every port implementation.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Selector {
    Css(String),
    XPath(String),
}

impl Selector {
    pub fn css(expr: impl Into<String>) -> Self {
        Selector::Css(expr.into())
    }

    pub fn xpath(expr: impl Into<String>) -> Self {
        Selector::XPath(expr.into())
    }

    pub fn expression(&self) -> &str {
        match self {
            Selector::Css(expr) | Selector::XPath(expr) => expr,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Css(expr) => write!(f, "css={}", expr),
            Selector::XPath(expr) => write!(f, "xpath={}", expr),
        }
    }
}

/// Context a query is evaluated against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope<'a> {
    Document,
    Node(&'a NodeHandle),
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Document => f.write_str("document"),
            Scope::Node(node) => fmt::Display::fmt(node, f),
        }
    }
}
