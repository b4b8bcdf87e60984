//! Error types for stress test document handling.

use std::fmt;

use pricer_core::types::PeriodError;
use pricer_risk::ShiftSpecError;
use thiserror::Error;

/// Errors raised while reading or writing the XML document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Malformed(String),

    /// The input contains no root element.
    #[error("XML document has no root element")]
    EmptyDocument,

    /// Serialising the tree failed.
    #[error("Failed to write XML: {0}")]
    Write(String),
}

/// Errors raised by the value codecs in [`crate::values`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Token is not a decimal number.
    #[error("Invalid real number '{0}'")]
    InvalidReal(String),

    /// Token parses but is NaN or infinite.
    #[error("Non-finite real number '{0}'")]
    NonFinite(String),

    /// Malformed `count*value` token.
    #[error("Invalid repeat token '{0}'")]
    InvalidRepeat(String),

    /// Tenor token rejected by the period grammar.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

/// Where in the document an error was raised.
///
/// Every field is optional; errors raised at the document root carry
/// an empty context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Stress test label.
    pub label: Option<String>,
    /// Section element name, e.g. `DiscountCurves`.
    pub section: Option<&'static str>,
    /// Entry identifier within the section.
    pub key: Option<String>,
}

impl ErrorContext {
    /// Context for a stress test element.
    pub fn stress_test(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Narrows this context to a section.
    pub fn with_section(mut self, section: &'static str) -> Self {
        self.section = Some(section);
        self
    }

    /// Narrows this context to an entry within the section.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if let Some(label) = &self.label {
            parts.push(format!("stress test '{label}'"));
        }
        if let Some(section) = self.section {
            parts.push(format!("section {section}"));
        }
        if let Some(key) = &self.key {
            parts.push(format!("key '{key}'"));
        }
        if parts.is_empty() {
            write!(f, "document root")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Errors raised while loading a stress test collection.
///
/// Validation failures carry an [`ErrorContext`] naming the stress test,
/// section and key being processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The `StressTesting` root element is absent.
    #[error("Missing required section <{section}> ({context})")]
    MissingRequiredSection {
        /// Missing element name.
        section: &'static str,
        /// Location.
        context: ErrorContext,
    },

    /// An identifying attribute is absent or empty.
    #[error("Missing attribute '{attribute}' on <{element}> ({context})")]
    MissingAttribute {
        /// Element carrying the attribute.
        element: &'static str,
        /// Attribute name.
        attribute: &'static str,
        /// Location.
        context: ErrorContext,
    },

    /// A mandatory child element is absent.
    #[error("Missing element <{element}> ({context})")]
    MissingElement {
        /// Missing element name.
        element: &'static str,
        /// Location.
        context: ErrorContext,
    },

    /// Shift values and axis values differ in length.
    #[error("Number of {axis} ({axis_len}) does not match number of shifts ({shifts}) ({context})")]
    SizeMismatch {
        /// Axis name.
        axis: &'static str,
        /// Number of shift values.
        shifts: usize,
        /// Number of axis values.
        axis_len: usize,
        /// Location.
        context: ErrorContext,
    },

    /// A sequence that must be non-empty is empty.
    #[error("No {sequence} provided ({context})")]
    EmptySequence {
        /// Sequence name.
        sequence: &'static str,
        /// Location.
        context: ErrorContext,
    },

    /// A cube `Shift` node carries exactly one of `expiry` and `term`.
    #[error(
        "Shift node must carry both or neither of expiry/term, \
         got expiry={expiry:?} term={term:?} ({context})"
    )]
    InconsistentGridKey {
        /// `expiry` attribute if present.
        expiry: Option<String>,
        /// `term` attribute if present.
        term: Option<String>,
        /// Location.
        context: ErrorContext,
    },

    /// A number, tenor or shift type failed to parse.
    #[error("Cannot parse '{value}': {reason} ({context})")]
    UnparsableValue {
        /// Offending text.
        value: String,
        /// Parser message.
        reason: String,
        /// Location.
        context: ErrorContext,
    },

    /// A shift was rejected by the stress test model.
    #[error("{source} ({context})")]
    InvalidShift {
        /// Model error.
        source: ShiftSpecError,
        /// Location.
        context: ErrorContext,
    },

    /// The text could not be turned into a document tree.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

impl LoadError {
    /// Lifts a model validation error into a load error at `context`.
    pub fn from_spec(err: ShiftSpecError, context: ErrorContext) -> Self {
        match err {
            ShiftSpecError::SizeMismatch {
                axis,
                shifts,
                axis_len,
            } => LoadError::SizeMismatch {
                axis,
                shifts,
                axis_len,
                context,
            },
            ShiftSpecError::EmptySequence(sequence) => {
                LoadError::EmptySequence { sequence, context }
            }
            ShiftSpecError::UnknownShiftType(ref value) => LoadError::UnparsableValue {
                value: value.clone(),
                reason: err.to_string(),
                context,
            },
            other => LoadError::InvalidShift {
                source: other,
                context,
            },
        }
    }

    /// Lifts a value codec error for `value` into a load error at `context`.
    pub fn unparsable(value: &str, err: ValueError, context: ErrorContext) -> Self {
        LoadError::UnparsableValue {
            value: value.to_string(),
            reason: err.to_string(),
            context,
        }
    }

    /// Location of the failure, if the error is tied to one.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            LoadError::MissingRequiredSection { context, .. }
            | LoadError::MissingAttribute { context, .. }
            | LoadError::MissingElement { context, .. }
            | LoadError::SizeMismatch { context, .. }
            | LoadError::EmptySequence { context, .. }
            | LoadError::InconsistentGridKey { context, .. }
            | LoadError::UnparsableValue { context, .. }
            | LoadError::InvalidShift { context, .. } => Some(context),
            LoadError::Xml(_) => None,
        }
    }
}
