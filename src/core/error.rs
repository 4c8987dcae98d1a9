use thiserror::Error;

/// Errors that can occur while resolving a reference or generating a bill.
///
/// Every variant is terminal for the current bill-generation attempt.
/// None of them is transient, so nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrBillError {
    /// The document currency is not admitted on a Swiss QR-bill.
    #[error("unsupported currency '{0}': a QR-bill must be issued in CHF or EUR")]
    UnsupportedCurrency(String),

    /// A reference supplied for a regular IBAN is neither empty nor SCOR-shaped.
    #[error(
        "invalid SCOR reference format: \"{input}\". For a regular IBAN the reference \
         must be empty or start with RF followed by 2 check digits and 1-21 letters or digits (e.g. RF18...)"
    )]
    InvalidReferenceFormat {
        /// The reference exactly as the user entered it.
        input: String,
    },

    /// A structurally valid reference failed its checksum.
    /// Only raised under [`ChecksumPolicy::Verify`](super::ChecksumPolicy::Verify).
    #[error("{kind} reference '{reference}' has an invalid check digit")]
    InvalidChecksum {
        /// Regime whose checksum failed.
        kind: super::ReferenceType,
        /// The cleaned reference.
        reference: String,
    },

    /// A collaborator could not find the requested record.
    #[error("{doctype} '{name}' not found")]
    DocumentNotFound {
        /// Record type (e.g. "Address").
        doctype: String,
        /// Record identifier.
        name: String,
    },

    /// A fetched record lacks a field the bill needs.
    #[error("{doctype} is missing required field '{field}'")]
    MissingField {
        /// Record type (e.g. "Bank Account").
        doctype: String,
        /// Name of the missing field.
        field: String,
    },

    /// One or more bill context checks failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The rendering collaborator rejected the request.
    #[error("rendering failed: {0}")]
    Render(String),
}

impl QrBillError {
    /// Shorthand for [`QrBillError::DocumentNotFound`].
    pub fn not_found(doctype: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DocumentNotFound {
            doctype: doctype.into(),
            name: name.into(),
        }
    }

    /// Shorthand for [`QrBillError::MissingField`].
    pub fn missing(doctype: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            doctype: doctype.into(),
            field: field.into(),
        }
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "creditor.address.country_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// QR payload element the rule applies to, if any (e.g. "Amt").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a payload element.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error tied to a payload element.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
