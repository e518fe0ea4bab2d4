//! Domain errors for the storefront.

use std::fmt;

/// Domain-level errors raised while building value objects.
///
/// These errors are independent of any collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Address does not look like `local@domain.tld`.
    InvalidEmail {
        /// The rejected input.
        address: String,
    },

    /// Currency code is not three ASCII letters.
    InvalidCurrency {
        /// The rejected input.
        code: String,
    },

    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { address } => write!(f, "Invalid email address: '{address}'"),
            Self::InvalidCurrency { code } => write!(f, "Invalid currency code: '{code}'"),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_display() {
        let err = DomainError::InvalidEmail {
            address: "a".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email address: 'a'");
    }

    #[test]
    fn invalid_currency_display() {
        let err = DomainError::InvalidCurrency {
            code: "PL".to_string(),
        };
        assert!(err.to_string().contains("PL"));
    }

    #[test]
    fn invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "total_amount".to_string(),
            message: "cannot be negative".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("total_amount"));
        assert!(msg.contains("cannot be negative"));
    }
}
