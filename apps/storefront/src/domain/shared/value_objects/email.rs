//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::domain::shared::DomainError;

/// A syntactically valid email address.
///
/// The rule is deliberately minimal: a non-empty local part, a single `@`,
/// and a domain containing at least one `.` with text on both sides. No
/// whitespace is allowed anywhere. Anything stricter is left to delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the input does not match the rule.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(DomainError::InvalidEmail {
                address: value.to_string(),
            })
        }
    }

    /// Check an address without constructing it.
    #[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        static EMAIL_REGEX: OnceLock<regex::Regex> = OnceLock::new();

        let re = EMAIL_REGEX.get_or_init(|| {
            regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
        });
        re.is_match(value)
    }

    /// Get the address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part (after the `@`).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("name@domain.com" ; "simple address")]
    #[test_case("first.last@sub.domain.org" ; "dotted local part and subdomain")]
    #[test_case("a+tag@d.io" ; "plus tag")]
    fn accepts(address: &str) {
        let email = EmailAddress::parse(address).unwrap();
        assert_eq!(email.as_str(), address);
    }

    #[test_case("a" ; "no at sign")]
    #[test_case("name@domain" ; "domain without dot")]
    #[test_case("@domain.com" ; "empty local part")]
    #[test_case("name@.com" ; "empty domain label")]
    #[test_case("name@domain." ; "trailing dot")]
    #[test_case("na me@domain.com" ; "whitespace")]
    #[test_case("a@b@c.com" ; "two at signs")]
    #[test_case("" ; "empty")]
    fn rejects(address: &str) {
        let err = EmailAddress::parse(address).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidEmail {
                address: address.to_string()
            }
        );
    }

    #[test]
    fn domain_part() {
        let email = EmailAddress::parse("name@domain.com").unwrap();
        assert_eq!(email.domain(), "domain.com");
    }
}
