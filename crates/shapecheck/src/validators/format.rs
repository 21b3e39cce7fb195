//! Built-in string formats
//!
//! Formats are regex-backed and run against the value's string form, so a
//! number such as `42` satisfies `numeric` just like the string `"42"`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::ViolationKind;
use crate::foundation::value::string_form;
use crate::macros::validator;

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*\.[A-Za-z]{2,}$").unwrap());

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap()
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+$").unwrap());

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

// ============================================================================
// FORMAT
// ============================================================================

/// Named string formats accepted by the `format` constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// ASCII letters and digits only, at least one.
    Alphanumeric,
    /// Optional leading `-`, digits, optional decimal part.
    Numeric,
    /// `local@domain.tld`.
    Email,
    /// Strict `YYYY-MM-DD` with month `01`–`12` and day `01`–`31`.
    Date,
    /// `http://` or `https://` followed by non-whitespace.
    Url,
    /// Optional `#`, then 3 or 6 hex digits, any case.
    HexColor,
}

impl Format {
    /// The schema spelling of this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Numeric => "numeric",
            Self::Email => "email",
            Self::Date => "date",
            Self::Url => "url",
            Self::HexColor => "hexColor",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Alphanumeric => &ALPHANUMERIC_REGEX,
            Self::Numeric => &NUMERIC_REGEX,
            Self::Email => &EMAIL_REGEX,
            Self::Date => &DATE_REGEX,
            Self::Url => &URL_REGEX,
            Self::HexColor => &HEX_COLOR_REGEX,
        }
    }

    /// Returns true if `text` is in this format.
    #[must_use]
    pub fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphanumeric" => Ok(Self::Alphanumeric),
            "numeric" => Ok(Self::Numeric),
            "email" => Ok(Self::Email),
            "date" => Ok(Self::Date),
            "url" => Ok(Self::Url),
            "hexColor" => Ok(Self::HexColor),
            _ => Err(()),
        }
    }
}

// ============================================================================
// FORMAT VALIDATOR
// ============================================================================

validator! {
    /// Validates that a value's string form is in a named [`Format`].
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MatchesFormat { format: Format } for Value;
    rule(self, input) { self.format.is_match(&string_form(input)) }
    error(self, input) { ViolationKind::InvalidFormat }
    fn matches_format(format: Format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::letters_and_digits(Format::Alphanumeric, "abc123", true)]
    #[case::underscore(Format::Alphanumeric, "abc_123", false)]
    #[case::empty(Format::Alphanumeric, "", false)]
    #[case::non_ascii(Format::Alphanumeric, "caf\u{e9}", false)]
    #[case::integer(Format::Numeric, "42", true)]
    #[case::negative_decimal(Format::Numeric, "-3.14", true)]
    #[case::trailing_dot(Format::Numeric, "3.", false)]
    #[case::plus_sign(Format::Numeric, "+3", false)]
    #[case::simple_email(Format::Email, "user@example.com", true)]
    #[case::subdomain_email(Format::Email, "first.last@mail.example.org", true)]
    #[case::no_at(Format::Email, "user.example.com", false)]
    #[case::no_tld(Format::Email, "user@example", false)]
    #[case::space_in_email(Format::Email, "us er@example.com", false)]
    #[case::iso_date(Format::Date, "2024-01-01", true)]
    #[case::compact_date(Format::Date, "20240101", false)]
    #[case::month_thirteen(Format::Date, "2024-13-01", false)]
    #[case::single_digit_day(Format::Date, "2024-01-1", false)]
    #[case::http(Format::Url, "http://example.com", true)]
    #[case::https_path(Format::Url, "https://example.com/a?b=c", true)]
    #[case::ftp(Format::Url, "ftp://example.com", false)]
    #[case::whitespace_url(Format::Url, "https://exa mple.com", false)]
    #[case::short_hex(Format::HexColor, "#fff", true)]
    #[case::long_hex_upper(Format::HexColor, "A1B2C3", true)]
    #[case::four_digits(Format::HexColor, "#abcd", false)]
    #[case::not_hex(Format::HexColor, "#ggg", false)]
    fn format_cases(#[case] format: Format, #[case] text: &str, #[case] expected: bool) {
        assert_eq!(format.is_match(text), expected, "{format} vs {text:?}");
    }

    #[test]
    fn numbers_are_checked_by_string_form() {
        let validator = matches_format(Format::Numeric);
        assert!(validator.validate(&json!(-12.5)).is_ok());
        assert!(matches_format(Format::Alphanumeric).validate(&json!(7)).is_ok());
    }

    #[test]
    fn failure_kind() {
        assert_eq!(
            matches_format(Format::Email).validate(&json!("nope")),
            Err(ViolationKind::InvalidFormat)
        );
    }

    #[test]
    fn parse_uses_schema_spelling() {
        assert_eq!("hexColor".parse::<Format>(), Ok(Format::HexColor));
        assert!("hex_color".parse::<Format>().is_err());
        assert_eq!(Format::HexColor.to_string(), "hexColor");
    }
}
