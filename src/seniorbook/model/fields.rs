//! Field value objects for a senior record.
//!
//! Every constructor trims its input and validates it, failing fast with a
//! [`DecodeError::InvalidFormat`] naming the field. Once built, a value is
//! known to be valid, so codecs only ever deal with checked data.
//!
//! Rules:
//! - Name: starts with a letter; letters, spaces, `'`, `-`, `.` and `/` only
//! - Phone: exactly 8 digits, starting with 6, 8 or 9
//! - Address: non-empty, no `|` or line breaks
//! - Email: empty, or `local@domain` with an alphanumeric local part and
//!   dot-separated, letters-only domain labels
//! - Remark: any text, may be empty
//! - Tag: stored lower-cased, non-empty, no `|`, `,` or line breaks
//!
//! Each text field also has a maximum length in characters.

use crate::error::{DecodeError, Field};
use std::fmt;

pub const NAME_MAX_LENGTH: usize = 100;
pub const PHONE_LENGTH: usize = 8;
pub const ADDRESS_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 50;
pub const REMARK_MAX_LENGTH: usize = 200;
pub const TAG_MAX_LENGTH: usize = 30;

const PHONE_LEADING_DIGITS: [char; 3] = ['6', '8', '9'];

/// Characters the text format uses as delimiters. It has no escaping, so
/// values written to it must not contain them.
const LINE_RESERVED: [char; 3] = ['|', '\n', '\r'];
const TAG_RESERVED: [char; 4] = ['|', ',', '\n', '\r'];

fn check_length(field: Field, value: &str, max: usize) -> Result<(), DecodeError> {
    let len = value.chars().count();
    if len > max {
        return Err(DecodeError::invalid(
            field,
            format!("must be at most {} characters, found {}", max, len),
        ));
    }
    Ok(())
}

fn check_reserved(field: Field, value: &str, reserved: &[char]) -> Result<(), DecodeError> {
    match value.chars().find(|ch| reserved.contains(ch)) {
        Some(ch) => Err(DecodeError::invalid(
            field,
            format!("contains reserved character {:?}", ch),
        )),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        let first = value
            .chars()
            .next()
            .ok_or_else(|| DecodeError::invalid(Field::Name, "cannot be blank"))?;
        if !first.is_alphabetic() {
            return Err(DecodeError::invalid(
                Field::Name,
                format!("must start with a letter, found '{}'", first),
            ));
        }
        if let Some(ch) = value.chars().find(|ch| !is_valid_name_char(*ch)) {
            return Err(DecodeError::invalid(
                Field::Name,
                format!("contains invalid character '{}'", ch),
            ));
        }
        check_length(Field::Name, value, NAME_MAX_LENGTH)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded form used for identity comparison.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_alphabetic() || matches!(ch, ' ' | '\'' | '-' | '.' | '/')
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(DecodeError::invalid(Field::Phone, "cannot be blank"));
        }
        if !value.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(DecodeError::invalid(Field::Phone, "must contain digits only"));
        }
        if value.len() != PHONE_LENGTH {
            return Err(DecodeError::invalid(
                Field::Phone,
                format!("must be exactly {} digits, found {}", PHONE_LENGTH, value.len()),
            ));
        }
        if !value.starts_with(PHONE_LEADING_DIGITS) {
            return Err(DecodeError::invalid(
                Field::Phone,
                "must start with 6, 8 or 9",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(DecodeError::invalid(Field::Address, "cannot be blank"));
        }
        check_reserved(Field::Address, value, &LINE_RESERVED)?;
        check_length(Field::Address, value, ADDRESS_MAX_LENGTH)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An optional email. The empty value is valid and means "no email".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(Self::empty());
        }
        check_length(Field::Email, value, EMAIL_MAX_LENGTH)?;

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| DecodeError::invalid(Field::Email, "must be of the form local@domain"))?;

        if local.is_empty() || !local.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(DecodeError::invalid(
                Field::Email,
                "local part must contain only letters and digits",
            ));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(DecodeError::invalid(
                Field::Email,
                "domain must contain at least two labels",
            ));
        }
        for label in labels {
            if label.is_empty() || !label.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(DecodeError::invalid(
                    Field::Email,
                    "domain labels must contain only letters",
                ));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        check_length(Field::Remark, value, REMARK_MAX_LENGTH)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A lower-cased tag. Ordering is by tag text so tag sets serialize stably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(DecodeError::invalid(Field::Tag, "cannot be blank"));
        }
        check_reserved(Field::Tag, value, &TAG_RESERVED)?;
        check_length(Field::Tag, value, TAG_MAX_LENGTH)?;
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Name, Phone, Address, Email, Remark, Tag);

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: DecodeError) -> Field {
        err.field().expect("field-level error")
    }

    #[test]
    fn test_valid_names() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(Name::parse("Tan Ah Kow s/o Tan").is_ok());
        assert!(Name::parse("O'Brien-Smith Jr.").is_ok());
        assert_eq!(Name::parse("  Alice  ").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(field_of(Name::parse("").unwrap_err()), Field::Name);
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("R@chel").is_err());
        assert!(Name::parse("1Alice").is_err());
        assert!(Name::parse(&"a".repeat(NAME_MAX_LENGTH + 1)).is_err());
        assert!(Name::parse(&"a".repeat(NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_name_folding() {
        let upper = Name::parse("ALICE").unwrap();
        let lower = Name::parse("alice").unwrap();
        assert_ne!(upper, lower);
        assert_eq!(upper.folded(), lower.folded());
    }

    #[test]
    fn test_valid_phones() {
        assert!(Phone::parse("93121534").is_ok());
        assert!(Phone::parse("81234123").is_ok());
        assert!(Phone::parse("61234123").is_ok());
        assert!(Phone::parse("60000000").is_ok());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(Phone::parse("").is_err());
        assert!(Phone::parse("911").is_err());
        assert!(Phone::parse("phone").is_err());
        assert!(Phone::parse("9011p041").is_err());
        assert!(Phone::parse("9312 1534").is_err());
        assert!(Phone::parse("51234567").is_err());
        assert!(Phone::parse("71234567").is_err());
        assert!(Phone::parse("01234567").is_err());
        assert!(Phone::parse("6123456").is_err());
        assert!(Phone::parse("612345678").is_err());
        assert!(Phone::parse("+651234").is_err());
    }

    #[test]
    fn test_address_bounds() {
        assert!(Address::parse("Blk 41 Telok Blangah Way #07-436").is_ok());
        assert!(Address::parse("").is_err());
        assert!(Address::parse("   ").is_err());
        assert!(Address::parse(&"A".repeat(ADDRESS_MAX_LENGTH)).is_ok());
        assert!(Address::parse(&"A".repeat(ADDRESS_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_email_empty_is_valid() {
        assert!(Email::parse("").unwrap().is_empty());
        assert!(Email::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_valid_emails() {
        assert!(Email::parse("peterjack@example.com").is_ok());
        assert!(Email::parse("PeterJack1190@example.com").is_ok());
        assert!(Email::parse("john@sales.marketing.example.com").is_ok());
        assert!(Email::parse("a@EXAMPLE.COM").is_ok());
        assert!(Email::parse("a@example.sg").is_ok());
        assert!(Email::parse("peterjack@example.c").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("peterjackexample.com").is_err());
        assert!(Email::parse("peterjack@").is_err());
        assert!(Email::parse("peterjack@-").is_err());
        assert!(Email::parse("peterjack@exam_ple.com").is_err());
        assert!(Email::parse("peter jack@example.com").is_err());
        assert!(Email::parse("peterjack@@example.com").is_err());
        assert!(Email::parse("peter@jack@example.com").is_err());
        assert!(Email::parse("peter.jack@example.com").is_err());
        assert!(Email::parse("a@aa..com").is_err());
        assert!(Email::parse("a@.aa.com").is_err());
        assert!(Email::parse("a@aa.com.").is_err());
        assert!(Email::parse("a1@example1.com").is_err());
        assert!(Email::parse("123@145").is_err());
    }

    #[test]
    fn test_email_length_boundary() {
        let suffix = "@sales.example.com";
        let exact = format!("{}{}", "a".repeat(EMAIL_MAX_LENGTH - suffix.len()), suffix);
        assert!(Email::parse(&exact).is_ok());
        let over = format!("{}{}", "a".repeat(EMAIL_MAX_LENGTH + 1 - suffix.len()), suffix);
        assert!(Email::parse(&over).is_err());
    }

    #[test]
    fn test_remark_bounds() {
        assert!(Remark::parse("").unwrap().is_empty());
        assert!(Remark::parse("   ").unwrap().is_empty());
        assert!(Remark::parse(&"a".repeat(REMARK_MAX_LENGTH)).is_ok());
        assert!(Remark::parse(&"a".repeat(REMARK_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_tags_are_lowercased() {
        assert_eq!(Tag::parse(" Friends ").unwrap().as_str(), "friends");
        assert_eq!(Tag::parse("DIABETIC").unwrap(), Tag::parse("diabetic").unwrap());
    }

    #[test]
    fn test_invalid_tags() {
        assert_eq!(field_of(Tag::parse("   ").unwrap_err()), Field::Tag);
        assert!(Tag::parse(&"t".repeat(TAG_MAX_LENGTH)).is_ok());
        assert!(Tag::parse(&"t".repeat(TAG_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_delimiters_rejected() {
        assert_eq!(field_of(Address::parse("Blk 1 | Unit 2").unwrap_err()), Field::Address);
        assert!(Address::parse("Blk 1\nUnit 2").is_err());
        assert!(Address::parse("311, Clementi Ave 2, #02-25").is_ok());
        assert_eq!(field_of(Tag::parse("a,b").unwrap_err()), Field::Tag);
        assert!(Tag::parse("a|b").is_err());
        assert!(Tag::parse("lives-alone").is_ok());
    }
}
