//! Record codecs: one senior to and from its persisted shape.
//!
//! Two shapes exist:
//! - [`JsonSenior`], one object in the JSON store's `seniors` array
//! - a text line, `NAME|PHONE|ADDRESS|EMAIL|TAG1,TAG2`
//!
//! Decoding validates every field through the value constructors in
//! [`crate::model::fields`] and fails for the one record only. Encoding is
//! total.

use crate::error::{DecodeError, Field};
use crate::model::{Address, Email, Name, Phone, Remark, Senior, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const FIELD_SEPARATOR: char = '|';
pub const TAG_SEPARATOR: char = ',';

/// The JSON file's top-level object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonBook<T> {
    #[serde(default, alias = "persons")]
    pub seniors: Vec<T>,
}

/// A senior as stored in JSON. Every field is optional on disk so that a
/// missing field can be reported by name instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSenior {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl JsonSenior {
    pub fn to_senior(&self) -> Result<Senior, DecodeError> {
        let name = Name::parse(required(&self.name, Field::Name)?)?;
        let phone = Phone::parse(required(&self.phone, Field::Phone)?)?;
        let address = Address::parse(required(&self.address, Field::Address)?)?;

        let email = match self.email.as_deref() {
            Some(raw) => Email::parse(raw)?,
            None => Email::empty(),
        };
        let remark = match self.remark.as_deref() {
            Some(raw) => Remark::parse(raw)?,
            None => Remark::empty(),
        };
        let tags = self
            .tags
            .iter()
            .flatten()
            .map(|raw| Tag::parse(raw))
            .collect::<Result<BTreeSet<Tag>, DecodeError>>()?;

        Ok(Senior {
            name,
            phone,
            address,
            email,
            remark,
            tags,
        })
    }
}

impl From<&Senior> for JsonSenior {
    fn from(senior: &Senior) -> Self {
        Self {
            name: Some(senior.name.to_string()),
            phone: Some(senior.phone.to_string()),
            email: Some(senior.email.to_string()),
            address: Some(senior.address.to_string()),
            remark: Some(senior.remark.to_string()),
            tags: Some(senior.tags.iter().map(Tag::to_string).collect()),
        }
    }
}

fn required(value: &Option<String>, field: Field) -> Result<&str, DecodeError> {
    value.as_deref().ok_or(DecodeError::MissingField(field))
}

/// Decode one raw entry of the JSON array.
///
/// An entry with the wrong JSON shape (a number where a string belongs, an
/// array instead of an object) is reported as [`DecodeError::Malformed`].
pub fn decode_json_entry(entry: serde_json::Value) -> Result<Senior, DecodeError> {
    let raw: JsonSenior =
        serde_json::from_value(entry).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    raw.to_senior()
}

/// Short "name (phone)" label for a raw JSON entry, using whatever is present.
pub fn json_entry_label(entry: &serde_json::Value) -> String {
    let field = |key: &str| entry.get(key).and_then(|v| v.as_str()).map(str::trim);
    match (field("name"), field("phone")) {
        (Some(name), Some(phone)) => format!("{} ({})", name, phone),
        (Some(name), None) => name.to_string(),
        (None, Some(phone)) => format!("({})", phone),
        (None, None) => "<unnamed>".to_string(),
    }
}

/// Format a senior as one text line. Remark is not part of the text format.
pub fn encode_line(senior: &Senior) -> String {
    let mut line = [
        senior.name.as_str(),
        senior.phone.as_str(),
        senior.address.as_str(),
        senior.email.as_str(),
    ]
    .join(&FIELD_SEPARATOR.to_string());

    if !senior.tags.is_empty() {
        let tags: Vec<&str> = senior.tags.iter().map(Tag::as_str).collect();
        line.push(FIELD_SEPARATOR);
        line.push_str(&tags.join(&TAG_SEPARATOR.to_string()));
    }
    line
}

/// Parse one non-blank text line into a senior.
pub fn decode_line(line: &str) -> Result<Senior, DecodeError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 5 {
        return Err(DecodeError::FieldCount {
            found: fields.len(),
        });
    }

    let name = Name::parse(non_empty(fields[0], Field::Name)?)?;
    let phone = Phone::parse(non_empty(fields[1], Field::Phone)?)?;
    let address = Address::parse(non_empty(fields[2], Field::Address)?)?;
    let email = Email::parse(fields[3])?;

    let mut tags = BTreeSet::new();
    if let Some(tag_field) = fields.get(4) {
        for token in tag_field.split(TAG_SEPARATOR) {
            if token.trim().is_empty() {
                continue;
            }
            tags.insert(Tag::parse(token)?);
        }
    }

    Ok(Senior {
        name,
        phone,
        address,
        email,
        remark: Remark::empty(),
        tags,
    })
}

fn non_empty(value: &str, field: Field) -> Result<&str, DecodeError> {
    if value.is_empty() {
        Err(DecodeError::MissingField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn benson() -> Senior {
        Senior::new(
            Name::parse("Benson Meier").unwrap(),
            Phone::parse("98765432").unwrap(),
            Address::parse("311, Clementi Ave 2, #02-25").unwrap(),
        )
        .with_email(Email::parse("johnd@example.com").unwrap())
        .with_remark(Remark::parse("Prefers morning visits").unwrap())
        .with_tags([
            Tag::parse("owesMoney").unwrap(),
            Tag::parse("friends").unwrap(),
        ])
    }

    fn valid_json() -> JsonSenior {
        JsonSenior::from(&benson())
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let original = benson();
        let value = serde_json::to_value(JsonSenior::from(&original)).unwrap();
        assert_eq!(decode_json_entry(value).unwrap(), original);
    }

    #[test]
    fn json_missing_required_fields_are_named() {
        let mut raw = valid_json();
        raw.name = None;
        assert_eq!(raw.to_senior(), Err(DecodeError::MissingField(Field::Name)));

        let mut raw = valid_json();
        raw.phone = None;
        assert_eq!(raw.to_senior(), Err(DecodeError::MissingField(Field::Phone)));

        let mut raw = valid_json();
        raw.address = None;
        assert_eq!(
            raw.to_senior(),
            Err(DecodeError::MissingField(Field::Address))
        );
    }

    #[test]
    fn json_present_but_invalid_is_invalid_format() {
        let mut raw = valid_json();
        raw.name = Some("R@chel".to_string());
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Name));

        let mut raw = valid_json();
        raw.phone = Some("+651234".to_string());
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Phone));

        let mut raw = valid_json();
        raw.address = Some("   ".to_string());
        assert!(matches!(
            raw.to_senior(),
            Err(DecodeError::InvalidFormat {
                field: Field::Address,
                ..
            })
        ));

        let mut raw = valid_json();
        raw.email = Some("example.com".to_string());
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Email));
    }

    #[test]
    fn json_optional_fields_coerce_to_empty() {
        for email in [None, Some(""), Some("   ")] {
            let mut raw = valid_json();
            raw.email = email.map(str::to_string);
            raw.remark = email.map(str::to_string);
            let senior = raw.to_senior().unwrap();
            assert!(senior.email.is_empty());
            assert!(senior.remark.is_empty());
        }
    }

    #[test]
    fn json_tags_are_trimmed_and_lowercased() {
        let mut raw = valid_json();
        raw.tags = Some(vec![" Friends ".to_string(), "FRIENDS".to_string()]);
        let senior = raw.to_senior().unwrap();
        let tags: Vec<&str> = senior.tags.iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["friends"]);

        raw.tags = Some(vec!["  ".to_string()]);
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Tag));
    }

    #[test]
    fn json_wrong_shape_is_malformed() {
        let entry = json!({ "name": "Alice", "phone": 91234567, "address": "Blk 1" });
        assert!(matches!(
            decode_json_entry(entry),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_json_entry(json!("not an object")),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn json_entry_labels_use_available_fields() {
        assert_eq!(
            json_entry_label(&json!({ "name": "Alice", "phone": "91234567" })),
            "Alice (91234567)"
        );
        assert_eq!(json_entry_label(&json!({ "name": "Alice" })), "Alice");
        assert_eq!(json_entry_label(&json!(42)), "<unnamed>");
    }

    #[test]
    fn container_accepts_legacy_key() {
        let book: JsonBook<serde_json::Value> =
            serde_json::from_str(r#"{ "persons": [ {}, {} ] }"#).unwrap();
        assert_eq!(book.seniors.len(), 2);
    }

    #[test]
    fn text_line_format() {
        assert_eq!(
            encode_line(&benson()),
            "Benson Meier|98765432|311, Clementi Ave 2, #02-25|johnd@example.com|friends,owesmoney"
        );

        let bare = Senior::new(
            Name::parse("Bob").unwrap(),
            Phone::parse("81234567").unwrap(),
            Address::parse("Blk 2").unwrap(),
        );
        assert_eq!(encode_line(&bare), "Bob|81234567|Blk 2|");
    }

    #[test]
    fn text_round_trip_without_remark() {
        let original = benson().with_remark(Remark::empty());
        assert_eq!(decode_line(&encode_line(&original)).unwrap(), original);
    }

    #[test]
    fn text_line_field_count() {
        assert_eq!(
            decode_line("Bob|81234567|Blk 2"),
            Err(DecodeError::FieldCount { found: 3 })
        );
        assert_eq!(
            decode_line("Bob|81234567|Blk 2||a|b"),
            Err(DecodeError::FieldCount { found: 6 })
        );
    }

    #[test]
    fn text_line_missing_and_invalid_fields() {
        assert_eq!(
            decode_line("|81234567|Blk 2|"),
            Err(DecodeError::MissingField(Field::Name))
        );
        assert_eq!(
            decode_line("Bob||Blk 2|"),
            Err(DecodeError::MissingField(Field::Phone))
        );
        assert_eq!(
            decode_line("Bob|not-a-phone|Some Address|bob@x.com")
                .unwrap_err()
                .field(),
            Some(Field::Phone)
        );
    }

    #[test]
    fn json_values_with_text_delimiters_are_rejected() {
        let mut raw = valid_json();
        raw.address = Some("Blk 1 | Unit 2".to_string());
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Address));

        let mut raw = valid_json();
        raw.tags = Some(vec!["a,b".to_string()]);
        assert_eq!(raw.to_senior().unwrap_err().field(), Some(Field::Tag));
    }

    #[test]
    fn every_valid_senior_survives_a_text_round_trip() {
        let senior = Senior::new(
            Name::parse("Tan Ah Kow s/o Tan").unwrap(),
            Phone::parse("61234567").unwrap(),
            Address::parse("Blk 7, #01-02 (rear) / Jurong West").unwrap(),
        )
        .with_tags([
            Tag::parse("lives-alone").unwrap(),
            Tag::parse("needs wheelchair").unwrap(),
        ]);
        assert_eq!(decode_line(&encode_line(&senior)).unwrap(), senior);
    }

    #[test]
    fn text_line_skips_empty_tag_tokens() {
        let senior = decode_line("Bob|81234567|Blk 2||Friend,, diabetic ,").unwrap();
        let tags: Vec<&str> = senior.tags.iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["diabetic", "friend"]);
    }
}
