//! Profile input model and normalization.
//!
//! # Responsibilities
//! - Deserialize the loosely-typed request body
//! - Enforce the gender allow-list (coerce, never reject)
//! - Build the record delegated to the data store
//!
//! # Design Decisions
//! - Every field is an optional `serde_json::Value`: unexpected types flow
//!   through to the store unchanged, as the original function behaved
//! - Absent fields are omitted from the insert record so store-side column
//!   defaults still apply, but an explicit null is forwarded as null
//! - An out-of-list gender is silently coerced to "other"; this is a data
//!   rule, not an error path

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Gender values accepted as-is; anything else is coerced.
pub const ALLOWED_GENDERS: [&str; 3] = ["male", "female", "other"];

/// Fallback gender for missing or out-of-list values.
pub const GENDER_FALLBACK: &str = "other";

/// Transient profile payload parsed from the request body.
///
/// No schema validation beyond the shape: missing fields deserialize to
/// `None`, and present fields keep whatever JSON type the caller sent —
/// including an explicit null, which is `Some(Value::Null)` and distinct
/// from an absent key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    #[serde(deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub first_name: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub last_name: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub mobile: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub dob: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub gender: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub avatar_url: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub bio: Option<Value>,
}

/// Mark a field present whatever its value.
///
/// The stock `Option` impl folds JSON null into `None`, which would make
/// `{"bio": null}` indistinguishable from a missing `bio` and drop the key
/// from the insert record. Here null stays `Some(Value::Null)` and only a
/// truly absent key (via `#[serde(default)]`) is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ProfileInput {
    /// Build the record delegated to the store.
    ///
    /// Absent fields are omitted; `gender` is always present and normalized.
    pub fn into_record(self) -> Value {
        let mut record = Map::new();
        let gender = normalize_gender(self.gender.as_ref());

        insert_present(&mut record, "id", self.id);
        insert_present(&mut record, "first_name", self.first_name);
        insert_present(&mut record, "last_name", self.last_name);
        insert_present(&mut record, "email", self.email);
        insert_present(&mut record, "mobile", self.mobile);
        insert_present(&mut record, "dob", self.dob);
        record.insert("gender".to_string(), Value::String(gender));
        insert_present(&mut record, "avatar_url", self.avatar_url);
        insert_present(&mut record, "bio", self.bio);

        Value::Object(record)
    }
}

fn insert_present(record: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        record.insert(key.to_string(), value);
    }
}

/// Apply the gender allow-list.
///
/// Only an exact string match against [`ALLOWED_GENDERS`] passes through;
/// missing values, null, non-strings and unknown strings all become
/// [`GENDER_FALLBACK`].
pub fn normalize_gender(gender: Option<&Value>) -> String {
    match gender {
        Some(Value::String(s)) if ALLOWED_GENDERS.contains(&s.as_str()) => s.clone(),
        _ => GENDER_FALLBACK.to_string(),
    }
}
