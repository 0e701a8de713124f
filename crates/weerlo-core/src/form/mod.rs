//! Form sessions for the contact and newsletter forms
//!
//! A [`FormSchema`] fixes the set of fields once; a [`FormSession`] holds the
//! current values, hands submissions to a [`FormDelivery`] collaborator and
//! acknowledges them through a [`Notifier`].

mod schema;
mod session;

pub use schema::{FieldKind, FieldSpec, FormSchema, SelectOption};
pub use session::FormSession;

use crate::FormResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current values of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: BTreeMap<String, String>,
}

impl FormRecord {
    /// Record with every field of `schema` set to the empty string
    pub fn empty(schema: &FormSchema) -> Self {
        schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every field holds the empty string
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        self.values.get_mut(name)
    }

    fn clear_values(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Snapshot of a form handed to delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Id of the schema the record belongs to
    pub form: String,
    pub fields: FormRecord,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(form: impl Into<String>, fields: FormRecord) -> Self {
        Self {
            form: form.into(),
            fields,
            submitted_at: Utc::now(),
        }
    }

    /// Validate a submission received from a client against its declared
    /// schema. The timestamp is replaced with the time of receipt.
    pub fn verified(self) -> FormResult<Self> {
        let schema = FormSchema::by_id(&self.form)?;
        schema.check(&self.fields)?;
        Ok(Self {
            submitted_at: Utc::now(),
            ..self
        })
    }
}

/// Hands a submitted form to whatever transmits it.
///
/// Runs on the UI thread; implementations that talk to the network only
/// dispatch the request here and report transport failures separately.
pub trait FormDelivery {
    fn deliver(&self, submission: &Submission) -> FormResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for acknowledgments (toasts on the site)
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormError;

    #[test]
    fn test_record_serializes_as_flat_map() {
        let record: FormRecord = [("email", "jane@x.com"), ("name", "Jane")].into_iter().collect();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"email": "jane@x.com", "name": "Jane"}));

        let back: FormRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.get("name"), Some("Jane"));
    }

    #[test]
    fn test_empty_record_matches_schema() {
        let record = FormRecord::empty(&FormSchema::contact());
        assert_eq!(record.len(), 7);
        assert!(record.is_blank());
        assert_eq!(record.get("service_type"), Some(""));
        assert_eq!(record.get("fax"), None);
    }

    #[test]
    fn test_verified_submission_is_restamped() {
        let schema = FormSchema::contact();
        let mut submission = Submission::new("contact", FormRecord::empty(&schema));
        submission.submitted_at = "1999-01-01T00:00:00Z".parse().unwrap();

        let verified = submission.clone().verified().unwrap();
        assert_eq!(verified.fields, submission.fields);
        assert!(verified.submitted_at > submission.submitted_at);
    }

    #[test]
    fn test_verified_rejects_undeclared_forms_and_fields() {
        let fields: FormRecord = [("not_a_real_field", "x")].into_iter().collect();
        let result = Submission::new("not_a_form", fields.clone()).verified();
        assert_eq!(result, Err(FormError::UnknownForm("not_a_form".into())));

        let result = Submission::new("newsletter", fields).verified();
        assert!(matches!(result, Err(FormError::UnknownField { .. })));
    }
}
