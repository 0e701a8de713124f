//! Form session state machine

use super::{FormDelivery, FormRecord, FormSchema, Notice, Notifier, Submission};
use crate::{FormError, FormResult};

/// In-memory values of one rendered form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    schema: FormSchema,
    record: FormRecord,
}

impl FormSession {
    pub fn new(schema: FormSchema) -> Self {
        let record = FormRecord::empty(&schema);
        Self { schema, record }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.record.get(name)
    }

    /// Overwrite one field. Undeclared names are a page-definition bug.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        match self.record.slot_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::UnknownField {
                form: self.schema.id().to_string(),
                field: name.to_string(),
            }),
        }
    }

    /// Hand the current record to `delivery`, reset, and acknowledge.
    ///
    /// The record is cleared whatever the delivery outcome. A failed hand-off
    /// is reported to the user as an error notice and returned.
    pub fn submit(
        &mut self,
        delivery: &dyn FormDelivery,
        notifier: &dyn Notifier,
    ) -> FormResult<Submission> {
        let submission = Submission::new(self.schema.id(), self.record.clone());
        let outcome = delivery.deliver(&submission);
        self.reset();

        match outcome {
            Ok(()) => {
                tracing::debug!(form = %submission.form, "Form handed to delivery");
                notifier.notify(self.schema.acknowledgment().clone());
                Ok(submission)
            }
            Err(e) => {
                tracing::warn!(form = %submission.form, error = %e, "Form delivery failed");
                notifier.notify(Notice::error(
                    "Message Not Sent",
                    "Something went wrong sending your message. Please call us or try again.",
                ));
                Err(e)
            }
        }
    }

    /// Clear every field without submitting
    pub fn reset(&mut self) {
        self.record.clear_values();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldSpec, NoticeLevel};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelivery {
        received: RefCell<Vec<Submission>>,
        fail: bool,
    }

    impl FormDelivery for RecordingDelivery {
        fn deliver(&self, submission: &Submission) -> FormResult<()> {
            self.received.borrow_mut().push(submission.clone());
            if self.fail {
                Err(FormError::Delivery("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<Notice>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn simple_session() -> FormSession {
        let schema = FormSchema::new(
            "enquiry",
            vec![
                FieldSpec::text("name", "Name"),
                FieldSpec::email("email", "Email"),
                FieldSpec::textarea("message", "Message", 4),
            ],
        )
        .unwrap();
        FormSession::new(schema)
    }

    #[test]
    fn test_new_session_is_blank() {
        let session = FormSession::new(FormSchema::contact());
        assert!(session.record().is_blank());
        assert_eq!(session.record().len(), session.schema().fields().len());
    }

    #[test]
    fn test_set_field_is_isolated() {
        let mut session = simple_session();
        session.set_field("name", "Jane").unwrap();
        session.set_field("email", "jane@x.com").unwrap();

        assert_eq!(session.field("name"), Some("Jane"));
        assert_eq!(session.field("email"), Some("jane@x.com"));
        assert_eq!(session.field("message"), Some(""));

        session.set_field("email", "j@y.org").unwrap();
        assert_eq!(session.field("name"), Some("Jane"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut session = simple_session();
        session.set_field("name", "Jane").unwrap();
        let before = session.record().clone();

        let err = session.set_field("not_a_real_field", "x").unwrap_err();

        assert_eq!(
            err,
            FormError::UnknownField {
                form: "enquiry".into(),
                field: "not_a_real_field".into(),
            }
        );
        assert_eq!(session.record(), &before);
        assert_eq!(session.field("not_a_real_field"), None);
    }

    #[test]
    fn test_submit_delivers_snapshot_and_resets() {
        let mut session = simple_session();
        session.set_field("name", "Jane").unwrap();
        session.set_field("email", "jane@x.com").unwrap();
        session.set_field("message", "hello").unwrap();

        let delivery = RecordingDelivery::default();
        let notifier = RecordingNotifier::default();
        let submission = session.submit(&delivery, &notifier).unwrap();

        let expected: FormRecord = [("name", "Jane"), ("email", "jane@x.com"), ("message", "hello")]
            .into_iter()
            .collect();
        let received = delivery.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].fields, expected);
        assert_eq!(received[0].form, "enquiry");
        assert_eq!(submission.fields, expected);

        for name in ["name", "email", "message"] {
            assert_eq!(session.field(name), Some(""));
        }

        let notices = notifier.0.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_failed_delivery_still_resets() {
        let mut session = FormSession::new(FormSchema::contact());
        session.set_field("message", "Need 40 units for a haul truck fleet").unwrap();
        session.set_field("service_type", "supply").unwrap();

        let delivery = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let result = session.submit(&delivery, &notifier);

        assert!(matches!(result, Err(FormError::Delivery(_))));
        assert!(session.record().is_blank());
        assert_eq!(notifier.0.borrow()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut session = FormSession::new(FormSchema::contact());
        for field in session.schema().fields().to_vec() {
            session.set_field(&field.name, format!("{} value", field.name)).unwrap();
        }
        assert!(!session.record().is_blank());

        session.reset();

        assert!(session.record().is_blank());
        assert_eq!(session.record().len(), 7);
    }
}
