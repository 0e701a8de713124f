//! Form declarations

use super::{FormRecord, Notice};
use crate::{FormError, FormResult};
use serde::{Deserialize, Serialize};

/// Input control used to render a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea { rows: u32 },
    Select { options: Vec<SelectOption> },
}

impl FieldKind {
    /// Value of the HTML `type` attribute for `<input>` based kinds
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::TextArea { .. } | FieldKind::Select { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    /// Rendered as the HTML `required` attribute; not checked by the session
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: String::new(),
            kind,
            required: false,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>, rows: u32) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows })
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Fixed set of fields belonging to one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    id: String,
    fields: Vec<FieldSpec>,
    /// Shown to the user after a successful submission
    acknowledgment: Notice,
}

impl FormSchema {
    /// Declare a form. Field names must be unique.
    pub fn new(id: impl Into<String>, fields: Vec<FieldSpec>) -> FormResult<Self> {
        let id = id.into();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::DuplicateField {
                    form: id,
                    field: field.name.clone(),
                });
            }
        }

        Ok(Self {
            id,
            fields,
            acknowledgment: Notice::success("Thank you", "Your submission has been received."),
        })
    }

    /// Replace the success acknowledgment
    pub fn acknowledged_with(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.acknowledgment = Notice::success(title, message);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn acknowledgment(&self) -> &Notice {
        &self.acknowledgment
    }

    /// Look up one of the site's declared forms
    pub fn by_id(id: &str) -> FormResult<Self> {
        match id {
            "contact" => Ok(Self::contact()),
            "newsletter" => Ok(Self::newsletter()),
            other => Err(FormError::UnknownForm(other.to_string())),
        }
    }

    /// Check that `record` holds exactly the declared fields
    pub fn check(&self, record: &FormRecord) -> FormResult<()> {
        if let Some((name, _)) = record.iter().find(|(name, _)| !self.contains(name)) {
            return Err(FormError::UnknownField {
                form: self.id.clone(),
                field: name.to_string(),
            });
        }
        if let Some(field) = self.fields.iter().find(|f| record.get(&f.name).is_none()) {
            return Err(FormError::MissingField {
                form: self.id.clone(),
                field: field.name.clone(),
            });
        }
        Ok(())
    }

    /// Enquiry form on the contact page
    pub fn contact() -> Self {
        let service_types = vec![
            SelectOption::new("", "Select a service"),
            SelectOption::new("supply", "Equipment Supply"),
            SelectOption::new("installation", "Installation Services"),
            SelectOption::new("maintenance", "Maintenance Programs"),
            SelectOption::new("consultation", "Technical Consultation"),
            SelectOption::new("training", "Training Programs"),
            SelectOption::new("other", "Other"),
        ];

        Self {
            id: "contact".into(),
            acknowledgment: Notice::success(
                "Message Sent Successfully",
                "Thank you for contacting Weerlo Services. We'll get back to you within 24 hours.",
            ),
            fields: vec![
                FieldSpec::text("name", "Full Name").placeholder("Your full name").required(),
                FieldSpec::email("email", "Email Address")
                    .placeholder("your.email@company.com")
                    .required(),
                FieldSpec::tel("phone", "Phone Number").placeholder("+61 4XX XXX XXX"),
                FieldSpec::text("company", "Company Name").placeholder("Your company"),
                FieldSpec::text("subject", "Subject").placeholder("What can we help with?"),
                FieldSpec::select("service_type", "Service Type", service_types),
                FieldSpec::textarea("message", "Message", 6)
                    .placeholder(
                        "Tell us about your lubrication requirements, equipment types, \
                         and any specific challenges you're facing...",
                    )
                    .required(),
            ],
        }
    }

    /// Newsletter sign-up in the footer and on the news page
    pub fn newsletter() -> Self {
        Self {
            id: "newsletter".into(),
            acknowledgment: Notice::success(
                "Subscribed",
                "Watch your inbox for Weerlo news and project updates.",
            ),
            fields: vec![FieldSpec::email("email", "Email Address")
                .placeholder("Enter your email")
                .required()],
        }
    }
}
