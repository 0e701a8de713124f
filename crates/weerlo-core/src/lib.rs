//! Weerlo Services Site Core
//!
//! Platform-independent behaviour shared by every page of the site: the
//! scroll-triggered reveal controller, the form session behind the contact
//! and newsletter forms, page-local scroll state, and the image processing
//! collaborator used by the logo.

pub mod form;
pub mod image;
pub mod reveal;
pub mod scroll;

use thiserror::Error;

pub use form::{
    FieldKind, FieldSpec, FormDelivery, FormRecord, FormSchema, FormSession, Notice, NoticeLevel,
    Notifier, Submission,
};
pub use image::{ImageProcessor, PassthroughProcessor, ProcessedImage};
pub use reveal::{IntersectionEntry, RevealController, RevealState, ViewportObserver};
pub use scroll::ScrollState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field '{field}' for form '{form}'")]
    UnknownField { form: String, field: String },

    #[error("Missing field '{field}' for form '{form}'")]
    MissingField { form: String, field: String },

    #[error("Unknown form '{0}'")]
    UnknownForm(String),

    #[error("Duplicate field '{field}' in form '{form}'")]
    DuplicateField { form: String, field: String },

    #[error("Delivery error: {0}")]
    Delivery(String),
}

pub type FormResult<T> = Result<T, FormError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Unsupported image source: {0}")]
    Unsupported(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type ImageResult<T> = Result<T, ImageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormError::UnknownField {
            form: "contact".into(),
            field: "fax".into(),
        };
        assert_eq!(err.to_string(), "Unknown field 'fax' for form 'contact'");

        let err = ImageError::Processing("model unavailable".into());
        assert_eq!(err.to_string(), "Processing error: model unavailable");
    }
}
