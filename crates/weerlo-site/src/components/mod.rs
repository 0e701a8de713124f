//! Site components

mod button;
mod cards;
mod footer;
mod form;
mod logo;
mod nav;

pub use button::{button_class, ButtonSize, ButtonVariant, LinkButton};
pub use cards::*;
pub use footer::SiteFooter;
pub use form::{use_form, FormFields, FormHandle, NewsletterForm};
pub use logo::{provide_image_processor, ProcessedLogo, LOGO_PATH};
pub use nav::{is_active, SiteNav, NAV_ITEMS};
