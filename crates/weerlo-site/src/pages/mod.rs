//! Site pages

mod about;
mod contact;
mod esg;
mod home;
mod news;
mod not_found;
mod technology;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use esg::EsgPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;
pub use technology::TechnologyPage;

pub const BROCHURE_PATH: &str = "/assets/weerlo-product-brochure.pdf";
pub const BROCHURE_NAME: &str = "Weerlo-RFID-Easylube-Brochure.pdf";
