// Meme URL construction and template catalog

pub mod catalog;
pub mod encode;

pub use catalog::{MemeTemplate, TemplateCatalog};
pub use encode::{build_meme_url, encode_meme_text, MemeOptions, API_BASE, IMAGE_URL_PREFIX};
