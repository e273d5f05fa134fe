// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod patterns;
pub mod text;
pub mod validation;

pub use text::{
    emoji_image_url, identifier, sanitize_filename, slugify, strip_markup, truncate_chars,
};
pub use validation::Validator;
