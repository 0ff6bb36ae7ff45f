pub mod new;
pub mod questions;
pub mod templates;
