//! Planning core: catalog, normalization, parsing, templates, validation.

pub mod catalog;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod planner;
pub mod state;
pub mod templates;
pub mod types;
pub mod validator;
