//! Helpers shared by the registry and the API layer.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Syntax checks for submitted URLs
//! - [`db_error`] - Classification of store errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
