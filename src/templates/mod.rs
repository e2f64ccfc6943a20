// Venue template registry

pub mod builtin;

pub use builtin::{get_template, list_templates};

use crate::models::VenueTemplate;
use thiserror::Error;

/// Template resolution failure at the API boundary
///
/// Internal lookups stay total; this exists for callers that must report
/// the miss instead of falling back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template not found: '{0}'")]
    UnknownId(String),
}

/// Resolve a template id or report the miss
pub fn require_template(id: &str) -> Result<&'static VenueTemplate, TemplateError> {
    get_template(id).ok_or_else(|| TemplateError::UnknownId(id.to_string()))
}
