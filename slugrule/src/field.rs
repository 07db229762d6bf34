//! Form field rules
//!
//! A form-validation framework calls a [`FieldRule`] with every value
//! submitted for a field and a map of custom messages. [`IsSlugField`] is the
//! rule for fields whose value becomes a slug: it accepts anything that still
//! holds a letter or digit after normalization.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::grammar::is_slug;
use crate::normalize::get_ascii_slug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field must contain at least one letter or number.")]
    NoSlugContent,
    #[error("{0}")]
    Custom(String),
}

/// A failed rule: the error to show plus optional data for the framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub error: FieldError,
    pub data: Option<Vec<String>>,
}

impl From<FieldError> for Rejection {
    fn from(error: FieldError) -> Self {
        Self { error, data: None }
    }
}

/// The callback contract of the form-validation framework.
pub trait FieldRule {
    fn validate(&self, fields: &[String], messages: &HashMap<String, String>) -> Result<(), Rejection>;
}

impl<F> FieldRule for F
where
    F: Fn(&[String], &HashMap<String, String>) -> Result<(), Rejection>,
{
    fn validate(&self, fields: &[String], messages: &HashMap<String, String>) -> Result<(), Rejection> {
        self(fields, messages)
    }
}

/// Accepts a field whose first value normalizes to a non-empty slug.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsSlugField;

pub fn is_slug_field() -> IsSlugField {
    IsSlugField
}

impl FieldRule for IsSlugField {
    /// Only `fields[0]` is consulted; a missing value counts as empty. The
    /// message map is ignored, the error text is fixed.
    fn validate(&self, fields: &[String], _messages: &HashMap<String, String>) -> Result<(), Rejection> {
        let field = fields.first().map(String::as_str).unwrap_or("");
        if is_slug(&get_ascii_slug(field)) {
            Ok(())
        } else {
            debug!("rejecting {:?}: no letter or number after normalization", field);
            Err(FieldError::NoSlugContent.into())
        }
    }
}
