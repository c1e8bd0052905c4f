//! CEP (postal code) validation.

use std::fmt;

use thiserror::Error;

/// Rejection for anything that is not exactly eight ASCII digits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid zipcode")]
pub struct InvalidCep;

/// A validated 8-digit postal code.
///
/// Only constructible through [`Cep::parse`], so holding a `Cep` guarantees
/// the code matches `^[0-9]{8}$` and is safe to splice into a provider URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    /// Validate a candidate code. No trimming: signs, whitespace and
    /// separators are all rejections, not noise to clean up.
    pub fn parse(raw: &str) -> Result<Cep, InvalidCep> {
        if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Cep(raw.to_string()))
        } else {
            Err(InvalidCep)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
