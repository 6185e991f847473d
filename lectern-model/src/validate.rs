use lectern_types::{BackendError, BackendResult};
use regex_lite::Regex;
use std::sync::LazyLock;

/// Checks applied to caller-supplied payloads before they reach a store.
///
/// The emulated backend accepts anything; these checks stand in for the
/// constraints the hosted schema enforces.
pub trait Validate {
    fn validate(&self) -> BackendResult<()>;
}

pub(crate) fn require_text(field: &str, value: &str) -> BackendResult<()> {
    if value.trim().is_empty() {
        return Err(BackendError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_price(value: Option<f64>) -> BackendResult<()> {
    match value {
        Some(price) if !price.is_finite() || price < 0.0 => Err(BackendError::validation(
            format!("price must be a non-negative number, got {price}"),
        )),
        _ => Ok(()),
    }
}

/// Email shape accepted by the contact form, case-insensitive.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});

/// True when `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
