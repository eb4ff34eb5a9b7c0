use crate::domain::model::Price;
use crate::utils::error::{CatalogError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A price must be present and non-negative. `entity` names the owner in the
/// error message ("menu", "product").
pub fn validate_price(entity: &'static str, amount: Option<Decimal>) -> Result<Price> {
    let amount = amount.ok_or_else(|| CatalogError::InvalidPrice {
        entity,
        reason: "price is required".to_string(),
    })?;

    if amount < Decimal::ZERO {
        return Err(CatalogError::InvalidPrice {
            entity,
            reason: format!("amount cannot be negative, got {amount}"),
        });
    }

    Price::new(amount)
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::ValidationError {
            field: field.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
