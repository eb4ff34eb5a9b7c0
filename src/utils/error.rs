use crate::domain::model::{MenuGroupId, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid {entity} price: {reason}")]
    InvalidPrice {
        entity: &'static str,
        reason: String,
    },

    #[error("Menu group {0} does not exist")]
    MenuGroupNotFound(MenuGroupId),

    #[error("Product {0} does not exist")]
    ProductNotFound(ProductId),

    #[error("Menu price {price} exceeds component cost {component_cost}")]
    PriceExceedsComponentCost {
        price: Decimal,
        component_cost: Decimal,
    },

    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: String, reason: String },

    // Store-layer failures pass through unchanged; the enclosing transactional
    // boundary owns rollback.
    #[error("Store operation failed: {message}")]
    StoreError { message: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
