use crate::utils::error::{CatalogError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(ProductId);
define_id!(MenuGroupId);
define_id!(MenuId);
define_id!(MenuProductSeq);

/// Non-negative money amount with exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(CatalogError::InvalidPrice {
                entity: "price",
                reason: format!("amount cannot be negative, got {amount}"),
            });
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Line-item cost: unit price multiplied by quantity. `None` when the
    /// product overflows the decimal range.
    pub fn times(&self, quantity: u64) -> Option<Decimal> {
        self.0.checked_mul(Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub name: String,
}

/// Line item of a Menu. `menu_id` is back-filled once the owning menu has been
/// assigned its identity; line items never exist outside a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProduct {
    pub seq: MenuProductSeq,
    pub menu_id: MenuId,
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Aggregate root. Line items are created, validated and persisted together
/// with the menu, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub price: Price,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProduct>,
}

// Unsaved rows handed to the stores, which assign identity on save.

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
}

#[derive(Debug, Clone)]
pub struct NewMenuGroup {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: String,
    pub price: Price,
    pub menu_group_id: MenuGroupId,
}

#[derive(Debug, Clone)]
pub struct NewMenuProduct {
    pub menu_id: MenuId,
    pub product_id: ProductId,
    pub quantity: u64,
}

// Creation requests as they arrive from the service boundary. Prices are
// optional here; the services decide whether a missing price is an error.

#[derive(Debug, Clone, Deserialize)]
pub struct MenuRequest {
    pub name: String,
    pub price: Option<Decimal>,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProductRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuProductRequest {
    pub product_id: ProductId,
    pub quantity: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuGroupRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_rejects_negative_amount() {
        assert!(Price::new(Decimal::from(-1)).is_err());
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from(1000)).is_ok());
    }

    #[test]
    fn price_times_is_exact() {
        let price = Price::new(Decimal::new(1050, 2)).unwrap(); // 10.50
        assert_eq!(price.times(3), Some(Decimal::new(3150, 2))); // 31.50
    }

    #[test]
    fn price_times_reports_overflow() {
        let price = Price::new(Decimal::MAX).unwrap();
        assert_eq!(price.times(2), None);
    }
}
