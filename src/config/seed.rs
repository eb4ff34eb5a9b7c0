use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Seed catalog loaded by the demo binary: base rows plus menu definitions
/// referencing products and menu groups by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub products: Vec<ProductSeed>,
    pub menu_groups: Vec<MenuGroupSeed>,
    #[serde(default)]
    pub menus: Vec<MenuSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupSeed {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSeed {
    pub name: String,
    pub price: Decimal,
    pub menu_group: String,
    pub items: Vec<MenuItemSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemSeed {
    pub product: String,
    pub quantity: u64,
}

impl SeedConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        let mut product_names: HashSet<&str> = HashSet::new();
        for product in &self.products {
            validate_non_empty_string("products.name", &product.name)?;
            product_names.insert(product.name.as_str());
        }

        let mut group_names: HashSet<&str> = HashSet::new();
        for group in &self.menu_groups {
            validate_non_empty_string("menu_groups.name", &group.name)?;
            group_names.insert(group.name.as_str());
        }

        for menu in &self.menus {
            validate_non_empty_string("menus.name", &menu.name)?;

            if !group_names.contains(menu.menu_group.as_str()) {
                return Err(CatalogError::ValidationError {
                    field: "menus.menu_group".to_string(),
                    reason: format!("unknown menu group: {}", menu.menu_group),
                });
            }

            for item in &menu.items {
                if !product_names.contains(item.product.as_str()) {
                    return Err(CatalogError::ValidationError {
                        field: "menus.items.product".to_string(),
                        reason: format!("unknown product: {}", item.product),
                    });
                }
            }
        }

        Ok(())
    }
}
