pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::memory::{
    MemoryMenuGroupStore, MemoryMenuProductStore, MemoryMenuStore, MemoryProductStore,
};
pub use crate::core::{
    menu_group_service::MenuGroupService, menu_service::MenuService,
    product_service::ProductService,
};
pub use crate::utils::error::{CatalogError, Result};
