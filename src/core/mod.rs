pub mod menu_group_service;
pub mod menu_service;
pub mod product_service;

pub use crate::domain::model::{
    Menu, MenuGroup, MenuGroupRequest, MenuProduct, MenuProductRequest, MenuRequest, Product,
    ProductRequest,
};
pub use crate::domain::ports::{MenuGroupStore, MenuProductStore, MenuStore, ProductStore};
pub use crate::utils::error::Result;
