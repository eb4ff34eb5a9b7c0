use crate::domain::model::{
    Menu, MenuGroup, MenuGroupId, MenuId, MenuProduct, MenuProductSeq, NewMenu, NewMenuGroup,
    NewMenuProduct, NewProduct, Product, ProductId,
};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn save(&self, product: NewProduct) -> Result<Product>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;
    async fn find_all(&self) -> Result<Vec<Product>>;
}

#[async_trait]
pub trait MenuGroupStore: Send + Sync {
    async fn save(&self, menu_group: NewMenuGroup) -> Result<MenuGroup>;
    async fn find_by_id(&self, id: MenuGroupId) -> Result<Option<MenuGroup>>;
    async fn find_all(&self) -> Result<Vec<MenuGroup>>;
}

/// Persists the menu row only; line items go through [`MenuProductStore`].
/// The menu returned by `save` carries its assigned identity and an empty
/// line-item list.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn save(&self, menu: NewMenu) -> Result<Menu>;
    async fn find_by_id(&self, id: MenuId) -> Result<Option<Menu>>;
    async fn find_all(&self) -> Result<Vec<Menu>>;
}

#[async_trait]
pub trait MenuProductStore: Send + Sync {
    async fn save(&self, menu_product: NewMenuProduct) -> Result<MenuProduct>;
    async fn find_by_seq(&self, seq: MenuProductSeq) -> Result<Option<MenuProduct>>;
    async fn find_all(&self) -> Result<Vec<MenuProduct>>;
    async fn find_all_by_menu_id(&self, menu_id: MenuId) -> Result<Vec<MenuProduct>>;
}
