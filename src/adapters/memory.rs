//! In-memory stores backed by `RwLock`-guarded arenas. Identity assignment is
//! sequential starting at 1, so id 0 never resolves. Writes are serialized per
//! store; the stores themselves never fail.

use crate::domain::model::{
    Menu, MenuGroup, MenuGroupId, MenuId, MenuProduct, MenuProductSeq, NewMenu, NewMenuGroup,
    NewMenuProduct, NewProduct, Product, ProductId,
};
use crate::domain::ports::{MenuGroupStore, MenuProductStore, MenuStore, ProductStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Arena<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Arena<T> {
    fn assign_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    arena: Arc<RwLock<Arena<Product>>>,
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn save(&self, product: NewProduct) -> Result<Product> {
        let mut arena = self.arena.write().await;
        let saved = Product {
            id: ProductId(arena.assign_id()),
            name: product.name,
            price: product.price,
        };
        arena.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.arena.read().await.rows.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMenuGroupStore {
    arena: Arc<RwLock<Arena<MenuGroup>>>,
}

#[async_trait]
impl MenuGroupStore for MemoryMenuGroupStore {
    async fn save(&self, menu_group: NewMenuGroup) -> Result<MenuGroup> {
        let mut arena = self.arena.write().await;
        let saved = MenuGroup {
            id: MenuGroupId(arena.assign_id()),
            name: menu_group.name,
        };
        arena.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: MenuGroupId) -> Result<Option<MenuGroup>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<MenuGroup>> {
        Ok(self.arena.read().await.rows.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMenuStore {
    arena: Arc<RwLock<Arena<Menu>>>,
}

#[async_trait]
impl MenuStore for MemoryMenuStore {
    async fn save(&self, menu: NewMenu) -> Result<Menu> {
        let mut arena = self.arena.write().await;
        let saved = Menu {
            id: MenuId(arena.assign_id()),
            name: menu.name,
            price: menu.price,
            menu_group_id: menu.menu_group_id,
            menu_products: Vec::new(),
        };
        arena.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: MenuId) -> Result<Option<Menu>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Menu>> {
        Ok(self.arena.read().await.rows.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMenuProductStore {
    arena: Arc<RwLock<Arena<MenuProduct>>>,
}

#[async_trait]
impl MenuProductStore for MemoryMenuProductStore {
    async fn save(&self, menu_product: NewMenuProduct) -> Result<MenuProduct> {
        let mut arena = self.arena.write().await;
        let saved = MenuProduct {
            seq: MenuProductSeq(arena.assign_id()),
            menu_id: menu_product.menu_id,
            product_id: menu_product.product_id,
            quantity: menu_product.quantity,
        };
        arena.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_seq(&self, seq: MenuProductSeq) -> Result<Option<MenuProduct>> {
        let arena = self.arena.read().await;
        Ok(arena.rows.iter().find(|mp| mp.seq == seq).cloned())
    }

    async fn find_all(&self) -> Result<Vec<MenuProduct>> {
        Ok(self.arena.read().await.rows.clone())
    }

    async fn find_all_by_menu_id(&self, menu_id: MenuId) -> Result<Vec<MenuProduct>> {
        let arena = self.arena.read().await;
        Ok(arena
            .rows
            .iter()
            .filter(|mp| mp.menu_id == menu_id)
            .cloned()
            .collect())
    }
}
