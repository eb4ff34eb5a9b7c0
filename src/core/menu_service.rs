use crate::core::{MenuGroupStore, MenuProductStore, MenuStore, ProductStore};
use crate::domain::model::{Menu, MenuRequest, NewMenu, NewMenuProduct, Product};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation;
use rust_decimal::Decimal;

fn component_cost_overflow() -> CatalogError {
    CatalogError::InvalidPrice {
        entity: "menu",
        reason: "component cost overflows the decimal range".to_string(),
    }
}

/// Menu-creation consistency engine. Validates a creation request against the
/// product and menu-group stores, then persists the aggregate: menu row first,
/// line items after, each carrying the freshly assigned menu id.
pub struct MenuService<G, P, M, L> {
    menu_groups: G,
    products: P,
    menus: M,
    menu_products: L,
}

impl<G, P, M, L> MenuService<G, P, M, L>
where
    G: MenuGroupStore,
    P: ProductStore,
    M: MenuStore,
    L: MenuProductStore,
{
    pub fn new(menu_groups: G, products: P, menus: M, menu_products: L) -> Self {
        Self {
            menu_groups,
            products,
            menus,
            menu_products,
        }
    }

    /// Creates a menu or fails without persisting anything. Validation is
    /// fail-fast in a fixed order: price, menu group, products (request
    /// order), component-cost cap. No writes happen until every check passed.
    pub async fn create(&self, request: MenuRequest) -> Result<Menu> {
        let price = validation::validate_price("menu", request.price)?;

        let menu_group = self
            .menu_groups
            .find_by_id(request.menu_group_id)
            .await?
            .ok_or(CatalogError::MenuGroupNotFound(request.menu_group_id))?;

        let mut resolved: Vec<Product> = Vec::with_capacity(request.menu_products.len());
        for item in &request.menu_products {
            let product = self
                .products
                .find_by_id(item.product_id)
                .await?
                .ok_or(CatalogError::ProductNotFound(item.product_id))?;
            resolved.push(product);
        }

        let mut component_cost = Decimal::ZERO;
        for (item, product) in request.menu_products.iter().zip(&resolved) {
            let line_cost = product
                .price
                .times(item.quantity)
                .ok_or_else(component_cost_overflow)?;
            component_cost = component_cost
                .checked_add(line_cost)
                .ok_or_else(component_cost_overflow)?;
        }

        // Promotional underpricing is allowed; overpricing relative to the
        // component cost never is. Strictly greater-than, not greater-or-equal.
        if price.amount() > component_cost {
            return Err(CatalogError::PriceExceedsComponentCost {
                price: price.amount(),
                component_cost,
            });
        }

        tracing::debug!(
            menu = %request.name,
            menu_group = %menu_group.name,
            %component_cost,
            "menu request validated"
        );

        let mut menu = self
            .menus
            .save(NewMenu {
                name: request.name,
                price,
                menu_group_id: menu_group.id,
            })
            .await?;

        for item in &request.menu_products {
            let line = self
                .menu_products
                .save(NewMenuProduct {
                    menu_id: menu.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .await?;
            menu.menu_products.push(line);
        }

        tracing::info!(menu_id = %menu.id, lines = menu.menu_products.len(), "menu created");
        Ok(menu)
    }

    /// Returns every persisted menu with its line items attached.
    pub async fn list(&self) -> Result<Vec<Menu>> {
        let mut menus = self.menus.find_all().await?;
        for menu in &mut menus {
            menu.menu_products = self.menu_products.find_all_by_menu_id(menu.id).await?;
        }
        Ok(menus)
    }
}
