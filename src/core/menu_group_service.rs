use crate::core::MenuGroupStore;
use crate::domain::model::{MenuGroup, MenuGroupRequest, NewMenuGroup};
use crate::utils::error::Result;
use crate::utils::validation;

pub struct MenuGroupService<G> {
    menu_groups: G,
}

impl<G: MenuGroupStore> MenuGroupService<G> {
    pub fn new(menu_groups: G) -> Self {
        Self { menu_groups }
    }

    pub async fn create(&self, request: MenuGroupRequest) -> Result<MenuGroup> {
        validation::validate_non_empty_string("menu group name", &request.name)?;

        let menu_group = self
            .menu_groups
            .save(NewMenuGroup { name: request.name })
            .await?;

        tracing::info!(menu_group_id = %menu_group.id, name = %menu_group.name, "menu group created");
        Ok(menu_group)
    }

    pub async fn list(&self) -> Result<Vec<MenuGroup>> {
        self.menu_groups.find_all().await
    }
}
