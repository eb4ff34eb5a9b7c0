use clap::Parser;
use menupos::config::SeedConfig;
use menupos::domain::model::{MenuGroupRequest, MenuProductRequest, MenuRequest, ProductRequest};
use menupos::utils::{logger, validation::Validate};
use menupos::{
    CliConfig, MemoryMenuGroupStore, MemoryMenuProductStore, MemoryMenuStore, MemoryProductStore,
    MenuGroupService, MenuService, ProductService,
};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menupos catalog demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let seed = match SeedConfig::load(&config.seed_file) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Failed to load seed file {}: {}", config.seed_file, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed.validate() {
        tracing::error!("Seed validation failed: {}", e);
        std::process::exit(1);
    }

    let products = MemoryProductStore::default();
    let menu_groups = MemoryMenuGroupStore::default();
    let menus = MemoryMenuStore::default();
    let menu_products = MemoryMenuProductStore::default();

    let product_service = ProductService::new(products.clone());
    let menu_group_service = MenuGroupService::new(menu_groups.clone());
    let menu_service = MenuService::new(
        menu_groups.clone(),
        products.clone(),
        menus.clone(),
        menu_products.clone(),
    );

    let mut product_ids = HashMap::new();
    for row in &seed.products {
        let product = product_service
            .create(ProductRequest {
                name: row.name.clone(),
                price: Some(row.price),
            })
            .await?;
        product_ids.insert(product.name.clone(), product.id);
    }

    let mut group_ids = HashMap::new();
    for row in &seed.menu_groups {
        let group = menu_group_service
            .create(MenuGroupRequest {
                name: row.name.clone(),
            })
            .await?;
        group_ids.insert(group.name.clone(), group.id);
    }

    for row in &seed.menus {
        let request = MenuRequest {
            name: row.name.clone(),
            price: Some(row.price),
            menu_group_id: group_ids[row.menu_group.as_str()],
            menu_products: row
                .items
                .iter()
                .map(|item| MenuProductRequest {
                    product_id: product_ids[item.product.as_str()],
                    quantity: item.quantity,
                })
                .collect(),
        };

        match menu_service.create(request).await {
            Ok(menu) => tracing::info!("Created menu {} ({})", menu.name, menu.id),
            Err(e) => tracing::error!("Rejected menu {}: {}", row.name, e),
        }
    }

    let catalog = menu_service.list().await?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    Ok(())
}
