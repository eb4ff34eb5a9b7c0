use menupos::domain::model::{MenuGroupRequest, ProductRequest};
use menupos::{
    CatalogError, MemoryMenuGroupStore, MemoryProductStore, MenuGroupService, ProductService,
};
use rust_decimal::Decimal;

fn product_request(name: &str, price: Option<i64>) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        price: price.map(Decimal::from),
    }
}

#[tokio::test]
async fn product_create_rejects_missing_price() {
    let service = ProductService::new(MemoryProductStore::default());

    let result = service.create(product_request("Fried Chicken", None)).await;

    assert!(matches!(result, Err(CatalogError::InvalidPrice { .. })));
}

#[tokio::test]
async fn product_create_rejects_negative_price() {
    let service = ProductService::new(MemoryProductStore::default());

    let result = service
        .create(product_request("Fried Chicken", Some(-1)))
        .await;

    assert!(matches!(result, Err(CatalogError::InvalidPrice { .. })));
}

#[tokio::test]
async fn product_create_rejects_blank_name() {
    let service = ProductService::new(MemoryProductStore::default());

    let result = service.create(product_request("   ", Some(1000))).await;

    assert!(matches!(result, Err(CatalogError::ValidationError { .. })));
}

#[tokio::test]
async fn product_create_returns_saved_entity() {
    let service = ProductService::new(MemoryProductStore::default());

    let product = service
        .create(product_request("Fried Chicken", Some(16000)))
        .await
        .unwrap();

    assert_eq!(product.name, "Fried Chicken");
    assert_eq!(product.price.amount(), Decimal::from(16000));

    let all = service.list().await.unwrap();
    assert_eq!(all, vec![product]);
}

#[tokio::test]
async fn menu_group_create_rejects_blank_name() {
    let service = MenuGroupService::new(MemoryMenuGroupStore::default());

    let result = service
        .create(MenuGroupRequest {
            name: "".to_string(),
        })
        .await;

    assert!(matches!(result, Err(CatalogError::ValidationError { .. })));
}

#[tokio::test]
async fn menu_group_create_and_list() {
    let service = MenuGroupService::new(MemoryMenuGroupStore::default());

    let group = service
        .create(MenuGroupRequest {
            name: "Chicken Sets".to_string(),
        })
        .await
        .unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all, vec![group]);
}
