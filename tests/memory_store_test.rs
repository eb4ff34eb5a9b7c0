use menupos::domain::model::{
    MenuId, MenuProductSeq, NewMenuProduct, NewProduct, Price, ProductId,
};
use menupos::domain::ports::{MenuProductStore, ProductStore};
use menupos::{MemoryMenuProductStore, MemoryProductStore};
use rust_decimal::Decimal;

fn line_item(menu_id: u64, product_id: u64, quantity: u64) -> NewMenuProduct {
    NewMenuProduct {
        menu_id: MenuId(menu_id),
        product_id: ProductId(product_id),
        quantity,
    }
}

#[tokio::test]
async fn save_assigns_sequential_identity() {
    let store = MemoryProductStore::default();

    let first = store
        .save(NewProduct {
            name: "Fried Chicken".to_string(),
            price: Price::new(Decimal::from(16000)).unwrap(),
        })
        .await
        .unwrap();
    let second = store
        .save(NewProduct {
            name: "Cola".to_string(),
            price: Price::new(Decimal::from(2000)).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(first.id, ProductId(1));
    assert_eq!(second.id, ProductId(2));
}

#[tokio::test]
async fn saved_row_is_findable_by_id() {
    let store = MemoryMenuProductStore::default();

    let saved = store.save(line_item(1, 1, 1)).await.unwrap();

    let found = store.find_by_seq(saved.seq).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn find_by_seq_returns_none_for_unknown_id() {
    let store = MemoryMenuProductStore::default();

    let found = store.find_by_seq(MenuProductSeq(0)).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn find_all_returns_every_saved_row() {
    let store = MemoryMenuProductStore::default();
    let before = store.find_all().await.unwrap().len();

    store.save(line_item(1, 1, 1)).await.unwrap();

    let after = store.find_all().await.unwrap();
    assert_eq!(after.len(), before + 1);
}

#[tokio::test]
async fn find_all_by_menu_id_filters_other_menus() {
    let store = MemoryMenuProductStore::default();

    let mine = store.save(line_item(1, 1, 2)).await.unwrap();
    store.save(line_item(2, 1, 1)).await.unwrap();

    let found = store.find_all_by_menu_id(MenuId(1)).await.unwrap();
    assert_eq!(found, vec![mine]);
}
