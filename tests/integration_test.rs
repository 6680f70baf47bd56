use hot_coffee::catalog::CatalogError;
use hot_coffee::clients::EntityClient;
use hot_coffee::inventory_actor::InventoryError;
use hot_coffee::lifecycle::CafeSystem;
use hot_coffee::menu_actor::MenuError;
use hot_coffee::model::{
    Demand, InventoryItem, InventoryUpdate, MenuItem, MenuItemIngredient, MenuUpdate,
    NewMenuItem, NewOrder, OrderItem, OrderStatus, OrderUpdate,
};
use hot_coffee::order_actor::{OrderError, FILE_NAME as ORDERS_FILE};
use hot_coffee::inventory_actor::FILE_NAME as INVENTORY_FILE;
use std::path::Path;

fn recipe(entries: &[(&str, f64)]) -> Vec<MenuItemIngredient> {
    entries
        .iter()
        .map(|(id, quantity)| MenuItemIngredient {
            ingredient_id: (*id).into(),
            quantity: *quantity,
        })
        .collect()
}

fn product(id: &str, name: &str, price: f64, ingredients: &[(&str, f64)]) -> NewMenuItem {
    NewMenuItem::from(MenuItem {
        product_id: id.into(),
        name: name.to_string(),
        description: String::new(),
        price,
        ingredients: recipe(ingredients),
    })
}

/// Coffee 500 g, milk 2000 ml. A latte takes 18 g of coffee, a flat white 18 g of coffee
/// and 150 ml of milk.
async fn seed(system: &CafeSystem) {
    for item in [
        InventoryItem::new("coffee", "Espresso beans", 500.0, "g"),
        InventoryItem::new("milk", "Whole milk", 2000.0, "ml"),
    ] {
        system.inventory_client.create_item(item.into()).await.unwrap();
    }
    system
        .menu_client
        .create_item(product("latte", "Caffe Latte", 3.5, &[("coffee", 18.0)]))
        .await
        .unwrap();
    system
        .menu_client
        .create_item(product(
            "flat_white",
            "Flat White",
            4.0,
            &[("coffee", 18.0), ("milk", 150.0)],
        ))
        .await
        .unwrap();
}

async fn stock(system: &CafeSystem, id: &str) -> f64 {
    system
        .inventory_client
        .get(id.into())
        .await
        .unwrap()
        .unwrap()
        .quantity
}

fn lattes(quantity: u32) -> NewOrder {
    NewOrder::new("Ada", vec![OrderItem::new("latte", quantity)])
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_order_deducts_recipe_demand() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let placed = system
        .order_client
        .create_order(NewOrder::new(
            "Ada",
            vec![OrderItem::new("latte", 2), OrderItem::new("flat_white", 1)],
        ))
        .await
        .unwrap();

    assert_eq!(placed.order_id.0, "001");
    assert_eq!(stock(&system, "coffee").await, 500.0 - 3.0 * 18.0);
    assert_eq!(stock(&system, "milk").await, 2000.0 - 150.0);

    let order = system.order_client.get(placed.order_id.clone()).await.unwrap().unwrap();
    assert_eq!(order, placed);
    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(order.customer_name, "Ada");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_latte_for_two_leaves_464_grams() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    system.order_client.create_order(lattes(2)).await.unwrap();

    assert_eq!(stock(&system, "coffee").await, 464.0);
    let stored: Vec<InventoryItem> =
        serde_json::from_str(&read(&dir.path().join(INVENTORY_FILE))).unwrap();
    assert_eq!(stored[0].quantity, 464.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_overdraw_is_rejected_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let err = system.order_client.create_order(lattes(30)).await.unwrap_err();

    assert_eq!(
        err,
        OrderError::Inventory(InventoryError::InsufficientStock {
            ingredient: "coffee".into(),
            demanded: 540.0,
            available: 500.0,
        })
    );
    assert_eq!(stock(&system, "coffee").await, 500.0);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let order = NewOrder::new(
        "Ada",
        vec![OrderItem::new("latte", 1), OrderItem::new("mocha", 1)],
    );
    let err = system.order_client.create_order(order).await.unwrap_err();

    assert_eq!(err, OrderError::UnknownProduct("mocha".into()));
    assert_eq!(stock(&system, "coffee").await, 500.0);
    assert!(system.order_client.list().await.unwrap().is_empty());
    assert_eq!(read(&dir.path().join(ORDERS_FILE)), "[]");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_total_sales_counts_closed_orders_only() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let reports = system.reports();

    let closed = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    system.order_client.close_order(closed).await.unwrap();
    system.order_client.create_order(lattes(1)).await.unwrap();

    let report = reports.total_sales().await.unwrap();
    assert_eq!(report.total_sales, 7.0);

    let popular = reports.popular_items().await.unwrap();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].product_id.0, "latte");
    assert_eq!(popular[0].name, "Caffe Latte");
    assert_eq!(popular[0].count, 2);

    drop(reports);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closed_order_cannot_be_updated() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let id = system.order_client.create_order(lattes(1)).await.unwrap().order_id;
    let closed = system.order_client.close_order(id.clone()).await.unwrap();
    assert_eq!(closed.status, OrderStatus::Closed);
    let snapshot = read(&dir.path().join(ORDERS_FILE));

    let err = system
        .order_client
        .update_order(
            id.clone(),
            OrderUpdate {
                customer_name: "Grace".to_string(),
                items: vec![OrderItem::new("latte", 5)],
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ClosedOrderImmutable(id.clone()));
    assert_eq!(read(&dir.path().join(ORDERS_FILE)), snapshot);
    assert_eq!(stock(&system, "coffee").await, 482.0);

    // Closing again is allowed and changes nothing
    let again = system.order_client.close_order(id).await.unwrap();
    assert_eq!(again, closed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_rebalances_stock() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let id = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    let update = |items| OrderUpdate {
        customer_name: "Ada".to_string(),
        items,
    };

    system
        .order_client
        .update_order(id.clone(), update(vec![OrderItem::new("flat_white", 3)]))
        .await
        .unwrap();
    assert_eq!(stock(&system, "coffee").await, 500.0 - 54.0);
    assert_eq!(stock(&system, "milk").await, 2000.0 - 450.0);

    // Growing past the stock fails and keeps the previous reservation
    let err = system
        .order_client
        .update_order(id.clone(), update(vec![OrderItem::new("flat_white", 20)]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::Inventory(InventoryError::InsufficientStock { .. })
    ));
    assert_eq!(stock(&system, "coffee").await, 446.0);
    let order = system.order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.items, vec![OrderItem::new("flat_white", 3)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_an_open_order_restores_stock() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let open = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    let closed = system.order_client.create_order(lattes(1)).await.unwrap().order_id;
    system.order_client.close_order(closed.clone()).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 446.0);

    system.order_client.delete(open).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 482.0);

    system.order_client.delete(closed).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 482.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_ids_leave_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    system.order_client.create_order(lattes(1)).await.unwrap();

    let inventory_before = read(&dir.path().join(INVENTORY_FILE));
    let orders_before = read(&dir.path().join(ORDERS_FILE));

    let err = system
        .inventory_client
        .update_item(
            "sugar".into(),
            InventoryUpdate {
                name: "Sugar".to_string(),
                quantity: 1.0,
                unit: "g".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(_)));
    assert!(matches!(
        system.inventory_client.delete("sugar".into()).await,
        Err(InventoryError::NotFound(_))
    ));
    assert!(matches!(
        system.order_client.delete("042".into()).await,
        Err(OrderError::NotFound(_))
    ));
    assert!(matches!(
        system.order_client.close_order("042".into()).await,
        Err(OrderError::NotFound(_))
    ));

    assert_eq!(read(&dir.path().join(INVENTORY_FILE)), inventory_before);
    assert_eq!(read(&dir.path().join(ORDERS_FILE)), orders_before);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restart_restores_every_collection() {
    let dir = tempfile::tempdir().unwrap();

    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let first = system.order_client.create_order(lattes(1)).await.unwrap().order_id;
    system.order_client.close_order(first).await.unwrap();
    let inventory = system.inventory_client.list().await.unwrap();
    let menu = system.menu_client.list().await.unwrap();
    let orders = system.order_client.list().await.unwrap();
    system.shutdown().await.unwrap();

    let system = CafeSystem::start(dir.path()).unwrap();
    assert_eq!(system.inventory_client.list().await.unwrap(), inventory);
    assert_eq!(system.menu_client.list().await.unwrap(), menu);
    assert_eq!(system.order_client.list().await.unwrap(), orders);

    let second = system.order_client.create_order(lattes(1)).await.unwrap().order_id;
    assert_eq!(second.0, "002");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_overdraw() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let mut tasks = Vec::new();
    for _ in 0..40 {
        let orders = system.order_client.clone();
        tasks.push(tokio::spawn(async move { orders.create_order(lattes(1)).await }));
    }

    let mut placed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(OrderError::Inventory(InventoryError::InsufficientStock { .. })) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    // 27 × 18 = 486 fits in 500, a 28th would not
    assert_eq!(placed, 27);
    assert_eq!(stock(&system, "coffee").await, 14.0);
    assert_eq!(system.order_client.list().await.unwrap().len(), 27);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_guards_referenced_rows() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let catalog = system.catalog();

    let err = catalog.delete_ingredient("coffee".into()).await.unwrap_err();
    assert!(matches!(err, CatalogError::IngredientInUse { .. }));

    let order = system.order_client.create_order(lattes(1)).await.unwrap().order_id;
    let err = catalog.delete_product("latte".into()).await.unwrap_err();
    assert!(matches!(err, CatalogError::ProductInUse { .. }));

    system.order_client.close_order(order).await.unwrap();
    catalog.delete_product("latte".into()).await.unwrap();
    assert!(system.menu_client.get("latte".into()).await.unwrap().is_none());

    // Milk is only used by the flat white
    catalog.delete_product("flat_white".into()).await.unwrap();
    catalog.delete_ingredient("milk".into()).await.unwrap();

    drop(catalog);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_menu_rejects_unstocked_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let err = system
        .menu_client
        .create_item(product("chai", "Chai Latte", 3.0, &[("chai_syrup", 20.0)]))
        .await
        .unwrap_err();

    assert_eq!(err, MenuError::UnknownIngredient("chai_syrup".into()));
    assert!(system.menu_client.get("chai".into()).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

fn coffee(grams: f64) -> Demand {
    [("coffee", grams)].into_iter().collect()
}

fn latte_with(grams: f64) -> MenuUpdate {
    MenuUpdate {
        name: "Caffe Latte".to_string(),
        description: String::new(),
        price: 3.5,
        ingredients: recipe(&[("coffee", grams)]),
    }
}

#[tokio::test]
async fn test_recipe_change_does_not_alter_the_stock_an_order_gives_back() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let placed = system.order_client.create_order(lattes(2)).await.unwrap();
    assert_eq!(placed.reserved, Some(coffee(36.0)));
    assert_eq!(stock(&system, "coffee").await, 464.0);

    system
        .menu_client
        .update_item("latte".into(), latte_with(100.0))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    // The reservation is read back from orders.json
    let system = CafeSystem::start(dir.path()).unwrap();
    system.order_client.delete(placed.order_id).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 500.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_after_recipe_change_releases_what_was_taken() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;

    let id = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    system
        .menu_client
        .update_item("latte".into(), latte_with(100.0))
        .await
        .unwrap();

    let updated = system
        .order_client
        .update_order(
            id.clone(),
            OrderUpdate {
                customer_name: "Ada".to_string(),
                items: vec![OrderItem::new("flat_white", 1)],
            },
        )
        .await
        .unwrap();
    assert_eq!(stock(&system, "coffee").await, 500.0 - 18.0);
    assert_eq!(stock(&system, "milk").await, 2000.0 - 150.0);
    assert_eq!(
        updated.reserved,
        Some([("coffee", 18.0), ("milk", 150.0)].into_iter().collect::<Demand>())
    );

    system.order_client.delete(id).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 500.0);
    assert_eq!(stock(&system, "milk").await, 2000.0);

    system.shutdown().await.unwrap();
}

/// A directory at the temporary path makes every write of `orders.json` fail.
fn block_order_writes(dir: &Path) -> std::path::PathBuf {
    let blocker = dir.join(format!("{ORDERS_FILE}.tmp"));
    std::fs::create_dir(&blocker).unwrap();
    blocker
}

#[tokio::test]
async fn test_failed_order_save_gives_reserved_stock_back() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let blocker = block_order_writes(dir.path());

    let err = system.order_client.create_order(lattes(2)).await.unwrap_err();

    assert!(matches!(err, OrderError::PersistenceError(_)));
    assert_eq!(stock(&system, "coffee").await, 500.0);
    assert!(system.order_client.list().await.unwrap().is_empty());
    assert_eq!(read(&dir.path().join(ORDERS_FILE)), "[]");

    std::fs::remove_dir(blocker).unwrap();
    system.order_client.create_order(lattes(2)).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 464.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_order_save_undoes_the_rebalance() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let id = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    let blocker = block_order_writes(dir.path());
    let update = OrderUpdate {
        customer_name: "Ada".to_string(),
        items: vec![OrderItem::new("flat_white", 3)],
    };

    let err = system
        .order_client
        .update_order(id.clone(), update.clone())
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::PersistenceError(_)));
    assert_eq!(stock(&system, "coffee").await, 464.0);
    assert_eq!(stock(&system, "milk").await, 2000.0);
    let order = system.order_client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(order.items, vec![OrderItem::new("latte", 2)]);
    assert_eq!(order.reserved, Some(coffee(36.0)));

    std::fs::remove_dir(blocker).unwrap();
    system.order_client.update_order(id, update).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 446.0);
    assert_eq!(stock(&system, "milk").await, 1550.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_order_save_takes_restored_stock_again() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let id = system.order_client.create_order(lattes(2)).await.unwrap().order_id;
    let blocker = block_order_writes(dir.path());

    let err = system.order_client.delete(id.clone()).await.unwrap_err();

    assert!(matches!(err, OrderError::PersistenceError(_)));
    assert_eq!(stock(&system, "coffee").await, 464.0);
    assert!(system.order_client.get(id.clone()).await.unwrap().is_some());

    std::fs::remove_dir(blocker).unwrap();
    system.order_client.delete(id).await.unwrap();
    assert_eq!(stock(&system, "coffee").await, 500.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sufficiency_check_reports_without_taking_stock() {
    let dir = tempfile::tempdir().unwrap();
    let system = CafeSystem::start(dir.path()).unwrap();
    seed(&system).await;
    let snapshot = read(&dir.path().join(INVENTORY_FILE));

    system.inventory_client.check_sufficient(coffee(500.0)).await.unwrap();

    assert_eq!(
        system
            .inventory_client
            .check_sufficient(coffee(500.5))
            .await
            .unwrap_err(),
        InventoryError::InsufficientStock {
            ingredient: "coffee".into(),
            demanded: 500.5,
            available: 500.0,
        }
    );
    assert_eq!(
        system
            .inventory_client
            .check_sufficient([("sugar", 1.0)].into_iter().collect())
            .await
            .unwrap_err(),
        InventoryError::UnknownIngredient("sugar".into())
    );

    assert_eq!(stock(&system, "coffee").await, 500.0);
    assert_eq!(read(&dir.path().join(INVENTORY_FILE)), snapshot);

    system.shutdown().await.unwrap();
}
