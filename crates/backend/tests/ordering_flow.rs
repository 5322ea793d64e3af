//! End-to-end exercise of the order association service against an
//! in-memory database: building an order, emailing its suppliers,
//! favourites, soft deletes and ownership enforcement.

use backend::domain::{order, product, supplier, user};
use backend::shared::data::db;
use backend::shared::error::AppError;
use contracts::domain::order::{OrderDto, UpdateOrderDto};
use contracts::domain::product::ProductDto;
use contracts::domain::supplier::SupplierDto;
use contracts::domain::user::RegisterUserDto;

fn register_dto(email: &str, contact: &str, company: &str) -> RegisterUserDto {
    RegisterUserDto {
        email: email.to_string(),
        password: "hunter22".to_string(),
        contact_name: contact.to_string(),
        company_name: company.to_string(),
    }
}

fn supplier_dto(company: &str) -> SupplierDto {
    SupplierDto {
        email: format!("sales@{}.example", company.to_lowercase().replace(' ', "-")),
        company_name: company.to_string(),
        phone_number: "555-0101".to_string(),
        contact_name: "Tom".to_string(),
    }
}

fn product_dto(name: &str, unit: &str) -> ProductDto {
    ProductDto {
        name: name.to_string(),
        unit: unit.to_string(),
    }
}

#[tokio::test]
async fn full_ordering_flow() {
    db::initialize_database(Some(":memory:")).await.unwrap();

    let owner = user::service::register(register_dto(
        "maria@corner-cafe.example",
        "Maria Lopez",
        "Corner Cafe",
    ))
    .await
    .unwrap();
    let intruder = user::service::register(register_dto(
        "sam@other-shop.example",
        "Sam",
        "Other Shop",
    ))
    .await
    .unwrap();

    // Duplicate registration email is rejected
    let dup = user::service::register(register_dto(
        "maria@corner-cafe.example",
        "Maria Again",
        "Copy Cafe",
    ))
    .await;
    assert!(matches!(dup, Err(AppError::BadRequest(_))));

    let greens = supplier::service::create(owner.id, supplier_dto("Fresh Greens"))
        .await
        .unwrap();
    let tomatoes = product::service::create(owner.id, greens.id, product_dto("Tomatoes", "kg"))
        .await
        .unwrap();

    // Products may only be created under one's own supplier
    let foreign = product::service::create(intruder.id, greens.id, product_dto("Basil", "bunch"))
        .await;
    assert!(matches!(foreign, Err(AppError::Forbidden(_))));

    let order_row = order::service::create(
        owner.id,
        OrderDto {
            date: "2021-03-14".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(!order_row.confirmed);
    assert!(!order_row.favourite);

    // A new order starts with no associations
    assert!(order::service::list_products(order_row.id)
        .await
        .unwrap()
        .is_empty());
    assert!(order::service::list_suppliers(order_row.id)
        .await
        .unwrap()
        .is_empty());

    // Zero and negative quantities are rejected
    let zero = order::service::add_product(owner.id, order_row.id, tomatoes.id, 0).await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));
    let negative = order::service::add_product(owner.id, order_row.id, tomatoes.id, -2).await;
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    // Only the owner can edit the order
    let forbidden = order::service::add_product(intruder.id, order_row.id, tomatoes.id, 3).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));

    // Missing order or product is NotFound, not Forbidden
    let no_order = order::service::add_product(owner.id, 9999, tomatoes.id, 3).await;
    assert!(matches!(no_order, Err(AppError::NotFound("order"))));
    let no_product = order::service::add_product(owner.id, order_row.id, 9999, 3).await;
    assert!(matches!(no_product, Err(AppError::NotFound("product"))));

    order::service::add_product(owner.id, order_row.id, tomatoes.id, 3)
        .await
        .unwrap();

    // Supplier attached without a body gets a composed email
    let email = order::service::add_supplier(owner.id, order_row.id, greens.id, None)
        .await
        .unwrap()
        .expect("email should be composed");
    assert!(email.starts_with("Dear Fresh Greens\n"));
    assert!(email.contains("Corner Cafe would like to order the following items: "));
    assert!(email.contains("\nTomatoes Qty: 3 kg"));
    assert!(email.ends_with("maria@corner-cafe.example"));

    // The scenario check: one supplier carrying exactly the ordered
    // product with qty 3 and the stored email text
    let suppliers = order::service::list_suppliers(order_row.id).await.unwrap();
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0].supplier.id, greens.id);
    assert_eq!(suppliers[0].email_sent.as_deref(), Some(email.as_str()));
    assert_eq!(suppliers[0].products.len(), 1);
    assert_eq!(suppliers[0].products[0].product.id, tomatoes.id);
    assert_eq!(suppliers[0].products[0].qty, 3);

    // Re-adding the same product overwrites the quantity, no second line
    order::service::add_product(owner.id, order_row.id, tomatoes.id, 5)
        .await
        .unwrap();
    let lines = order::service::list_products(order_row.id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].qty, 5);

    let detail = order::service::get_detail(order_row.id).await.unwrap();
    assert_eq!(detail.products.len(), 1);
    assert_eq!(detail.suppliers.len(), 1);

    // Remove the line, then removing it again is NotFound
    order::service::remove_product(owner.id, order_row.id, tomatoes.id)
        .await
        .unwrap();
    assert!(order::service::list_products(order_row.id)
        .await
        .unwrap()
        .is_empty());
    let again = order::service::remove_product(owner.id, order_row.id, tomatoes.id).await;
    assert!(matches!(again, Err(AppError::NotFound("orderProduct"))));

    // Favourites: flag plus label, clearing the flag clears the label
    assert!(order::service::list_favourites(owner.id)
        .await
        .unwrap()
        .is_empty());
    let favourite = order::service::update(
        owner.id,
        order_row.id,
        UpdateOrderDto {
            favourite: Some(true),
            favourite_label: Some("friday veg".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(favourite.favourite);
    assert_eq!(favourite.favourite_label.as_deref(), Some("friday veg"));

    let favourites = order::service::list_favourites(owner.id).await.unwrap();
    assert_eq!(favourites.len(), 1);
    assert_eq!(favourites[0].id, order_row.id);

    let unfavourite = order::service::update(
        owner.id,
        order_row.id,
        UpdateOrderDto {
            favourite: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(!unfavourite.favourite);
    assert!(unfavourite.favourite_label.is_none());

    // Confirming the order is a plain flag flip
    let confirmed = order::service::update(
        owner.id,
        order_row.id,
        UpdateOrderDto {
            confirmed: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(confirmed.confirmed);

    // Removing the supplier takes its product lines with it
    order::service::add_product(owner.id, order_row.id, tomatoes.id, 2)
        .await
        .unwrap();
    order::service::add_supplier(owner.id, order_row.id, greens.id, Some("hello".to_string()))
        .await
        .unwrap();
    order::service::remove_supplier(owner.id, order_row.id, greens.id)
        .await
        .unwrap();
    assert!(order::service::list_suppliers(order_row.id)
        .await
        .unwrap()
        .is_empty());
    assert!(order::service::list_products(order_row.id)
        .await
        .unwrap()
        .is_empty());

    // Soft-deleted products disappear from listings but stay fetchable
    product::service::soft_delete(owner.id, tomatoes.id)
        .await
        .unwrap();
    assert!(product::service::list_active_for_user(owner.id)
        .await
        .unwrap()
        .is_empty());
    let all = product::service::list_all_for_user(owner.id).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].deleted);
    assert!(product::service::get_by_id(tomatoes.id).await.is_ok());

    // Supplier soft delete cascades to its products
    let dairy = supplier::service::create(owner.id, supplier_dto("Dairy Direct"))
        .await
        .unwrap();
    let milk = product::service::create(owner.id, dairy.id, product_dto("Milk", "l"))
        .await
        .unwrap();
    let not_owner = supplier::service::soft_delete(intruder.id, dairy.id).await;
    assert!(matches!(not_owner, Err(AppError::Forbidden(_))));
    supplier::service::soft_delete(owner.id, dairy.id)
        .await
        .unwrap();
    let milk_after = product::service::get_by_id(milk.id).await.unwrap();
    assert!(milk_after.deleted);
    assert!(supplier::service::list_active_for_user(owner.id)
        .await
        .unwrap()
        .iter()
        .all(|s| s.supplier.id != dairy.id));
    assert!(supplier::service::list_all_for_user(owner.id)
        .await
        .unwrap()
        .iter()
        .any(|s| s.id == dairy.id && s.deleted));

    // Orders are hard-deleted; the products survive them
    order::service::delete(owner.id, order_row.id).await.unwrap();
    let gone = order::service::get_detail(order_row.id).await;
    assert!(matches!(gone, Err(AppError::NotFound("order"))));
    assert!(product::service::get_by_id(milk.id).await.is_ok());
}
