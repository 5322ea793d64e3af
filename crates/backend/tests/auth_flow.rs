//! Registration, login and profile assembly against an in-memory
//! database, including account updates and full account deletion.

use backend::domain::{order, product, supplier, user};
use backend::shared::data::db;
use backend::shared::error::AppError;
use backend::system::auth::jwt;
use contracts::domain::order::OrderDto;
use contracts::domain::product::ProductDto;
use contracts::domain::supplier::SupplierDto;
use contracts::domain::user::{RegisterUserDto, UpdateUserDto};

#[tokio::test]
async fn register_login_profile_and_delete() {
    db::initialize_database(Some(":memory:")).await.unwrap();

    let account = user::service::register(RegisterUserDto {
        email: "owner@bakery.example".to_string(),
        password: "crusty-loaf".to_string(),
        contact_name: "Jo Baker".to_string(),
        company_name: "The Bakery".to_string(),
    })
    .await
    .unwrap();

    // Weak passwords never reach the database
    let weak = user::service::register(RegisterUserDto {
        email: "second@bakery.example".to_string(),
        password: "abc".to_string(),
        contact_name: "X".to_string(),
        company_name: "X".to_string(),
    })
    .await;
    assert!(matches!(weak, Err(AppError::BadRequest(_))));

    // Login: good and bad credentials
    let verified = user::service::verify_credentials("owner@bakery.example", "crusty-loaf")
        .await
        .unwrap();
    assert_eq!(verified.id, account.id);

    let bad_pass = user::service::verify_credentials("owner@bakery.example", "wrong").await;
    assert!(matches!(bad_pass, Err(AppError::Unauthorized)));
    let unknown = user::service::verify_credentials("nobody@bakery.example", "crusty-loaf").await;
    assert!(matches!(unknown, Err(AppError::Unauthorized)));

    // Session token round trip
    let token = jwt::generate_token(account.id).unwrap();
    let claims = jwt::validate_token(&token).unwrap();
    assert_eq!(claims.sub, account.id);
    assert!(jwt::validate_token("garbage").is_err());

    // Build some state, then check the profile shape
    let mill = supplier::service::create(
        account.id,
        SupplierDto {
            email: "sales@mill.example".to_string(),
            company_name: "The Mill".to_string(),
            phone_number: "555-0199".to_string(),
            contact_name: "Ada".to_string(),
        },
    )
    .await
    .unwrap();
    let flour = product::service::create(
        account.id,
        mill.id,
        ProductDto {
            name: "Flour".to_string(),
            unit: "kg".to_string(),
        },
    )
    .await
    .unwrap();
    let standing_order = order::service::create(
        account.id,
        OrderDto {
            date: "2021-05-01".to_string(),
        },
    )
    .await
    .unwrap();

    let profile = user::service::profile(account.id).await.unwrap();
    assert_eq!(profile.user.id, account.id);
    assert_eq!(profile.suppliers.len(), 1);
    assert_eq!(profile.products.len(), 1);
    assert_eq!(profile.orders.len(), 1);

    // Soft-deleted entries drop out of the profile
    product::service::soft_delete(account.id, flour.id)
        .await
        .unwrap();
    let profile = user::service::profile(account.id).await.unwrap();
    assert!(profile.products.is_empty());

    // Account update re-hashes the password
    user::service::update(
        account.id,
        account.id,
        UpdateUserDto {
            password: Some("fresh-sourdough".to_string()),
            contact_name: Some("Jo B.".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(matches!(
        user::service::verify_credentials("owner@bakery.example", "crusty-loaf").await,
        Err(AppError::Unauthorized)
    ));
    let renamed = user::service::verify_credentials("owner@bakery.example", "fresh-sourdough")
        .await
        .unwrap();
    assert_eq!(renamed.contact_name, "Jo B.");

    // Only the account holder may update or delete the account
    let other = user::service::register(RegisterUserDto {
        email: "rival@bakery.example".to_string(),
        password: "rivalry1".to_string(),
        contact_name: "Riv".to_string(),
        company_name: "Rival".to_string(),
    })
    .await
    .unwrap();
    let forbidden = user::service::delete(other.id, account.id).await;
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));

    // Deleting the account removes everything it owned
    user::service::delete(account.id, account.id).await.unwrap();
    assert!(matches!(
        user::service::overview(account.id).await,
        Err(AppError::NotFound("user"))
    ));
    assert!(matches!(
        supplier::service::get_by_id(mill.id).await,
        Err(AppError::NotFound("supplier"))
    ));
    assert!(matches!(
        order::service::get_detail(standing_order.id).await,
        Err(AppError::NotFound("order"))
    ));
}
