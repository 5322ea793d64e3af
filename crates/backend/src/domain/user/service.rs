use contracts::domain::user::{Profile, RegisterUserDto, UpdateUserDto, User, UserOverview};

use super::repository;
use crate::domain::{order, product, supplier};
use crate::shared::error::AppError;
use crate::system::auth::{guard, password};

/// Register a new account. The email must be unused; the password is
/// hashed before it touches the database.
pub async fn register(dto: RegisterUserDto) -> Result<User, AppError> {
    if dto.email.trim().is_empty() || !dto.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if repository::find_by_email(&dto.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "email already used by another account!".to_string(),
        ));
    }

    password::validate_password_strength(&dto.password)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let hash =
        password::hash_password(&dto.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let model = repository::insert(&dto.email, &hash, &dto.contact_name, &dto.company_name).await?;
    Ok(model.into())
}

/// Verify login credentials; Unauthorized on unknown email or bad password.
pub async fn verify_credentials(email: &str, pass: &str) -> Result<User, AppError> {
    let user = repository::find_by_email(email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = password::verify_password(pass, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    Ok(user.into())
}

/// The authenticated user with non-deleted products and suppliers and all
/// of their orders, the shape the pages bind to.
pub async fn profile(user_id: i32) -> Result<Profile, AppError> {
    let user: User = repository::find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?
        .into();

    let products = product::service::list_active_for_user(user_id).await?;
    let suppliers = supplier::service::list_active_plain_for_user(user_id).await?;
    let orders = order::service::list_for_user(user_id).await?;

    Ok(Profile {
        user,
        products,
        suppliers,
        orders,
    })
}

pub async fn overview(user_id: i32) -> Result<UserOverview, AppError> {
    let user: User = repository::find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?
        .into();

    let suppliers = supplier::service::list_active_plain_for_user(user_id).await?;
    let products = product::service::list_active_for_user(user_id).await?;
    let orders = order::service::list_for_user(user_id).await?;

    Ok(UserOverview {
        user,
        suppliers,
        products,
        orders,
    })
}

/// Partial update of the account; only the account holder may change it.
pub async fn update(actor_id: i32, user_id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
    let mut model = repository::find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    guard::ensure_owner(actor_id, model.id)?;

    if let Some(email) = dto.email {
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        model.email = email;
    }
    if let Some(pass) = dto.password {
        password::validate_password_strength(&pass)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        model.password_hash =
            password::hash_password(&pass).map_err(|e| AppError::Internal(e.to_string()))?;
    }
    if let Some(contact_name) = dto.contact_name {
        model.contact_name = contact_name;
    }
    if let Some(company_name) = dto.company_name {
        model.company_name = company_name;
    }

    Ok(repository::update(model).await?.into())
}

/// Delete the account and everything it owns; the account holder only.
pub async fn delete(actor_id: i32, user_id: i32) -> Result<(), AppError> {
    let model = repository::find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    guard::ensure_owner(actor_id, model.id)?;

    repository::delete_with_owned(model.id).await?;
    Ok(())
}
