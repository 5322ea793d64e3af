use crate::shared::error::AppError;

/// Single ownership check used by every mutating service path: the actor
/// must be the owning user of the target resource. Distinct from NotFound,
/// which covers resources that do not exist at all.
pub fn ensure_owner(actor_id: i32, owner_id: i32) -> Result<(), AppError> {
    if actor_id != owner_id {
        return Err(AppError::Forbidden("Only owner can modify!"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        assert!(ensure_owner(3, 3).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(3, 4).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
