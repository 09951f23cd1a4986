// ==================== USER MANAGEMENT ====================
// CRUD over the in-memory user store. Nothing is persisted: a restart drops
// every record, which is accepted scope for this service.

use serde::{Deserialize, Serialize};

use crate::store::UserStore;
use crate::utils::error::AppError;

// ==================== REQUEST/RESPONSE MODELS ====================

// Request fields default to "" so a missing field decodes fine and is
// rejected by the presence check as invalid_input, not as a decode failure.

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    pub id: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GetUserResponse {
    pub id: String,
    pub name: String,
}

// ==================== SERVICE FUNCTIONS ====================

/// GET /user/{id} - Looks up a user. The password never rides along.
pub fn get_user(store: &UserStore, id: &str) -> Result<GetUserResponse, AppError> {
    let user = store
        .find_by_id(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    Ok(GetUserResponse {
        id: user.id,
        name: user.name,
    })
}

/// POST /user - Validates presence of both fields, then inserts under a
/// server-generated id.
pub fn create_user(
    store: &UserStore,
    request: CreateUserRequest,
) -> Result<CreateUserResponse, AppError> {
    if request.name.is_empty() || request.password.is_empty() {
        return Err(AppError::InvalidInput(
            "name and password must be non-empty".to_string(),
        ));
    }

    let id = store.insert(request.name, request.password);
    Ok(CreateUserResponse { id })
}

/// PATCH /user/{id} - Replaces the password. Validation runs before the
/// lookup, so an empty password on an unknown id still answers 400.
pub fn update_user(store: &UserStore, id: &str, request: UpdateUserRequest) -> Result<(), AppError> {
    if request.password.is_empty() {
        return Err(AppError::InvalidInput("password must be non-empty".to_string()));
    }

    if store.update_password(id, request.password) {
        Ok(())
    } else {
        Err(AppError::NotFound(id.to_string()))
    }
}

/// DELETE /user/{id} - Removes the record for good.
pub fn delete_user(store: &UserStore, id: &str) -> Result<(), AppError> {
    if store.delete(id) {
        Ok(())
    } else {
        Err(AppError::NotFound(id.to_string()))
    }
}
