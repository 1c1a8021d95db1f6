use infra::models::{NewUser, UserRow};
use infra::EntityStore;

use crate::auth::PasswordService;
use crate::gql::error::{GqlError, USER_ALREADY_EXISTS};

use super::types::UserInput;

/// Register a user: reject a taken email, hash the password, persist.
pub async fn create_user(
    store: &dyn EntityStore,
    passwords: &PasswordService,
    input: UserInput,
) -> Result<UserRow, GqlError> {
    if store.find_user_by_email(&input.email).await?.is_some() {
        return Err(GqlError::Duplicate(USER_ALREADY_EXISTS.to_string()));
    }

    let password_hash = passwords
        .hash_password(&input.password)
        .await
        .map_err(GqlError::Hash)?;

    // A concurrent registration for the same email surfaces here as a duplicate.
    let user = store
        .create_user(NewUser {
            username: input.username,
            email: input.email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok(user)
}
