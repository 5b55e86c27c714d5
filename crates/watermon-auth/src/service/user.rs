//! User directory service

use watermon_persistence::entity::users;
use watermon_persistence::sea_orm::*;

use crate::model::User;

/// Resolve an API key to the single account it belongs to.
pub async fn find_by_api_key(
    db: &DatabaseConnection,
    api_key: &str,
) -> anyhow::Result<Option<User>> {
    let user = users::Entity::find()
        .filter(users::Column::ApiKey.eq(api_key))
        .one(db)
        .await?
        .map(User::from);

    Ok(user)
}

/// Verify a username/password login against the stored bcrypt hash.
///
/// Returns `None` both for an unknown username and for a failed
/// verification, so callers cannot distinguish the two.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> anyhow::Result<Option<User>> {
    let Some(entity) = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    if bcrypt::verify(password, &entity.password)? {
        Ok(Some(User::from(entity)))
    } else {
        Ok(None)
    }
}
