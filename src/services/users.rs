use crate::domain::types::UserName;
use crate::domain::user::User;
use crate::repository::UserReader;
use crate::services::ServiceResult;

/// Looks up the member behind a session identity.
///
/// A missing or blank identity means an anonymous visitor. An identity with
/// no matching member is treated the same way and logged, since the session
/// is owned by the auth service and may outlive the account.
pub fn current_user<R>(repo: &R, identity: Option<&str>) -> ServiceResult<Option<User>>
where
    R: UserReader + ?Sized,
{
    let Some(name) = identity.and_then(|id| UserName::new(id).ok()) else {
        return Ok(None);
    };

    let user = repo.get_user_by_name(&name).map_err(|err| {
        log::error!("Failed to load current user {name}: {err}");
        err
    })?;

    if user.is_none() {
        log::warn!("Session identity {name} has no matching member");
    }

    Ok(user)
}
