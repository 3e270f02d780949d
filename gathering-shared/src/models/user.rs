/// User model
///
/// A user is a username/password pair with a store-assigned identifier.
/// Passwords are kept exactly as submitted; the store never hashes or
/// inspects them.
///
/// # Example
///
/// ```
/// use gathering_shared::models::user::NewUser;
/// use gathering_shared::store::{MemStorage, Storage};
///
/// let mut store = MemStorage::new();
/// let user = store.create_user(NewUser {
///     username: "maria".to_string(),
///     password: "open-sesame".to_string(),
/// });
///
/// assert_eq!(user.id, 1);
/// assert_eq!(store.get_user_by_username("maria"), Some(user));
/// ```

use serde::{Deserialize, Serialize};

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the store, starting at 1
    pub id: u32,

    /// Login name
    ///
    /// Expected to be unique, but the store does not check it. Callers look
    /// the name up with `get_user_by_username` before creating.
    pub username: String,

    /// Password as submitted
    pub password: String,
}

/// A user candidate that has passed validation
///
/// Built by [`crate::validation::validate_user`]; carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    /// Attaches a store-assigned identifier to a validated candidate
    pub(crate) fn from_new(id: u32, data: NewUser) -> Self {
        Self {
            id,
            username: data.username,
            password: data.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_keeps_fields() {
        let user = User::from_new(
            7,
            NewUser {
                username: "ahmed".to_string(),
                password: "pw".to_string(),
            },
        );

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ahmed");
        assert_eq!(user.password, "pw");
    }
}
