/// Record storage for Gathering
///
/// The [`Storage`] trait is the only surface through which users and events
/// are read or created. Implementations own their collections and hand out
/// clones; nothing outside the store mutates a record.
///
/// # Modules
///
/// - `memory`: Volatile in-process store seeded with fixture events
///
/// # Example
///
/// ```
/// use gathering_shared::store::{MemStorage, Storage};
///
/// let store = MemStorage::new();
///
/// // Three fixture events, one per category
/// assert_eq!(store.get_all_events().len(), 3);
/// assert_eq!(store.get_events_by_category("social").len(), 1);
/// assert!(store.get_events_by_category("unknown").is_empty());
/// ```

pub mod memory;

pub use memory::MemStorage;

use crate::models::{
    event::{Event, NewEvent},
    user::{NewUser, User},
};

/// Query and creation surface over users and events
///
/// Operations never fail. Lookups signal absence with `None`; creation
/// always succeeds and returns the stored record with its assigned id.
/// Candidates must already be validated.
pub trait Storage: Send + Sync {
    /// Finds a user by identifier
    fn get_user(&self, id: u32) -> Option<User>;

    /// Finds the first user (lowest id) whose username matches exactly
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Stores a user under the next user id
    ///
    /// Does not check username uniqueness. Callers that care look the name
    /// up first with [`Storage::get_user_by_username`].
    fn create_user(&mut self, data: NewUser) -> User;

    /// Returns every event in ascending id order
    fn get_all_events(&self) -> Vec<Event>;

    /// Returns events whose category name equals `category` exactly
    ///
    /// Matching is case-sensitive with no trimming. A name that is not a
    /// category yields an empty list.
    fn get_events_by_category(&self, category: &str) -> Vec<Event>;

    /// Stores an event under the next event id
    fn create_event(&mut self, data: NewEvent) -> Event;
}
