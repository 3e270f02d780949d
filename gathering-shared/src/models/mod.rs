/// Record types for Gathering
///
/// # Models
///
/// - `category`: The fixed set of event categories
/// - `event`: Community events and their validated candidates
/// - `user`: User accounts and their validated candidates
///
/// Records carry a store-assigned `id`; the `New*` types are the same shape
/// without it and are what the store accepts.

pub mod category;
pub mod event;
pub mod user;
