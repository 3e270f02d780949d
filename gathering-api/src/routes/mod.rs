/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `events`: Event listing, filtering and creation
/// - `users`: User creation and lookup

pub mod events;
pub mod health;
pub mod users;
