/// In-memory record store
///
/// Users and events live in ordered maps keyed by identifier, next to the
/// counters that assign those identifiers. Keeping maps and counters in one
/// struct means a fresh [`MemStorage`] resets both together, which is what a
/// process restart looks like.
///
/// # Identifiers
///
/// Users and events have independent counters. Both start at 1 and grow by
/// one per create call; an id is never handed out twice. Construction seeds
/// three fixture events, so the first caller-created event gets id 4.

use super::Storage;
use crate::models::{
    category::Category,
    event::{Event, NewEvent},
    user::{NewUser, User},
};
use std::collections::BTreeMap;
use tracing::debug;

/// Volatile store for users and events
#[derive(Debug, Clone)]
pub struct MemStorage {
    users: BTreeMap<u32, User>,
    events: BTreeMap<u32, Event>,
    next_user_id: u32,
    next_event_id: u32,
}

impl MemStorage {
    /// Creates a store holding only the fixture events
    pub fn new() -> Self {
        let mut store = Self {
            users: BTreeMap::new(),
            events: BTreeMap::new(),
            next_user_id: 1,
            next_event_id: 1,
        };

        for event in fixture_events() {
            store.create_event(event);
        }

        store
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored events, fixtures included
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: u32) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn create_user(&mut self, data: NewUser) -> User {
        let id = self.next_user_id;
        self.next_user_id += 1;

        let user = User::from_new(id, data);
        self.users.insert(id, user.clone());

        debug!(user_id = id, "Stored user");
        user
    }

    fn get_all_events(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    fn get_events_by_category(&self, category: &str) -> Vec<Event> {
        self.events
            .values()
            .filter(|event| event.category.as_str() == category)
            .cloned()
            .collect()
    }

    fn create_event(&mut self, data: NewEvent) -> Event {
        let id = self.next_event_id;
        self.next_event_id += 1;

        let event = Event::from_new(id, data);
        self.events.insert(id, event.clone());

        debug!(event_id = id, category = %event.category, "Stored event");
        event
    }
}

/// Events present in every fresh store, one per category
fn fixture_events() -> [NewEvent; 3] {
    [
        NewEvent {
            title: "Interfaith Prayer Service".to_string(),
            date: "2023-09-15".to_string(),
            time: "10:00".to_string(),
            location: "Unity Center, 123 Main St".to_string(),
            description: "Join us for a beautiful service bringing together prayers and \
                          traditions from different faiths in our community."
                .to_string(),
            category: Category::Religious,
        },
        NewEvent {
            title: "Community Potluck Dinner".to_string(),
            date: "2023-10-02".to_string(),
            time: "18:30".to_string(),
            location: "Community Hall, 45 Park Avenue".to_string(),
            description: "Bring your favorite dish and join us for an evening of food, \
                          music, and conversation with neighbors from all backgrounds."
                .to_string(),
            category: Category::Social,
        },
        NewEvent {
            title: "Homeless Shelter Volunteer Day".to_string(),
            date: "2023-09-28".to_string(),
            time: "09:00".to_string(),
            location: "Hope Shelter, 789 Elm Street".to_string(),
            description: "Help prepare meals and organize donations at our local shelter. \
                          All faith communities are coming together for this important cause."
                .to_string(),
            category: Category::Charity,
        },
    ]
}
