/// Event model
///
/// Events are community happenings listed on the site. Dates and times are
/// kept as the strings the visitor entered (`YYYY-MM-DD`, `HH:MM`); only
/// their shape is checked, never their calendar validity.

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Stored event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the store, starting at 1
    pub id: u32,

    /// Headline shown on the event card
    pub title: String,

    /// Calendar date, `YYYY-MM-DD`
    pub date: String,

    /// Start time, `HH:MM`
    pub time: String,

    /// Free-form venue or address
    pub location: String,

    pub description: String,

    pub category: Category,
}

/// An event candidate that has passed validation
///
/// Built by [`crate::validation::validate_event`] or directly for fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: Category,
}

impl Event {
    /// Attaches a store-assigned identifier to a validated candidate
    pub(crate) fn from_new(id: u32, data: NewEvent) -> Self {
        Self {
            id,
            title: data.title,
            date: data.date,
            time: data.time,
            location: data.location,
            description: data.description,
            category: data.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> NewEvent {
        NewEvent {
            title: "Food Drive".to_string(),
            date: "2023-11-05".to_string(),
            time: "09:00".to_string(),
            location: "Main Hall".to_string(),
            description: "A drive to collect food for families in need.".to_string(),
            category: Category::Charity,
        }
    }

    #[test]
    fn test_from_new_attaches_id() {
        let event = Event::from_new(4, sample());
        assert_eq!(event.id, 4);
        assert_eq!(event.title, "Food Drive");
        assert_eq!(event.category, Category::Charity);
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event::from_new(4, sample());
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 4,
                "title": "Food Drive",
                "date": "2023-11-05",
                "time": "09:00",
                "location": "Main Hall",
                "description": "A drive to collect food for families in need.",
                "category": "charity"
            })
        );
    }
}
