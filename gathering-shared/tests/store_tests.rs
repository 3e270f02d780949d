/// Integration tests for the record store
///
/// These exercise the store the way the API layer does: candidates go
/// through validation first, then into a `MemStorage`.

use gathering_shared::models::category::Category;
use gathering_shared::models::user::NewUser;
use gathering_shared::store::{MemStorage, Storage};
use gathering_shared::validation::{validate_event, validate_user, EventCandidate, UserCandidate};

fn candidate(title: &str, category: &str) -> EventCandidate {
    EventCandidate {
        title: title.to_string(),
        date: "2023-11-05".to_string(),
        time: "09:00".to_string(),
        location: "Main Hall".to_string(),
        description: "A drive to collect food for families in need.".to_string(),
        category: category.to_string(),
    }
}

#[test]
fn test_valid_candidate_gets_next_sequential_id() {
    let mut store = MemStorage::new();

    let event = store.create_event(validate_event(candidate("Food Drive", "charity")).unwrap());

    assert_eq!(event.id, 4);
    assert_eq!(event.title, "Food Drive");
    assert_eq!(event.category, Category::Charity);
}

#[test]
fn test_ids_strictly_increase() {
    let mut store = MemStorage::new();
    let mut last = store.get_all_events().iter().map(|e| e.id).max().unwrap();

    for (i, category) in ["religious", "social", "charity", "social"].iter().enumerate() {
        let title = format!("Gathering {}", i);
        let event = store.create_event(validate_event(candidate(&title, category)).unwrap());
        assert!(event.id > last, "id {} not greater than {}", event.id, last);
        last = event.id;
    }
}

#[test]
fn test_list_returns_fixtures_plus_created_in_order() {
    let mut store = MemStorage::new();
    let n = 5;

    for i in 0..n {
        let title = format!("Event number {}", i);
        store.create_event(validate_event(candidate(&title, "social")).unwrap());
    }

    let events = store.get_all_events();
    assert_eq!(events.len(), n + 3);
    assert!(events.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(events.last().unwrap().title, "Event number 4");
}

#[test]
fn test_filter_by_category_is_exact() {
    let mut store = MemStorage::new();
    store.create_event(validate_event(candidate("Evening Vespers", "religious")).unwrap());

    let religious = store.get_events_by_category("religious");
    assert_eq!(religious.len(), 2);
    assert!(religious.iter().all(|e| e.category == Category::Religious));

    assert!(store.get_events_by_category("unknown").is_empty());
    assert!(store.get_events_by_category("Religious").is_empty());
    assert!(store.get_events_by_category("").is_empty());
}

#[test]
fn test_rejected_candidate_never_reaches_store() {
    let store = MemStorage::new();

    let result = validate_event(candidate("ab", "spiritual"));
    let failure = result.unwrap_err();
    assert!(failure.has_field("title"));
    assert!(failure.has_field("category"));

    assert_eq!(store.get_all_events().len(), 3);
}

#[test]
fn test_username_lookup_before_and_after_create() {
    let mut store = MemStorage::new();
    assert!(store.get_user_by_username("grace").is_none());

    let new_user = validate_user(UserCandidate {
        username: "grace".to_string(),
        password: "hunter2".to_string(),
    })
    .unwrap();
    let created = store.create_user(new_user);

    let found = store.get_user_by_username("grace").unwrap();
    assert_eq!(found, created);
    assert_eq!(store.get_user(created.id), Some(created));
}

#[test]
fn test_user_and_event_counters_are_independent() {
    let mut store = MemStorage::new();

    let user = store.create_user(NewUser {
        username: "first".to_string(),
        password: "pw".to_string(),
    });
    let event = store.create_event(validate_event(candidate("Choir Practice", "religious")).unwrap());

    assert_eq!(user.id, 1);
    assert_eq!(event.id, 4);
}

#[test]
fn test_new_store_simulates_restart() {
    let mut store = MemStorage::new();
    store.create_event(validate_event(candidate("Food Drive", "charity")).unwrap());
    store.create_user(NewUser {
        username: "temp".to_string(),
        password: "pw".to_string(),
    });
    assert_eq!(store.get_all_events().len(), 4);

    let store = MemStorage::new();
    let ids: Vec<u32> = store.get_all_events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(store.get_user_by_username("temp").is_none());

    let mut store = store;
    let event = store.create_event(validate_event(candidate("Food Drive", "charity")).unwrap());
    assert_eq!(event.id, 4);
}
