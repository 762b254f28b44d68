use super::*;
use actionreel_protocols::{ActionType, CacheError};

const KEY: &str = "__actionreel_actions__";

fn click(selector: &str, timestamp: i64) -> Action {
    Action::new(ActionType::Click)
        .with_selector(selector)
        .with_timestamp(timestamp)
}

/// Cache whose writes always fail.
struct BrokenCache;

impl DurableCache for BrokenCache {
    fn load(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Unavailable("disabled".to_string()))
    }

    fn store(&mut self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("disabled".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }
}

#[test]
fn test_append_persists_json() {
    let cache = MemoryCache::new();
    let mut store = ActionStore::open(Box::new(cache.clone()), KEY);

    store.append(click("#a", 10));
    store.append(click("#b", 20));

    assert_eq!(store.count(), 2);
    let persisted = Action::list_from_json(&cache.get(KEY).unwrap()).unwrap();
    assert_eq!(persisted, store.actions());
}

#[test]
fn test_restore_on_open() {
    let cache = MemoryCache::new();
    {
        let mut store = ActionStore::open(Box::new(cache.clone()), KEY);
        store.append(Action::navigate("https://example.com"));
        store.append(click("#next", 5));
    }

    let store = ActionStore::open(Box::new(cache), KEY);
    assert_eq!(store.count(), 2);
    assert_eq!(store.actions()[0].action_type, ActionType::Navigate);
    assert_eq!(store.snapshot().revision, 0);
}

#[test]
fn test_unreadable_cache_starts_empty() {
    let mut cache = MemoryCache::new();
    cache.store(KEY, "{not json").unwrap();
    let store = ActionStore::open(Box::new(cache), KEY);
    assert!(store.is_empty());
}

#[test]
fn test_timestamps_non_decreasing() {
    let mut store = ActionStore::open(Box::new(MemoryCache::new()), KEY);
    store.append(click("#a", 100));
    let second = store.append(click("#b", 40));
    assert_eq!(second.timestamp, 100);
}

#[test]
fn test_remove_and_clear() {
    let cache = MemoryCache::new();
    let mut store = ActionStore::open(Box::new(cache.clone()), KEY);
    store.append(click("#a", 1));
    store.append(click("#b", 2));
    store.append(click("#c", 3));

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.selector.as_deref(), Some("#b"));
    assert_eq!(store.remove(9), None);
    assert_eq!(store.count(), 2);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(cache.get(KEY).as_deref(), Some("[]"));
}

#[test]
fn test_persistence_failure_keeps_memory_state() {
    let mut store = ActionStore::open(Box::new(BrokenCache), KEY);
    store.append(click("#a", 1));
    store.persist();
    assert_eq!(store.count(), 1);
}

#[test]
fn test_quota_exceeded_is_swallowed() {
    let cache = MemoryCache::with_quota(KEY.len() + 80);
    let mut store = ActionStore::open(Box::new(cache.clone()), KEY);
    store.append(click("#a", 1));
    let first = cache.get(KEY).unwrap();

    for i in 0..10 {
        store.append(click(&format!("#item-{}", i), 2));
    }
    assert_eq!(store.count(), 11);
    assert_eq!(cache.get(KEY).unwrap(), first);
}

#[test]
fn test_subscribers_see_every_mutation() {
    let mut store = ActionStore::open(Box::new(MemoryCache::new()), KEY);
    let mut rx = store.subscribe();
    assert_eq!(rx.borrow_and_update().count, 0);

    store.append(click("#a", 1));
    assert!(rx.has_changed().unwrap());
    assert_eq!(
        *rx.borrow_and_update(),
        StoreSnapshot {
            count: 1,
            revision: 1
        }
    );

    store.replace_all(vec![click("#x", 1), click("#y", 2)]);
    store.remove(0);
    let snapshot = *rx.borrow_and_update();
    assert_eq!(snapshot.count, 1);
    assert_eq!(snapshot.revision, 3);
}
