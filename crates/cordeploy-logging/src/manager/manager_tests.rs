#![allow(non_snake_case)]

use super::*;
use std::sync::Arc;

#[test]
fn LogLevelManager___new___default_level_is_info() {
    let manager = LogLevelManager::new();

    assert_eq!(manager.level(), LogLevel::Info);
}

#[test]
fn LogLevelManager___set_level___changes_level() {
    let manager = LogLevelManager::new();

    manager.set_level(LogLevel::Debug);

    assert_eq!(manager.level(), LogLevel::Debug);
}

#[test]
fn LogLevelManager___is_enabled___respects_level_ordering() {
    let manager = LogLevelManager::with_level(LogLevel::Info);

    assert!(!manager.is_enabled(LogLevel::Debug));
    assert!(manager.is_enabled(LogLevel::Info));
    assert!(manager.is_enabled(LogLevel::Warning));
    assert!(manager.is_enabled(LogLevel::Error));
}

#[test]
fn LogLevelManager___error_level___hides_everything_else() {
    let manager = LogLevelManager::with_level(LogLevel::Error);

    let visible: Vec<_> = LogLevel::ALL
        .into_iter()
        .filter(|l| manager.is_enabled(*l))
        .collect();

    assert_eq!(visible, vec![LogLevel::Error]);
}

#[test]
fn LogLevelManager___ambient_trait___delegates_to_manager() {
    let manager = LogLevelManager::new();
    let ambient: &dyn AmbientLogLevel = &manager;

    ambient.set_level(LogLevel::Warning);

    assert_eq!(manager.level(), LogLevel::Warning);
    assert!(!ambient.is_level_visible(LogLevel::Info));
    assert!(ambient.is_level_visible(LogLevel::Warning));
}

#[test]
fn LogLevelManager___global___returns_same_instance() {
    let first = LogLevelManager::global() as *const LogLevelManager;
    let second = LogLevelManager::global() as *const LogLevelManager;

    assert_eq!(first, second);
}

#[test]
fn LogLevelManager___concurrent_set_level___ends_on_a_valid_level() {
    let manager = Arc::new(LogLevelManager::new());

    let handles: Vec<_> = LogLevel::ALL
        .into_iter()
        .map(|level| {
            let manager = Arc::clone(&manager);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    manager.set_level(level);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(LogLevel::ALL.contains(&manager.level()));
}
