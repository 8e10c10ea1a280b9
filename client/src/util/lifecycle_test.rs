use super::*;

#[test]
fn new_lifecycle_is_alive() {
    let lifecycle = ViewLifecycle::new();
    assert!(lifecycle.is_alive());
    assert!(lifecycle.accepts("bots"));
}

#[test]
fn end_is_visible_through_clones() {
    let lifecycle = ViewLifecycle::new();
    let task_copy = lifecycle.clone();
    lifecycle.end();
    assert!(!task_copy.is_alive());
    assert!(!task_copy.accepts("whitepapers"));
}
