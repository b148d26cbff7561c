//! The visited-set / secret-cabinet rules across whole navigation sessions.

use keepsake_core::{ViewId, VisitedSet, menu_entries, resolve_active};

#[test]
fn any_two_sections_open_the_cabinet() {
    let pairs = [
        (ViewId::Letter, ViewId::Music),
        (ViewId::Letter, ViewId::Gallery),
        (ViewId::Music, ViewId::Gallery),
    ];
    for (a, b) in pairs {
        let mut visited = VisitedSet::default();
        visited.mark(a);
        assert!(!visited.secret_unlocked(), "{a}/{b}: one visit is not enough");
        visited.mark(b);
        assert!(visited.secret_unlocked(), "{a}/{b}");
    }
}

#[test]
fn navigation_order_does_not_matter() {
    let mut forward = VisitedSet::default();
    forward.mark(ViewId::Letter);
    forward.mark(ViewId::Music);

    let mut backward = VisitedSet::default();
    backward.mark(ViewId::Music);
    backward.mark(ViewId::Letter);

    assert_eq!(forward, backward);
    assert!(forward.secret_unlocked());
}

#[test]
fn revisits_never_change_the_record() {
    let mut visited = VisitedSet::default();
    visited.mark(ViewId::Letter);
    let snapshot = visited;
    for _ in 0..3 {
        visited.mark(ViewId::Letter);
    }
    assert_eq!(visited, snapshot);
}

#[test]
fn tab_strip_tracks_the_predicate() {
    let mut visited = VisitedSet::default();
    assert_eq!(menu_entries(visited.secret_unlocked()).len(), 3);

    visited.mark(ViewId::Gallery);
    assert_eq!(menu_entries(visited.secret_unlocked()).len(), 3);

    visited.mark(ViewId::Music);
    let tabs = menu_entries(visited.secret_unlocked());
    assert_eq!(tabs.len(), 4);
    assert_eq!(tabs.last().map(|e| e.view), Some(ViewId::Surprise));
    assert_eq!(tabs.last().map(|e| e.label_key), Some("menu.surprise"));
}

#[test]
fn cabinet_active_without_predicate_redirects() {
    // External reset while the cabinet is open: the router must bounce the
    // user back to the first declared section.
    let visited = VisitedSet::default();
    assert_eq!(
        resolve_active(ViewId::Surprise, visited.secret_unlocked()),
        ViewId::Letter
    );
}

#[test]
fn login_never_counts_as_a_section() {
    let mut visited = VisitedSet::default();
    assert!(!visited.mark(ViewId::Login));
    assert!(!ViewId::Login.is_section());
    assert!(ViewId::Surprise.is_section());
    assert_eq!(visited.count_base(), 0);
}
