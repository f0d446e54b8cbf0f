//! End-to-end use of both adaptors through the facade crate.

use boundview::hardening::{self, Category};
use boundview::{
    Cursor, ElementsCursor, ElementsView, KeysView, Range, RandomAccess, Readable,
    StaticBoundedIter, keys, values,
};
use pretty_assertions::assert_eq;

// =============================================================================
// Pairs
// =============================================================================

#[test]
fn keys_and_values_of_a_pair_array() {
    let data = [(1, "a"), (2, "b"), (3, "c")];

    let ks: Vec<i32> = keys(&data).walk().copied().collect();
    let vs: Vec<&str> = values(&data).walk().copied().collect();
    assert_eq!(ks, vec![1, 2, 3]);
    assert_eq!(vs, vec!["a", "b", "c"]);

    let it = KeysView::new(&data).begin();
    assert_eq!(*it.at(1), 2);
}

#[test]
fn elements_cursor_over_a_bounded_window() {
    let data = [(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')];
    let window = StaticBoundedIter::from_array(&data) + 1;

    // The bounded iterator's items feed an ordinary iterator pipeline.
    let letters: String = window.iter().map(|(_, c)| *c).collect();
    assert_eq!(letters, "bcd");

    let end = ElementsCursor::<_, 1>::new(StaticBoundedIter::from_array_end(&data));
    let mut it = ElementsCursor::<_, 1>::new(window);
    let mut projected = String::new();
    while it != end {
        projected.push(*it.read());
        it.step();
    }
    assert_eq!(projected, "bcd");
    assert_eq!(it.base().remaining(), 0);

    // Projected reads still go through the window's checks.
    if hardening::enabled(Category::ValidElementAccess) {
        assert!(std::panic::catch_unwind(|| *it.read()).is_err());
    }
}

#[test]
fn nested_views_project_twice() {
    let data = [((1, 2), 'x'), ((3, 4), 'y')];
    let seconds = ElementsView::<_, 1>::new(ElementsView::<_, 0>::new(&data));
    assert_eq!(seconds.walk().copied().collect::<Vec<_>>(), vec![2, 4]);

    let mut it = seconds.begin();
    it.advance(1);
    assert_eq!(*it.read(), 4);
    assert_eq!(*it.base().read(), (3, 4));
}

// =============================================================================
// Hardening
// =============================================================================

#[test]
fn reading_past_a_bounded_window_is_reported() {
    if !hardening::enabled(Category::ValidElementAccess) {
        return;
    }
    let data = [1, 2, 3];
    let result = std::panic::catch_unwind(|| {
        let end = StaticBoundedIter::from_array_end(&data);
        *end.read()
    });
    let message = result
        .err()
        .and_then(|payload| payload.downcast::<String>().ok())
        .map(|message| *message);
    assert_eq!(
        message.as_deref(),
        Some("bounded iterator: attempt to dereference an iterator at the end")
    );
}
