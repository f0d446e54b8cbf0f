use std::cell::Cell;

use boundview_bounded_iter::{EmptyBoundedIter, StaticBoundedIter};
use boundview_core::hardening::{self, Category, Violation};
use boundview_core::test_utils::trap_message;
use boundview_core::{
    Bidirectional, Contiguous, Cursor, IteratorCategory, RandomAccess, Readable, SliceCursor,
};
use pretty_assertions::assert_eq;

// =============================================================================
// Helpers
// =============================================================================

/// Runs `f` only when `violation` is checked in this build and expects it to trap.
fn assert_traps<R>(violation: Violation, f: impl FnOnce() -> R) {
    if !hardening::enabled(violation.category()) {
        return;
    }
    assert_eq!(trap_message(f), Some(violation.to_string()));
}

/// A window of `N` elements starting at `start` inside `data`.
fn window<const N: usize>(
    data: &[i32],
    start: usize,
    at: usize,
) -> StaticBoundedIter<SliceCursor<'_, i32>, N> {
    StaticBoundedIter::new(SliceCursor::new(data, at), SliceCursor::new(data, start))
}

fn assert_in_bounds<const N: usize>(it: &StaticBoundedIter<SliceCursor<'_, i32>, N>) {
    assert!(it.begin() <= *it.current());
    assert!(*it.current() <= it.end());
}

// =============================================================================
// Reads and indexing
// =============================================================================

#[test]
fn read_and_index_inside_the_window() {
    let data = [0, 1, 2, 3, 4, 5];
    let it = window::<3>(&data, 2, 3);
    assert_eq!(*it.read(), 3);
    assert_eq!(*it.at(-1), 2);
    assert_eq!(*it.at(0), 3);
    assert_eq!(*it.at(1), 4);
    assert_eq!(it.as_ptr(), &data[3] as *const i32);
}

#[test]
fn iteration_stops_at_the_window_end() {
    let data = [0, 1, 2, 3, 4, 5];
    let it = window::<3>(&data, 1, 1);
    assert_eq!(it.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(it.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn shared_cells_are_writable_through_a_bounded_iterator() {
    let cells = [Cell::new(1), Cell::new(2)];
    let mut it = StaticBoundedIter::from_array(&cells);
    it.step();
    it.read().set(20);
    assert_eq!(cells[1].get(), 20);
}

// =============================================================================
// Movement keeps the bound invariant
// =============================================================================

#[test]
fn every_valid_operation_keeps_current_in_the_window() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let mut it = window::<4>(&data, 2, 2);
    assert_in_bounds(&it);

    for _ in 0..4 {
        it.step();
        assert_in_bounds(&it);
    }
    assert_eq!(*it.current(), it.end());

    for _ in 0..4 {
        it.step_back();
        assert_in_bounds(&it);
    }
    assert_eq!(*it.current(), it.begin());

    it += 3;
    assert_in_bounds(&it);
    it -= 2;
    assert_in_bounds(&it);
    it.advance(-1);
    assert_in_bounds(&it);
    assert_eq!(it.offset(), 0);

    let it = it + 4;
    assert_in_bounds(&it);
    let it = it - 4;
    assert_in_bounds(&it);
    let it = 2isize + it;
    assert_eq!(*it.read(), 4);
}

#[test]
fn differences_and_comparisons_use_the_current_position() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let near = window::<2>(&data, 3, 4);
    let far = window::<6>(&data, 0, 4);
    assert_eq!(near, far);
    assert_eq!(&near - &far, 0);

    let later = window::<6>(&data, 0, 6);
    assert!(near < later);
    assert_eq!(&later - &near, 2);
    assert_eq!(&near - &later, -2);

    let a = window::<6>(&data, 0, 1);
    assert_eq!(a.distance_to(&later), 5);
}

#[test]
fn end_iterator_is_equal_to_an_unrelated_window_at_the_same_address() {
    let data = [0, 1, 2, 3];
    let end = StaticBoundedIter::from_array_end(&data);
    let tail = window::<1>(&data, 3, 4);
    assert_eq!(end, tail);
    assert_eq!(end.remaining(), 0);
}

// =============================================================================
// Empty windows
// =============================================================================

#[test]
fn empty_window_is_its_own_begin_and_end() {
    let data = [9, 8, 7];
    let cursor = SliceCursor::new(&data, 1);
    let it = EmptyBoundedIter::new(cursor, cursor);
    assert_eq!(it.begin(), cursor);
    assert_eq!(it.end(), cursor);
    assert_eq!(it.offset(), 0);
    assert_eq!(
        std::mem::size_of::<EmptyBoundedIter<SliceCursor<'_, i32>>>(),
        std::mem::size_of::<SliceCursor<'_, i32>>()
    );
}

#[test]
fn empty_window_rejects_every_access() {
    let data = [9, 8, 7];
    let cursor = SliceCursor::new(&data, 1);
    let it = EmptyBoundedIter::new(cursor, cursor);
    assert_traps(Violation::DereferenceAtEnd, || *it.read());
    assert_traps(Violation::IndexAtOrPastEnd, || *it.at(0));
    assert_traps(Violation::AdvancePastEnd, || {
        let mut it = it;
        it.step();
    });
    assert_traps(Violation::RewindPastBegin, || {
        let mut it = it;
        it.step_back();
    });
}

#[test]
fn defaulted_windows_keep_the_bound_invariant() {
    let empty = EmptyBoundedIter::<SliceCursor<'_, i32>>::default();
    assert_eq!(empty.offset(), 0);
    assert_eq!(empty.remaining(), 0);
    assert_eq!(empty.iter().len(), 0);
    assert_traps(Violation::AdvancePastEnd, || {
        let mut it = empty;
        it.step();
    });

    let windowed = StaticBoundedIter::<SliceCursor<'_, i32>, 3>::default();
    assert_eq!(windowed.offset(), 0);
    assert_eq!(windowed.remaining(), 3);
}

// =============================================================================
// Traps
// =============================================================================

#[test]
fn dereference_at_the_end_traps() {
    let data = [1, 2, 3, 4];
    // The element past the window exists in memory; the window still forbids it.
    let it = window::<2>(&data, 0, 2);
    assert_traps(Violation::DereferenceAtEnd, || *it.read());
    assert_traps(Violation::DereferenceAtEnd, || it.as_ptr());
}

#[test]
fn indexing_outside_the_window_traps() {
    let data = [1, 2, 3, 4, 5];
    let it = window::<3>(&data, 1, 2);
    assert_traps(Violation::IndexBeforeBegin, || *it.at(-2));
    assert_traps(Violation::IndexAtOrPastEnd, || *it.at(2));
}

#[test]
fn moving_outside_the_window_traps() {
    let data = [1, 2, 3, 4, 5];
    assert_traps(Violation::AdvancePastEnd, || {
        let mut it = window::<3>(&data, 1, 4);
        it.step();
    });
    assert_traps(Violation::RewindPastBegin, || {
        let mut it = window::<3>(&data, 1, 1);
        it.step_back();
    });
    assert_traps(Violation::AdvancePastEnd, || window::<3>(&data, 1, 2) + 3);
    assert_traps(Violation::RewindPastBegin, || window::<3>(&data, 1, 2) - 2);
    assert_traps(Violation::RewindPastBegin, || window::<3>(&data, 1, 2) + -2);
    assert_traps(Violation::AdvancePastEnd, || window::<3>(&data, 1, 2) - -3);
}

#[test]
fn inconsistent_construction_traps() {
    let data = [1, 2, 3, 4, 5];
    assert_traps(Violation::InconsistentBegin, || window::<2>(&data, 2, 1));
    assert_traps(Violation::InconsistentEnd, || window::<2>(&data, 0, 3));
}

#[test]
fn construction_checks_are_internal() {
    assert_eq!(Violation::InconsistentBegin.category(), Category::Internal);
    assert_eq!(
        Violation::DereferenceAtEnd.category(),
        Category::ValidElementAccess
    );
}

#[test]
fn unchecked_construction_outside_the_window_reports_nothing_remaining() {
    if hardening::enabled(Category::Internal) {
        return;
    }
    let data = [1, 2, 3, 4, 5];
    let it = window::<2>(&data, 0, 3);
    assert_eq!(it.remaining(), 0);
    assert_eq!(it.iter().len(), 0);
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn bounded_iterators_are_contiguous() {
    type It<'a> = StaticBoundedIter<SliceCursor<'a, u8>, 4>;
    assert_eq!(<It<'_> as Cursor>::CONCEPT, IteratorCategory::Contiguous);
    assert_eq!(<It<'_> as Readable>::CATEGORY, IteratorCategory::Contiguous);

    let data = [1u8, 2, 3, 4];
    let it = StaticBoundedIter::from_array(&data);
    assert_eq!(it.address(), data.as_ptr());
}
