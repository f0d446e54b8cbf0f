use boundview_core::tuple::get;
use boundview_core::{
    Cursor, IntoConst, IteratorCategory, Range, RangeMut, RandomAccess, Readable, SizedRange,
    SizedSentinel, SliceCursor, TransformView, Writable, for_each_mut,
};
use boundview_elements::{ElementsCursor, ElementsView, KeysView, ValuesView, keys, values};
use pretty_assertions::assert_eq;

// =============================================================================
// Keys and values of pairs
// =============================================================================

#[test]
fn keys_and_values_of_pairs() {
    let data = [(1, "a"), (2, "b"), (3, "c")];

    let keys = KeysView::new(&data);
    assert_eq!(keys.walk().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    let values = ValuesView::new(&data);
    assert_eq!(
        values.walk().copied().collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );

    assert_eq!(*keys.begin().at(1), 2);
}

#[test]
fn projection_matches_get_on_every_element() {
    let data = vec![(1u8, 'x', 1.5f32), (2, 'y', 2.5), (3, 'z', 3.5)];
    let view = ElementsView::<_, 2>::new(&data);
    let mut it = view.begin();
    for element in &data {
        assert!(std::ptr::eq(it.read(), get::<2, _>(element)));
        it.step();
    }
    assert!(it == view.end());
}

#[test]
fn arrays_are_tuple_like() {
    let points = [[0, 1, 2], [10, 11, 12]];
    let ys = ElementsView::<_, 1>::new(&points);
    assert_eq!(ys.walk().copied().collect::<Vec<_>>(), vec![1, 11]);
}

// =============================================================================
// Reference and value projections
// =============================================================================

#[test]
fn writes_through_a_reference_projection_reach_the_tuple() {
    let mut data = vec![(1, String::from("one")), (2, String::from("two"))];
    {
        let mut view = values(&mut data);
        let end = view.end_mut();
        for_each_mut(view.begin_mut(), &end, |name| name.push('!'));
    }
    assert_eq!(data[0].1, "one!");
    assert_eq!(data[1].1, "two!");

    let mut view = keys(&mut data);
    let mut it = view.begin_mut();
    it.advance(1);
    *it.read_mut() = 20;
    assert_eq!(data[1].0, 20);
}

#[test]
fn value_projections_are_owned() {
    let words = ["a", "bb", "ccc"];
    let pairs = TransformView::new(&words, |w: &&str| (w.len(), w.to_uppercase()));
    let upper = ValuesView::new(pairs);

    let first: String = upper.begin().read();
    assert_eq!(first, "A");
    assert_eq!(
        upper.walk().collect::<Vec<String>>(),
        vec!["A".to_string(), "BB".to_string(), "CCC".to_string()]
    );
    // The owned projection does not affect the source.
    assert_eq!(words, ["a", "bb", "ccc"]);
}

#[test]
fn category_depends_on_the_projection() {
    type RefKeys<'a> = ElementsCursor<SliceCursor<'a, (i32, i32)>, 0>;
    assert_eq!(<RefKeys<'_> as Readable>::CATEGORY, IteratorCategory::RandomAccess);
    assert_eq!(<RefKeys<'_> as Cursor>::CONCEPT, IteratorCategory::RandomAccess);

    fn category_of<R: Range>(_: &R) -> IteratorCategory {
        <R::Cursor as Readable>::CATEGORY
    }
    let data = [1, 2];
    let computed = ValuesView::new(TransformView::new(&data, |x: &i32| (*x, *x)));
    assert_eq!(category_of(&computed), IteratorCategory::Input);
}

// =============================================================================
// Conversions, sizes and sentinels
// =============================================================================

#[test]
fn const_conversion_matches_a_cursor_built_from_the_const_position() {
    let mut data = vec![(1, 'a'), (2, 'b'), (3, 'c')];
    let position = {
        let mut view = keys(&mut data);
        let mut it = view.begin_mut();
        it.advance(2);
        it.into_const().into_base().position()
    };
    let direct = keys(&data).begin() + 2;
    assert_eq!(direct.base().position(), position);

    let mut view = keys(&mut data);
    let mut it = view.begin_mut();
    it.advance(2);
    let converted = it.into_const();
    assert_eq!(*converted.read(), 3);
    assert_eq!(
        converted,
        ElementsCursor::new(SliceCursor::new(converted.base().as_slice(), 2))
    );
}

#[test]
fn size_forwards_to_the_base() {
    let empty: [(u8, u8); 0] = [];
    assert_eq!(keys(&empty).size(), 0);
    assert_eq!(values(&[(1, 2); 7]).size(), 7);
    assert_eq!(SizedRange::size(&keys(vec![(0, 0); 3])), 3);
}

#[test]
fn sentinel_comparison_and_difference_are_symmetric() {
    let data = [(1, 1), (2, 2), (3, 3), (4, 4)];
    let view = keys(&data);
    let end = view.end();
    let mut it = view.begin();

    for remaining in (0..=4).rev() {
        assert_eq!(it == end, end == it);
        assert_eq!(it == end, remaining == 0);
        assert_eq!(&it - &end, -(&end - &it));
        assert_eq!(&end - &it, remaining);
        assert_eq!(end.distance_from(&it), remaining);
        if remaining > 0 {
            it.step();
        }
    }
}

#[test]
fn cursor_differences() {
    let data = [(0, 0); 6];
    let view = values(&data);
    let a = view.begin();
    let mut b = a;
    b.advance(4);
    assert_eq!(&b - &a, 4);
    assert_eq!(&a - &b, -4);
    assert!(a < b);
    assert_eq!(a + 4, b);
    assert_eq!(b - 4, a);
    let mut c = b;
    c -= 1;
    c += 3;
    assert_eq!(&c - &a, 6);
}
