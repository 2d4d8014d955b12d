use proptest::prelude::*;

use seqlike::{ArrayKind, Chunk, ChunkKind, Item, ListKind, SequenceKind};

fn round_trip<K: SequenceKind>(xs: &[i64]) -> Vec<i64> {
    K::to_vec(&K::from_iterable(xs.iter().copied()))
}

fn take_then_drop<K: SequenceKind>(xs: &[i64], n: isize) -> Vec<i64> {
    let seq = K::from_iterable(xs.iter().copied());
    let taken = K::take::<i64>(&seq, n);
    let dropped = K::drop::<i64>(&seq, n);
    K::to_vec(&K::concat::<i64, i64, i64>(&taken, &dropped))
}

fn reverse_twice<K: SequenceKind>(xs: &[i64]) -> Vec<i64> {
    let seq = K::from_iterable(xs.iter().copied());
    K::to_vec(&K::reverse::<i64>(&K::reverse::<i64>(&seq)))
}

// a pipeline touching every operation, so backends can be compared on it
fn pipeline<K: SequenceKind>(xs: &[i64], ys: &[i64], n: isize, m: isize) -> Vec<Item> {
    let xs = K::from_iterable(xs.iter().copied());
    let ys = K::from_iterable(ys.iter().copied());
    let front = K::take::<i64>(&xs, n);
    let back = K::drop::<i64>(&ys, m);
    let joined = K::concat::<i64, i64, i64>(&front, &back);
    let reversed = K::reverse::<i64>(&joined);
    let prefixed = K::prepend::<i64, &str, Item>(&reversed, "head");
    let all = K::prepend_all::<Item, i64, Item>(&prefixed, &ys);
    K::to_vec(&all)
}

// every prepend adds a level, so `xs.len()` elements give depth `xs.len() - 1`
fn chunk_built_by_prepends(xs: &[i64]) -> Chunk<i64> {
    xs.iter()
        .rev()
        .fold(Chunk::new(), |chunk, x| chunk.prepend(*x))
}

fn chunk_built_through_kind(xs: &[i64]) -> Chunk<i64> {
    xs.iter().rev().fold(ChunkKind::empty(), |chunk, x| {
        ChunkKind::prepend::<i64, i64, i64>(&chunk, *x)
    })
}

proptest! {
    #[test]
    fn round_trip_preserves_order(xs in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(round_trip::<ArrayKind>(&xs), xs.clone());
        prop_assert_eq!(round_trip::<ListKind>(&xs), xs.clone());
        prop_assert_eq!(round_trip::<ChunkKind>(&xs), xs);
    }

    #[test]
    fn take_and_drop_are_complementary(
        xs in prop::collection::vec(any::<i64>(), 0..64),
        n in -8isize..80,
    ) {
        prop_assert_eq!(take_then_drop::<ArrayKind>(&xs, n), xs.clone());
        prop_assert_eq!(take_then_drop::<ListKind>(&xs, n), xs.clone());
        prop_assert_eq!(take_then_drop::<ChunkKind>(&xs, n), xs);
    }

    #[test]
    fn reverse_is_an_involution(xs in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(reverse_twice::<ArrayKind>(&xs), xs.clone());
        prop_assert_eq!(reverse_twice::<ListKind>(&xs), xs.clone());
        prop_assert_eq!(reverse_twice::<ChunkKind>(&xs), xs);
    }

    #[test]
    fn take_is_clamped(xs in prop::collection::vec(any::<i64>(), 0..32), n in -64isize..64) {
        let expected = xs.iter().copied().take(n.max(0) as usize).collect::<Vec<_>>();
        let seq = ListKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ListKind::to_vec(&ListKind::take(&seq, n)), expected.clone());
        let seq = ChunkKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::take(&seq, n)), expected.clone());
        let seq = ArrayKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ArrayKind::to_vec(&ArrayKind::take(&seq, n)), expected);
    }

    #[test]
    fn drop_is_clamped(xs in prop::collection::vec(any::<i64>(), 0..32), n in -64isize..64) {
        let expected = xs.iter().copied().skip(n.max(0) as usize).collect::<Vec<_>>();
        let seq = ListKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ListKind::to_vec(&ListKind::drop(&seq, n)), expected.clone());
        let seq = ChunkKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::drop(&seq, n)), expected.clone());
        let seq = ArrayKind::from_iterable(xs.iter().copied());
        prop_assert_eq!(ArrayKind::to_vec(&ArrayKind::drop(&seq, n)), expected);
    }

    #[test]
    fn kind_prepends_build_deep_chunks(
        xs in prop::collection::vec(any::<i64>(), 3..=33),
        n in -4isize..40,
    ) {
        let chunk = chunk_built_through_kind(&xs);
        prop_assert_eq!(chunk.depth(), xs.len() - 1);
        let expected_take = xs.iter().copied().take(n.max(0) as usize).collect::<Vec<_>>();
        let expected_drop = xs.iter().copied().skip(n.max(0) as usize).collect::<Vec<_>>();
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::take(&chunk, n)), expected_take);
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::drop(&chunk, n)), expected_drop);
    }

    #[test]
    fn backends_agree(
        xs in prop::collection::vec(any::<i64>(), 0..32),
        ys in prop::collection::vec(any::<i64>(), 0..32),
        n in -4isize..40,
        m in -4isize..40,
    ) {
        let array = pipeline::<ArrayKind>(&xs, &ys, n, m);
        prop_assert_eq!(&pipeline::<ListKind>(&xs, &ys, n, m), &array);
        prop_assert_eq!(&pipeline::<ChunkKind>(&xs, &ys, n, m), &array);
    }

    #[test]
    fn deep_chunks_slice_like_arrays(
        xs in prop::collection::vec(any::<i64>(), 3..=33),
        n in 0isize..40,
    ) {
        let chunk = chunk_built_by_prepends(&xs);
        prop_assert!(chunk.depth() > 1);
        prop_assert_eq!(chunk.depth(), xs.len() - 1);
        let expected_take = xs.iter().copied().take(n as usize).collect::<Vec<_>>();
        let expected_drop = xs.iter().copied().skip(n as usize).collect::<Vec<_>>();
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::take(&chunk, n)), expected_take);
        prop_assert_eq!(ChunkKind::to_vec(&ChunkKind::drop(&chunk, n)), expected_drop);
    }
}

#[test]
fn concrete_scenario() {
    let seq = ListKind::from_iterable([1i64, 2, 3, 4]);
    assert_eq!(ListKind::to_vec(&ListKind::take(&seq, 2)), vec![1, 2]);
    assert_eq!(ListKind::to_vec(&ListKind::drop(&seq, 2)), vec![3, 4]);
    assert_eq!(ListKind::to_vec(&ListKind::reverse(&seq)), vec![4, 3, 2, 1]);
    let prepended: seqlike::List<Item> = ListKind::prepend(&seq, "a");
    assert_eq!(
        ListKind::to_vec(&prepended),
        vec![
            Item::from("a"),
            Item::from(1),
            Item::from(2),
            Item::from(3),
            Item::from(4)
        ]
    );
}

#[test]
fn identities() {
    let s = ChunkKind::from_iterable([1i64, 2]);
    let empty = ChunkKind::empty::<i64>();
    assert_eq!(ChunkKind::prepend_all::<i64, i64, i64>(&s, &empty), s);
    assert_eq!(ChunkKind::prepend_all::<i64, i64, i64>(&empty, &s), s);
    assert_eq!(ChunkKind::concat::<i64, i64, i64>(&s, &empty), s);
    assert_eq!(ChunkKind::concat::<i64, i64, i64>(&empty, &s), s);
    assert!(ChunkKind::is_empty(&empty));
    assert_eq!(ChunkKind::len(&ChunkKind::of(1i64)), 1);
}
