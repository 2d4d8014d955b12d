// The battery: one check per operation, generic over the backend. Every
// check builds sequences through `from_iterable`, applies the operation,
// projects the result through `to_iterable` and compares it with a literal
// expectation. A check stops at its first failing assertion.

use std::fmt;

use seqlike::{display_items, Item, Operation, SequenceKind};

use crate::compare::{compare_ordered, Mismatch};

macro_rules! items {
    ($($item:expr),* $(,)?) => {
        vec![$(Item::from($item)),*]
    };
}

/// A failed assertion within a check.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub description: String,
    pub expected: Vec<Item>,
    pub actual: Vec<Item>,
    pub mismatch: Mismatch,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {} ({})",
            self.description,
            display_items(&self.expected),
            display_items(&self.actual),
            self.mismatch
        )
    }
}

pub type CheckResult = Result<(), Failure>;

/// Run the check for `operation` against backend `K`.
pub fn run_check<K: SequenceKind>(operation: Operation) -> CheckResult {
    match operation {
        Operation::FromIterable => check_from_iterable::<K>(),
        Operation::Take => check_take::<K>(),
        Operation::Drop => check_drop::<K>(),
        Operation::Reverse => check_reverse::<K>(),
        Operation::Prepend => check_prepend::<K>(),
        Operation::PrependAll => check_prepend_all::<K>(),
        Operation::Concat => check_concat::<K>(),
    }
}

fn expect<K, A>(description: &str, seq: &K::Seq<A>, expected: Vec<Item>) -> CheckResult
where
    K: SequenceKind,
    A: Clone + Into<Item>,
{
    let actual = K::to_iterable(seq).map(Into::into).collect::<Vec<Item>>();
    compare_ordered(&expected, &actual).map_err(|mismatch| Failure {
        description: description.to_string(),
        expected,
        actual,
        mismatch,
    })
}

fn numbers<K: SequenceKind>(xs: &[i64]) -> K::Seq<i64> {
    K::from_iterable(xs.iter().copied())
}

fn letters<K: SequenceKind>(xs: &[&'static str]) -> K::Seq<&'static str> {
    K::from_iterable(xs.iter().copied())
}

fn check_from_iterable<K: SequenceKind>() -> CheckResult {
    expect::<K, i64>(
        "from_iterable([1, 2, 3, 4])",
        &numbers::<K>(&[1, 2, 3, 4]),
        items![1, 2, 3, 4],
    )?;
    expect::<K, i64>("from_iterable([])", &numbers::<K>(&[]), items![])?;
    expect::<K, &str>(
        r#"from_iterable(["a", "b"])"#,
        &letters::<K>(&["a", "b"]),
        items!["a", "b"],
    )?;
    let seq = numbers::<K>(&[1, 2, 3, 4]);
    expect::<K, i64>(
        "from_iterable(to_iterable(s))",
        &K::from_iterable(K::to_iterable::<i64>(&seq)),
        items![1, 2, 3, 4],
    )
}

fn check_take<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2, 3, 4]);
    expect::<K, i64>("take(2)", &K::take::<i64>(&seq, 2), items![1, 2])?;
    expect::<K, i64>("take(0)", &K::take::<i64>(&seq, 0), items![])?;
    expect::<K, i64>("take(-10)", &K::take::<i64>(&seq, -10), items![])?;
    expect::<K, i64>("take(10)", &K::take::<i64>(&seq, 10), items![1, 2, 3, 4])?;
    expect::<K, i64>("take(4)", &K::take::<i64>(&seq, 4), items![1, 2, 3, 4])?;
    for n in [-1, 0, 1, 2, 4, 10] {
        let rejoined = K::concat::<i64, i64, i64>(
            &K::take::<i64>(&seq, n),
            &K::drop::<i64>(&seq, n),
        );
        expect::<K, i64>(
            &format!("concat(take({n}), drop({n}))"),
            &rejoined,
            items![1, 2, 3, 4],
        )?;
    }
    Ok(())
}

fn check_drop<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2, 3, 4]);
    expect::<K, i64>("drop(2)", &K::drop::<i64>(&seq, 2), items![3, 4])?;
    expect::<K, i64>("drop(0)", &K::drop::<i64>(&seq, 0), items![1, 2, 3, 4])?;
    expect::<K, i64>("drop(-10)", &K::drop::<i64>(&seq, -10), items![1, 2, 3, 4])?;
    expect::<K, i64>("drop(10)", &K::drop::<i64>(&seq, 10), items![])?;
    expect::<K, i64>("drop(4)", &K::drop::<i64>(&seq, 4), items![])?;
    expect::<K, i64>(
        "drop(1) of drop(1)",
        &K::drop::<i64>(&K::drop::<i64>(&seq, 1), 1),
        items![3, 4],
    )
}

fn check_reverse<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2, 3, 4]);
    expect::<K, i64>("reverse", &K::reverse::<i64>(&seq), items![4, 3, 2, 1])?;
    expect::<K, i64>(
        "reverse(reverse)",
        &K::reverse::<i64>(&K::reverse::<i64>(&seq)),
        items![1, 2, 3, 4],
    )?;
    expect::<K, i64>("reverse([])", &K::reverse::<i64>(&numbers::<K>(&[])), items![])?;
    // reversing a sliced sequence only sees the slice
    expect::<K, i64>(
        "reverse(drop(1))",
        &K::reverse::<i64>(&K::drop::<i64>(&seq, 1)),
        items![4, 3, 2],
    )
}

fn check_prepend<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2, 3, 4]);
    expect::<K, Item>(
        r#"prepend("a")"#,
        &K::prepend::<i64, &str, Item>(&seq, "a"),
        items!["a", 1, 2, 3, 4],
    )?;
    expect::<K, i64>(
        "prepend(0)",
        &K::prepend::<i64, i64, i64>(&seq, 0),
        items![0, 1, 2, 3, 4],
    )?;
    expect::<K, Item>(
        r#"prepend("a") to []"#,
        &K::prepend::<i64, &str, Item>(&numbers::<K>(&[]), "a"),
        items!["a"],
    )?;
    // the original is untouched
    expect::<K, i64>("original after prepend", &seq, items![1, 2, 3, 4])
}

fn check_prepend_all<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2]);
    let empty_numbers = numbers::<K>(&[]);
    let empty_letters = letters::<K>(&[]);
    let prefix = letters::<K>(&["a", "b"]);
    expect::<K, Item>(
        r#"prepend_all(["a", "b"]) to [1, 2]"#,
        &K::prepend_all::<i64, &str, Item>(&seq, &prefix),
        items!["a", "b", 1, 2],
    )?;
    expect::<K, Item>(
        "prepend_all([]) to [1, 2]",
        &K::prepend_all::<i64, &str, Item>(&seq, &empty_letters),
        items![1, 2],
    )?;
    expect::<K, Item>(
        r#"prepend_all(["a", "b"]) to []"#,
        &K::prepend_all::<i64, &str, Item>(&empty_numbers, &prefix),
        items!["a", "b"],
    )
}

fn check_concat<K: SequenceKind>() -> CheckResult {
    let seq = numbers::<K>(&[1, 2]);
    let empty_numbers = numbers::<K>(&[]);
    let empty_letters = letters::<K>(&[]);
    let suffix = letters::<K>(&["a", "b"]);
    expect::<K, Item>(
        r#"concat([1, 2], ["a", "b"])"#,
        &K::concat::<i64, &str, Item>(&seq, &suffix),
        items![1, 2, "a", "b"],
    )?;
    expect::<K, Item>(
        "concat([1, 2], [])",
        &K::concat::<i64, &str, Item>(&seq, &empty_letters),
        items![1, 2],
    )?;
    expect::<K, Item>(
        r#"concat([], ["a", "b"])"#,
        &K::concat::<i64, &str, Item>(&empty_numbers, &suffix),
        items!["a", "b"],
    )?;
    // concatenating twice keeps the outer order
    let twice = K::concat::<i64, i64, i64>(&K::concat::<i64, i64, i64>(&seq, &seq), &seq);
    expect::<K, i64>("concat(concat(s, s), s)", &twice, items![1, 2, 1, 2, 1, 2])
}

#[cfg(test)]
mod tests {
    use seqlike::{ArrayKind, ChunkKind, ListKind};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_array_passes_every_check() {
        for operation in Operation::iter() {
            assert_eq!(run_check::<ArrayKind>(operation), Ok(()), "{}", operation);
        }
    }

    #[test]
    fn test_list_passes_every_check() {
        for operation in Operation::iter() {
            assert_eq!(run_check::<ListKind>(operation), Ok(()), "{}", operation);
        }
    }

    #[test]
    fn test_chunk_passes_every_check() {
        for operation in Operation::iter() {
            assert_eq!(run_check::<ChunkKind>(operation), Ok(()), "{}", operation);
        }
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure {
            description: "take(2)".to_string(),
            expected: items![1, 2],
            actual: items![1],
            mismatch: Mismatch::Length {
                expected: 2,
                actual: 1,
            },
        };
        assert_eq!(
            failure.to_string(),
            "take(2): expected [1, 2], got [1] (expected length 2, got 1)"
        );
    }
}
