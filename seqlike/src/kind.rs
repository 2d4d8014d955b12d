use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The capability interface: a sequence backend implements this to function.
///
/// A kind is a zero-sized marker type; `Seq<A>` is the concrete sequence
/// type it builds for element type `A`. All operations are pure: they take
/// sequences by reference and return new sequences. None of them fail;
/// counts outside of `0..=len` are clamped.
///
/// The operations that combine two inputs widen the element type: the
/// result can be a sequence of any `C` both element types convert into.
/// When both sides already have the same element type, `C` is simply that
/// type.
pub trait SequenceKind {
    /// The sequence type for element type `A`.
    type Seq<A: Clone>: Clone;

    /// The empty sequence
    fn empty<A: Clone>() -> Self::Seq<A>;

    /// A sequence with exactly one element
    fn of<A: Clone>(element: A) -> Self::Seq<A>;

    /// Build a sequence from a finite ordered source, preserving its order.
    fn from_iterable<A: Clone>(source: impl IntoIterator<Item = A>) -> Self::Seq<A>;

    /// Project a sequence onto its elements, in order.
    ///
    /// This is the canonical view used to compare sequences of different
    /// backends.
    fn to_iterable<A: Clone>(seq: &Self::Seq<A>) -> impl Iterator<Item = A> + '_;

    /// The amount of elements in the sequence
    fn len<A: Clone>(seq: &Self::Seq<A>) -> usize;

    /// Keep at most `n` leading elements.
    ///
    /// `n <= 0` gives the empty sequence, `n >= len` an equivalent copy.
    fn take<A: Clone>(seq: &Self::Seq<A>, n: isize) -> Self::Seq<A>;

    /// Remove at most `n` leading elements.
    ///
    /// `n <= 0` leaves the sequence unchanged, `n >= len` gives the empty
    /// sequence.
    fn drop<A: Clone>(seq: &Self::Seq<A>, n: isize) -> Self::Seq<A>;

    /// Reverse the order of the elements
    fn reverse<A: Clone>(seq: &Self::Seq<A>) -> Self::Seq<A>;

    /// Insert `element` in front of the sequence.
    fn prepend<A, B, C>(seq: &Self::Seq<A>, element: B) -> Self::Seq<C>
    where
        A: Clone + Into<C>,
        B: Into<C>,
        C: Clone;

    /// Put all elements of `prefix` in front of the sequence.
    fn prepend_all<A, B, C>(seq: &Self::Seq<A>, prefix: &Self::Seq<B>) -> Self::Seq<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone;

    /// Put all elements of `suffix` after the sequence.
    fn concat<A, B, C>(seq: &Self::Seq<A>, suffix: &Self::Seq<B>) -> Self::Seq<C>
    where
        A: Clone + Into<C>,
        B: Clone + Into<C>,
        C: Clone;

    /// Check whether the sequence is empty
    fn is_empty<A: Clone>(seq: &Self::Seq<A>) -> bool {
        Self::len(seq) == 0
    }

    /// Collect the canonical projection.
    fn to_vec<A: Clone>(seq: &Self::Seq<A>) -> Vec<A> {
        Self::to_iterable(seq).collect()
    }
}

/// The operations of [`SequenceKind`] that are subject to conformance.
///
/// `FromIterable` stands for the round trip through `from_iterable` and
/// `to_iterable`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    FromIterable,
    Take,
    Drop,
    Reverse,
    Prepend,
    PrependAll,
    Concat,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Clamp a possibly negative or oversized count into `0..=len`.
pub fn clamp_count(n: isize, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        (n as usize).min(len)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-10, 4), 0);
        assert_eq!(clamp_count(0, 4), 0);
        assert_eq!(clamp_count(2, 4), 2);
        assert_eq!(clamp_count(4, 4), 4);
        assert_eq!(clamp_count(10, 4), 4);
        assert_eq!(clamp_count(isize::MAX, 0), 0);
    }

    #[test]
    fn test_operation_names() {
        let names = Operation::iter().map(|op| op.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "from-iterable",
                "take",
                "drop",
                "reverse",
                "prepend",
                "prepend-all",
                "concat"
            ]
        );
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!(
            "prepend-all".parse::<Operation>().unwrap(),
            Operation::PrependAll
        );
        assert_eq!(Operation::Take.to_string(), "take");
        assert!("prependAll".parse::<Operation>().is_err());
    }
}
