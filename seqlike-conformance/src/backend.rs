use std::marker::PhantomData;
use std::panic;

use ahash::{HashMap, HashMapExt};
use seqlike::{Operation, SequenceKind};

use crate::battery::run_check;
use crate::outcome::TestOutcome;

/// A registered backend, as the suite sees it.
///
/// [`Backend`] implements this for every [`SequenceKind`]; the suite keeps
/// boxed trait objects so backends of different kinds can live side by side.
pub trait Conformance {
    /// The label reported with every outcome of this backend
    fn label(&self) -> &str;

    /// Is this operation marked pending, and if so, why?
    ///
    /// The outer `Option` tells whether the operation is pending, the inner
    /// one holds the optional reason.
    fn pending_reason(&self, operation: Operation) -> Option<Option<&str>>;

    /// Mark an operation as pending for this backend only.
    fn mark_pending(&mut self, operation: Operation, reason: Option<String>);

    /// Run the check for an operation, ignoring pending marks.
    ///
    /// A panic inside the backend is caught and becomes a
    /// [`TestOutcome::Panic`].
    fn run(&self, operation: Operation) -> TestOutcome;
}

/// A backend registration: a label plus the operations that are pending.
pub struct Backend<K> {
    label: String,
    pending: HashMap<Operation, Option<String>>,
    kind: PhantomData<fn() -> K>,
}

impl<K: SequenceKind> Backend<K> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pending: HashMap::new(),
            kind: PhantomData,
        }
    }

    /// Mark `operation` as not implemented yet for this backend.
    ///
    /// The suite skips the check and reports it as pending instead.
    pub fn pending(mut self, operation: Operation, reason: impl Into<String>) -> Self {
        self.pending.insert(operation, Some(reason.into()));
        self
    }
}

impl<K: SequenceKind> Conformance for Backend<K> {
    fn label(&self) -> &str {
        &self.label
    }

    fn pending_reason(&self, operation: Operation) -> Option<Option<&str>> {
        self.pending
            .get(&operation)
            .map(|reason| reason.as_deref())
    }

    fn mark_pending(&mut self, operation: Operation, reason: Option<String>) {
        self.pending.insert(operation, reason);
    }

    fn run(&self, operation: Operation) -> TestOutcome {
        match panic::catch_unwind(|| run_check::<K>(operation)) {
            Ok(Ok(())) => TestOutcome::Passed,
            Ok(Err(failure)) => TestOutcome::Failed(failure),
            Err(payload) => TestOutcome::Panic(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use seqlike::ListKind;

    use super::*;

    #[test]
    fn test_pending_marks_one_operation() {
        let backend = Backend::<ListKind>::new("List").pending(Operation::Take, "not yet");
        assert_eq!(backend.pending_reason(Operation::Take), Some(Some("not yet")));
        assert_eq!(backend.pending_reason(Operation::Drop), None);
    }

    #[test]
    fn test_mark_pending_without_reason() {
        let mut backend = Backend::<ListKind>::new("List");
        backend.mark_pending(Operation::Concat, None);
        assert_eq!(backend.pending_reason(Operation::Concat), Some(None));
    }

    #[test]
    fn test_run_ignores_pending() {
        let backend = Backend::<ListKind>::new("List").pending(Operation::Take, "not yet");
        assert_eq!(backend.run(Operation::Take), TestOutcome::Passed);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn std::any::Any + Send> = Box::new(3);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
