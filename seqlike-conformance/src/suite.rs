use std::io::Write;

use seqlike::{ArrayKind, ChunkKind, ListKind, Operation, SequenceKind};
use strum::IntoEnumIterator;
use tracing::{debug, info, info_span, warn};

use crate::backend::{Backend, Conformance};
use crate::error::Result;
use crate::filter::CheckFilter;
use crate::outcome::{BackendOutcomes, Outcomes, SuiteOutcomes, TestOutcome};
use crate::renderer::Renderer;
use crate::runcontext::RunContext;

/// The registered backends. Every backend runs the same battery.
#[derive(Default)]
pub struct Suite {
    backends: Vec<Box<dyn Conformance>>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// A suite with the Array, List and Chunk backends registered.
    pub fn with_default_backends() -> Self {
        let mut suite = Self::new();
        suite
            .register(Backend::<ArrayKind>::new("Array"))
            .register(Backend::<ListKind>::new("List"))
            .register(Backend::<ChunkKind>::new("Chunk"));
        suite
    }

    pub fn register<K: SequenceKind + 'static>(&mut self, backend: Backend<K>) -> &mut Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.backends.iter().map(|backend| backend.label()).collect()
    }

    pub fn backend_mut(&mut self, label: &str) -> Option<&mut Box<dyn Conformance>> {
        self.backends
            .iter_mut()
            .find(|backend| backend.label() == label)
    }

    pub fn run(
        &self,
        run_context: &RunContext,
        check_filter: &dyn CheckFilter,
        out: &mut dyn Write,
        renderer: &dyn Renderer,
    ) -> Result<SuiteOutcomes> {
        let mut suite_outcomes = SuiteOutcomes::new();
        for backend in self.backends.iter() {
            let backend_outcomes = self.run_backend(
                backend.as_ref(),
                run_context,
                check_filter,
                out,
                renderer,
            )?;
            suite_outcomes.add_outcomes(backend_outcomes);
        }
        Ok(suite_outcomes)
    }

    fn run_backend(
        &self,
        backend: &dyn Conformance,
        run_context: &RunContext,
        check_filter: &dyn CheckFilter,
        out: &mut dyn Write,
        renderer: &dyn Renderer,
    ) -> Result<BackendOutcomes> {
        let label = backend.label();
        let _span = info_span!("backend", label).entered();
        info!("running conformance checks");

        let mut outcomes = BackendOutcomes::new(label);
        renderer.render_backend(out, label)?;
        for operation in Operation::iter() {
            if !check_filter.is_included(label, operation) {
                outcomes.add_filtered();
                continue;
            }
            renderer.render_check(out, operation)?;
            let outcome = match backend.pending_reason(operation) {
                Some(reason) if run_context.honor_pending => {
                    warn!(%operation, reason, "check pending");
                    TestOutcome::Pending(reason.map(str::to_string))
                }
                _ => backend.run(operation),
            };
            if outcome.is_failure() {
                warn!(%operation, %outcome, "check did not pass");
            } else {
                debug!(%operation, passed = outcome.is_passed(), "check done");
            }
            renderer.render_outcome(out, &outcome)?;
            outcomes.add_outcome(operation, outcome);
        }
        renderer.render_backend_summary(out, &outcomes)?;
        info!(
            passed = outcomes.passed(),
            failed = outcomes.failed() + outcomes.panicked(),
            pending = outcomes.pending(),
            "backend done"
        );
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::filter::{IncludeAllFilter, NameFilter};
    use crate::renderer::CharacterRenderer;

    use super::*;

    fn run(suite: &Suite, run_context: &RunContext, filter: &dyn CheckFilter) -> SuiteOutcomes {
        suite
            .run(run_context, filter, &mut io::sink(), &CharacterRenderer::new())
            .unwrap()
    }

    #[test]
    fn test_default_backends() {
        let suite = Suite::with_default_backends();
        assert_eq!(suite.labels(), vec!["Array", "List", "Chunk"]);
        let outcomes = run(&suite, &RunContext::default(), &IncludeAllFilter::new());
        assert_eq!(outcomes.total(), 3 * Operation::iter().count());
        assert_eq!(outcomes.passed(), outcomes.total());
    }

    #[test]
    fn test_pending_only_affects_one_backend() {
        let mut suite = Suite::new();
        suite
            .register(Backend::<ArrayKind>::new("Array"))
            .register(Backend::<ChunkKind>::new("Chunk").pending(Operation::PrependAll, "later"));
        let outcomes = run(&suite, &RunContext::default(), &IncludeAllFilter::new());
        assert_eq!(outcomes.pending(), 1);
        assert_eq!(
            outcomes
                .backend("Chunk")
                .and_then(|b| b.get(Operation::PrependAll)),
            Some(&TestOutcome::Pending(Some("later".to_string())))
        );
        assert_eq!(
            outcomes
                .backend("Array")
                .and_then(|b| b.get(Operation::PrependAll)),
            Some(&TestOutcome::Passed)
        );
    }

    #[test]
    fn test_pending_ignored() {
        let mut suite = Suite::new();
        suite.register(Backend::<ListKind>::new("List").pending(Operation::Take, "later"));
        let outcomes = run(&suite, &RunContext::new(false, false), &IncludeAllFilter::new());
        assert_eq!(outcomes.pending(), 0);
        assert_eq!(outcomes.passed(), outcomes.total());
    }

    #[test]
    fn test_name_filter_counts_filtered() {
        let suite = Suite::with_default_backends();
        let filter = NameFilter::new(Some("prepend".to_string()));
        let outcomes = run(&suite, &RunContext::default(), &filter);
        assert_eq!(outcomes.total(), 3 * 2);
        assert_eq!(outcomes.filtered(), 3 * (Operation::iter().count() - 2));
    }

    #[test]
    fn test_backend_mut() {
        let mut suite = Suite::with_default_backends();
        assert!(suite.backend_mut("List").is_some());
        assert!(suite.backend_mut("Vector").is_none());
    }
}
