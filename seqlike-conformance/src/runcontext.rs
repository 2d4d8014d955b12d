use crate::renderer::{CharacterRenderer, Renderer, VerboseRenderer};

pub struct RunContext {
    pub verbose: bool,
    /// Skip checks marked pending and report them as pending. When this is
    /// off every check runs, pending or not.
    pub honor_pending: bool,
}

impl RunContext {
    pub fn new(verbose: bool, honor_pending: bool) -> Self {
        Self {
            verbose,
            honor_pending,
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        if self.verbose {
            Box::new(VerboseRenderer::new())
        } else {
            Box::new(CharacterRenderer::new())
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(false, true)
    }
}
