use reactor_view::prelude::*;
use std::path::Path;

/// Mock ReactorReader for testing
pub struct MockReactorReader {
    pub reactor: Reactor,
    pub should_fail: bool,
}

impl MockReactorReader {
    pub fn new(reactor: Reactor) -> Self {
        Self {
            reactor,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            reactor: Reactor::new("4.0.0", "unused", vec![]),
            should_fail: true,
        }
    }
}

impl ReactorReader for MockReactorReader {
    fn read_reactor(&self, _manifest_path: &Path) -> Result<Reactor> {
        if self.should_fail {
            anyhow::bail!("Mock reactor read failure");
        }
        Ok(self.reactor.clone())
    }
}
