use reactor_view::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DescriptorWriter for testing that captures written descriptors
#[derive(Default, Clone)]
pub struct MockDescriptorWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub should_fail: bool,
}

impl MockDescriptorWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl DescriptorWriter for MockDescriptorWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock write failure: permission denied");
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
