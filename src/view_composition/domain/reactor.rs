use super::Component;

/// Default model version when a manifest does not declare one
pub const DEFAULT_MODEL_VERSION: &str = "4.0.0";

/// The resolved reactor: the aggregator's coordinates plus its components
/// in build order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    model_version: String,
    group_id: String,
    components: Vec<Component>,
}

impl Reactor {
    pub fn new(
        model_version: impl Into<String>,
        group_id: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            model_version: model_version.into(),
            group_id: group_id.into(),
            components,
        }
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
