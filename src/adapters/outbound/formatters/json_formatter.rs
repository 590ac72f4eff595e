use crate::ports::outbound::DescriptorFormatter;
use crate::shared::Result;
use crate::view_composition::domain::ViewDescriptor;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    model_version: &'a str,
    group_id: &'a str,
    artifact_id: &'a str,
    packaging: &'a str,
    modules: &'a [String],
}

/// JsonFormatter adapter rendering a view as `view.json`
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorFormatter for JsonFormatter {
    fn format(&self, descriptor: &ViewDescriptor) -> Result<String> {
        let view = JsonView {
            model_version: descriptor.model_version(),
            group_id: descriptor.group_id(),
            artifact_id: descriptor.artifact_id(),
            packaging: descriptor.packaging(),
            modules: descriptor.modules(),
        };

        let mut json = serde_json::to_string_pretty(&view)
            .map_err(|e| anyhow::anyhow!("Failed to serialize view to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }

    fn file_name(&self) -> &'static str {
        "view.json"
    }
}
