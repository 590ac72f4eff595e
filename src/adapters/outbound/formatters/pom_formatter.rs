use crate::ports::outbound::DescriptorFormatter;
use crate::shared::Result;
use crate::view_composition::domain::ViewDescriptor;
use std::fmt::Write;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// An aggregator is called a `pom` packaging in Maven's model
const POM_AGGREGATOR_PACKAGING: &str = "pom";

/// PomFormatter adapter rendering a view as a Maven `pom.xml`
pub struct PomFormatter;

impl PomFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other),
            }
        }
        escaped
    }

    fn render(descriptor: &ViewDescriptor) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<project xmlns="{}" xmlns:xsi="{}" xsi:schemaLocation="{}">"#,
            POM_NAMESPACE, XSI_NAMESPACE, POM_SCHEMA_LOCATION
        )?;
        writeln!(
            out,
            "  <modelVersion>{}</modelVersion>",
            Self::escape(descriptor.model_version())
        )?;
        writeln!(out, "  <groupId>{}</groupId>", Self::escape(descriptor.group_id()))?;
        writeln!(
            out,
            "  <artifactId>{}</artifactId>",
            Self::escape(descriptor.artifact_id())
        )?;
        writeln!(out, "  <packaging>{}</packaging>", POM_AGGREGATOR_PACKAGING)?;

        if !descriptor.modules().is_empty() {
            writeln!(out, "  <modules>")?;
            for module in descriptor.modules() {
                writeln!(out, "    <module>{}</module>", Self::escape(module))?;
            }
            writeln!(out, "  </modules>")?;
        }

        writeln!(out, "</project>")?;
        Ok(out)
    }
}

impl Default for PomFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorFormatter for PomFormatter {
    fn format(&self, descriptor: &ViewDescriptor) -> Result<String> {
        Self::render(descriptor)
            .map_err(|e| anyhow::anyhow!("Failed to render pom.xml: {}", e))
    }

    fn file_name(&self) -> &'static str {
        "pom.xml"
    }
}
