use crate::adapters::outbound::formatters::{JsonFormatter, PomFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DescriptorFormatter;

/// Factory for creating descriptor formatters
///
/// Lives in the application layer: it picks an infrastructure adapter
/// based on an application-level choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use reactor_view::application::dto::OutputFormat;
    /// use reactor_view::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Pom);
    /// assert_eq!(formatter.file_name(), "pom.xml");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DescriptorFormatter> {
        match format {
            OutputFormat::Pom => Box::new(PomFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Pom => "📝 Rendering view as pom.xml...",
            OutputFormat::Json => "📝 Rendering view as view.json...",
        }
    }
}
