/// Formatter adapters for the supported descriptor formats
mod json_formatter;
mod pom_formatter;

pub use json_formatter::JsonFormatter;
pub use pom_formatter::PomFormatter;
