/// Factories for selecting adapter implementations
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
