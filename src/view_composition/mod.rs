/// View composition domain: the data model and the pure services that
/// turn a reactor and a selection into a view descriptor.
pub mod domain;
pub mod services;
