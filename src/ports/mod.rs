/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the driven side: everything the application core
/// needs from the outside world (reactor input, descriptor output,
/// progress display).
pub mod outbound;
