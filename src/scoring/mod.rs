/// Dependency health scoring - domain layer
///
/// Pure business logic for measuring the technical debt of Maven
/// dependencies. No I/O happens in this module; registry data arrives
/// through the outbound ports and flows into the scorer as value objects.
pub mod domain;
pub mod services;
