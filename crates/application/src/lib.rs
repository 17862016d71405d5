//! resolvr application layer: zone tables, resolution use case and the ports it drives.
pub mod ports;
pub mod services;
pub mod use_cases;
