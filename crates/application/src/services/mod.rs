pub mod static_zone;

pub use static_zone::{serial_for_date, StaticZone, ZoneStats};
