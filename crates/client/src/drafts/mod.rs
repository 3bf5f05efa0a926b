//! One form draft per editable resource.

pub mod a001_driver;
pub mod a002_vehicle;
pub mod a003_transport;
pub mod a004_maintenance;
pub mod a005_tire_maintenance;
pub mod a006_fuel;
pub mod a007_advance;
pub mod a008_payment;
pub mod a009_invoice;
pub mod a010_attendance;
pub mod users;
