//! Wire contracts shared between the admin frontend and the fleet backend.
//!
//! Every resource the backend exposes has one record type here, plus the
//! payload type the forms send on create/update. Derived figures (net pay,
//! fuel unit price, monthly totals) live next to the records so that every
//! consumer computes them the same way.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
