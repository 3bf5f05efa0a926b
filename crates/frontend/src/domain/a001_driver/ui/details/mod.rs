//! Driver create/edit modal

mod view;

pub use view::DriverDetails;
