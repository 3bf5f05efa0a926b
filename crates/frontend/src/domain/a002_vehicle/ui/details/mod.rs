mod view;

pub use view::VehicleDetails;
