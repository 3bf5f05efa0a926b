mod view;

pub use view::FuelDetails;
