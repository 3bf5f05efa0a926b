mod view;

pub use view::MaintenanceDetails;
