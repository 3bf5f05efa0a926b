mod view;

pub use view::TireMaintenanceDetails;
