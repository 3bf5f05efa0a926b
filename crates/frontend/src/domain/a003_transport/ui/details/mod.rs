mod view;

pub use view::TransportDetails;
