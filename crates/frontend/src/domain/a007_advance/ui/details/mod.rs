mod view;

pub use view::AdvanceDetails;
