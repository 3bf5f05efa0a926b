mod view;

pub use view::PaymentDetails;
