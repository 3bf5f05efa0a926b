mod view;

pub use view::InvoiceDetails;
