pub mod recipient_type;

pub use recipient_type::RecipientType;
