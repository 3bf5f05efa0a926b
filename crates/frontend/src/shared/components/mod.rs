pub mod card_animated;
pub mod filters;
pub mod form_fields;
pub mod image_upload;
pub mod list_frame;
pub mod pagination_controls;
pub mod stat_card;
