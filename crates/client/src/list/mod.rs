//! Client-side list controller shared by every resource page.

pub mod controller;
pub mod export;
pub mod lookups;
pub mod state;

pub use controller::{DeleteOutcome, FetchOutcome, ResourceListController, StateStore};
pub use state::{paginate, ListViewState, ModalState};
