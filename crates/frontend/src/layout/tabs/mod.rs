//! Tab management module
//!
//! - `registry` - tab.key → View
//! - `tab_labels` - titles shown in the tab bar and the sidebar

pub mod registry;
pub mod tab_labels;

pub use tab_labels::tab_label_for_key;
