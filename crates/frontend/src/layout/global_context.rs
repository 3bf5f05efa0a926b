use crate::layout::tabs::tab_label_for_key;
use crate::shared::api_utils::replace_url;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Opened tabs, the active one and sidebar visibility
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active") {
            Some(key) if is_known_tab(key) => self.open_tab(key),
            _ => self.open_tab(DEFAULT_TAB),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                replace_url(&new_url);
            }
        });
    }

    pub fn open_tab(&self, key: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: tab_label_for_key(key).to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_TAB: &str = "d001_monthly_overview";

fn is_known_tab(key: &str) -> bool {
    tab_label_for_key(key) != key
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_active_tab_activates_last() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_driver");
        ctx.open_tab("a002_vehicle");
        ctx.open_tab("a006_fuel");
        ctx.activate_tab("a002_vehicle");

        ctx.close_tab("a002_vehicle");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a006_fuel"));

        ctx.close_tab("a001_driver");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a006_fuel"));
        assert_eq!(ctx.opened.with_untracked(Vec::len), 1);
    }

    #[test]
    fn test_reopening_does_not_duplicate() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a007_advance");
        ctx.open_tab("a007_advance");
        assert_eq!(ctx.opened.with_untracked(Vec::len), 1);
        assert_eq!(
            ctx.opened.with_untracked(|t| t[0].title.clone()),
            "Advances"
        );
    }

    #[test]
    fn test_unknown_keys() {
        assert!(is_known_tab("a008_payment"));
        assert!(!is_known_tab("p900_sales_register"));
    }
}
