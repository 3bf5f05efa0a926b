//! Toast notifications.

use client::services::{Notification, NotificationLevel, Notifier};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Stack of visible toasts. Each one disappears after a few seconds.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn push(&self, level: NotificationLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, level, message })
        });

        let this = *self;
        Timeout::new(AUTO_DISMISS_MS, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        // The center may already be gone when the timer fires
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => log::warn!("toast: {}", notification.message),
            _ => log::debug!("toast: {}", notification.message),
        }
        self.push(notification.level, notification.message);
    }
}

fn level_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "toast toast--success",
        NotificationLevel::Info => "toast toast--info",
        NotificationLevel::Warning => "toast toast--warning",
        NotificationLevel::Error => "toast toast--error",
    }
}

#[component]
pub fn Toasts(center: NotificationCenter) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || center.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=level_class(toast.level) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| center.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
