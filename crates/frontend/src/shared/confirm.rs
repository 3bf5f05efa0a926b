//! In-app confirmation dialog behind the `Confirmer` seam.

use async_trait::async_trait;
use client::services::{ConfirmRequest, Confirmer};
use futures::channel::oneshot;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::modal::Modal;

/// One pending question at a time; asking again cancels the previous one.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    request: RwSignal<Option<ConfirmRequest>>,
    reply: StoredValue<Option<oneshot::Sender<bool>>, LocalStorage>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(None),
            reply: StoredValue::new_local(None),
        }
    }

    fn answer(&self, confirmed: bool) {
        self.request.set(None);
        if let Some(sender) = self.reply.try_update_value(Option::take).flatten() {
            if sender.send(confirmed).is_err() {
                log::debug!("confirmation answered after the asker went away");
            }
        }
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Confirmer for ConfirmService {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let (sender, receiver) = oneshot::channel();
        // Dropping an older sender resolves its question as "no"
        self.reply.set_value(Some(sender));
        self.request.set(Some(request));
        receiver.await.unwrap_or(false)
    }
}

#[component]
pub fn ConfirmDialog(service: ConfirmService) -> impl IntoView {
    move || {
        service.request.get().map(|request| {
            view! {
                <Modal
                    title=request.title.clone()
                    on_close=Callback::new(move |_| service.answer(false))
                >
                    <p class="confirm-dialog__message">{request.message.clone()}</p>
                    <div class="confirm-dialog__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| service.answer(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| service.answer(true)
                        >
                            {request.confirm_label.clone()}
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> ConfirmRequest {
        ConfirmRequest {
            title: "Delete driver".into(),
            message: "Delete J. Silva?".into(),
            confirm_label: "Delete".into(),
        }
    }

    #[test]
    fn test_answer_reaches_waiting_asker() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let (sender, mut receiver) = oneshot::channel();
        service.reply.set_value(Some(sender));
        service.request.set(Some(question()));

        service.answer(true);

        assert_eq!(receiver.try_recv(), Ok(Some(true)));
        assert!(service.request.get_untracked().is_none());
    }

    #[test]
    fn test_answer_after_asker_dropped_closes_dialog() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let (sender, receiver) = oneshot::channel::<bool>();
        drop(receiver);
        service.reply.set_value(Some(sender));
        service.request.set(Some(question()));

        service.answer(false);

        assert!(service.request.get_untracked().is_none());
        assert!(service.reply.with_value(Option::is_none));
    }
}
