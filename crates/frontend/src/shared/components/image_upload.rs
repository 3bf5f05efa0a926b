//! Profile picture picker: uploads straight to the image host and hands
//! back the public URL.

use client::upload::ImageFile;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::shared::context::use_app;
use crate::shared::icons::icon;

async fn read_file(file: &web_sys::File) -> Result<ImageFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(ImageFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ImageUpload(
    label: &'static str,
    /// Current image URL, blank for none
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let app = use_app();
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_file = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        uploading.set(true);
        error.set(None);
        let uploader = app.uploader();
        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(image) => uploader.upload(image).await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match result {
                Ok(url) => on_change.run(url),
                Err(message) => {
                    log::warn!("profile image upload failed: {}", message);
                    error.try_set(Some(message));
                }
            }
            uploading.try_set(false);
        });
    };

    view! {
        <div class="form-group image-upload">
            <label>{label}</label>
            <div class="image-upload__body">
                {move || {
                    let url = value.get();
                    if url.is_empty() {
                        view! { <div class="image-upload__placeholder">{icon("image")}</div> }.into_any()
                    } else {
                        view! { <img class="image-upload__preview" src=url alt=label /> }.into_any()
                    }
                }}
                <div class="image-upload__actions">
                    <input
                        type="file"
                        accept="image/*"
                        on:change=on_file
                        disabled=move || uploading.get() || disabled.get().unwrap_or(false)
                    />
                    <Show when=move || !value.with(String::is_empty)>
                        <button
                            type="button"
                            class="button button--link"
                            on:click=move |_| on_change.run(String::new())
                            disabled=move || uploading.get() || disabled.get().unwrap_or(false)
                        >
                            "Remove"
                        </button>
                    </Show>
                    <Show when=move || uploading.get()>
                        <span class="image-upload__status">"Uploading..."</span>
                    </Show>
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}
