//! `HttpTransport` over the browser fetch API (gloo-net).

use async_trait::async_trait;
use client::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartPart, RequestBody};
use client::TransportError;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

pub struct GlooTransport;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn form_data(parts: Vec<MultipartPart>) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(|e| TransportError(format!("{e:?}")))?;
    for part in parts {
        match part {
            MultipartPart::Text { name, value } => form
                .append_with_str(&name, &value)
                .map_err(|e| TransportError(format!("{e:?}")))?,
            MultipartPart::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                let array = js_sys::Array::new();
                array.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                let properties = BlobPropertyBag::new();
                properties.set_type(&content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
                    .map_err(|e| TransportError(format!("Failed to create blob: {e:?}")))?;
                form.append_with_blob_and_filename(&name, &blob, &filename)
                    .map_err(|e| TransportError(format!("{e:?}")))?;
            }
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = builder(request.method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }

        let req = match request.body {
            Some(RequestBody::Json(body)) => req.body(body),
            // The browser sets the multipart boundary header itself
            Some(RequestBody::Multipart(parts)) => req.body(JsValue::from(form_data(parts)?)),
            None => req.build(),
        }
        .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?;

        let response = req
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
