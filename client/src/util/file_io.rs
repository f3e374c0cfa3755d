//! File download and dropped-file reading.
//!
//! TRADE-OFFS
//! ==========
//! Downloads go through a temporary object URL and a synthetic anchor click;
//! the URL is revoked right after the click, which browsers allow because the
//! download has already been handed off.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Offer `contents` as a file download named `filename`.
///
/// # Errors
///
/// Returns the DOM error if the blob, URL or anchor cannot be created.
#[cfg(feature = "hydrate")]
pub fn download(filename: &str, contents: &str, content_type: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

/// The first file of a drop, if the drop carried files at all.
#[cfg(feature = "hydrate")]
pub fn first_dropped_file(ev: &web_sys::DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()
        .and_then(|data| data.files())
        .and_then(|files| files.get(0))
}

/// Read a file's contents as text.
///
/// # Errors
///
/// Returns the rejection value if the browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_text(file: web_sys::File) -> Result<String, JsValue> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text()).await?;
    text.as_string().ok_or_else(|| JsValue::from_str("file contents are not text"))
}
