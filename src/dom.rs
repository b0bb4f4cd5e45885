// Browser plumbing shared by every tool: clipboard, localStorage, query
// parameters, and Blob-based file downloads.

use wasm_bindgen::JsCast;
use web_sys::{window, Blob, BlobPropertyBag, Storage, Url, UrlSearchParams};
use yew::UseStateHandle;

pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let cb = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| {
            "Clipboard write failed (requires HTTPS + user gesture in many browsers)".to_string()
        })?;
    Ok(())
}

/// Fire-and-forget clipboard write that reports into a status line.
pub fn copy_with_status(text: String, msg: UseStateHandle<String>, ok: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        match copy_to_clipboard(text).await {
            Ok(_) => msg.set(ok.to_string()),
            Err(e) => msg.set(e),
        }
    });
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Query parameter from the current location, percent-decoded.
pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Current page URL without query or fragment.
pub fn page_base_url() -> Option<String> {
    let loc = window()?.location();
    let origin = loc.origin().ok()?;
    let pathname = loc.pathname().ok()?;
    Some(format!("{origin}{pathname}"))
}

pub fn download_text_file(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    let mut bag = BlobPropertyBag::new();
    bag.type_(mime);

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|_| "Could not create Blob".to_string())?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not create object URL".to_string())?;

    let window = window().ok_or("No window".to_string())?;
    let document = window.document().ok_or("No document".to_string())?;
    let a = document
        .create_element("a")
        .map_err(|_| "Could not create <a> element".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Could not cast to HtmlAnchorElement".to_string())?;

    a.set_href(&url);
    a.set_download(filename);

    let body = document.body().ok_or("No body".to_string())?;
    body.append_child(&a)
        .map_err(|_| "Could not append link".to_string())?;
    a.click();
    body.remove_child(&a).ok();

    Url::revoke_object_url(&url).ok();
    Ok(())
}
