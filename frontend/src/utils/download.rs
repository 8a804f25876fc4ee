#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

    fn describe(context: &str, err: JsValue) -> String {
        match err.as_string() {
            Some(detail) => format!("{}: {}", context, detail),
            None => context.to_string(),
        }
    }

    pub fn csv_blob(csv_data: &str) -> Result<Blob, String> {
        let parts = js_sys::Array::of1(&JsValue::from_str(csv_data));
        let props = BlobPropertyBag::new();
        props.set_type("text/csv;charset=utf-8");
        Blob::new_with_str_sequence_and_options(&parts, &props)
            .map_err(|e| describe("CSV blob rejected", e))
    }

    /// Clicks a temporary `<a download>` pointing at `url`.
    pub fn click_download_link(document: &Document, url: &str, filename: &str) -> Result<(), String> {
        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| describe("Cannot create download link", e))?
            .unchecked_into();
        link.set_href(url);
        link.set_download(filename);
        link.set_hidden(true);

        let body = document.body().ok_or("Page has no body")?;
        body.append_child(&link)
            .map_err(|e| describe("Cannot attach download link", e))?;
        link.click();
        link.remove();
        Ok(())
    }

    pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Page has no document")?;
        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| describe("Cannot create object URL", e))?;
        let clicked = click_download_link(&document, &url, filename);
        if Url::revoke_object_url(&url).is_err() {
            log::debug!("Object URL for {} was not revoked", filename);
        }
        clicked
    }
}

/// Hands `csv_data` to the browser as a `filename` download.
#[cfg(target_arch = "wasm32")]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    let blob = browser::csv_blob(csv_data)?;
    browser::download_blob(&blob, filename)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_csv_download(filename: &str, _csv_data: &str) -> Result<(), String> {
    Err(format!("Cannot download {} outside the browser", filename))
}

#[cfg(target_arch = "wasm32")]
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if window.print().is_err() {
            log::warn!("window.print() failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print_page() {}
