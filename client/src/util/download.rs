//! Client-side text file download.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only; SSR paths return an error so callers can surface it the same
//! way as a failed request.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Run `use_it` on `resource`, then `release` it whether or not `use_it` failed.
#[cfg(any(test, feature = "hydrate"))]
fn with_released<R, T, E>(
    resource: R,
    use_it: impl FnOnce(&R) -> Result<T, E>,
    release: impl FnOnce(R),
) -> Result<T, E> {
    let outcome = use_it(&resource);
    release(resource);
    outcome
}

/// Save `contents` as a UTF-8 text file named `file_name`.
///
/// Builds a `Blob`, points a temporary anchor at an object URL, clicks it,
/// then revokes the URL. The URL is revoked on failure too.
///
/// # Errors
///
/// Returns an error string if any browser API call fails.
pub fn download_text(file_name: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

        with_released(
            url,
            |url| {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .ok_or_else(|| "no document".to_owned())?;
                let anchor = document
                    .create_element("a")
                    .map_err(|e| format!("{e:?}"))?
                    .dyn_into::<web_sys::HtmlAnchorElement>()
                    .map_err(|_| "anchor element cast failed".to_owned())?;
                anchor.set_href(url);
                anchor.set_download(file_name);
                anchor.click();
                Ok(())
            },
            |url| {
                let _ = web_sys::Url::revoke_object_url(&url);
            },
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, contents);
        Err("not available on server".to_owned())
    }
}
