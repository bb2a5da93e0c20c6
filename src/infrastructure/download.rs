use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::application::ExportFile;
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
};

fn browser_err(context: &str) -> impl FnOnce(wasm_bindgen::JsValue) -> AppError + '_ {
    move |e| AppError::Browser(format!("{}: {:?}", context, e))
}

/// Save `file` through a transient `<a download>` element.
///
/// The object URL lives only for the click; dropping `ObjectUrl` revokes it.
pub fn trigger_download(file: &ExportFile) -> AppResult<()> {
    let document = gloo::utils::document();
    let body = document
        .body()
        .ok_or_else(|| AppError::Browser("Document has no body".to_string()))?;

    let blob = Blob::new_with_options(file.contents.as_str(), Some(file.mime_type));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_err("Failed to create anchor"))?
        .dyn_into()
        .map_err(|_| AppError::Browser("Created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&file.name);

    body.append_child(&anchor).map_err(browser_err("Failed to attach anchor"))?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser_err("Failed to detach anchor"))?;
    drop(url);

    get_logger().info(
        LogComponent::Infrastructure("Download"),
        &format!("💾 Saved {} ({} bytes)", file.name, file.contents.len()),
    );
    Ok(())
}
