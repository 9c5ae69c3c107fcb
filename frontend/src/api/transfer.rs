//! Multipart upload over `XMLHttpRequest`, the only browser transport that
//! reports request-body progress.

use common::requests::{FOLDER_FIELD, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use controller::{TransferOutcome, TransferProgress};
use js_sys::{Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use super::ApiError;

/// Builds the multipart body; each entry becomes one `field` part.
pub fn form_data(files: &[(&'static str, File)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    for (field, file) in files {
        let filename = part_filename(field, file.name(), relative_path(file));
        form.append_with_blob_and_filename(field, file, &filename)
            .map_err(ApiError::from_js)?;
    }
    Ok(form)
}

/// Folder parts carry the path inside the picked folder so the store can
/// rebuild sub-directories; everything else sends the bare name.
fn part_filename(field: &str, name: String, relative_path: String) -> String {
    if field == FOLDER_FIELD && !relative_path.is_empty() {
        relative_path
    } else {
        name
    }
}

// `webkitRelativePath` is not exposed by web-sys.
fn relative_path(file: &File) -> String {
    Reflect::get(file.as_ref(), &JsValue::from_str("webkitRelativePath"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Sends `form` to `url`, calling `on_progress` as bytes leave the browser.
///
/// Any HTTP status resolves to a [`TransferOutcome`]; only a transport
/// failure (network loss, abort) is an error.
pub async fn upload(
    url: &str,
    form: &FormData,
    on_progress: impl Fn(TransferProgress) + 'static,
) -> Result<TransferOutcome, ApiError> {
    let xhr = XmlHttpRequest::new().map_err(ApiError::from_js)?;
    xhr.open_with_async("POST", url, true)
        .map_err(ApiError::from_js)?;
    xhr.set_request_header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
        .map_err(ApiError::from_js)?;

    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        let total = event
            .length_computable()
            .then(|| event.total() as u64);
        on_progress(TransferProgress::new(event.loaded() as u64, total));
    });
    xhr.upload()
        .map_err(ApiError::from_js)?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let finished = Promise::new(&mut |resolve, reject| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
        xhr.set_onabort(Some(&reject));
    });
    xhr.send_with_opt_form_data(Some(form))
        .map_err(ApiError::from_js)?;

    let settled = JsFuture::from(finished).await;
    // The progress callback must outlive the request.
    drop(progress);
    settled.map_err(|_| ApiError::Browser("upload interrupted".into()))?;

    let status_code = xhr.status().map_err(ApiError::from_js)?;
    let body = xhr
        .response_text()
        .map_err(ApiError::from_js)?
        .unwrap_or_default();
    if status_code == 200 {
        Ok(TransferOutcome::Ok { payload: body })
    } else {
        Ok(TransferOutcome::Failed {
            status_code,
            raw_body: body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::requests::FILE_FIELD;
    use pretty_assertions::assert_eq;

    #[test]
    fn folder_parts_keep_their_relative_path() {
        assert_eq!(
            part_filename(FOLDER_FIELD, "a.pdf".into(), "scans/2024/a.pdf".into()),
            "scans/2024/a.pdf"
        );
        assert_eq!(
            part_filename(FOLDER_FIELD, "b.pdf".into(), "scans/other/b.pdf".into()),
            "scans/other/b.pdf"
        );
    }

    #[test]
    fn folder_parts_without_a_path_fall_back_to_the_name() {
        assert_eq!(part_filename(FOLDER_FIELD, "a.pdf".into(), String::new()), "a.pdf");
    }

    #[test]
    fn file_parts_send_the_bare_name() {
        assert_eq!(
            part_filename(FILE_FIELD, "a.pdf".into(), "scans/a.pdf".into()),
            "a.pdf"
        );
    }
}
