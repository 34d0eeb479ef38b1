//! Browser implementations of the core seams: HTTP, clipboard, files.

use creative_agent::{Clipboard, Download, HttpReply, MediaFile, PlanError, PlanInput, PlanTransport};
use gloo::net::http::{Request, Response};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FileReader, FormData, HtmlAnchorElement, Url};

/// Readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn io_error(value: JsValue) -> PlanError {
    PlanError::Io(describe(&value))
}

fn network_error(e: gloo::net::Error) -> PlanError {
    PlanError::Network(e.to_string())
}

/// A file picked in the file input.
#[derive(Clone, PartialEq)]
pub struct Upload(pub File);

impl MediaFile for Upload {
    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// `fetch`-backed transport, requests go to the URLs given.
pub struct HttpTransport;

async fn into_reply(response: Response) -> Result<HttpReply, PlanError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| PlanError::Parse(e.to_string()))?;
    Ok(HttpReply { status, body })
}

impl PlanTransport for HttpTransport {
    type File = Upload;

    async fn get(&self, url: &str) -> Result<HttpReply, PlanError> {
        let response = Request::get(url).send().await.map_err(network_error)?;
        into_reply(response).await
    }

    async fn post_json(&self, url: &str, body: &PlanInput) -> Result<HttpReply, PlanError> {
        let request = Request::post(url).json(body).map_err(network_error)?;
        let response = request.send().await.map_err(network_error)?;
        into_reply(response).await
    }

    async fn post_file(&self, url: &str, file: &Upload) -> Result<HttpReply, PlanError> {
        let form = FormData::new().map_err(io_error)?;
        form.append_with_blob_and_filename("file", &file.0, &file.0.name())
            .map_err(io_error)?;
        let request = Request::post(url).body(form).map_err(network_error)?;
        let response = request.send().await.map_err(network_error)?;
        into_reply(response).await
    }
}

/// `navigator.clipboard`.
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PlanError> {
        let window =
            web_sys::window().ok_or_else(|| PlanError::Clipboard("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| PlanError::Clipboard(describe(&e)))
    }
}

/// Read a file into a `data:` URL.
pub async fn read_data_url(file: &File) -> Result<String, PlanError> {
    let reader = FileReader::new().map_err(io_error)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(io_error)?;
    JsFuture::from(loaded).await.map_err(io_error)?;
    reader.set_onload(None);
    reader.set_onerror(None);

    reader
        .result()
        .map_err(io_error)?
        .as_string()
        .ok_or_else(|| PlanError::Io(format!("could not read '{}'", file.name())))
}

/// Offer `download` as a file save, then release the object URL.
pub fn save_download(download: &Download) -> Result<(), PlanError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&download.contents));
    let options = BlobPropertyBag::new();
    options.set_type(Download::MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(io_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(io_error)?;

    let clicked = click_download_link(&url, &download.file_name);
    Url::revoke_object_url(&url).map_err(io_error)?;
    clicked
}

fn click_download_link(href: &str, file_name: &str) -> Result<(), PlanError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlanError::Io("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(io_error)?
        .dyn_into()
        .map_err(|_| PlanError::Io("anchor element unavailable".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Current time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn iso_now() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}
