//! Submission pipeline and output actions.
//!
//! The browser layer supplies a [`PlanTransport`] (HTTP) and a [`PlanView`]
//! (page updates, alerts, console). The functions here only decide what
//! happens in which order, so they run unchanged against test fakes.
//!
//! Both [`submit_plan`] and [`fetch_surprise`] hold a cleanup guard for
//! their whole run: actions are re-enabled whether the call succeeds, fails,
//! or the future is dropped part way through.

use crate::config::Endpoints;
use crate::error::PlanError;
use crate::form::{FormState, MediaFile, PlanRequest};
use crate::plan::{PlanInput, PlanResult, SurpriseBrief, decode_plan, decode_surprise};

/// Alert shown when the surprise brief cannot be fetched.
pub const SURPRISE_FAILED: &str = "Failed to load surprise brief!";

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Outbound HTTP calls used by the form.
///
/// Implementations run on a single-threaded executor, so the futures carry
/// no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait PlanTransport {
    type File: MediaFile;

    async fn get(&self, url: &str) -> Result<HttpReply, PlanError>;

    /// POST `body` as `application/json`.
    async fn post_json(&self, url: &str, body: &PlanInput) -> Result<HttpReply, PlanError>;

    /// POST `file` as multipart form data under the field `file`.
    async fn post_file(&self, url: &str, file: &Self::File) -> Result<HttpReply, PlanError>;
}

/// System clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), PlanError>;
}

/// Page updates requested by the pipeline.
pub trait PlanView {
    fn set_actions_enabled(&self, enabled: bool);
    fn start_busy(&self);
    fn stop_busy(&self);
    fn clear_output(&self);
    /// Store `plan` as the current result and render it with its actions.
    fn show_plan(&self, plan: &PlanResult);
    fn surprise_started(&self);
    fn surprise_arrived(&self, brief: &str);
    fn surprise_finished(&self);
    /// Blocking user-visible alert plus a diagnostic log entry.
    fn report_error(&self, alert: &str, error: &PlanError);
}

/// Runs `F` when dropped.
struct OnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> OnDrop<F> {
    fn new(f: F) -> Self {
        OnDrop(Some(f))
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

/// Submit the form and render the resulting plan.
///
/// Errors are reported through the view before being returned.
pub async fn submit_plan<T, V>(
    form: &FormState<T::File>,
    transport: &T,
    endpoints: &Endpoints,
    view: &V,
) -> Result<PlanResult, PlanError>
where
    T: PlanTransport,
    V: PlanView,
{
    view.set_actions_enabled(false);
    view.start_busy();
    let _cleanup = OnDrop::new(|| {
        view.set_actions_enabled(true);
        view.stop_busy();
    });

    let outcome = request_plan(form, transport, endpoints).await;
    match &outcome {
        Ok(plan) => {
            view.clear_output();
            view.show_plan(plan);
        }
        Err(e) => view.report_error(&e.alert_text(), e),
    }
    outcome
}

async fn request_plan<T: PlanTransport>(
    form: &FormState<T::File>,
    transport: &T,
    endpoints: &Endpoints,
) -> Result<PlanResult, PlanError> {
    let reply = match form.request()? {
        PlanRequest::Text(body) => transport.post_json(&endpoints.plans(), &body).await?,
        PlanRequest::Upload { route, file } => {
            transport.post_file(&route.url(endpoints), file).await?
        }
    };
    decode_plan(reply.status, &reply.body)
}

/// Fetch a random brief and put it into the text input.
pub async fn fetch_surprise<T, V>(
    transport: &T,
    endpoints: &Endpoints,
    view: &V,
) -> Result<SurpriseBrief, PlanError>
where
    T: PlanTransport,
    V: PlanView,
{
    view.set_actions_enabled(false);
    view.surprise_started();
    let _cleanup = OnDrop::new(|| {
        view.surprise_finished();
        view.set_actions_enabled(true);
    });

    let outcome = match transport.get(&endpoints.surprise()).await {
        Ok(reply) => decode_surprise(reply.status, &reply.body),
        Err(e) => Err(e),
    };
    match &outcome {
        Ok(brief) => view.surprise_arrived(&brief.brief),
        Err(e) => view.report_error(SURPRISE_FAILED, e),
    }
    outcome
}

/// Copy the plan to the clipboard as 2-space indented JSON.
pub async fn copy_plan<C: Clipboard>(plan: &PlanResult, clipboard: &C) -> Result<(), PlanError> {
    clipboard.write_text(&plan.pretty()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InputMode;
    use std::cell::RefCell;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    /// The fakes never suspend, so a single poll completes the future.
    fn run<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("fake future suspended"),
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    impl MediaFile for FakeFile {
        fn mime_type(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Debug, PartialEq)]
    enum Sent {
        Get(String),
        Json(String, String),
        File(String, &'static str),
    }

    struct FakeTransport {
        reply: Result<HttpReply, PlanError>,
        sent: RefCell<Vec<Sent>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: PlanError) -> Self {
            Self {
                reply: Err(err),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl PlanTransport for FakeTransport {
        type File = FakeFile;

        async fn get(&self, url: &str) -> Result<HttpReply, PlanError> {
            self.sent.borrow_mut().push(Sent::Get(url.to_string()));
            self.reply.clone()
        }

        async fn post_json(&self, url: &str, body: &PlanInput) -> Result<HttpReply, PlanError> {
            let body = serde_json::to_string(body)?;
            self.sent.borrow_mut().push(Sent::Json(url.to_string(), body));
            self.reply.clone()
        }

        async fn post_file(&self, url: &str, file: &FakeFile) -> Result<HttpReply, PlanError> {
            self.sent.borrow_mut().push(Sent::File(url.to_string(), file.0));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct FakeView {
        events: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
        enabled: RefCell<bool>,
        busy: RefCell<bool>,
    }

    impl FakeView {
        fn log(&self, event: impl Into<String>) {
            self.events.borrow_mut().push(event.into());
        }

        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }

        fn rendered(&self) -> bool {
            self.events().iter().any(|e| e.starts_with("show"))
        }
    }

    impl PlanView for FakeView {
        fn set_actions_enabled(&self, enabled: bool) {
            *self.enabled.borrow_mut() = enabled;
            self.log(format!("enabled={enabled}"));
        }
        fn start_busy(&self) {
            *self.busy.borrow_mut() = true;
            self.log("busy");
        }
        fn stop_busy(&self) {
            *self.busy.borrow_mut() = false;
            self.log("idle");
        }
        fn clear_output(&self) {
            self.log("clear");
        }
        fn show_plan(&self, plan: &PlanResult) {
            self.log(format!("show {}", plan.value()));
        }
        fn surprise_started(&self) {
            self.log("surprise-start");
        }
        fn surprise_arrived(&self, brief: &str) {
            self.log(format!("brief {brief}"));
        }
        fn surprise_finished(&self) {
            self.log("surprise-end");
        }
        fn report_error(&self, alert: &str, _error: &PlanError) {
            self.alerts.borrow_mut().push(alert.to_string());
            self.log("error");
        }
    }

    fn text_form(text: &str) -> FormState<FakeFile> {
        FormState {
            mode: InputMode::Text,
            text: text.to_string(),
            file: None,
        }
    }

    fn file_form(file: Option<FakeFile>) -> FormState<FakeFile> {
        FormState {
            mode: InputMode::File,
            text: String::new(),
            file,
        }
    }

    #[test]
    fn test_text_submission_sends_one_json_request() {
        let transport = FakeTransport::replying(200, r#"{"title":"T"}"#);
        let view = FakeView::default();
        let plan = run(submit_plan(
            &text_form("hello"),
            &transport,
            &Endpoints::default(),
            &view,
        ))
        .unwrap();

        assert_eq!(
            *transport.sent.borrow(),
            vec![Sent::Json("/plans".into(), r#"{"input":"hello"}"#.into())]
        );
        assert_eq!(plan.value()["title"], "T");
        assert_eq!(
            view.events(),
            vec![
                "enabled=false",
                "busy",
                "clear",
                r#"show {"title":"T"}"#,
                "enabled=true",
                "idle"
            ]
        );
    }

    #[test]
    fn test_file_mode_without_file_makes_no_request() {
        let transport = FakeTransport::replying(200, "{}");
        let view = FakeView::default();
        let err = run(submit_plan(
            &file_form(None),
            &transport,
            &Endpoints::default(),
            &view,
        ))
        .unwrap_err();

        assert_eq!(err, PlanError::Validation);
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(*view.alerts.borrow(), vec!["Error: No file selected."]);
        assert!(*view.enabled.borrow());
        assert!(!*view.busy.borrow());
    }

    #[test]
    fn test_uploads_route_by_mime() {
        for (mime, url) in [
            ("image/png", "/plans/from-image"),
            ("video/mp4", "/plans/from-video"),
            ("application/octet-stream", "/plans/from-video"),
        ] {
            let transport = FakeTransport::replying(200, "{}");
            let view = FakeView::default();
            run(submit_plan(
                &file_form(Some(FakeFile(mime))),
                &transport,
                &Endpoints::default(),
                &view,
            ))
            .unwrap();
            assert_eq!(*transport.sent.borrow(), vec![Sent::File(url.into(), mime)]);
        }
    }

    #[test]
    fn test_error_detail_alerted_without_rendering() {
        let transport = FakeTransport::replying(400, r#"{"detail":"bad input"}"#);
        let view = FakeView::default();
        let result = run(submit_plan(
            &text_form("x"),
            &transport,
            &Endpoints::default(),
            &view,
        ));

        assert!(result.is_err());
        assert_eq!(*view.alerts.borrow(), vec!["Error: bad input"]);
        assert!(!view.rendered());
        assert!(!view.events().contains(&"clear".to_string()));
        assert!(*view.enabled.borrow());
        assert!(!*view.busy.borrow());
    }

    #[test]
    fn test_network_failure_cleans_up() {
        let transport = FakeTransport::failing(PlanError::Network("offline".into()));
        let view = FakeView::default();
        let err = run(submit_plan(
            &text_form("x"),
            &transport,
            &Endpoints::new("http://api"),
            &view,
        ))
        .unwrap_err();

        assert!(matches!(err, PlanError::Network(_)));
        assert_eq!(
            *transport.sent.borrow(),
            vec![Sent::Json("http://api/plans".into(), r#"{"input":"x"}"#.into())]
        );
        assert_eq!(view.events().last().map(String::as_str), Some("idle"));
        assert!(*view.enabled.borrow());
    }

    #[test]
    fn test_cleanup_runs_when_future_dropped() {
        struct Stalled;
        impl PlanTransport for Stalled {
            type File = FakeFile;
            async fn get(&self, _: &str) -> Result<HttpReply, PlanError> {
                std::future::pending().await
            }
            async fn post_json(&self, _: &str, _: &PlanInput) -> Result<HttpReply, PlanError> {
                std::future::pending().await
            }
            async fn post_file(&self, _: &str, _: &FakeFile) -> Result<HttpReply, PlanError> {
                std::future::pending().await
            }
        }

        let view = FakeView::default();
        let form = text_form("x");
        let endpoints = Endpoints::default();
        let transport = Stalled;
        {
            let mut fut = Box::pin(submit_plan(&form, &transport, &endpoints, &view));
            let mut cx = Context::from_waker(Waker::noop());
            assert!(fut.as_mut().poll(&mut cx).is_pending());
            assert!(*view.busy.borrow());
        }
        assert!(!*view.busy.borrow());
        assert!(*view.enabled.borrow());
    }

    #[test]
    fn test_surprise_fills_text() {
        let transport = FakeTransport::replying(200, r#"{"brief":"A moon heist."}"#);
        let view = FakeView::default();
        let brief = run(fetch_surprise(&transport, &Endpoints::default(), &view)).unwrap();

        assert_eq!(brief.brief, "A moon heist.");
        assert_eq!(*transport.sent.borrow(), vec![Sent::Get("/surprise".into())]);
        assert_eq!(
            view.events(),
            vec![
                "enabled=false",
                "surprise-start",
                "brief A moon heist.",
                "surprise-end",
                "enabled=true"
            ]
        );
    }

    #[test]
    fn test_surprise_failure_alerts() {
        let transport = FakeTransport::replying(200, "not json");
        let view = FakeView::default();
        let result = run(fetch_surprise(&transport, &Endpoints::default(), &view));

        assert!(matches!(result, Err(PlanError::Parse(_))));
        assert_eq!(*view.alerts.borrow(), vec![SURPRISE_FAILED]);
        assert!(*view.enabled.borrow());
    }

    struct FakeClipboard {
        written: RefCell<Option<String>>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), PlanError> {
            if self.fail {
                return Err(PlanError::Clipboard("denied".into()));
            }
            *self.written.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_writes_pretty_json() {
        let clipboard = FakeClipboard {
            written: RefCell::new(None),
            fail: false,
        };
        let plan = PlanResult::new(serde_json::json!({"a": 1}));
        run(copy_plan(&plan, &clipboard)).unwrap();
        assert_eq!(
            clipboard.written.borrow().as_deref(),
            Some("{\n  \"a\": 1\n}")
        );
    }

    #[test]
    fn test_copy_failure_is_returned() {
        let clipboard = FakeClipboard {
            written: RefCell::new(None),
            fail: true,
        };
        let plan = PlanResult::new(serde_json::json!({}));
        let err = run(copy_plan(&plan, &clipboard)).unwrap_err();
        assert!(matches!(err, PlanError::Clipboard(_)));
    }
}
