//! Form input: mode selection, field visibility and request routing.

use crate::config::Endpoints;
use crate::error::PlanError;
use crate::plan::PlanInput;

/// Which input the form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl InputMode {
    /// Parse the select element's value. Anything other than `"file"` is text.
    pub fn from_select(value: &str) -> Self {
        if value == "file" {
            InputMode::File
        } else {
            InputMode::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::File => "file",
        }
    }

    pub fn visibility(self) -> Visibility {
        let text = self == InputMode::Text;
        Visibility {
            text_block: text,
            file_block: !text,
            surprise_button: text,
            clear_button: text,
        }
    }
}

/// Which form parts are shown for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub text_block: bool,
    pub file_block: bool,
    pub surprise_button: bool,
    pub clear_button: bool,
}

/// Media category derived from a declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

/// A file chosen in the file input.
pub trait MediaFile {
    /// Declared MIME type, possibly empty.
    fn mime_type(&self) -> String;
}

/// Backend endpoint a plan request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanRoute {
    Text,
    Image,
    Video,
}

impl PlanRoute {
    /// Uploads that are not images go to the video endpoint.
    pub fn for_upload(mime: &str) -> Self {
        match MediaKind::from_mime(mime) {
            MediaKind::Image => PlanRoute::Image,
            MediaKind::Video | MediaKind::Other => PlanRoute::Video,
        }
    }

    pub fn url(self, endpoints: &Endpoints) -> String {
        match self {
            PlanRoute::Text => endpoints.plans(),
            PlanRoute::Image => endpoints.plans_from_image(),
            PlanRoute::Video => endpoints.plans_from_video(),
        }
    }
}

/// The request a submission sends.
#[derive(Debug, PartialEq)]
pub enum PlanRequest<'a, F> {
    Text(PlanInput),
    Upload { route: PlanRoute, file: &'a F },
}

/// Form contents at the moment of submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub mode: InputMode,
    pub text: String,
    pub file: Option<F>,
}

impl<F: MediaFile> FormState<F> {
    /// Build the outbound request, failing in file mode without a file.
    pub fn request(&self) -> Result<PlanRequest<'_, F>, PlanError> {
        match self.mode {
            InputMode::Text => Ok(PlanRequest::Text(PlanInput {
                input: self.text.clone(),
            })),
            InputMode::File => {
                let file = self.file.as_ref().ok_or(PlanError::Validation)?;
                Ok(PlanRequest::Upload {
                    route: PlanRoute::for_upload(&file.mime_type()),
                    file,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Upload(&'static str);

    impl MediaFile for Upload {
        fn mime_type(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_mode_from_select() {
        assert_eq!(InputMode::from_select("file"), InputMode::File);
        assert_eq!(InputMode::from_select("text"), InputMode::Text);
        assert_eq!(InputMode::from_select("bogus"), InputMode::Text);
    }

    #[test]
    fn test_visibility_shows_exactly_one_block() {
        for mode in [InputMode::Text, InputMode::File] {
            let v = mode.visibility();
            assert_ne!(v.text_block, v.file_block);
        }
        let file = InputMode::File.visibility();
        assert!(!file.surprise_button && !file.clear_button);
    }

    #[test]
    fn test_media_kind() {
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Other);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Other);
    }

    #[test]
    fn test_text_request() {
        let form: FormState<Upload> = FormState {
            mode: InputMode::Text,
            text: "hello".to_string(),
            file: None,
        };
        assert_eq!(
            form.request().unwrap(),
            PlanRequest::Text(PlanInput {
                input: "hello".to_string()
            })
        );
    }

    #[test]
    fn test_file_mode_without_file_fails() {
        let form: FormState<Upload> = FormState {
            mode: InputMode::File,
            text: "ignored".to_string(),
            file: None,
        };
        assert_eq!(form.request().unwrap_err(), PlanError::Validation);
    }

    #[test]
    fn test_upload_routes() {
        let endpoints = Endpoints::default();
        let cases = [
            ("image/jpeg", "/plans/from-image"),
            ("video/webm", "/plans/from-video"),
            ("audio/mpeg", "/plans/from-video"),
        ];
        for (mime, url) in cases {
            let form = FormState {
                mode: InputMode::File,
                text: String::new(),
                file: Some(Upload(mime)),
            };
            match form.request().unwrap() {
                PlanRequest::Upload { route, .. } => assert_eq!(route.url(&endpoints), url),
                other => panic!("Expected upload, got {other:?}"),
            }
        }
    }
}
