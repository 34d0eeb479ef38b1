//! Media preview slot.

use std::rc::Rc;

use crate::form::MediaKind;

/// The single preview shown under the file input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewSlot {
    #[default]
    Empty,
    Image(Rc<str>),
    Video(Rc<str>),
}

impl PreviewSlot {
    /// Preview for a file that finished loading as a data URL.
    ///
    /// Types that are neither image nor video leave the slot empty.
    pub fn from_data_url(mime: &str, data_url: String) -> Self {
        match MediaKind::from_mime(mime) {
            MediaKind::Image => PreviewSlot::Image(data_url.into()),
            MediaKind::Video => PreviewSlot::Video(data_url.into()),
            MediaKind::Other => PreviewSlot::Empty,
        }
    }

    pub fn image_src(&self) -> Option<&str> {
        match self {
            PreviewSlot::Image(src) => Some(src.as_ref()),
            _ => None,
        }
    }

    pub fn video_src(&self) -> Option<&str> {
        match self {
            PreviewSlot::Video(src) => Some(src.as_ref()),
            _ => None,
        }
    }
}
