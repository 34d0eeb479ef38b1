//! # creative-agent
//!
//! Browser-independent core of the Creative Agent form: a creative brief
//! (text, an image, or a video) goes to the planning backend, and the JSON
//! plan that comes back is rendered as syntax-highlighted HTML with copy and
//! download actions.
//!
//! ## Overview
//!
//! - **Form** ([`form`]): input mode, field visibility, request routing
//! - **Pipeline** ([`pipeline`]): submit / surprise flows over the
//!   [`PlanTransport`] and [`PlanView`] seams
//! - **Highlighter** ([`highlight`]): JSON to class-tagged HTML spans
//! - **Page state** ([`page`]): one reducer for everything the page shows
//!
//! ## Example
//!
//! ```
//! use creative_agent::{PlanResult, highlight_json};
//! use serde_json::json;
//!
//! let plan = PlanResult::new(json!({"title": "Gravity Shoes", "tone": null}));
//! assert!(plan.highlighted().contains(r#"<span class="json-key">"title":</span>"#));
//! assert_eq!(
//!     highlight_json("true"),
//!     r#"<span class="json-boolean">true</span>"#
//! );
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod highlight;
pub mod page;
pub mod pipeline;
pub mod plan;
pub mod preview;
pub mod render;

pub use config::{Endpoints, UiConfig};
pub use error::PlanError;
pub use form::{FormState, InputMode, MediaFile, MediaKind, PlanRequest, PlanRoute, Visibility};
pub use highlight::{Segment, TokenKind, highlight_json, highlight_value, tokenize};
pub use page::{Ellipsis, Flash, Icon, OutputAction, PageAction, PageState};
pub use pipeline::{Clipboard, HttpReply, PlanTransport, PlanView, copy_plan, fetch_surprise, submit_plan};
pub use plan::{
    CreativePlan, Download, PLAN_HEADING, PlanInput, PlanResult, SurpriseBrief, download_file_name,
    to_pretty_json,
};
pub use preview::PreviewSlot;
pub use render::{plan_document, plan_fragment};
