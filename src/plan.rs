//! Plan results and the JSON shapes exchanged with the backend.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlanError;
use crate::highlight::highlight_value;

/// Heading rendered above a highlighted plan.
pub const PLAN_HEADING: &str = "Generated Plan";

/// Body of `POST /plans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    pub input: String,
}

/// Body of a `GET /surprise` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurpriseBrief {
    pub brief: String,
}

/// Error body returned with a non-success status.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Structured plan as produced by the planner backend.
///
/// Only `title` and `concept_summary` are required; the UI accepts any JSON
/// and uses this shape when the result happens to conform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativePlan {
    pub title: String,
    pub concept_summary: String,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub visual_style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub intended_platform: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    #[serde(default)]
    pub scene_ideas: Option<Vec<String>>,
}

impl CreativePlan {
    /// One-line summary such as `"Example Title - Playful, for TikTok"`.
    pub fn summary(&self) -> String {
        let mut summary = self.title.clone();
        let details: Vec<String> = [
            self.tone.clone(),
            self.intended_platform.as_ref().map(|p| format!("for {p}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            summary.push_str(" - ");
            summary.push_str(&details.join(", "));
        }
        summary
    }
}

/// A plan returned by the backend, kept as the raw JSON value.
///
/// Cloning is cheap; all clones share the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    value: Rc<Value>,
    highlighted: Rc<str>,
}

impl PlanResult {
    pub fn new(value: Value) -> Self {
        let highlighted = highlight_value(&value).into();
        Self {
            value: Rc::new(value),
            highlighted,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Highlighted HTML for the plan's code block.
    pub fn highlighted(&self) -> &str {
        &self.highlighted
    }

    /// 2-space indented JSON used for copy and download.
    pub fn pretty(&self) -> String {
        to_pretty_json(&self.value)
    }

    /// The plan as a downloadable JSON file stamped with `iso_timestamp`.
    pub fn download(&self, iso_timestamp: &str) -> Download {
        Download {
            file_name: download_file_name(iso_timestamp),
            contents: self.pretty(),
        }
    }

    /// Typed view of the plan when it has the planner's shape.
    pub fn creative_plan(&self) -> Option<CreativePlan> {
        CreativePlan::deserialize(self.value.as_ref()).ok()
    }
}

/// A file offered to the user for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub contents: String,
}

impl Download {
    pub const MIME_TYPE: &'static str = "application/json";
}

/// Serialize a value with 2-space indentation.
pub fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// File name for a downloaded plan, given an ISO-8601 timestamp such as
/// `2025-06-01T12:30:45.123Z`.
///
/// Colons and periods in the timestamp become dashes.
pub fn download_file_name(iso_timestamp: &str) -> String {
    let stamp: String = iso_timestamp
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("creative_plan_{stamp}.json")
}

/// Turn a raw HTTP reply into a plan.
///
/// A non-success status yields [`PlanError::Request`] carrying the server's
/// `detail`, or `"Unknown error"` when the body has none.
pub fn decode_plan(status: u16, body: &str) -> Result<PlanResult, PlanError> {
    if !(200..300).contains(&status) {
        return Err(PlanError::Request {
            status,
            message: error_detail(body),
        });
    }
    let value: Value = serde_json::from_str(body)?;
    Ok(PlanResult::new(value))
}

/// Turn a raw `/surprise` reply into a brief.
pub fn decode_surprise(status: u16, body: &str) -> Result<SurpriseBrief, PlanError> {
    if !(200..300).contains(&status) {
        return Err(PlanError::Request {
            status,
            message: error_detail(body),
        });
    }
    Ok(serde_json::from_str(body)?)
}

fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .unwrap_or_default()
        .detail;
    match detail {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Null) | None => "Unknown error".to_string(),
        Some(Value::String(_)) => "Unknown error".to_string(),
        Some(other) => other.to_string(),
    }
}
