//! Endpoint and timing configuration.

/// Backend endpoints, all relative to one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Endpoints under `base`. An empty base keeps paths relative to the page.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn surprise(&self) -> String {
        self.join("/surprise")
    }

    pub fn plans(&self) -> String {
        self.join("/plans")
    }

    pub fn plans_from_image(&self) -> String {
        self.join("/plans/from-image")
    }

    pub fn plans_from_video(&self) -> String {
        self.join("/plans/from-video")
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new("")
    }
}

/// UI configuration: where to send requests and how fast things animate.
///
/// All durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub endpoints: Endpoints,
    /// Busy indicator ellipsis step.
    pub dots_interval_ms: u32,
    /// Placeholder prompt rotation.
    pub placeholder_interval_ms: u32,
    /// Maximum gap between icon clicks before the count resets.
    pub click_window_ms: u32,
    /// Icon clicks needed to swap the icon.
    pub clicks_to_toggle: u32,
    /// How long a confirmation label stays on a button.
    pub label_flash_ms: u32,
    /// Length of the icon animation after a surprise brief arrives.
    pub surprise_animation_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            dots_interval_ms: 500,
            placeholder_interval_ms: 5000,
            click_window_ms: 1000,
            clicks_to_toggle: 5,
            label_flash_ms: 1200,
            surprise_animation_ms: 600,
        }
    }
}

impl UiConfig {
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.endpoints = Endpoints::new(base);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_are_relative() {
        let e = Endpoints::default();
        assert_eq!(e.surprise(), "/surprise");
        assert_eq!(e.plans(), "/plans");
        assert_eq!(e.plans_from_image(), "/plans/from-image");
        assert_eq!(e.plans_from_video(), "/plans/from-video");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = UiConfig::default().with_base_url("http://localhost:8000/");
        assert_eq!(config.endpoints.plans(), "http://localhost:8000/plans");
    }
}
