//! Page state and the reducer that drives it.
//!
//! Everything the page shows lives in one [`PageState`]. Event handlers and
//! timers never touch the DOM directly; they send a [`PageAction`] and the
//! view re-renders from the new state.

use crate::config::UiConfig;
use crate::form::{InputMode, Visibility};
use crate::plan::PlanResult;
use crate::preview::PreviewSlot;

/// Prompts cycled through the text input's placeholder.
pub const PLACEHOLDER_PROMPTS: [&str; 5] = [
    "A jellyfish who does stand-up comedy.",
    "A detective film where the suspect is the moon.",
    "A haunted toaster who wants to be a chef.",
    "A cowboy lost in a futuristic shopping mall.",
    "Two raccoons run a late-night radio show.",
];

pub const SURPRISE_LABEL: &str = "Surprise Me";
pub const SURPRISE_LOADING_LABEL: &str = "Loading...";

/// Animated ellipsis on the busy indicator: `.`, `..`, `...`, `.`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipsis(u8);

impl Ellipsis {
    pub fn new() -> Self {
        Ellipsis(1)
    }

    pub fn tick(self) -> Self {
        Ellipsis(self.0 % 3 + 1)
    }

    pub fn dots(self) -> &'static str {
        &"..."[..self.0 as usize]
    }
}

impl Default for Ellipsis {
    fn default() -> Self {
        Self::new()
    }
}

/// The clickable icon in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    Robot,
    RobotBrother,
}

impl Icon {
    pub fn src(self) -> &'static str {
        match self {
            Icon::Robot => "/static/icons/robot.svg",
            Icon::RobotBrother => "/static/icons/robot_brother.svg",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Icon::Robot => Icon::RobotBrother,
            Icon::RobotBrother => Icon::Robot,
        }
    }
}

/// Temporary confirmation shown on an output action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flash {
    #[default]
    Idle,
    Done,
    Failed,
}

/// Output action buttons under a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    Copy,
    Download,
}

impl OutputAction {
    pub fn id(self) -> &'static str {
        match self {
            OutputAction::Copy => "copy-btn",
            OutputAction::Download => "download-btn",
        }
    }

    pub fn label(self, flash: Flash) -> &'static str {
        match (self, flash) {
            (OutputAction::Copy, Flash::Idle) => "Copy to Clipboard",
            (OutputAction::Copy, Flash::Done) => "✅ Copied!",
            (OutputAction::Copy, Flash::Failed) => "Copy failed",
            (OutputAction::Download, Flash::Idle) => "Download as JSON",
            (OutputAction::Download, Flash::Done) => "✅ Downloaded!",
            (OutputAction::Download, Flash::Failed) => "Download failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    SelectMode(InputMode),
    EditText(String),
    RotatePlaceholder,
    PreviewCleared,
    PreviewLoaded(PreviewSlot),
    SetActionsEnabled(bool),
    BusyStarted,
    BusyTick,
    BusyStopped,
    ClearOutput,
    ShowPlan(PlanResult),
    /// The "Clear" button: empty the text input and drop rendered output.
    Clear,
    SurpriseStarted,
    SurpriseArrived(String),
    SurpriseFinished,
    SurpriseAnimationEnded,
    HoverGenerate(bool),
    IconClicked,
    IconClicksExpired,
    Flashed(OutputAction, Flash),
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub mode: InputMode,
    pub text: String,
    pub placeholder: &'static str,
    next_placeholder: usize,
    pub actions_enabled: bool,
    /// `Some` while a submission is in flight.
    pub busy: Option<Ellipsis>,
    pub surprise_loading: bool,
    pub preview: PreviewSlot,
    /// Last successful result; output actions read this.
    pub plan: Option<PlanResult>,
    /// Plan currently rendered below the form, if any.
    pub output: Option<PlanResult>,
    pub copy_flash: Flash,
    pub download_flash: Flash,
    pub icon: Icon,
    icon_clicks: u32,
    clicks_to_toggle: u32,
    pub hovering_generate: bool,
    pub surprised: bool,
}

impl PageState {
    pub fn new(config: &UiConfig) -> Self {
        let mut state = Self {
            mode: InputMode::Text,
            text: String::new(),
            placeholder: "",
            next_placeholder: 0,
            actions_enabled: true,
            busy: None,
            surprise_loading: false,
            preview: PreviewSlot::Empty,
            plan: None,
            output: None,
            copy_flash: Flash::Idle,
            download_flash: Flash::Idle,
            icon: Icon::Robot,
            icon_clicks: 0,
            clicks_to_toggle: config.clicks_to_toggle.max(1),
            hovering_generate: false,
            surprised: false,
        };
        state.rotate_placeholder();
        state
    }

    pub fn visibility(&self) -> Visibility {
        self.mode.visibility()
    }

    pub fn surprise_label(&self) -> &'static str {
        if self.surprise_loading {
            SURPRISE_LOADING_LABEL
        } else {
            SURPRISE_LABEL
        }
    }

    pub fn flash(&self, action: OutputAction) -> Flash {
        match action {
            OutputAction::Copy => self.copy_flash,
            OutputAction::Download => self.download_flash,
        }
    }

    /// CSS classes for the header icon.
    pub fn icon_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["robot-icon"];
        if self.hovering_generate {
            classes.push("robot-hover-animate");
        }
        if self.surprised {
            classes.push("robot-surprise");
        }
        classes
    }

    fn rotate_placeholder(&mut self) {
        if self.mode != InputMode::Text {
            return;
        }
        self.placeholder = PLACEHOLDER_PROMPTS[self.next_placeholder];
        self.next_placeholder = (self.next_placeholder + 1) % PLACEHOLDER_PROMPTS.len();
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::SelectMode(mode) => self.mode = mode,
            PageAction::EditText(text) => self.text = text,
            PageAction::RotatePlaceholder => self.rotate_placeholder(),
            PageAction::PreviewCleared => self.preview = PreviewSlot::Empty,
            PageAction::PreviewLoaded(slot) => self.preview = slot,
            PageAction::SetActionsEnabled(enabled) => self.actions_enabled = enabled,
            PageAction::BusyStarted => self.busy = Some(Ellipsis::new()),
            PageAction::BusyTick => self.busy = self.busy.map(Ellipsis::tick),
            PageAction::BusyStopped => self.busy = None,
            PageAction::ClearOutput => self.output = None,
            PageAction::ShowPlan(plan) => {
                self.plan = Some(plan.clone());
                self.output = Some(plan);
                self.copy_flash = Flash::Idle;
                self.download_flash = Flash::Idle;
            }
            PageAction::Clear => {
                self.text.clear();
                self.output = None;
            }
            PageAction::SurpriseStarted => self.surprise_loading = true,
            PageAction::SurpriseArrived(brief) => {
                self.text = brief;
                self.surprised = true;
            }
            PageAction::SurpriseFinished => self.surprise_loading = false,
            PageAction::SurpriseAnimationEnded => self.surprised = false,
            PageAction::HoverGenerate(hovering) => self.hovering_generate = hovering,
            PageAction::IconClicked => {
                self.icon_clicks += 1;
                if self.icon_clicks >= self.clicks_to_toggle {
                    self.icon = self.icon.toggled();
                    self.icon_clicks = 0;
                }
            }
            PageAction::IconClicksExpired => self.icon_clicks = 0,
            PageAction::Flashed(OutputAction::Copy, flash) => self.copy_flash = flash,
            PageAction::Flashed(OutputAction::Download, flash) => self.download_flash = flash,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
