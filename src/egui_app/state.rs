//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::ui::style;
use crate::model::ChurnLabel;
use crate::model::validate::RawInput;

/// Which screen the session shows.
///
/// The only transition is Start → PredictionForm, fired by "Get Started";
/// nothing moves the session back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Welcome screen with the "Get Started" action.
    #[default]
    Start,
    /// The prediction form.
    PredictionForm,
}

impl Screen {
    /// Fire the one-way "Get Started" transition.
    pub fn advance(&mut self) {
        *self = Self::PredictionForm;
    }

    /// Whether the session is still on the welcome screen.
    pub fn is_start(self) -> bool {
        self == Self::Start
    }
}

/// Tone of the result line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    /// Churn predicted.
    Warning,
    /// No churn predicted.
    Success,
}

impl ResultTone {
    /// Text color for this tone.
    pub fn color(self) -> Color32 {
        let palette = style::palette();
        match self {
            Self::Warning => palette.warning,
            Self::Success => palette.success,
        }
    }
}

/// Outcome shown after a successful prediction.
#[derive(Clone, Debug)]
pub struct PredictionView {
    /// The classifier's label.
    pub label: ChurnLabel,
    /// Single-line message shown to the user.
    pub message: String,
    /// Warning for churn, success for not-churn.
    pub tone: ResultTone,
}

impl PredictionView {
    /// Build the view for a classifier outcome.
    pub fn for_label(label: ChurnLabel) -> Self {
        match label {
            ChurnLabel::Churns => Self {
                label,
                message: "The customer is likely to churn.".into(),
                tone: ResultTone::Warning,
            },
            ChurnLabel::Stays => Self {
                label,
                message: "The customer is not likely to churn.".into(),
                tone: ResultTone::Success,
            },
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Footer message.
    pub text: String,
    /// Badge label next to the dot.
    pub badge_label: String,
    /// Badge dot color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Footer state once the artifact is loaded.
    pub fn ready(tree_count: usize) -> Self {
        Self {
            text: format!("Classifier loaded ({tree_count} trees)"),
            badge_label: "Ready".into(),
            badge_color: style::palette().success,
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Loading".into(),
            badge_label: "Idle".into(),
            badge_color: style::palette().text_muted,
        }
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Current screen of this session.
    pub screen: Screen,
    /// Form widget state, rebuilt into a record on every Predict.
    pub form: RawInput,
    /// Last successful prediction, if any.
    pub result: Option<PredictionView>,
    /// Validation message blocking the last Predict, if any.
    pub form_error: Option<String>,
    /// Footer status.
    pub status: StatusBarState,
}
