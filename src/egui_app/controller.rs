//! Controller bridging the frozen model to the egui renderer.

use tracing::{info, warn};

use crate::egui_app::animation::AnimationSet;
use crate::egui_app::state::{PredictionView, StatusBarState, UiState};
use crate::model::artifact::ChurnModel;
use crate::model::validate;

/// Maintains app state and runs the prediction pipeline on user actions.
///
/// The classifier and animation handles are injected at startup and never
/// replaced; the controller only ever reads them.
pub struct AppController {
    /// View model consumed by the renderer.
    pub ui: UiState,
    model: ChurnModel,
    animations: AnimationSet,
}

impl AppController {
    /// Wrap the injected model and animation handles.
    pub fn new(model: ChurnModel, animations: AnimationSet) -> Self {
        let ui = UiState {
            status: StatusBarState::ready(model.tree_count()),
            ..UiState::default()
        };
        Self {
            ui,
            model,
            animations,
        }
    }

    /// Handle "Get Started": the one-way move to the prediction form.
    pub fn get_started(&mut self) {
        self.ui.screen.advance();
        info!("Session moved to the prediction form");
    }

    /// Handle "Predict": validate the form, then encode, scale, and
    /// classify. Invalid input surfaces one message and skips the model.
    pub fn predict(&mut self) {
        match validate::validate(&self.ui.form) {
            Ok(record) => {
                let label = self.model.predict(&record);
                info!(label = label.code(), "Prediction complete");
                self.ui.form_error = None;
                self.ui.result = Some(PredictionView::for_label(label));
            }
            Err(err) => {
                warn!("Prediction blocked: form incomplete");
                self.ui.result = None;
                self.ui.form_error = Some(err.to_string());
            }
        }
    }

    /// Animations keyed to the screens and outcomes.
    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }
}
