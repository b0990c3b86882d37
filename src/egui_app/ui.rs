//! egui renderer for the application UI.

/// Palette and visuals helpers.
pub mod style;

use eframe::egui::{self, Color32, Frame, Margin, RichText, Sense, Stroke, Ui, Vec2};

use crate::egui_app::animation::{AnimationSet, AnimationSpec};
use crate::egui_app::controller::AppController;
use crate::egui_app::state::Screen;
use crate::model::ChurnLabel;
use crate::model::artifact::ChurnModel;
use crate::model::fields::{Contract, InternetService, PaymentMethod, YesNo};

/// Smallest workable window size.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(520.0, 640.0);

const ANIMATION_HEIGHT: f32 = 200.0;
const COMBO_WIDTH: f32 = 220.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app around the injected model and animation handles.
    pub fn new(model: ChurnModel, animations: AnimationSet) -> Self {
        Self {
            controller: AppController::new(model, animations),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Customer Churn Prediction")
                            .color(palette.accent_ice)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                    ui.painter()
                        .circle_filled(badge_rect.center(), 6.0, status.badge_color);
                    ui.label(&status.badge_label);
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_start_screen(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading("Welcome to the Customer Churn Prediction App");
            ui.add_space(8.0);
            ui.label(
                "This application predicts whether a customer is likely to churn \
                 based on their account information. Click the button below to \
                 start the prediction process.",
            );
            ui.add_space(12.0);
            draw_animation(ui, &self.controller.animations().welcome, ANIMATION_HEIGHT);
            ui.add_space(12.0);
            if ui.button("Get Started").clicked() {
                self.controller.get_started();
            }
        });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_salt("prediction_form_scroll")
            .show(ui, |ui| {
                ui.add_space(8.0);
                let form = &mut self.controller.ui.form;
                choice_row(
                    ui,
                    "senior_citizen_combo",
                    "Is the customer a senior citizen?",
                    &YesNo::LABELS,
                    YesNo::from_label,
                    YesNo::label,
                    &mut form.senior_citizen,
                );
                choice_row(
                    ui,
                    "partner_combo",
                    "Does the customer have a partner?",
                    &YesNo::LABELS,
                    YesNo::from_label,
                    YesNo::label,
                    &mut form.partner,
                );
                choice_row(
                    ui,
                    "dependents_combo",
                    "Does the customer have any dependents?",
                    &YesNo::LABELS,
                    YesNo::from_label,
                    YesNo::label,
                    &mut form.dependents,
                );
                tenure_row(ui, &mut form.tenure);
                choice_row(
                    ui,
                    "online_security_combo",
                    "Does the customer have online security?",
                    &InternetService::LABELS,
                    InternetService::from_label,
                    InternetService::label,
                    &mut form.online_security,
                );
                choice_row(
                    ui,
                    "online_backup_combo",
                    "Does the customer have online backup?",
                    &InternetService::LABELS,
                    InternetService::from_label,
                    InternetService::label,
                    &mut form.online_backup,
                );
                choice_row(
                    ui,
                    "device_protection_combo",
                    "Does the customer have device protection?",
                    &InternetService::LABELS,
                    InternetService::from_label,
                    InternetService::label,
                    &mut form.device_protection,
                );
                choice_row(
                    ui,
                    "tech_support_combo",
                    "Does the customer have tech support?",
                    &InternetService::LABELS,
                    InternetService::from_label,
                    InternetService::label,
                    &mut form.tech_support,
                );
                choice_row(
                    ui,
                    "contract_combo",
                    "Enter the contract type of the customer",
                    &Contract::LABELS,
                    Contract::from_label,
                    Contract::label,
                    &mut form.contract,
                );
                choice_row(
                    ui,
                    "paperless_billing_combo",
                    "Is the billing paperless?",
                    &YesNo::LABELS,
                    YesNo::from_label,
                    YesNo::label,
                    &mut form.paperless_billing,
                );
                choice_row(
                    ui,
                    "payment_method_combo",
                    "Select the payment method",
                    &PaymentMethod::LABELS,
                    PaymentMethod::from_label,
                    PaymentMethod::label,
                    &mut form.payment_method,
                );
                charge_row(
                    ui,
                    "Enter the monthly charges of the customer",
                    &mut form.monthly_charges,
                );
                charge_row(
                    ui,
                    "Enter the total charges of the customer",
                    &mut form.total_charges,
                );

                ui.add_space(12.0);
                if ui.button("Predict").clicked() {
                    self.controller.predict();
                }
                ui.add_space(8.0);
                self.render_outcome(ui);
                ui.add_space(16.0);
            });
    }

    fn render_outcome(&mut self, ui: &mut Ui) {
        if let Some(error) = self.controller.ui.form_error.clone() {
            ui.colored_label(style::palette().warning, error);
            return;
        }
        let Some(result) = self.controller.ui.result.clone() else {
            return;
        };
        ui.label(RichText::new(&result.message).color(result.tone.color()).strong());
        ui.add_space(8.0);
        let spec = match result.label {
            ChurnLabel::Churns => self.controller.animations().churn.clone(),
            ChurnLabel::Stays => self.controller.animations().not_churn.clone(),
        };
        draw_animation(ui, &spec, ANIMATION_HEIGHT);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| match self.controller.ui.screen {
            Screen::Start => self.render_start_screen(ui),
            Screen::PredictionForm => self.render_form(ui),
        });
    }
}

/// One labeled dropdown with a blank unset option first.
fn choice_row<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    prompt: &str,
    labels: &[&'static str],
    parse: fn(&str) -> Option<T>,
    display: fn(T) -> &'static str,
    value: &mut Option<T>,
) {
    ui.horizontal(|ui| {
        ui.label(prompt);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(id.to_owned())
                .width(COMBO_WIDTH)
                .selected_text(value.map(display).unwrap_or(""))
                .show_ui(ui, |ui| {
                    if ui.selectable_label(value.is_none(), "").clicked() {
                        *value = None;
                    }
                    for label in labels {
                        let selected = value.map(display) == Some(*label);
                        if ui.selectable_label(selected, *label).clicked() {
                            *value = parse(label);
                        }
                    }
                });
        });
    });
    ui.add_space(4.0);
}

fn tenure_row(ui: &mut Ui, value: &mut u32) {
    ui.horizontal(|ui| {
        ui.label("Enter tenure (how long the customer has been with the company, in months)");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::DragValue::new(value).range(0..=u32::MAX));
        });
    });
    ui.add_space(4.0);
}

fn charge_row(ui: &mut Ui, prompt: &str, value: &mut f64) {
    ui.horizontal(|ui| {
        ui.label(prompt);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::DragValue::new(value)
                    .range(0.0..=f64::MAX)
                    .speed(0.5)
                    .max_decimals(2),
            );
        });
    });
    ui.add_space(4.0);
}

/// Paint one decorative ring animation into the current layout.
fn draw_animation(ui: &mut Ui, spec: &AnimationSpec, height: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    let seconds = ui.input(|i| i.time);
    let base = height * 0.5 - 8.0;
    for ring in &spec.rings {
        let radius = base * ring.radius * spec.pulse(ring, seconds);
        let color = Color32::from_rgb(ring.color[0], ring.color[1], ring.color[2]);
        painter.circle_stroke(rect.center(), radius, Stroke::new(ring.weight, color));
    }
    // Keep the pulse moving even without input events.
    ui.ctx().request_repaint();
}
