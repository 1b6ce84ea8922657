//! Modal dialogs (timer finished alert)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    /// Show the oldest pending "timer finished" alert, one at a time.
    pub(crate) fn render_finished_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.pending_alerts.front() else {
            return;
        };
        let text = alert.message();
        let remaining = self.pending_alerts.len() - 1;

        let modal = egui::Modal::new(egui::Id::new("timer_finished_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(160))
            .frame(theme::modal_frame());
        let mut dismissed = false;
        let response = modal.show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::BELL_RINGING)
                        .size(36.0)
                        .color(theme::ACCENT),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&text).size(theme::FONT_HEADING).strong());
                if remaining > 0 {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("{} more waiting", remaining))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_DIM),
                    );
                }
                ui.add_space(theme::SPACING_XL);
                let ok = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok.clicked() {
                    dismissed = true;
                }
            });
        });
        if dismissed || response.should_close() {
            self.pending_alerts.pop_front();
        }
    }
}
