//! Unit converter tab

use super::App;
use crate::constants::INVALID_NUMBER_MESSAGE;
use crate::theme;
use crate::types::PanelMessage;
use crate::ui::components::{message_line, section_heading, unit_combo};
use crate::units::Unit;
use crate::utils::parse_quantity;
use eframe::egui;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct ConverterPanel {
    pub(crate) input: String,
    pub(crate) from: Unit,
    pub(crate) to: Unit,
    pub(crate) result: Option<PanelMessage>,
}

impl ConverterPanel {
    pub fn new(from: Unit, to: Unit) -> Self {
        Self {
            input: String::new(),
            from,
            to,
            result: None,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn result(&self) -> Option<&PanelMessage> {
        self.result.as_ref()
    }

    /// Convert the typed value and store the line to display.
    pub fn convert(&mut self) {
        let message = match parse_quantity(&self.input) {
            Ok(value) => {
                let converted = self.from.convert(self.to, value);
                debug!(value, from = %self.from, to = %self.to, converted, "Converted");
                PanelMessage::info(format!(
                    "Result: {} {} = {} {}",
                    value, self.from, converted, self.to
                ))
            }
            Err(e) => {
                warn!(error = %e, "Conversion input rejected");
                PanelMessage::error(INVALID_NUMBER_MESSAGE)
            }
        };
        self.result = Some(message);
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl App {
    pub(crate) fn render_converter_tab(&mut self, ui: &mut egui::Ui) {
        let panel = &mut self.converter_panel;

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "Convert");
            let mut submit = false;
            ui.horizontal(|ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut panel.input)
                        .hint_text("Amount")
                        .desired_width(theme::FIELD_WIDTH / 2.0),
                );
                submit |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                unit_combo(ui, "convert_from", &mut panel.from);
                if ui
                    .add(theme::button(egui_phosphor::regular::ARROWS_LEFT_RIGHT))
                    .on_hover_text("Swap units")
                    .clicked()
                {
                    panel.swap_units();
                }
                unit_combo(ui, "convert_to", &mut panel.to);

                submit |= ui
                    .add(theme::button_accent(format!(
                        "{}  Convert",
                        egui_phosphor::regular::SCALES
                    )))
                    .clicked();
            });
            if submit {
                panel.convert();
            }

            ui.add_space(theme::SPACING_MD);
            match &panel.result {
                Some(message) => message_line(ui, message),
                None => {
                    ui.label(egui::RichText::new("Result: ").color(theme::TEXT_DIM));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shows_converted_value() {
        let mut panel = ConverterPanel::new(Unit::Cup, Unit::Tablespoon);
        panel.input = "2".to_string();
        panel.convert();
        assert_eq!(
            panel.result,
            Some(PanelMessage::info("Result: 2 cup = 32 tablespoon"))
        );
    }

    #[test]
    fn non_numeric_input_shows_error() {
        let mut panel = ConverterPanel::new(Unit::Kg, Unit::G);
        panel.input = "two".to_string();
        panel.convert();
        assert_eq!(panel.result, Some(PanelMessage::error(INVALID_NUMBER_MESSAGE)));
    }

    #[test]
    fn swap_exchanges_units() {
        let mut panel = ConverterPanel::new(Unit::Lb, Unit::Oz);
        panel.swap_units();
        panel.input = "16".to_string();
        panel.convert();
        assert_eq!(panel.from, Unit::Oz);
        assert_eq!(
            panel.result.map(|m| m.text),
            Some("Result: 16 oz = 1 lb".to_string())
        );
    }
}
