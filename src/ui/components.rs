//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::{PanelMessage, Tab};
use crate::units::Unit;
use eframe::egui;

/// Tab strip button. Returns true if clicked.
pub fn tab_button(ui: &mut egui::Ui, tab: Tab, active: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(theme::TAB_WIDTH, theme::TAB_HEIGHT),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if ui.is_rect_visible(rect) {
        let base = if active { theme::BG_SURFACE } else { theme::BG_ELEVATED };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        if active {
            let underline = egui::Rect::from_min_max(
                egui::pos2(draw_rect.left(), draw_rect.bottom() - 2.0),
                draw_rect.right_bottom(),
            );
            ui.painter().rect_filled(underline, 0.0, theme::ACCENT);
        }
        let color = if active { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED };
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  {}", tab.icon(), tab.title()),
            egui::FontId::proportional(theme::FONT_LABEL),
            color,
        );
    }
    response.clicked()
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::ACCENT),
        )
        .selectable(false),
    );
    ui.add_space(2.0);
}

/// Label + single-line text field on one row
pub fn labeled_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    width: f32,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.add_sized(
            [80.0, theme::ROW_HEIGHT - 8.0],
            egui::Label::new(egui::RichText::new(label).color(theme::TEXT_MUTED)),
        );
        ui.add(egui::TextEdit::singleline(value).desired_width(width))
    })
    .inner
}

/// Combo box over every unit in table order
pub fn unit_combo(ui: &mut egui::Ui, id: &str, selected: &mut Unit) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .width(120.0)
        .show_ui(ui, |ui| {
            for unit in Unit::ALL {
                changed |= ui
                    .selectable_value(selected, unit, unit.as_str())
                    .changed();
            }
        });
    changed
}

/// A result or log line, coloured by severity
pub fn message_line(ui: &mut egui::Ui, message: &PanelMessage) {
    let (icon, color) = if message.is_error() {
        (egui_phosphor::regular::WARNING, theme::STATUS_ERROR)
    } else {
        (egui_phosphor::regular::INFO, theme::TEXT_SECONDARY)
    };
    ui.add(
        egui::Label::new(egui::RichText::new(format!("{}  {}", icon, message.text)).color(color))
            .wrap(),
    );
}

/// Read-only multi-line text block with a scroll area
pub fn text_block(ui: &mut egui::Ui, id: &str, text: &str, height: f32) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(egui::Label::new(egui::RichText::new(text).size(theme::FONT_BODY)).wrap());
        });
}
