//! Recipes tab: browse, add and extend recipes

use super::App;
use crate::recipes::RecipeStore;
use crate::theme;
use crate::types::PanelMessage;
use crate::ui::components::{labeled_field, message_line, section_heading, text_block};
use eframe::egui;
use tracing::debug;

/// Display state of the recipes tab. The store itself lives on [`App`].
#[derive(Debug, Default)]
pub struct RecipePanel {
    pub(crate) selected: Option<String>,
    pub(crate) viewed: Option<String>,
    pub(crate) ingredients_text: String,
    pub(crate) steps_text: String,
    pub(crate) new_recipe_name: String,
    pub(crate) new_ingredient: String,
    pub(crate) new_measurement: String,
    pub(crate) new_step: String,
    pub(crate) message: Option<PanelMessage>,
}

impl RecipePanel {
    pub fn new(store: &RecipeStore) -> Self {
        Self {
            selected: store.list().first().map(|s| s.to_string()),
            ..Self::default()
        }
    }

    /// Show the selected recipe's ingredients and steps.
    pub fn view_selected(&mut self, store: &RecipeStore) {
        let Some(name) = self.selected.clone() else {
            return;
        };
        match store.get(&name) {
            Ok(recipe) => {
                self.ingredients_text = recipe.ingredients_text();
                self.steps_text = recipe.steps_text();
                self.viewed = Some(name);
                self.message = None;
            }
            Err(e) => self.message = Some(PanelMessage::error(e.to_string())),
        }
    }

    /// Add a recipe named after the text field. Empty or duplicate names are
    /// ignored without a message; returns whether a recipe was added.
    pub fn add_recipe(&mut self, store: &mut RecipeStore) -> bool {
        let name = self.new_recipe_name.trim().to_string();
        match store.add(&name) {
            Ok(()) => {
                self.new_recipe_name.clear();
                self.selected = Some(name);
                self.view_selected(store);
                true
            }
            Err(e) => {
                debug!(error = %e, "Recipe not added");
                false
            }
        }
    }

    pub fn add_ingredient(&mut self, store: &mut RecipeStore) {
        let Some(name) = self.selected.clone() else {
            return;
        };
        let item = self.new_ingredient.trim().to_string();
        let measurement = self.new_measurement.trim().to_string();
        match store.add_ingredient(&name, &item, &measurement) {
            Ok(()) => {
                self.new_ingredient.clear();
                self.new_measurement.clear();
                self.view_selected(store);
            }
            Err(e) => self.message = Some(PanelMessage::error(e.to_string())),
        }
    }

    pub fn add_step(&mut self, store: &mut RecipeStore) {
        let Some(name) = self.selected.clone() else {
            return;
        };
        let step = self.new_step.trim().to_string();
        match store.add_step(&name, &step) {
            Ok(()) => {
                self.new_step.clear();
                self.view_selected(store);
            }
            Err(e) => self.message = Some(PanelMessage::error(e.to_string())),
        }
    }
}

impl App {
    pub(crate) fn render_recipes_tab(&mut self, ui: &mut egui::Ui) {
        let Self {
            recipes,
            recipe_panel: panel,
            ..
        } = self;

        // Picker row
        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "Recipe");
            ui.horizontal(|ui| {
                let selected_text = panel.selected.clone().unwrap_or_default();
                egui::ComboBox::from_id_salt("recipe_picker")
                    .selected_text(selected_text)
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for name in recipes.list() {
                            ui.selectable_value(&mut panel.selected, Some(name.to_string()), name);
                        }
                    });
                let view = ui.add(theme::button_accent(format!(
                    "{}  View Recipe",
                    egui_phosphor::regular::EYE
                )));
                if view.clicked() {
                    panel.view_selected(recipes);
                }
            });
        });

        ui.add_space(theme::SPACING_MD);

        // Ingredients and steps side by side
        let block_height = (ui.available_height() - 200.0).max(120.0);
        ui.columns(2, |cols| {
            theme::section_frame().show(&mut cols[0], |ui| {
                ui.set_min_width(ui.available_width());
                text_block(ui, "ingredients_text", &panel.ingredients_text, block_height);
            });
            theme::section_frame().show(&mut cols[1], |ui| {
                ui.set_min_width(ui.available_width());
                text_block(ui, "steps_text", &panel.steps_text, block_height);
            });
        });

        ui.add_space(theme::SPACING_MD);

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "Edit");
            ui.horizontal(|ui| {
                let resp = labeled_field(ui, "New Recipe", &mut panel.new_recipe_name, theme::FIELD_WIDTH);
                let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let add = ui.add(theme::button(format!(
                    "{}  Add New Recipe",
                    egui_phosphor::regular::PLUS
                )));
                if add.clicked() || enter {
                    panel.add_recipe(recipes);
                }
            });

            let editing = panel.selected.clone().unwrap_or_default();
            ui.horizontal(|ui| {
                labeled_field(ui, "Ingredient", &mut panel.new_ingredient, theme::FIELD_WIDTH);
                labeled_field(ui, "Measurement", &mut panel.new_measurement, 100.0);
                let add = ui
                    .add(theme::button(format!("{}  Add Ingredient", egui_phosphor::regular::PLUS)))
                    .on_hover_text(format!("Add to {editing}"));
                if add.clicked() {
                    panel.add_ingredient(recipes);
                }
            });
            ui.horizontal(|ui| {
                labeled_field(ui, "Step", &mut panel.new_step, theme::FIELD_WIDTH * 2.0);
                let add = ui
                    .add(theme::button(format!("{}  Add Step", egui_phosphor::regular::PLUS)))
                    .on_hover_text(format!("Add to {editing}"));
                if add.clicked() {
                    panel.add_step(recipes);
                }
            });

            if let Some(message) = &panel.message {
                ui.add_space(theme::SPACING_SM);
                message_line(ui, message);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_first_recipe() {
        let store = RecipeStore::seeded();
        let panel = RecipePanel::new(&store);
        assert_eq!(panel.selected.as_deref(), Some("Fried Rice"));
        assert!(panel.ingredients_text.is_empty());
    }

    #[test]
    fn view_renders_both_lists() {
        let store = RecipeStore::seeded();
        let mut panel = RecipePanel::new(&store);
        panel.selected = Some("Omelette".to_string());
        panel.view_selected(&store);
        assert!(panel.ingredients_text.starts_with("Ingredients:\nEggs: 3\n"));
        assert!(panel.steps_text.ends_with("Serve hot."));
        assert_eq!(panel.viewed.as_deref(), Some("Omelette"));
    }

    #[test]
    fn add_recipe_selects_it_and_clears_field() {
        let mut store = RecipeStore::seeded();
        let mut panel = RecipePanel::new(&store);
        panel.new_recipe_name = "  Shakshuka ".to_string();
        assert!(panel.add_recipe(&mut store));
        assert!(panel.new_recipe_name.is_empty());
        assert_eq!(panel.selected.as_deref(), Some("Shakshuka"));
        assert_eq!(panel.ingredients_text, "Ingredients:\n");
        assert!(store.contains("Shakshuka"));
    }

    #[test]
    fn add_recipe_silently_ignores_empty_and_duplicates() {
        let mut store = RecipeStore::seeded();
        let mut panel = RecipePanel::new(&store);

        panel.new_recipe_name = "   ".to_string();
        assert!(!panel.add_recipe(&mut store));

        panel.new_recipe_name = "Pancakes".to_string();
        assert!(!panel.add_recipe(&mut store));
        assert_eq!(panel.new_recipe_name, "Pancakes");
        assert!(panel.message.is_none());
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn editing_refreshes_the_view() {
        let mut store = RecipeStore::seeded();
        let mut panel = RecipePanel::new(&store);
        panel.new_recipe_name = "Tea".to_string();
        panel.add_recipe(&mut store);

        panel.new_ingredient = "Water".to_string();
        panel.new_measurement = "1 cup".to_string();
        panel.add_ingredient(&mut store);
        panel.new_step = "Boil water.".to_string();
        panel.add_step(&mut store);

        assert_eq!(panel.ingredients_text, "Ingredients:\nWater: 1 cup");
        assert_eq!(panel.steps_text, "Steps:\nBoil water.");
        assert!(panel.new_ingredient.is_empty());
        assert!(panel.new_step.is_empty());
    }

    #[test]
    fn blank_ingredient_shows_error() {
        let mut store = RecipeStore::seeded();
        let mut panel = RecipePanel::new(&store);
        panel.new_ingredient = "Salt".to_string();
        panel.add_ingredient(&mut store);
        let message = panel.message.unwrap();
        assert!(message.is_error());
        assert_eq!(message.text, "Measurement must not be empty");
    }
}
