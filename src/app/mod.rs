//! App module - contains the main application state and logic

mod converter;
mod modals;
mod recipes;
mod timers;

pub use converter::ConverterPanel;
pub use recipes::RecipePanel;
pub use timers::{TimerAction, TimerPanel};

use crate::constants::APP_VERSION;
use crate::recipes::RecipeStore;
use crate::settings::Settings;
use crate::theme;
use crate::timer::TimerFinished;
use crate::types::Tab;
use crate::ui::components::tab_button;
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) active_tab: Tab,
    // The single recipe store; panels borrow it
    pub(crate) recipes: RecipeStore,
    pub(crate) recipe_panel: RecipePanel,
    pub(crate) timer_panel: TimerPanel,
    pub(crate) converter_panel: ConverterPanel,
    // Finished-timer alerts waiting to be shown, oldest first
    pub(crate) pending_alerts: VecDeque<TimerFinished>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::from_settings(settings, data_dir)
    }

    /// Build the app state without a window
    pub fn from_settings(settings: Settings, data_dir: PathBuf) -> Self {
        let recipes = RecipeStore::seeded();
        let recipe_panel = RecipePanel::new(&recipes);
        let (from, to) = settings.converter_units();

        Self {
            active_tab: settings.last_tab,
            recipes,
            recipe_panel,
            timer_panel: TimerPanel::default(),
            converter_panel: ConverterPanel::new(from, to),
            pending_alerts: VecDeque::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Center the window on the first frame (no saved position)
    pub fn center_on_first_frame(mut self, center: bool) -> Self {
        self.needs_center = center;
        self
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_tab: self.active_tab,
            convert_from: self.converter_panel.from.as_str().to_string(),
            convert_to: self.converter_panel.to.as_str().to_string(),
        };
        settings.save(&self.data_dir);
    }

    /// Advance every timer to `now`, queue alerts for the ones that finished,
    /// and return how long the UI may wait before the next tick is due.
    pub fn poll_timers(&mut self, now: Instant) -> Option<Duration> {
        for event in self.timer_panel.poll(now) {
            info!(name = %event.name, "Queueing finished alert");
            self.pending_alerts.push_back(event);
        }
        self.timer_panel.next_tick_in(now)
    }
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Timers tick on this thread, between frames
        if let Some(wait) = self.poll_timers(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("tab_strip")
            .exact_height(theme::TAB_HEIGHT + theme::SPACING_LG * 2.0)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    for tab in Tab::ALL {
                        if tab_button(ui, tab, self.active_tab == tab) {
                            self.active_tab = tab;
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("v{}", APP_VERSION))
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| match self.active_tab {
                Tab::Recipes => self.render_recipes_tab(ui),
                Tab::Timers => self.render_timers_tab(ui),
                Tab::UnitConverter => self.render_converter_tab(ui),
            });

        self.render_finished_alert(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        App::from_settings(Settings::default(), dir.path().to_path_buf())
    }

    #[test]
    fn restores_tab_and_units_from_settings() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            last_tab: Tab::Timers,
            convert_from: "qt".to_string(),
            convert_to: "ml".to_string(),
            ..Settings::default()
        };
        let app = App::from_settings(settings, dir.path().to_path_buf());
        assert_eq!(app.active_tab, Tab::Timers);
        assert_eq!(app.converter_panel.from, Unit::Qt);
        assert_eq!(app.converter_panel.to, Unit::Ml);
    }

    #[test]
    fn finished_timers_queue_alerts_in_order() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let t0 = Instant::now();

        for (name, secs) in [("Soup", "3"), ("Toast", "1")] {
            app.timer_panel.set_inputs(name, "0", "0", secs);
            app.timer_panel.add_timer(t0).unwrap();
        }

        assert_eq!(app.poll_timers(t0), Some(Duration::from_secs(1)));
        app.poll_timers(t0 + Duration::from_secs(1));
        let wait = app.poll_timers(t0 + Duration::from_secs(3));
        assert_eq!(wait, None);

        let names: Vec<_> = app.pending_alerts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Toast", "Soup"]);
    }

    #[test]
    fn save_settings_persists_ui_state() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.active_tab = Tab::UnitConverter;
        app.converter_panel.swap_units();
        app.window_size = Some(egui::vec2(900.0, 650.0));
        app.save_settings();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.last_tab, Tab::UnitConverter);
        assert_eq!(loaded.converter_units(), (Unit::Tablespoon, Unit::Cup));
        assert_eq!(loaded.window_w, Some(900.0));
    }
}
