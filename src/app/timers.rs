//! Timers tab: create countdown timers and drive their ticks

use super::App;
use crate::constants::{INVALID_TIME_MESSAGE, TIMER_LOG_CAPACITY};
use crate::error::Result;
use crate::theme;
use crate::timer::{CountdownTimer, TimerFinished, TimerStatus};
use crate::types::PanelMessage;
use crate::ui::components::{labeled_field, message_line, section_heading};
use crate::utils::{parse_duration_field, timestamp};
use eframe::egui;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::warn;

/// Per-row button pressed in the timer table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Start,
    Stop,
    Reset,
    Remove,
}

#[derive(Debug, Default)]
pub struct TimerPanel {
    pub(crate) name_input: String,
    pub(crate) hours_input: String,
    pub(crate) minutes_input: String,
    pub(crate) seconds_input: String,
    pub(crate) timers: Vec<CountdownTimer>,
    /// (wall-clock stamp, line), oldest first
    pub(crate) log: VecDeque<(String, PanelMessage)>,
}

impl TimerPanel {
    pub fn timers(&self) -> &[CountdownTimer] {
        &self.timers
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &PanelMessage> {
        self.log.iter().map(|(_, m)| m)
    }

    /// Fill the form as if typed into the four fields.
    pub fn set_inputs(&mut self, name: &str, hours: &str, minutes: &str, seconds: &str) {
        self.name_input = name.to_string();
        self.hours_input = hours.to_string();
        self.minutes_input = minutes.to_string();
        self.seconds_input = seconds.to_string();
    }

    fn push_log(&mut self, message: PanelMessage) {
        if self.log.len() >= TIMER_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back((timestamp(), message));
    }

    fn timer_from_inputs(&self) -> Result<CountdownTimer> {
        let hours = parse_duration_field(&self.hours_input)?;
        let minutes = parse_duration_field(&self.minutes_input)?;
        let seconds = parse_duration_field(&self.seconds_input)?;
        CountdownTimer::new(self.name_input.clone(), hours, minutes, seconds)
    }

    /// Build a timer from the form, start it and log the outcome.
    pub fn add_timer(&mut self, now: Instant) -> Result<()> {
        match self.timer_from_inputs() {
            Ok(mut timer) => {
                timer.start_at(now);
                self.push_log(PanelMessage::info(format!(
                    "Added Timer: {} ({})",
                    timer.name(),
                    timer.formatted_remaining()
                )));
                self.timers.push(timer);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected timer input");
                self.push_log(PanelMessage::error(INVALID_TIME_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn apply(&mut self, index: usize, action: TimerAction, now: Instant) {
        if index >= self.timers.len() {
            return;
        }
        match action {
            TimerAction::Start => self.timers[index].start_at(now),
            TimerAction::Stop => self.timers[index].stop(),
            TimerAction::Reset => self.timers[index].reset(),
            TimerAction::Remove => {
                let timer = self.timers.remove(index);
                self.push_log(PanelMessage::info(format!("Removed Timer: {}", timer.name())));
            }
        }
    }

    /// Run due ticks on every timer. Returns the timers that finished, in
    /// list order, each already logged.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerFinished> {
        let finished: Vec<TimerFinished> = self
            .timers
            .iter_mut()
            .filter_map(|timer| timer.poll(now))
            .collect();
        for event in &finished {
            self.push_log(PanelMessage::info(event.message()));
        }
        finished
    }

    /// Soonest upcoming tick across all running timers
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timers
            .iter()
            .filter_map(|t| t.time_until_next_tick(now))
            .min()
    }
}

impl App {
    pub(crate) fn render_timers_tab(&mut self, ui: &mut egui::Ui) {
        let panel = &mut self.timer_panel;
        let now = Instant::now();

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "New Timer");
            labeled_field(ui, "Timer Name", &mut panel.name_input, theme::FIELD_WIDTH);
            ui.horizontal(|ui| {
                labeled_field(ui, "Hours", &mut panel.hours_input, theme::NUMBER_FIELD_WIDTH);
                labeled_field(ui, "Minutes", &mut panel.minutes_input, theme::NUMBER_FIELD_WIDTH);
                labeled_field(ui, "Seconds", &mut panel.seconds_input, theme::NUMBER_FIELD_WIDTH);
            });
            ui.add_space(theme::SPACING_SM);
            let add = ui.add(theme::button_accent(format!(
                "{}  Add Timer",
                egui_phosphor::regular::PLUS
            )));
            if add.clicked() {
                // Failure is already in the log
                let _ = panel.add_timer(now);
            }
        });

        ui.add_space(theme::SPACING_MD);

        let mut pending: Option<(usize, TimerAction)> = None;
        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "Timers");
            if panel.timers.is_empty() {
                ui.label(egui::RichText::new("No timers yet").color(theme::TEXT_DIM));
                return;
            }

            use egui_extras::{Column, TableBuilder};
            TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .max_scroll_height(220.0)
                .column(Column::remainder().at_least(120.0).clip(true))
                .column(Column::exact(110.0))
                .column(Column::exact(80.0))
                .column(Column::exact(220.0))
                .body(|body| {
                    body.rows(theme::ROW_HEIGHT, panel.timers.len(), |mut row| {
                        let idx = row.index();
                        let timer = &panel.timers[idx];
                        row.col(|ui| {
                            ui.label(egui::RichText::new(timer.name()).color(theme::TEXT_PRIMARY));
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(timer.formatted_remaining())
                                    .monospace()
                                    .size(theme::FONT_MONO_LARGE),
                            );
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(timer.status().as_str())
                                    .color(theme::status_color(timer.status())),
                            );
                        });
                        row.col(|ui| {
                            let running = timer.status() == TimerStatus::Running;
                            let finished = timer.status() == TimerStatus::Finished;
                            if running {
                                if ui.add(theme::button(egui_phosphor::regular::PAUSE)).on_hover_text("Stop").clicked() {
                                    pending = Some((idx, TimerAction::Stop));
                                }
                            } else if ui
                                .add_enabled(!finished, theme::button(egui_phosphor::regular::PLAY))
                                .on_hover_text("Start")
                                .clicked()
                            {
                                pending = Some((idx, TimerAction::Start));
                            }
                            if ui
                                .add(theme::button(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
                                .on_hover_text("Reset")
                                .clicked()
                            {
                                pending = Some((idx, TimerAction::Reset));
                            }
                            if ui
                                .add(theme::button_danger(egui_phosphor::regular::TRASH))
                                .on_hover_text("Remove")
                                .clicked()
                            {
                                pending = Some((idx, TimerAction::Remove));
                            }
                        });
                    });
                });
        });

        if let Some((idx, action)) = pending {
            panel.apply(idx, action, now);
        }

        ui.add_space(theme::SPACING_MD);

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            section_heading(ui, "Log");
            egui::ScrollArea::vertical()
                .id_salt("timer_log")
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (stamp, message) in &panel.log {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(stamp).monospace().color(theme::TEXT_DIM));
                            message_line(ui, message);
                        });
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn panel_with_input(name: &str, h: &str, m: &str, s: &str) -> TimerPanel {
        TimerPanel {
            name_input: name.to_string(),
            hours_input: h.to_string(),
            minutes_input: m.to_string(),
            seconds_input: s.to_string(),
            ..TimerPanel::default()
        }
    }

    #[test]
    fn add_timer_starts_it_and_logs_confirmation() {
        let mut panel = panel_with_input("Eggs", "0", "7", "30");
        panel.add_timer(Instant::now()).unwrap();

        assert_eq!(panel.timers().len(), 1);
        assert_eq!(panel.timers()[0].status(), TimerStatus::Running);
        let lines: Vec<_> = panel.log_lines().map(|m| m.text.clone()).collect();
        assert_eq!(lines, vec!["Added Timer: Eggs (00:07:30)"]);
    }

    #[test]
    fn bad_input_logs_error_without_timer() {
        for (h, m, s) in [("x", "0", "0"), ("0", "-5", "0"), ("0", "0", ""), ("1.5", "0", "0")] {
            let mut panel = panel_with_input("Bad", h, m, s);
            assert!(panel.add_timer(Instant::now()).is_err());
            assert!(panel.timers().is_empty());
            let line = panel.log_lines().next().unwrap();
            assert!(line.is_error());
            assert_eq!(line.text, INVALID_TIME_MESSAGE);
        }
    }

    #[test]
    fn poll_reports_finished_timers_in_list_order() {
        let t0 = Instant::now();
        let mut panel = panel_with_input("Tea", "0", "0", "2");
        panel.add_timer(t0).unwrap();
        panel.name_input = "Rice".to_string();
        panel.seconds_input = "1".to_string();
        panel.add_timer(t0).unwrap();

        let finished = panel.poll(t0 + Duration::from_secs(1));
        assert_eq!(finished, vec![TimerFinished { name: "Rice".to_string() }]);

        let finished = panel.poll(t0 + Duration::from_secs(5));
        assert_eq!(finished, vec![TimerFinished { name: "Tea".to_string() }]);
        assert!(panel.poll(t0 + Duration::from_secs(9)).is_empty());

        let last = panel.log_lines().last().unwrap();
        assert_eq!(last.text, "Tea timer has ended!");
    }

    #[test]
    fn timers_tick_independently() {
        let t0 = Instant::now();
        let mut panel = panel_with_input("A", "0", "0", "10");
        panel.add_timer(t0).unwrap();
        panel.name_input = "B".to_string();
        panel.add_timer(t0).unwrap();

        panel.apply(0, TimerAction::Stop, t0);
        panel.poll(t0 + Duration::from_secs(4));
        assert_eq!(panel.timers()[0].remaining_seconds(), 10);
        assert_eq!(panel.timers()[1].remaining_seconds(), 6);
    }

    #[test]
    fn next_tick_is_soonest_running_timer() {
        let t0 = Instant::now();
        let mut panel = panel_with_input("A", "0", "1", "0");
        assert_eq!(panel.next_tick_in(t0), None);

        panel.add_timer(t0).unwrap();
        panel.add_timer(t0 + Duration::from_millis(300)).unwrap();
        assert_eq!(
            panel.next_tick_in(t0 + Duration::from_millis(500)),
            Some(Duration::from_millis(500))
        );

        panel.apply(0, TimerAction::Stop, t0);
        panel.apply(1, TimerAction::Stop, t0);
        assert_eq!(panel.next_tick_in(t0), None);
    }

    #[test]
    fn remove_discards_timer() {
        let mut panel = panel_with_input("Bread", "1", "0", "0");
        panel.add_timer(Instant::now()).unwrap();
        panel.apply(0, TimerAction::Remove, Instant::now());
        panel.apply(3, TimerAction::Reset, Instant::now());
        assert!(panel.timers().is_empty());
        assert_eq!(
            panel.log_lines().last().map(|m| m.text.as_str()),
            Some("Removed Timer: Bread")
        );
    }

    #[test]
    fn log_is_bounded() {
        let mut panel = panel_with_input("", "bad", "0", "0");
        for _ in 0..TIMER_LOG_CAPACITY + 10 {
            let _ = panel.add_timer(Instant::now());
        }
        assert_eq!(panel.log.len(), TIMER_LOG_CAPACITY);
    }
}
