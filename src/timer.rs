//! Countdown timer state machine
//!
//! A timer moves between `Reset`, `Running`, `Stopped` and `Finished`. While
//! running it owns a [`TickSchedule`]; the UI loop drives it by calling
//! [`CountdownTimer::poll`] every frame, which runs whatever ticks have come
//! due since the last call.

use crate::constants::TICK_PERIOD;
use crate::error::{KitchenError, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Reset,
    Running,
    Stopped,
    Finished,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Reset => "Reset",
            TimerStatus::Running => "Running",
            TimerStatus::Stopped => "Stopped",
            TimerStatus::Finished => "Finished",
        }
    }
}

/// One-shot notification produced when a running timer reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFinished {
    pub name: String,
}

impl TimerFinished {
    /// Text shown in the alert and appended to the timer log.
    pub fn message(&self) -> String {
        format!("{} timer has ended!", self.name)
    }
}

/// Repeating tick schedule. At most one exists per timer; dropping it cancels it.
#[derive(Debug, Clone, Copy)]
struct TickSchedule {
    period: Duration,
    next_due: Instant,
}

impl TickSchedule {
    fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Consume one due tick, if any, and advance to the following one.
    fn take_due(&mut self, now: Instant) -> bool {
        if self.next_due <= now {
            self.next_due += self.period;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    name: String,
    hours: u64,
    minutes: u64,
    seconds: u64,
    total_seconds: u64,
    remaining_seconds: u64,
    status: TimerStatus,
    schedule: Option<TickSchedule>,
}

impl CountdownTimer {
    /// Create a timer in the `Reset` state. Negative components are rejected.
    pub fn new(name: impl Into<String>, hours: i64, minutes: i64, seconds: i64) -> Result<Self> {
        let name = name.into();
        let non_negative = |value: i64, what: &str| {
            u64::try_from(value).map_err(|_| {
                KitchenError::invalid_argument(format!("{what} must be non-negative, got {value}"))
            })
        };
        let hours = non_negative(hours, "hours")?;
        let minutes = non_negative(minutes, "minutes")?;
        let seconds = non_negative(seconds, "seconds")?;

        let total_seconds = hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|t| t.checked_add(seconds))
            .ok_or_else(|| KitchenError::invalid_argument("duration is too large"))?;

        debug!(name = %name, total_seconds, "Timer created");

        Ok(Self {
            name,
            hours,
            minutes,
            seconds,
            total_seconds,
            remaining_seconds: total_seconds,
            status: TimerStatus::Reset,
            schedule: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Begin (or resume) ticking with the first tick one period after `now`.
    ///
    /// Already running: the existing schedule is kept. Finished: nothing
    /// happens until the timer is reset.
    pub fn start_at(&mut self, now: Instant) {
        match self.status {
            TimerStatus::Running => {}
            TimerStatus::Finished => {
                debug!(name = %self.name, "Start ignored on finished timer");
            }
            TimerStatus::Reset | TimerStatus::Stopped => {
                self.schedule = Some(TickSchedule::new(TICK_PERIOD, now));
                self.status = TimerStatus::Running;
                info!(name = %self.name, remaining = self.remaining_seconds, "Timer started");
            }
        }
    }

    pub fn stop(&mut self) {
        if self.status != TimerStatus::Running {
            return;
        }
        self.schedule = None;
        self.status = TimerStatus::Stopped;
        info!(name = %self.name, remaining = self.remaining_seconds, "Timer stopped");
    }

    pub fn reset(&mut self) {
        self.schedule = None;
        self.remaining_seconds = self.total_seconds;
        self.status = TimerStatus::Reset;
        info!(name = %self.name, "Timer reset");
    }

    /// Advance by one second. Returns the finished notification on the tick
    /// that brings the timer to zero; ticks outside `Running` do nothing.
    pub fn tick(&mut self) -> Option<TimerFinished> {
        if self.status != TimerStatus::Running {
            return None;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds > 0 {
            return None;
        }

        self.schedule = None;
        self.status = TimerStatus::Finished;
        info!(name = %self.name, "Timer finished");
        Some(TimerFinished {
            name: self.name.clone(),
        })
    }

    /// Run every tick that has come due at `now`, oldest first.
    pub fn poll(&mut self, now: Instant) -> Option<TimerFinished> {
        let mut finished = None;
        while let Some(schedule) = self.schedule.as_mut() {
            if !schedule.take_due(now) {
                break;
            }
            if let Some(event) = self.tick() {
                finished = Some(event);
            }
        }
        finished
    }

    /// How long until the next tick is due, or `None` when not scheduled.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .as_ref()
            .map(|s| s.next_due.saturating_duration_since(now))
    }

    pub fn formatted_remaining(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

/// `HH:MM:SS`, zero padded. Hours are not capped, so 100h and up print
/// three or more digits.
pub fn format_hms(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
