//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Top-level tabs of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Recipes,
    Timers,
    UnitConverter,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Recipes, Tab::Timers, Tab::UnitConverter];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Recipes => "Recipes",
            Tab::Timers => "Timers",
            Tab::UnitConverter => "Unit Converter",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Recipes => egui_phosphor::regular::BOOK_OPEN,
            Tab::Timers => egui_phosphor::regular::TIMER,
            Tab::UnitConverter => egui_phosphor::regular::SCALES,
        }
    }
}

/// Severity of an inline panel message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A line shown in a panel's log or result area
#[derive(Debug, Clone, PartialEq)]
pub struct PanelMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl PanelMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
