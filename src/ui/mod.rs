//! UI module - reusable widgets shared by the tab panels

pub mod components;
