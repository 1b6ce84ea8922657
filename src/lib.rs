//! # Kitchen Helper
//!
//! A small desktop kitchen companion built on eframe/egui with three tabs:
//!
//! - **Recipes**: browse the built-in recipes, add new ones and extend them
//!   with ingredients and steps ([`recipes`]).
//! - **Timers**: any number of independent countdown timers ticking once per
//!   second on the UI thread ([`timer`]).
//! - **Unit Converter**: cooking measurements between cups, spoons, grams,
//!   litres, ounces and friends ([`units`]).
//!
//! The domain modules carry no UI code; [`app`] binds them to the window.

pub mod app;
pub mod constants;
pub mod error;
pub mod recipes;
pub mod settings;
pub mod theme;
pub mod timer;
pub mod types;
pub mod ui;
pub mod units;
pub mod utils;

pub use error::{KitchenError, Result};
