//! Shared building blocks for the dashboard screen.
pub mod metric_card;
pub mod pico;
