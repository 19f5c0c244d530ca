//! Presentational components.

pub mod animated_svg;
pub mod interactive_svg;
pub mod metrics_card;
pub mod svg_host;
