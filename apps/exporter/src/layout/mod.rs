// Page geometry and text measurement for the paginated renderer.
// Greedy word-wrap against static metric tables — no shaping engine.

pub mod font_metrics;

// Re-export the public API consumed by the renderers.
pub use font_metrics::{a4_page_config, metrics, wrap_words, Face, PageConfig, PT_TO_MM};
