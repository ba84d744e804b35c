//! Color computation engine for Gantt chart task trees
//!
//! Given a flat snapshot of a task hierarchy and the project's color mode
//! state, this crate decides which color every bar is drawn in and which
//! label color stays legible on top of it. Everything here is a pure function
//! of its inputs: no I/O, no interior state, identical output for identical
//! input, safe to call from any number of threads.
//!
//! ## Modes
//!
//! - **Manual** - every node keeps its own color; overrides are ignored
//! - **Theme** - top-level groups spread across a palette without collisions,
//!   descendants get lighter variants of their group's color
//! - **Summary** - nodes take the color of their nearest summary ancestor
//! - **Task type** - one color per node kind
//! - **Hierarchy** - one base color, lightened per level of depth
//!
//! In every mode except manual a per-node override wins.
//!
//! ## Basic Usage
//!
//! ```rust
//! use gantt_colors::{compute_all_colors, pick_text_color, ColorMode, ColorModeState, Node};
//!
//! let nodes = vec![
//!     Node::summary("design", "#3B82F6"),
//!     Node::task("wireframes", "#3B82F6").with_parent("design"),
//!     Node::summary("build", "#3B82F6"),
//! ];
//! let state = ColorModeState::new(ColorMode::Theme);
//!
//! let colors = compute_all_colors(&nodes, &state);
//! assert_ne!(colors["design"], colors["build"]);
//!
//! let label = pick_text_color(&colors["design"]);
//! assert!(label == "#ffffff" || label == "#1e293b");
//! ```
//!
//! Malformed colors never fail a call; they are replaced by
//! [`FALLBACK_COLOR`] and logged at `warn` level through `tracing`.

pub mod color;
pub mod contrast;
pub mod engine;
mod error;
pub mod hash;
pub mod hierarchy;
pub mod palettes;
pub mod space;
pub mod strategy;
pub mod types;

pub use color::{darken, hex_to_hsl, hsl_to_hex, lighten, Color, Hsl, FALLBACK_COLOR};
pub use contrast::{
    contrast_ratio, meets_contrast, pick_text_color, pick_text_color_with, relative_luminance,
    ContrastLevel, TextColors,
};
pub use engine::{compute_all_colors, compute_all_render_colors, compute_color, ColorEngine, RenderColors};
pub use error::{ColorError, Result};
pub use hash::{assign_palette_indices, stable_hash};
pub use hierarchy::NodeIndex;
pub use palettes::{
    list_categories, list_palettes, lookup_palette, palettes_in_category, Palette,
    PaletteCategory, PaletteRegistry,
};
pub use space::{expand_palette, generate_monochrome_palette};
pub use strategy::ModeStrategy;
pub use types::{
    ColorMode, ColorModeState, HierarchyOptions, Node, NodeKind, SummaryOptions, TaskTypeOptions,
    ThemeOptions,
};
