//! Persisted color mode state for gantt-colors
//!
//! Loads a [`ColorModeState`](gantt_colors::ColorModeState) from layered
//! sources using Figment. Later sources override earlier ones:
//!
//! 1. Built-in defaults
//! 2. Global `~/.gantt-colors/colors.{toml,yaml,yml,json}`
//! 3. Project `./.gantt-colors/colors.{toml,yaml,yml,json}`
//! 4. An explicit file passed to [`ColorStateLoader::with_file`]
//! 5. `GANTT_COLORS_*` environment variables, nested with `__`
//!    (`GANTT_COLORS_THEMEOPTIONS__SELECTEDPALETTEID=nord`)
//!
//! ```no_run
//! use gantt_colors_config::{load_color_state, ColorStateLoader};
//!
//! let state = load_color_state()?;
//! let pinned = ColorStateLoader::new().with_file("chart-colors.yaml").load()?;
//! # let _ = (state, pinned);
//! # Ok::<(), gantt_colors_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_color_state, ColorStateLoader, ENV_PREFIX, ENV_SEPARATOR};
