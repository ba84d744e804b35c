//! Layered loading of a persisted `ColorModeState` using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use gantt_colors::{lookup_palette, ColorModeState};
use tracing::{debug, trace, warn};

use crate::discovery::{ConfigFormat, FileDiscovery};
use crate::error::{ConfigError, ConfigResult};

/// Prefix of environment variables that override persisted state.
pub const ENV_PREFIX: &str = "GANTT_COLORS_";

/// Separator between nesting levels in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Serialized field names of `ColorModeState` and its option bags.
const FIELD_NAMES: &[&str] = &[
    "mode",
    "themeOptions",
    "selectedPaletteId",
    "customMonochromeBase",
    "summaryOptions",
    "useMilestoneAccent",
    "milestoneAccentColor",
    "taskTypeOptions",
    "summaryColor",
    "taskColor",
    "milestoneColor",
    "hierarchyOptions",
    "baseColor",
    "lightenPercentPerLevel",
    "maxLightenPercent",
];

/// Loads a `ColorModeState` from layered sources
///
/// Sources are merged in precedence order, later overriding earlier:
/// 1. `ColorModeState::default()`
/// 2. discovered files, global then project
/// 3. the explicit file given to [`with_file`](Self::with_file)
/// 4. `GANTT_COLORS_*` environment variables
///
/// Nothing is cached; every [`load`](Self::load) reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ColorStateLoader {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
}

impl ColorStateLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `path` above the discovered files. Its format comes from the extension.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Search `dir` instead of `./.gantt-colors/`.
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.discovery.set_project_dir(dir.into());
        self
    }

    /// Search `dir` instead of `~/.gantt-colors/`.
    pub fn with_global_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.discovery.set_global_dir(dir.into());
        self
    }

    /// Load, merge, extract and validate.
    pub fn load(&self) -> ConfigResult<ColorModeState> {
        let state: ColorModeState = self.figment()?.extract()?;
        validate(&state)?;

        debug!(mode = ?state.mode, "loaded color mode state");
        Ok(state)
    }

    /// The merged figment, before extraction.
    pub fn figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ColorModeState::default()));

        for file in self.discovery.discover_all() {
            trace!("Merging {:?} color state {}", file.scope, file.path.display());
            figment = figment.merge(file_provider(&file.path, file.format));
        }

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(explicit_file_provider(path)?);
        }

        Ok(figment.merge(env_provider()))
    }
}

/// Load the color mode state from the default locations and the environment.
pub fn load_color_state() -> ConfigResult<ColorModeState> {
    ColorStateLoader::new().load()
}

fn explicit_file_provider(path: &Path) -> ConfigResult<Figment> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        format: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    })?;
    Ok(file_provider(path, format))
}

fn file_provider(path: &Path, format: ConfigFormat) -> Figment {
    match format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .split(ENV_SEPARATOR)
        .map(|key| field_path(key.as_str()).into())
        .lowercase(false)
}

/// Rewrite a dot-separated env key onto the serialized field names.
///
/// Each segment matches a field ignoring case and underscores, so both
/// `themeoptions` and `theme_options` resolve to `themeOptions`.
fn field_path(key: &str) -> String {
    key.split('.')
        .map(|segment| {
            let squashed = segment.replace('_', "");
            FIELD_NAMES
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&squashed))
                .map_or_else(|| segment.to_string(), |name| (*name).to_string())
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Reject option values the engine would otherwise have to clamp silently.
fn validate(state: &ColorModeState) -> ConfigResult<()> {
    let hierarchy = &state.hierarchy_options;
    check_percent("hierarchyOptions.lightenPercentPerLevel", hierarchy.lighten_percent_per_level)?;
    check_percent("hierarchyOptions.maxLightenPercent", hierarchy.max_lighten_percent)?;

    if let Some(id) = &state.theme_options.selected_palette_id {
        if lookup_palette(id).is_none() {
            warn!(palette = %id, "configured palette id is unknown");
        }
    }
    Ok(())
}

fn check_percent(key: &str, value: f64) -> ConfigResult<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::validation(format!(
            "{key} must be within 0..=100, got {value}"
        )))
    }
}
