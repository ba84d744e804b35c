//! Color state file discovery
//!
//! Looks for `colors.{toml,yaml,yml,json}` in the global `~/.gantt-colors/`
//! directory and the project `./.gantt-colors/` directory. Global files come
//! first so project files override them when merged.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the directory holding color state files, in both scopes.
pub const CONFIG_DIR_NAME: &str = ".gantt-colors";

/// Accepted file names, in load order within one directory.
const FILE_NAMES: [&str; 4] = ["colors.toml", "colors.yaml", "colors.yml", "colors.json"];

/// A discovered color state file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

/// File format, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where a file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.gantt-colors/`
    Global,
    /// `./.gantt-colors/`
    Project,
}

/// Finds color state files in the global and project directories
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery rooted at the current directory and the home directory,
    /// resolved when [`discover_all`](Self::discover_all) runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery over explicit `.gantt-colors` directories.
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    pub fn set_project_dir(&mut self, dir: PathBuf) {
        self.project_dir = Some(dir);
    }

    pub fn set_global_dir(&mut self, dir: PathBuf) {
        self.global_dir = Some(dir);
    }

    /// All discovered files, global scope before project scope.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);

        let mut files = Vec::new();
        if let Some(dir) = global_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Global));
        }
        if let Some(dir) = project_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Project));
        }

        debug!("Discovered {} color state files", files.len());
        files
    }

    fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let format = ConfigFormat::from_path(&path)?;
                trace!("Found color state: {} ({:?})", path.display(), format);
                Some(ConfigFile { path, format, scope })
            })
            .collect()
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(CONFIG_DIR_NAME);
        dir.is_dir().then_some(dir)
    }
}
