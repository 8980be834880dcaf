//! Pages Configuration

use std::path::{Path, PathBuf};

use platform::config::var_or;

/// Directories served under a URL prefix of the same name
pub const STATIC_MOUNTS: [&str; 4] = ["bower_components", "dist", "js", "less"];

/// Where templates and static assets live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesConfig {
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("statics"),
        }
    }
}

impl PagesConfig {
    /// Read `TEMPLATE_DIR` and `STATIC_DIR`, relative to the working directory
    pub fn from_env() -> Self {
        Self {
            template_dir: PathBuf::from(var_or("TEMPLATE_DIR", "templates")),
            static_dir: PathBuf::from(var_or("STATIC_DIR", "statics")),
        }
    }

    /// On-disk directory behind a static mount
    pub fn mount_dir(&self, mount: &str) -> PathBuf {
        self.static_dir.join(mount)
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }
}
