use crate::shared::SetupError;
use std::fs;
use std::path::PathBuf;

/// Resolved per-user locations for every artifact the wizard touches.
/// `home` is injectable so tests can point the whole tree at a tempdir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub home: PathBuf,
}

pub const DEFAULT_CONFIG_DIR: &str = ".vibestack";
pub const MCP_CONFIG_FILE: &str = "claude_mcp_config.json";
pub const SETUP_STATE_FILE: &str = "setup_state.json";
pub const SHELL_PROFILE_FILE: &str = ".bashrc";

impl ConfigPaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn from_env() -> Result<Self, SetupError> {
        let home = std::env::var_os("HOME").ok_or(SetupError::HomeDirectoryUnavailable)?;
        Ok(Self::new(PathBuf::from(home)))
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(DEFAULT_CONFIG_DIR)
    }

    pub fn mcp_config_path(&self) -> PathBuf {
        self.config_dir().join(MCP_CONFIG_FILE)
    }

    pub fn setup_state_path(&self) -> PathBuf {
        self.config_dir().join(SETUP_STATE_FILE)
    }

    pub fn shell_profile_path(&self) -> PathBuf {
        self.home.join(SHELL_PROFILE_FILE)
    }

    pub fn setup_log_path(&self) -> PathBuf {
        self.config_dir().join("logs/setup.log")
    }
}

pub fn bootstrap_config_dir(paths: &ConfigPaths) -> Result<(), SetupError> {
    let dir = paths.config_dir();
    fs::create_dir_all(&dir).map_err(|source| SetupError::CreateDir {
        path: dir.display().to_string(),
        source,
    })
}
