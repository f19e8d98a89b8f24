use crate::paths::{bootstrap_config_dir, ConfigPaths};
use crate::setup::state::SetupState;
use crate::shared::{atomic_write_file, SetupError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

pub const CLI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, McpServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerConfig {
    pub command: String,
    pub args: Vec<String>,
}

/// On-disk snapshot of the finished wizard run. The API key is persisted
/// verbatim, matching the behavior this tool replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSetup {
    pub platforms: PlatformsRecord,
    pub setup_complete: bool,
    pub setup_date: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformsRecord {
    pub claude_code: AssistantRecord,
    pub llm_cli: CliRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRecord {
    pub enabled: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliRecord {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub wrote_mcp_config: bool,
    pub exported_api_key: bool,
    pub appended_profile_line: bool,
}

/// Translates the finished `SetupState` into on-disk artifacts. Invoked
/// exactly once, at Completion; the first failing step aborts the rest.
pub fn emit_setup_artifacts(
    paths: &ConfigPaths,
    state: &mut SetupState,
) -> Result<EmitSummary, SetupError> {
    bootstrap_config_dir(paths)?;

    let mut summary = EmitSummary {
        wrote_mcp_config: false,
        exported_api_key: false,
        appended_profile_line: false,
    };

    if state.assistant_enabled {
        write_mcp_config(paths, state)?;
        summary.wrote_mcp_config = true;
    }

    if state.cli_tool_enabled {
        if let Some(key) = state.cli_api_key.clone() {
            std::env::set_var(CLI_API_KEY_ENV_VAR, &key);
            summary.exported_api_key = true;
            summary.appended_profile_line = append_profile_export(paths, &key)?;
        }
    }

    let timestamp = unix_seconds_now();
    write_setup_state(paths, state, timestamp)?;
    state.setup_complete = true;
    state.setup_timestamp = Some(timestamp);
    Ok(summary)
}

fn unix_seconds_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn write_mcp_config(paths: &ConfigPaths, state: &SetupState) -> Result<(), SetupError> {
    let mut config = McpConfig::default();
    for extension in &state.assistant_extensions {
        config.mcp_servers.insert(
            extension.as_str().to_string(),
            McpServerConfig {
                command: extension.command().to_string(),
                args: extension.args().iter().map(|a| (*a).to_string()).collect(),
            },
        );
    }
    let path = paths.mcp_config_path();
    let content = serde_json::to_vec_pretty(&config).map_err(|source| SetupError::Serialize {
        artifact: "mcp config".to_string(),
        source,
    })?;
    atomic_write_file(&path, &content).map_err(|source| SetupError::WriteArtifact {
        path: path.display().to_string(),
        source,
    })
}

/// Appends the export line to the shell profile unless the exact line is
/// already present. A changed key value lands as a second, shadowing line.
fn append_profile_export(paths: &ConfigPaths, key: &str) -> Result<bool, SetupError> {
    let path = paths.shell_profile_path();
    let line = format!("export {CLI_API_KEY_ENV_VAR}=\"{key}\"");
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(SetupError::ReadProfile {
                path: path.display().to_string(),
                source,
            });
        }
    };
    if existing.contains(&line) {
        return Ok(false);
    }
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| SetupError::AppendProfile {
            path: path.display().to_string(),
            source,
        })?;
    writeln!(file, "{line}").map_err(|source| SetupError::AppendProfile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}

fn write_setup_state(
    paths: &ConfigPaths,
    state: &SetupState,
    timestamp: f64,
) -> Result<(), SetupError> {
    let record = PersistedSetup {
        platforms: PlatformsRecord {
            claude_code: AssistantRecord {
                enabled: state.assistant_enabled,
                extensions: state
                    .assistant_extensions
                    .iter()
                    .map(|e| e.as_str().to_string())
                    .collect(),
            },
            llm_cli: CliRecord {
                enabled: state.cli_tool_enabled,
                api_key: state.cli_api_key.clone(),
            },
        },
        setup_complete: true,
        setup_date: timestamp,
    };
    let path = paths.setup_state_path();
    let content = serde_json::to_vec_pretty(&record).map_err(|source| SetupError::Serialize {
        artifact: "setup state".to_string(),
        source,
    })?;
    atomic_write_file(&path, &content).map_err(|source| SetupError::WriteArtifact {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_persisted_setup(paths: &ConfigPaths) -> Result<Option<PersistedSetup>, SetupError> {
    let path = paths.setup_state_path();
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SetupError::ReadState {
                path: path.display().to_string(),
                source,
            });
        }
    };
    let record = serde_json::from_str(&raw).map_err(|source| SetupError::ParseState {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(record))
}
