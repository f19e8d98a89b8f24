use crate::paths::ConfigPaths;
use crate::setup::navigation::parse_scripted_wizard_keys;
use crate::setup::persistence::load_persisted_setup;
use crate::setup::state::{Platform, SetupState};
use crate::shared::append_setup_log_line;
use crate::tui::{run_wizard_scripted, run_wizard_tui, WizardExit};
use crossterm::event::KeyEvent;
use std::io::{self, IsTerminal};

const USAGE: &str = "usage: vibestack [setup|status|help]\n  setup   run the configuration wizard (default)\n  status  show the last recorded setup\n  help    show this message";

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    match args.first().map(String::as_str) {
        None | Some("setup") => cmd_setup(),
        Some("status") => cmd_status(),
        Some("help") | Some("--help") | Some("-h") => Ok(USAGE.to_string()),
        Some(other) => Err(format!("unknown command `{other}`\n\n{USAGE}")),
    }
}

fn is_interactive_wizard() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

fn load_scripted_wizard_keys() -> Result<Option<Vec<KeyEvent>>, String> {
    let Ok(raw) = std::env::var("VIBESTACK_SETUP_SCRIPT_KEYS") else {
        return Ok(None);
    };
    parse_scripted_wizard_keys(&raw).map(Some)
}

fn cmd_setup() -> Result<String, String> {
    let paths = ConfigPaths::from_env().map_err(|e| e.to_string())?;
    let state_exists = paths.setup_state_path().exists();
    let _ = append_setup_log_line(&paths, "setup started");

    let mut state = SetupState::default();
    let exit = if let Some(scripted_keys) = load_scripted_wizard_keys()? {
        run_wizard_scripted(&paths, &mut state, scripted_keys)?
    } else if is_interactive_wizard() {
        run_wizard_tui(&paths, &mut state, state_exists)?
    } else {
        return Err(
            "setup requires an interactive terminal (or VIBESTACK_SETUP_SCRIPT_KEYS)".to_string(),
        );
    };

    match exit {
        WizardExit::Canceled => {
            let _ = append_setup_log_line(&paths, "setup canceled");
            Ok("setup canceled".to_string())
        }
        WizardExit::Finished { launch, warning } => {
            let mut lines = vec![
                "setup complete".to_string(),
                format!("config_dir={}", paths.config_dir().display()),
                format!(
                    "platform={}",
                    state
                        .selected_platform
                        .map(Platform::as_str)
                        .unwrap_or("none")
                ),
            ];
            if let Some(warning) = &warning {
                // No artifact paths here: emission failed, so none were written.
                let _ = append_setup_log_line(&paths, &format!("emission failed: {warning}"));
                lines.push(format!("warning: {warning}"));
            } else {
                if state.assistant_enabled {
                    lines.push(format!("mcp_config={}", paths.mcp_config_path().display()));
                }
                if state.cli_tool_enabled && state.cli_api_key.is_some() {
                    lines.push(format!(
                        "shell_profile={}",
                        paths.shell_profile_path().display()
                    ));
                }
                lines.push(format!(
                    "state_file={}",
                    paths.setup_state_path().display()
                ));
                let _ = append_setup_log_line(&paths, "setup complete");
            }
            lines.extend(next_step_lines(&state, launch));
            Ok(lines.join("\n"))
        }
    }
}

fn next_step_lines(state: &SetupState, launch: Option<Platform>) -> Vec<String> {
    match state.selected_platform {
        Some(Platform::Assistant) => {
            if launch == Some(Platform::Assistant) {
                match spawn_assistant() {
                    Ok(()) => vec!["launched claude".to_string()],
                    Err(err) => vec![format!("warning: failed to launch claude: {err}")],
                }
            } else {
                vec!["next: run `claude` to start coding".to_string()]
            }
        }
        Some(Platform::CliTool) => {
            vec!["next: run `llm \"your question\"` to use the CLI tool".to_string()]
        }
        None => Vec::new(),
    }
}

fn spawn_assistant() -> Result<(), String> {
    let status = std::process::Command::new("claude")
        .status()
        .map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("claude exited with {status}"))
    }
}

fn cmd_status() -> Result<String, String> {
    let paths = ConfigPaths::from_env().map_err(|e| e.to_string())?;
    let Some(record) = load_persisted_setup(&paths).map_err(|e| e.to_string())? else {
        return Ok("no setup recorded; run `vibestack setup`".to_string());
    };
    let extensions = if record.platforms.claude_code.extensions.is_empty() {
        "none".to_string()
    } else {
        record.platforms.claude_code.extensions.join(",")
    };
    Ok(format!(
        "setup_complete={}\nsetup_date={}\nclaude_code_enabled={}\nclaude_code_extensions={}\nllm_cli_enabled={}\nllm_cli_api_key={}",
        record.setup_complete,
        record.setup_date,
        record.platforms.claude_code.enabled,
        extensions,
        record.platforms.llm_cli.enabled,
        if record.platforms.llm_cli.api_key.is_some() {
            "configured"
        } else {
            "absent"
        }
    ))
}
