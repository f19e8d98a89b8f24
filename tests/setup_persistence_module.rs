use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use vibestack::paths::ConfigPaths;
use vibestack::setup::persistence::{emit_setup_artifacts, load_persisted_setup};
use vibestack::setup::state::{ExtensionId, Platform, SetupState};

fn assistant_state(with_playwright: bool) -> SetupState {
    let mut state = SetupState::default();
    state.select_platform(Platform::Assistant);
    if with_playwright {
        state.assistant_extensions.insert(ExtensionId::Playwright);
    }
    state
}

fn cli_state(key: &str) -> SetupState {
    let mut state = SetupState::default();
    state.select_platform(Platform::CliTool);
    state.cli_api_key = Some(key.to_string());
    state
}

#[test]
fn setup_persistence_module_writes_one_server_entry_per_extension() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    let mut state = assistant_state(true);

    let summary = emit_setup_artifacts(&paths, &mut state).expect("emit");
    assert!(summary.wrote_mcp_config);
    assert!(!summary.exported_api_key);

    let raw = fs::read_to_string(paths.mcp_config_path()).expect("read mcp config");
    let parsed: Value = serde_json::from_str(&raw).expect("parse mcp config");
    let servers = parsed["mcpServers"].as_object().expect("servers object");
    assert_eq!(servers.len(), 1);
    assert_eq!(servers["playwright"]["command"], "npx");
    assert_eq!(servers["playwright"]["args"][0], "@playwright/mcp@latest");
}

#[test]
fn setup_persistence_module_writes_empty_mapping_when_no_extension_toggled() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    let mut state = assistant_state(false);

    emit_setup_artifacts(&paths, &mut state).expect("emit");

    let raw = fs::read_to_string(paths.mcp_config_path()).expect("read mcp config");
    let parsed: Value = serde_json::from_str(&raw).expect("parse mcp config");
    let servers = parsed["mcpServers"].as_object().expect("servers object");
    assert!(servers.is_empty());
}

#[test]
fn setup_persistence_module_marks_state_complete_with_timestamp() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    let mut state = assistant_state(true);

    emit_setup_artifacts(&paths, &mut state).expect("emit");
    assert!(state.setup_complete);
    assert!(state.setup_timestamp.expect("timestamp") > 0.0);

    let record = load_persisted_setup(&paths)
        .expect("load persisted")
        .expect("record present");
    assert!(record.setup_complete);
    assert!(record.setup_date > 0.0);
    assert!(record.platforms.claude_code.enabled);
    assert_eq!(record.platforms.claude_code.extensions, vec!["playwright"]);
    assert!(!record.platforms.llm_cli.enabled);
}

#[test]
fn setup_persistence_module_profile_append_is_idempotent_per_key_value() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    let first_key = format!("sk-first-{}", "0".repeat(16));
    let second_key = format!("sk-second-{}", "1".repeat(16));

    // Same key twice: the export line lands once.
    let summary = emit_setup_artifacts(&paths, &mut cli_state(&first_key)).expect("first emit");
    assert!(summary.exported_api_key);
    assert!(summary.appended_profile_line);
    let summary = emit_setup_artifacts(&paths, &mut cli_state(&first_key)).expect("repeat emit");
    assert!(!summary.appended_profile_line);

    // A changed key appends a second, shadowing line.
    emit_setup_artifacts(&paths, &mut cli_state(&second_key)).expect("second emit");
    let profile = fs::read_to_string(paths.shell_profile_path()).expect("read profile");
    let export_lines: Vec<&str> = profile
        .lines()
        .filter(|line| line.starts_with("export OPENAI_API_KEY="))
        .collect();
    let expected = vec![
        format!("export OPENAI_API_KEY=\"{first_key}\""),
        format!("export OPENAI_API_KEY=\"{second_key}\""),
    ];
    assert_eq!(export_lines, expected);

    // The process environment follows the most recent emission.
    assert_eq!(std::env::var("OPENAI_API_KEY").expect("env var"), second_key);

    // The state dump keeps the raw key value.
    let record = load_persisted_setup(&paths)
        .expect("load persisted")
        .expect("record present");
    assert_eq!(record.platforms.llm_cli.api_key.as_deref(), Some(second_key.as_str()));
}

#[test]
fn setup_persistence_module_skips_platform_sections_when_nothing_selected() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    let mut state = SetupState::default();

    let summary = emit_setup_artifacts(&paths, &mut state).expect("emit");
    assert!(!summary.wrote_mcp_config);
    assert!(!summary.exported_api_key);
    assert!(!summary.appended_profile_line);
    assert!(!paths.mcp_config_path().exists());
    assert!(!paths.shell_profile_path().exists());

    let record = load_persisted_setup(&paths)
        .expect("load persisted")
        .expect("record present");
    assert!(record.setup_complete);
    assert!(!record.platforms.claude_code.enabled);
    assert!(!record.platforms.llm_cli.enabled);
    assert_eq!(record.platforms.llm_cli.api_key, None);
}

#[test]
fn setup_persistence_module_reports_missing_state_as_none() {
    let dir = tempdir().expect("tempdir");
    let paths = ConfigPaths::new(dir.path());
    assert!(load_persisted_setup(&paths).expect("load").is_none());
}
