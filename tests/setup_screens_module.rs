use vibestack::setup::navigation::WizardState;
use vibestack::setup::screens::{
    field_row, mask_api_key, project_assistant_view_model, project_completion_rows,
    project_platform_select_view_model, tail_for_display,
};
use vibestack::setup::state::{ExtensionId, Platform, SetupState};

#[test]
fn setup_screens_module_platform_view_model_lists_both_options() {
    let mut nav = WizardState::welcome();
    nav.cursor = 99;
    nav.status_text = "status".to_string();
    nav.hint_text = "hint".to_string();

    let model = project_platform_select_view_model(true, &nav);
    assert_eq!(model.mode_line, "Mode: reconfigure (previous setup found)");
    assert_eq!(
        model.items,
        vec![
            "Claude Code (Interactive Assistant)".to_string(),
            "LLM CLI (Command Line Tool)".to_string(),
        ]
    );
    assert_eq!(model.selected, 1);
    assert_eq!(model.status_text, "status");
    assert_eq!(model.hint_text, "hint");
}

#[test]
fn setup_screens_module_assistant_view_model_marks_draft_and_placeholders() {
    let mut nav = WizardState::welcome();
    nav.extension_draft.insert(ExtensionId::Playwright);

    let model = project_assistant_view_model(false, &nav);
    assert_eq!(model.mode_line, "Mode: first-time setup");
    assert_eq!(model.items[0], "[x] Playwright (web automation)");
    assert!(model.items[1].starts_with("[-]"));
    assert!(model.items[2].starts_with("[-]"));

    nav.extension_draft.clear();
    let model = project_assistant_view_model(false, &nav);
    assert_eq!(model.items[0], "[ ] Playwright (web automation)");
}

#[test]
fn setup_screens_module_completion_rows_summarize_state() {
    let mut state = SetupState::default();
    let rows = project_completion_rows(&state);
    assert_eq!(rows[0].value.as_deref(), Some("none selected"));
    assert_eq!(rows[1].value.as_deref(), Some("none"));
    assert_eq!(rows[2].value, None);

    state.select_platform(Platform::CliTool);
    state.cli_api_key = Some(format!("sk-{}", "a".repeat(20)));
    let rows = project_completion_rows(&state);
    assert_eq!(rows[0].value.as_deref(), Some("LLM CLI (Command Line Tool)"));
    let key_cell = rows[2].value.as_deref().expect("api key row");
    assert!(key_cell.ends_with("(configured)"));
    assert!(!key_cell.contains(&"a".repeat(20)));
}

#[test]
fn setup_screens_module_mask_and_tail_helpers_are_stable() {
    assert_eq!(mask_api_key("sk-0123456789abcdef0123"), "sk-...0123");
    assert_eq!(mask_api_key("short"), "*****");
    assert_eq!(tail_for_display("abcdef", 4), "cdef");
    assert_eq!(tail_for_display("abc", 8), "abc");
    assert_eq!(tail_for_display("abc", 0), "");

    let row = field_row("Platform", Some("llm_cli".to_string()));
    assert_eq!(row.field, "Platform");
    assert_eq!(row.value.as_deref(), Some("llm_cli"));
}
