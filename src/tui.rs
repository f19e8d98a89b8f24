use crate::paths::ConfigPaths;
use crate::setup::navigation::{
    wizard_action_from_key, wizard_transition, WizardEffect, WizardScreen, WizardState,
};
use crate::setup::persistence::emit_setup_artifacts;
use crate::setup::screens::{
    draw_completion_screen, draw_key_input_screen, draw_list_screen, draw_welcome_screen,
    project_assistant_view_model, project_platform_select_view_model,
};
use crate::setup::state::{Platform, SetupState};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

/// How the wizard terminated. Emission warnings ride along so the CLI shell
/// can report them after the terminal is restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardExit {
    Finished {
        launch: Option<Platform>,
        warning: Option<String>,
    },
    Canceled,
}

pub fn run_wizard_tui(
    paths: &ConfigPaths,
    state: &mut SetupState,
    state_exists: bool,
) -> Result<WizardExit, String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter wizard screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create wizard terminal: {e}"))?;
    let result = run_wizard_tui_loop(paths, state, state_exists, &mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave wizard screen: {e}"))?;
    result
}

fn run_wizard_tui_loop(
    paths: &ConfigPaths,
    state: &mut SetupState,
    state_exists: bool,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<WizardExit, String> {
    let mut nav = WizardState::welcome();
    loop {
        draw_active_wizard_screen(terminal, state_exists, &nav, state)?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll wizard input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read wizard input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = wizard_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = wizard_transition(&mut nav, state, action);
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        if let Some(exit) = apply_wizard_effect(paths, state, transition.effect) {
            return Ok(exit);
        }
    }
}

/// Drives the same transition machine from pre-parsed key events, without a
/// terminal. The script must reach a finish or cancel edge.
pub fn run_wizard_scripted(
    paths: &ConfigPaths,
    state: &mut SetupState,
    scripted_keys: Vec<KeyEvent>,
) -> Result<WizardExit, String> {
    let mut nav = WizardState::welcome();
    for key in scripted_keys {
        let Some(action) = wizard_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = wizard_transition(&mut nav, state, action);
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        if let Some(exit) = apply_wizard_effect(paths, state, transition.effect) {
            return Ok(exit);
        }
    }
    Err("scripted wizard did not terminate; include a finish or cancel key".to_string())
}

fn apply_wizard_effect(
    paths: &ConfigPaths,
    state: &mut SetupState,
    effect: WizardEffect,
) -> Option<WizardExit> {
    match effect {
        WizardEffect::None => None,
        WizardEffect::Finish { launch } => {
            // Emission failure is reported, never fatal; the wizard always
            // terminates and does not retry.
            let warning = match emit_setup_artifacts(paths, state) {
                Ok(_) => None,
                Err(err) => Some(err.to_string()),
            };
            Some(WizardExit::Finished { launch, warning })
        }
        WizardEffect::CancelSetup => Some(WizardExit::Canceled),
    }
}

fn draw_active_wizard_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state_exists: bool,
    nav: &WizardState,
    state: &SetupState,
) -> Result<(), String> {
    match nav.screen {
        WizardScreen::Welcome => draw_welcome_screen(terminal, &nav.hint_text),
        WizardScreen::PlatformSelect => {
            let view_model = project_platform_select_view_model(state_exists, nav);
            draw_list_screen(terminal, &view_model)
        }
        WizardScreen::AssistantDetail => {
            let view_model = project_assistant_view_model(state_exists, nav);
            draw_list_screen(terminal, &view_model)
        }
        WizardScreen::CliDetail => draw_key_input_screen(terminal, state_exists, nav),
        WizardScreen::Completion => draw_completion_screen(terminal, state_exists, nav, state),
    }
}
