use crate::setup::state::{extension_menu, platform_options, Platform, SetupState};
use crate::setup::validate::validate_api_key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::BTreeSet;

const WELCOME_STATUS_TEXT: &str = "System ready.";
const WELCOME_HINT_TEXT: &str = "Press any key to continue";
const PLATFORM_STATUS_TEXT: &str = "Choose the tool to configure.";
const PLATFORM_HINT_TEXT: &str = "Left/Right move | Enter select | Esc quit";
const ASSISTANT_STATUS_TEXT: &str = "Toggle enhancements for Claude Code.";
const ASSISTANT_HINT_TEXT: &str = "Up/Down move | Space toggle | Enter confirm | Esc back";
const CLI_STATUS_TEXT: &str = "Enter your OpenAI API key.";
const CLI_HINT_TEXT: &str = "Type key | Enter confirm | Esc back";
const COMPLETION_STATUS_TEXT: &str = "Review your setup.";
const COMPLETION_HINT_TEXT: &str = "Enter finish | l finish + launch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardScreen {
    Welcome,
    PlatformSelect,
    AssistantDetail,
    CliDetail,
    Completion,
}

pub const ALL_WIZARD_SCREENS: [WizardScreen; 5] = [
    WizardScreen::Welcome,
    WizardScreen::PlatformSelect,
    WizardScreen::AssistantDetail,
    WizardScreen::CliDetail,
    WizardScreen::Completion,
];

impl WizardScreen {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardScreen::Welcome => "welcome",
            WizardScreen::PlatformSelect => "platform_select",
            WizardScreen::AssistantDetail => "assistant_detail",
            WizardScreen::CliDetail => "cli_detail",
            WizardScreen::Completion => "completion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    MovePrev,
    MoveNext,
    Confirm,
    Back,
    Toggle,
    Launch,
    Cancel,
    Input(char),
    Backspace,
}

/// Transient wizard state: the active screen plus per-screen drafts that are
/// only committed into `SetupState` on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub screen: WizardScreen,
    pub cursor: usize,
    pub extension_draft: BTreeSet<crate::setup::state::ExtensionId>,
    pub key_input: String,
    pub status_text: String,
    pub hint_text: String,
}

impl WizardState {
    pub fn welcome() -> Self {
        Self {
            screen: WizardScreen::Welcome,
            cursor: 0,
            extension_draft: BTreeSet::new(),
            key_input: String::new(),
            status_text: WELCOME_STATUS_TEXT.to_string(),
            hint_text: WELCOME_HINT_TEXT.to_string(),
        }
    }

    fn open(&mut self, screen: WizardScreen) {
        self.screen = screen;
        self.cursor = 0;
        let (status, hint) = match screen {
            WizardScreen::Welcome => (WELCOME_STATUS_TEXT, WELCOME_HINT_TEXT),
            WizardScreen::PlatformSelect => (PLATFORM_STATUS_TEXT, PLATFORM_HINT_TEXT),
            WizardScreen::AssistantDetail => (ASSISTANT_STATUS_TEXT, ASSISTANT_HINT_TEXT),
            WizardScreen::CliDetail => (CLI_STATUS_TEXT, CLI_HINT_TEXT),
            WizardScreen::Completion => (COMPLETION_STATUS_TEXT, COMPLETION_HINT_TEXT),
        };
        self.status_text = status.to_string();
        self.hint_text = hint.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    None,
    /// Emit artifacts and exit; `launch` carries the platform the embedding
    /// shell should spawn afterwards.
    Finish {
        launch: Option<Platform>,
    },
    CancelSetup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTransition {
    pub effect: WizardEffect,
    pub feedback: Option<String>,
}

impl WizardTransition {
    fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: WizardEffect::None,
            feedback,
        }
    }

    fn finish(launch: Option<Platform>) -> Self {
        Self {
            effect: WizardEffect::Finish { launch },
            feedback: None,
        }
    }

    fn cancel() -> Self {
        Self {
            effect: WizardEffect::CancelSetup,
            feedback: None,
        }
    }
}

pub fn cycle_prev(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor + len - 1) % len
}

pub fn cycle_next(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor + 1) % len
}

/// Maps a raw key event to a wizard action for the active screen. Releases
/// never map; Ctrl-C cancels everywhere.
pub fn wizard_action_from_key(screen: WizardScreen, key: KeyEvent) -> Option<WizardAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(WizardAction::Cancel);
    }
    match screen {
        WizardScreen::Welcome => Some(WizardAction::Confirm),
        WizardScreen::PlatformSelect => match key.code {
            KeyCode::Left | KeyCode::Up => Some(WizardAction::MovePrev),
            KeyCode::Right | KeyCode::Down => Some(WizardAction::MoveNext),
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                Some(WizardAction::Confirm)
            }
            KeyCode::Esc => Some(WizardAction::Back),
            _ => None,
        },
        WizardScreen::AssistantDetail => match key.code {
            KeyCode::Up => Some(WizardAction::MovePrev),
            KeyCode::Down => Some(WizardAction::MoveNext),
            KeyCode::Char(' ') | KeyCode::Char('t') => Some(WizardAction::Toggle),
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                Some(WizardAction::Confirm)
            }
            KeyCode::Esc => Some(WizardAction::Back),
            _ => None,
        },
        WizardScreen::CliDetail => match key.code {
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                Some(WizardAction::Confirm)
            }
            KeyCode::Esc => Some(WizardAction::Back),
            KeyCode::Backspace => Some(WizardAction::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(WizardAction::Input(ch))
            }
            _ => None,
        },
        WizardScreen::Completion => match key.code {
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') | KeyCode::Esc => {
                Some(WizardAction::Confirm)
            }
            KeyCode::Char('l') => Some(WizardAction::Launch),
            _ => None,
        },
    }
}

/// Advances the wizard one step. Total over the action set: unmapped
/// combinations are no-ops, never errors.
pub fn wizard_transition(
    nav: &mut WizardState,
    state: &mut SetupState,
    action: WizardAction,
) -> WizardTransition {
    if action == WizardAction::Cancel {
        return WizardTransition::cancel();
    }
    match nav.screen {
        WizardScreen::Welcome => match action {
            WizardAction::Confirm => {
                nav.open(WizardScreen::PlatformSelect);
                WizardTransition::no_op(None)
            }
            _ => WizardTransition::no_op(None),
        },
        WizardScreen::PlatformSelect => match action {
            WizardAction::MovePrev => {
                nav.cursor = cycle_prev(nav.cursor, platform_options().len());
                WizardTransition::no_op(None)
            }
            WizardAction::MoveNext => {
                nav.cursor = cycle_next(nav.cursor, platform_options().len());
                WizardTransition::no_op(None)
            }
            WizardAction::Confirm => {
                let platform = platform_options()[nav.cursor.min(platform_options().len() - 1)];
                state.select_platform(platform);
                match platform {
                    Platform::Assistant => {
                        nav.extension_draft = state.assistant_extensions.clone();
                        nav.open(WizardScreen::AssistantDetail);
                    }
                    Platform::CliTool => {
                        nav.key_input.clear();
                        nav.open(WizardScreen::CliDetail);
                    }
                }
                WizardTransition::no_op(Some(format!("selected {}", platform.as_str())))
            }
            WizardAction::Back => WizardTransition::cancel(),
            _ => WizardTransition::no_op(None),
        },
        WizardScreen::AssistantDetail => match action {
            WizardAction::MovePrev => {
                nav.cursor = cycle_prev(nav.cursor, extension_menu().len());
                WizardTransition::no_op(None)
            }
            WizardAction::MoveNext => {
                nav.cursor = cycle_next(nav.cursor, extension_menu().len());
                WizardTransition::no_op(None)
            }
            WizardAction::Toggle => {
                let item = extension_menu()[nav.cursor.min(extension_menu().len() - 1)];
                match item.extension {
                    Some(extension) => {
                        let feedback = if nav.extension_draft.remove(&extension) {
                            format!("{} disabled", extension.as_str())
                        } else {
                            nav.extension_draft.insert(extension);
                            format!("{} enabled", extension.as_str())
                        };
                        WizardTransition::no_op(Some(feedback))
                    }
                    None => WizardTransition::no_op(Some("not available yet".to_string())),
                }
            }
            WizardAction::Confirm => {
                state.assistant_extensions = nav.extension_draft.clone();
                nav.open(WizardScreen::Completion);
                WizardTransition::no_op(None)
            }
            WizardAction::Back => {
                nav.extension_draft.clear();
                nav.open(WizardScreen::PlatformSelect);
                WizardTransition::no_op(Some("enhancements discarded".to_string()))
            }
            _ => WizardTransition::no_op(None),
        },
        WizardScreen::CliDetail => match action {
            WizardAction::Input(ch) => {
                nav.key_input.push(ch);
                WizardTransition::no_op(None)
            }
            WizardAction::Backspace => {
                nav.key_input.pop();
                WizardTransition::no_op(None)
            }
            WizardAction::Confirm => match validate_api_key(&nav.key_input) {
                Ok(()) => {
                    state.cli_api_key = Some(nav.key_input.clone());
                    nav.key_input.clear();
                    nav.open(WizardScreen::Completion);
                    WizardTransition::no_op(Some("API key accepted".to_string()))
                }
                Err(reason) => WizardTransition::no_op(Some(reason.to_string())),
            },
            WizardAction::Back => {
                nav.key_input.clear();
                nav.open(WizardScreen::PlatformSelect);
                WizardTransition::no_op(Some("API key discarded".to_string()))
            }
            _ => WizardTransition::no_op(None),
        },
        WizardScreen::Completion => match action {
            WizardAction::Confirm => WizardTransition::finish(None),
            WizardAction::Launch => WizardTransition::finish(state.selected_platform),
            _ => WizardTransition::no_op(None),
        },
    }
}

/// Parses `VIBESTACK_SETUP_SCRIPT_KEYS` into key events. Tokens are
/// comma-separated; `type:<text>` expands to one char event per character.
pub fn parse_scripted_wizard_keys(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(text) = trimmed.strip_prefix("type:") {
            for ch in text.chars() {
                keys.push(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
            }
            continue;
        }
        let key = match trimmed.to_ascii_lowercase().as_str() {
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "left" => KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            "right" => KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "space" => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                    _ => {
                        return Err(format!(
                            "invalid VIBESTACK_SETUP_SCRIPT_KEYS token `{other}`; valid tokens: up,down,left,right,enter,esc,space,backspace,ctrl-c,type:<text>,single characters"
                        ));
                    }
                }
            }
        };
        keys.push(key);
    }
    Ok(keys)
}
