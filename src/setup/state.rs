use std::collections::BTreeSet;

/// The two tool integrations the wizard can configure. At most one is ever
/// active at completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Platform {
    Assistant,
    CliTool,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Assistant => "claude_code",
            Platform::CliTool => "llm_cli",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Assistant => "Claude Code (Interactive Assistant)",
            Platform::CliTool => "LLM CLI (Command Line Tool)",
        }
    }
}

pub const PLATFORM_OPTIONS: [Platform; 2] = [Platform::Assistant, Platform::CliTool];

pub fn platform_options() -> &'static [Platform] {
    &PLATFORM_OPTIONS
}

/// MCP server extensions attachable to the assistant platform. Playwright is
/// the only one currently wired to a launch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExtensionId {
    Playwright,
}

impl ExtensionId {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtensionId::Playwright => "playwright",
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            ExtensionId::Playwright => "npx",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            ExtensionId::Playwright => &["@playwright/mcp@latest"],
        }
    }
}

/// One row of the assistant enhancement menu. Rows without an extension are
/// placeholders and cannot be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionMenuItem {
    pub label: &'static str,
    pub extension: Option<ExtensionId>,
}

pub const EXTENSION_MENU: [ExtensionMenuItem; 3] = [
    ExtensionMenuItem {
        label: "Playwright (web automation)",
        extension: Some(ExtensionId::Playwright),
    },
    ExtensionMenuItem {
        label: "Context7 (library docs) - coming soon",
        extension: None,
    },
    ExtensionMenuItem {
        label: "GitHub (repo intelligence) - coming soon",
        extension: None,
    },
];

pub fn extension_menu() -> &'static [ExtensionMenuItem] {
    &EXTENSION_MENU
}

/// Accumulated wizard choices. Owned by the flow controller and threaded
/// explicitly through every transition; serialized exactly once at emission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupState {
    pub selected_platform: Option<Platform>,
    pub assistant_enabled: bool,
    pub assistant_extensions: BTreeSet<ExtensionId>,
    pub cli_tool_enabled: bool,
    pub cli_api_key: Option<String>,
    pub setup_complete: bool,
    pub setup_timestamp: Option<f64>,
}

impl SetupState {
    /// Selects a platform and clears the other platform's enabled flag, so at
    /// most one is active regardless of navigation history.
    pub fn select_platform(&mut self, platform: Platform) {
        self.selected_platform = Some(platform);
        self.assistant_enabled = platform == Platform::Assistant;
        self.cli_tool_enabled = platform == Platform::CliTool;
    }
}
