use crate::setup::navigation::{WizardState, ALL_WIZARD_SCREENS};
use crate::setup::state::{extension_menu, platform_options, SetupState};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table};
use ratatui::Terminal;
use std::io;

pub const WIZARD_TITLE: &str = "VibeStack Setup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardListViewModel {
    pub title: String,
    pub mode_line: String,
    pub items: Vec<String>,
    pub selected: usize,
    pub status_text: String,
    pub hint_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupFieldRow {
    pub field: String,
    pub value: Option<String>,
}

pub fn field_row(field: &str, value: Option<String>) -> SetupFieldRow {
    SetupFieldRow {
        field: field.to_string(),
        value,
    }
}

fn mode_line(state_exists: bool) -> String {
    if state_exists {
        "Mode: reconfigure (previous setup found)".to_string()
    } else {
        "Mode: first-time setup".to_string()
    }
}

pub fn project_platform_select_view_model(
    state_exists: bool,
    nav: &WizardState,
) -> WizardListViewModel {
    debug_assert!(ALL_WIZARD_SCREENS.contains(&nav.screen));
    WizardListViewModel {
        title: "LLM Tool Selector".to_string(),
        mode_line: mode_line(state_exists),
        items: platform_options()
            .iter()
            .map(|platform| platform.label().to_string())
            .collect(),
        selected: nav.cursor.min(platform_options().len().saturating_sub(1)),
        status_text: nav.status_text.clone(),
        hint_text: nav.hint_text.clone(),
    }
}

pub fn project_assistant_view_model(state_exists: bool, nav: &WizardState) -> WizardListViewModel {
    let items = extension_menu()
        .iter()
        .map(|item| {
            let marker = match item.extension {
                Some(extension) if nav.extension_draft.contains(&extension) => "[x]",
                Some(_) => "[ ]",
                None => "[-]",
            };
            format!("{marker} {}", item.label)
        })
        .collect();
    WizardListViewModel {
        title: "Enhance Your Toolkit".to_string(),
        mode_line: mode_line(state_exists),
        items,
        selected: nav.cursor.min(extension_menu().len().saturating_sub(1)),
        status_text: nav.status_text.clone(),
        hint_text: nav.hint_text.clone(),
    }
}

pub fn project_completion_rows(state: &SetupState) -> Vec<SetupFieldRow> {
    let platform = state
        .selected_platform
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| "none selected".to_string());
    let extensions = if state.assistant_extensions.is_empty() {
        "none".to_string()
    } else {
        state
            .assistant_extensions
            .iter()
            .map(|e| e.as_str().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let api_key = state
        .cli_api_key
        .as_deref()
        .map(|key| format!("{} (configured)", mask_api_key(key)));
    vec![
        field_row("Platform", Some(platform)),
        field_row("Enhancements", Some(extensions)),
        field_row("API key", api_key),
    ]
}

/// Keeps the first three and last four characters of a credential for display.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_chars {
        return value.to_string();
    }
    chars[chars.len() - max_chars..].iter().collect()
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub(crate) fn draw_welcome_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    hint: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let area = centered_rect(60, 40, frame.area());
            let block = Block::default()
                .borders(Borders::ALL)
                .padding(Padding::new(2, 2, 1, 1));
            frame.render_widget(block.clone(), area);
            let inner = block.inner(area);
            let lines = vec![
                Line::from(Span::styled(
                    "VIBESTACK",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("AI Development Environment"),
                Line::from("STATUS: READY"),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[ {hint} ]"),
                    Style::default().fg(Color::Yellow),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
                inner,
            );
        })
        .map_err(|e| format!("failed to render welcome screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_list_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view_model: &WizardListViewModel,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = wizard_layout(frame.area());
            frame.render_widget(header_widget(&view_model.title, &view_model.mode_line), chunks[0]);

            let mut list_items = Vec::with_capacity(view_model.items.len());
            for (idx, line) in view_model.items.iter().enumerate() {
                let mut item = ListItem::new(Line::from(Span::raw(line.clone())));
                if idx == view_model.selected {
                    item = item.style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                list_items.push(item);
            }
            frame.render_widget(List::new(list_items).block(main_panel_block()), chunks[1]);

            frame.render_widget(
                footer_widget(&view_model.hint_text, &view_model.status_text),
                chunks[2],
            );
        })
        .map_err(|e| format!("failed to render list screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_key_input_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state_exists: bool,
    nav: &WizardState,
) -> Result<(), String> {
    let mode = mode_line(state_exists);
    terminal
        .draw(|frame| {
            let chunks = wizard_layout(frame.area());
            frame.render_widget(header_widget("API Keys Config", &mode), chunks[0]);

            let panel = main_panel_block();
            frame.render_widget(panel.clone(), chunks[1]);
            let inner = panel.inner(chunks[1]);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(1),
                ])
                .split(inner);
            let max_input_width = rows[2].width.saturating_sub(2) as usize;
            let display_value = tail_for_display(&nav.key_input, max_input_width);
            frame.render_widget(
                Paragraph::new("Enter your OpenAI API key (starts with sk-):"),
                rows[0],
            );
            frame.render_widget(
                Paragraph::new(Line::from(format!("> {display_value}"))),
                rows[2],
            );
            frame.set_cursor_position((
                rows[2].x + 2 + display_value.chars().count() as u16,
                rows[2].y,
            ));

            frame.render_widget(footer_widget(&nav.hint_text, &nav.status_text), chunks[2]);
        })
        .map_err(|e| format!("failed to render key input screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_completion_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state_exists: bool,
    nav: &WizardState,
    state: &SetupState,
) -> Result<(), String> {
    let mode = mode_line(state_exists);
    let rows = project_completion_rows(state);
    terminal
        .draw(|frame| {
            let chunks = wizard_layout(frame.area());
            frame.render_widget(header_widget("Setup Summary", &mode), chunks[0]);

            let table_rows = rows.iter().map(|row| {
                Row::new(vec![
                    Cell::from(row.field.clone()),
                    Cell::from(row.value.clone().unwrap_or_default()),
                ])
            });
            let table = Table::new(
                table_rows,
                [Constraint::Percentage(35), Constraint::Percentage(65)],
            )
            .column_spacing(2)
            .block(main_panel_block());
            frame.render_widget(table, chunks[1]);

            frame.render_widget(footer_widget(&nav.hint_text, &nav.status_text), chunks[2]);
        })
        .map_err(|e| format!("failed to render completion screen: {e}"))?;
    Ok(())
}

fn wizard_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area)
}

fn header_widget(title: &str, mode_line: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                WIZARD_TITLE.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" > {title}")),
        ]),
        Line::from(mode_line.to_string()),
    ])
    .block(Block::default().borders(Borders::ALL))
}

fn footer_widget(hint: &str, status: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(hint.to_string()),
        Line::from(format!("Status: {status}")),
    ])
    .block(Block::default().borders(Borders::ALL))
}

fn main_panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(3, 3, 2, 2))
}
