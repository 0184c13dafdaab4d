// Help modal implementation

use super::navigation::{HelpModalState, HelpSection};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, state: &mut HelpModalState) {
        let area = frame.area();

        // Calculate modal size (70% width, 80% height); widened in u32
        // so very wide terminals cannot overflow the percentage math
        let modal_width = ((area.width as u32 * 70) / 100).max(50).min(u16::MAX as u32) as u16;
        let modal_height = ((area.height as u32 * 80) / 100).max(16).min(u16::MAX as u32) as u16;

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width.min(area.width),
            height: modal_height.min(area.height),
        };

        // Clear background
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("Help - {}", state.current_section.title()))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        // Layout: tabs + content + footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section tabs
                Constraint::Min(6),    // Content area
                Constraint::Length(1), // Footer/navigation hints
            ])
            .split(inner);

        Self::render_tabs(frame, chunks[0], state.current_section);

        let content = Self::section_content(state);
        let content_height = content.len() as u16;
        let viewport_height = chunks[1].height;

        state.max_scroll = content_height.saturating_sub(viewport_height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll);

        let visible_content: Vec<Line> = content
            .into_iter()
            .skip(state.scroll_offset as usize)
            .take(viewport_height as usize)
            .collect();

        let paragraph = Paragraph::new(visible_content)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, chunks[1]);

        Self::render_footer(frame, chunks[2], state);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, current: HelpSection) {
        let sections = HelpSection::all_sections();
        let mut spans = Vec::new();

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            let style = if *section == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            spans.push(Span::styled(section.title(), style));
        }

        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        frame.render_widget(tabs, area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, state: &HelpModalState) {
        let mut hints = vec![
            Span::styled("[Tab/Arrows]", Style::default().fg(Color::Yellow)),
            Span::raw(" Switch  "),
            Span::styled("[↑↓/jk]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll  "),
            Span::styled("[Esc/H]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ];

        if state.max_scroll > 0 {
            hints.push(Span::styled(
                format!("  ({}/{})", state.scroll_offset, state.max_scroll),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(hints)), area);
    }

    fn section_content(state: &HelpModalState) -> Vec<Line<'static>> {
        match state.current_section {
            HelpSection::About => Self::about_content(state),
            HelpSection::Browsing => Self::browsing_content(),
            HelpSection::SearchFilters => Self::search_content(),
            HelpSection::KeyboardShortcuts => Self::shortcuts_content(),
        }
    }

    fn about_content(state: &HelpModalState) -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("faqdash v{}", state.app_version),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Kiosk-mode FAQ browser for unattended information displays."),
            Line::from(""),
            Line::from(format!(
                "Catalog: {} entries across {} categories.",
                state.catalog_len,
                state.category_count.saturating_sub(1)
            )),
            Line::from(""),
            Line::from("The layout adapts to the terminal: wide terminals get a"),
            Line::from("category sidebar (landscape), tall ones a pill row and a"),
            Line::from("pop-up category drawer (portrait)."),
        ]
    }

    fn browsing_content() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Browsing the grid",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Arrow keys move the card selection; Enter or a mouse click"),
            Line::from("expands a card into the detail view."),
            Line::from(""),
            Line::from("The detail view formats numbered procedures as discrete"),
            Line::from("steps and shows up to four related questions from the same"),
            Line::from("category. Selecting a related question jumps straight to"),
            Line::from("its detail view."),
            Line::from(""),
            Line::from("Esc (or the [X] button) returns to the grid; your category"),
            Line::from("and search are untouched."),
        ]
    }

    fn search_content() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Search & category filters",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press / to edit the search box. Every keystroke re-filters;"),
            Line::from("the query matches question, answer, and category text,"),
            Line::from("case-insensitively."),
            Line::from(""),
            Line::from("Tab cycles categories; M opens the category drawer. Category"),
            Line::from("and search combine (both must match)."),
            Line::from(""),
            Line::from("When nothing matches, press R to reset both filters at once."),
        ]
    }

    fn shortcuts_content() -> Vec<Line<'static>> {
        let entries: &[(&str, &str)] = &[
            ("/", "Edit search"),
            ("Tab / Shift+Tab", "Next / previous category"),
            ("M", "Toggle category drawer"),
            ("R", "Reset filters (grid) / toggle related (detail)"),
            ("Enter", "Expand selected card"),
            ("1-4", "Open related question (detail view)"),
            ("Esc", "Close topmost overlay"),
            ("V", "Intro video overlay"),
            ("F", "Toggle kiosk fullscreen (hide chrome)"),
            ("H", "This help"),
            ("Q / Ctrl+C", "Quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", key),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*desc),
            ]));
        }
        lines
    }
}
