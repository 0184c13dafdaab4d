// Card grid screen: header with search, category navigation, and the
// responsive card grid. Layout rules switch on orientation.

use crate::catalog::{Category, FaqRecord};
use crate::ui::components::Footer;
use crate::ui::constants::{
    CARD_MIN_WIDTH, HEADER_HEIGHT, KIOSK_SUBTITLE, KIOSK_TITLE, MAX_COLUMNS_LANDSCAPE,
    MAX_COLUMNS_PORTRAIT, SIDEBAR_WIDTH,
};
use crate::ui::state::{AppState, BrowseState, InputMode, Orientation};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct GridView;

impl GridView {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        state.viewport = area;

        // Derive the visible subset before taking mutable borrows
        let records: Vec<FaqRecord> = state.filtered().into_iter().cloned().collect();
        let categories = state.categories.clone();
        let total = state.catalog.len();
        let orientation = state.orientation;
        let kiosk = state.kiosk_fullscreen;
        let show_hint = state.show_help_hint && !kiosk;

        let browse = &mut state.browse;
        browse.card_areas.clear();
        browse.category_areas.clear();
        browse.search_area = None;

        let constraints = if kiosk {
            vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]
        } else {
            vec![
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self::render_header(frame, chunks[0], browse, &categories, records.len(), show_hint);

        match orientation {
            Orientation::Landscape => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .split(chunks[1]);
                Self::render_sidebar(frame, body[0], &categories, browse);
                Self::render_grid(frame, body[1], &records, browse, MAX_COLUMNS_LANDSCAPE);
            }
            Orientation::Portrait => {
                let body = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(chunks[1]);
                Self::render_pills(frame, body[0], &categories, browse);
                Self::render_grid(frame, body[1], &records, browse, MAX_COLUMNS_PORTRAIT);
            }
        }

        if !kiosk {
            let footer = match browse.input_mode {
                InputMode::Editing => Footer::search_editing(),
                InputMode::Normal => Footer::browse(records.len(), total),
            };
            footer.render(chunks[2], frame.buffer_mut());
        }

        // Category drawer overlays the grid (portrait menu)
        if browse.menu_open {
            Self::render_menu_drawer(frame, area, &categories, browse);
        }
    }

    fn render_header(
        frame: &mut Frame,
        area: Rect,
        browse: &mut BrowseState,
        categories: &[Category],
        result_count: usize,
        show_hint: bool,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        // Title line
        let mut title_spans = vec![
            Span::styled(
                format!("🎓 {}", KIOSK_TITLE),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", KIOSK_SUBTITLE),
                Style::default().fg(Color::Gray),
            ),
        ];
        if show_hint {
            title_spans.push(Span::styled(
                "   press H for help",
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title_spans)), rows[0]);

        // Search line with result count on the right
        let active_name = categories
            .iter()
            .find(|c| c.id == browse.active_category)
            .map(|c| c.name.as_str())
            .unwrap_or("All");

        let search_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(24)])
            .split(rows[1]);

        let editing = browse.input_mode == InputMode::Editing;
        let (query_span, cursor) = if editing {
            // Show the cursor position while editing
            let chars: Vec<char> = browse.search_query.chars().collect();
            let before: String = chars[..browse.cursor_pos].iter().collect();
            let after: String = chars[browse.cursor_pos..].iter().collect();
            (format!("{before}│{after}"), true)
        } else if browse.search_query.is_empty() {
            ("Search FAQs…".to_string(), false)
        } else {
            (browse.search_query.clone(), false)
        };

        let search_style = if editing {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else if browse.search_query.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let search_line = Line::from(vec![
            Span::styled("🔍 ", Style::default().fg(Color::Gray)),
            Span::styled(query_span, search_style),
            if cursor {
                Span::raw("")
            } else {
                Span::styled("  (/ to search)", Style::default().fg(Color::DarkGray))
            },
        ]);
        frame.render_widget(Paragraph::new(search_line), search_cols[0]);
        browse.search_area = Some(search_cols[0]);

        let count_line = Line::from(Span::styled(
            format!(
                "{} · {} {}",
                active_name,
                result_count,
                if result_count == 1 { "result" } else { "results" }
            ),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(
            Paragraph::new(count_line).alignment(Alignment::Right),
            search_cols[1],
        );
    }

    fn render_sidebar(
        frame: &mut Frame,
        area: Rect,
        categories: &[Category],
        browse: &mut BrowseState,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, category) in categories.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            };

            let active = category.id == browse.active_category;
            let style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if active { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{} ", category.icon)),
                Span::styled(category.name.clone(), style),
            ]);
            frame.render_widget(Paragraph::new(line), row);
            browse.category_areas.push((row, category.id.clone()));
        }
    }

    fn render_pills(
        frame: &mut Frame,
        area: Rect,
        categories: &[Category],
        browse: &mut BrowseState,
    ) {
        let mut x = area.x;
        for category in categories {
            let label = format!(" {} {} ", category.icon, category.name);
            let width = label.chars().count() as u16 + 1;
            if x + width > area.x + area.width {
                break;
            }
            let pill = Rect {
                x,
                y: area.y,
                width,
                height: 1,
            };

            let active = category.id == browse.active_category;
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), pill);
            browse.category_areas.push((pill, category.id.clone()));
            x += width + 1;
        }
    }

    fn render_grid(
        frame: &mut Frame,
        area: Rect,
        records: &[FaqRecord],
        browse: &mut BrowseState,
        max_columns: usize,
    ) {
        if records.is_empty() {
            Self::render_empty_state(frame, area);
            browse.grid_columns = 1;
            return;
        }

        let columns = ((area.width / CARD_MIN_WIDTH) as usize).clamp(1, max_columns);
        browse.grid_columns = columns;

        let rows: Vec<&[FaqRecord]> = records.chunks(columns).collect();
        let row_heights: Vec<u16> = rows
            .iter()
            .map(|row| row.iter().map(|r| r.size.rows()).max().unwrap_or(5))
            .collect();

        // Keep the selected card's row visible
        let selected_row = (browse.selected_card / columns).min(rows.len() - 1);
        if selected_row < browse.grid_scroll {
            browse.grid_scroll = selected_row;
        }
        loop {
            let visible_height: u16 = row_heights[browse.grid_scroll..=selected_row]
                .iter()
                .sum();
            if visible_height <= area.height || browse.grid_scroll >= selected_row {
                break;
            }
            browse.grid_scroll += 1;
        }

        let mut y = area.y;
        for (row_idx, row) in rows.iter().enumerate().skip(browse.grid_scroll) {
            let height = row_heights[row_idx];
            if y + height > area.y + area.height {
                break;
            }

            let card_width = area.width / columns as u16;
            for (col_idx, record) in row.iter().enumerate() {
                let card_area = Rect {
                    x: area.x + col_idx as u16 * card_width,
                    y,
                    width: card_width.saturating_sub(1),
                    height,
                };
                let flat_idx = row_idx * columns + col_idx;
                Self::render_card(frame, card_area, record, flat_idx == browse.selected_card);
                browse.card_areas.push((card_area, record.id));
            }
            y += height;
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, record: &FaqRecord, selected: bool) {
        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(record.accent.color())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", record.icon));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let question_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![Line::from(Span::styled(
            record.question.clone(),
            question_style,
        ))];
        if inner.height > 2 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                record.category.clone(),
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn render_empty_state(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No results found",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or category filter",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("[R]", Style::default().fg(Color::Yellow)),
                Span::raw(" to reset filters"),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_menu_drawer(
        frame: &mut Frame,
        area: Rect,
        categories: &[Category],
        browse: &mut BrowseState,
    ) {
        let drawer_width = 40.min(area.width.saturating_sub(4));
        let drawer_height = (categories.len() as u16 + 4).min(area.height.saturating_sub(2));

        let drawer_area = Rect {
            x: (area.width.saturating_sub(drawer_width)) / 2,
            y: (area.height.saturating_sub(drawer_height)) / 2,
            width: drawer_width,
            height: drawer_height,
        };

        frame.render_widget(Clear, drawer_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Categories ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(drawer_area);
        frame.render_widget(block, drawer_area);

        let items: Vec<ListItem> = categories
            .iter()
            .map(|c| {
                let active = c.id == browse.active_category;
                let style = if active {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", c.icon)),
                    Span::styled(c.name.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        // Record hit areas for mouse selection (one row per entry)
        for (i, category) in categories.iter().enumerate() {
            let y = inner.y + i as u16;
            if y < inner.y + inner.height {
                browse.category_areas.push((
                    Rect {
                        x: inner.x,
                        y,
                        width: inner.width,
                        height: 1,
                    },
                    category.id.clone(),
                ));
            }
        }

        frame.render_stateful_widget(list, inner, &mut browse.menu_list_state);
    }
}
