// Expanded card overlay: question, formatted answer, related questions.
// Related entries show as a persistent side stack in landscape and a
// slide-up toggle panel in portrait; the selection contract is the same.

use crate::catalog::{FaqRecord, FormattedAnswer, format_answer};
use crate::ui::components::Footer;
use crate::ui::constants::RELATED_STACK_WIDTH;
use crate::ui::state::{AppState, BrowseState, Orientation};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailView;

impl DetailView {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        // A stale id renders nothing: defensive state, not an error
        let Some(record) = state.expanded_record().cloned() else {
            return;
        };
        let related: Vec<FaqRecord> = state
            .related_records()
            .into_iter()
            .cloned()
            .collect();
        let orientation = state.orientation;
        let kiosk = state.kiosk_fullscreen;

        let browse = &mut state.browse;
        browse.related_areas.clear();
        browse.detail_close_area = None;
        browse.related_toggle_area = None;

        let modal_area = Self::modal_rect(frame.area());

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(record.accent.color()))
            .title(format!(" {} ", record.category))
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        // Close affordance in the top-right corner (second affordance is Esc)
        let close_area = Rect {
            x: modal_area.x + modal_area.width.saturating_sub(5),
            y: modal_area.y,
            width: 3,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[X]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            close_area,
        );
        browse.detail_close_area = Some(close_area);

        // Landscape with related entries: persistent side stack
        let (content_area, stack_area) =
            if orientation == Orientation::Landscape && !related.is_empty() {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(20),
                        Constraint::Length(RELATED_STACK_WIDTH),
                    ])
                    .split(inner);
                (cols[0], Some(cols[1]))
            } else {
                (inner, None)
            };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(content_area);

        Self::render_body(frame, rows[0], &record, browse);

        if !kiosk {
            Footer::detail(!related.is_empty()).render(rows[1], frame.buffer_mut());
        }

        if let Some(stack_area) = stack_area {
            Self::render_related_stack(frame, stack_area, &related, browse);
        } else if !related.is_empty() {
            // Portrait: toggle hint plus the slide-up panel
            Self::render_related_toggle(frame, content_area, &related, browse);
        }
    }

    /// Centered 90% x 90% overlay. Widened in u32 so very wide
    /// terminals cannot overflow the u16 percentage math.
    fn modal_rect(area: Rect) -> Rect {
        let width = ((area.width as u32 * 90) / 100).max(40).min(area.width as u32) as u16;
        let height = ((area.height as u32 * 90) / 100).max(16).min(area.height as u32) as u16;
        Rect {
            x: (area.width.saturating_sub(width)) / 2,
            y: (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn render_body(frame: &mut Frame, area: Rect, record: &FaqRecord, browse: &mut BrowseState) {
        let mut lines: Vec<Line> = vec![
            Line::from(vec![
                Span::raw(format!("{} ", record.icon)),
                Span::styled(
                    record.question.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];

        match format_answer(&record.answer) {
            FormattedAnswer::Steps(steps) => {
                for (n, step) in steps.iter().enumerate() {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(" ({}) ", n + 1),
                            Style::default()
                                .fg(Color::Black)
                                .bg(record.accent.color())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::styled(step.clone(), Style::default().fg(Color::White)),
                    ]));
                    lines.push(Line::from(""));
                }
            }
            FormattedAnswer::Paragraphs(paragraphs) => {
                for paragraph in &paragraphs {
                    lines.push(Line::from(Span::styled(
                        paragraph.clone(),
                        Style::default().fg(Color::White),
                    )));
                    lines.push(Line::from(""));
                }
            }
        }

        lines.push(Line::from(Span::styled(
            "Learn more: visit nas.edu.au",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));

        // Rough wrapped-height estimate for scroll clamping
        let est_rows: u16 = lines
            .iter()
            .map(|l| {
                let w: usize = l.spans.iter().map(|s| s.content.chars().count()).sum();
                ((w as u16) / area.width.max(1)) + 1
            })
            .sum();
        browse.detail_max_scroll = est_rows.saturating_sub(area.height);
        browse.detail_scroll = browse.detail_scroll.min(browse.detail_max_scroll);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((browse.detail_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_related_stack(
        frame: &mut Frame,
        area: Rect,
        related: &[FaqRecord],
        browse: &mut BrowseState,
    ) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Related ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for (n, record) in related.iter().enumerate() {
            let height = 4u16;
            if y + height > inner.y + inner.height {
                break;
            }
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            Self::render_related_card(frame, card_area, record, n);
            browse.related_areas.push((card_area, record.id));
            y += height;
        }
    }

    fn render_related_toggle(
        frame: &mut Frame,
        area: Rect,
        related: &[FaqRecord],
        browse: &mut BrowseState,
    ) {
        // Toggle hint pinned above the footer line
        let toggle_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1,
        };
        let label = if browse.related_open {
            "▼ Hide Related Questions [R]"
        } else {
            "▲ Show Related Questions [R]"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            toggle_area,
        );
        browse.related_toggle_area = Some(toggle_area);

        if !browse.related_open {
            return;
        }

        // Slide-up panel over the lower half of the detail body
        let panel_height = ((related.len() as u16) * 4 + 2).min(area.height / 2);
        let panel_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(panel_height + 1),
            width: area.width,
            height: panel_height,
        };

        frame.render_widget(Clear, panel_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Related Questions ")
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let mut y = inner.y;
        for (n, record) in related.iter().enumerate() {
            let height = 4u16;
            if y + height > inner.y + inner.height {
                break;
            }
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            Self::render_related_card(frame, card_area, record, n);
            browse.related_areas.push((card_area, record.id));
            y += height;
        }
    }

    fn render_related_card(frame: &mut Frame, area: Rect, record: &FaqRecord, index: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(record.accent.color()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{} ", record.icon)),
                Span::styled(
                    record.question.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                record.category.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_rect_handles_very_wide_terminals() {
        // u16 percentage math would overflow at widths >= 729
        let area = Rect {
            x: 0,
            y: 0,
            width: 1000,
            height: 300,
        };
        let modal = DetailView::modal_rect(area);
        assert_eq!(modal.width, 900);
        assert_eq!(modal.height, 270);
        assert_eq!(modal.x, 50);
        assert_eq!(modal.y, 15);
    }

    #[test]
    fn modal_rect_clamps_to_tiny_terminals() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 8,
        };
        let modal = DetailView::modal_rect(area);
        assert!(modal.width <= area.width);
        assert!(modal.height <= area.height);
    }
}
