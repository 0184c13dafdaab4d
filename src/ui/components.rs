// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    pub fn browse(result_count: usize, total: usize) -> Self {
        let stats_text = format!("Showing {} of {} FAQs  |  ", result_count, total);

        let mut spans = vec![Span::raw(stats_text)];

        let controls = [
            ("[/]", " Search"),
            ("[Tab]", " Category"),
            ("[M]", "enu"),
            ("[R]", "eset"),
            ("[V]", "ideo"),
            ("[F]", "ullscreen"),
            ("[H]", "elp"),
            ("[Q]", "uit"),
        ];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn detail(has_related: bool) -> Self {
        let mut controls = vec![("[Esc]", " Close"), ("[↑/↓]", " Scroll")];
        if has_related {
            controls.push(("[R]", "elated"));
            controls.push(("[1-4]", " Open related"));
        }
        controls.push(("[H]", "elp"));

        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn search_editing() -> Self {
        let controls = [
            ("[Esc/Enter]", " Done"),
            ("[Ctrl+U]", " Clear"),
            ("[←/→]", " Move cursor"),
        ];

        let mut spans = vec![Span::raw("SEARCH: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}
