use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::{GameSession, Phase};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &GameSession {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let prompt_style = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC);

        let word = self.display_word();

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let word_occupied_lines =
            ((word.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);

        // timer, gap, word, gap, counts, banner
        let content_height = word_occupied_lines + 6;
        let top_pad = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(top_pad),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(word_occupied_lines),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let timer = Paragraph::new(Span::styled(self.timer_text(), dim_bold_style))
            .alignment(Alignment::Center);
        timer.render(chunks[1], buf);

        let word_line = match self.cursor().filter(|_| self.phase() == Phase::Running) {
            Some(cursor) => {
                // Typed prefix as green mask characters, the expected next
                // character underlined, the untyped tail dimmed.
                let masked = cursor.masked();
                let pos = cursor.position();
                let mask: String = masked.chars().take(pos).collect();
                let mut tail = masked.chars().skip(pos);
                let next = tail.next().map(|c| c.to_string()).unwrap_or_default();
                let rest: String = tail.collect();

                Line::from(vec![
                    Span::styled(mask, green_bold_style),
                    Span::styled(next, underlined_dim_bold_style),
                    Span::styled(rest, dim_bold_style),
                ])
            }
            None => Line::from(Span::styled(word, prompt_style)),
        };

        let word_widget = Paragraph::new(word_line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        word_widget.render(chunks[3], buf);

        let counts = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} letters", self.hits()), green_bold_style),
            Span::raw("   "),
            Span::styled(format!("{} misses", self.misses()), red_bold_style),
        ]))
        .alignment(Alignment::Center);
        counts.render(chunks[5], buf);

        if self.phase() == Phase::Idle {
            if let Some(result) = self.last_result() {
                let banner = Paragraph::new(Span::styled(result.summary(), bold_style))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                banner.render(chunks[6], buf);
            }
        }
    }
}
