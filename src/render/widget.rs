// Card widget - Ratatui Widget implementation for invocation cards
//
// Renders one card inline with the TUI, matching the dialog color
// scheme

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::card::{render_output, InvocationCard};
use crate::tools::output::ToolOutput;

/// Widget for rendering one invocation card
pub struct CardWidget<'a> {
    pub card: &'a InvocationCard,
}

impl<'a> CardWidget<'a> {
    /// Create a new card widget
    pub fn new(card: &'a InvocationCard) -> Self {
        Self { card }
    }

    /// Render the arguments section
    fn render_arguments(args_json: &str) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "Arguments:",
            Style::default().fg(Color::DarkGray),
        ))];

        for line in args_json.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::White),
            )));
        }

        lines
    }

    /// Render the approve/reject prompt for a pending gated call
    fn render_approval_prompt() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Approve  ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled("  Reject  ", Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "y/a: Approve | n/r: Reject | Tab: Collapse",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }

    /// Render the result section
    fn render_result(output: &ToolOutput) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Result:",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        // Image URLs render link-like; GUI hosts would inline the image
        let body_style = if output.is_image_url() {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        for line in render_output(output).lines() {
            lines.push(Line::from(Span::styled(line.to_string(), body_style)));
        }

        lines
    }
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        if self.card.expanded {
            lines.extend(Self::render_arguments(&self.card.arguments_text()));

            if self.card.awaiting_approval() {
                lines.extend(Self::render_approval_prompt());
            } else if let Some(output) = self.card.result_output() {
                lines.extend(Self::render_result(&output));
            }
        }

        let mut title = format!(" 🤖 {}", self.card.invocation.tool_name);
        if self.card.shows_completed_badge() {
            title.push_str("  ✓ Completed");
        }
        title.push_str(if self.card.expanded { "  ▴ " } else { "  ▾ " });

        // Pending approvals get the warning border
        let border_style = if self.card.awaiting_approval() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .style(border_style),
            )
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}
