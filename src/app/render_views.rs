use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::{AgeGroup, Gender};

use super::{App, SetupColumn, UiMode, view_style};

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        let hint = match self.ui_mode {
            UiMode::Setup => "↑↓ move · ←→ column · Enter set · g suggest · l lucky · / search · q quit",
            UiMode::Result => "a another · l lucky · / search · Esc back · q quit",
            UiMode::SearchModal => "type to search · ←→ category · ↑↓ pick · Enter show · Esc close",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    "antsy",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(
                Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                    .alignment(Alignment::Right),
            );
        let inner = block.inner(size);
        f.render_widget(block, size);

        match self.ui_mode {
            UiMode::Setup => self.render_setup(f, inner),
            UiMode::Result | UiMode::SearchModal => self.render_result(f, inner),
        }

        if self.in_search_modal() {
            self.render_search_modal(f, size);
        }
    }

    fn render_setup(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let age_focused = self.setup_column == SetupColumn::Age;
        self.render_choice_list(
            f,
            columns[0],
            "Age group",
            &AgeGroup::ALL.map(|a| a.label()),
            self.age_index,
            self.preferences
                .age_group
                .and_then(|a| AgeGroup::ALL.iter().position(|&x| x == a)),
            age_focused,
        );
        self.render_choice_list(
            f,
            columns[1],
            "Gender",
            &Gender::ALL.map(|g| g.label()),
            self.gender_index,
            self.preferences
                .gender
                .and_then(|g| Gender::ALL.iter().position(|&x| x == g)),
            !age_focused,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn render_choice_list(
        &self,
        f: &mut Frame,
        area: Rect,
        title: &str,
        labels: &[&str],
        cursor: usize,
        chosen: Option<usize>,
        focused: bool,
    ) {
        let items: Vec<ListItem> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let marker = if chosen == Some(i) { "● " } else { "○ " };
                let style = if chosen == Some(i) {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled((*label).to_string(), style),
                ]))
            })
            .collect();

        let border_color = if focused { Color::Green } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title.to_string())
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(50, 50, 70))
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        if focused {
            state.select(Some(cursor));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();

        if self.is_loading() {
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    "Thinking of something good...",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center),
            );
        } else if let Some(activity) = self.current {
            if self.lucky {
                lines.push(
                    Line::from(Span::styled(
                        "🎲 lucky pick",
                        Style::default().fg(Color::Magenta),
                    ))
                    .alignment(Alignment::Center),
                );
            }
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    activity.text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            if let Some(description) = activity.description {
                lines.push(Line::from(""));
                lines.push(
                    Line::from(Span::styled(
                        description,
                        Style::default()
                            .fg(Color::Gray)
                            .add_modifier(Modifier::ITALIC),
                    ))
                    .alignment(Alignment::Center),
                );
            }
            lines.push(Line::from(""));

            let mut chips: Vec<Span> = Vec::new();
            for (i, &category) in activity.categories.iter().enumerate() {
                if i > 0 {
                    chips.push(Span::raw(" "));
                }
                chips.push(view_style::category_chip(category, false));
            }
            lines.push(Line::from(chips).alignment(Alignment::Center));
        } else {
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    "Nothing picked yet",
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Center),
            );
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
