use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::domain::Category;

use super::{App, ui_helpers, view_style};

impl App {
    pub(super) fn render_search_modal(&self, f: &mut Frame, terminal_size: Rect) {
        let modal_rect = self.modal_rect(terminal_size);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("search")
            .title_alignment(ratatui::layout::Alignment::Center)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(modal_rect);

        f.render_widget(Clear, modal_rect);
        f.render_widget(block, modal_rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        self.render_query_line(f, rows[0]);
        self.render_category_chips(f, rows[1]);
        self.render_result_list(f, rows[2]);
    }

    fn render_query_line(&self, f: &mut Frame, area: Rect) {
        let query_span = if self.search.query.is_empty() {
            Span::styled("type to search...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                self.search.query.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let line = Line::from(vec![
            Span::styled("? ", Style::default().fg(Color::Green)),
            query_span,
            Span::styled("_", Style::default().fg(Color::Green)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_category_chips(&self, f: &mut Frame, area: Rect) {
        let mut chips: Vec<Span> = Vec::new();

        let all_active = self.search.category.is_none();
        let all_style = if all_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        chips.push(Span::styled(" ALL ", all_style));

        for category in Category::ALL {
            chips.push(Span::raw(" "));
            chips.push(view_style::category_chip(
                category,
                self.search.category == Some(category),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(chips)), area);
    }

    fn render_result_list(&self, f: &mut Frame, area: Rect) {
        if self.search.results.is_empty() {
            let message = if self.search.query.trim().is_empty() && self.search.category.is_none()
            {
                "Type something or pick a category"
            } else {
                "No matches"
            };
            let line = Line::from(Span::styled(message, Style::default().fg(Color::DarkGray)));
            f.render_widget(Paragraph::new(line), area);
            return;
        }

        let max_chars = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .search
            .results
            .iter()
            .map(|activity| {
                let color = activity
                    .categories
                    .first()
                    .map(|&c| view_style::category_color(c))
                    .unwrap_or(Color::White);
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(
                        ui_helpers::truncate_chars(activity.text, max_chars),
                        Style::default().fg(Color::White),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .bg(Color::Rgb(50, 50, 70))
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(Some(self.search.selected_index));
        f.render_stateful_widget(list, area, &mut state);
    }
}
