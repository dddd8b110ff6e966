use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
};

use crate::{constants::CATEGORY_COLORS, domain::Category};

pub(super) fn category_color(category: Category) -> Color {
    let pos = Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(0);
    CATEGORY_COLORS[pos % CATEGORY_COLORS.len()]
}

pub(super) fn category_chip(category: Category, active: bool) -> Span<'static> {
    let color = category_color(category);
    let style = if active {
        Style::default()
            .fg(text_color_for_bg(color))
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    Span::styled(format!(" {} ", category.label()), style)
}

pub(super) fn text_color_for_bg(bg_color: Color) -> Color {
    if let Color::Rgb(r, g, b) = bg_color {
        let brightness = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        if brightness > 128 {
            Color::Black
        } else {
            Color::White
        }
    } else {
        Color::White
    }
}
