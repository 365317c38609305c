//! Drawing routines for the individual examples.
//!
//! Every routine keeps its output inside the `area` it is given, whatever the
//! tween value (overshooting easings included).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{MAX_ELEVATION, caption};
use crate::catalog::AnimationKind;
use crate::motion::Animatable;
use crate::theme::Theme;

/// Center a `width` x `height` rectangle inside `area`, shrinking it to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Fill `rect` with a solid background.
fn fill(f: &mut Frame, rect: Rect, bg: Color) {
    f.render_widget(Block::default().style(Style::default().bg(bg)), rect);
}

/// Draw `text` centered on the middle row of `rect`.
fn label(f: &mut Frame, rect: Rect, text: &str, style: Style) {
    if rect.height == 0 || rect.width == 0 {
        return;
    }
    let row = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
    f.render_widget(
        Paragraph::new(text.to_string())
            .style(style)
            .alignment(Alignment::Center),
        row,
    );
}

/// Panel that expands downward and fades in from the background as `visibility` rises.
///
/// The caption uses the canvas color, so it only emerges as the panel color does.
pub(super) fn appear(f: &mut Frame, area: Rect, th: &Theme, visibility: f32) {
    let stage = centered(area, 32, 7);
    let v = visibility.clamp(0.0, 1.0);
    let height = 0u16.lerp(stage.height, v).min(stage.height);
    if height == 0 {
        return;
    }
    let panel = Rect::new(stage.x, stage.y, stage.width, height);
    fill(f, panel, th.base.lerp(th.primary, v));
    label(
        f,
        panel,
        caption(AnimationKind::AppearDisappear),
        Style::default()
            .fg(th.base)
            .add_modifier(Modifier::BOLD),
    );
}

/// Panel filled with the animated background color.
pub(super) fn colour(f: &mut Frame, area: Rect, th: &Theme, bg: Color) {
    let stage = centered(area, 32, 7);
    fill(f, stage, bg);
    label(
        f,
        stage,
        caption(AnimationKind::ChangeColour),
        Style::default().fg(th.base).add_modifier(Modifier::BOLD),
    );
}

/// Framed box interpolating between a compact and an expanded size.
pub(super) fn size(f: &mut Frame, area: Rect, th: &Theme, growth: f32) {
    let max_w = area.width.min(46);
    let max_h = area.height.min(11);
    let w = 18u16.min(max_w).lerp(max_w, growth).min(max_w);
    let h = 5u16.min(max_h).lerp(max_h, growth).min(max_h);
    let rect = centered(area, w, h);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.accent))
        .style(Style::default().bg(th.surface));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    label(
        f,
        inner,
        caption(AnimationKind::Size),
        Style::default().fg(th.text).bg(th.surface),
    );
}

/// Box sliding from the left edge of its track toward the right edge.
pub(super) fn position(f: &mut Frame, area: Rect, th: &Theme, travel: f32) {
    let box_w = 17u16.min(area.width);
    let track_len = area.width.saturating_sub(box_w).min(40);
    let track = centered(area, box_w + track_len, 5);
    let offset = 0u16.lerp(track_len, travel).min(track_len);
    let rect = Rect::new(track.x + offset, track.y, box_w, track.height).intersection(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.accent))
        .style(Style::default().bg(th.primary));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    label(
        f,
        inner,
        caption(AnimationKind::Position),
        Style::default().fg(th.base).bg(th.primary),
    );
}

/// Frame whose filled content shrinks as padding grows.
pub(super) fn padding(f: &mut Frame, area: Rect, th: &Theme, pad: u16) {
    let outer = centered(area, 36, 11);
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(th.accent));
    let inner = frame.inner(outer);
    f.render_widget(frame, outer);
    let pad_x = pad.saturating_mul(2).min(inner.width / 2);
    let pad_y = pad.min(inner.height / 2);
    let content = Rect::new(
        inner.x + pad_x,
        inner.y + pad_y,
        inner.width - 2 * pad_x,
        inner.height - 2 * pad_y,
    );
    if content.width == 0 || content.height == 0 {
        return;
    }
    fill(f, content, th.primary);
    label(
        f,
        content,
        caption(AnimationKind::Padding),
        Style::default().fg(th.base).bg(th.primary),
    );
}

/// Card casting a shadow offset by `depth` rows and twice as many columns.
pub(super) fn elevation(f: &mut Frame, area: Rect, th: &Theme, depth: u16) {
    let depth = depth.min(MAX_ELEVATION);
    let stage = centered(area, 28 + 2 * MAX_ELEVATION, 5 + MAX_ELEVATION);
    let card_w = stage.width.saturating_sub(2 * MAX_ELEVATION).max(1);
    let card_h = stage.height.saturating_sub(MAX_ELEVATION).max(1);
    let card = Rect::new(stage.x, stage.y, card_w, card_h).intersection(area);
    if card.is_empty() {
        return;
    }
    if depth > 0 {
        let shadow =
            Rect::new(card.x + 2 * depth, card.y + depth, card.width, card.height).intersection(area);
        fill(f, shadow, th.shadow);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.subtext))
        .style(Style::default().bg(th.surface));
    let inner = block.inner(card);
    f.render_widget(block, card);
    label(
        f,
        inner,
        caption(AnimationKind::Elevation),
        Style::default().fg(th.text).bg(th.surface),
    );
}

/// Caption drawn in the animated color.
pub(super) fn text_colour(f: &mut Frame, area: Rect, fg: Color) {
    label(
        f,
        area,
        caption(AnimationKind::AnimateTextColour),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    );
}

/// Caption drawn with animated letter spacing, narrowed to fit `area`.
pub(super) fn smooth_text(f: &mut Frame, area: Rect, th: &Theme, spacing: u16) {
    let text = caption(AnimationKind::SmoothAnimateText);
    let mut spaced = spread(text, spacing);
    let mut s = spacing;
    while s > 0 && spaced.width() > usize::from(area.width) {
        s -= 1;
        spaced = spread(text, s);
    }
    label(
        f,
        area,
        &spaced,
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    );
}

/// Insert `spacing` blanks between the characters of `text`.
pub(super) fn spread(text: &str, spacing: u16) -> String {
    let gap = " ".repeat(usize::from(spacing));
    let mut out = String::with_capacity(text.len() * (1 + gap.len()));
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(&gap);
        }
        out.push(ch);
    }
    out
}
