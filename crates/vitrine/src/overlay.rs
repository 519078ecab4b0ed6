//! Flat overlay widgets: navigation, loading placeholder and the
//! marketing section panels anchored at projected 3D points.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use vitrine_content::{BRAND, Section, SectionBody};
use vitrine_core::{Palette, SectionId};
use vitrine_scene::{OrbitCamera, project_world};

use crate::assets::Assets;

/// Spinner frames for the loading placeholder.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render the navigation bar on the top line, outside the canvas.
pub fn nav_bar(frame: &mut Frame, area: Rect, active: Option<SectionId>, palette: &Palette) {
    let mut spans = vec![
        Span::styled(format!(" {BRAND} "), Style::new().fg(palette.accent).bold()),
        Span::raw("  "),
    ];
    for id in SectionId::ALL {
        let style = if active == Some(id) {
            Style::new().fg(palette.accent).bold().underlined()
        } else {
            Style::new().fg(palette.text_dim)
        };
        spans.push(Span::styled(id.title(), style));
        spans.push(Span::raw("  "));
    }
    let bar = Paragraph::new(Line::from(spans)).style(Style::new().bg(palette.background));
    frame.render_widget(bar, area);
}

/// Render the help line on the bottom row.
pub fn help_line(frame: &mut Frame, area: Rect, palette: &Palette) {
    let dim = Style::new().fg(palette.text_dim);
    let key = Style::new().fg(palette.accent);
    let help = Line::from(vec![
        Span::styled("q", key).bold(),
        Span::styled(" quit  ", dim),
        Span::styled("tab", key).bold(),
        Span::styled(" section  ", dim),
        Span::styled("r", key).bold(),
        Span::styled(" spin  ", dim),
        Span::styled("c", key).bold(),
        Span::styled(" theme  ", dim),
        Span::styled("drag", key).bold(),
        Span::styled(" orbit  ", dim),
        Span::styled("wheel", key).bold(),
        Span::styled(" zoom", dim),
    ])
    .centered();
    frame.render_widget(help, area);
}

/// Render the loading placeholder shown before assets resolve.
pub fn loading_screen(frame: &mut Frame, area: Rect, t: f32, palette: &Palette) {
    let spinner = SPINNER[((t / 0.08) as usize) % SPINNER.len()];
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let spinner_line = Paragraph::new(spinner.to_string())
        .style(Style::new().fg(palette.accent))
        .alignment(Alignment::Center);
    frame.render_widget(spinner_line, chunks[1]);

    let text = Paragraph::new("Loading 3D Experience...")
        .style(Style::new().fg(palette.text_dim))
        .alignment(Alignment::Center);
    frame.render_widget(text, chunks[2]);
}

/// Render the active section as a flat panel near its projected anchor.
pub fn section_panel(
    frame: &mut Frame,
    canvas: Rect,
    camera: &OrbitCamera,
    section: &Section,
    assets: &Assets,
    palette: &Palette,
) {
    let lines = body_lines(section, assets, palette);
    let width = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let height = lines.len() as u16 + 2;

    let (cx, cy) = project_world(section.anchor, canvas, camera)
        .unwrap_or((canvas.x + canvas.width / 2, canvas.y + canvas.height / 2));
    let panel = centered_at(canvas, cx, cy, width, height);

    let block = Block::bordered()
        .title(Span::styled(
            format!(" {} ", section.title),
            Style::new().fg(palette.accent),
        ))
        .style(Style::new().bg(palette.background).fg(palette.text));
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        panel,
    );
}

/// Build the literal body content of a section as styled lines.
fn body_lines(section: &Section, assets: &Assets, palette: &Palette) -> Vec<Line<'static>> {
    let dim = Style::new().fg(palette.text_dim);
    let accent = Style::new().fg(palette.accent);
    let mut lines = Vec::new();

    match &section.body {
        SectionBody::Hero { subtitle, buttons } => {
            for row in assets.wordmark.render(BRAND) {
                lines.push(Line::styled(row, accent));
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::raw(section.title.to_string()).bold()).centered());
            lines.push(Line::styled(*subtitle, dim).centered());
            lines.push(Line::raw(""));
            lines.push(
                Line::from(vec![
                    Span::styled(format!("[ {} ]", buttons[0]), accent),
                    Span::raw("   "),
                    Span::styled(format!("[ {} ]", buttons[1]), dim),
                ])
                .centered(),
            );
        }
        SectionBody::Cards(cards) => {
            for card in *cards {
                lines.push(Line::from(vec![
                    Span::raw(format!("{} ", card.icon)),
                    Span::raw(card.title).bold(),
                ]));
                lines.push(Line::styled(card.blurb, dim));
                lines.push(Line::raw(""));
            }
            lines.pop();
        }
        SectionBody::Prose { paragraphs, stats } => {
            for paragraph in *paragraphs {
                lines.push(Line::raw(*paragraph));
                lines.push(Line::raw(""));
            }
            for stat in *stats {
                lines.push(Line::from(vec![
                    Span::styled(stat.number, accent).bold(),
                    Span::raw(" "),
                    Span::styled(stat.label, dim),
                ]));
            }
        }
        SectionBody::Form {
            fields,
            submit,
            info,
        } => {
            lines.push(Line::raw("Ready to bring your vision to life?"));
            lines.push(Line::raw(""));
            for field in *fields {
                lines.push(Line::styled(format!("▸ {field}"), dim));
            }
            lines.push(Line::styled(format!("[ {submit} ]"), accent));
            lines.push(Line::raw(""));
            for entry in *info {
                lines.push(Line::styled(*entry, dim));
            }
        }
    }
    lines
}

/// A `width x height` rect centered on `(cx, cy)`, clamped inside `canvas`.
fn centered_at(canvas: Rect, cx: u16, cy: u16, width: u16, height: u16) -> Rect {
    let width = width.min(canvas.width);
    let height = height.min(canvas.height);
    let max_x = canvas.x + canvas.width - width;
    let max_y = canvas.y + canvas.height - height;
    let x = cx.saturating_sub(width / 2).clamp(canvas.x, max_x);
    let y = cy.saturating_sub(height / 2).clamp(canvas.y, max_y);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_config::Config;
    use vitrine_content::section;

    #[test]
    fn panels_always_fit_the_canvas() {
        let canvas = Rect::new(0, 1, 80, 22);
        for (cx, cy) in [(0, 0), (79, 22), (40, 11), (200, 200)] {
            let rect = centered_at(canvas, cx, cy, 50, 12);
            assert!(rect.x >= canvas.x && rect.y >= canvas.y);
            assert!(rect.x + rect.width <= canvas.x + canvas.width);
            assert!(rect.y + rect.height <= canvas.y + canvas.height);
        }
    }

    #[test]
    fn oversized_panel_shrinks_to_canvas() {
        let canvas = Rect::new(0, 0, 20, 10);
        let rect = centered_at(canvas, 10, 5, 100, 50);
        assert_eq!((rect.width, rect.height), (20, 10));
    }

    #[test]
    fn every_section_produces_body_lines() {
        let assets = Assets::load(&Config::default()).unwrap();
        let palette = vitrine_core::EnvironmentPreset::Night.palette();
        for id in vitrine_core::SectionId::ALL {
            let lines = body_lines(&section(id), &assets, &palette);
            assert!(!lines.is_empty());
        }
    }
}
