//! Splash screen rendering with ASCII art logo

use crate::state::{SplashPhase, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 6] = [
    "███╗   ███╗███████╗██████╗ ████████╗███████╗ ██████╗ ",
    "████╗ ████║██╔════╝██╔══██╗╚══██╔══╝██╔════╝██╔═══██╗",
    "██╔████╔██║█████╗  ██████╔╝   ██║   █████╗  ██║   ██║",
    "██║╚██╔╝██║██╔══╝  ██╔═══╝    ██║   ██╔══╝  ██║▄▄ ██║",
    "██║ ╚═╝ ██║███████╗██║        ██║   ███████╗╚██████╔╝",
    "╚═╝     ╚═╝╚══════╝╚═╝        ╚═╝   ╚══════╝ ╚══▀▀═╝ ",
];

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let logo_style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(*l, logo_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        splash_state.visible_tagline(),
        Style::default().fg(Color::Gray),
    )));

    let block_height = lines.len() as u16;
    let block_width = LOGO[0].chars().count() as u16;

    // Centered, then lifted; may run off the top
    let base_y = area.y as i32 + (area.height.saturating_sub(block_height)) as i32 / 2;
    let y_pos = base_y - splash_state.lift_offset as i32;
    let x = area.x + (area.width.saturating_sub(block_width)) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let render_y = y_pos.max(area.y as i32) as u16;

    let logo_area = Rect {
        x,
        y: render_y,
        width: block_width.min(area.width),
        height: (visible_lines.len() as u16).min(area.bottom().saturating_sub(render_y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    if splash_state.phase == SplashPhase::Display && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
