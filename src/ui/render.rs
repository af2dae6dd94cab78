use crate::ui::app::App;
use crate::ui::entry::AmountEntryState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, visible_cards, CARD_HEIGHT};
use crate::ui::scoreboard::ScoreboardState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, SCORE_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const POPUP_MIN_WIDTH: u16 = 36;

/// Redraw the whole screen from the current store snapshot.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(&state), header);
    frame.render_widget(Clear, body);
    draw_matches(frame, body, &state, app.selected_index());
    let footer_widget = Footer::new(app.entry().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    draw_entry_popup(frame, body, app.entry(), &state);
}

fn draw_matches(frame: &mut Frame<'_>, body: Rect, state: &ScoreboardState, selected: Option<usize>) {
    if body.width == 0 || body.height == 0 {
        return;
    }

    if state.is_empty() {
        let hint = Paragraph::new(Line::from("No matches. Press 'a' to add one."))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(hint, centered_rect_by_size(body, body.width, 1));
        return;
    }

    let capacity = usize::from(body.height / CARD_HEIGHT);
    let (start, end) = visible_cards(state.len(), selected, capacity);

    for (row, index) in (start..end).enumerate() {
        let entry = &state.matches[index];
        let card = Rect {
            x: body.x,
            y: body.y + row as u16 * CARD_HEIGHT,
            width: body.width,
            height: CARD_HEIGHT,
        };
        let is_selected = selected == Some(index);

        let name = format!(" Match {}", index + 1);
        let score = format!("{} ", entry.score);
        let inner_width = card.width.saturating_sub(2) as usize;
        let padding = inner_width
            .saturating_sub(name.chars().count())
            .saturating_sub(score.chars().count());

        let name_style = if is_selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let line = Line::from(vec![
            Span::styled(name, name_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(
                score,
                Style::default().fg(SCORE_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if is_selected { ACCENT } else { GLOBAL_BORDER }));
        if is_selected {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        frame.render_widget(Paragraph::new(line).block(block), card);
    }
}

fn draw_entry_popup(
    frame: &mut Frame<'_>,
    body: Rect,
    entry: &AmountEntryState,
    state: &ScoreboardState,
) {
    let AmountEntryState::Editing {
        mode,
        target,
        buffer,
    } = entry
    else {
        return;
    };

    let title = match state.position_of(*target) {
        Some(index) => format!(" {} Match {} ", mode.label(), index + 1),
        None => format!(" {} ", mode.label()),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(" Amount: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                buffer.clone(),
                Style::default().fg(SCORE_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: Apply  Esc: Cancel",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width
        .max(title.chars().count() as u16)
        .saturating_add(4)
        .max(POPUP_MIN_WIDTH);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
