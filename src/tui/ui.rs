//! Stateless UI rendering for bulls and cows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::app::App;
use crate::render;
use bulls_and_cows::{HistoryEntry, KeyValueStore, SessionController};

/// Renders the input box, history and status line.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, controller: &SessionController<S>, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Min(3),    // History
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Bulls and Cows",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            render::help_line(controller.rules()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_input(frame, chunks[1], controller, app);
    draw_history(frame, chunks[2], controller);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter submit · Ctrl-R new game · Esc quit "),
        );
    frame.render_widget(status, chunks[3]);
}

fn draw_input<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    controller: &SessionController<S>,
    app: &App,
) {
    let (title, style) = match controller.revealed_secret() {
        Some(secret) => (
            format!(" Solved: {} ", secret),
            Style::default().fg(Color::DarkGray),
        ),
        None => (" Guess ".to_string(), Style::default().fg(Color::White)),
    };

    let input = Paragraph::new(app.input())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if !controller.is_frozen() {
        let width = app.input().chars().count() as u16;
        let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_history<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    controller: &SessionController<S>,
) {
    let length = controller.rules().length();

    let items: Vec<ListItem> = controller
        .history()
        .all()
        .map(|entry| {
            let style = if entry.score.is_win(length) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if entry.score.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(render::describe(entry, length), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({}) ", controller.attempts())),
    );
    frame.render_widget(list, area);
}

/// Renders the "play again?" dialog over the current screen.
pub fn draw_prompt(frame: &mut Frame, entry: &HistoryEntry, attempts: usize) {
    let area = center_rect(frame.area(), 40, 6);

    let text = vec![
        Line::from(Span::styled(
            format!("You win! It is {}.", entry.guess),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Solved in {} attempts.", attempts)),
        Line::from(""),
        Line::from("Start a new game? [Y/n]"),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Bingo "));

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulls_and_cows::{MemoryStore, StorageKey, Submission};
    use bulls_core::{Rules, SecretGenerator};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_shows_history() {
        let mut store = MemoryStore::default();
        store.set(StorageKey::Secret, "1234");
        let mut controller =
            SessionController::new(store, Rules::default(), SecretGenerator::new());
        assert!(matches!(controller.submit_guess("1243"), Submission::Recorded(_)));

        let app = App::new(Some("56".to_string()));
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| draw(frame, &controller, &app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("1243: 2b 2c"));
        assert!(text.contains("History (1)"));
        assert!(text.contains("56"));
    }

    #[test]
    fn test_prompt_shows_winning_guess() {
        let entry = HistoryEntry::new("1234".to_string(), bulls_core::Score::new(4, 0));
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| draw_prompt(frame, &entry, 5)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("You win! It is 1234."));
        assert!(text.contains("Solved in 5 attempts."));
    }
}
