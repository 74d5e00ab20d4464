use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::notes_feed::FeedSource;
use crate::remote::{AuthApi, NotesApi};

use super::app::{App, Screen};
use super::input::Input;

pub(super) fn draw<A: AuthApi + NotesApi>(frame: &mut Frame, app: &App<A>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Login => render_login(frame, app, chunks[1]),
        Screen::Notes => render_notes(frame, app, chunks[1]),
        Screen::Payment => render_payment(frame, app, chunks[1]),
    }

    let status = match &app.status {
        Some(s) if s.is_error => Line::from(Span::styled(
            s.text.as_str(),
            Style::default().fg(Color::Red),
        )),
        Some(s) => Line::from(Span::styled(
            s.text.as_str(),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(status)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("status")),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "F1 login  F2 notes  F3 payment  Tab next field  Enter submit  Ctrl-L logout  Esc quit",
            Style::default().fg(Color::Gray),
        ))),
        chunks[3],
    );
}

fn render_header<A: AuthApi + NotesApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let mut spans = vec![
        Span::styled("seclab", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
    ];
    for screen in [Screen::Login, Screen::Notes, Screen::Payment] {
        let style = if screen == app.screen {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(screen.title(), style));
        spans.push(Span::raw("  "));
    }
    match (app.session.username(), app.session.claims()) {
        (Some(username), Some(claims)) => spans.push(Span::styled(
            format!("{} ({})", claims.name, username),
            Style::default().fg(Color::Green),
        )),
        _ => spans.push(Span::styled("logged out", Style::default().fg(Color::Red))),
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn field<'a>(label: &'a str, input: &Input, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Paragraph::new(input.display()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label),
    )
}

fn render_login<A: AuthApi + NotesApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let outer = Block::default().borders(Borders::ALL).title("Secure login");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if let Some(username) = app.session.username() {
        frame.render_widget(
            Paragraph::new(format!("Logged in as {}. Ctrl-L to log out.", username)),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(field("username", &app.username, app.field == 0), rows[0]);
    frame.render_widget(field("password", &app.password, app.field == 1), rows[1]);
}

fn render_notes<A: AuthApi + NotesApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let title = match app.feed.source() {
        FeedSource::Live => Line::from("Notes"),
        FeedSource::Offline => Line::from(vec![
            Span::raw("Notes  "),
            Span::styled("offline", Style::default().fg(Color::Red)),
        ]),
    };
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let items: Vec<ListItem> = app
        .feed
        .notes()
        .iter()
        .map(|n| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<4}", n.id), Style::default().fg(Color::Yellow)),
                Span::raw(n.text.as_str()),
                Span::raw("  "),
                Span::styled(n.timestamp.as_str(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), rows[0]);
    frame.render_widget(field("new note", &app.new_note, true), rows[1]);
}

fn render_payment<A: AuthApi + NotesApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let outer = Block::default().borders(Borders::ALL).title("Payment");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(
        field("card number", &app.card_number, app.field == 0),
        rows[0],
    );
    frame.render_widget(field("cvv", &app.cvv, app.field == 1), rows[1]);

    let saved = match &app.saved_card {
        Some(card) => format!("Saved card: {}", card.masked()),
        None => "No saved card".to_string(),
    };
    frame.render_widget(Paragraph::new(saved), rows[2]);
}
