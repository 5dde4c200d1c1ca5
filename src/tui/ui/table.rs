use crate::agents::acting_seat;
use crate::game::{EventEntry, Phase, Player};
use crate::score::GAME_TARGET;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_lines: u16 = 2;
    let status_height: u16 = status_lines + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // trick in progress
            Constraint::Min(3),                // seats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let acting = acting_seat(&app.game);

    // Header (multi-line for readability)
    let mut header_lines: Vec<Line> = Vec::new();
    let totals = app.game.scoreboard().totals();
    header_lines.push(Line::from(format!(
        "Team 1: {}  Team 2: {}  (first to {})  Stake: {}",
        totals[0],
        totals[1],
        GAME_TARGET,
        app.game.stake(),
    )));
    let tricks = app.game.tricks_won();
    let second = if let Some(pending) = app.game.pending_raise() {
        format!(
            "Tricks: {}-{}   Truco to {} from {} — {} must answer",
            tricks[0],
            tricks[1],
            pending.to,
            pending.by,
            pending.by.opponent()
        )
    } else {
        format!(
            "Tricks: {}-{}   Leads: P{}   Acting: P{}",
            tricks[0],
            tricks[1],
            app.game.leader() + 1,
            acting + 1
        )
    };
    header_lines.push(Line::from(second));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("truco-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Trick in progress: running winner plus hand outcome once resolved
    let trick_title = match app.game.trick_no() {
        Some(no) => format!("Trick {no} of 3"),
        None => "Table".to_string(),
    };
    let trick_block = Block::default().title(trick_title).borders(Borders::ALL);
    let trick_area = chunks[1];
    let trick_inner = inner(trick_area);
    f.render_widget(trick_block, trick_area);
    let trick_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(9), Constraint::Min(10)])
        .split(trick_inner);
    let (winning_card, trick_text) = match app.game.trick() {
        Some(t) => (
            Some(t.winning_card()),
            format!("P{} holds the trick for {}", t.winning_seat() + 1, t.winning_team()),
        ),
        None => match (app.game.phase(), app.game.hand_winner()) {
            (Phase::Resolved, Some(team)) => (None, format!("Hand to {team}")),
            (Phase::Resolved, None) => (None, "Press Space to deal.".to_string()),
            _ => (None, "Waiting for the lead card.".to_string()),
        },
    };
    render_card_widget(f, trick_cols[0], winning_card, Some(Color::Yellow));
    let trick_para =
        Paragraph::new(Line::from(trick_text)).wrap(Wrap { trim: true });
    f.render_widget(trick_para, trick_cols[1]);

    // Seats in two team rows: team one on top, team two below.
    let seats_area = chunks[2];
    let total = app.game.players().len();
    let per_row: u16 = ((total.max(2) + 1) / 2) as u16;
    let row_height = seats_area.height.saturating_sub(2) / 2;
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(row_height), Constraint::Length(row_height)])
        .split(inner(seats_area));
    for row in 0..2usize {
        let col_chunks = columns(row_chunks[row], per_row);
        // Row 0 holds even seats (team one), row 1 odd seats (team two).
        for (col, seat) in (row..total).step_by(2).enumerate() {
            if let Some(p) = app.game.players().get(seat) {
                render_player_card(f, col_chunks[col], app, seat, p, acting);
            }
        }
    }

    // Status bar: split horizontally for info vs keys, render two lines of content
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = if let Some(champion) = app.game.winner() {
        vec![
            Line::from(format!("{champion} wins the game!")),
            Line::from("Open the menu (M) to start another."),
        ]
    } else if !app.hand_started {
        vec![
            Line::from("Hand not started — press Space to deal."),
            Line::from("Actions disabled until deal."),
        ]
    } else if matches!(app.game.phase(), Phase::Resolved) {
        vec![
            Line::from("Hand over — press Space for the next one."),
            Line::from("Actions disabled between hands."),
        ]
    } else {
        vec![Line::from(format!("Acting: P{}   Focus: P{}", acting + 1, app.focus + 1))]
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let hand_live = app.hand_started && !matches!(app.game.phase(), Phase::Resolved);
    if hand_live {
        let focused_acts = app.focus == acting;
        let raise_pending = app.game.pending_raise().is_some();
        let play_enabled = focused_acts && !raise_pending;
        let truco_enabled = focused_acts && !app.stake_targets().is_empty();
        let answer_enabled = focused_acts && raise_pending;
        let action_style = |enabled: bool| {
            if enabled {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            }
        };
        let action_line = Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("1-3 play", action_style(play_enabled)),
            Span::raw(" • "),
            Span::styled("T truco", action_style(truco_enabled)),
            Span::raw(" • "),
            Span::styled("A accept", action_style(answer_enabled)),
            Span::raw(" • "),
            Span::styled("D decline", action_style(answer_enabled)),
        ]);
        left_info.push(action_line);
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.stake_entry_active() {
        draw_stake_entry(f, app);
    }
}

fn format_event(entry: &EventEntry) -> String {
    let mut line = String::new();
    if let Some(seat) = entry.seat {
        line.push_str(&format!("P{} ", seat + 1));
    } else if let Some(team) = entry.team {
        line.push_str(&format!("{team} "));
    }
    line.push_str(entry.verb.label());
    if let Some(card) = entry.card {
        line.push_str(&format!(" {card}"));
    }
    if let Some(points) = entry.points {
        line.push_str(&format!(" ({points} pts)"));
    }
    line
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            lines.push(Line::from(format_event(&entry)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn render_player_card(
    f: &mut Frame,
    seat_area: Rect,
    app: &AppState,
    seat: usize,
    p: &Player,
    acting: usize,
) {
    let team = app.game.team_of(seat);
    let mut title = format!("P{} ({})", seat + 1, p.name());
    if seat == app.focus {
        title.push_str(" [Focus]");
    }
    if seat == app.game.leader() {
        title.push_str(" [Lead]");
    }
    if let Some(label) = app.bot_profile_label(seat) {
        title.push_str(&format!(" [BOT:{label}]"));
    }
    if seat == acting {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    let hand_won = matches!(app.game.phase(), Phase::Resolved)
        && app.game.hand_winner() == Some(team);
    if hand_won {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if seat == acting && seat == app.focus {
        block = block.border_style(Style::default().fg(Color::Magenta));
    } else if seat == acting {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if seat == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, seat_area);

    let seat_inner = inner(seat_area);
    let mut text_area = seat_inner;
    let mut cards_area: Option<Rect> = None;
    let show_cards = seat == app.focus || matches!(app.game.phase(), Phase::Resolved);
    if show_cards && !p.hand().is_empty() && seat_inner.height > 3 {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(seat_inner);
        text_area = split[0];
        cards_area = Some(split[1]);
    }

    let tricks = app.game.tricks_won();
    let lines = vec![
        Line::from(format!("{team}")),
        Line::from(format!("Cards left: {}", p.hand().len())),
        Line::from(format!("Team tricks: {}", tricks[team.index()])),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, text_area);

    if let Some(area) = cards_area {
        let slots = p.hand().len().max(1) as u16;
        let card_chunks = columns(area, slots);
        for (i, &card) in p.hand().iter().enumerate() {
            let border = if card.is_manilha() { Color::Yellow } else { Color::Cyan };
            render_card_widget(f, card_chunks[i], Some(card), Some(border));
        }
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / next hand"),
        Line::from("- 1-3: play the card at that slot"),
        Line::from("- T: call truco (or counter a pending call)"),
        Line::from("- A: accept a pending call"),
        Line::from("- D: decline a pending call (concede the hand)"),
        Line::from("- B: cycle bot difficulty (focus)"),
        Line::from("- ] / [: focus next / prev seat"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Stake Picker:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: choose target stake"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_stake_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 40, f.area());
    let title = if app.stake_entry_is_counter() { "Counter Raise" } else { "Truco!" };
    let targets = app.stake_targets();
    let selected = app.stake_entry_selection().unwrap_or(0);
    let mut lines: Vec<Line> = vec![Line::from("Raise the hand to:")];
    for (i, stake) in targets.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{stake} points"), style)));
    }
    lines.push(Line::from(Span::styled(
        "Up/Down choose • Enter submit • Esc cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner_area = inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, rows[0]);
    let error = app.stake_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, rows[1]);
}

fn suit_glyph_and_style(s: crate::cards::Suit) -> (char, Style) {
    use crate::cards::Suit::*;
    match s {
        Hearts => ('♥', Style::default().fg(Color::Red)),
        Diamonds => ('♦', Style::default().fg(Color::Red)),
        Spades => ('♠', Style::default().fg(Color::White)),
        Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<crate::cards::Card>,
    border: Option<Color>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (sg, style) = suit_glyph_and_style(c.suit());
        let text = format!("{}{}", c.rank().to_char(), sg);
        Line::from(Span::styled(text, style))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

#[allow(dead_code)]
fn short_card(c: crate::cards::Card) -> String {
    let (sg, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", c.rank().to_char(), sg)
}
