//! Stateless rendering of the game screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::app::App;
use super::input::Focus;
use crate::games::numfact::{Letter, LetterStatus, Phase, ScoreBand, SortKey};
use strum::IntoEnumIterator;

const RULES: &[&str] = &[
    "You start each round with 26 points",
    "Type letters to gradually reveal the hidden fact",
    "Each wrong letter reduces your score",
    "Ctrl-R reveals every letter and fills in the fact, but zeroes your score",
    "Both guesses right: +4 points",
    "One guess right: score is halved",
    "Both guesses wrong: score turns to 0",
    "Maximum possible score: 30 points",
];

/// Renders the screen for the app's current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Trivia
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Guess the Maths Fact")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    match app.engine().phase() {
        Phase::Welcome => draw_welcome(frame, chunks[1]),
        Phase::Playing => draw_playing(frame, chunks[1], app),
        Phase::Scored => draw_scoreboard(frame, chunks[1], app),
    }

    draw_trivia(frame, chunks[2], app);

    let status = Paragraph::new(app.status().unwrap_or(help_text(app)))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn help_text(app: &App) -> &'static str {
    match app.engine().phase() {
        Phase::Welcome => "Enter: start  t: new trivia  q: quit",
        Phase::Playing => "Tab: switch field  Ctrl-R: reveal all  Enter: submit  Esc: quit",
        Phase::Scored => "s/n/f: sort  t: new trivia  Enter: play again  q: quit",
    }
}

fn draw_trivia(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.trivia() {
        Some(fact) => format!("{} {}", fact.number(), fact.text()),
        None => "Loading...".to_string(),
    };
    let line = Line::from(vec![
        Span::styled("↻ ", Style::default().fg(Color::Magenta)),
        Span::styled("Random math trivia: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(text),
    ]);
    let trivia = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(trivia, area);
}

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Test your maths knowledge!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Guess the hidden fact and then work out the number it describes!"),
        Line::from(""),
    ];
    lines.extend(RULES.iter().map(|rule| Line::from(format!("  - {}", rule))));

    let welcome = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    frame.render_widget(welcome, area);
}

fn draw_playing(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score
            Constraint::Min(3),    // Masked fact
            Constraint::Length(3), // Letters
            Constraint::Length(3), // Fact guess
            Constraint::Length(3), // Number guess
        ])
        .split(area);

    let score_color = engine.score_band().map_or(Color::White, band_color);
    let score = Line::from(vec![
        Span::raw("Current Score: "),
        Span::styled(
            engine.score_display(),
            Style::default().fg(score_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(score), chunks[0]);

    let masked = Paragraph::new(engine.masked_fact())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Guess the hidden fact"));
    frame.render_widget(masked, chunks[1]);

    let mut letters: Vec<Span> = Letter::all()
        .map(|letter| {
            let style = match engine.letter_status(letter) {
                LetterStatus::Unguessed => Style::default().fg(Color::White),
                LetterStatus::Correct => {
                    Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                }
                LetterStatus::Incorrect => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
                }
            };
            Span::styled(format!("{} ", letter.as_char().to_ascii_uppercase()), style)
        })
        .collect();
    if !engine.is_fully_revealed() {
        letters.push(Span::styled("↧", Style::default().fg(Color::Magenta)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(letters))
            .block(focus_block("Letters", app.focus() == Focus::Letters)),
        chunks[2],
    );

    let round = engine.round();
    let user_fact = round.map(|r| r.user_fact()).unwrap_or_default();
    let user_number = round.and_then(|r| r.user_number()).unwrap_or_default();
    frame.render_widget(
        Paragraph::new(user_fact)
            .block(focus_block("Your fact guess", app.focus() == Focus::FactField)),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(user_number)
            .block(focus_block("Your number guess", app.focus() == Focus::NumberField)),
        chunks[4],
    );
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.engine().history();
    let sort = history.sort_state();

    let header_cells = SortKey::iter()
        .map(|key| Cell::from(format!("{} {}", key, sort.indicator(key))))
        .chain(std::iter::once(Cell::from("Result")));
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let rows = history.view().into_iter().map(|record| {
        let (result, color) = if record.is_correct() {
            ("Correct!", Color::Green)
        } else {
            ("Incorrect!", Color::Red)
        };
        Row::new(vec![
            Cell::from(record.score_fixed()),
            Cell::from(record.number().to_string()),
            Cell::from(record.fact().to_string()),
            Cell::from(result).style(Style::default().fg(color)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Previous Scores"));
    frame.render_widget(table, area);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Low => Color::Red,
        ScoreBand::Medium => Color::Rgb(0xfd, 0x7e, 0x1e),
        ScoreBand::High => Color::Rgb(0x4c, 0xaf, 0x50),
    }
}
