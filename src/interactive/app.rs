//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{GROUP_SIZE, Puzzle};
use crate::engine::{Outcome, Rejection, Session, Submitted};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How often the event loop wakes up when nothing is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Keep only this many messages
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub config: GameConfig,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub pending_since: Option<Instant>,
    pub show_help: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub perfect_games: usize,
}

/// Cursor movement on the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(puzzle: &'a Puzzle, config: GameConfig) -> Self {
        let session = Session::new(puzzle, config.max_mistakes, config.rng());

        Self {
            session,
            config,
            cursor: 0,
            messages: vec![Message {
                text: "Create four groups of four! Space selects, Enter submits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            pending_since: None,
            show_help: false,
            recorded: false,
        }
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Move the cursor within the 4-column pool grid
    pub fn move_cursor(&mut self, direction: Direction) {
        let len = self.session.pool().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        let col = self.cursor % GROUP_SIZE;
        let target = match direction {
            Direction::Left if col > 0 => self.cursor - 1,
            Direction::Right if col + 1 < GROUP_SIZE => self.cursor + 1,
            Direction::Up => self.cursor.saturating_sub(GROUP_SIZE),
            Direction::Down => self.cursor + GROUP_SIZE,
            _ => self.cursor,
        };

        if target < len {
            self.cursor = target;
        }
    }

    /// Select or deselect the word under the cursor
    pub fn toggle_at_cursor(&mut self) {
        let Some(word) = self.session.pool().get(self.cursor).cloned() else {
            return;
        };

        if let Err(rejection) = self.session.toggle(&word) {
            self.reject(rejection);
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(Submitted::Revealing(pending)) => {
                let name = self.session.puzzle().category(pending.category).name().to_string();
                self.pending_since = Some(Instant::now());
                self.add_message(&format!("✓ {name}"), MessageStyle::Success);
            }
            Ok(Submitted::Missed { one_away, outcome }) => {
                if one_away {
                    self.add_message("One away...", MessageStyle::Warning);
                } else {
                    self.add_message("Not quite. Try again.", MessageStyle::Error);
                }
                if outcome.is_finished() {
                    self.finish_game();
                }
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    pub fn shuffle(&mut self) {
        if let Err(rejection) = self.session.shuffle() {
            self.reject(rejection);
        }
    }

    pub fn deselect(&mut self) {
        match self.session.clear_selection() {
            Ok(()) | Err(Rejection::NothingSelected) => {}
            Err(rejection) => self.reject(rejection),
        }
    }

    pub fn new_game(&mut self) {
        if let Err(rejection) = self.session.restart() {
            self.reject(rejection);
            return;
        }

        self.cursor = 0;
        self.recorded = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Finish a pending reveal once the configured delay has passed
    ///
    /// Returns `true` if a reveal was completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(since) = self.pending_since else {
            return false;
        };
        if now.saturating_duration_since(since) < self.config.reveal_delay {
            return false;
        }

        self.pending_since = None;
        let Some(revealed) = self.session.complete_reveal() else {
            return false;
        };

        self.cursor = self
            .cursor
            .min(self.session.pool().len().saturating_sub(1));
        if revealed.outcome.is_finished() {
            self.finish_game();
        }
        true
    }

    /// Time left until the pending reveal completes
    #[must_use]
    pub fn time_to_reveal(&self, now: Instant) -> Option<Duration> {
        self.pending_since.map(|since| {
            self.config
                .reveal_delay
                .saturating_sub(now.saturating_duration_since(since))
        })
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn reject(&mut self, rejection: Rejection) {
        debug!(%rejection, "action ignored");
        match rejection {
            Rejection::AlreadyGuessed => self.add_message("Already guessed!", MessageStyle::Warning),
            Rejection::Finished => {
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Rejection::RevealPending | Rejection::NothingSelected => {}
            other => self.add_message(&other.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.cursor = 0;

        let progress = self.session.progress();
        self.stats.total_games += 1;
        match progress.outcome {
            Outcome::Won => {
                self.stats.games_won += 1;
                if progress.mistakes == 0 {
                    self.stats.perfect_games += 1;
                }
                self.add_message("🎉 You won, congrats! 🎉", MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message("Next time!", MessageStyle::Error);
            }
            Outcome::Playing => {}
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);

        info!(
            outcome = ?progress.outcome,
            mistakes = progress.mistakes,
            games = self.stats.total_games,
            "game finished"
        );
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app.time_to_reveal(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key.code, key.modifiers);
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        match code {
            KeyCode::Char('?') | KeyCode::Esc => app.toggle_help(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Char(' ') => app.toggle_at_cursor(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char('s') => app.shuffle(),
        KeyCode::Char('d') => app.deselect(),
        KeyCode::Char('n') => app.new_game(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryIndex, Word};
    use crate::puzzles::builtin;

    fn config() -> GameConfig {
        GameConfig::new(4, 0, Some(7))
    }

    fn select(app: &mut App, texts: [&str; 4]) {
        for text in texts {
            let word = Word::new(text).unwrap();
            app.cursor = app.session.pool().iter().position(|w| *w == word).unwrap();
            app.toggle_at_cursor();
        }
    }

    #[test]
    fn cursor_stays_on_grid() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, config());

        app.move_cursor(Direction::Left);
        app.move_cursor(Direction::Up);
        assert_eq!(app.cursor, 0);

        app.move_cursor(Direction::Right);
        app.move_cursor(Direction::Down);
        assert_eq!(app.cursor, 5);

        for _ in 0..5 {
            app.move_cursor(Direction::Right);
            app.move_cursor(Direction::Down);
        }
        assert_eq!(app.cursor, 15);
    }

    #[test]
    fn correct_guess_reveals_after_tick() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, config());

        select(&mut app, ["MALL", "MARKET", "OUTLET", "STORE"]);
        app.submit();
        assert!(app.session.pending().is_some());
        assert!(app.pending_since.is_some());

        assert!(app.tick(Instant::now()));
        assert!(app.session.pending().is_none());
        assert_eq!(app.session.pool().len(), 12);
        assert!(!app.tick(Instant::now()));
    }

    #[test]
    fn reveal_waits_for_delay() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, GameConfig::new(4, 60_000, Some(7)));

        select(&mut app, ["MALL", "MARKET", "OUTLET", "STORE"]);
        app.submit();
        let now = Instant::now();
        assert!(!app.tick(now));
        assert!(app.time_to_reveal(now).is_some());

        let before = app.session.pool().to_vec();
        app.shuffle();
        assert_eq!(app.session.pool(), before.as_slice());
        assert!(app.session.pending().is_some());
        let front = app.session.pool()[..4]
            .iter()
            .filter(|w| puzzle.index_of(w).map(CategoryIndex::get) == Some(0))
            .count();
        assert_eq!(front, 4);
    }

    #[test]
    fn one_away_and_repeat_messages() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, config());

        select(&mut app, ["MALL", "MARKET", "OUTLET", "WAX"]);
        app.submit();
        assert_eq!(app.messages.last().unwrap().text, "One away...");

        select(&mut app, ["MALL", "MARKET", "OUTLET", "WAX"]);
        app.submit();
        assert_eq!(app.messages.last().unwrap().text, "Already guessed!");
        assert_eq!(app.session.progress().mistakes, 1);
    }

    #[test]
    fn win_updates_stats_once() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, config());

        for group in [
            ["MALL", "MARKET", "OUTLET", "STORE"],
            ["SHAVE", "THREAD", "TWEEZE", "WAX"],
            ["CUT", "PIECE", "SHARE", "TAKE"],
            ["ALLEN", "CRESCENT", "MONKEY", "SOCKET"],
        ] {
            select(&mut app, group);
            app.submit();
            app.tick(Instant::now());
        }

        assert_eq!(app.session.outcome(), Outcome::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.perfect_games, 1);

        app.submit();
        assert_eq!(app.stats.total_games, 1);

        app.new_game();
        assert_eq!(app.session.outcome(), Outcome::Playing);
        assert_eq!(app.session.pool().len(), 16);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, config());

        handle_key(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.show_help);

        handle_key(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert!(app.session.selection().is_empty());
        assert_eq!(app.cursor, 0);

        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn loss_counts_game() {
        let puzzle = builtin::puzzle(1).unwrap();
        let mut app = App::new(&puzzle, GameConfig::new(1, 0, Some(7)));

        select(&mut app, ["MALL", "WAX", "CUT", "ALLEN"]);
        app.submit();

        assert_eq!(app.session.outcome(), Outcome::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.session.revealed().len(), 4);
    }
}
