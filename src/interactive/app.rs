//! TUI application state and logic

use crate::config::Settings;
use crate::core::Bank;
use crate::game::{Game, Proposal};
use crate::output::formatters::{letter, rank_message};
use crate::scores::{ScoreBook, today};
use crate::solver::{EngineType, Plan, plan_round};
use crate::wordlists::{Dictionary, WordlistChanges};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub settings: Settings,
    /// Full wordlist with this session's decisions applied
    pub dictionary: Dictionary,
    /// Wordlist filtered to the current bank
    pub bank_dictionary: Dictionary,
    pub book: ScoreBook,
    pub game: Option<Game>,
    pub proposal: Option<Proposal>,
    pub plan: Option<Plan>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Decisions from finished games
    pub changes: WordlistChanges,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the seven bank letters
    BankEntry,
    /// Waiting for the player to accept or reject an unvalidated word
    Deciding,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_total: u32,
    pub words_validated: usize,
    pub words_removed: usize,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings, dictionary: Dictionary, book: ScoreBook) -> Self {
        Self {
            settings,
            dictionary,
            bank_dictionary: Dictionary::new(),
            book,
            game: None,
            proposal: None,
            plan: None,
            input_mode: InputMode::BankEntry,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Type the bank, center letter first, then Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            changes: WordlistChanges::default(),
            stats: Statistics::default(),
            should_quit: false,
        }
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

    /// Start a game with the bank typed into the input buffer
    pub fn submit_bank(&mut self) {
        match Bank::new(&self.input_buffer) {
            Ok(bank) => {
                self.input_buffer.clear();
                self.start_game(bank);
            }
            Err(e) => self.add_message(&format!("Invalid bank: {e}"), MessageStyle::Error),
        }
    }

    pub fn start_game(&mut self, bank: Bank) {
        self.bank_dictionary = self.dictionary.for_bank(&bank);
        self.game = Some(Game::new(bank, self.settings.rotation));
        self.add_message(
            &format!(
                "Bank {}: {} known words. Let's play!",
                bank.label(),
                self.bank_dictionary.len()
            ),
            MessageStyle::Info,
        );
        self.advance();
    }

    /// Propose words until one needs a decision or the game ends
    ///
    /// Validated words are played without asking.
    pub fn advance(&mut self) {
        loop {
            let Some(game) = self.game.as_mut() else {
                return;
            };
            if game.is_over() {
                self.finish_game();
                return;
            }

            // Only the planner has a projection that matches its proposals
            self.plan = match self.settings.engine {
                EngineType::Better(_) => plan_round(&game.context(&self.bank_dictionary)).ok(),
                EngineType::Greedy(_) => None,
            };
            match game.propose(&self.settings.engine, &self.bank_dictionary) {
                Ok(proposal) if proposal.validated => self.play(&proposal),
                Ok(proposal) => {
                    self.add_message(
                        &format!("Is {} a word? (y/n)", proposal.word.to_uppercase()),
                        MessageStyle::Info,
                    );
                    self.proposal = Some(proposal);
                    self.input_mode = InputMode::Deciding;
                    return;
                }
                Err(e) => {
                    self.add_message(&format!("{e}. Ending the game early."), MessageStyle::Error);
                    self.finish_game();
                    return;
                }
            }
        }
    }

    fn play(&mut self, proposal: &Proposal) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let special = game.special();
        let points = game.accept(proposal);
        let total = game.score();

        if self.book.record_word(&proposal.word, special, points) {
            self.add_message("New word high score!", MessageStyle::Success);
        }
        self.add_message(
            &format!(
                "Played {} on {} for {points} points ({total} total)",
                proposal.word.to_uppercase(),
                letter(special)
            ),
            MessageStyle::Success,
        );
    }

    /// The player confirmed the proposed word
    pub fn accept(&mut self) {
        if let Some(proposal) = self.proposal.take() {
            self.play(&proposal);
            self.advance();
        }
    }

    /// The player refused the proposed word
    pub fn reject(&mut self) {
        let Some(proposal) = self.proposal.take() else {
            return;
        };
        if let Some(game) = self.game.as_mut() {
            game.reject(&proposal);
        }
        self.add_message(
            &format!("Removing {}. Finding another word.", proposal.word.to_uppercase()),
            MessageStyle::Error,
        );
        self.advance();
    }

    fn finish_game(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let total = game.score();
        let label = game.bank().label();
        let changes = game.changes().clone();

        let rank = self.book.record_game(&label, total, &today());
        self.dictionary.apply(&changes);
        self.stats.words_validated += changes.validate.len();
        self.stats.words_removed += changes.remove.len();
        self.changes.merge(changes);

        self.stats.games_played += 1;
        self.stats.best_total = self.stats.best_total.max(total);
        self.proposal = None;
        self.plan = None;
        self.input_mode = InputMode::GameOver;

        self.add_message(&format!("Game over! We scored {total} points."), MessageStyle::Success);
        let style = if rank.is_high_score() {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&rank_message(rank, self.book.best_for(&label)), style);
        self.add_message("Press 'n' for a new bank or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = None;
        self.proposal = None;
        self.plan = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::BankEntry;
        self.add_message("Type the next bank, center letter first.", MessageStyle::Info);
    }

    /// Decisions from finished games plus the game in progress, if any
    #[must_use]
    pub fn session_changes(&self) -> WordlistChanges {
        let mut changes = self.changes.clone();
        if self.input_mode != InputMode::GameOver
            && let Some(game) = &self.game
        {
            changes.merge(game.changes().clone());
        }
        changes
    }

    /// Write the wordlist and score book
    ///
    /// # Errors
    /// Returns an error if either file cannot be written or synced.
    pub fn save_session(&self) -> Result<()> {
        let changes = self.session_changes();
        if self.settings.save_changes(&changes)? {
            println!(
                "Wordlist updated: {} validated, {} removed.",
                changes.validate.len(),
                changes.remove.len()
            );
        }
        self.settings.save_scores(&self.book)
    }
}

/// Run the TUI application
///
/// The wordlist and score book are written after the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the session cannot be saved.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

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

    app.save_session()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app.input_mode {
                InputMode::BankEntry => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if c.is_ascii_alphabetic() && app.input_buffer.len() < 7 => {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_bank(),
                    _ => {}
                },
                InputMode::Deciding => match key.code {
                    KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.accept(),
                    KeyCode::Char('n' | 'N') => app.reject(),
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    _ => {}
                },
                InputMode::GameOver => match key.code {
                    KeyCode::Char('n') | KeyCode::Enter => app.new_game(),
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
