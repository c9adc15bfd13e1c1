//! Application state and key handling for the terminal UI.

use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hangdev_core::{
    GameSession, InputError, KeyDispatch, KeyRouter, PersistenceAdapter, SubscriptionId,
};
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Offer a character to the game.
    Key(char),
    /// Start a new game.
    NewGame,
    /// Switch between light and dark.
    ToggleTheme,
    /// Leave the UI.
    Quit,
    /// Nothing bound.
    None,
}

impl Action {
    /// Maps a terminal key event.
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Enter => Action::NewGame,
            KeyCode::Tab => Action::ToggleTheme,
            KeyCode::Char(c) => Action::Key(c),
            _ => Action::None,
        }
    }
}

/// Main application state.
pub struct App<S> {
    session: GameSession<S, StdRng>,
    router: KeyRouter,
    subscription: Option<SubscriptionId>,
    theme: Theme,
    quit: bool,
}

impl<S: PersistenceAdapter> App<S> {
    /// Creates the app around a loaded session, reading the stored theme.
    pub fn new(session: GameSession<S, StdRng>) -> Self {
        let theme = Theme::load(session.store());
        Self {
            session,
            router: KeyRouter::new(),
            subscription: None,
            theme,
            quit: false,
        }
    }

    /// Starts listening for guesses.
    ///
    /// # Errors
    ///
    /// [`InputError::AlreadySubscribed`] if already active.
    #[instrument(skip(self))]
    pub fn activate(&mut self) -> Result<(), InputError> {
        self.subscription = Some(self.router.subscribe()?);
        Ok(())
    }

    /// Stops listening for guesses.
    #[instrument(skip(self))]
    pub fn deactivate(&mut self) {
        if let Some(id) = self.subscription.take()
            && let Err(e) = self.router.unsubscribe(id)
        {
            warn!(error = %e, "Unsubscribe failed");
        }
    }

    /// Applies one action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Key(c) => {
                let dispatch = self.router.dispatch(&mut self.session, c);
                debug!(?dispatch, "Key routed");
                if let KeyDispatch::Forwarded(outcome) = dispatch
                    && self.session.is_over()
                {
                    info!(%outcome, phase = %self.session.phase(), "Game finished");
                }
            }
            Action::NewGame => self.session.start_new_game(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.theme.save(self.session.store_mut());
            }
            Action::Quit => {
                info!("User quit");
                self.quit = true;
            }
            Action::None => {}
        }
    }
}

impl<S> App<S> {
    /// The game.
    pub fn session(&self) -> &GameSession<S, StdRng> {
        &self.session
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while guesses are being routed.
    pub fn is_active(&self) -> bool {
        self.router.is_subscribed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangdev_core::{MemoryStore, Rulebook, Word};
    use rand::SeedableRng;

    fn app(word: &str) -> App<MemoryStore> {
        let session = GameSession::with_word(
            Rulebook::default(),
            MemoryStore::new(),
            StdRng::seed_from_u64(4),
            Word::new(word).expect("valid word"),
        );
        App::new(session)
    }

    #[test]
    fn test_keys_ignored_until_active() {
        let mut app = app("cat");
        app.apply(Action::Key('c'));
        assert!(app.session().guessed().is_empty());

        app.activate().expect("activate");
        app.apply(Action::Key('C'));
        assert_eq!(app.session().guessed().len(), 1);
    }

    #[test]
    fn test_double_activation_fails() {
        let mut app = app("cat");
        app.activate().expect("activate");
        assert!(app.activate().is_err());
        app.deactivate();
        assert!(!app.is_active());
        app.activate().expect("reactivate");
    }

    #[test]
    fn test_theme_toggle_is_persisted() {
        let mut app = app("cat");
        assert_eq!(app.theme(), Theme::Dark);
        app.apply(Action::ToggleTheme);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(Theme::load(app.session().store()), Theme::Light);
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Action::from_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(Action::from_key(key(KeyCode::Enter)), Action::NewGame);
        assert_eq!(Action::from_key(key(KeyCode::Tab)), Action::ToggleTheme);
        assert_eq!(Action::from_key(key(KeyCode::Char('x'))), Action::Key('x'));
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_quit() {
        let mut app = app("cat");
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
