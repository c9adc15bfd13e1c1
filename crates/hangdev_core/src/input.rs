//! Keyboard input routing.
//!
//! A front end subscribes once when a session becomes active and
//! unsubscribes when it ends. While subscribed, single letter keys are
//! forwarded to the session as guesses; everything else is dropped.

use crate::letter::Letter;
use crate::persistence::PersistenceAdapter;
use crate::session::{GameSession, GuessOutcome};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Handle returned by [`KeyRouter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("subscription #{}", _0)]
pub struct SubscriptionId(u64);

/// Subscription misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// A handler is already registered.
    #[display("Input already subscribed ({})", _0)]
    AlreadySubscribed(#[error(not(source))] SubscriptionId),
    /// The handle does not match the active subscription.
    #[display("Unknown input subscription {}", _0)]
    UnknownSubscription(#[error(not(source))] SubscriptionId),
}

/// Why a key press went nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// No active subscription.
    NotSubscribed,
    /// Not an ASCII letter.
    NotALetter,
    /// The game is over.
    GameOver,
}

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDispatch {
    /// Forwarded to the session as a guess.
    Forwarded(GuessOutcome),
    /// Dropped.
    Ignored(IgnoreReason),
}

/// Single-handler key router.
#[derive(Debug, Default)]
pub struct KeyRouter {
    active: Option<SubscriptionId>,
    issued: u64,
}

impl KeyRouter {
    /// Router with nothing subscribed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler.
    ///
    /// # Errors
    ///
    /// [`InputError::AlreadySubscribed`] if one is already active.
    #[instrument(skip(self))]
    pub fn subscribe(&mut self) -> Result<SubscriptionId, InputError> {
        if let Some(active) = self.active {
            return Err(InputError::AlreadySubscribed(active));
        }
        self.issued += 1;
        let id = SubscriptionId(self.issued);
        self.active = Some(id);
        info!(%id, "Input subscribed");
        Ok(id)
    }

    /// Removes the handler.
    ///
    /// # Errors
    ///
    /// [`InputError::UnknownSubscription`] if `id` is not the active one.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), InputError> {
        if self.active != Some(id) {
            return Err(InputError::UnknownSubscription(id));
        }
        self.active = None;
        info!(%id, "Input unsubscribed");
        Ok(())
    }

    /// True while a handler is registered.
    pub fn is_subscribed(&self) -> bool {
        self.active.is_some()
    }

    /// Routes one key press. ASCII letters are lowercased before the guess.
    #[instrument(skip(self, session))]
    pub fn dispatch<S, R>(&self, session: &mut GameSession<S, R>, key: char) -> KeyDispatch
    where
        S: PersistenceAdapter,
        R: Rng,
    {
        if self.active.is_none() {
            return KeyDispatch::Ignored(IgnoreReason::NotSubscribed);
        }
        let Ok(letter) = Letter::new(key.to_ascii_lowercase()) else {
            debug!("Non-letter key ignored");
            return KeyDispatch::Ignored(IgnoreReason::NotALetter);
        };
        if session.is_over() {
            return KeyDispatch::Ignored(IgnoreReason::GameOver);
        }
        KeyDispatch::Forwarded(session.guess(letter))
    }
}
