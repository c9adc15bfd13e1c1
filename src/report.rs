//! Plain-text rendering of a session for the one-shot commands.

use hangdev_core::{Banner, GameSession, KeyStatus};
use std::fmt::Write;

/// Multi-line status: banner, stakes, word, used letters, attempts left.
pub fn render_status<S, R>(session: &GameSession<S, R>) -> String {
    let mut out = String::new();

    let banner = session.banner();
    match (&banner, banner.title()) {
        (Banner::None, _) => {}
        (_, Some(title)) => {
            let _ = writeln!(out, "{title} {}", banner.message().unwrap_or_default());
        }
        (_, None) => {
            let _ = writeln!(out, "{}", banner.message().unwrap_or_default());
        }
    }

    let stakes: Vec<String> = session
        .stakes()
        .iter()
        .map(|stake| {
            if stake.eliminated {
                format!("~{}~", stake.entry.label())
            } else {
                stake.entry.label().clone()
            }
        })
        .collect();
    let _ = writeln!(out, "Stakes:   {}", stakes.join(" "));

    let word: String = session
        .revealed_word()
        .iter()
        .map(|letter| {
            if letter.visible {
                letter.letter.as_char().to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .flat_map(|c| [c, ' '])
        .collect();
    let _ = writeln!(out, "Word:     {}", word.trim_end());

    let used = |wanted: KeyStatus| -> String {
        session
            .keyboard()
            .into_iter()
            .filter(|(_, status)| *status == wanted)
            .map(|(letter, _)| letter.as_char())
            .collect()
    };
    let _ = writeln!(out, "Correct:  {}", used(KeyStatus::Correct));
    let _ = writeln!(out, "Wrong:    {}", used(KeyStatus::Wrong));
    let _ = write!(
        out,
        "Phase:    {} ({} of {} attempts left)",
        session.phase(),
        session.attempts_remaining(),
        session.attempts_allowed()
    );
    out
}
