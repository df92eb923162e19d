//! Game session management.
//!
//! `GameSession` owns the word table, the lobby, the active round, and the
//! RNG, and is the single entry point frontends drive: start a round, submit
//! guesses, reset back to the lobby. Finished rounds are kept as history for
//! the lobby screen and for simulation statistics.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::letter::Letter;
use crate::lobby::Lobby;
use crate::reveal::Reveal;
use crate::round::{GuessResult, Round, Winner};
use crate::words::WordList;

/// Which screen the session is on, derived from round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round active; the lobby is showing.
    Lobby,
    /// A round is in progress.
    InRound,
    /// A round has finished but has not been reset yet.
    RoundOver,
}

/// A finished round, kept for the lobby history and simulation stats.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    /// Category the word was drawn from.
    pub category: String,
    /// The word that was played.
    pub word: String,
    /// Who won.
    pub winner: Winner,
    /// Wrong guesses spent.
    pub wrong_guesses: u32,
}

/// Everything one guess changed, for frontends to render.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    /// What the guess did.
    pub result: GuessResult,
    /// Reveal pattern after the guess.
    pub reveal: Reveal,
    /// Wrong guesses spent so far.
    pub wrong_guesses: u32,
    /// Set once the round is over.
    pub winner: Option<Winner>,
}

impl GuessOutcome {
    /// True once the round has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// An interactive hangman session.
pub struct GameSession {
    words: WordList,
    lobby: Lobby,
    round: Option<Round>,
    history: Vec<RoundRecord>,
    rng: StdRng,
}

impl GameSession {
    /// Create a session over `words`, seeded from `config`.
    pub fn new(words: WordList, config: GameConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let lobby = Lobby::generate(&mut rng);
        Self {
            words,
            lobby,
            round: None,
            history: Vec::new(),
            rng,
        }
    }

    /// The word table in use.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The current lobby rooms.
    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    /// The active round, if any.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Finished rounds, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Which screen the session is on.
    pub fn phase(&self) -> Phase {
        match &self.round {
            None => Phase::Lobby,
            Some(round) if round.is_over() => Phase::RoundOver,
            Some(_) => Phase::InRound,
        }
    }

    /// Draw a fresh word and start a round.
    ///
    /// Fails with [`GameError::RoundActive`] while a round is in progress;
    /// the lobby is the only place a round can start.
    pub fn start_round(&mut self) -> GameResult<&Round> {
        if self.round.is_some() {
            return Err(GameError::RoundActive);
        }
        let (category, word) = self.words.random_draw(&mut self.rng);
        let round = Round::new(category, word);
        Ok(self.round.insert(round))
    }

    /// Submit a guess for the active round.
    ///
    /// Characters outside A-Z, repeated letters, and guesses after the round
    /// has ended all come back as [`GuessResult::Ignored`].
    pub fn guess(&mut self, ch: char) -> GameResult<GuessOutcome> {
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::NoActiveRound);
        };

        let result = match Letter::new(ch) {
            Some(letter) => round.guess(letter),
            None => GuessResult::Ignored,
        };

        // An ignored guess cannot have ended the round.
        if result != GuessResult::Ignored
            && let Some(winner) = round.outcome()
        {
            self.history.push(RoundRecord {
                category: round.category().to_string(),
                word: round.word().to_string(),
                winner,
                wrong_guesses: round.wrong_guesses(),
            });
        }

        Ok(GuessOutcome {
            result,
            reveal: round.reveal(),
            wrong_guesses: round.wrong_guesses(),
            winner: round.outcome(),
        })
    }

    /// The reveal pattern of the active round.
    pub fn reveal(&self) -> GameResult<Reveal> {
        match &self.round {
            Some(round) => Ok(round.reveal()),
            None => Err(GameError::NoActiveRound),
        }
    }

    /// Clear any active round and roll a fresh lobby.
    ///
    /// Total: works from any phase, including a mid-round abandon.
    pub fn reset_to_lobby(&mut self) {
        self.round = None;
        self.lobby = Lobby::generate(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lobby::ROOM_COUNT;

    fn test_session() -> GameSession {
        GameSession::new(WordList::default(), GameConfig::default())
    }

    /// A session whose every draw is the word "TEA".
    fn tea_session() -> GameSession {
        let words = WordList::from_json(r#"{"test": ["tea"]}"#).unwrap();
        GameSession::new(words, GameConfig::default())
    }

    fn lose_current_round(session: &mut GameSession) {
        let word = session.round().unwrap().word().to_string();
        let misses: Vec<char> = ('A'..='Z')
            .filter(|ch| !word.contains(*ch))
            .take(6)
            .collect();
        for ch in misses {
            session.guess(ch).unwrap();
        }
    }

    #[test]
    fn fresh_session_is_in_the_lobby() {
        let session = test_session();
        assert_eq!(session.phase(), Phase::Lobby);
        assert!(session.round().is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.lobby().rooms().len(), ROOM_COUNT as usize);
    }

    #[test]
    fn start_round_enters_in_round() {
        let mut session = test_session();
        let round = session.start_round().unwrap();
        assert!(round.guessed().is_empty());
        assert_eq!(round.wrong_guesses(), 0);
        assert_eq!(session.phase(), Phase::InRound);

        let category = session.round().unwrap().category().to_string();
        assert!(session.words().find_category(&category).is_ok());
    }

    #[test]
    fn start_round_rejected_mid_round() {
        let mut session = test_session();
        session.start_round().unwrap();
        assert!(matches!(
            session.start_round(),
            Err(GameError::RoundActive)
        ));
    }

    #[test]
    fn guess_without_round_is_an_error() {
        let mut session = test_session();
        assert!(matches!(session.guess('a'), Err(GameError::NoActiveRound)));
        assert!(matches!(session.reveal(), Err(GameError::NoActiveRound)));
    }

    #[test]
    fn non_letter_input_is_ignored() {
        let mut session = test_session();
        session.start_round().unwrap();
        let outcome = session.guess('?').unwrap();
        assert_eq!(outcome.result, GuessResult::Ignored);
        assert!(session.round().unwrap().guessed().is_empty());
    }

    #[test]
    fn losing_a_round_records_history() {
        let mut session = test_session();
        session.start_round().unwrap();
        lose_current_round(&mut session);

        assert_eq!(session.phase(), Phase::RoundOver);
        assert_eq!(session.history().len(), 1);
        let record = &session.history()[0];
        assert_eq!(record.winner, Winner::Opponent);
        assert_eq!(record.wrong_guesses, 6);
    }

    #[test]
    fn winning_a_round_records_history() {
        let mut session = tea_session();
        session.start_round().unwrap();
        for ch in ['t', 'e', 'a'] {
            session.guess(ch).unwrap();
        }

        assert_eq!(session.phase(), Phase::RoundOver);
        let record = &session.history()[0];
        assert_eq!(record.word, "TEA");
        assert_eq!(record.category, "test");
        assert_eq!(record.winner, Winner::Player);
        assert_eq!(record.wrong_guesses, 0);
    }

    #[test]
    fn guess_outcome_reports_the_end() {
        let mut session = tea_session();
        session.start_round().unwrap();
        session.guess('t').unwrap();
        session.guess('e').unwrap();
        let outcome = session.guess('a').unwrap();
        assert_eq!(outcome.result, GuessResult::Hit);
        assert!(outcome.is_over());
        assert_eq!(outcome.winner, Some(Winner::Player));
        assert_eq!(outcome.reveal.to_string(), "T E A");
    }

    #[test]
    fn guesses_after_the_end_do_not_grow_history() {
        let mut session = tea_session();
        session.start_round().unwrap();
        for ch in ['t', 'e', 'a', 'x', 'y'] {
            session.guess(ch).unwrap();
        }
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.round().unwrap().guessed().len(), 3);
    }

    #[test]
    fn reset_returns_to_the_lobby() {
        let mut session = tea_session();
        session.start_round().unwrap();
        for ch in ['t', 'e', 'a'] {
            session.guess(ch).unwrap();
        }
        session.reset_to_lobby();
        assert_eq!(session.phase(), Phase::Lobby);
        assert!(session.round().is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_abandons_a_running_round() {
        let mut session = test_session();
        session.start_round().unwrap();
        session.reset_to_lobby();
        assert_eq!(session.phase(), Phase::Lobby);
        assert!(session.history().is_empty());
    }

    #[test]
    fn history_accumulates_across_rounds() {
        let mut session = tea_session();
        for _ in 0..3 {
            session.start_round().unwrap();
            for ch in ['t', 'e', 'a'] {
                session.guess(ch).unwrap();
            }
            session.reset_to_lobby();
        }
        assert_eq!(session.history().len(), 3);
        assert!(session.history().iter().all(|r| r.winner == Winner::Player));
    }

    #[test]
    fn same_seed_draws_the_same_round() {
        let mut a = GameSession::new(WordList::default(), GameConfig::default().with_seed(7));
        let mut b = GameSession::new(WordList::default(), GameConfig::default().with_seed(7));
        let round_a = a.start_round().unwrap();
        let round_b = b.start_round().unwrap();
        assert_eq!(round_a.word(), round_b.word());
        assert_eq!(round_a.category(), round_b.category());
        assert_eq!(a.lobby().rooms(), b.lobby().rooms());
    }
}
