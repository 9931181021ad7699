//! High score leaderboard
//!
//! Persisted as a flat JSON object mapping player name to best score,
//! e.g. `{"Alice": 42, "Bob": 17}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

use crate::prompt::Prompt;

/// Maximum number of rows shown on the leaderboard screen
pub const MAX_HIGH_SCORES: usize = 10;

/// Answer that confirms overwriting an existing name
const CONFIRM_ANSWER: &str = "Y";

/// Failure reading or writing the leaderboard file
#[derive(Debug)]
pub enum LeaderboardError {
    Io(io::Error),
    /// The file exists but is not a name -> score object
    Malformed(serde_json::Error),
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "leaderboard I/O failed: {}", e),
            LeaderboardError::Malformed(e) => write!(f, "leaderboard file is malformed: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Io(e) => Some(e),
            LeaderboardError::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for LeaderboardError {
    fn from(e: io::Error) -> Self {
        LeaderboardError::Io(e)
    }
}

/// What happened to a submitted score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// New name, stored without asking
    Inserted,
    /// Existing name, player confirmed the overwrite
    Overwritten,
    /// Existing name, player did not confirm; nothing changed
    Declined,
}

/// High score leaderboard keyed by player name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    pub entries: BTreeMap<String, u64>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Store a score, replacing whatever the name had
    pub fn insert(&mut self, name: impl Into<String>, score: u64) {
        self.entries.insert(name.into(), score);
    }

    /// Best scores first, at most `MAX_HIGH_SCORES` rows. Equal scores are
    /// listed by name.
    pub fn standings(&self) -> Vec<(String, u64)> {
        let mut rows: Vec<_> = self
            .entries
            .iter()
            .map(|(name, score)| (name.clone(), *score))
            .collect();
        // BTreeMap order is by name, so a stable sort keeps ties alphabetical
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows.truncate(MAX_HIGH_SCORES);
        rows
    }

    pub fn from_json(json: &str) -> Result<Self, LeaderboardError> {
        serde_json::from_str(json).map_err(LeaderboardError::Malformed)
    }

    pub fn to_json(&self) -> String {
        // A string-keyed map of integers always serializes
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Load from disk. A missing file is an empty leaderboard.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let board = Self::from_json(&json)?;
                log::info!("Loaded {} leaderboard entries from {}", board.entries.len(), path.display());
                Ok(board)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No leaderboard at {}, starting fresh", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LeaderboardError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json())?;
        log::info!("Leaderboard saved ({} entries) to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Record `score` under `name`.
    ///
    /// A new name is stored directly. An existing name needs the player to
    /// answer exactly `Y`; the prompt warns when the new score is lower than
    /// the stored one. Any other answer leaves the leaderboard unchanged.
    pub fn submit(
        &mut self,
        name: &str,
        score: u64,
        prompt: &mut impl Prompt,
    ) -> io::Result<SaveOutcome> {
        let Some(existing) = self.get(name) else {
            self.insert(name, score);
            return Ok(SaveOutcome::Inserted);
        };

        prompt.say("Вы уверены, что хотите сохранить очки под этим именем? ");
        if existing > score {
            prompt.say("Если вы впишете очки под этим именем, то понизите рекорд.");
        }
        prompt.say("Если Вы уверены, то введите Y. Иначе данные не сохранятся");
        prompt.say("Сохранить данные?");
        let answer = prompt.ask()?;
        if answer != CONFIRM_ANSWER {
            log::info!("Overwrite of '{}' declined", name);
            return Ok(SaveOutcome::Declined);
        }

        self.insert(name, score);
        Ok(SaveOutcome::Overwritten)
    }
}

/// Load the file, submit the score and write the file back unless the player
/// declined. A malformed file is left untouched and reported.
pub fn save_score(
    path: impl AsRef<Path>,
    name: &str,
    score: u64,
    prompt: &mut impl Prompt,
) -> Result<SaveOutcome, LeaderboardError> {
    let path = path.as_ref();
    let mut board = Leaderboard::load(path)?;
    let outcome = board.submit(name, score, prompt)?;
    if outcome != SaveOutcome::Declined {
        board.save(path)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;

    fn board(rows: &[(&str, u64)]) -> Leaderboard {
        let mut b = Leaderboard::new();
        for (name, score) in rows {
            b.insert(*name, *score);
        }
        b
    }

    #[test]
    fn test_new_name_inserted_without_prompt() {
        let mut b = Leaderboard::new();
        let mut prompt = ScriptedPrompt::default();
        let outcome = b.submit("Alice", 42, &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Inserted);
        assert_eq!(b, board(&[("Alice", 42)]));
        assert_eq!(prompt.questions_asked, 0);
        assert!(prompt.transcript.is_empty());
    }

    #[test]
    fn test_lower_score_declined_keeps_record() {
        let mut b = board(&[("Alice", 50)]);
        let mut prompt = ScriptedPrompt::new(["n"]);
        let outcome = b.submit("Alice", 30, &mut prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Declined);
        assert_eq!(b.get("Alice"), Some(50));
        assert_eq!(prompt.questions_asked, 1);
        assert!(prompt.transcript.iter().any(|l| l.contains("понизите рекорд")));
    }

    #[test]
    fn test_confirm_requires_exact_answer() {
        let mut b = board(&[("Alice", 50)]);
        let mut prompt = ScriptedPrompt::new(["y"]);
        assert_eq!(b.submit("Alice", 30, &mut prompt).unwrap(), SaveOutcome::Declined);

        let mut prompt = ScriptedPrompt::new(["Y"]);
        assert_eq!(b.submit("Alice", 30, &mut prompt).unwrap(), SaveOutcome::Overwritten);
        assert_eq!(b.get("Alice"), Some(30));
    }

    #[test]
    fn test_higher_score_still_confirms_without_warning() {
        let mut b = board(&[("Alice", 50)]);
        let mut prompt = ScriptedPrompt::new(["Y"]);
        assert_eq!(b.submit("Alice", 80, &mut prompt).unwrap(), SaveOutcome::Overwritten);
        assert_eq!(b.get("Alice"), Some(80));
        assert!(!prompt.transcript.iter().any(|l| l.contains("понизите рекорд")));
    }

    #[test]
    fn test_standings_sorted_and_capped() {
        let mut b = Leaderboard::new();
        for i in 0..15u64 {
            b.insert(format!("p{:02}", i), i * 10);
        }
        b.insert("tie_a", 140);
        let rows = b.standings();
        assert_eq!(rows.len(), MAX_HIGH_SCORES);
        assert_eq!(rows[0], ("p14".to_string(), 140));
        assert_eq!(rows[1], ("tie_a".to_string(), 140));
        assert!(rows.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_json_shape_is_flat_object() {
        let b = board(&[("Alice", 42)]);
        assert_eq!(b.to_json(), r#"{"Alice":42}"#);
        assert_eq!(Leaderboard::from_json(r#"{"Bob": 7}"#).unwrap(), board(&[("Bob", 7)]));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Leaderboard::from_json("[1, 2"),
            Err(LeaderboardError::Malformed(_))
        ));
        assert!(matches!(
            Leaderboard::from_json(r#"{"Alice": "lots"}"#),
            Err(LeaderboardError::Malformed(_))
        ));
    }
}
