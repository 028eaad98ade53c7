use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Answering time granted per question on the quiz timer.
    pub fn seconds_per_question(&self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 90,
            Difficulty::Hard => 120,
        }
    }

    pub fn time_limit_seconds(&self, question_count: usize) -> u64 {
        question_count as u64 * u64::from(self.seconds_per_question())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).expect("difficulty should serialize");
        assert_eq!(json, "\"hard\"");
    }

    #[test]
    fn difficulty_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Difficulty>("\"impossible\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn difficulty_from_str_ignores_case_and_whitespace() {
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn time_limit_scales_with_difficulty() {
        assert_eq!(Difficulty::Easy.time_limit_seconds(10), 600);
        assert_eq!(Difficulty::Medium.time_limit_seconds(10), 900);
        assert_eq!(Difficulty::Hard.time_limit_seconds(5), 600);
    }
}
