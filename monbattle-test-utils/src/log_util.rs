use std::fmt;

use itertools::Itertools;
use monbattle::battle::BattleController;
use serde::Deserialize;

/// Expected battle event log line.
///
/// Substring matches are useful for events whose other parts are irrelevant to the test.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub enum LogMatch {
    Exact(String),
    Substrings(Vec<String>),
}

impl From<&str> for LogMatch {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_owned())
    }
}

impl fmt::Debug for LogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(str) => write!(f, "\"{str}\""),
            Self::Substrings(strs) => write!(
                f,
                "substrings:{}",
                strs.iter().map(|str| format!("\"{str}\"")).join(";")
            ),
        }
    }
}

impl PartialEq<str> for LogMatch {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Exact(str) => str == other,
            Self::Substrings(strs) => strs.iter().all(|str| other.contains(str.as_str())),
        }
    }
}

impl PartialEq<&str> for LogMatch {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut BattleController, want: &[LogMatch]) {
    let got = battle.new_log_entries().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(want, got.as_slice())
}

/// Asserts that every given log appears somewhere in the full battle log, in order.
#[track_caller]
pub fn assert_logs_contain(battle: &BattleController, want: &[LogMatch]) {
    let got = battle.log().logs().collect::<Vec<&str>>();
    let mut remaining = got.iter();
    for expected in want {
        if !remaining.any(|log| expected == log) {
            panic!("log {expected:?} not found in order in battle log:\n{}", got.join("\n"));
        }
    }
}
