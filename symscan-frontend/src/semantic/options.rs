//! Analysis knobs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an ordinary function is judged to be self-recursive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecursionStrategy {
    /// The name occurs more than once in the definition's source text,
    /// comments and string literals included
    #[default]
    Lexical,
    /// The body contains a call whose callee is the function's own name
    CallSite,
}

impl RecursionStrategy {
    pub const ALL: [RecursionStrategy; 2] = [RecursionStrategy::Lexical, RecursionStrategy::CallSite];

    pub fn name(self) -> &'static str {
        match self {
            RecursionStrategy::Lexical => "lexical",
            RecursionStrategy::CallSite => "call-site",
        }
    }
}

impl fmt::Display for RecursionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RecursionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown recursion strategy '{}'", s))
    }
}

/// Options for one analysis run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub recursion: RecursionStrategy,
}

impl AnalysisOptions {
    pub fn with_recursion(recursion: RecursionStrategy) -> Self {
        Self { recursion }
    }
}
