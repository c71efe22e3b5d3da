//! The wisdom store: a fixed, immutable list of entries plus uniform
//! random selection.
//!
//! The store is constructed once at startup and handed to request handlers
//! as part of the shared application state; nothing mutates it afterwards.

use rand::Rng;

use crate::{Error, Result};

/// Entries served when no custom list is supplied.
const BUILTIN_WISDOM: &[&str] = &[
    "Your pipeline is only green because you forgot to run the real tests.",
    "High code coverage does not guarantee quality.",
    "Debugging is the art of having conversations with bugs.",
    "The most expensive bug is the one found by the customer.",
    "Write tests that fail for the right reasons.",
    "A feature without monitoring is a ghost feature.",
    "An automated test that never runs is not a test.",
    "If you havent tested it in production, you haven't really tested it.",
    "The best bug is the one that never happens.",
    "Quality is never an accident; it is always the result of intelligent effort.",
    "Flaky tests are like unreliable friends: they only show up when they want.",
    "A broken CI/CD pipeline is like cold coffee: nobody wants it.",
    "Rollback should be plan B, never plan A.",
    "Logs are love letters to your future self.",
    "Performance without monitoring is shooting in the dark.",
    "Tests are not just to prove code works, but to prove it fails gracefully.",
    "Automation without purpose is just noise.",
    "Observability turns unknown failures into known stories.",
    "The faster the feedback, the cheaper the fix.",
    "You dont get quality by adding tests at the end. You design it from the start.",
    "A green build should give confidence, not complacency.",
    "Every failing test is a chance to learn about your system.",
    "A pipeline is not done until it tells you when things break.",
    "Resilience is tested when everything else is failing.",
    "Documentation might lie, but tests tell the truth.",
];

/// An immutable, non-empty ordered list of wisdom entries.
#[derive(Debug, Clone)]
pub struct WisdomStore {
    entries: Vec<String>,
}

impl WisdomStore {
    /// Build a store from a custom list. The list must be non-empty; `pick`
    /// relies on that.
    pub fn new(entries: Vec<String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::ConfigError("wisdom list must not be empty".into()));
        }
        Ok(Self { entries })
    }

    /// Pick one entry uniformly at random.
    pub fn pick(&self) -> &str {
        let idx = rand::rng().random_range(0..self.entries.len());
        &self.entries[idx]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `text` is one of the stored entries.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }
}

impl Default for WisdomStore {
    fn default() -> Self {
        Self {
            entries: BUILTIN_WISDOM.iter().map(|s| s.to_string()).collect(),
        }
    }
}
