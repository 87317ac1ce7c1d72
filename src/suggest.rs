//! Suggestion engine
//!
//! Runs the matcher on every input change and makes sure only the most
//! recently issued request can ever update the suggestion list.

mod engine;
mod matcher;

use std::time::Duration;

pub use engine::{MatchResolution, RequestToken, SuggestionEngine};
pub use matcher::{Delayed, FnMatcher, FuzzyChoiceMatcher, Matcher, StartsWithMatcher, matcher_fn};

use crate::config::{MatcherConfig, MatcherKind};

/// Build the matcher selected in the configuration
pub fn matcher_from_config(config: &MatcherConfig) -> Box<dyn Matcher> {
    let matcher: Box<dyn Matcher> = match config.kind {
        MatcherKind::StartsWith => Box::new(StartsWithMatcher),
        MatcherKind::Fuzzy => Box::new(FuzzyChoiceMatcher::new()),
    };

    if config.delay_ms == 0 {
        matcher
    } else {
        Box::new(Delayed::new(matcher, Duration::from_millis(config.delay_ms)))
    }
}
