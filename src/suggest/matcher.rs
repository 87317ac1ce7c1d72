use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::candidate::{Candidate, RawChoice};

/// Produces suggestions for the current input
///
/// The returned future may take arbitrarily long; the engine makes no
/// assumption about the order in which concurrent calls finish.
pub trait Matcher {
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>>;
}

impl Matcher for Box<dyn Matcher> {
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>> {
        (**self).suggest(input, choices)
    }
}

/// Adapter turning a closure into a [`Matcher`]
pub struct FnMatcher<F>(F);

/// Wrap a closure returning a future of raw choices
pub fn matcher_fn<F, Fut>(f: F) -> FnMatcher<F>
where
    F: Fn(&str, &[Candidate]) -> Fut,
    Fut: Future<Output = Vec<RawChoice>> + Send + 'static,
{
    FnMatcher(f)
}

impl<F, Fut> Matcher for FnMatcher<F>
where
    F: Fn(&str, &[Candidate]) -> Fut,
    Fut: Future<Output = Vec<RawChoice>> + Send + 'static,
{
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>> {
        (self.0)(input, choices).boxed()
    }
}

/// Keeps choices whose title starts with the input, ignoring case
#[derive(Debug, Clone, Copy, Default)]
pub struct StartsWithMatcher;

impl Matcher for StartsWithMatcher {
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>> {
        let needle = input.to_lowercase();
        let matches: Vec<RawChoice> = choices
            .iter()
            .filter(|c| c.title.to_lowercase().starts_with(&needle))
            .cloned()
            .map(RawChoice::from)
            .collect();
        future::ready(matches).boxed()
    }
}

/// fzf-style matching on titles, best score first
///
/// Whitespace separates terms; every term has to match.
pub struct FuzzyChoiceMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for FuzzyChoiceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyChoiceMatcher").finish_non_exhaustive()
    }
}

impl Default for FuzzyChoiceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyChoiceMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Indices of matching choices, best first; ties keep list order
    pub fn filter(&self, query: &str, choices: &[Candidate]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..choices.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = choices
            .iter()
            .enumerate()
            .filter_map(|(idx, choice)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.matcher.fuzzy_match(&choice.title, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

impl Matcher for FuzzyChoiceMatcher {
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>> {
        let matches: Vec<RawChoice> = self
            .filter(input, choices)
            .into_iter()
            .map(|idx| RawChoice::from(choices[idx].clone()))
            .collect();
        future::ready(matches).boxed()
    }
}

/// Delays every result of the wrapped matcher by a fixed amount
///
/// Handy for watching superseded results being dropped while typing.
pub struct Delayed<M> {
    inner: M,
    delay: Duration,
}

impl<M> Delayed<M> {
    pub fn new(inner: M, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<M: Matcher> Matcher for Delayed<M> {
    fn suggest(&self, input: &str, choices: &[Candidate]) -> BoxFuture<'static, Vec<RawChoice>> {
        let matching = self.inner.suggest(input, choices);
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            matching.await
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
