use std::fmt;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use super::matcher::Matcher;
use crate::candidate::{Candidate, RawChoice, normalize_all};

/// Identifies one matcher request
///
/// Tokens are minted in increasing order; only the most recent one is
/// current and allowed to update the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished matcher call, tagged with the token it was issued under
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResolution {
    pub token: RequestToken,
    pub entries: Vec<RawChoice>,
}

/// Issues matcher requests and filters out stale resolutions
///
/// Matcher futures are queued, not spawned: they make progress only while
/// [`SuggestionEngine::next_resolution`] is being awaited, which keeps the
/// whole prompt on one cooperative thread of control. A superseded future
/// still runs to completion; its result is dropped by [`SuggestionEngine::accept`].
pub struct SuggestionEngine<M> {
    matcher: M,
    /// Last token handed out
    last_issued: u64,
    /// Token whose result may still be applied
    current: Option<RequestToken>,
    /// Whether the current request has not resolved yet
    in_flight: bool,
    pending: FuturesUnordered<BoxFuture<'static, MatchResolution>>,
}

impl<M: Matcher> SuggestionEngine<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            last_issued: 0,
            current: None,
            in_flight: false,
            pending: FuturesUnordered::new(),
        }
    }

    /// Issue a new matcher request for `input`
    ///
    /// Any request issued earlier becomes stale from this point on.
    pub fn request(&mut self, input: &str, choices: &[Candidate]) -> RequestToken {
        self.last_issued = self.last_issued.wrapping_add(1);
        let token = RequestToken(self.last_issued);
        self.current = Some(token);
        self.in_flight = true;

        let matching = self.matcher.suggest(input, choices);
        self.pending.push(Box::pin(async move {
            MatchResolution {
                token,
                entries: matching.await,
            }
        }));

        log::debug!(
            "Issued match request {} for {:?} ({} pending)",
            token,
            input,
            self.pending.len()
        );
        token
    }

    /// Wait for the next matcher future to finish, in completion order
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn next_resolution(&mut self) -> Option<MatchResolution> {
        self.pending.next().await
    }

    /// Check a resolution against the current token
    ///
    /// Returns the normalized suggestion list when the resolution is current,
    /// `None` when a newer request has been issued since.
    pub fn accept(&mut self, resolution: MatchResolution) -> Option<Vec<Candidate>> {
        if self.current != Some(resolution.token) {
            log::debug!(
                "Discarding stale match result {} (current: {:?})",
                resolution.token,
                self.current.map(|t| t.id())
            );
            return None;
        }

        self.in_flight = false;
        Some(normalize_all(resolution.entries))
    }

    /// Whether the current request is still waiting on the matcher
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether any matcher future, current or stale, is still queued
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn current_token(&self) -> Option<RequestToken> {
        self.current
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
