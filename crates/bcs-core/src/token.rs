//! Sequence tokens for in-flight request tracking.

/// Token identifying one issued request within a [`TokenSeries`].
///
/// Tokens are opaque to the host: they travel out with a command and come
/// back unchanged on the completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Monotonically increasing token series for one logical operation.
///
/// Only the most recently issued token is current. Superseding the series
/// without issuing a new request turns every outstanding completion stale,
/// which is how cancellation works here: results are suppressed on arrival
/// rather than the network call being aborted.
#[derive(Debug, Default)]
pub struct TokenSeries {
    issued: u64,
}

impl TokenSeries {
    /// Issue the next token, making all previously issued tokens stale.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Whether `token` belongs to the most recently issued request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued && self.issued != 0
    }

    /// Invalidate all outstanding tokens without issuing a new request.
    pub fn supersede(&mut self) {
        self.issued += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_issued_token_is_current() {
        let mut series = TokenSeries::default();
        let first = series.issue();
        let second = series.issue();
        assert!(!series.is_current(first));
        assert!(series.is_current(second));
    }

    #[test]
    fn supersede_invalidates_outstanding_tokens() {
        let mut series = TokenSeries::default();
        let token = series.issue();
        series.supersede();
        assert!(!series.is_current(token));
    }

    #[test]
    fn fresh_series_has_no_current_token() {
        let series = TokenSeries::default();
        assert!(!series.is_current(RequestToken(0)));
    }
}
