#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Detail,
    Skins,
}

/// Identifies one on-demand fetch. Only the most recently issued token is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub champion_id: String,
    generation: u64,
}

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Hands out generation-tagged tokens so a late response can't overwrite a newer view.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_generation: u64,
    current: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        RequestTracker::default()
    }

    /// Supersedes whatever was outstanding.
    pub fn issue(&mut self, kind: RequestKind, champion_id: &str) -> RequestToken {
        self.next_generation += 1;
        let token = RequestToken {
            kind,
            champion_id: champion_id.to_string(),
            generation: self.next_generation,
        };
        self.current = Some(token.clone());
        token
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.current.as_ref() == Some(token)
    }

    /// Consumes the token if it is still current.
    pub fn settle(&mut self, token: &RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn pending(&self) -> Option<&RequestToken> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let b = tracker.issue(RequestKind::Detail, "B");
        let a = tracker.issue(RequestKind::Detail, "A");

        assert!(!tracker.settle(&b));
        assert!(tracker.settle(&a));
        assert!(tracker.pending().is_none());
    }

    #[test]
    fn token_settles_once() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RequestKind::Skins, "Ahri");
        assert!(tracker.settle(&token));
        assert!(!tracker.settle(&token));
    }

    #[test]
    fn same_champion_reopened_gets_fresh_generation() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKind::Detail, "Ahri");
        let second = tracker.issue(RequestKind::Detail, "Ahri");
        assert!(second.generation() > first.generation());
        assert!(!tracker.is_current(&first));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RequestKind::Detail, "Ahri");
        tracker.cancel();
        assert!(!tracker.settle(&token));
    }
}
