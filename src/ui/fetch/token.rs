use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one search. Later searches get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source. One per application; shared by all screens.
#[derive(Debug, Default)]
pub struct RequestTokens {
    next: AtomicU64,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase() {
        let tokens = RequestTokens::new();
        let a = tokens.issue();
        let b = tokens.issue();
        let c = tokens.issue();
        assert!(a < b && b < c);
        assert_eq!(a.value(), 1);
    }
}
