//! Per-token lifecycle state machine
//!
//! `Unminted -> Live -> Burned`. Burned is terminal: no transition leads
//! back to Live and burned ids are never reassigned.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenState {
    Unminted,
    Live,
    Burned,
}

pub fn allowed_transitions(from: TokenState) -> Vec<TokenState> {
    use TokenState::*;
    match from {
        Unminted => vec![Live],
        Live => vec![Burned],
        Burned => vec![],
    }
}

pub fn can_transition(from: TokenState, to: TokenState) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_is_the_only_exit_from_unminted() {
        assert!(can_transition(TokenState::Unminted, TokenState::Live));
        assert!(!can_transition(TokenState::Unminted, TokenState::Burned));
    }

    #[test]
    fn burned_is_terminal() {
        assert!(allowed_transitions(TokenState::Burned).is_empty());
    }

    #[test]
    fn no_self_transitions() {
        for s in [TokenState::Unminted, TokenState::Live, TokenState::Burned] {
            assert!(!can_transition(s, s));
        }
    }
}
