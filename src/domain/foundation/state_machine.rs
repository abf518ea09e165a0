//! State machine trait for status enums.
//!
//! Gives membership, payment, and reminder statuses a shared interface for
//! validating transitions, so invalid lifecycle states are unrepresentable.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for MembershipStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Active, Frozen) | (Frozen, Active) | /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Active => vec![Frozen, Cancelled, Expired],
///             // ... etc
///         }
///     }
/// }
///
/// let next = membership.status.transition_to(MembershipStatus::Frozen)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DoorState {
        Open,
        Closed,
        Locked,
    }

    impl StateMachine for DoorState {
        fn can_transition_to(&self, target: &Self) -> bool {
            use DoorState::*;
            matches!(
                (self, target),
                (Open, Closed) | (Closed, Open) | (Closed, Locked) | (Locked, Closed)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use DoorState::*;
            match self {
                Open => vec![Closed],
                Closed => vec![Open, Locked],
                Locked => vec![Closed],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(
            DoorState::Open.transition_to(DoorState::Closed),
            Ok(DoorState::Closed)
        );
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        assert!(DoorState::Open.transition_to(DoorState::Locked).is_err());
    }

    #[test]
    fn no_state_is_terminal_here() {
        assert!(!DoorState::Open.is_terminal());
        assert!(!DoorState::Closed.is_terminal());
        assert!(!DoorState::Locked.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [DoorState::Open, DoorState::Closed, DoorState::Locked] {
            for target in state.valid_transitions() {
                assert!(
                    state.can_transition_to(&target),
                    "expected {:?} -> {:?} to be valid",
                    state,
                    target
                );
            }
        }
    }
}
