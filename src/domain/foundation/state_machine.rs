//! State machine trait for lifecycle enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, used by the recognition session lifecycle.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SessionPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Idle, Listening) | (Listening, Completed) /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Listening],
///             // ...
///         }
///     }
/// }
///
/// let next = current.transition_to(SessionPhase::Listening)?;
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Light::*;
            matches!((self, target), (Off, On) | (On, Off) | (On, Broken))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Off => vec![On],
                On => vec![Off, Broken],
                Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Light::Off.transition_to(Light::On), Ok(Light::On));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = Light::Broken.transition_to(Light::On).unwrap_err();
        assert!(err.to_string().contains("Cannot transition from Broken to On"));
    }
}
