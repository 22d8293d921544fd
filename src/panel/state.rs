// src/panel/state.rs

/// Where an action is in its request cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

/// One panel action: its phase plus the result of its last success.
/// A failure or an in-flight request leaves that result in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState<T> {
    phase: Phase,
    last: Option<T>,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            last: None,
        }
    }
}

impl<T> ActionState<T> {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle && self.last.is_none()
    }

    /// Result of the last successful run
    pub fn value(&self) -> Option<&T> {
        self.last.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.phase = Phase::Pending;
    }

    pub fn succeed(&mut self, value: T) {
        self.phase = Phase::Idle;
        self.last = Some(value);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed(message.into());
    }

    /// Drop a failure back to idle, keeping any result
    pub fn clear_error(&mut self) {
        if let Phase::Failed(_) = self.phase {
            self.phase = Phase::Idle;
        }
    }

    /// Leave a pending phase without touching the result
    pub fn abandon(&mut self) {
        if self.is_pending() {
            self.phase = Phase::Idle;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_last_result() {
        let mut state = ActionState::default();
        state.succeed(7);
        state.begin();
        assert!(state.is_pending());
        assert_eq!(state.value(), Some(&7));

        state.fail("boom");
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.value(), Some(&7));
    }

    #[test]
    fn test_clear_error_keeps_results() {
        let mut state: ActionState<u32> = ActionState::default();
        state.fail("boom");
        state.clear_error();
        assert!(state.is_idle());

        state.succeed(7);
        state.clear_error();
        assert_eq!(state.value(), Some(&7));
        assert_eq!(state.phase(), &Phase::Idle);
    }

    #[test]
    fn test_success_overwrites_and_reset_clears() {
        let mut state = ActionState::default();
        state.succeed(1);
        state.begin();
        state.succeed(2);
        assert_eq!(state.value(), Some(&2));

        state.reset();
        assert!(state.is_idle());
        assert_eq!(state.value(), None);
    }

    #[test]
    fn test_abandon_only_leaves_pending() {
        let mut state: ActionState<u32> = ActionState::default();
        state.fail("x");
        state.abandon();
        assert_eq!(state.error(), Some("x"));

        state.begin();
        state.abandon();
        assert_eq!(state.phase(), &Phase::Idle);
    }
}
