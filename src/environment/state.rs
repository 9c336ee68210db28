//! Values passed from the environment to the players

use crate::core::Vocabulary;

/// Kind of transition a timestep reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    /// New game, no guesses yet
    Start,
    /// Mid-game, the last guess was wrong but more are allowed
    Step,
    /// Game over, won or lost
    End,
}

/// Outcome attached to a timestep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reward {
    Win,
    Draw,
    Lose,
}

impl Reward {
    /// Numeric reward: win 1, draw 0, lose -1
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Win => 1,
            Self::Draw => 0,
            Self::Lose => -1,
        }
    }
}

/// Snapshot of the environment's state
#[derive(Debug, Clone)]
pub struct State {
    pub words: Vocabulary,
    pub answer: String,
    pub n_guesses: usize,
}

/// One transition of the game, consumed once by a player
#[derive(Debug, Clone)]
pub struct TimeStep {
    pub state: State,
    pub step: StepType,
    pub reward: Reward,
}

impl TimeStep {
    #[must_use]
    pub const fn new(state: State, step: StepType, reward: Reward) -> Self {
        Self {
            state,
            step,
            reward,
        }
    }

    /// Check whether the game ended with this timestep
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.step == StepType::End
    }

    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.reward == Reward::Win
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State {
            words: Vocabulary::new(vec!["CRANE".to_string()]).unwrap(),
            answer: "CRANE".to_string(),
            n_guesses: 0,
        }
    }

    #[test]
    fn reward_values() {
        assert_eq!(Reward::Win.value(), 1);
        assert_eq!(Reward::Draw.value(), 0);
        assert_eq!(Reward::Lose.value(), -1);
    }

    #[test]
    fn only_end_is_terminal() {
        assert!(!TimeStep::new(state(), StepType::Start, Reward::Draw).is_terminal());
        assert!(!TimeStep::new(state(), StepType::Step, Reward::Draw).is_terminal());
        assert!(TimeStep::new(state(), StepType::End, Reward::Lose).is_terminal());

        let win = TimeStep::new(state(), StepType::End, Reward::Win);
        assert!(win.is_terminal());
        assert!(win.is_win());
    }
}
