//! Game port - the read-only view of the world the engine exposes per turn

use crate::{
    Error, Result,
    types::{Direction, FeatureVector, Position, StateKey, format_directions},
};

/// Observable game state for one turn.
///
/// Implemented by the external simulation. Agents never mutate the world;
/// they only read this view and return a move.
pub trait GameView {
    /// Moves the engine will accept this turn, possibly including `Stop`.
    fn legal_actions(&self) -> Vec<Direction>;

    /// Local feature vector used by the classifier.
    fn feature_vector(&self) -> FeatureVector;

    /// Where the controlled agent stands.
    fn agent_position(&self) -> Position;

    /// Positions of opponents to avoid.
    fn threat_positions(&self) -> Vec<Position>;

    /// Current game score.
    fn score(&self) -> f64;

    /// Key under which the Q-learner stores values for this state.
    ///
    /// # Default Implementation
    ///
    /// Keys the state by the agent's grid cell.
    fn state_key(&self) -> StateKey {
        StateKey::from(self.agent_position())
    }
}

/// Safety check performed when a move is submitted together with the legal set.
///
/// # Errors
///
/// Returns [`Error::IllegalMove`] if `chosen` is not in `legal`.
pub fn validate_move(chosen: Direction, legal: &[Direction]) -> Result<Direction> {
    if legal.contains(&chosen) {
        Ok(chosen)
    } else {
        Err(Error::IllegalMove {
            action: chosen.to_string(),
            legal: format_directions(legal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_move() {
        let legal = [Direction::North, Direction::Stop];
        assert_eq!(validate_move(Direction::Stop, &legal).unwrap(), Direction::Stop);

        let err = validate_move(Direction::East, &legal).unwrap_err();
        assert_eq!(
            err.to_string(),
            "illegal move East: not in legal set [North, Stop]"
        );
    }
}
