//! Hand-tuned pruning of the legal set before action selection.
//!
//! Two rules, applied in order, neither of which may empty the set:
//!
//! 1. Drop the move that walks straight at a threat 1 or 2 cells away on
//!    the same row or column.
//! 2. When no threat is within Euclidean distance 2, drop the reverse of the
//!    previous move so the agent does not oscillate.
//!
//! Positions are compared as grid cells (truncated toward zero).

use crate::types::{Direction, Position};

/// Straight-line distance (in cells) at which a threat blocks a move.
pub const THREAT_RANGE: i64 = 2;

fn cell_delta(from: Position, to: Position) -> (i64, i64) {
    let (fx, fy) = from.cell();
    let (tx, ty) = to.cell();
    (tx.saturating_sub(fx), ty.saturating_sub(fy))
}

/// Direction that would move `agent` toward `threat`, if the threat sits
/// 1..=[`THREAT_RANGE`] cells away along a single axis.
pub fn threat_direction(agent: Position, threat: Position) -> Option<Direction> {
    let delta = cell_delta(agent, threat);
    Direction::CARDINALS.into_iter().find(|direction| {
        let (ox, oy) = direction.offset();
        (1..=THREAT_RANGE).any(|steps| (ox * steps, oy * steps) == delta)
    })
}

/// Whether any threat lies within Euclidean distance [`THREAT_RANGE`].
pub fn threat_nearby(agent: Position, threats: &[Position]) -> bool {
    threats.iter().any(|&threat| {
        let (dx, dy) = cell_delta(agent, threat);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
            <= THREAT_RANGE * THREAT_RANGE
    })
}

fn remove_keeping_one(actions: &mut Vec<Direction>, action: Direction) {
    if actions.len() > 1 && actions.contains(&action) {
        actions.retain(|&a| a != action);
    }
}

/// Apply both pruning rules to `legal`, preserving the order of the rest.
pub fn filter_legal_actions(
    legal: &[Direction],
    agent: Position,
    threats: &[Position],
    last_action: Option<Direction>,
) -> Vec<Direction> {
    let mut actions = legal.to_vec();

    for &threat in threats {
        if let Some(direction) = threat_direction(agent, threat) {
            remove_keeping_one(&mut actions, direction);
        }
    }

    if let Some(last) = last_action
        && !threat_nearby(agent, threats)
    {
        remove_keeping_one(&mut actions, last.reverse());
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = Direction::CARDINALS;

    fn at(x: i64, y: i64) -> Position {
        Position::from((x, y))
    }

    #[test]
    fn test_threat_direction_axes() {
        let me = at(5, 5);
        assert_eq!(threat_direction(me, at(6, 5)), Some(Direction::East));
        assert_eq!(threat_direction(me, at(7, 5)), Some(Direction::East));
        assert_eq!(threat_direction(me, at(3, 5)), Some(Direction::West));
        assert_eq!(threat_direction(me, at(5, 6)), Some(Direction::North));
        assert_eq!(threat_direction(me, at(5, 3)), Some(Direction::South));
    }

    #[test]
    fn test_threat_direction_out_of_range() {
        let me = at(5, 5);
        assert_eq!(threat_direction(me, at(8, 5)), None);
        assert_eq!(threat_direction(me, at(6, 6)), None);
        assert_eq!(threat_direction(me, at(5, 5)), None);
    }

    #[test]
    fn test_fractional_positions_truncate() {
        let me = Position::new(5.0, 5.0);
        assert_eq!(
            threat_direction(me, Position::new(6.5, 5.0)),
            Some(Direction::East)
        );
        assert_eq!(threat_direction(me, Position::new(7.9, 5.4)), Some(Direction::East));
    }

    #[test]
    fn test_removes_move_toward_threat() {
        let filtered = filter_legal_actions(&ALL, at(1, 1), &[at(1, 3)], Some(Direction::West));
        assert_eq!(
            filtered,
            vec![Direction::East, Direction::South, Direction::West]
        );
    }

    #[test]
    fn test_reverse_removed_only_without_nearby_threat() {
        let far = filter_legal_actions(&ALL, at(1, 1), &[at(9, 9)], Some(Direction::North));
        assert!(!far.contains(&Direction::South));
        assert_eq!(far.len(), 3);

        // diagonal threat at distance sqrt(2): no axis removal, no reverse removal
        let near = filter_legal_actions(&ALL, at(1, 1), &[at(2, 2)], Some(Direction::North));
        assert_eq!(near, ALL.to_vec());
    }

    #[test]
    fn test_no_threats_still_prunes_reverse() {
        let filtered = filter_legal_actions(&ALL, at(0, 0), &[], Some(Direction::East));
        assert!(!filtered.contains(&Direction::West));
    }

    #[test]
    fn test_never_empties() {
        let only_east = [Direction::East];
        let filtered =
            filter_legal_actions(&only_east, at(1, 1), &[at(2, 1)], Some(Direction::West));
        assert_eq!(filtered, vec![Direction::East]);

        let pair = [Direction::North, Direction::East];
        let filtered = filter_legal_actions(
            &pair,
            at(1, 1),
            &[at(1, 2), at(3, 1)],
            Some(Direction::South),
        );
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_distant_positions_do_not_overflow() {
        let me = Position::new(0.0, 0.0);
        let far = Position::new(4e9, 0.0);
        assert!(!threat_nearby(me, &[far]));
        assert_eq!(threat_direction(me, far), None);

        let extremes = [Position::new(1e300, -1e300)];
        let filtered = filter_legal_actions(
            &ALL,
            Position::new(-1e300, 1e300),
            &extremes,
            Some(Direction::North),
        );
        assert_eq!(filtered.len(), 3);
        assert!(!filtered.contains(&Direction::South));
    }

    #[test]
    fn test_multiple_threats() {
        let filtered = filter_legal_actions(&ALL, at(4, 4), &[at(4, 5), at(2, 4)], None);
        assert_eq!(filtered, vec![Direction::East, Direction::South]);
    }
}
