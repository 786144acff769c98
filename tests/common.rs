//! Common test utilities: a scripted stand-in for the game engine.

#![allow(dead_code)]

use pacman_agents::{
    Direction, FeatureVector, Position, StateKey,
    ports::GameView,
};

/// A fixed observation handed to an agent for one turn.
#[derive(Debug, Clone)]
pub struct ScriptedGame {
    pub legal: Vec<Direction>,
    pub features: Vec<u8>,
    pub position: Position,
    pub threats: Vec<Position>,
    pub score: f64,
    pub state: Option<StateKey>,
}

impl ScriptedGame {
    /// Agent standing on cell `(x, y)` with every move legal.
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            legal: vec![
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::Stop,
            ],
            features: Vec::new(),
            position: Position::from((x, y)),
            threats: Vec::new(),
            score: 0.0,
            state: None,
        }
    }

    pub fn with_legal(mut self, legal: &[Direction]) -> Self {
        self.legal = legal.to_vec();
        self
    }

    pub fn with_features(mut self, features: &[u8]) -> Self {
        self.features = features.to_vec();
        self
    }

    pub fn with_threat(mut self, x: i64, y: i64) -> Self {
        self.threats.push(Position::from((x, y)));
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(StateKey::from(state));
        self
    }
}

impl GameView for ScriptedGame {
    fn legal_actions(&self) -> Vec<Direction> {
        self.legal.clone()
    }

    fn feature_vector(&self) -> FeatureVector {
        FeatureVector::new(self.features.clone())
    }

    fn agent_position(&self) -> Position {
        self.position
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.threats.clone()
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn state_key(&self) -> StateKey {
        self.state
            .clone()
            .unwrap_or_else(|| StateKey::from(self.position))
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
