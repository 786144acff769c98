//! Agent port - the interface the game loop drives every turn
//!
//! Both decision components plug into the external simulation through this
//! trait. The loop calls `register_initial_state` once per episode, then
//! `get_action` every turn, then `final_state` after a win or a loss.

use crate::{Result, ports::GameView, types::Direction};

/// Turn-driven decision maker.
///
/// # Examples
///
/// ```no_run
/// use pacman_agents::ports::{Agent, GameView};
///
/// fn play_turn<A: Agent>(agent: &mut A, view: &dyn GameView) -> pacman_agents::Result<()> {
///     let chosen = agent.get_action(view)?;
///     println!("{} moves {chosen}", agent.name());
///     Ok(())
/// }
/// ```
pub trait Agent: Send {
    /// Called once when an episode starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn register_initial_state(&mut self, _view: &dyn GameView) -> Result<()> {
        Ok(())
    }

    /// Choose a move for the current turn.
    ///
    /// The returned move is always a member of `view.legal_actions()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the legal set is empty or a collaborator fails.
    fn get_action(&mut self, view: &dyn GameView) -> Result<Direction>;

    /// Called once after the episode ends, with the terminal view.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for agents that do not learn online.
    fn final_state(&mut self, _view: &dyn GameView) -> Result<()> {
        Ok(())
    }

    /// Agent name, used in logs.
    fn name(&self) -> &str;

    /// Reseed the agent's random source.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
