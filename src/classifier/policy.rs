//! Turning a predicted label into a legal move.

use rand::{Rng, seq::IndexedRandom};
use tracing::warn;

use crate::{
    Error, Result,
    types::{Direction, Label},
};

/// Map `label` to its direction, or fall back to a uniformly random legal
/// move when the engine does not allow it.
///
/// # Errors
///
/// Returns [`Error::NoLegalActions`] if `legal` is empty.
pub fn select_move<R: Rng + ?Sized>(
    label: Label,
    legal: &[Direction],
    rng: &mut R,
) -> Result<Direction> {
    let predicted = label.direction();
    if legal.contains(&predicted) {
        return Ok(predicted);
    }
    let fallback = *legal.choose(rng).ok_or(Error::NoLegalActions)?;
    warn!(%predicted, %fallback, "predicted move is illegal, choosing at random");
    Ok(fallback)
}
