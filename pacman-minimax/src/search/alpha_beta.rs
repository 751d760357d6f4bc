use super::{Expansion, SearchContext, TurnCursor};
use crate::{instruments::SearchInstruments, MultiAgentGame, Scorable, SearchError, Utility};

/// Minimax with alpha-beta pruning
///
/// `alpha` is the best value the protagonist can already guarantee on the path to the root and
/// `beta` is the best the adversaries can already guarantee. Once `beta <= alpha` the remaining
/// children of a node can't change the decision above it, so we stop and return the bound we
/// have. That bound is not always the exact value of the node, but it is always on the correct
/// side of the window for the ancestor that caused the cutoff.
pub(crate) fn value<GameType, ScorableType, InstrumentsType>(
    context: &SearchContext<ScorableType, InstrumentsType>,
    node: &GameType,
    cursor: TurnCursor,
    mut alpha: Utility,
    mut beta: Utility,
) -> Result<Utility, SearchError>
where
    GameType: MultiAgentGame,
    ScorableType: Scorable<GameType>,
    InstrumentsType: SearchInstruments,
{
    let actions = match context.expand(node, cursor)? {
        Expansion::Leaf(score) => return Ok(score),
        Expansion::Actions(actions) => actions,
    };

    let next = cursor.next();

    if cursor.is_protagonist() {
        for action in &actions {
            let child = context.child(node, cursor, action);
            alpha = alpha.max(value(context, &child, next, alpha, beta)?);

            if beta <= alpha {
                break;
            }
        }

        Ok(alpha)
    } else {
        for action in &actions {
            let child = context.child(node, cursor, action);
            beta = beta.min(value(context, &child, next, alpha, beta)?);

            if beta <= alpha {
                break;
            }
        }

        Ok(beta)
    }
}
