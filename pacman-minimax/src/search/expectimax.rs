use itertools::process_results;

use super::{Expansion, SearchContext, TurnCursor};
use crate::{instruments::SearchInstruments, MultiAgentGame, Scorable, SearchError, Utility};

/// Expectimax. The protagonist maximizes, adversaries are modeled as picking uniformly at random
/// from their legal actions so their value is the mean of their children.
///
/// There is no pruning here, a mean can't be bounded the way a minimum can.
pub(crate) fn value<GameType, ScorableType, InstrumentsType>(
    context: &SearchContext<ScorableType, InstrumentsType>,
    node: &GameType,
    cursor: TurnCursor,
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
    let children = actions
        .iter()
        .map(|action| value(context, &context.child(node, cursor, action), next));

    if cursor.is_protagonist() {
        process_results(children, |values| {
            values.fold(Utility::NEG_INFINITY, Utility::max)
        })
    } else {
        let total = process_results(children, |values| values.sum::<Utility>())?;

        Ok(total / actions.len() as Utility)
    }
}
