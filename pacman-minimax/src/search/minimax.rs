use itertools::process_results;

use super::{Expansion, SearchContext, TurnCursor};
use crate::{instruments::SearchInstruments, MultiAgentGame, Scorable, SearchError, Utility};

/// Plain minimax. The protagonist maximizes, every adversary minimizes.
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
        process_results(children, |values| values.fold(Utility::INFINITY, Utility::min))
    }
}
