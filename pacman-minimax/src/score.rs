/// The value the protagonist assigns to a state. Higher is better.
///
/// `f64::INFINITY` and `f64::NEG_INFINITY` may be used as win and loss sentinels. Mixing both
/// under an expectation produces NaN, so evaluation functions should avoid returning opposite
/// infinities from siblings of a chance node.
pub type Utility = f64;

/// This trait is used to control something that can return a score from a game state
///
/// The search engine calls this at cutoff depth and at terminal states. Any
/// `Fn(&GameType) -> Utility` is a `Scorable`, so plain functions and closures can be used
/// directly.
pub trait Scorable<GameType> {
    /// Convert the given GameType into a Utility
    fn score(&self, game: &GameType) -> Utility;
}

impl<GameType, FnLike: Fn(&GameType) -> Utility> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> Utility {
        (self)(game)
    }
}
