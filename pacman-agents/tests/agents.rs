use std::collections::HashSet;

use pacman_agents::{
    agent_from_args, all_factories, Direction, EvaluationFunction, ReflexAgent, SearchAgent,
};
use pacman_minimax::{MultiAgentGame, SearchVariant, PROTAGONIST};
use rand::{rngs::StdRng, SeedableRng};

mod common;
use common::GridGame;

#[test]
fn reflex_agent_walks_towards_food_instead_of_stopping() {
    let game = GridGame::from_layout(&["P  .", "    "]);

    for seed in 0..16 {
        let action = ReflexAgent {}
            .choose_action(&game, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        assert_eq!(action, Direction::East);
    }
}

#[test]
fn reflex_agent_never_walks_into_a_ghost() {
    let game = GridGame::from_layout(&["    ", "PG.."]);

    for seed in 0..16 {
        let action = ReflexAgent {}
            .choose_action(&game, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        assert_eq!(action, Direction::North);
    }
}

#[test]
fn reflex_agent_breaks_ties_with_the_rng() {
    let game = GridGame::from_layout(&[".P."]);
    let mut picked = HashSet::new();

    for seed in 0..64 {
        let action = ReflexAgent {}
            .choose_action(&game, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let again = ReflexAgent {}
            .choose_action(&game, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        assert_eq!(action, again);
        picked.insert(action);
    }

    assert_eq!(picked, HashSet::from([Direction::East, Direction::West]));
}

#[test]
fn search_agents_take_the_winning_pellet() {
    let game = GridGame::from_layout(&["P.", "  ", "  ", "G "]);

    for variant in SearchVariant::all() {
        let agent = SearchAgent::new(variant, EvaluationFunction::Score, 2);

        for seed in 0..4 {
            let action = agent
                .choose_action(&game, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            assert_eq!(action, Direction::East, "{}", variant);
        }
    }
}

#[test]
fn search_agents_stay_out_of_reach() {
    let game = GridGame::from_layout(&["     ", "P G ."]);

    for variant in SearchVariant::all() {
        let agent = SearchAgent::new(variant, EvaluationFunction::Score, 1);

        for seed in 0..16 {
            let action = agent
                .choose_action(&game, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            assert_ne!(action, Direction::East, "{}", variant);
        }
    }

    let alpha_beta = SearchAgent::new(SearchVariant::AlphaBeta, EvaluationFunction::Score, 1);
    assert_eq!(
        alpha_beta
            .choose_action(&game, &mut StdRng::seed_from_u64(0))
            .unwrap(),
        Direction::North
    );
}

#[test]
fn agents_are_found_by_name() {
    let names = all_factories::<GridGame>()
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "ReflexAgent",
            "MinimaxAgent",
            "AlphaBetaAgent",
            "ExpectimaxAgent"
        ]
    );

    for name in names {
        let agent = agent_from_args::<GridGame>(&name, "", "").unwrap();
        assert_eq!(agent.name(), name);
    }

    let agent = agent_from_args::<GridGame>("ExpectimaxAgent", "betterEvaluationFunction", "3");
    assert!(agent.is_ok());
}

#[test]
fn bad_arguments_are_reported() {
    let error = agent_from_args::<GridGame>("GreedyAgent", "", "")
        .err()
        .unwrap();
    assert!(error.to_string().contains("GreedyAgent"));

    let error = agent_from_args::<GridGame>("MinimaxAgent", "worseEvaluationFunction", "2")
        .err()
        .unwrap();
    assert!(error.to_string().contains("worseEvaluationFunction"));

    let error = agent_from_args::<GridGame>("AlphaBetaAgent", "score", "deep")
        .err()
        .unwrap();
    assert!(error.to_string().contains("deep"));
}

#[test]
fn every_agent_plays_a_legal_move() {
    let game = GridGame::from_layout(&["..G..", ". o .", "..P..", "G   ."]);
    let legal = game.legal_actions(PROTAGONIST);

    for factory in all_factories::<GridGame>() {
        let agent = factory.create("better", "2").unwrap();

        for seed in 0..4 {
            let action = agent
                .get_action(&game, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            assert!(
                legal.contains(&action),
                "{} played {}",
                agent.name(),
                action
            );
        }
    }
}

#[test]
fn a_finished_game_has_nothing_to_search() {
    let mut game = GridGame::from_layout(&["P.G"]);
    game.lost = true;

    let agent = SearchAgent::new(SearchVariant::Minimax, EvaluationFunction::Score, 2);
    assert!(agent
        .choose_action(&game, &mut StdRng::seed_from_u64(0))
        .is_err());
}
