use junglr::core::{Animal, Board, GameConfig, Loc, Move, Piece, Side};
use junglr::heuristics::{
    greedy::GreedyStrategy, lookahead::LookaheadStrategy, margin::MarginStrategy,
    random::RandomStrategy, Strategy,
};
use junglr::utils::rng::make_seeded_rng;

fn piece(animal: Animal, side: Side) -> Piece {
    Piece::new(animal, side, &GameConfig::default())
}

fn all_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(RandomStrategy),
        Box::new(GreedyStrategy),
        Box::new(LookaheadStrategy::new(GameConfig::default())),
        Box::new(MarginStrategy),
    ]
}

#[test]
fn every_strategy_returns_a_legal_move() {
    let mut rng = make_seeded_rng(31);
    let mut board = Board::new(
        GameConfig::default(),
        junglr::core::BoardLayout::default(),
        &mut rng,
    );
    for index in [0, 3, 7, 12] {
        board.play(Move::Reveal(Loc::from_index(index))).unwrap();
    }

    let moves = board.legal_moves();
    for strategy in all_strategies() {
        let mv = strategy.choose(&board, &moves, &mut rng).unwrap();
        assert!(moves.contains(&mv), "{} chose {}", strategy.name(), mv);
    }
}

#[test]
fn every_strategy_rejects_an_empty_menu() {
    let board = Board::empty(GameConfig::default(), Side::Red);
    let mut rng = make_seeded_rng(31);
    for strategy in all_strategies() {
        assert!(strategy.choose(&board, &[], &mut rng).is_err());
    }
}

#[test]
fn lookahead_never_mutates_the_live_board() {
    let config = GameConfig::default();
    let mut board = Board::empty(config, Side::Blue);
    board.place(Loc::new(1, 1), piece(Animal::Lion, Side::Blue));
    board.place(Loc::new(1, 2), piece(Animal::Tiger, Side::Red));
    board.place_hidden(Loc::new(3, 3), piece(Animal::Cat, Side::Red));

    let snapshot = format!("{}", board);
    let moves = board.legal_moves();
    let mut rng = make_seeded_rng(77);

    LookaheadStrategy::new(config)
        .choose(&board, &moves, &mut rng)
        .unwrap();

    assert_eq!(format!("{}", board), snapshot);
    assert_eq!(board.turn(), Side::Blue);
}

#[test]
fn lookahead_avoids_walking_into_a_predator() {
    let config = GameConfig::default();
    let mut board = Board::empty(config, Side::Blue);
    // the wolf's only shift is suicide into the lion; a hidden cell
    // remains, so the evaluator should flip instead
    board.place(Loc::new(0, 0), piece(Animal::Wolf, Side::Blue));
    board.place(Loc::new(0, 1), piece(Animal::Lion, Side::Red));
    board.place(Loc::new(1, 0), piece(Animal::Tiger, Side::Red));
    board.place_hidden(Loc::new(3, 3), piece(Animal::Cat, Side::Red));

    let moves = board.legal_moves();
    let mut rng = make_seeded_rng(13);

    for _ in 0..10 {
        let mv = LookaheadStrategy::new(config)
            .choose(&board, &moves, &mut rng)
            .unwrap();
        assert!(mv.is_reveal(), "expected a reveal, got {}", mv);
    }
}

#[test]
fn margin_prefers_removing_a_threat() {
    let config = GameConfig::default();
    let mut board = Board::empty(config, Side::Blue);
    board.place(Loc::new(1, 1), piece(Animal::Lion, Side::Blue));
    board.place(Loc::new(1, 2), piece(Animal::Leopard, Side::Red));
    board.place(Loc::new(3, 3), piece(Animal::Elephant, Side::Red));

    let moves = board.legal_moves();
    let mut rng = make_seeded_rng(41);

    for _ in 0..10 {
        let mv = MarginStrategy.choose(&board, &moves, &mut rng).unwrap();
        assert_eq!(
            mv,
            Move::Shift { from: Loc::new(1, 1), to: Loc::new(1, 2) },
            "margin should eat the leopard"
        );
    }
}

#[test]
fn greedy_random_duel_completes() {
    // a sanity duel: every game terminates and the capture-first
    // player takes at least some of the series
    let mut rng = make_seeded_rng(2024);
    let mut greedy_wins = 0;
    let mut finished = 0;

    for seed in 0..40u64 {
        let mut game_rng = make_seeded_rng(seed);
        let mut board = Board::new(
            GameConfig::default(),
            junglr::core::BoardLayout::default(),
            &mut game_rng,
        );

        // greedy plays Red
        while board.outcome().is_none() {
            let moves = board.legal_moves();
            let mv = if board.turn() == Side::Red {
                GreedyStrategy.choose(&board, &moves, &mut rng).unwrap()
            } else {
                RandomStrategy.choose(&board, &moves, &mut rng).unwrap()
            };
            board.play(mv).unwrap();
        }

        finished += 1;
        if board.outcome() == Some(junglr::core::Outcome::Win(Side::Red)) {
            greedy_wins += 1;
        }
    }

    assert_eq!(finished, 40);
    assert!(greedy_wins > 0, "greedy never won a game");
}
