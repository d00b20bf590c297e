//! End-to-end properties of the game state machine.

use std::collections::HashSet;

use quizforge_core::{GameRules, QuestionBank, QuizError, QuizGame, Scoreboard};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn game_of(n: usize, seed: u64) -> QuizGame {
    let mut game = QuizGame::new(QuestionBank::with_seed(seed), Scoreboard::new());
    for i in 0..n {
        game.add_question(
            format!("Question {i}"),
            strings(&["a", "b", "c"]),
            "a",
            strings(&["first", "second", "third", "fourth", "fifth"]),
        )
        .unwrap();
    }
    game
}

#[test]
fn exhausting_the_bank_never_repeats() {
    for seed in 0..20 {
        let mut game = game_of(8, seed);
        let mut seen = HashSet::new();
        let mut transitions = 0;

        for _ in 0..8 {
            let was_over = game.is_game_over();
            let q = game.next_question().unwrap();
            assert!(seen.insert(q.id), "seed {seed}: repeated question");
            if !was_over && game.is_game_over() {
                transitions += 1;
            }
        }

        assert_eq!(transitions, 1, "seed {seed}");
        assert!(game.is_game_over());
        assert_eq!(game.next_question(), Err(QuizError::GameOver));
    }
}

#[test]
fn n_questions_then_no_more_at_bank_level() {
    let mut bank = QuestionBank::with_seed(99);
    for i in 0..4 {
        bank.add_question(format!("Q{i}"), strings(&["x", "y"]), "x", vec![])
            .unwrap();
    }
    for _ in 0..4 {
        bank.random_question().unwrap();
    }
    assert_eq!(bank.random_question().unwrap_err(), QuizError::NoMoreQuestions);
}

#[test]
fn nothing_answerable_before_first_fetch() {
    let mut game = game_of(3, 1);
    assert_eq!(game.check_answer("a"), Err(QuizError::NoCurrentQuestion));
    assert_eq!(game.request_hint(), Err(QuizError::NoCurrentQuestion));
    assert_eq!(game.score(), 0);
}

#[test]
fn unoffered_answer_is_an_error_not_false() {
    let mut game = game_of(3, 1);
    game.next_question().unwrap();
    let err = game.check_answer("z").unwrap_err();
    assert!(matches!(err, QuizError::InvalidAnswer { .. }));
}

#[test]
fn hint_scores_converge_to_floor() {
    let mut game = game_of(2, 3);
    game.next_question().unwrap();
    let mut scores = Vec::new();
    for _ in 0..4 {
        game.request_hint().unwrap();
        scores.push(game.score());
    }
    assert_eq!(scores, vec![8, 6, 4, 2]);
    assert_eq!(
        game.request_hint(),
        Err(QuizError::MaxHintsLimit { limit: 4 })
    );
}

#[test]
fn restart_round_trip() {
    let mut game = game_of(5, 8);
    let mut first_round = HashSet::new();
    while !game.is_game_over() {
        first_round.insert(game.next_question().unwrap().id);
        game.check_answer("a").unwrap();
    }
    assert_eq!(game.score(), 50);

    game.restart();
    assert_eq!(game.score(), 0);
    assert!(game.bank().has_more_questions());
    assert_eq!(game.bank().len(), 5);

    let mut second_round = HashSet::new();
    while !game.is_game_over() {
        second_round.insert(game.next_question().unwrap().id);
    }
    assert_eq!(first_round, second_round);
}

#[test]
fn hints_stay_spent_across_restart() {
    let mut game = QuizGame::with_rules(
        QuestionBank::with_seed(2),
        Scoreboard::new(),
        GameRules {
            max_hints: 10,
            ..GameRules::default()
        },
    );
    game.add_question("Only one", strings(&["a", "b"]), "a", strings(&["h1", "h2"]))
        .unwrap();

    game.next_question().unwrap();
    assert_eq!(game.request_hint().unwrap(), "h1");
    game.restart();

    let q = game.next_question().unwrap();
    assert_eq!(q.hints_remaining, 1);
    assert_eq!(game.request_hint().unwrap(), "h2");
    assert_eq!(game.request_hint(), Err(QuizError::NoMoreHints));
}
