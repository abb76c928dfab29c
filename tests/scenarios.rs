use rand::SeedableRng;
use rand::rngs::StdRng;
use test_case::test_case;
use wordle_engine::commands::solve_word;
use wordle_engine::config::GameConfig;
use wordle_engine::core::{Feedback, GuessHistory, Verdict, Word, score};
use wordle_engine::filter::{Exclusions, filter_candidates};
use wordle_engine::game::{Game, GameStatus, GuessError};
use wordle_engine::service::{CheckResponse, GameService, GenerateRequest};
use wordle_engine::solver::{EntropyStrategy, Solver, SolverError, Strategy, StrategyType};
use wordle_engine::wordlists::{WordLists, is_valid};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn observed(guess: &str, solution: &str) -> GuessHistory {
    let guess = word(guess);
    let feedback = score(&guess, &word(solution));
    vec![(guess, feedback)].into()
}

#[test]
fn duplicate_guess_letter_beyond_solution_count_is_absent() {
    let feedback = score(&word("goose"), &word("grows"));

    // The O at the solution's O position is Correct, the other O is left without a copy
    assert_eq!(feedback.get(1), Verdict::Absent);
    assert_eq!(feedback.get(2), Verdict::Correct);
    assert_eq!(feedback.to_string(), "CWCMW");
}

#[test]
fn speed_against_erase() {
    let history = observed("speed", "erase");
    assert_eq!(history.entries()[0].1.to_string(), "MWMMW");

    let exclusions = Exclusions::from_history(&history);
    assert!(exclusions.legitimate().contains(b'E'));
    assert!(exclusions.legitimate().contains(b'S'));
    // Misplaced letters are only ruled out where they were guessed
    assert!(exclusions.forbidden_at(2).contains(b'E'));
    assert!(!exclusions.forbidden_at(0).contains(b'E'));
    // P and D were never marked present, so they are ruled out everywhere
    for position in 0..5 {
        assert!(exclusions.forbidden_at(position).contains(b'P'));
        assert!(exclusions.forbidden_at(position).contains(b'D'));
    }

    let dictionary = vec![word("erase"), word("spend"), word("those")];
    let remaining = filter_candidates(&history, &dictionary);
    assert!(remaining.contains(&&dictionary[0]));
}

#[test]
fn absent_copy_of_present_letter_excluded_at_one_position() {
    // LLAMA vs LEMON: the second L is Absent although L is in the word
    let history = observed("llama", "lemon");
    assert_eq!(history.entries()[0].1.to_string(), "CWWMW");

    let exclusions = Exclusions::from_history(&history);
    assert!(exclusions.forbidden_at(1).contains(b'L'));
    for position in [0, 2, 3, 4] {
        assert!(!exclusions.forbidden_at(position).contains(b'L'));
    }

    let dictionary = vec![word("lemon"), word("melon"), word("hello")];
    let remaining: Vec<&str> = filter_candidates(&history, &dictionary)
        .iter()
        .map(|w| w.text())
        .collect();
    // HELLO keeps an L at position 2; only position 1 is forbidden
    assert_eq!(remaining, ["LEMON", "MELON", "HELLO"]);
}

#[test]
fn filter_does_not_pin_correct_letters() {
    let history = observed("crane", "slate");
    let dictionary = vec![word("slate"), word("stale"), word("steal")];

    let remaining = filter_candidates(&history, &dictionary);
    assert_eq!(remaining.len(), 3);
}

#[test_case("crane", true ; "lowercase")]
#[test_case("CRANE", true ; "uppercase")]
#[test_case("CrAnE", true ; "mixed case")]
#[test_case("ab1de", false ; "digit")]
#[test_case("toolong5", false ; "too long")]
#[test_case("cran", false ; "too short")]
#[test_case("slate", false ; "not in dictionary")]
#[test_case(" crane ", false ; "padded with spaces")]
#[test_case("crane\n", false ; "trailing newline")]
fn validity_gate(input: &str, expected: bool) {
    let dictionary = vec![word("CRANE")];
    assert_eq!(is_valid(input, &dictionary), expected);
}

#[test]
fn embedded_solutions_score_perfectly_against_themselves() {
    let lists = WordLists::embedded();
    for solution in lists.solutions() {
        assert_eq!(score(solution, solution), Feedback::PERFECT, "{solution}");
    }
}

#[test]
fn entropy_solver_wins_typical_words() {
    let lists = WordLists::embedded();
    let strategy = StrategyType::Entropy(EntropyStrategy);
    let solver = Solver::new(strategy, lists.solutions(), word("crane"));
    let config = GameConfig {
        max_guesses: 20,
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(11);

    for target in ["slate", "goose", "floor", "lemon", "speed"] {
        let result = solve_word(&solver, &lists, &config, word(target), &mut rng).unwrap();
        assert!(result.outcome.win, "never found {target}");
        assert_eq!(result.steps[0].word.text(), "CRANE");
    }
}

#[test_case("only_matched_patterns" ; "matched patterns")]
#[test_case("entropy" ; "entropy")]
fn solver_games_stay_consistent(mode: &str) {
    let lists = WordLists::embedded();
    let strategy: StrategyType = mode.parse().unwrap();
    let solver = Solver::new(strategy, lists.solutions(), word("crane"));
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    for target in ["slate", "goose", "floor", "lemon", "speed"] {
        let result = solve_word(&solver, &lists, &config, word(target), &mut rng).unwrap();

        assert!(result.steps.len() <= config.max_guesses);
        assert_eq!(result.outcome.num_guesses, result.steps.len());
        let last = result.steps.last().unwrap();
        assert_eq!(result.outcome.win, last.feedback.is_perfect());
        for step in &result.steps {
            // The opening and every strategy pick come from the solution list
            assert!(lists.solutions().contains(&step.word));
            // Under honest feedback the target is never filtered out
            assert!(step.candidates_after >= 1);
        }
    }
    assert_eq!(solver.strategy().name(), mode);
}

#[test]
fn unknown_strategy_is_rejected() {
    let err = "letter_frequency".parse::<StrategyType>().unwrap_err();
    assert_eq!(err, SolverError::UnknownStrategy("letter_frequency".into()));
    assert!(err.to_string().contains("only_matched_patterns"));
}

#[test]
fn game_flow_with_invalid_input() {
    let lists = WordLists::embedded();
    let mut game = Game::new(&lists, word("grows"), 6);

    assert!(matches!(game.submit("gr0ws"), Err(GuessError::Invalid(_))));
    assert_eq!(game.submit("goose").unwrap().to_string(), "CWCMW");
    assert!(game.submit("grows").unwrap().is_perfect());
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.outcome().map(|o| o.num_guesses), Some(2));
}

#[test]
fn service_round_trip() {
    let lists = WordLists::embedded();
    let mut service = GameService::new(lists, GameConfig::default());
    let mut rng = StdRng::seed_from_u64(9);

    let index = service.solution_index(&mut rng).unwrap();
    let solution = service.lists().solutions()[index].clone();

    let mut request = GenerateRequest {
        mode: "only_matched_patterns".into(),
        ..GenerateRequest::default()
    };

    let mut won = false;
    for _ in 0..6 {
        let guess = service.generate_guess(&request, &mut rng).unwrap();
        let response = service.check_guess(i64::try_from(index).unwrap(), guess.text());
        let CheckResponse::Feedback(feedback) = response else {
            panic!("{guess} was rejected");
        };

        request.current_guesses.push(guess.to_string());
        request.guess_feedback.push(feedback.to_string());
        if feedback.is_perfect() {
            won = true;
            break;
        }
    }

    let outcome = wordle_engine::game::GameOutcome {
        win: won,
        num_guesses: request.current_guesses.len(),
    };
    let summaries = service.record_stat(&request.mode, outcome);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].games, 1);
    assert_eq!(request.current_guesses[0], "CRANE");
    if won {
        assert_eq!(request.current_guesses.last().unwrap(), solution.text());
    }
}
