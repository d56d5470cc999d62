//! Final-round elimination flow.

mod common;

use proptest::prelude::*;

use quiz_engine::{
    EngineOptions, GameEngine, Package, PlayOptions, Round, Stage, Theme,
};

use common::{final_round, Event, RecordingHost};

fn engine(package: Package, options: PlayOptions) -> GameEngine<RecordingHost, PlayOptions> {
    let engine_options = EngineOptions {
        show_game_themes: false,
        ..EngineOptions::default()
    };
    GameEngine::new(package, RecordingHost::new(), options, engine_options).unwrap()
}

fn auto_reveal() -> PlayOptions {
    PlayOptions {
        show_right_answers: true,
        ..PlayOptions::default()
    }
}

#[test]
fn themes_are_listed_then_deleted_down_to_one() {
    let package = Package::new("test").with_round(final_round(&["A", "B", "C"]));
    let mut game = engine(package, auto_reveal());

    game.advance(); // Begin
    game.advance(); // Round started
    assert_eq!(game.stage(), Stage::SelectingQuestion);

    game.advance(); // theme list + deletion prompt
    assert!(game.handler_mut().contains(&Event::FinalThemes(vec![
        "A".to_string(),
        "B".to_string(),
        "C".to_string()
    ])));
    assert!(game.handler_mut().contains(&Event::AwaitingThemeDeletion));

    assert!(game.delete_theme(0));
    game.advance(); // still two left: prompt again
    assert!(game.delete_theme(2));

    game.advance(); // one left: auto-selected, no further prompt
    assert_eq!(game.stage(), Stage::QuestionType);
    assert!(game.handler_mut().contains(&Event::QuestionSelected(1, 0)));
    assert_eq!(
        game.handler_mut()
            .count(|e| matches!(e, Event::AwaitingThemeDeletion)),
        2
    );
}

#[test]
fn single_eligible_theme_is_selected_without_prompting() {
    let package = Package::new("test").with_round(final_round(&["Only"]));
    let mut game = engine(package, auto_reveal());

    game.advance(); // Begin
    game.advance(); // Round started
    game.advance(); // auto-select
    assert_eq!(game.stage(), Stage::QuestionType);
    assert_eq!(
        game.handler_mut()
            .count(|e| matches!(e, Event::AwaitingThemeDeletion)),
        0
    );
}

#[test]
fn final_round_without_eligible_themes_is_skipped() {
    let package = Package::new("test").with_round(
        Round::new_final("final")
            .with_theme(Theme::new("")) // unnamed
            .with_theme(Theme::new("NoQuestions")),
    );
    let mut game = engine(package, auto_reveal());

    game.advance(); // Begin
    game.advance(); // skipped straight through
    assert!(game
        .handler_mut()
        .contains(&Event::RoundSkipped("final".to_string())));
    assert_eq!(
        game.handler_mut()
            .count(|e| matches!(e, Event::RoundStarted(_))),
        0
    );
}

#[test]
fn deleting_invalid_or_last_theme_fails() {
    let package = Package::new("test").with_round(final_round(&["A", "B"]));
    let mut game = engine(package, auto_reveal());

    game.advance(); // Begin
    game.advance(); // Round
    game.advance(); // prompt

    assert!(!game.delete_theme(7));
    assert!(game.delete_theme(1));
    // One theme left: it can only be selected, not deleted.
    assert!(!game.delete_theme(0));
}

#[test]
fn theme_deletion_can_be_undone() {
    let package = Package::new("test").with_round(final_round(&["A", "B", "C"]));
    let mut game = engine(package, auto_reveal());

    game.advance(); // Begin
    game.advance(); // Round
    game.advance(); // prompt
    assert!(game.delete_theme(1));

    assert!(game.move_back());
    assert!(game.handler_mut().contains(&Event::ThemeRestored(1)));
    // All three themes in play again: two deletions needed once more.
    assert!(game.delete_theme(1));
    assert!(game.delete_theme(2));
    game.advance();
    assert!(game.handler_mut().contains(&Event::QuestionSelected(0, 0)));
}

#[test]
fn play_all_final_questions_plays_every_theme() {
    let package = Package::new("test").with_round(final_round(&["A", "B"]));
    let options = PlayOptions {
        play_all_final_questions: true,
        ..auto_reveal()
    };
    let mut game = engine(package, options);

    while game.can_advance() {
        game.advance();
    }

    assert!(game.handler_mut().contains(&Event::QuestionSelected(0, 0)));
    assert!(game.handler_mut().contains(&Event::QuestionSelected(1, 0)));
    assert_eq!(
        game.handler_mut()
            .count(|e| matches!(e, Event::AwaitingThemeDeletion)),
        0
    );
    assert!(game.handler_mut().contains(&Event::PackageFinished));
}

proptest! {
    /// N eligible themes and exactly N-1 deletions always leave one theme,
    /// which is then auto-selected without a further prompt.
    #[test]
    fn n_minus_one_deletions_reach_auto_selection(
        n in 2usize..6,
        picks in proptest::collection::vec(0usize..8, 5),
    ) {
        let names: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let package = Package::new("prop").with_round(final_round(&name_refs));
        let mut game = engine(package, auto_reveal());

        game.advance(); // Begin
        game.advance(); // Round
        let mut remaining: Vec<usize> = (0..n).collect();
        let mut pick = picks.iter().cycle();

        for _ in 0..(n - 1) {
            game.advance(); // prompt
            prop_assert_eq!(game.stage(), Stage::SelectingQuestion);
            let index = remaining[pick.next().unwrap() % remaining.len()];
            prop_assert!(game.delete_theme(index));
            remaining.retain(|&theme| theme != index);
        }

        prop_assert_eq!(remaining.len(), 1);
        game.advance(); // auto-select the survivor
        prop_assert_eq!(game.stage(), Stage::QuestionType);
        prop_assert!(game
            .handler_mut()
            .contains(&Event::QuestionSelected(remaining[0], 0)));
    }
}
