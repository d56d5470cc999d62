//! Shared test support: a recording host and package fixtures.

#![allow(dead_code)]

use quiz_engine::{
    ContentItem, GameHandler, NumberSet, Package, Question, QuestionHandler, Round, RoundEndReason,
    StepKind, Theme,
};

/// Everything the engine tells a host, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    PackageStarted(String),
    PackageFinished,
    GameThemes(Vec<String>),
    RoundStarted(String),
    RoundSkipped(String),
    RoundEnded(RoundEndReason),
    AwaitingSelection,
    QuestionSelected(usize, usize),
    QuestionRestored(usize, usize),
    QuestionType(String, bool),
    FinalThemes(Vec<String>),
    AwaitingThemeDeletion,
    ThemeDeleted(usize),
    ThemeRestored(usize),
    Content(Vec<String>, bool),
    AnswerRevealed(String),
    AnswerContent(Vec<String>),
    AwaitingValidation(Vec<String>),
    AwaitingResolution(StepKind),
    QuestionEnd,
}

/// Host that records every notification.
#[derive(Default)]
pub struct RecordingHost {
    pub events: Vec<Event>,
    /// Value the next `on_question_end` reports.
    pub round_timed_out: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }
}

impl QuestionHandler for RecordingHost {
    fn on_content(&mut self, items: &[ContentItem], press_allowed: bool) {
        self.events.push(Event::Content(
            items.iter().map(|item| item.value.clone()).collect(),
            press_allowed,
        ));
    }

    fn on_answer_revealed(&mut self, text: &str) {
        self.events.push(Event::AnswerRevealed(text.to_string()));
    }

    fn on_answer_content(&mut self, items: &[ContentItem]) {
        self.events.push(Event::AnswerContent(
            items.iter().map(|item| item.value.clone()).collect(),
        ));
    }

    fn on_awaiting_validation(&mut self, right: &[String]) {
        self.events.push(Event::AwaitingValidation(right.to_vec()));
    }

    fn on_awaiting_resolution(&mut self, kind: StepKind, _range: Option<&NumberSet>) {
        self.events.push(Event::AwaitingResolution(kind));
    }
}

impl GameHandler for RecordingHost {
    fn on_package_started(&mut self, package: &Package) {
        self.events.push(Event::PackageStarted(package.name.clone()));
    }

    fn on_package_finished(&mut self) {
        self.events.push(Event::PackageFinished);
    }

    fn on_game_themes(&mut self, names: &[String]) {
        self.events.push(Event::GameThemes(names.to_vec()));
    }

    fn on_round_started(&mut self, round: &Round) {
        self.events.push(Event::RoundStarted(round.name.clone()));
    }

    fn on_round_skipped(&mut self, round: &Round) {
        self.events.push(Event::RoundSkipped(round.name.clone()));
    }

    fn on_round_ended(&mut self, reason: RoundEndReason) {
        self.events.push(Event::RoundEnded(reason));
    }

    fn on_awaiting_selection(&mut self) {
        self.events.push(Event::AwaitingSelection);
    }

    fn on_question_selected(&mut self, theme: usize, question: usize, _data: &Question) {
        self.events.push(Event::QuestionSelected(theme, question));
    }

    fn on_question_restored(&mut self, theme: usize, question: usize) {
        self.events.push(Event::QuestionRestored(theme, question));
    }

    fn on_question_type(&mut self, type_name: &str, is_default: bool) {
        self.events
            .push(Event::QuestionType(type_name.to_string(), is_default));
    }

    fn on_final_themes(&mut self, names: &[String]) {
        self.events.push(Event::FinalThemes(names.to_vec()));
    }

    fn on_awaiting_theme_deletion(&mut self) {
        self.events.push(Event::AwaitingThemeDeletion);
    }

    fn on_theme_deleted(&mut self, theme: usize) {
        self.events.push(Event::ThemeDeleted(theme));
    }

    fn on_theme_restored(&mut self, theme: usize) {
        self.events.push(Event::ThemeRestored(theme));
    }

    fn on_question_end(&mut self) -> bool {
        self.events.push(Event::QuestionEnd);
        self.round_timed_out
    }
}

/// A standard round named `name` with one theme per entry; each entry is
/// `(theme name, prices)`.
pub fn standard_round(name: &str, themes: &[(&str, &[i64])]) -> Round {
    let mut round = Round::new(name);
    for (theme_name, prices) in themes {
        let mut theme = Theme::new(*theme_name);
        for &price in *prices {
            theme = theme.with_question(Question::new(
                price,
                format!("{theme_name} for {price}?"),
                format!("answer {price}"),
            ));
        }
        round = round.with_theme(theme);
    }
    round
}

/// A final round with one single-question theme per name.
pub fn final_round(names: &[&str]) -> Round {
    let mut round = Round::new_final("final");
    for name in names {
        round = round
            .with_theme(Theme::new(*name).with_question(Question::new(0, "final?", "answer")));
    }
    round
}

/// One standard round, one theme "A" with a single 100-point question.
pub fn minimal_package() -> Package {
    Package::new("test").with_round(standard_round("round 1", &[("A", &[100])]))
}
