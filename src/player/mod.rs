//! Question script player.
//!
//! Walks one question's ordered steps to completion, emitting content to a
//! [`QuestionHandler`]. One `play_next` call does exactly one pending unit
//! of work: one content group, one wait-for-finish item, one answer reveal,
//! or one pause for external input. The player knows nothing about rounds
//! or themes.
//!
//! ## Pauses
//!
//! Three situations park the player until the next `play_next` call:
//!
//! - a content item with `wait_for_finish` set (host signals completion by
//!   advancing),
//! - an accept step without automatic reveal (host drives validation),
//! - a set-price/set-answerer step (host resolves the wager/answerer; the
//!   resume trigger is simply the next call).

use tracing::{debug, trace};

use crate::engine::QuestionHandler;
use crate::model::{params, ContentKind, Question, Step, StepKind};
use crate::rules::{FalseStartMode, PlayOptions};

/// Playback position within the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerState {
    /// Executing steps.
    Running,
    /// Parked at a set-price/set-answerer step pending external resolution.
    AwaitingResolution,
    /// Parked at an accept step pending external answer validation.
    AwaitingValidation,
    /// Script exhausted.
    Finished,
}

/// Plays one question's script.
///
/// Created when a question is selected, dropped when it finishes. The type
/// name is resolved at construction (including the specials downgrade) and
/// available before playback starts.
#[derive(Debug)]
pub struct QuestionPlayer {
    steps: Vec<Step>,
    type_name: String,
    right: Vec<String>,
    fallback_answer: String,
    false_start: FalseStartMode,

    state: PlayerState,
    step_index: usize,
    item_index: usize,
    /// The most recent emission contained audio/video.
    is_media: bool,
    /// Buzz-in permission after the most recent emission.
    press_allowed: bool,
    /// The accept step carries its own answer content.
    answer_embedded: bool,
}

impl QuestionPlayer {
    /// Bind a player to a question.
    ///
    /// `default_type` is the round's default question type; a special type
    /// is downgraded to it (and its resolution steps dropped) when
    /// `play_specials` is off. The false-start mode is resolved here, once,
    /// from the given snapshot.
    #[must_use]
    pub fn new(
        question: &Question,
        default_type: &str,
        options: &PlayOptions,
        fallback_answer: String,
    ) -> Self {
        let downgraded = crate::model::question_types::is_special(&question.type_name)
            && !options.play_specials;

        let type_name = if downgraded {
            default_type.to_string()
        } else {
            question.type_name.clone()
        };

        let steps: Vec<Step> = if downgraded {
            // A downgraded question plays as a plain one: external
            // price/answerer resolutions no longer apply.
            question
                .script
                .steps
                .iter()
                .filter(|step| {
                    !matches!(step.kind, StepKind::SetPrice | StepKind::SetAnswerer)
                })
                .cloned()
                .collect()
        } else {
            question.script.steps.clone()
        };

        let false_start = FalseStartMode::from_options(options);
        debug!(type_name = %type_name, downgraded, steps = steps.len(), "question player created");

        Self {
            steps,
            type_name,
            right: question.right.clone(),
            fallback_answer,
            false_start,
            state: PlayerState::Running,
            step_index: 0,
            item_index: 0,
            is_media: false,
            press_allowed: matches!(false_start, FalseStartMode::Enabled),
            answer_embedded: false,
        }
    }

    /// The question's resolved type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the most recent emission contained audio/video.
    #[must_use]
    pub fn is_media(&self) -> bool {
        self.is_media
    }

    /// Current buzz-in permission under the question's false-start mode.
    #[must_use]
    pub fn press_allowed(&self) -> bool {
        self.press_allowed
    }

    /// Whether the accept step carries its own answer content (set once the
    /// accept step has run).
    #[must_use]
    pub fn answer_embedded(&self) -> bool {
        self.answer_embedded
    }

    /// Whether the whole script has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == PlayerState::Finished
    }

    /// Execute one pending unit of work. Returns whether any work remains.
    pub fn play_next(&mut self, handler: &mut dyn QuestionHandler, options: &PlayOptions) -> bool {
        match self.state {
            PlayerState::Finished => false,
            PlayerState::AwaitingResolution | PlayerState::AwaitingValidation => {
                // External input arrived; resume past the parked step.
                self.state = PlayerState::Running;
                self.next_step();
                self.run(handler, options)
            }
            PlayerState::Running => self.run(handler, options),
        }
    }

    /// Discard remaining content steps and jump to the accept step.
    pub fn skip_to_answer(&mut self) {
        if self.state == PlayerState::Finished || self.state == PlayerState::AwaitingValidation {
            return;
        }
        let target = self.steps[self.step_index..]
            .iter()
            .position(|step| step.kind == StepKind::AcceptAnswer)
            .map(|offset| self.step_index + offset)
            .unwrap_or(self.steps.len());

        trace!(from = self.step_index, to = target, "skipping to answer");
        self.state = PlayerState::Running;
        self.step_index = target;
        self.item_index = 0;
        if target >= self.steps.len() {
            self.state = PlayerState::Finished;
        }
    }

    fn next_step(&mut self) {
        self.step_index += 1;
        self.item_index = 0;
        if self.step_index >= self.steps.len() {
            self.state = PlayerState::Finished;
        }
    }

    /// Execute steps until one unit of work is done or the script ends.
    fn run(&mut self, handler: &mut dyn QuestionHandler, options: &PlayOptions) -> bool {
        loop {
            if self.step_index >= self.steps.len() {
                self.state = PlayerState::Finished;
                return false;
            }
            match self.steps[self.step_index].kind {
                StepKind::ShowContent => {
                    if let Some(has_more) = self.play_content(handler) {
                        return has_more;
                    }
                    // Step had no content; fall through to the next one.
                }
                StepKind::AcceptAnswer => return self.play_accept(handler, options),
                StepKind::SetPrice | StepKind::SetAnswerer => {
                    let step = &self.steps[self.step_index];
                    let range = step
                        .parameters
                        .get(params::PRICE)
                        .and_then(|p| p.as_number_set().copied());
                    handler.on_awaiting_resolution(step.kind, range.as_ref());
                    self.state = PlayerState::AwaitingResolution;
                    return true;
                }
            }
        }
    }

    /// Emit one content group (or one wait-for-finish item). Returns `None`
    /// when the step is exhausted and execution should continue with the
    /// next step.
    fn play_content(&mut self, handler: &mut dyn QuestionHandler) -> Option<bool> {
        let step = &self.steps[self.step_index];
        let items = step.content().unwrap_or(&[]);

        if self.item_index >= items.len() {
            self.next_step();
            return None;
        }

        let start = self.item_index;
        let end = if items[start].wait_for_finish {
            // A wait item is emitted on its own: one call, one item.
            start + 1
        } else {
            let mut end = start;
            while end < items.len() && !items[end].wait_for_finish {
                end += 1;
            }
            end
        };

        let group = &items[start..end];
        let is_media = group.iter().any(|item| item.kind.is_media());
        let press = match self.false_start {
            FalseStartMode::Enabled => true,
            FalseStartMode::Disabled => false,
            FalseStartMode::TextOnly => !self.text_pending_after(end),
        };

        handler.on_content(group, press);

        self.is_media = is_media;
        self.press_allowed = press;
        self.item_index = end;

        if self.item_index >= items.len() {
            self.next_step();
            if self.state == PlayerState::Finished {
                return Some(false);
            }
        }
        Some(true)
    }

    /// Any text items not yet emitted, from `from_item` of the current step
    /// onward?
    fn text_pending_after(&self, from_item: usize) -> bool {
        for (index, step) in self.steps[self.step_index..].iter().enumerate() {
            if step.kind != StepKind::ShowContent {
                continue;
            }
            let skip = if index == 0 { from_item } else { 0 };
            let items = step.content().unwrap_or(&[]);
            if items
                .iter()
                .skip(skip)
                .any(|item| item.kind == ContentKind::Text)
            {
                return true;
            }
        }
        false
    }

    fn play_accept(&mut self, handler: &mut dyn QuestionHandler, options: &PlayOptions) -> bool {
        let step = &self.steps[self.step_index];
        let embedded = step
            .parameters
            .get(params::ANSWER)
            .and_then(|p| p.as_content())
            .filter(|items| !items.is_empty())
            .map(<[_]>::to_vec);
        self.answer_embedded = embedded.is_some();

        if options.show_right_answers {
            match embedded {
                Some(items) => handler.on_answer_content(&items),
                None => {
                    let text = self
                        .right
                        .first()
                        .map(String::as_str)
                        .unwrap_or(&self.fallback_answer);
                    handler.on_answer_revealed(text);
                }
            }
            self.next_step();
            self.state != PlayerState::Finished
        } else {
            handler.on_awaiting_validation(&self.right);
            self.state = PlayerState::AwaitingValidation;
            true
        }
    }
}
