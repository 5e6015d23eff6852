//! Game controller: session state, the phase machine and every render call.
//!
//! A session walks an outer index over sentence groups and an inner index over
//! the levels of the current group:
//!
//! ```text
//! Intro -> WeekSelect -> Preview(g) -> Play(g, l) -> Play(g, l + 1)
//!                                                 -> Preview(g + 1)
//!                                                 -> Retrying(g, l) -> Play(g, l)
//!                                                 -> Review -> Intro
//! ```
//!
//! Events that have no transition from the current phase are ignored.

use tracing::{debug, info};

use crate::cards::{deal, CardBoard, CardId};
use crate::config::GameConfig;
use crate::dataset::SentenceDataset;
use crate::error::GameResult;
use crate::model::{prepare_sentences, split_speaker_tag, SentenceGroup, SentenceRecord};
use crate::platform::Platform;
use crate::timer::{Countdown, TickOutcome};
use crate::view::{Element, Node, View, FINAL_SENTENCE, FINAL_STATUS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    WeekSelect,
    /// Final sentences of a freshly entered group are on screen.
    Preview { group: usize },
    Play { group: usize, level: usize },
    /// Countdown ran out; the level reloads when `RetryDue` arrives.
    Retrying { group: usize, level: usize },
    Review,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    DismissIntro,
    SelectWeek(u8),
    DismissPreview,
    ToggleCard(CardId),
    CheckAnswer,
    ResetCards,
    Tick,
    RetryDue,
    FinishReview,
}

/// State of one played week.
#[derive(Clone, Debug)]
pub struct Session {
    pub week: u8,
    pub groups: Vec<SentenceGroup>,
    pub started_at_ms: f64,
    pub board: CardBoard,
    pub countdown: Countdown,
}

impl Session {
    pub fn record(&self, group: usize, level: usize) -> Option<&SentenceRecord> {
        self.groups.get(group).and_then(|g| g.level(level))
    }
}

/// Whole minutes and leftover whole seconds of a millisecond span.
pub fn elapsed_parts(elapsed_ms: f64) -> (u64, u64) {
    let ms = elapsed_ms.max(0.0) as u64;
    (ms / 60_000, (ms % 60_000) / 1000)
}

pub struct GameController<V: View, P: Platform> {
    config: GameConfig,
    dataset: SentenceDataset,
    view: V,
    platform: P,
    phase: Phase,
    session: Option<Session>,
}

impl<V: View, P: Platform> GameController<V, P> {
    pub fn new(config: GameConfig, dataset: SentenceDataset, view: V, platform: P) -> Self {
        Self {
            config,
            dataset,
            view,
            platform,
            phase: Phase::Intro,
            session: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Draw the start screen: intro popup up, week buttons built, everything
    /// else hidden.
    pub fn mount(&mut self) {
        let buttons = (1..=self.config.weeks)
            .map(|week| Node::WeekButton {
                week,
                label: self.config.labels.week_button(week),
            })
            .collect();
        self.view.rebuild_children(Element::WeekButtons, buttons);
        for el in [
            Element::DaySelection,
            Element::GameArea,
            Element::PreviewPopup,
            Element::ReviewPopup,
        ] {
            self.view.hide(el);
        }
        self.view.show(Element::IntroPopup);
        self.phase = Phase::Intro;
    }

    /// Apply one user or timer event. Returns the phase after the event.
    pub fn dispatch(&mut self, event: GameEvent) -> GameResult<Phase> {
        match (self.phase, event) {
            (Phase::Intro, GameEvent::DismissIntro) => {
                self.view.hide(Element::IntroPopup);
                self.view.show(Element::DaySelection);
                self.phase = Phase::WeekSelect;
            }
            (Phase::WeekSelect, GameEvent::SelectWeek(week)) => {
                if let Err(err) = self.select_week(week) {
                    self.view.notify(&self.config.labels.data_not_found);
                    return Err(err);
                }
            }
            (Phase::Preview { group }, GameEvent::DismissPreview) => {
                self.view.hide(Element::PreviewPopup);
                self.enter_level(group, 0);
            }
            (Phase::Play { .. }, GameEvent::ToggleCard(id)) => {
                if let Some(session) = self.session.as_mut() {
                    if session.board.toggle(id).is_some() {
                        self.render_cards();
                    }
                }
            }
            (Phase::Play { group, level }, GameEvent::CheckAnswer) => self.check_answer(group, level),
            (Phase::Play { group, level }, GameEvent::ResetCards) => {
                self.deal_cards(group, level);
                self.render_cards();
            }
            (Phase::Play { group, level }, GameEvent::Tick) => self.tick(group, level),
            (Phase::Retrying { group, level }, GameEvent::RetryDue) => {
                debug!(group, level, "reloading level after timeout");
                self.enter_level(group, level);
            }
            (Phase::Review, GameEvent::FinishReview) => self.restart(),
            (phase, event) => debug!(?phase, ?event, "event ignored"),
        }
        Ok(self.phase)
    }

    fn select_week(&mut self, week: u8) -> GameResult<()> {
        let records = self.dataset.week(week)?;
        let groups = prepare_sentences(records);
        info!(week, groups = groups.len(), "week started");
        self.session = Some(Session {
            week,
            groups,
            started_at_ms: self.platform.now_ms(),
            board: CardBoard::default(),
            countdown: Countdown::new(self.config.level_seconds),
        });
        self.view.hide(Element::DaySelection);
        self.view.show(Element::GameArea);
        self.enter_group(0);
        Ok(())
    }

    /// Preview the next group, or finish the week when none is left.
    fn enter_group(&mut self, group: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.countdown.stop();
        self.platform.cancel_countdown();
        let Some(current) = session.groups.get(group) else {
            self.show_review();
            return;
        };
        let lines = current
            .finals()
            .map(|record| {
                let (speaker, text) = split_speaker_tag(&record.korean);
                Node::PreviewLine {
                    speaker: speaker.map(str::to_string),
                    text: text.to_string(),
                }
            })
            .collect();
        self.view
            .set_text(Element::PreviewTitle, &self.config.labels.preview_title(group + 1));
        self.view.rebuild_children(Element::PreviewKorean, lines);
        self.view.show(Element::PreviewPopup);
        self.phase = Phase::Preview { group };
    }

    fn enter_level(&mut self, group: usize, level: usize) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(record) = session.record(group, level) else {
            return;
        };
        let labels = &self.config.labels;
        let status = if record.is_final {
            &labels.final_status
        } else {
            &labels.training_status
        };
        self.view.set_text(Element::KoreanSentence, &record.korean);
        self.view
            .set_class(Element::KoreanSentence, FINAL_SENTENCE, record.is_final);
        self.view.set_text(Element::SentenceCount, status);
        self.view
            .set_class(Element::SentenceCount, FINAL_STATUS, record.is_final);
        self.view
            .set_text(Element::CurrentDay, &labels.current_week(session.week));
        let percent = group as f64 / session.groups.len() as f64 * 100.0;
        self.view.set_width_percent(Element::Progress, percent);
        debug!(group, level, is_final = record.is_final, "level loaded");

        self.deal_cards(group, level);
        self.render_cards();
        self.start_countdown();
        self.phase = Phase::Play { group, level };
    }

    fn deal_cards(&mut self, group: usize, level: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(record) = session.groups.get(group).and_then(|g| g.level(level)) else {
            return;
        };
        session.board = CardBoard::new(deal(&record.chinese, &mut self.platform));
    }

    fn render_cards(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let available = session.board.available().iter().cloned().map(Node::Card).collect();
        let placed = session.board.placed().iter().cloned().map(Node::Card).collect();
        self.view.rebuild_children(Element::AvailableCards, available);
        self.view.rebuild_children(Element::PlacedCards, placed);
    }

    fn start_countdown(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.countdown.restart();
        self.view
            .set_text(Element::TimeLeft, &session.countdown.remaining().to_string());
        self.platform.start_countdown(self.config.tick_ms);
    }

    fn check_answer(&mut self, group: usize, level: usize) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(current) = session.groups.get(group) else {
            return;
        };
        let Some(record) = current.level(level) else {
            return;
        };
        if !session.board.matches(&record.chinese.hanzi) {
            debug!(group, level, selection = ?session.board.selection(), "answer rejected");
            self.view.shake(Element::PlacedCards, self.config.shake_ms);
            return;
        }
        info!(group, level, "answer accepted");
        if level + 1 < current.len() {
            self.enter_level(group, level + 1);
        } else {
            self.enter_group(group + 1);
        }
    }

    fn tick(&mut self, group: usize, level: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.countdown.tick() {
            TickOutcome::Running(left) => {
                self.view.set_text(Element::TimeLeft, &left.to_string());
            }
            TickOutcome::Expired => {
                info!(group, level, "countdown expired, retrying level");
                self.view.set_text(Element::TimeLeft, "0");
                self.platform.cancel_countdown();
                self.view.shake(Element::GameArea, self.config.shake_ms);
                self.platform.defer(self.config.shake_ms, GameEvent::RetryDue);
                self.phase = Phase::Retrying { group, level };
            }
            TickOutcome::Idle => debug!("tick without a running countdown"),
        }
    }

    fn show_review(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.platform.cancel_countdown();
        self.view.hide(Element::GameArea);
        self.view.set_text(Element::DayNumber, &session.week.to_string());

        let elapsed = self.platform.now_ms() - session.started_at_ms;
        let (minutes, seconds) = elapsed_parts(elapsed);
        self.view
            .set_text(Element::ElapsedTime, &self.config.labels.elapsed(minutes, seconds));

        let sets = session
            .groups
            .iter()
            .map(|group| Node::ReviewSet {
                pairs: group
                    .finals()
                    .map(|r| (r.korean.clone(), r.chinese.joined_hanzi()))
                    .collect(),
            })
            .collect();
        self.view.rebuild_children(Element::ReviewSentences, sets);
        self.view.show(Element::ReviewPopup);
        info!(week = session.week, minutes, seconds, "week completed");
        self.phase = Phase::Review;
    }

    /// Hard reset back to the intro screen.
    fn restart(&mut self) {
        self.platform.cancel_countdown();
        self.session = None;
        self.view.restart();
        self.mount();
    }
}
