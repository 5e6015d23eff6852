//! Render seam between the controller and whatever draws the page.
//!
//! The controller never touches the DOM directly. It names page regions with
//! [`Element`], describes generated children with [`Node`], and leaves the
//! mechanics to a [`View`] implementation: `crate::web::DomView` in the
//! browser, `crate::testing::RecordingView` in tests.

use crate::cards::Card;
use crate::controller::GameEvent;

/// Class toggled to show and hide screens and popups.
pub const HIDDEN: &str = "hidden";
pub const SHAKE: &str = "shake";
pub const FINAL_SENTENCE: &str = "final-sentence";
pub const FINAL_STATUS: &str = "final-status";

/// Page regions the controller writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    IntroPopup,
    DaySelection,
    WeekButtons,
    GameArea,
    CurrentDay,
    KoreanSentence,
    SentenceCount,
    TimeLeft,
    Progress,
    AvailableCards,
    PlacedCards,
    PreviewPopup,
    PreviewTitle,
    PreviewKorean,
    ReviewPopup,
    DayNumber,
    ElapsedTime,
    ReviewSentences,
}

impl Element {
    pub const ALL: [Element; 18] = [
        Element::IntroPopup,
        Element::DaySelection,
        Element::WeekButtons,
        Element::GameArea,
        Element::CurrentDay,
        Element::KoreanSentence,
        Element::SentenceCount,
        Element::TimeLeft,
        Element::Progress,
        Element::AvailableCards,
        Element::PlacedCards,
        Element::PreviewPopup,
        Element::PreviewTitle,
        Element::PreviewKorean,
        Element::ReviewPopup,
        Element::DayNumber,
        Element::ElapsedTime,
        Element::ReviewSentences,
    ];

    /// CSS selector on the game page.
    pub fn selector(self) -> &'static str {
        match self {
            Element::IntroPopup => "#intro-popup",
            Element::DaySelection => "#day-selection",
            Element::WeekButtons => ".day-buttons",
            Element::GameArea => "#game-area",
            Element::CurrentDay => "#current-day",
            Element::KoreanSentence => "#korean-sentence",
            Element::SentenceCount => "#sentence-count",
            Element::TimeLeft => "#time-left",
            Element::Progress => ".progress",
            Element::AvailableCards => "#available-cards",
            Element::PlacedCards => "#placed-cards",
            Element::PreviewPopup => "#preview-popup",
            Element::PreviewTitle => "#preview-title",
            Element::PreviewKorean => "#preview-korean-area",
            Element::ReviewPopup => "#review-popup",
            Element::DayNumber => "#day-number",
            Element::ElapsedTime => "#elapsed-time",
            Element::ReviewSentences => "#review-sentences",
        }
    }
}

/// Fixed buttons on the page and the event each one raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StartGame,
    ClosePreview,
    CheckAnswer,
    ResetCards,
    FinishReview,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::StartGame,
        Control::ClosePreview,
        Control::CheckAnswer,
        Control::ResetCards,
        Control::FinishReview,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Control::StartGame => "start-game",
            Control::ClosePreview => "close-preview",
            Control::CheckAnswer => "check-button",
            Control::ResetCards => "reset-button",
            Control::FinishReview => "finish-review",
        }
    }

    pub fn event(self) -> GameEvent {
        match self {
            Control::StartGame => GameEvent::DismissIntro,
            Control::ClosePreview => GameEvent::DismissPreview,
            Control::CheckAnswer => GameEvent::CheckAnswer,
            Control::ResetCards => GameEvent::ResetCards,
            Control::FinishReview => GameEvent::FinishReview,
        }
    }
}

/// Generated child of a container element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    WeekButton { week: u8, label: String },
    Card(Card),
    /// One preview line; `speaker` is the emphasised `A:`/`B:` prefix.
    PreviewLine { speaker: Option<String>, text: String },
    /// Final sentences of one group as (korean, joined hanzi) pairs.
    ReviewSet { pairs: Vec<(String, String)> },
}

impl Node {
    /// Event raised when the node is clicked, if it is interactive.
    pub fn on_click(&self) -> Option<GameEvent> {
        match self {
            Node::WeekButton { week, .. } => Some(GameEvent::SelectWeek(*week)),
            Node::Card(card) => Some(GameEvent::ToggleCard(card.id)),
            Node::PreviewLine { .. } | Node::ReviewSet { .. } => None,
        }
    }
}

pub trait View {
    fn set_text(&mut self, el: Element, text: &str);

    fn set_class(&mut self, el: Element, class: &str, on: bool);

    fn set_width_percent(&mut self, el: Element, percent: f64);

    /// Replace all children of `el`, wiring each node's click event.
    fn rebuild_children(&mut self, el: Element, children: Vec<Node>);

    /// Apply the transient shake class for `duration_ms`.
    fn shake(&mut self, el: Element, duration_ms: u32);

    /// Blocking user notification.
    fn notify(&mut self, message: &str);

    /// Throw away all page state (full reload in the browser).
    fn restart(&mut self);

    fn show(&mut self, el: Element) {
        self.set_class(el, HIDDEN, false);
    }

    fn hide(&mut self, el: Element) {
        self.set_class(el, HIDDEN, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn selectors_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for el in Element::ALL {
            assert!(seen.insert(el.selector()), "duplicate selector {}", el.selector());
        }
    }

    #[test]
    fn only_buttons_and_cards_are_clickable() {
        let card = Card {
            id: CardId(2),
            hanzi: "我".into(),
            pinyin: "wǒ".into(),
        };
        assert_eq!(Node::Card(card).on_click(), Some(GameEvent::ToggleCard(CardId(2))));
        let button = Node::WeekButton {
            week: 3,
            label: "Week 3".into(),
        };
        assert_eq!(button.on_click(), Some(GameEvent::SelectWeek(3)));
        let line = Node::PreviewLine {
            speaker: None,
            text: "안녕".into(),
        };
        assert_eq!(line.on_click(), None);
    }

    #[test]
    fn controls_map_to_their_events() {
        assert_eq!(Control::StartGame.event(), GameEvent::DismissIntro);
        assert_eq!(Control::FinishReview.dom_id(), "finish-review");
    }
}
