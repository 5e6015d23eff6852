//! Headless view and platform for driving the controller without a browser.

use std::collections::{BTreeSet, HashMap};

use crate::controller::GameEvent;
use crate::platform::Platform;
use crate::rng::{RandomSource, ShuffleRng};
use crate::view::{Element, Node, View, HIDDEN};

/// Keeps the last value written to every element.
#[derive(Debug, Default)]
pub struct RecordingView {
    texts: HashMap<Element, String>,
    classes: HashMap<Element, BTreeSet<String>>,
    widths: HashMap<Element, f64>,
    children: HashMap<Element, Vec<Node>>,
    pub shakes: Vec<(Element, u32)>,
    pub notifications: Vec<String>,
    pub restarts: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, el: Element) -> Option<&str> {
        self.texts.get(&el).map(String::as_str)
    }

    pub fn has_class(&self, el: Element, class: &str) -> bool {
        self.classes.get(&el).is_some_and(|c| c.contains(class))
    }

    pub fn is_hidden(&self, el: Element) -> bool {
        self.has_class(el, HIDDEN)
    }

    pub fn width(&self, el: Element) -> Option<f64> {
        self.widths.get(&el).copied()
    }

    pub fn children(&self, el: Element) -> &[Node] {
        self.children.get(&el).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl View for RecordingView {
    fn set_text(&mut self, el: Element, text: &str) {
        self.texts.insert(el, text.to_string());
    }

    fn set_class(&mut self, el: Element, class: &str, on: bool) {
        let set = self.classes.entry(el).or_default();
        if on {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn set_width_percent(&mut self, el: Element, percent: f64) {
        self.widths.insert(el, percent);
    }

    fn rebuild_children(&mut self, el: Element, children: Vec<Node>) {
        self.children.insert(el, children);
    }

    fn shake(&mut self, el: Element, duration_ms: u32) {
        self.shakes.push((el, duration_ms));
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn restart(&mut self) {
        self.restarts += 1;
        self.texts.clear();
        self.classes.clear();
        self.widths.clear();
        self.children.clear();
    }
}

/// Manually advanced clock with a single countdown slot and a queue of
/// deferred events. Nothing fires on its own; tests deliver ticks and
/// deferred events through the controller.
#[derive(Debug)]
pub struct ManualPlatform {
    now_ms: f64,
    rng: ShuffleRng,
    countdown_period: Option<u32>,
    pub countdown_starts: usize,
    deferred: Vec<(u32, GameEvent)>,
}

impl ManualPlatform {
    pub fn seeded(seed: u64) -> Self {
        Self {
            now_ms: 0.0,
            rng: ShuffleRng::seeded(seed),
            countdown_period: None,
            countdown_starts: 0,
            deferred: Vec::new(),
        }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Period of the active countdown, if one is running.
    pub fn countdown(&self) -> Option<u32> {
        self.countdown_period
    }

    pub fn take_deferred(&mut self) -> Vec<(u32, GameEvent)> {
        std::mem::take(&mut self.deferred)
    }
}

impl RandomSource for ManualPlatform {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.below(bound)
    }
}

impl Platform for ManualPlatform {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn start_countdown(&mut self, period_ms: u32) {
        self.countdown_period = Some(period_ms);
        self.countdown_starts += 1;
    }

    fn cancel_countdown(&mut self) {
        self.countdown_period = None;
    }

    fn defer(&mut self, delay_ms: u32, event: GameEvent) {
        self.deferred.push((delay_ms, event));
    }
}
