//! Browser glue: DOM-backed view, window timers, and the page-lifetime
//! controller instance.
//!
//! The controller lives in a `thread_local!` cell; every DOM callback borrows
//! it, dispatches one event and returns, so handlers never overlap.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window, window};

use crate::config::GameConfig;
use crate::controller::{GameController, GameEvent};
use crate::dataset::SentenceDataset;
use crate::error::{GameError, GameResult};
use crate::platform::Platform;
use crate::rng::{RandomSource, ShuffleRng};
use crate::view::{Control, Element, Node, SHAKE, View};

type WebGame = GameController<DomView, BrowserPlatform>;
type ClickHandler = Closure<dyn FnMut()>;

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

/// Route one event into the page controller.
pub fn dispatch(event: GameEvent) {
    GAME.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!(?event, "controller busy, event dropped");
            return;
        };
        if let Some(game) = slot.as_mut() {
            if let Err(err) = game.dispatch(event) {
                warn!(%err, ?event, "event rejected");
            }
        }
    });
}

/// Look up the page, build the controller and bind the fixed buttons.
pub fn mount(config: GameConfig, dataset: SentenceDataset) -> GameResult<()> {
    let win = window().ok_or_else(|| GameError::Js("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| GameError::Js("no document".into()))?;

    let view = DomView::new(doc.clone())?;
    let platform = BrowserPlatform::new(win);
    let mut game = GameController::new(config, dataset, view, platform);
    game.mount();
    GAME.with(|cell| *cell.borrow_mut() = Some(game));

    for control in Control::ALL {
        let el = doc
            .get_element_by_id(control.dom_id())
            .ok_or_else(|| GameError::MissingElement(control.dom_id().into()))?;
        let event = control.event();
        let closure = Closure::wrap(Box::new(move || dispatch(event)) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Fixed buttons live as long as the page.
        closure.forget();
    }
    Ok(())
}

// --- View --------------------------------------------------------------------

pub struct DomView {
    document: Document,
    elements: HashMap<Element, web_sys::Element>,
    handlers: HashMap<Element, Vec<ClickHandler>>,
    // Previous generation per element; the click that triggered a rebuild may
    // still be running its handler.
    retired: HashMap<Element, Vec<ClickHandler>>,
}

impl DomView {
    pub fn new(document: Document) -> GameResult<Self> {
        let mut elements = HashMap::new();
        for el in Element::ALL {
            let node = document
                .query_selector(el.selector())?
                .ok_or_else(|| GameError::MissingElement(el.selector().into()))?;
            elements.insert(el, node);
        }
        Ok(Self {
            document,
            elements,
            handlers: HashMap::new(),
            retired: HashMap::new(),
        })
    }

    fn el(&self, el: Element) -> &web_sys::Element {
        // Every Element is resolved in `new`.
        &self.elements[&el]
    }

    fn create(&self, tag: &str, class: &str, text: Option<&str>) -> GameResult<web_sys::Element> {
        let node = self.document.create_element(tag)?;
        if !class.is_empty() {
            node.set_class_name(class);
        }
        if text.is_some() {
            node.set_text_content(text);
        }
        Ok(node)
    }

    fn render_node(&self, node: &Node) -> GameResult<web_sys::Element> {
        match node {
            Node::WeekButton { label, .. } => self.create("button", "day-button", Some(label.as_str())),
            Node::Card(card) => {
                let div = self.create("div", "card", None)?;
                let hanzi = self.create("span", "hanzi", Some(card.hanzi.as_str()))?;
                let pinyin = self.create("span", "pinyin", Some(card.pinyin.as_str()))?;
                div.append_child(&hanzi)?;
                div.append_child(&pinyin)?;
                Ok(div)
            }
            Node::PreviewLine { speaker, text } => {
                let line = self.create("div", "preview-line", None)?;
                if let Some(tag) = speaker {
                    let strong = self.create("strong", "speaker", Some(tag.as_str()))?;
                    line.append_child(&strong)?;
                }
                let body = self.create("span", "", Some(text.as_str()))?;
                line.append_child(&body)?;
                Ok(line)
            }
            Node::ReviewSet { pairs } => {
                let set = self.create("div", "review-set", None)?;
                for (korean, hanzi) in pairs {
                    let p = self.create("p", "", None)?;
                    let strong = self.create("strong", "", Some(korean.as_str()))?;
                    let br = self.create("br", "", None)?;
                    let span = self.create("span", "review-hanzi", Some(hanzi.as_str()))?;
                    p.append_child(&strong)?;
                    p.append_child(&br)?;
                    p.append_child(&span)?;
                    set.append_child(&p)?;
                }
                Ok(set)
            }
        }
    }

    fn try_rebuild(&mut self, el: Element, children: Vec<Node>) -> GameResult<()> {
        let old = self.handlers.remove(&el).unwrap_or_default();
        self.retired.insert(el, old);
        let parent = self.el(el).clone();
        parent.set_inner_html("");
        let mut handlers = Vec::new();
        for node in &children {
            let child = self.render_node(node)?;
            if let Some(event) = node.on_click() {
                let closure = Closure::wrap(Box::new(move || dispatch(event)) as Box<dyn FnMut()>);
                child.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
                handlers.push(closure);
            }
            parent.append_child(&child)?;
        }
        self.handlers.insert(el, handlers);
        Ok(())
    }
}

impl View for DomView {
    fn set_text(&mut self, el: Element, text: &str) {
        self.el(el).set_text_content(Some(text));
    }

    fn set_class(&mut self, el: Element, class: &str, on: bool) {
        if let Err(err) = self.el(el).class_list().toggle_with_force(class, on) {
            warn!(?err, selector = el.selector(), class, "class toggle failed");
        }
    }

    fn set_width_percent(&mut self, el: Element, percent: f64) {
        let Some(html) = self.el(el).dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property("width", &format!("{percent}%")) {
            warn!(?err, selector = el.selector(), "width update failed");
        }
    }

    fn rebuild_children(&mut self, el: Element, children: Vec<Node>) {
        if let Err(err) = self.try_rebuild(el, children) {
            warn!(%err, selector = el.selector(), "rebuild failed");
        }
    }

    fn shake(&mut self, el: Element, duration_ms: u32) {
        let target = self.el(el).clone();
        if target.class_list().add_1(SHAKE).is_err() {
            return;
        }
        let settle = Closure::once_into_js(move || {
            let _ = target.class_list().remove_1(SHAKE);
        });
        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                settle.unchecked_ref(),
                duration_ms as i32,
            );
        }
    }

    fn notify(&mut self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn restart(&mut self) {
        if let Some(win) = window() {
            if let Err(err) = win.location().reload() {
                warn!(?err, "page reload failed");
            }
        }
    }
}

// --- Platform ----------------------------------------------------------------

pub struct BrowserPlatform {
    window: Window,
    rng: ShuffleRng,
    interval: Option<(i32, ClickHandler)>,
    // Interval callback cancelled from inside its own invocation.
    retired: Option<ClickHandler>,
}

impl BrowserPlatform {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            rng: ShuffleRng::from_entropy(),
            interval: None,
            retired: None,
        }
    }
}

impl RandomSource for BrowserPlatform {
    fn below(&mut self, bound: usize) -> usize {
        self.rng.below(bound)
    }
}

impl Platform for BrowserPlatform {
    fn now_ms(&self) -> f64 {
        crate::performance_now()
    }

    fn start_countdown(&mut self, period_ms: u32) {
        self.cancel_countdown();
        let closure = Closure::wrap(Box::new(|| dispatch(GameEvent::Tick)) as Box<dyn FnMut()>);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            ) {
            Ok(handle) => self.interval = Some((handle, closure)),
            Err(err) => warn!(?err, "countdown interval not started"),
        }
    }

    fn cancel_countdown(&mut self) {
        if let Some((handle, closure)) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
            self.retired = Some(closure);
        }
    }

    fn defer(&mut self, delay_ms: u32, event: GameEvent) {
        let callback = Closure::once_into_js(move || dispatch(event));
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms as i32,
            )
        {
            warn!(?err, ?event, "deferred event not scheduled");
        }
    }
}
