//! Hanzi/pinyin cards and the two pools they move between.

use crate::model::ChineseTokens;
use crate::rng::RandomSource;

/// Handle for one card within a deal (its dealt position), so duplicate hanzi
/// stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub hanzi: String,
    pub pinyin: String,
}

/// Fisher–Yates over two parallel slices: walk `i` from the last index down to
/// 1 and swap both slices at `i` and a uniform `j` in `0..=i`.
pub fn shuffle_in_lockstep<A, B, R: RandomSource + ?Sized>(a: &mut [A], b: &mut [B], rng: &mut R) {
    debug_assert_eq!(a.len(), b.len());
    let len = a.len().min(b.len());
    for i in (1..len).rev() {
        let j = rng.below(i + 1);
        a.swap(i, j);
        b.swap(i, j);
    }
}

/// Build the cards for one sentence in shuffled display order.
pub fn deal<R: RandomSource + ?Sized>(tokens: &ChineseTokens, rng: &mut R) -> Vec<Card> {
    let mut hanzi = tokens.hanzi.clone();
    let mut pinyin = tokens.pinyin.clone();
    shuffle_in_lockstep(&mut hanzi, &mut pinyin, rng);
    hanzi
        .into_iter()
        .zip(pinyin)
        .enumerate()
        .map(|(pos, (hanzi, pinyin))| Card {
            id: CardId(pos),
            hanzi,
            pinyin,
        })
        .collect()
}

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Available,
    Placed,
}

/// Available/placed partition of one deal plus the player's hanzi selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardBoard {
    available: Vec<Card>,
    placed: Vec<Card>,
    selection: Vec<String>,
}

impl CardBoard {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            available: cards,
            placed: Vec::new(),
            selection: Vec::new(),
        }
    }

    pub fn available(&self) -> &[Card] {
        &self.available
    }

    pub fn placed(&self) -> &[Card] {
        &self.placed
    }

    /// Hanzi chosen so far, in placement order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Move a card to the other pool. Placing appends to the end of the placed
    /// row and to the selection; returning removes the first selection entry
    /// with the same hanzi, which need not be the one this card added.
    pub fn toggle(&mut self, id: CardId) -> Option<Pool> {
        if let Some(pos) = self.available.iter().position(|c| c.id == id) {
            let card = self.available.remove(pos);
            self.selection.push(card.hanzi.clone());
            self.placed.push(card);
            return Some(Pool::Placed);
        }
        if let Some(pos) = self.placed.iter().position(|c| c.id == id) {
            let card = self.placed.remove(pos);
            if let Some(sel) = self.selection.iter().position(|h| *h == card.hanzi) {
                self.selection.remove(sel);
            }
            self.available.push(card);
            return Some(Pool::Available);
        }
        None
    }

    /// Exact ordered comparison against the expected tokens.
    pub fn matches(&self, expected: &[String]) -> bool {
        self.selection == expected
    }
}
