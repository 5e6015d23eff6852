// Integration tests (native) for the `sentence-cards` crate.
// The controller is driven headlessly through RecordingView and
// ManualPlatform; nothing here touches wasm or browser APIs.

use sentence_cards::controller::{GameController, GameEvent, Phase};
use sentence_cards::model::{ChineseTokens, SentenceId, SentenceRecord};
use sentence_cards::testing::{ManualPlatform, RecordingView};
use sentence_cards::view::{Element, Node};
use sentence_cards::{GameConfig, GameError, SentenceDataset};

type Game = GameController<RecordingView, ManualPlatform>;

fn sentence(id: u64, level: u32, is_final: bool, korean: &str, hanzi: &[&str]) -> SentenceRecord {
    SentenceRecord {
        id: SentenceId::Num(id),
        level,
        korean: korean.to_string(),
        is_final,
        chinese: ChineseTokens {
            hanzi: hanzi.iter().map(|h| h.to_string()).collect(),
            pinyin: hanzi.iter().map(|h| format!("{h}-py")).collect(),
        },
    }
}

fn love_week() -> SentenceDataset {
    SentenceDataset::new().with_week(
        1,
        vec![
            sentence(1, 0, false, "사랑해 (연습)", &["我", "爱", "你"]),
            sentence(1, 1, true, "A: 사랑해", &["我", "爱", "你"]),
        ],
    )
}

fn start(dataset: SentenceDataset, seed: u64) -> Game {
    let mut game = GameController::new(
        GameConfig::default(),
        dataset,
        RecordingView::new(),
        ManualPlatform::seeded(seed),
    );
    game.mount();
    game.dispatch(GameEvent::DismissIntro).unwrap();
    game
}

fn place(game: &mut Game, hanzi: &str) {
    let id = game
        .session()
        .unwrap()
        .board
        .available()
        .iter()
        .find(|c| c.hanzi == hanzi)
        .map(|c| c.id)
        .unwrap_or_else(|| panic!("no available card {hanzi}"));
    game.dispatch(GameEvent::ToggleCard(id)).unwrap();
}

fn place_all(game: &mut Game, hanzi: &[&str]) {
    for h in hanzi {
        place(game, h);
    }
}

fn current_answer(game: &Game) -> Vec<String> {
    let Phase::Play { group, level } = game.phase() else {
        panic!("not playing: {:?}", game.phase());
    };
    game.session()
        .unwrap()
        .record(group, level)
        .unwrap()
        .chinese
        .hanzi
        .clone()
}

fn solve_current_level(game: &mut Game) -> Phase {
    let answer = current_answer(game);
    for h in &answer {
        place(game, h);
    }
    game.dispatch(GameEvent::CheckAnswer).unwrap()
}

#[test]
fn one_group_two_levels_end_to_end() {
    let mut game = start(love_week(), 1);
    assert_eq!(game.dispatch(GameEvent::SelectWeek(1)), Ok(Phase::Preview { group: 0 }));
    assert_eq!(
        game.view().children(Element::PreviewKorean),
        [Node::PreviewLine {
            speaker: Some("A:".into()),
            text: " 사랑해".into(),
        }]
    );
    assert_eq!(game.view().text(Element::PreviewTitle), Some("완성문장 1"));
    assert!(!game.view().is_hidden(Element::PreviewPopup));

    assert_eq!(game.dispatch(GameEvent::DismissPreview), Ok(Phase::Play { group: 0, level: 0 }));
    assert!(game.view().is_hidden(Element::PreviewPopup));
    assert_eq!(game.view().text(Element::KoreanSentence), Some("사랑해 (연습)"));

    place_all(&mut game, &["我", "爱", "你"]);
    assert_eq!(game.dispatch(GameEvent::CheckAnswer), Ok(Phase::Play { group: 0, level: 1 }));
    assert!(game.view().has_class(Element::KoreanSentence, "final-sentence"));
    assert_eq!(game.view().text(Element::SentenceCount), Some("🔥 완성 문장 도전!"));

    place_all(&mut game, &["爱", "我", "你"]);
    assert_eq!(game.dispatch(GameEvent::CheckAnswer), Ok(Phase::Play { group: 0, level: 1 }));
    assert_eq!(game.view().shakes, vec![(Element::PlacedCards, 500)]);
    assert_eq!(game.session().unwrap().board.selection(), ["爱", "我", "你"]);

    game.dispatch(GameEvent::ResetCards).unwrap();
    assert!(game.session().unwrap().board.selection().is_empty());
    place_all(&mut game, &["我", "爱", "你"]);
    game.platform_mut().advance(83_400.0);
    assert_eq!(game.dispatch(GameEvent::CheckAnswer), Ok(Phase::Review));

    let view = game.view();
    assert_eq!(view.text(Element::ElapsedTime), Some("⏱️ 이번 주차 완료 시간: 1분 23초"));
    assert_eq!(view.text(Element::DayNumber), Some("1"));
    assert_eq!(
        view.children(Element::ReviewSentences),
        [Node::ReviewSet {
            pairs: vec![("A: 사랑해".into(), "我爱你".into())],
        }]
    );
    assert!(view.is_hidden(Element::GameArea));
    assert!(!view.is_hidden(Element::ReviewPopup));
    assert!(game.platform().countdown().is_none());
}

#[test]
fn finish_review_restarts_from_intro() {
    let mut game = start(love_week(), 2);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    game.dispatch(GameEvent::DismissPreview).unwrap();
    solve_current_level(&mut game);
    assert_eq!(solve_current_level(&mut game), Phase::Review);

    assert_eq!(game.dispatch(GameEvent::FinishReview), Ok(Phase::Intro));
    assert_eq!(game.view().restarts, 1);
    assert!(game.session().is_none());
    assert!(!game.view().is_hidden(Element::IntroPopup));
    assert!(game.view().is_hidden(Element::ReviewPopup));
}

#[test]
fn missing_week_notifies_without_starting() {
    let mut game = start(love_week(), 3);
    assert_eq!(
        game.dispatch(GameEvent::SelectWeek(4)),
        Err(GameError::DataNotFound { week: 4 })
    );
    assert_eq!(game.phase(), Phase::WeekSelect);
    assert!(game.session().is_none());
    assert_eq!(game.view().notifications, vec!["해당 주차의 데이터가 없습니다."]);
    assert!(!game.view().is_hidden(Element::DaySelection));

    // The week list is still usable afterwards.
    assert_eq!(game.dispatch(GameEvent::SelectWeek(1)), Ok(Phase::Preview { group: 0 }));
}

#[test]
fn untouched_level_reloads_after_thirty_ticks() {
    let mut game = start(love_week(), 4);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    game.dispatch(GameEvent::DismissPreview).unwrap();
    let first_deal = game.session().unwrap().board.available().to_vec();

    for _ in 0..29 {
        assert_eq!(game.dispatch(GameEvent::Tick), Ok(Phase::Play { group: 0, level: 0 }));
    }
    assert_eq!(game.view().text(Element::TimeLeft), Some("1"));
    assert_eq!(game.dispatch(GameEvent::Tick), Ok(Phase::Retrying { group: 0, level: 0 }));
    assert_eq!(game.view().text(Element::TimeLeft), Some("0"));
    assert_eq!(game.view().shakes, vec![(Element::GameArea, 500)]);
    assert!(game.platform().countdown().is_none());
    let deferred = game.platform_mut().take_deferred();
    assert_eq!(deferred, vec![(500, GameEvent::RetryDue)]);

    // Play input is ignored while the shake plays out.
    assert_eq!(game.dispatch(GameEvent::CheckAnswer), Ok(Phase::Retrying { group: 0, level: 0 }));
    assert_eq!(game.dispatch(GameEvent::Tick), Ok(Phase::Retrying { group: 0, level: 0 }));

    assert_eq!(game.dispatch(GameEvent::RetryDue), Ok(Phase::Play { group: 0, level: 0 }));
    assert_eq!(game.view().text(Element::TimeLeft), Some("30"));
    assert_eq!(game.platform().countdown(), Some(1000));
    let mut redealt: Vec<String> = game
        .session()
        .unwrap()
        .board
        .available()
        .iter()
        .map(|c| c.hanzi.clone())
        .collect();
    let mut dealt: Vec<String> = first_deal.iter().map(|c| c.hanzi.clone()).collect();
    redealt.sort();
    dealt.sort();
    assert_eq!(redealt, dealt);
}

#[test]
fn correct_answer_before_timeout_restarts_the_countdown() {
    let mut game = start(love_week(), 5);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    game.dispatch(GameEvent::DismissPreview).unwrap();
    let starts = game.platform().countdown_starts;

    for _ in 0..20 {
        game.dispatch(GameEvent::Tick).unwrap();
    }
    assert_eq!(solve_current_level(&mut game), Phase::Play { group: 0, level: 1 });
    assert_eq!(game.platform().countdown_starts, starts + 1);
    assert_eq!(game.view().text(Element::TimeLeft), Some("30"));

    // Ten more ticks would have expired the old countdown.
    for _ in 0..29 {
        assert_eq!(game.dispatch(GameEvent::Tick), Ok(Phase::Play { group: 0, level: 1 }));
    }
    assert!(game.platform_mut().take_deferred().is_empty());
    assert_eq!(game.dispatch(GameEvent::Tick), Ok(Phase::Retrying { group: 0, level: 1 }));
}

#[test]
fn wrong_orders_never_advance() {
    let wrong: [&[&str]; 4] = [
        &["爱", "我", "你"],
        &["我", "爱"],
        &["我", "你", "爱"],
        &["你"],
    ];
    for (seed, attempt) in wrong.iter().enumerate() {
        let mut game = start(love_week(), seed as u64 + 10);
        game.dispatch(GameEvent::SelectWeek(1)).unwrap();
        game.dispatch(GameEvent::DismissPreview).unwrap();
        place_all(&mut game, attempt);
        assert_eq!(game.dispatch(GameEvent::CheckAnswer), Ok(Phase::Play { group: 0, level: 0 }));
        assert_eq!(game.view().shakes.len(), 1);
        assert_eq!(game.session().unwrap().board.selection().len(), attempt.len());
    }
}

#[test]
fn manual_reset_redeals_without_touching_the_timer() {
    let mut game = start(love_week(), 6);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    game.dispatch(GameEvent::DismissPreview).unwrap();
    for _ in 0..5 {
        game.dispatch(GameEvent::Tick).unwrap();
    }
    place_all(&mut game, &["我", "爱"]);
    let starts = game.platform().countdown_starts;

    assert_eq!(game.dispatch(GameEvent::ResetCards), Ok(Phase::Play { group: 0, level: 0 }));
    let board = &game.session().unwrap().board;
    assert!(board.selection().is_empty());
    assert!(board.placed().is_empty());
    assert_eq!(board.available().len(), 3);
    assert_eq!(game.view().text(Element::TimeLeft), Some("25"));
    assert_eq!(game.platform().countdown_starts, starts);
    assert!(game.view().children(Element::PlacedCards).is_empty());
}

#[test]
fn placed_card_click_returns_it() {
    let mut game = start(love_week(), 7);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    game.dispatch(GameEvent::DismissPreview).unwrap();
    place(&mut game, "爱");
    assert_eq!(game.view().children(Element::PlacedCards).len(), 1);
    assert_eq!(game.view().children(Element::AvailableCards).len(), 2);

    let id = game.session().unwrap().board.placed()[0].id;
    game.dispatch(GameEvent::ToggleCard(id)).unwrap();
    assert!(game.session().unwrap().board.selection().is_empty());
    assert_eq!(game.view().children(Element::AvailableCards).len(), 3);
}

#[test]
fn builtin_week_plays_through_with_previews_between_groups() {
    let mut game = start(sentence_cards::weeks::builtin_dataset().clone(), 8);
    assert_eq!(game.dispatch(GameEvent::SelectWeek(1)), Ok(Phase::Preview { group: 0 }));
    let groups = game.session().unwrap().groups.len();
    assert_eq!(groups, 3);

    for group in 0..groups {
        assert_eq!(game.phase(), Phase::Preview { group });
        assert!(game.platform().countdown().is_none());
        game.dispatch(GameEvent::DismissPreview).unwrap();
        let expected = group as f64 / groups as f64 * 100.0;
        assert_eq!(game.view().width(Element::Progress), Some(expected));
        let levels = game.session().unwrap().groups[group].len();
        for level in 0..levels {
            assert_eq!(game.phase(), Phase::Play { group, level });
            solve_current_level(&mut game);
        }
    }
    assert_eq!(game.phase(), Phase::Review);
    assert_eq!(game.view().children(Element::ReviewSentences).len(), 3);
    assert!(game.view().shakes.is_empty());
}

#[test]
fn duplicate_tokens_still_check_by_value() {
    // Week 1 group 103 final line uses 是 twice.
    let mut game = start(sentence_cards::weeks::builtin_dataset().clone(), 9);
    game.dispatch(GameEvent::SelectWeek(1)).unwrap();
    for _ in 0..2 {
        game.dispatch(GameEvent::DismissPreview).unwrap();
        while matches!(game.phase(), Phase::Play { .. }) {
            solve_current_level(&mut game);
        }
    }
    game.dispatch(GameEvent::DismissPreview).unwrap();
    solve_current_level(&mut game);
    assert_eq!(game.phase(), Phase::Play { group: 2, level: 1 });

    // Place both 是 cards, then pull the second one back out.
    let answer = current_answer(&game);
    assert_eq!(answer.iter().filter(|h| *h == "是").count(), 2);
    place(&mut game, "是");
    place(&mut game, "是");
    let second = game.session().unwrap().board.placed()[1].id;
    game.dispatch(GameEvent::ToggleCard(second)).unwrap();
    assert_eq!(game.session().unwrap().board.selection(), ["是"]);

    game.dispatch(GameEvent::ResetCards).unwrap();
    assert_eq!(solve_current_level(&mut game), Phase::Review);
}
