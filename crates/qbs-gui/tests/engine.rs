#![allow(missing_docs)]

//! Tests for the filter-resolution and selection-state engine, driven by
//! feeding messages through the handlers exactly as `App::update` does.
//! No display and no network: fetch tasks are created and dropped, and
//! completions are synthesized with chosen generations and payloads.

use iced::{Rectangle, Size};

use qbs_gui::error::GuiError;
use qbs_gui::handler::loaders::{
    handle_filters_region_measured, handle_metadata_loaded, handle_questions_loaded,
    handle_viewport_resized,
};
use qbs_gui::handler::{BrowseHandler, MessageHandler, submit_filters};
use qbs_gui::message::BrowseMessage;
use qbs_gui::state::{AppState, LoadPhase, Settings};
use qbs_model::{
    Chapter, Class, FilterSet, Metadata, Question, QuestionLevel, QuestionType, Subject,
};

fn test_state() -> AppState {
    AppState::with_settings(Settings {
        api_base_url: "http://localhost:9/api".to_string(),
    })
}

/// One class → one subject → one chapter → zero topics, one level, one type.
fn leaf_metadata() -> Metadata {
    Metadata {
        classes: vec![Class {
            id: 1,
            name: Some("Class 9".to_string()),
            subjects: vec![Subject {
                id: 11,
                name: None,
                chapters: vec![Chapter {
                    id: 111,
                    name: None,
                    topics: vec![],
                }],
            }],
        }],
        question_levels: vec![QuestionLevel { id: 5, name: None }],
        question_types: vec![QuestionType { id: 7, name: None }],
    }
}

fn question(id: u64) -> Question {
    Question {
        id,
        content: format!("question {id}"),
        solution_html: None,
    }
}

fn user_filters() -> FilterSet {
    FilterSet {
        class_id: 2,
        subject_id: 22,
        chapter_id: 222,
        topic_id: Some(2222),
        question_level_id: 9,
        question_type_id: 8,
        remove_used_questions: false,
    }
}

// =============================================================================
// DEFAULTS ADOPTION
// =============================================================================

#[test]
fn metadata_arrival_adopts_defaults_and_issues_exactly_one_fetch() {
    let mut state = test_state();
    let _task = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));

    assert_eq!(
        state.filters,
        Some(FilterSet {
            class_id: 1,
            subject_id: 11,
            chapter_id: 111,
            topic_id: None,
            question_level_id: 5,
            question_type_id: 7,
            remove_used_questions: true,
        })
    );
    assert_eq!(state.questions.generation(), 1);
    assert_eq!(state.questions.phase(), LoadPhase::Loading);

    // The draft mirrors the committed defaults.
    assert_eq!(state.draft.class_id, Some(1));
    assert_eq!(state.draft.topic_id, None);
}

#[test]
fn metadata_delivered_after_the_loader_settled_is_discarded() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));

    let mut late = leaf_metadata();
    late.classes[0].id = 42;
    let _ = handle_metadata_loaded(&mut state, Ok(late));

    // Neither the snapshot nor the adopted filters moved.
    assert_eq!(state.metadata.metadata().map(|m| m.classes[0].id), Some(1));
    assert_eq!(state.filters.as_ref().map(|f| f.class_id), Some(1));
    assert_eq!(state.questions.generation(), 1);
}

#[test]
fn user_submission_preempts_defaults_adoption() {
    let mut state = test_state();

    // The user applies filters before the metadata fetch resolves.
    let _ = submit_filters(&mut state, user_filters());
    assert_eq!(state.questions.generation(), 1);

    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));

    // First write wins: the defaults never replace the user's choice,
    // and no second fetch is started.
    assert_eq!(state.filters, Some(user_filters()));
    assert_eq!(state.questions.generation(), 1);
}

#[test]
fn sparse_taxonomy_yields_no_filters_and_no_fetch() {
    let mut state = test_state();
    let mut metadata = leaf_metadata();
    metadata.classes[0].subjects.clear();

    let _ = handle_metadata_loaded(&mut state, Ok(metadata));

    assert_eq!(state.filters, None);
    assert_eq!(state.questions.phase(), LoadPhase::Idle);
    assert_eq!(state.questions.generation(), 0);
}

#[test]
fn metadata_failure_is_surfaced_without_touching_the_question_axis() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Err(GuiError::metadata_load("offline")));

    assert!(state.metadata.metadata().is_none());
    assert_eq!(state.filters, None);
    assert_eq!(state.questions.phase(), LoadPhase::Idle);
}

// =============================================================================
// STALE-RESPONSE SUPPRESSION
// =============================================================================

#[test]
fn published_items_always_match_the_last_submitted_filter_set() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));
    let first = state.questions.generation();

    let _ = submit_filters(&mut state, user_filters());
    let second = state.questions.generation();
    assert_eq!(second, first + 1);

    // The newer fetch completes first; the older one arrives late.
    let _ = handle_questions_loaded(&mut state, second, Ok(vec![question(2)]));
    let _ = handle_questions_loaded(&mut state, first, Ok(vec![question(1)]));

    assert_eq!(state.questions.phase(), LoadPhase::Ready);
    assert_eq!(
        state.questions.items().iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![2]
    );
}

#[test]
fn superseded_completion_cannot_end_the_newer_loading_phase() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));
    let first = state.questions.generation();
    let _ = submit_filters(&mut state, user_filters());

    // In-order arrival of a superseded fetch: still discarded.
    let _ = handle_questions_loaded(&mut state, first, Ok(vec![question(1)]));

    assert_eq!(state.questions.phase(), LoadPhase::Loading);
    assert!(state.questions.items().is_empty());
}

#[test]
fn question_fetch_failure_blocks_content_until_resubmission() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));
    let generation = state.questions.generation();

    let _ = handle_questions_loaded(
        &mut state,
        generation,
        Err(GuiError::question_load("timeout")),
    );
    assert_eq!(state.questions.phase(), LoadPhase::Failed);
    assert!(state.questions.error().is_some());

    // Re-applying the same filters is a fresh identity and may succeed.
    let filters = state.filters.clone().expect("filters set");
    let _ = submit_filters(&mut state, filters);
    let retry = state.questions.generation();
    let _ = handle_questions_loaded(&mut state, retry, Ok(vec![question(3)]));

    assert_eq!(state.questions.phase(), LoadPhase::Ready);
    assert!(state.questions.error().is_none());
}

// =============================================================================
// SELECTION, HOVER AND THE CURRENT QUESTION
// =============================================================================

#[test]
fn current_question_prefers_hover_then_first_item() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));
    let generation = state.questions.generation();
    let _ = handle_questions_loaded(
        &mut state,
        generation,
        Ok(vec![question(1), question(2), question(3)]),
    );

    assert_eq!(
        state.browse.current(state.questions.items()).map(|q| q.id),
        Some(1)
    );

    let _ = BrowseHandler.handle(
        &mut state,
        BrowseMessage::QuestionHovered(question(2)),
    );
    assert_eq!(
        state.browse.current(state.questions.items()).map(|q| q.id),
        Some(2)
    );

    let _ = BrowseHandler.handle(&mut state, BrowseMessage::QuestionUnhovered);
    assert_eq!(
        state.browse.current(state.questions.items()).map(|q| q.id),
        Some(1)
    );
}

#[test]
fn selection_and_hover_survive_a_list_replacement() {
    let mut state = test_state();
    let _ = handle_metadata_loaded(&mut state, Ok(leaf_metadata()));
    let generation = state.questions.generation();
    let _ = handle_questions_loaded(&mut state, generation, Ok(vec![question(1), question(2)]));

    let _ = BrowseHandler.handle(&mut state, BrowseMessage::SelectionToggled(1));
    let _ = BrowseHandler.handle(
        &mut state,
        BrowseMessage::QuestionHovered(question(1)),
    );

    // A new filter set replaces the list with one that lacks id 1.
    let _ = submit_filters(&mut state, user_filters());
    let generation = state.questions.generation();
    let _ = handle_questions_loaded(&mut state, generation, Ok(vec![question(8)]));

    // Neither axis was cleared; the stale hover still displays.
    assert!(state.browse.is_selected(1));
    assert_eq!(
        state.browse.current(state.questions.items()).map(|q| q.id),
        Some(1)
    );

    // Dropping the hover falls back to the live list's first item.
    let _ = BrowseHandler.handle(&mut state, BrowseMessage::QuestionUnhovered);
    assert_eq!(
        state.browse.current(state.questions.items()).map(|q| q.id),
        Some(8)
    );
}

// =============================================================================
// VIEWPORT HEIGHT SYNCHRONIZATION
// =============================================================================

#[test]
fn resize_then_measure_updates_the_published_height() {
    let mut state = test_state();

    let _ = handle_viewport_resized(&mut state, Size::new(900.0, 700.0));
    assert_eq!(state.layout.window, Size::new(900.0, 700.0));

    let _ = handle_filters_region_measured(
        &mut state,
        Some(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 900.0,
            height: 42.4,
        }),
    );
    assert_eq!(state.layout.filters_height, 43);
    assert_eq!(state.layout.content_height(), 700.0 - 43.0);

    // An unmeasurable region keeps the previous height in effect.
    let _ = handle_filters_region_measured(&mut state, None);
    assert_eq!(state.layout.filters_height, 43);
}
