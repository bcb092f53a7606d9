use super::*;

use shared::{
    domain::TaskKind,
    protocol::{GeneratedText, SentimentScore, ZeroShotClassification},
};

fn rendered_rows(view: &ResultView) -> Vec<String> {
    view.rows.iter().map(ToString::to_string).collect()
}

fn state_with(task: TaskKind, outcome: Result<TaskOutput, String>) -> PlaygroundState {
    let mut state = PlaygroundState::new();
    let submission = state.submit(task);
    state.apply_completion(submission.seq, outcome);
    state
}

#[test]
fn sentiment_renders_only_the_first_entry() {
    let output = TaskOutput::Sentiment(vec![
        SentimentScore {
            label: "POSITIVE".to_string(),
            score: 0.99,
        },
        SentimentScore {
            label: "NEGATIVE".to_string(),
            score: 0.01,
        },
    ]);

    let view = render_output(&output).expect("view");

    assert_eq!(view.title, "Sentiment Analysis Result");
    assert_eq!(rendered_rows(&view), vec!["Label: POSITIVE", "Score: 0.99"]);
}

#[test]
fn zero_shot_joins_labels_and_scores() {
    let output = TaskOutput::ZeroShot(ZeroShotClassification {
        sequence: "hi".to_string(),
        labels: vec!["x".to_string(), "y".to_string()],
        scores: vec![0.6, 0.4],
    });

    let view = render_output(&output).expect("view");

    assert_eq!(view.title, "Zero-shot Classification Result");
    assert_eq!(
        rendered_rows(&view),
        vec!["Sequence: hi", "Labels: x, y", "Scores: 0.6, 0.4"]
    );
}

#[test]
fn text_generation_numbers_every_entry_from_one() {
    let output = TaskOutput::TextGeneration(vec![
        GeneratedText {
            generated_text: "foo".to_string(),
        },
        GeneratedText {
            generated_text: "bar".to_string(),
        },
    ]);

    let view = render_output(&output).expect("view");

    assert_eq!(view.title, "Text Generation Result");
    assert_eq!(
        rendered_rows(&view),
        vec!["Generated Text 1: foo", "Generated Text 2: bar"]
    );
}

#[test]
fn empty_arrays_render_nothing() {
    assert_eq!(render_output(&TaskOutput::Sentiment(Vec::new())), None);
    assert_eq!(render_output(&TaskOutput::TextGeneration(Vec::new())), None);

    let state = state_with(TaskKind::Sentiment, Ok(TaskOutput::Sentiment(Vec::new())));
    assert_eq!(ResultPane::from_state(&state), ResultPane::Empty);
}

#[test]
fn idle_and_loading_render_no_result_block() {
    let mut state = PlaygroundState::new();
    assert_eq!(ResultPane::from_state(&state), ResultPane::Empty);

    state.submit(TaskKind::ZeroShot);
    assert_eq!(ResultPane::from_state(&state), ResultPane::Loading);
}

#[test]
fn failed_request_renders_error_instead_of_result() {
    let state = state_with(
        TaskKind::TextGeneration,
        Err("request to http://x/api/text_generation failed".to_string()),
    );

    assert!(!state.is_loading());
    assert_eq!(
        ResultPane::from_state(&state),
        ResultPane::Error {
            title: "Text generation request failed".to_string(),
            message: "request to http://x/api/text_generation failed".to_string(),
        }
    );
}

#[test]
fn successful_state_renders_its_output() {
    let state = state_with(
        TaskKind::TextGeneration,
        Ok(TaskOutput::TextGeneration(vec![GeneratedText {
            generated_text: "once".to_string(),
        }])),
    );

    match ResultPane::from_state(&state) {
        ResultPane::Result(view) => {
            assert_eq!(rendered_rows(&view), vec!["Generated Text 1: once"]);
        }
        other => panic!("unexpected pane: {other:?}"),
    }
}
