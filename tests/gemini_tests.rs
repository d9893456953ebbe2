// Tests for the Gemini request/response shapes and prompt construction.

use live_describer::describe::messages::{
    Content, GenerateRequest, GenerateResponse, GenerationConfig,
};
use live_describer::describe::prompt::{build_prompt, system_instruction};
use live_describer::describe::{is_no_description, DetailLevel, EventType};

#[test]
fn request_serializes_with_camel_case_keys() {
    let request = GenerateRequest {
        system_instruction: Content::text("You are an audio describer."),
        contents: vec![Content::text("Transcript Segment: \"hello\"")],
        generation_config: GenerationConfig {
            temperature: 0.3,
            max_output_tokens: 50,
        },
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"systemInstruction\""));
    assert!(json.contains("\"generationConfig\""));
    assert!(json.contains("\"maxOutputTokens\":50"));
    assert!(json.contains("\"parts\""));
}

#[test]
fn response_text_extracts_first_candidate() {
    let json = r#"{
        "candidates": [{
            "content": { "parts": [{ "text": "A chart appears on screen." }] },
            "finishReason": "STOP"
        }]
    }"#;

    let response: GenerateResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.text().unwrap(), "A chart appears on screen.");
}

#[test]
fn blocked_response_has_no_text() {
    let json = r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#;

    let response: GenerateResponse = serde_json::from_str(json).unwrap();
    assert_eq!(
        response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref()),
        Some("SAFETY")
    );
    assert!(response.text().is_none());
}

#[test]
fn empty_candidates_yield_no_text() {
    let json = r#"{ "candidates": [] }"#;
    let response: GenerateResponse = serde_json::from_str(json).unwrap();
    assert!(response.text().is_none());
}

#[test]
fn prompt_embeds_segment_event_and_detail() {
    let prompt = build_prompt(
        "as you can see on this slide",
        EventType::Webinar,
        DetailLevel::Detailed,
    );

    assert!(prompt.contains("as you can see on this slide"));
    assert!(prompt.contains("Webinar/Presentation"));
    assert!(prompt.contains("Detailed"));
    assert!(prompt.contains("NONE"));
}

#[test]
fn system_instruction_differs_per_event_type() {
    let webinar = system_instruction(EventType::Webinar);
    let sports = system_instruction(EventType::Sports);
    let emergency = system_instruction(EventType::Emergency);

    assert!(webinar.contains("slides"));
    assert!(sports.contains("sports"));
    assert!(emergency.contains("emergency"));
    assert_ne!(webinar, sports);
    assert_ne!(sports, emergency);
}

#[test]
fn event_type_serializes_to_display_labels() {
    assert_eq!(
        serde_json::to_string(&EventType::Webinar).unwrap(),
        "\"Webinar/Presentation\""
    );
    assert_eq!(serde_json::to_string(&EventType::General).unwrap(), "\"General\"");

    let parsed: EventType = serde_json::from_str("\"Sports\"").unwrap();
    assert_eq!(parsed, EventType::Sports);
    assert_eq!(EventType::default(), EventType::General);
    assert_eq!(DetailLevel::default(), DetailLevel::Standard);
}

#[test]
fn none_marker_matches_case_insensitively() {
    assert!(is_no_description("NONE"));
    assert!(is_no_description("none"));
    assert!(is_no_description("  None  "));
    assert!(!is_no_description("A presenter gestures at the screen."));
    assert!(!is_no_description("NONE of the charts are visible."));
}
