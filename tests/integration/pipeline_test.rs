//! Library-level extraction tests against realistic page snapshots.

use chrono::{TimeZone, Utc};

use chatx::extract::ExtractionConfig;
use chatx::{ExportError, Exporter, Platform, QAPair};

use crate::helpers::load_fixture;

fn export(name: &str, platform: Platform) -> Result<chatx::ExportRecord, ExportError> {
    let doc = load_fixture(name);
    let exported_at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
    Exporter::default().export_at(&doc, platform, exported_at)
}

// ============================================================================
// Per-platform extraction
// ============================================================================

#[test]
fn chatgpt_export_matches_snapshot() {
    let record = export("chatgpt", Platform::ChatGpt).unwrap();
    insta::assert_snapshot!(record.to_json_pretty().unwrap(), @r#"
    {
      "title": "Reading files in Rust",
      "platform": "chatgpt",
      "exportDate": "2026-10-17T09:30:00.000Z",
      "sessions": [
        {
          "question": "How do I read a file into a String?",
          "answer": "Use std::fs::read_to_string:\n\nrustlet s = std::fs::read_to_string(\"a.txt\")?;"
        },
        {
          "question": "thanks",
          "answer": "You're welcome! Happy hacking."
        }
      ]
    }
    "#);
}

#[test]
fn claude_turns_are_ordered_by_position_and_answers_merged() {
    let record = export("claude", Platform::Claude).unwrap();

    assert_eq!(record.title(), "Trait objects vs generics");
    assert_eq!(
        record.sessions(),
        &[
            QAPair::new(
                "When should I use trait objects instead of generics?",
                "Generics are monomorphized at compile time.\n\nTrait objects use a vtable at runtime.",
            ),
            QAPair::new(
                "And for a Vec of shapes?",
                "Use dyn Trait for heterogeneous collections.",
            ),
        ]
    );
}

#[test]
fn gemini_placeholder_answer_leaves_last_question_unanswered() {
    let record = export("gemini", Platform::Gemini).unwrap();

    assert_eq!(record.title(), "Gemini");
    assert_eq!(
        record.sessions(),
        &[QAPair::new(
            "What is a lifetime?",
            "A lifetime names the region where a reference is valid.",
        )]
    );
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn page_without_conversation_is_reported() {
    let err = export("empty", Platform::Claude).unwrap_err();
    assert!(err.is_no_conversation());
    assert!(err.to_string().starts_with("No conversation found"));
}

#[test]
fn wrong_platform_finds_nothing() {
    let err = export("chatgpt", Platform::Gemini).unwrap_err();
    assert!(matches!(err, ExportError::NoTurnsFound { .. }));
}

#[test]
fn platform_is_detected_from_snapshot_url() {
    for (name, expected) in [
        ("chatgpt", Platform::ChatGpt),
        ("claude", Platform::Claude),
        ("gemini", Platform::Gemini),
    ] {
        let doc = load_fixture(name);
        assert_eq!(Platform::detect(doc.url().unwrap()).unwrap(), expected);
    }

    let doc = load_fixture("unsupported");
    assert!(matches!(
        Platform::detect(doc.url().unwrap()),
        Err(ExportError::UnsupportedSource(_))
    ));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn repeated_exports_are_identical() {
    let first = export("claude", Platform::Claude).unwrap();
    let second = export("claude", Platform::Claude).unwrap();
    assert_eq!(
        first.to_json_pretty().unwrap(),
        second.to_json_pretty().unwrap()
    );
}

#[test]
fn every_pair_has_non_empty_sides() {
    for (name, platform) in [
        ("chatgpt", Platform::ChatGpt),
        ("claude", Platform::Claude),
        ("gemini", Platform::Gemini),
    ] {
        let record = export(name, platform).unwrap();
        assert!(!record.sessions().is_empty());
        for pair in record.sessions() {
            assert!(!pair.question.trim().is_empty());
            assert!(!pair.answer.trim().is_empty());
        }
    }
}

#[test]
fn stricter_threshold_drops_short_answers() {
    let doc = load_fixture("chatgpt");
    let config = ExtractionConfig {
        min_assistant_chars: 40,
        ..ExtractionConfig::default()
    };
    let record = Exporter::new(config).export(&doc, Platform::ChatGpt).unwrap();

    assert_eq!(record.sessions().len(), 1);
    assert_eq!(record.sessions()[0].question, "How do I read a file into a String?");
}
