//! Orchestrator tests against a scripted driver.

use async_trait::async_trait;
use futures_util::StreamExt;
use groqbook_core::{
    Completion, CompletionChunk, Document, GenerateRequest, ResponseFormat, Role, SectionEvent,
    UsageReport,
};
use groqbook_error::{GroqError, GroqErrorKind, GroqbookError, GroqbookErrorKind, GroqbookResult};
use groqbook_generation::{
    BookExecutor, BookSession, COMPLETION_MESSAGE, DECODE_FAILURE_MESSAGE, GenerationOutcome,
    GenerationSettings, GenerationState, OUTLINE_PHASE, generate_book_structure, generate_section,
};
use groqbook_interface::{BookDriver, CompletionStream, ProgressSink};
use std::collections::VecDeque;
use std::sync::Mutex;

const OUTLINE: &str = r#"{"Intro": "x intro", "Part": {"Ch1": "x1", "Ch2": "x2"}}"#;

/// One scripted stream item.
#[derive(Clone)]
enum Scripted {
    Delta(&'static str),
    Usage(UsageReport),
    Fail(&'static str),
}

/// Driver that replays a scripted outline and section streams in order.
struct ScriptedDriver {
    outline: String,
    outline_usage: Option<UsageReport>,
    sections: Mutex<VecDeque<Vec<Scripted>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(outline: &str, sections: Vec<Vec<Scripted>>) -> Self {
        Self {
            outline: outline.to_string(),
            outline_usage: Some(usage(50, 400, 0.5, 2.0)),
            sections: Mutex::new(sections.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookDriver for ScriptedDriver {
    async fn complete(&self, request: &GenerateRequest) -> GroqbookResult<Completion> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(Completion {
            content: self.outline.clone(),
            usage: self.outline_usage,
        })
    }

    async fn stream(&self, request: &GenerateRequest) -> GroqbookResult<CompletionStream> {
        self.requests.lock().unwrap().push(request.clone());
        let script = self.sections.lock().unwrap().pop_front().unwrap_or_default();
        let items = script.into_iter().map(|item| match item {
            Scripted::Delta(text) => Ok(CompletionChunk {
                delta: Some(text.to_string()),
                usage: None,
            }),
            Scripted::Usage(usage) => Ok(CompletionChunk {
                delta: None,
                usage: Some(usage),
            }),
            Scripted::Fail(reason) => Err(GroqbookError::from(GroqError::new(
                GroqErrorKind::StreamInterrupted(reason.to_string()),
            ))),
        });
        Ok(futures_util::stream::iter(items.collect::<Vec<_>>()).boxed())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Sink that records every callback as a line.
#[derive(Default)]
struct RecordingSink {
    events: Vec<String>,
    panels: Vec<String>,
    fragments: Vec<Option<String>>,
}

impl RecordingSink {
    fn phases(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.strip_prefix("phase:"))
            .collect()
    }
}

impl ProgressSink for RecordingSink {
    fn phase(&mut self, label: &str) {
        self.events.push(format!("phase:{}", label));
    }

    fn statistics(&mut self, panel: &str) {
        self.panels.push(panel.to_string());
    }

    fn section_updated(&mut self, title: &str, increment: &str, document: &Document) {
        self.events.push(format!("update:{}:{}", title, increment));
        self.fragments.push(document.render_incremental(title));
    }

    fn error(&mut self, message: &str) {
        self.events.push(format!("error:{}", message));
    }

    fn completed(&mut self, message: &str) {
        self.events.push(format!("completed:{}", message));
    }
}

fn usage(prompt_tokens: u64, completion_tokens: u64, completion_time: f64, total_time: f64) -> UsageReport {
    UsageReport {
        prompt_time: 0.1,
        completion_time,
        prompt_tokens,
        completion_tokens,
        total_time,
    }
}

fn happy_sections() -> Vec<Vec<Scripted>> {
    vec![
        vec![
            Scripted::Delta(""),
            Scripted::Delta("Hello "),
            Scripted::Delta("there"),
            Scripted::Usage(usage(10, 100, 1.0, 1.5)),
        ],
        vec![Scripted::Delta("One"), Scripted::Usage(usage(20, 200, 1.0, 2.0))],
        vec![Scripted::Delta("Two"), Scripted::Usage(usage(30, 300, 2.0, 2.5))],
    ]
}

#[tokio::test]
async fn test_generate_walks_leaves_in_preorder() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut session = BookSession::new();
    let mut sink = RecordingSink::default();

    let outcome = executor
        .generate(&mut session, "The history of typesetting", &mut sink)
        .await?;

    assert_eq!(outcome, GenerationOutcome::Completed);
    assert_eq!(*session.state(), GenerationState::Completed);
    assert_eq!(
        sink.phases(),
        vec![
            OUTLINE_PHASE,
            "Generating content for: Intro",
            "Generating content for: Ch1",
            "Generating content for: Ch2",
        ]
    );
    assert_eq!(
        sink.events.last().map(String::as_str),
        Some(format!("completed:{}", COMPLETION_MESSAGE).as_str())
    );

    let document = session.document().expect("document installed");
    assert_eq!(document.content("Intro"), Some("Hello there"));
    assert_eq!(document.content("Part"), Some(""));
    assert_eq!(document.content("Ch1"), Some("One"));
    assert_eq!(document.content("Ch2"), Some("Two"));
    assert_eq!(
        session.markdown().as_deref(),
        Some("# Intro\nHello there\n\n## Ch1\nOne\n\n## Ch2\nTwo\n\n")
    );
    assert!(session.exports_ready());
    Ok(())
}

#[tokio::test]
async fn test_generate_sends_expected_requests() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut session = BookSession::new();

    executor
        .generate(&mut session, "The history of typesetting", &mut RecordingSink::default())
        .await?;

    let requests = executor.driver().requests();
    assert_eq!(requests.len(), 4);

    let outline = &requests[0];
    assert_eq!(outline.model(), "llama3-70b-8192");
    assert_eq!(*outline.response_format(), Some(ResponseFormat::JsonObject));
    assert!(!outline.stream());
    assert_eq!(*outline.max_tokens(), Some(8000));
    assert_eq!(*outline.temperature(), Some(0.3));
    assert_eq!(*outline.messages()[0].role(), Role::System);
    assert!(
        outline.messages()[1]
            .content()
            .ends_with("<subject>The history of typesetting</subject>")
    );

    let section_prompts: Vec<&str> = requests[1..]
        .iter()
        .map(|r| {
            assert!(r.stream());
            assert_eq!(r.model(), "llama3-8b-8192");
            assert_eq!(*r.response_format(), None);
            r.messages()[1].content().as_str()
        })
        .collect();
    assert!(section_prompts[0].ends_with("<section_title>Intro: x intro</section_title>"));
    assert!(section_prompts[1].ends_with("<section_title>Ch1: x1</section_title>"));
    assert!(section_prompts[2].ends_with("<section_title>Ch2: x2</section_title>"));
    Ok(())
}

#[tokio::test]
async fn test_generate_accumulates_combined_statistics() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut session = BookSession::new();
    let mut sink = RecordingSink::default();

    executor
        .generate(&mut session, "The history of typesetting", &mut sink)
        .await?;

    let outline_stats = session.outline_statistics().expect("outline statistics");
    assert_eq!(outline_stats.model_name(), "llama3-70b-8192");
    assert_eq!(*outline_stats.output_tokens(), 400);

    let total = session.total_statistics().expect("running total");
    assert_eq!(total.model_name(), "Combined");
    assert_eq!(*total.input_tokens(), 60);
    assert_eq!(*total.output_tokens(), 600);
    assert_eq!(*total.output_time(), 4.0);
    assert_eq!(*total.total_time(), 6.0);

    // outline panel first, then one re-render per section
    assert_eq!(sink.panels.len(), 4);
    assert!(sink.panels[0].contains("- **Model**: llama3-70b-8192\n"));
    assert_eq!(sink.panels[3], total.render());
    assert!(sink.panels[3].contains("- **Total Tokens**: 660\n"));
    Ok(())
}

#[tokio::test]
async fn test_empty_deltas_are_not_reported() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut sink = RecordingSink::default();

    executor
        .generate(&mut BookSession::new(), "The history of typesetting", &mut sink)
        .await?;

    let updates: Vec<&str> = sink
        .events
        .iter()
        .filter(|e| e.starts_with("update:"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        updates,
        vec!["update:Intro:Hello ", "update:Intro:there", "update:Ch1:One", "update:Ch2:Two"]
    );
    assert_eq!(
        sink.fragments[1].as_deref(),
        Some("<div class='book-section'><h3>Intro</h3><div>Hello there</div></div>")
    );
    Ok(())
}

#[tokio::test]
async fn test_short_topic_is_rejected_without_requests() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut session = BookSession::new();
    let mut sink = RecordingSink::default();

    let outcome = executor.generate(&mut session, "123456789", &mut sink).await?;

    assert_eq!(
        outcome,
        GenerationOutcome::Rejected {
            message: "Book topic must be at least 10 characters long".to_string()
        }
    );
    assert!(executor.driver().requests().is_empty());
    assert_eq!(*session.state(), GenerationState::Idle);
    assert!(session.document().is_none());
    assert_eq!(
        sink.events,
        vec!["error:Book topic must be at least 10 characters long".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_rejected_topic_keeps_previous_book() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()));
    let mut session = BookSession::new();

    executor
        .generate(&mut session, "0123456789", &mut RecordingSink::default())
        .await?;
    let before = session.markdown();

    executor
        .generate(&mut session, "short", &mut RecordingSink::default())
        .await?;

    assert_eq!(*session.state(), GenerationState::Completed);
    assert_eq!(session.markdown(), before);
    Ok(())
}

#[tokio::test]
async fn test_malformed_outline_leaves_no_document() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new("{\"Intro\": ", Vec::new()));
    let mut session = BookSession::new();
    let mut sink = RecordingSink::default();

    let outcome = executor
        .generate(&mut session, "The history of typesetting", &mut sink)
        .await?;

    assert_eq!(
        outcome,
        GenerationOutcome::Rejected {
            message: DECODE_FAILURE_MESSAGE.to_string()
        }
    );
    assert!(session.document().is_none());
    assert!(!session.exports_ready());
    assert!(matches!(session.state(), GenerationState::Failed { .. }));
    assert!(sink.events.contains(&format!("error:{}", DECODE_FAILURE_MESSAGE)));
    assert_eq!(executor.driver().requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_decode_failure_discards_previous_document() -> anyhow::Result<()> {
    let mut session = BookSession::new();
    BookExecutor::new(ScriptedDriver::new(OUTLINE, happy_sections()))
        .generate(&mut session, "The history of typesetting", &mut RecordingSink::default())
        .await?;
    assert!(session.document().is_some());

    BookExecutor::new(ScriptedDriver::new("[1, 2]", Vec::new()))
        .generate(&mut session, "The history of typesetting", &mut RecordingSink::default())
        .await?;

    assert!(session.document().is_none());
    Ok(())
}

#[tokio::test]
async fn test_section_failure_halts_with_partial_content() {
    let sections = vec![
        vec![Scripted::Delta("Hello"), Scripted::Usage(usage(1, 2, 1.0, 1.0))],
        vec![Scripted::Delta("Half a chap"), Scripted::Fail("connection reset")],
        vec![Scripted::Delta("never")],
    ];
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, sections));
    let mut session = BookSession::new();
    let mut sink = RecordingSink::default();

    let err = executor
        .generate(&mut session, "The history of typesetting", &mut sink)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), GroqbookErrorKind::Groq(_)));
    assert!(!err.is_user_facing());
    assert!(matches!(session.state(), GenerationState::Failed { reason } if reason.contains("connection reset")));
    assert!(!sink.events.iter().any(|e| e.starts_with("completed:")));
    assert_eq!(executor.driver().requests().len(), 3);

    let document = session.document().expect("partial document kept");
    assert_eq!(document.content("Intro"), Some("Hello"));
    assert_eq!(document.content("Ch1"), Some("Half a chap"));
    assert_eq!(document.content("Ch2"), Some(""));
    assert!(session.exports_ready());
    assert_eq!(
        session.markdown().as_deref(),
        Some("# Intro\nHello\n\n## Ch1\nHalf a chap\n\n")
    );
}

#[tokio::test]
async fn test_generate_outline_only() -> anyhow::Result<()> {
    let executor = BookExecutor::new(ScriptedDriver::new(OUTLINE, Vec::new()));

    let (statistics, outline) = executor.generate_outline("The history of typesetting").await?;

    assert_eq!(outline.flatten(), vec!["Intro", "Part", "Ch1", "Ch2"]);
    assert_eq!(*statistics.input_tokens(), 50);
    assert_eq!(executor.driver().requests().len(), 1);

    let err = executor.generate_outline("tiny").await.unwrap_err();
    assert!(matches!(err.kind(), GroqbookErrorKind::Validation(_)));
    assert!(err.is_user_facing());
    Ok(())
}

#[tokio::test]
async fn test_outline_without_usage_has_zero_statistics() -> anyhow::Result<()> {
    let mut driver = ScriptedDriver::new(OUTLINE, Vec::new());
    driver.outline_usage = None;
    let settings = GenerationSettings::builder()
        .outline_model("mixtral-8x7b-32768")
        .build()?;

    let (statistics, json) = generate_book_structure(&driver, &settings, "Anything long").await?;

    assert_eq!(json, OUTLINE);
    assert_eq!(statistics.model_name(), "mixtral-8x7b-32768");
    assert_eq!(statistics.total_tokens(), 0);
    assert_eq!(statistics.output_speed(), 0.0);
    Ok(())
}

#[tokio::test]
async fn test_section_stream_reports_statistics_once() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(
        OUTLINE,
        vec![vec![
            Scripted::Delta(""),
            Scripted::Delta("a"),
            Scripted::Usage(usage(5, 6, 1.0, 1.0)),
            Scripted::Usage(usage(7, 8, 1.0, 1.0)),
        ]],
    );

    let events: Vec<SectionEvent> = generate_section(&driver, &GenerationSettings::default(), "Ch1", "x1")
        .await?
        .map(|event| event.map_err(anyhow::Error::from))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<anyhow::Result<_>>()?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0], SectionEvent::Text("a".to_string()));
    match &events[1] {
        SectionEvent::Statistics(stats) => {
            assert_eq!(*stats.input_tokens(), 5);
            assert_eq!(stats.model_name(), "llama3-8b-8192");
        }
        other => panic!("Expected statistics, got {:?}", other),
    }
    Ok(())
}
