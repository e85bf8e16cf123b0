use std::path::Path;
use std::time::Duration;

use tarakan::application::ports::{TextExtractor, TextExtractorError};
use tarakan::domain::{MediaType, SourceDocument};
use tarakan::infrastructure::extraction::TikaExtractor;

use crate::helpers::write_stub;

fn pdf_document(path: &str) -> SourceDocument {
    SourceDocument::new(path, MediaType::new("application/pdf"))
}

fn extractor(java: &Path) -> TikaExtractor {
    TikaExtractor::new(
        &java.to_string_lossy(),
        "/var/apache-tika/tika-app-1.8.jar",
        Duration::from_secs(5),
        false,
    )
}

#[tokio::test]
async fn given_tool_printing_text_when_extracting_then_returns_stdout_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let java = write_stub(dir.path(), "java", "#!/bin/sh\nprintf 'hello world'\n");

    let result = extractor(&java)
        .extract_text(&pdf_document("/data/report.pdf"))
        .await;

    assert_eq!(result.unwrap(), "hello world");
}

#[tokio::test]
async fn given_tool_output_with_trailing_newlines_when_extracting_then_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let java = write_stub(dir.path(), "java", "#!/bin/sh\nprintf 'body text\\n\\n'\n");

    let result = extractor(&java)
        .extract_text(&pdf_document("/data/report.pdf"))
        .await;

    assert_eq!(result.unwrap(), "body text\n\n");
}

#[tokio::test]
async fn given_path_with_spaces_and_utf8_when_extracting_then_tool_receives_exact_path() {
    let dir = tempfile::tempdir().unwrap();
    let script = "#!/bin/sh\nfor arg in \"$@\"; do last=\"$arg\"; done\nprintf '%s' \"$last\"\n";
    let java = write_stub(dir.path(), "java", script);

    let path = "/data/годовой отчёт 2024.pdf";
    let result = extractor(&java).extract_text(&pdf_document(path)).await;

    assert_eq!(result.unwrap(), path);
}

#[tokio::test]
async fn given_tool_exiting_nonzero_when_extracting_then_fails_with_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let java = write_stub(dir.path(), "java", "#!/bin/sh\necho 'jvm blew up' >&2\nexit 3\n");

    let result = extractor(&java)
        .extract_text(&pdf_document("/data/report.pdf"))
        .await;

    let Err(TextExtractorError::ExtractionFailed(message)) = result else {
        panic!("expected extraction failure");
    };
    assert!(message.contains("jvm blew up"));
}

#[tokio::test]
async fn given_tool_with_blank_output_when_extracting_then_reports_no_text_found() {
    let dir = tempfile::tempdir().unwrap();
    let java = write_stub(dir.path(), "java", "#!/bin/sh\nprintf '  \\n'\n");

    let result = extractor(&java)
        .extract_text(&pdf_document("/data/empty.pdf"))
        .await;

    assert!(matches!(
        result,
        Err(TextExtractorError::NoTextFound(filename)) if filename == "empty.pdf"
    ));
}

#[tokio::test]
async fn given_hanging_tool_when_extracting_then_times_out_promptly() {
    let dir = tempfile::tempdir().unwrap();
    let java = write_stub(dir.path(), "java", "#!/bin/sh\nsleep 5\n");

    let extractor = TikaExtractor::new(
        &java.to_string_lossy(),
        "/var/apache-tika/tika-app-1.8.jar",
        Duration::from_millis(200),
        false,
    );

    let started = std::time::Instant::now();
    let result = extractor.extract_text(&pdf_document("/data/slow.pdf")).await;

    assert!(matches!(result, Err(TextExtractorError::TimedOut(_))));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn given_missing_program_when_extracting_then_fails_to_spawn() {
    let result = TikaExtractor::new(
        "/nonexistent/bin/java",
        "/var/apache-tika/tika-app-1.8.jar",
        Duration::from_secs(5),
        false,
    )
    .extract_text(&pdf_document("/data/report.pdf"))
    .await;

    assert!(matches!(result, Err(TextExtractorError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_clear_flag_when_extracting_then_child_does_not_see_dyld_library_path() {
    let dir = tempfile::tempdir().unwrap();
    let script = "#!/bin/sh\nprintf '%s' \"${DYLD_LIBRARY_PATH-unset}\"\n";
    let java = write_stub(dir.path(), "java", script);

    let cleared = TikaExtractor::new(
        &java.to_string_lossy(),
        "/var/apache-tika/tika-app-1.8.jar",
        Duration::from_secs(5),
        true,
    );

    let text = cleared.extract_text(&pdf_document("/data/a.pdf")).await;

    // Holds with or without the variable in the parent environment.
    assert_eq!(text.unwrap(), "unset");
}
