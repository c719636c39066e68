//! Log output routing.
//!
//! One-shot commands log to stdout next to the cards they print. `browse`
//! owns stdout for the TUI, so its log lines go to `filmdeck.log` instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::resolve_log_path;

/// Destination of formatted log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Standard output.
    Stdout,
    /// Appended to a file.
    File(PathBuf),
}

impl LogSink {
    /// Picks the sink for a command: the log file for `browse`, stdout
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the log path cannot be resolved.
    pub fn for_command(browse: bool, dir: Option<&PathBuf>) -> Result<Self> {
        if browse {
            let path = resolve_log_path(dir).context("failed to resolve log path")?;
            return Ok(Self::File(path));
        }
        Ok(Self::Stdout)
    }

    /// Opens the sink as a writer for the fmt layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file or its directory cannot be created.
    pub fn make_writer(&self) -> Result<BoxMakeWriter> {
        match self {
            Self::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
            Self::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create log directory {}", parent.display())
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open log file {}", path.display()))?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }

    /// ANSI colours are only written to a terminal.
    pub const fn ansi(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

/// `RUST_LOG`, or `info` when unset or invalid.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to `sink`.
///
/// With the `otel` feature, spans are also exported over OTLP when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
///
/// # Errors
///
/// Returns an error if the sink cannot be opened.
pub fn init(sink: &LogSink) -> Result<()> {
    let writer = sink.make_writer()?;

    #[cfg(not(feature = "otel"))]
    {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_ansi(sink.ansi())
            .with_writer(writer)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(sink.ansi())
            .with_writer(writer);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::future_not_send)]

    use std::cell::RefCell;
    use std::rc::Rc;

    use filmdeck_api::tmdb::TmdbClient;
    use filmdeck_pipeline::{
        ContainerId, ContainerView, FAILURE_MESSAGE, Outcome, Pipeline, PipelineSettings,
    };

    use super::*;
    use crate::tui::ScreenSurface;
    use crate::tui::state::BrowserState;

    #[test]
    fn test_one_shot_commands_log_to_stdout() {
        // Arrange & Act
        let sink = LogSink::for_command(false, None).unwrap();

        // Assert
        assert_eq!(sink, LogSink::Stdout);
        assert!(sink.ansi());
    }

    #[test]
    fn test_browse_logs_to_file_in_dir() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let override_dir = dir.path().to_path_buf();

        // Act
        let sink = LogSink::for_command(true, Some(&override_dir)).unwrap();

        // Assert
        assert_eq!(sink, LogSink::File(dir.path().join("filmdeck.log")));
        assert!(!sink.ansi());
    }

    #[test]
    fn test_file_sink_creates_missing_directory() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("filmdeck.log");
        let sink = LogSink::File(path.clone());

        // Act
        let writer = sink.make_writer();

        // Assert
        assert!(writer.is_ok());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_browse_failure_reaches_screen_and_log_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let override_dir = dir.path().to_path_buf();
        let sink = LogSink::for_command(true, Some(&override_dir)).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_target(false)
            .with_ansi(sink.ansi())
            .with_writer(sink.make_writer().unwrap())
            .finish();

        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;
        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", mock_server.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        let state = Rc::new(RefCell::new(BrowserState::new()));
        let pipeline = Pipeline::new(
            client,
            ScreenSurface::new(Rc::clone(&state)),
            PipelineSettings::default(),
        );

        // Act
        let outcome = {
            let _guard = tracing::subscriber::set_default(subscriber);
            pipeline.list_top_rated().await
        };

        // Assert
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            state.borrow().pane(ContainerId::TopRated).unwrap().view,
            ContainerView::Message(String::from(FAILURE_MESSAGE))
        );
        let log = std::fs::read_to_string(dir.path().join("filmdeck.log")).unwrap();
        assert!(log.contains("TMDB fetch failed"));
        assert!(log.contains("error fetching top rated movies"));
        assert!(!log.contains('\u{1b}'));
    }
}
