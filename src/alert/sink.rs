//! Observation sink for received alerts.
//!
//! # Responsibilities
//! - Record one line per received alert for human review
//! - Keep each emission indivisible under concurrent handlers
//!
//! # Design Decisions
//! - Writes go to stdout by default; tests inject an in-memory writer
//! - A single mutex guards the writer, so lines never interleave
//! - The sink is the only shared resource across request handlers

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::alert::payload::AlertPayload;

/// Destination where received alerts are recorded.
///
/// Cloning is cheap; clones share the underlying writer and its lock.
#[derive(Clone)]
pub struct ObservationSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ObservationSink {
    /// Sink writing to standard output. This is the production sink: one
    /// `Alert received:` line per inbound alert.
    pub fn stdout() -> Self {
        Self::from_writer(std::io::stdout())
    }

    /// Sink writing to an arbitrary writer. Used by tests to capture
    /// output.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Record one alert as a single line. The whole line is written under
    /// the lock, so concurrent handlers cannot interleave entries.
    pub fn record(&self, payload: &AlertPayload) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(error) = writeln!(writer, "Alert received: {}", payload) {
            tracing::error!(%error, "failed to write to observation sink");
        }
    }
}

impl std::fmt::Debug for ObservationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservationSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn records_one_prefixed_line_per_alert() {
        let capture = Capture::default();
        let sink = ObservationSink::from_writer(capture.clone());

        sink.record(&AlertPayload::Decoded(json!({"alert": "disk_full"})));
        sink.record(&AlertPayload::Decoded(json!({"alert": "cpu_high"})));

        let lines: Vec<String> = capture.contents().lines().map(String::from).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Alert received: "));
        assert!(lines[0].contains("disk_full"));
        assert!(lines[1].contains("cpu_high"));
    }

    #[test]
    fn undecodable_payloads_are_still_recorded() {
        let capture = Capture::default();
        let sink = ObservationSink::from_writer(capture.clone());

        sink.record(&AlertPayload::decode(b"not json"));

        let contents = capture.contents();
        assert!(contents.starts_with("Alert received: <undecodable:"));
    }

    #[test]
    fn clones_share_the_same_writer() {
        let capture = Capture::default();
        let sink = ObservationSink::from_writer(capture.clone());
        let clone = sink.clone();

        sink.record(&AlertPayload::Decoded(json!(1)));
        clone.record(&AlertPayload::Decoded(json!(2)));

        assert_eq!(capture.contents().lines().count(), 2);
    }
}
