//! Tracing layer feeding the interaction journal.

use std::fmt::Write as FmtWrite;
use std::path::Path;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::entry::JournalEntry;
use super::writer::JournalWriter;

/// Writes every tracing event it sees to a session journal.
#[derive(Clone)]
pub struct JournalLayer {
    writer: Arc<JournalWriter>,
}

impl JournalLayer {
    pub fn new(dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(JournalWriter::new(dir, session)?),
        })
    }

    pub fn journal_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S: Subscriber> Layer<S> for JournalLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JournalVisitor::default();
        event.record(&mut visitor);

        let mut entry = JournalEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.session(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        // a failed journal write must never take the page down
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct JournalVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JournalVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JournalVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_journal;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn captures_message_and_fields() {
        let temp = TempDir::new().unwrap();
        let layer = JournalLayer::new(temp.path(), "test").unwrap();
        let path = layer.journal_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Menu toggled");
            tracing::warn!(offset = 42.5, hidden = true, "Header hidden");
        });

        let entries = read_journal(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Menu toggled");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[1].field("hidden"), Some(&serde_json::Value::Bool(true)));
        assert_eq!(entries[1].field("offset").and_then(|v| v.as_f64()), Some(42.5));
        assert!(entries.iter().all(|e| e.session == "test"));
    }
}
