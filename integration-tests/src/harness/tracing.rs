use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One tracing event, fields rendered to strings.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v.as_str()))
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

/// Process-wide event sink shared by every test in a binary.
///
/// Tests run in parallel, so assertions should look for a matching event rather
/// than count all of them.
#[derive(Debug, Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCapture {
    /// Install the capturing subscriber on first use and return its sink.
    pub fn global() -> Self {
        static CAPTURE: OnceLock<EventCapture> = OnceLock::new();

        CAPTURE
            .get_or_init(|| {
                let capture = EventCapture::default();
                let subscriber = tracing_subscriber::registry().with(capture.clone());
                tracing::subscriber::set_global_default(subscriber)
                    .expect("failed to set global tracing subscriber");
                capture
            })
            .clone()
    }

    /// Every captured event whose message is exactly `message`.
    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.lock()
            .iter()
            .filter(|e| e.message() == Some(message))
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);

        self.lock().push(CapturedEvent {
            level: *meta.level(),
            target: meta.target().to_string(),
            fields: recorder.0,
        });
    }
}

#[derive(Default)]
struct FieldRecorder(Vec<(String, String)>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}
