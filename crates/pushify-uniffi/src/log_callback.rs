use std::sync::Arc;

use tracing_subscriber::{layer::Context, Layer};

const CALLBACK_TARGET: &str = "pushify_uniffi::log_callback";

/// Receives SDK log events in the host application.
#[uniffi::export(with_foreign)]
pub trait LogCallback: Send + Sync {
    /// Called for every event that passes the log filter.
    ///
    /// - level: "TRACE", "DEBUG", "INFO", "WARN" or "ERROR"
    /// - target: module that emitted the event, e.g. "pushify_core::registration"
    /// - message: the formatted message
    ///
    /// Implementations should catch their own exceptions and return an error instead.
    fn on_log(&self, level: String, target: String, message: String) -> crate::Result<()>;
}

/// Tracing layer forwarding events to a [LogCallback].
pub(crate) struct CallbackLayer {
    callback: Arc<dyn LogCallback>,
}

impl CallbackLayer {
    pub(crate) fn new(callback: Arc<dyn LogCallback>) -> Self {
        Self { callback }
    }
}

impl<S> Layer<S> for CallbackLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Failures of the callback are logged under this target and must not loop back into it.
        if metadata.target() == CALLBACK_TARGET {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Err(e) = self.callback.on_log(
            metadata.level().to_string(),
            metadata.target().to_string(),
            visitor.finish(),
        ) {
            tracing::error!(target: CALLBACK_TARGET, "Logging callback failed: {e:?}");
        }
    }
}

/// Collects the message of an event followed by its structured fields as `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {fields}", self.message)
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[derive(Default)]
    struct TestLogCallback {
        logs: Mutex<Vec<(String, String, String)>>,
    }

    impl LogCallback for TestLogCallback {
        fn on_log(&self, level: String, target: String, message: String) -> crate::Result<()> {
            self.logs.lock().unwrap().push((level, target, message));
            Ok(())
        }
    }

    struct FailingLogCallback;

    impl LogCallback for FailingLogCallback {
        fn on_log(&self, _: String, _: String, _: String) -> crate::Result<()> {
            Err(crate::PushifyError::CallbackError)
        }
    }

    #[test]
    fn test_callback_layer_forwards_events() {
        let callback = Arc::new(TestLogCallback::default());
        let subscriber =
            tracing_subscriber::registry().with(CallbackLayer::new(callback.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "pushify_core::registration", "push token unavailable");
        });

        let logs = callback.logs.lock().unwrap();
        assert_eq!(
            *logs,
            vec![(
                "WARN".to_string(),
                "pushify_core::registration".to_string(),
                "push token unavailable".to_string()
            )]
        );
    }

    #[test]
    fn test_structured_fields_are_appended() {
        let callback = Arc::new(TestLogCallback::default());
        let subscriber =
            tracing_subscriber::registry().with(CallbackLayer::new(callback.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(device_name = "Kitchen iPad", attempt = 2, "submitting device");
        });

        let logs = callback.logs.lock().unwrap();
        assert_eq!(
            logs[0].2,
            "submitting device device_name=Kitchen iPad attempt=2"
        );
    }

    #[test]
    fn test_failing_callback_does_not_recurse() {
        let subscriber =
            tracing_subscriber::registry().with(CallbackLayer::new(Arc::new(FailingLogCallback)));

        // Would overflow the stack if the error event were forwarded again.
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("message");
        });
    }
}
