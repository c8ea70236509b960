use std::io::Write;
use std::time::Duration;
use stringcheck_core::{Result, StringCheckError};

/// Somewhere a finished report can be sent.
pub trait Notifier {
    fn send(&self, message: &str) -> Result<()>;
}

/// Posts `{"text": ...}` to an incoming-webhook URL (Slack-compatible).
pub struct WebhookNotifier {
    url: String,
    agent: ureq::Agent,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            url: url.into(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for WebhookNotifier {
    fn send(&self, message: &str) -> Result<()> {
        let body = serde_json::json!({ "text": message });
        match self.agent.post(&self.url).send_json(body) {
            Ok(resp) => {
                tracing::info!(event = "webhook_sent", status = resp.status());
                Ok(())
            }
            Err(ureq::Error::Status(code, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                Err(StringCheckError::Notify(format!("webhook returned {code}: {text}")).into())
            }
            // transport errors print the URL, which carries the webhook token
            Err(e) => Err(StringCheckError::Notify(format!(
                "webhook request failed: {}",
                e.kind()
            ))
            .into()),
        }
    }
}

/// Print `report` and forward it to `notifier` when there is something to
/// report.
///
/// `notifier` is `Some` only when the caller asked for remote reporting.
/// Returns whether the report was sent.
pub fn publish(
    out: &mut impl Write,
    report: &str,
    has_issues: bool,
    notifier: Option<&dyn Notifier>,
) -> Result<bool> {
    writeln!(out, "{}", report.trim_end())?;
    match notifier {
        Some(n) if has_issues => {
            n.send(report)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
