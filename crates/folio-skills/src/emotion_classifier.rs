//! Emotion classifier backed by an external command that prints JSON on stdout.

use folio_core::{ClassifierError, EmotionClassifier, RequestContext};
use tokio::process::Command;

const CLASSIFIER_NAME: &str = "process";

/// Runs `program args... <text>` once per request and parses stdout as a JSON object.
pub struct ProcessClassifier {
    program: String,
    args: Vec<String>,
}

impl ProcessClassifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses classifier stdout. An object carrying an `error` key counts as a failure.
    fn parse_output(stdout: &[u8]) -> Result<serde_json::Value, ClassifierError> {
        let text = String::from_utf8_lossy(stdout);
        let value: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| ClassifierError::Output(format!("invalid JSON: {e}")))?;
        match value.as_object() {
            None => Err(ClassifierError::Output("expected a JSON object".to_string())),
            Some(obj) => match obj.get("error") {
                Some(err) => Err(ClassifierError::Output(format!("classifier reported: {err}"))),
                None => Ok(value),
            },
        }
    }
}

#[async_trait::async_trait]
impl EmotionClassifier for ProcessClassifier {
    fn name(&self) -> &str {
        CLASSIFIER_NAME
    }

    async fn classify(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> Result<serde_json::Value, ClassifierError> {
        tracing::info!(
            target: "folio::emotion",
            correlation_id = %ctx.correlation_id,
            program = %self.program,
            "running classifier on {} chars",
            text.len()
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ClassifierError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClassifierError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Self::parse_output(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_object() {
        let value = ProcessClassifier::parse_output(b"{\"label\": \"joy\"}\n").unwrap();
        assert_eq!(value["label"], "joy");
    }

    #[test]
    fn rejects_non_json_and_non_objects() {
        assert!(matches!(
            ProcessClassifier::parse_output(b"Traceback (most recent call last)"),
            Err(ClassifierError::Output(_))
        ));
        assert!(matches!(
            ProcessClassifier::parse_output(b"[1, 2]"),
            Err(ClassifierError::Output(_))
        ));
    }

    #[test]
    fn error_object_is_a_failure() {
        assert!(matches!(
            ProcessClassifier::parse_output(b"{\"error\": \"no text supplied\"}"),
            Err(ClassifierError::Output(_))
        ));
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let classifier = ProcessClassifier::new("folio-no-such-classifier", Vec::new());
        let err = classifier
            .classify(&RequestContext::new(), "happy")
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn relays_stdout_json() {
        // The text lands in $0 of the script and is ignored.
        let classifier = ProcessClassifier::new(
            "sh",
            vec!["-c".to_string(), r#"printf '{"label":"love"}'"#.to_string()],
        );
        let value = classifier
            .classify(&RequestContext::new(), "I adore this")
            .await
            .unwrap();
        assert_eq!(value, serde_json::json!({ "label": "love" }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn text_is_passed_as_last_argument() {
        let classifier = ProcessClassifier::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"printf '{"echo":"%s"}' "$1""#.to_string(),
                "sh".to_string(),
            ],
        );
        let value = classifier
            .classify(&RequestContext::new(), "so glad")
            .await
            .unwrap();
        assert_eq!(value["echo"], "so glad");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let classifier = ProcessClassifier::new(
            "sh",
            vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
        );
        let err = classifier
            .classify(&RequestContext::new(), "sad")
            .await
            .unwrap_err();
        match err {
            ClassifierError::Exit { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
