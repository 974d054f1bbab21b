//! Error logging sink.
//!
//! Thin wrapper over `tracing`: records an error message together with an
//! optional piece of context (a file name, an object name, a value that
//! failed to parse). Installing a subscriber is left to the application.

/// Record an error `message`, optionally tagged with `context`.
pub fn log_error(message: &str, context: Option<&str>) {
    match context {
        Some(context) => tracing::error!(context, "{message}"),
        None => tracing::error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotkit_test_utils::CapturedLogs;

    #[test]
    fn message_without_context() {
        let logs = CapturedLogs::new();
        logs.capture(|| log_error("texture missing", None));
        let out = logs.contents();
        assert!(out.contains("ERROR"));
        assert!(out.contains("texture missing"));
        assert!(!out.contains("context"));
    }

    #[test]
    fn message_with_context() {
        let logs = CapturedLogs::new();
        logs.capture(|| log_error("cannot open", Some("level1.xml")));
        let out = logs.contents();
        assert!(out.contains("cannot open"));
        assert!(out.contains("context"));
        assert!(out.contains("level1.xml"));
    }
}
