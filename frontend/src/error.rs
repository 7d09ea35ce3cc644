use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures setting up browser hooks. None of these reach the user; callers
/// log them and fall back to a static rendering.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("animated element is not mounted")]
    Detached,
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl DomError {
    pub fn listener(event: &'static str, value: JsValue) -> Self {
        DomError::Listener {
            event,
            reason: describe(&value),
        }
    }

    pub fn observer(value: JsValue) -> Self {
        DomError::Observer(describe(&value))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = DomError::Listener {
            event: "scroll",
            reason: "blocked".to_string(),
        };
        assert_eq!(err.to_string(), "failed to attach `scroll` listener: blocked");
        assert_eq!(
            DomError::Observer("unsupported".to_string()).to_string(),
            "failed to create intersection observer: unsupported"
        );
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
    }
}
