//! Process configuration for the bot binary.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings that shape logging and tracing around a game session.
///
/// Arena rules are not configurable here; they come from the game header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    pub session_id: Option<String>,
    /// Directory for the session log file. No file log when unset.
    pub log_dir: Option<PathBuf>,
    /// Mirror logs to stderr. The host shows stderr as the bot's debug pane.
    pub stderr_log: bool,
    /// JSON-lines decision trace. No trace when unset.
    pub trace_file: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            log_dir: None,
            stderr_log: true,
            trace_file: None,
        }
    }
}

impl BotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_SESSION_ID` - Session identifier for the log file (default: `session_<unix secs>`)
    /// - `BOT_LOG_DIR` - Directory for the session log (default: none)
    /// - `BOT_STDERR_LOG` - Log to stderr (default: true)
    /// - `BOT_TRACE_FILE` - Path of the JSON-lines decision trace (default: none)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.session_id = lookup("BOT_SESSION_ID").filter(|id| !id.is_empty());
        config.log_dir = lookup("BOT_LOG_DIR").map(PathBuf::from);

        if let Some(enable) = read_var::<bool>(&lookup, "BOT_STDERR_LOG") {
            config.stderr_log = enable;
        }

        config.trace_file = lookup("BOT_TRACE_FILE").map(PathBuf::from);

        config
    }

    /// Session identifier, generated from the clock when not configured.
    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        })
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> BotConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        BotConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_log_to_stderr_only() {
        let config = config_from(&[]);
        assert_eq!(config, BotConfig::default());
        assert!(config.stderr_log);
        assert!(config.session_id().starts_with("session_"));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("BOT_SESSION_ID", "ladder-42"),
            ("BOT_LOG_DIR", "/tmp/bot-logs"),
            ("BOT_STDERR_LOG", "false"),
            ("BOT_TRACE_FILE", "/tmp/trace.jsonl"),
        ]);
        assert_eq!(config.session_id(), "ladder-42");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/bot-logs")));
        assert!(!config.stderr_log);
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/trace.jsonl")));
    }

    #[test]
    fn unparsable_flag_keeps_default() {
        let config = config_from(&[("BOT_STDERR_LOG", "sometimes")]);
        assert!(config.stderr_log);
    }
}
