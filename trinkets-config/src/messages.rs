use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Chat strings, all prefixed on lookup. Keys missing from the file resolve
/// to a visible "Message not found" marker instead of failing.
#[derive(Deserialize, Clone, Debug)]
pub struct Messages {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(flatten)]
    pub entries: BTreeMap<String, String>,
}

fn default_prefix() -> String {
    "[Trinkets] ".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        for (key, text) in [
            ("command_usage", "Usage: /trinkets <reload|gui|open>"),
            ("config_reloaded", "Configuration reloaded."),
            ("config_reload_failed", "Reload failed; keeping the previous configuration."),
            ("no_permission", "You do not have permission to do that."),
            ("player_only_command", "This command can only be used by players."),
        ] {
            entries.insert(key.to_string(), text.to_string());
        }
        Self {
            prefix: default_prefix(),
            entries,
        }
    }
}

impl Messages {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::load_toml(path)
    }

    pub fn message(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => format!("{}{}", self.prefix, text),
            None => format!("{}Message not found: {}", self.prefix, key),
        }
    }
}
