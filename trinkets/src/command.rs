use std::path::PathBuf;
use std::sync::Arc;

use trinkets_config::{Messages, TrinketsConfig};

use crate::manager::TrinketManager;
use crate::player::TrinketPlayer;

pub const NAMES: [&str; 1] = ["trinkets"];
pub const DESCRIPTION: &str = "Opens the trinket menu and manages the configuration.";

const PERMISSION_RELOAD: &str = "trinkets.reload";

pub enum CommandSender {
    Console,
    Player(Arc<dyn TrinketPlayer>),
}

impl CommandSender {
    pub async fn send_message(&self, message: &str) {
        match self {
            Self::Console => log::info!("{message}"),
            Self::Player(player) => player.send_message(message).await,
        }
    }

    pub fn has_permission(&self, node: &str) -> bool {
        match self {
            Self::Console => true,
            Self::Player(player) => player.has_permission(node),
        }
    }
}

/// The `/trinkets` executor: `reload` re-reads both files from the config
/// directory, `gui`/`open` opens the sender's menu.
pub struct TrinketsCommand {
    manager: Arc<TrinketManager>,
    config_dir: PathBuf,
}

impl TrinketsCommand {
    pub fn new(manager: Arc<TrinketManager>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            manager,
            config_dir: config_dir.into(),
        }
    }

    pub async fn execute(&self, sender: &CommandSender, args: &[&str]) -> bool {
        let Some(subcommand) = args.first() else {
            self.send(sender, "command_usage").await;
            return false;
        };

        match subcommand.to_lowercase().as_str() {
            "reload" => {
                if !sender.has_permission(PERMISSION_RELOAD) {
                    self.send(sender, "no_permission").await;
                    return false;
                }

                let config = TrinketsConfig::load(&self.config_dir.join("config.toml"));
                let messages = Messages::load(&self.config_dir.join("messages.toml"));
                match (config, messages) {
                    (Ok(config), Ok(messages)) => {
                        self.manager.reload(config, messages).await;
                        self.send(sender, "config_reloaded").await;
                        true
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        log::error!("{err}");
                        self.send(sender, "config_reload_failed").await;
                        false
                    }
                }
            }
            "gui" | "open" => {
                let CommandSender::Player(player) = sender else {
                    self.send(sender, "player_only_command").await;
                    return false;
                };
                self.manager.open_menu(player).await;
                true
            }
            _ => {
                self.send(sender, "command_usage").await;
                false
            }
        }
    }

    pub fn tab_complete(&self, sender: &CommandSender, args: &[&str]) -> Vec<String> {
        if args.len() > 1 {
            return Vec::new();
        }
        let mut completions = Vec::new();
        if sender.has_permission(PERMISSION_RELOAD) {
            completions.push("reload".to_string());
        }
        completions.push("gui".to_string());
        completions.push("open".to_string());
        completions
    }

    async fn send(&self, sender: &CommandSender, key: &str) {
        sender.send_message(&self.manager.message(key).await).await;
    }
}
