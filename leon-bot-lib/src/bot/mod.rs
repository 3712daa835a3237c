pub mod command;
pub mod config;
mod handlers;
pub mod messages;
pub mod store;
pub mod update;

use crate::bot::command::Command;
use crate::bot::handlers::{KarmaStore, PollStore, PreferenceStore};
use crate::bot::update::{CallbackQuery, Message, Reply, Update};
use anyhow::Result;
use rand::rngs::ThreadRng;

pub use handlers::Poll;

/// The assistant itself: command dispatch plus the process-lifetime stores.
///
/// Dispatch is synchronous and takes `&mut self`; whatever platform glue hosts
/// the bot is responsible for serializing access, the same way the original
/// hosting SDK did. The stores are volatile: karma, polls and preferences
/// only live as long as the process.
pub struct Bot {
    karma: KarmaStore,
    polls: PollStore,
    preferences: PreferenceStore,
    rng: ThreadRng,
}

impl Bot {
    pub fn new() -> Self {
        Bot {
            karma: KarmaStore::new(),
            polls: PollStore::new(),
            preferences: PreferenceStore::new(),
            rng: rand::thread_rng(),
        }
    }

    /// Answers one incoming update.
    ///
    /// Every failure path ends in a reply: handler errors are logged and
    /// collapsed into the uniform error message, never propagated to the
    /// host.
    ///
    /// # Examples
    ///
    /// ```
    /// use leon_bot::bot::update::{Chat, ChatKind, Message, Update, User};
    /// use leon_bot::bot::Bot;
    ///
    /// let mut bot = Bot::new();
    /// let update = Update::Message(Message {
    ///     from: User { id: 1, username: None },
    ///     chat: Chat { id: 1, kind: ChatKind::Private },
    ///     text: "/calc 2+2".to_string(),
    ///     reply_to: None,
    /// });
    /// let reply = bot.handle_update(update);
    /// assert_eq!(reply.text, "2+2 = 4");
    /// ```
    pub fn handle_update(&mut self, update: Update) -> Reply {
        let result = match update {
            Update::Message(message) => self.handle_message(message),
            Update::Callback(query) => self.handle_callback(query),
        };
        result.unwrap_or_else(|error| {
            log::error!("Update caused error: {:#}.", error);
            Reply::text(config::ERROR_MESSAGE)
        })
    }

    fn handle_message(&mut self, message: Message) -> Result<Reply> {
        log::info!(
            "Message received from user {} ({}) in chat {} (type: {:?}): {}.",
            message.from.id,
            message.from.display_name(),
            message.chat.id,
            message.chat.kind,
            message.text
        );

        let command = match Command::parse(&message.text) {
            None => return handlers::chat_message(&message.text, &mut self.rng),
            Some(command) => command,
        };
        log::info!(
            "Command {:?} used by user {} in chat {}.",
            command,
            message.from.id,
            message.chat.id
        );

        match command {
            Command::Start => handlers::start(),
            Command::Help => handlers::help(),
            Command::Roll => handlers::roll(&mut self.rng),
            Command::Calc(expression) => handlers::calc(&expression),
            Command::Karma => handlers::karma(&self.karma, &message.from),
            Command::Give => handlers::give(
                &mut self.karma,
                &message.from,
                message.reply_to.as_ref(),
            ),
            Command::Poll(arguments) => handlers::poll(&mut self.polls, &message.chat, &arguments),
            Command::Preferences => handlers::preferences(),
            Command::Unknown(name) => {
                log::warn!("Unknown command /{}.", name);
                Ok(Reply::text(format!(
                    "I don't know the command /{}. Use /help to see what I can do!",
                    name
                )))
            }
        }
    }

    fn handle_callback(&mut self, query: CallbackQuery) -> Result<Reply> {
        log::info!(
            "Callback {:?} from user {} in chat {}.",
            query.data,
            query.from.id,
            query.chat.id
        );

        if query.data.starts_with("vote_") {
            handlers::vote(&mut self.polls, &query.chat, &query.data)
        } else {
            handlers::preference_callback(&mut self.preferences, &query.from, &query.data)
        }
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod bot_tests {
    use super::*;
    use crate::bot::update::{Chat, ChatKind, User};
    use pretty_assertions::assert_eq;

    fn message(text: &str) -> Update {
        Update::Message(Message {
            from: User {
                id: 1,
                username: Some("ada".to_string()),
            },
            chat: Chat {
                id: 10,
                kind: ChatKind::Group,
            },
            text: text.to_string(),
            reply_to: None,
        })
    }

    fn callback(data: &str) -> Update {
        Update::Callback(CallbackQuery {
            from: User {
                id: 1,
                username: Some("ada".to_string()),
            },
            chat: Chat {
                id: 10,
                kind: ChatKind::Group,
            },
            data: data.to_string(),
        })
    }

    #[test]
    fn start_command_replies_with_welcome() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(message("/start"));
        assert_eq!(reply.text, config::WELCOME_MESSAGE)
    }

    #[test]
    fn calc_command_replies_with_result() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(message("/calc (2+3)*4"));
        assert_eq!(reply.text, "(2+3)*4 = 20")
    }

    #[test]
    fn poll_then_vote_round_trip() {
        let mut bot = Bot::new();

        let poll_reply = bot.handle_update(message("/poll Lunch? Pizza Sushi Ramen"));
        assert_eq!(poll_reply.keyboard.iter().flatten().count(), 3);

        let vote_reply = bot.handle_update(callback("vote_2"));
        assert_eq!(vote_reply.text, "Vote registered!")
    }

    #[test]
    fn preference_callback_replies_with_confirmation() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(callback("pref_notifications_on"));
        assert_eq!(reply.text, "Preference updated!")
    }

    #[test]
    fn unrecognized_callback_collapses_into_error_message() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(callback("unrelated_data"));
        assert_eq!(reply.text, config::ERROR_MESSAGE)
    }

    #[test]
    fn unknown_command_points_at_help() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(message("/frobnicate"));
        assert!(reply.text.contains("/frobnicate"));
        assert!(reply.text.contains("/help"))
    }

    #[test]
    fn plain_text_gets_a_chat_response() {
        let mut bot = Bot::new();
        let reply = bot.handle_update(message("hello there"));
        assert!(messages::GREETING_RESPONSES.contains(&reply.text.as_str()))
    }

    #[test]
    fn karma_persists_across_updates_within_one_process() {
        let mut bot = Bot::new();
        let giver = User {
            id: 2,
            username: Some("grace".to_string()),
        };
        let target = User {
            id: 1,
            username: Some("ada".to_string()),
        };
        bot.handle_update(Update::Message(Message {
            from: giver,
            chat: Chat {
                id: 10,
                kind: ChatKind::Group,
            },
            text: "/give".to_string(),
            reply_to: Some(target),
        }));

        let reply = bot.handle_update(message("/karma"));
        assert_eq!(reply.text, "You have 1 karma point.")
    }
}
