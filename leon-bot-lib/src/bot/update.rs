//! Platform-neutral stand-ins for the hosting chat SDK's update types.
//!
//! The bot core only needs to know who wrote what in which chat, and whether
//! an update is a plain message or an inline-button callback. Whatever
//! platform glue hosts the bot converts its own types into these.

/// A chat participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

impl User {
    /// The name used when addressing the user in replies and logs.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("no username")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
}

/// The conversation an update belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

/// A text message, optionally sent in reply to another user's message.
#[derive(Debug, Clone)]
pub struct Message {
    pub from: User,
    pub chat: Chat,
    pub text: String,
    pub reply_to: Option<User>,
}

/// A press of an inline keyboard button.
#[derive(Debug, Clone)]
pub struct CallbackQuery {
    pub from: User,
    pub chat: Chat,
    pub data: String,
}

/// One incoming event from the chat platform.
#[derive(Debug, Clone)]
pub enum Update {
    Message(Message),
    Callback(CallbackQuery),
}

/// An inline keyboard button: a visible label and the callback data it sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// The bot's answer to an update: text plus an optional inline keyboard,
/// given as rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Vec<Vec<Button>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            keyboard: vec![],
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Vec<Vec<Button>>) -> Self {
        Reply {
            text: text.into(),
            keyboard,
        }
    }
}
