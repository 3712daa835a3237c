use crate::bot::config;
use crate::bot::messages;
use crate::bot::store::{InMemoryStore, KeyValueStore};
use crate::bot::update::{Button, Chat, Reply, User};
use crate::calculator;
use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use rand::Rng;

pub(crate) type KarmaStore = InMemoryStore<i64, i64>;
pub(crate) type PollStore = InMemoryStore<i64, Poll>;
pub(crate) type PreferenceStore = InMemoryStore<i64, String>;

/// An active poll, at most one per chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub question: String,
    pub options: Vec<String>,
    pub votes: Vec<u32>,
}

pub(crate) fn start() -> Result<Reply> {
    Ok(Reply::text(config::WELCOME_MESSAGE))
}

pub(crate) fn help() -> Result<Reply> {
    Ok(Reply::text(config::help_message()))
}

pub(crate) fn roll(rng: &mut impl Rng) -> Result<Reply> {
    let rolled: u32 = rng.gen_range(1..=6);
    Ok(Reply::text(format!("🎲 You rolled a {}!", rolled)))
}

/// Runs the arithmetic evaluator over the post-command text.
///
/// Every [`calculator::CalculatorError`] kind collapses into the same
/// user-facing message; the kind itself only goes to the log.
pub(crate) fn calc(expression: &str) -> Result<Reply> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Ok(Reply::text(config::CALC_USAGE));
    }
    match calculator::calculate(expression) {
        Ok(value) => Ok(Reply::text(calculator::format_result(expression, value))),
        Err(error) => {
            log::info!("Rejected expression {:?}: {}.", expression, error);
            Ok(Reply::text(config::INVALID_EXPRESSION))
        }
    }
}

pub(crate) fn karma(store: &KarmaStore, user: &User) -> Result<Reply> {
    let points = store.get(&user.id).copied().unwrap_or(0);
    Ok(Reply::text(format!(
        "You have {} karma point{}.",
        points,
        if points == 1 { "" } else { "s" }
    )))
}

pub(crate) fn give(store: &mut KarmaStore, from: &User, reply_to: Option<&User>) -> Result<Reply> {
    let target = match reply_to {
        None => return Ok(Reply::text(config::GIVE_USAGE)),
        Some(target) => target,
    };
    if target.id == from.id {
        return Ok(Reply::text("You can't give karma to yourself! 😏"));
    }
    let points = store.get(&target.id).copied().unwrap_or(0) + 1;
    store.set(target.id, points);
    Ok(Reply::text(format!(
        "Gave 1 karma to {} (now {}).",
        target.display_name(),
        points
    )))
}

pub(crate) fn poll(store: &mut PollStore, chat: &Chat, arguments: &[String]) -> Result<Reply> {
    let (question, options) = match arguments.split_first() {
        Some((question, options)) if options.len() >= 2 => (question.clone(), options.to_vec()),
        _ => return Ok(Reply::text(config::POLL_USAGE)),
    };

    let keyboard = options
        .iter()
        .enumerate()
        .map(|(index, option)| vec![Button::new(option.clone(), format!("vote_{}", index))])
        .collect();
    let listing = options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}. {}", index + 1, option))
        .join("\n");

    let votes = vec![0; options.len()];
    store.set(
        chat.id,
        Poll {
            question: question.clone(),
            options,
            votes,
        },
    );

    Ok(Reply::with_keyboard(
        format!("📊 {}\n\n{}", question, listing),
        keyboard,
    ))
}

pub(crate) fn vote(store: &mut PollStore, chat: &Chat, data: &str) -> Result<Reply> {
    let index: usize = data
        .strip_prefix("vote_")
        .ok_or_else(|| anyhow!("Not a vote callback: {:?}", data))?
        .parse()
        .with_context(|| format!("Malformed vote callback: {:?}", data))?;

    let poll = match store.get(&chat.id) {
        None => return Ok(Reply::text("There's no active poll in this chat.")),
        Some(poll) => poll,
    };
    let mut poll = poll.clone();
    let tally = poll
        .votes
        .get_mut(index)
        .with_context(|| format!("Vote for missing option {}", index))?;
    *tally += 1;
    store.set(chat.id, poll);

    Ok(Reply::text("Vote registered!"))
}

pub(crate) fn preferences() -> Result<Reply> {
    let keyboard = vec![
        vec![
            Button::new("🔔 Notifications on", "pref_notifications_on"),
            Button::new("🔕 Notifications off", "pref_notifications_off"),
        ],
        vec![
            Button::new("🇬🇧 English", "lang_en"),
            Button::new("🇪🇸 Español", "lang_es"),
        ],
    ];
    Ok(Reply::with_keyboard("Preferences menu", keyboard))
}

pub(crate) fn preference_callback(
    store: &mut PreferenceStore,
    user: &User,
    data: &str,
) -> Result<Reply> {
    if !data.starts_with("pref_") && !data.starts_with("lang_") {
        return Err(anyhow!("Not a preference callback: {:?}", data));
    }
    store.set(user.id, data.to_string());
    Ok(Reply::text("Preference updated!"))
}

pub(crate) fn chat_message(text: &str, rng: &mut impl Rng) -> Result<Reply> {
    Ok(Reply::text(messages::response_for_text(text, rng)))
}
