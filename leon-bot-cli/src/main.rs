use anyhow::Result;
use clap::Parser;
use leon_bot::bot::update::{
    Button, CallbackQuery, Chat, ChatKind, Message, Reply, Update, User,
};
use leon_bot::bot::Bot;
use std::io;
use std::io::{BufRead, Write};

/// Chats with Leon from the terminal
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The username to chat under
    #[clap(long, default_value = "local")]
    username: String,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut bot = Bot::new();
    let user = User {
        id: 1,
        username: Some(args.username),
    };
    let chat = Chat {
        id: 1,
        kind: ChatKind::Private,
    };

    let welcome = bot.handle_update(Update::Message(Message {
        from: user.clone(),
        chat: chat.clone(),
        text: "/start".to_string(),
        reply_to: None,
    }));
    let mut buttons = print_reply(&welcome)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let update = match parse_button_press(line, &buttons) {
            Some(button) => Update::Callback(CallbackQuery {
                from: user.clone(),
                chat: chat.clone(),
                data: button.callback_data.clone(),
            }),
            None => Update::Message(Message {
                from: user.clone(),
                chat: chat.clone(),
                text: line.to_string(),
                reply_to: None,
            }),
        };

        let reply = bot.handle_update(update);
        buttons = print_reply(&reply)?;
    }

    Ok(())
}

/// Interprets `>N` as a press of the N-th button of the previous reply.
fn parse_button_press<'a>(line: &str, buttons: &'a [Button]) -> Option<&'a Button> {
    let number: usize = line.strip_prefix('>')?.trim().parse().ok()?;
    buttons.get(number.checked_sub(1)?)
}

/// Prints a reply and returns its buttons, numbered for `>N` input.
fn print_reply(reply: &Reply) -> Result<Vec<Button>> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", reply.text)?;

    let buttons: Vec<Button> = reply.keyboard.iter().flatten().cloned().collect();
    for (index, button) in buttons.iter().enumerate() {
        writeln!(stdout, "  [{}] {}", index + 1, button.label)?;
    }
    if !buttons.is_empty() {
        writeln!(stdout, "(answer with >N to press a button)")?;
    }
    stdout.flush()?;

    Ok(buttons)
}
