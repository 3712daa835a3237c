//! Command descriptions and fixed bot messages.

use string_builder::Builder;

/// A command the bot understands, as listed by `/help`.
pub struct CommandDescription {
    pub name: &'static str,
    pub description: &'static str,
}

pub static COMMANDS: [CommandDescription; 8] = [
    CommandDescription {
        name: "start",
        description: "Start the bot",
    },
    CommandDescription {
        name: "help",
        description: "Show help message",
    },
    CommandDescription {
        name: "roll",
        description: "Roll a dice (1-6)",
    },
    CommandDescription {
        name: "calc",
        description: "Calculate a math expression (e.g., /calc 2+2)",
    },
    CommandDescription {
        name: "karma",
        description: "Check your karma points",
    },
    CommandDescription {
        name: "give",
        description: "Give karma to another user (reply to their message)",
    },
    CommandDescription {
        name: "poll",
        description: "Create a poll (e.g., /poll Question Option1 Option2 [Option3...])",
    },
    CommandDescription {
        name: "preferences",
        description: "Set your user preferences",
    },
];

pub static WELCOME_MESSAGE: &str = "\
👋 Hello! I'm Leon, your friendly bot assistant.
Use /help to see what I can do!";

pub static ERROR_MESSAGE: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

pub static INVALID_EXPRESSION: &str = "Sorry, I couldn't understand that expression. \
Please use simple math operations (e.g., /calc 2+2)";

pub static CALC_USAGE: &str = "Please provide an expression (e.g., /calc 2+2)";

pub static POLL_USAGE: &str =
    "Please provide a question and at least two options (e.g., /poll Question Option1 Option2)";

pub static GIVE_USAGE: &str = "Reply to someone's message with /give to give them karma";

/// Renders the `/help` text from the command table.
pub fn help_message() -> String {
    let mut builder = Builder::new(COMMANDS.len() * 2 + 2);
    builder.append("Here are the commands I understand:\n\n");
    for command in &COMMANDS {
        builder.append(format!("/{} - {}\n", command.name, command.description));
    }
    builder.append("\nYou can also send me any message and I'll chat with you!");
    builder
        .string()
        .unwrap_or_else(|_| ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_message_lists_every_command() {
        let help = help_message();
        for command in &COMMANDS {
            assert!(
                help.contains(&format!("/{} - ", command.name)),
                "missing /{}",
                command.name
            )
        }
    }
}
