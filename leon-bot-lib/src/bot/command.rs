/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Roll,
    Calc(String),
    Karma,
    Give,
    Poll(Vec<String>),
    Preferences,
    Unknown(String),
}

impl Command {
    /// Parses a command out of a message, or `None` for plain text.
    ///
    /// A command is a leading `/name`, optionally suffixed with `@botname`
    /// (chat platforms append the bot's handle in group chats). The rest of
    /// the message is the argument string.
    ///
    /// # Examples
    ///
    /// ```
    /// use leon_bot::bot::command::Command;
    ///
    /// let command = Command::parse("/calc 2 + 2").unwrap();
    /// assert_eq!(command, Command::Calc("2 + 2".to_string()));
    /// assert_eq!(Command::parse("hello there"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        let rest = text.strip_prefix('/')?;
        let mut words = rest.split_whitespace();
        let name = words.next()?;
        let name = name.split('@').next()?.to_lowercase();
        let arguments: Vec<String> = words.map(str::to_string).collect();

        let command = match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "roll" => Command::Roll,
            "calc" => Command::Calc(arguments.join(" ")),
            "karma" => Command::Karma,
            "give" => Command::Give,
            "poll" => Command::Poll(arguments),
            "preferences" => Command::Preferences,
            _ => Command::Unknown(name),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(Command::parse("what can you do"), None)
    }

    #[test]
    fn bare_slash_is_not_a_command() {
        assert_eq!(Command::parse("/"), None)
    }

    #[test]
    fn command_without_arguments_parses() {
        assert_eq!(Command::parse("/roll"), Some(Command::Roll))
    }

    #[test]
    fn bot_handle_suffix_is_stripped() {
        assert_eq!(Command::parse("/roll@leon_bot"), Some(Command::Roll))
    }

    #[test]
    fn calc_arguments_are_space_joined() {
        let command = Command::parse("/calc  2 +   2").unwrap();
        assert_eq!(command, Command::Calc("2 + 2".to_string()))
    }

    #[test]
    fn poll_arguments_stay_separate() {
        let command = Command::parse("/poll Lunch? Pizza Sushi").unwrap();
        let expected = Command::Poll(vec![
            "Lunch?".to_string(),
            "Pizza".to_string(),
            "Sushi".to_string(),
        ]);
        assert_eq!(command, expected)
    }

    #[test]
    fn unrecognized_name_parses_as_unknown() {
        let command = Command::parse("/weather London").unwrap();
        assert_eq!(command, Command::Unknown("weather".to_string()))
    }

    #[test]
    fn command_name_is_case_insensitive() {
        assert_eq!(Command::parse("/Roll"), Some(Command::Roll))
    }
}
