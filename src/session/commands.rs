use crate::catalog::Category;
use crate::engine::ConversionError;
use crate::session::state::ConverterSession;
use std::str::FromStr;
use thiserror::Error;

/// One line of input for an interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Category(Category),
    From(String),
    To(String),
    // Raw text; validation happens in the engine
    Value(String),
    Swap,
    Units,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(String),

    #[error(transparent)]
    Invalid(#[from] ConversionError),
}

pub const HELP: &str = "\
commands:
  category <id>   switch category (length, temperature, area, weight)
  from <unit>     set the source unit
  to <unit>       set the target unit
  value <number>  set the input value
  swap            exchange source and target units
  units           list units of the active category
  show            print the current result and formula
  json            print the session as JSON
  help            show this message
  quit            leave";

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let required = |verb: &str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(verb.to_string()))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_lowercase().as_str() {
            "category" | "c" => Ok(SessionCommand::Category(required(verb)?.parse()?)),
            "from" => Ok(SessionCommand::From(required(verb)?)),
            "to" => Ok(SessionCommand::To(required(verb)?)),
            // Empty value is legal and shows the validation message
            "value" | "v" => Ok(SessionCommand::Value(rest.to_string())),
            "swap" => Ok(SessionCommand::Swap),
            "units" => Ok(SessionCommand::Units),
            "show" => Ok(SessionCommand::Show),
            "json" => Ok(SessionCommand::Json),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Err(CommandError::UnknownCommand(verb.to_string())),
        }
    }
}

impl SessionCommand {
    /// Whether the command changes session state
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            SessionCommand::Category(_)
                | SessionCommand::From(_)
                | SessionCommand::To(_)
                | SessionCommand::Value(_)
                | SessionCommand::Swap
        )
    }

    /// Apply a mutating command; other commands leave the session alone
    pub fn apply(&self, session: &mut ConverterSession) {
        match self {
            SessionCommand::Category(category) => session.set_category(*category),
            SessionCommand::From(id) => session.set_source(id.as_str()),
            SessionCommand::To(id) => session.set_target(id.as_str()),
            SessionCommand::Value(text) => session.set_input(text.as_str()),
            SessionCommand::Swap => session.swap_units(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "category temperature".parse::<SessionCommand>(),
            Ok(SessionCommand::Category(Category::Temperature))
        );
        assert_eq!(
            "  from   km ".parse::<SessionCommand>(),
            Ok(SessionCommand::From("km".to_string()))
        );
        assert_eq!(
            "value -40".parse::<SessionCommand>(),
            Ok(SessionCommand::Value("-40".to_string()))
        );
        assert_eq!(
            "value".parse::<SessionCommand>(),
            Ok(SessionCommand::Value(String::new()))
        );
        assert_eq!("SWAP".parse::<SessionCommand>(), Ok(SessionCommand::Swap));
        assert_eq!("q".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SessionCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "to".parse::<SessionCommand>(),
            Err(CommandError::MissingArgument("to".to_string()))
        );
        assert_eq!(
            "jump 3".parse::<SessionCommand>(),
            Err(CommandError::UnknownCommand("jump".to_string()))
        );
        assert!(matches!(
            "category volume".parse::<SessionCommand>(),
            Err(CommandError::Invalid(ConversionError::UnknownCategory(_)))
        ));
    }

    #[test]
    fn test_apply_drives_session() {
        let mut session = ConverterSession::new();
        for line in ["category weight", "value 2", "to pound"] {
            let command: SessionCommand = line.parse().unwrap();
            assert!(command.is_mutation());
            command.apply(&mut session);
        }

        assert_eq!(session.source(), "kg");
        assert_eq!(session.target(), "pound");
        assert_eq!(session.result(), "4.40924");
        assert_eq!(session.formula(), "1 Kilogram = 2.20462 Pound");

        let before = session.snapshot();
        SessionCommand::Show.apply(&mut session);
        assert!(!SessionCommand::Show.is_mutation());
        assert_eq!(session.snapshot(), before);
    }
}
