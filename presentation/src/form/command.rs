//! Slash command parsing for the interactive form

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Submit,
    Show,
    Set { field: String, value: String },
    Clients,
    Add(String),
    Remove(String),
    Bulk,
    Export(Option<PathBuf>),
    Import(PathBuf),
    Reload,
    Login(String),
    Clear,
    Help,
    Quit,
}

impl FormCommand {
    /// Parse a line starting with `/`.
    ///
    /// Arguments keep their inner spacing; only the ends are trimmed.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let required = |usage: &'static str| -> Result<String, CommandError> {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(usage))
            } else {
                Ok(rest.to_string())
            }
        };

        match name {
            "/submit" | "/send" => Ok(FormCommand::Submit),
            "/show" | "/form" => Ok(FormCommand::Show),
            "/set" => {
                let args = required("/set <field> <value>")?;
                let (field, value) = match args.split_once(char::is_whitespace) {
                    Some((field, value)) => (field.to_string(), value.trim().to_string()),
                    None => (args, String::new()),
                };
                Ok(FormCommand::Set { field, value })
            }
            "/clients" => Ok(FormCommand::Clients),
            "/add" => Ok(FormCommand::Add(required("/add <name>")?)),
            "/remove" | "/rm" => Ok(FormCommand::Remove(required("/remove <name>")?)),
            "/bulk" => Ok(FormCommand::Bulk),
            "/export" => Ok(FormCommand::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "/import" => Ok(FormCommand::Import(PathBuf::from(required(
                "/import <path>",
            )?))),
            "/reload" => Ok(FormCommand::Reload),
            "/login" => Ok(FormCommand::Login(required("/login <name>")?)),
            "/clear" => Ok(FormCommand::Clear),
            "/help" | "/h" | "/?" => Ok(FormCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(FormCommand::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_value_spacing() {
        assert_eq!(
            FormCommand::parse("/set topic  Error handling in Rust ").unwrap(),
            FormCommand::Set {
                field: "topic".to_string(),
                value: "Error handling in Rust".to_string(),
            }
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        assert_eq!(
            FormCommand::parse("/set details").unwrap(),
            FormCommand::Set {
                field: "details".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            FormCommand::parse("/add").unwrap_err(),
            CommandError::MissingArgument("/add <name>")
        );
        assert_eq!(
            FormCommand::parse("/import   ").unwrap_err().to_string(),
            "Usage: /import <path>"
        );
    }

    #[test]
    fn test_export_path_optional() {
        assert_eq!(FormCommand::parse("/export").unwrap(), FormCommand::Export(None));
        assert_eq!(
            FormCommand::parse("/export out/clients.json").unwrap(),
            FormCommand::Export(Some(PathBuf::from("out/clients.json")))
        );
    }

    #[test]
    fn test_aliases_and_unknown() {
        assert_eq!(FormCommand::parse("/q").unwrap(), FormCommand::Quit);
        assert_eq!(FormCommand::parse("/?").unwrap(), FormCommand::Help);
        assert_eq!(
            FormCommand::parse("/models").unwrap_err(),
            CommandError::Unknown("/models".to_string())
        );
    }
}
