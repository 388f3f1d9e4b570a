//! REPL command parsing.

use jobtrack_core::application::ApplicationField;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(u64),
    Set(ApplicationField, String),
    Save,
    Cancel,
    Delete(u64),
    Details(u64),
    Summary,
    Reset,
    Help,
    Quit,
}

/// Command names offered by completion and hints.
pub const COMMAND_NAMES: [&str; 12] = [
    "list", "add", "edit", "set", "save", "cancel", "delete", "details", "summary", "reset",
    "help", "quit",
];

/// One line per command, shown by `help`.
pub const HELP_LINES: [(&str, &str); 12] = [
    ("list", "Show all applications"),
    ("add", "Add an application (prompts for each field)"),
    ("edit <id>", "Open an application for editing"),
    ("set <field> <value>", "Change a field of the open edit"),
    ("save", "Save the open edit"),
    ("cancel", "Discard the open edit"),
    ("delete <id>", "Delete an application"),
    ("details <id>", "Show or hide an application's details"),
    ("summary", "Count applications by status"),
    ("reset", "Replace everything with the sample data"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

impl Command {
    /// Parses one input line. Returns a user-facing message on failure.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "add" | "new" => Ok(Command::Add),
            "edit" => parse_id(rest).map(Command::Edit),
            "set" => parse_set(rest),
            "save" | "commit" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => parse_id(rest).map(Command::Delete),
            "details" | "toggle" => parse_id(rest).map(Command::Details),
            "summary" | "stats" => Ok(Command::Summary),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        }
    }
}

fn parse_id(arg: &str) -> Result<u64, String> {
    if arg.is_empty() {
        return Err("Missing application id".to_string());
    }
    arg.parse()
        .map_err(|_| format!("'{}' is not a valid application id", arg))
}

fn parse_set(rest: &str) -> Result<Command, String> {
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if field.is_empty() {
        return Err("Usage: set <field> <value>".to_string());
    }
    let field: ApplicationField = field.parse().map_err(|_| {
        format!(
            "Unknown field '{}'. Fields: companyName, jobTitle, dateApplied, status, details",
            field
        )
    })?;
    Ok(Command::Set(field, value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  LS "), Ok(Command::List));
        assert_eq!(Command::parse("add"), Ok(Command::Add));
        assert_eq!(Command::parse("save"), Ok(Command::Save));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(Command::parse("edit 3"), Ok(Command::Edit(3)));
        assert_eq!(Command::parse("rm 1700000000000"), Ok(Command::Delete(1_700_000_000_000)));
        assert_eq!(Command::parse("details 2"), Ok(Command::Details(2)));
        assert!(Command::parse("edit").is_err());
        assert!(Command::parse("delete abc").is_err());
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(
            Command::parse("set company Acme Corp"),
            Ok(Command::Set(ApplicationField::CompanyName, "Acme Corp".to_string()))
        );
        assert_eq!(
            Command::parse("set details"),
            Ok(Command::Set(ApplicationField::Details, String::new()))
        );
        assert!(Command::parse("set salary 100").is_err());
        assert!(Command::parse("set").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }

    #[test]
    fn test_every_name_parses() {
        for name in COMMAND_NAMES {
            let line = match name {
                "edit" | "delete" | "details" => format!("{} 1", name),
                "set" => "set status Offer".to_string(),
                _ => name.to_string(),
            };
            assert!(Command::parse(&line).is_ok(), "{} should parse", name);
        }
    }
}
