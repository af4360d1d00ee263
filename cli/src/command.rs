//! Line-command parsing for the terminal front end

use todo_core::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a task with the given title.
    Add(String),
    /// Flip the completion flag of a task.
    Toggle(TaskId),
    /// Delete a task.
    Remove(TaskId),
    /// Re-fetch the list from the service.
    List,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "add" => Command::Add(rest.to_string()),
        "toggle" | "done" => Command::Toggle(parse_id(rest)?),
        "rm" | "remove" => Command::Remove(parse_id(rest)?),
        "list" | "ls" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(Some(command))
}

fn parse_id(rest: &str) -> Result<TaskId, String> {
    rest.parse()
        .map_err(|_| format!("Expected a task id, got '{}'", rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_rest_of_line() {
        assert_eq!(
            parse("add Buy milk and eggs").unwrap(),
            Some(Command::Add("Buy milk and eggs".to_string()))
        );
    }

    #[test]
    fn test_parse_add_without_title() {
        assert_eq!(parse("add").unwrap(), Some(Command::Add(String::new())));
    }

    #[test]
    fn test_parse_mutations() {
        assert_eq!(parse("toggle 3").unwrap(), Some(Command::Toggle(3)));
        assert_eq!(parse("done 3").unwrap(), Some(Command::Toggle(3)));
        assert_eq!(parse("rm 2").unwrap(), Some(Command::Remove(2)));
        assert_eq!(parse(" list ").unwrap(), Some(Command::List));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_bad_id() {
        assert!(parse("toggle x").is_err());
        assert!(parse("rm").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse("frobnicate 1").is_err());
    }
}
