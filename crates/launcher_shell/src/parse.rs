//! Input line classification.

use launcher_contract::{
    CommandKind, NetworkCommandKind, ParsedCommand, ParsedLine, ShellError, SpecialCommand,
    SystemAction,
};

/// Message reported when a general command has no argument part.
pub const MISSING_ARGUMENTS: &str = "Error: Command requires two arguments (type and path).";

/// Classifies one raw input line.
///
/// Whole-line specials win over power commands, which win over everything else. Network
/// diagnostics keep their remainder unsplit; every other command splits its remainder on single
/// spaces with no quoting.
///
/// # Errors
///
/// Returns a parse error when a general command has no argument part or names an unknown
/// command word.
pub fn parse_line(raw: &str) -> Result<ParsedLine, ShellError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(ParsedLine::Empty);
    }
    if let Some(command) = SpecialCommand::from_line(line) {
        return Ok(ParsedLine::Special { command });
    }
    if let Some(action) = SystemAction::from_line(line) {
        return Ok(ParsedLine::System { action });
    }

    let Some((word, rest)) = line.split_once(char::is_whitespace) else {
        return Err(ShellError::parse(MISSING_ARGUMENTS));
    };
    let command_word = word.to_lowercase();
    let rest = rest.trim();

    if let Some(command) = NetworkCommandKind::from_word(&command_word) {
        return Ok(ParsedLine::Network {
            command,
            raw: rest.to_string(),
        });
    }

    let kind = CommandKind::from_word(&command_word).ok_or_else(|| {
        ShellError::parse(format!("Error: Unknown command type '{command_word}'."))
    })?;
    Ok(ParsedLine::Command(ParsedCommand {
        kind,
        command_word,
        arguments: rest.split(' ').map(str::to_string).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use launcher_contract::ShellErrorCode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn command(kind: CommandKind, word: &str, arguments: &[&str]) -> ParsedLine {
        ParsedLine::Command(ParsedCommand {
            kind,
            command_word: word.to_string(),
            arguments: arguments.iter().map(|arg| arg.to_string()).collect(),
        })
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_line(""), Ok(ParsedLine::Empty));
        assert_eq!(parse_line(" \t "), Ok(ParsedLine::Empty));
    }

    #[test]
    fn specials_and_power_words_match_whole_line_ignoring_case() {
        assert_eq!(
            parse_line("  HELP "),
            Ok(ParsedLine::Special {
                command: SpecialCommand::Help
            })
        );
        assert_eq!(
            parse_line("ShowThemes"),
            Ok(ParsedLine::Special {
                command: SpecialCommand::ShowThemes
            })
        );
        assert_eq!(
            parse_line("sleep"),
            Ok(ParsedLine::System {
                action: SystemAction::Sleep
            })
        );
    }

    #[test]
    fn every_known_word_with_one_argument_parses_to_its_kind() {
        for kind in CommandKind::ALL {
            let line = format!("{} target", kind.word());
            assert_eq!(
                parse_line(&line),
                Ok(command(kind, kind.word(), &["target"])),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn single_token_lines_are_usage_errors() {
        for line in ["website", "open", "unknownword", "traceroute", "  ping  "] {
            let err = parse_line(line).expect_err("single token should fail");
            assert_eq!(err.code, ShellErrorCode::Parse);
            assert_eq!(err.message, MISSING_ARGUMENTS);
        }
    }

    #[test]
    fn unknown_command_word_is_named_lower_cased() {
        let err = parse_line("Launch rockets").expect_err("unknown word");
        assert_eq!(err.message, "Error: Unknown command type 'launch'.");
    }

    #[test]
    fn rest_splits_on_single_spaces_without_quoting() {
        assert_eq!(
            parse_line("RUN echo  \"a b\""),
            Ok(command(CommandKind::Run, "run", &["echo", "", "\"a", "b\""]))
        );
        assert_eq!(
            parse_line("open\t  notepad"),
            Ok(command(CommandKind::Open, "open", &["notepad"]))
        );
    }

    #[test]
    fn network_commands_keep_raw_remainder() {
        assert_eq!(
            parse_line("portscan  example.com 20   25"),
            Ok(ParsedLine::Network {
                command: NetworkCommandKind::Portscan,
                raw: "example.com 20   25".to_string(),
            })
        );
        assert_eq!(
            parse_line("TraceRoute 10.0.0.1"),
            Ok(ParsedLine::Network {
                command: NetworkCommandKind::Traceroute,
                raw: "10.0.0.1".to_string(),
            })
        );
    }
}
