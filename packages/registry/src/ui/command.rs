//! Shell command parsing.

use thiserror::Error;

use crate::domain::{Grade, Member, MemberId, MemberName, ValueObjectError};

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  join <id> <name> [basic|vip]  register a member; the name may contain spaces
                                (default grade: basic)
  find <id>                     look up a member by id
  list                          list all members ordered by id
  dump                          print all members as JSON
  help                          show this help
  quit | exit                   leave the shell";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join(Member),
    Find(MemberId),
    List,
    Dump,
    Help,
    Quit,
}

/// Errors produced while parsing a command line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help' for a list of commands)")]
    Unknown(String),

    #[error("'{command}' requires <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error(transparent)]
    InvalidValue(#[from] ValueObjectError),
}

impl Command {
    /// Parse one line of shell input.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Err(CommandError::Empty);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "join" => {
                let id = required(tokens.next(), "join", "id")?;
                let mut words: Vec<&str> = tokens.by_ref().collect();
                // A trailing grade keyword is the grade; everything else is the name
                let trailing_grade = words.last().and_then(|last| last.parse::<Grade>().ok());
                let grade = match trailing_grade {
                    Some(grade) if words.len() > 1 => {
                        words.pop();
                        grade
                    }
                    _ => Grade::default(),
                };
                if words.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "join",
                        argument: "name",
                    });
                }
                Command::Join(Member::new(
                    MemberId::try_from(id)?,
                    MemberName::new(words.join(" "))?,
                    grade,
                ))
            }
            "find" => {
                let id = required(tokens.next(), "find", "id")?;
                Command::Find(MemberId::try_from(id)?)
            }
            "list" => Command::List,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if let Some(extra) = tokens.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }
        Ok(command)
    }
}

fn required<'a>(
    token: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    token.ok_or(CommandError::MissingArgument { command, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str, grade: Grade) -> Member {
        Member::new(
            MemberId::new(id),
            MemberName::new(name.to_string()).unwrap(),
            grade,
        )
    }

    #[test]
    fn test_parse_join_with_grade() {
        // テスト項目: グレード付きの join をパースできる
        // when (操作):
        let result = Command::parse("join 1 memberA vip");

        // then (期待する結果):
        assert_eq!(result, Ok(Command::Join(member(1, "memberA", Grade::Vip))));
    }

    #[test]
    fn test_parse_join_default_grade() {
        // テスト項目: グレードを省略すると basic になる
        let result = Command::parse("  JOIN 2 bob ");

        assert_eq!(result, Ok(Command::Join(member(2, "bob", Grade::Basic))));
    }

    #[test]
    fn test_parse_join_missing_name() {
        // テスト項目: 名前がない join はエラーになる
        let result = Command::parse("join 1");

        assert_eq!(
            result,
            Err(CommandError::MissingArgument {
                command: "join",
                argument: "name"
            })
        );
    }

    #[test]
    fn test_parse_join_invalid_id() {
        // テスト項目: 数値でない ID はエラーになる
        let result = Command::parse("join abc alice");

        assert_eq!(
            result,
            Err(CommandError::InvalidValue(
                ValueObjectError::MemberIdInvalidFormat("abc".to_string())
            ))
        );
    }

    #[test]
    fn test_parse_join_name_with_spaces() {
        // テスト項目: 空白を含む名前をそのまま会員名として扱える
        // when (操作):
        let result = Command::parse("join 1 John Smith");

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Join(member(1, "John Smith", Grade::Basic)))
        );
    }

    #[test]
    fn test_parse_join_name_with_spaces_and_grade() {
        // テスト項目: 末尾のグレード指定は名前に含まれない
        let result = Command::parse("join 1 John Smith VIP");

        assert_eq!(
            result,
            Ok(Command::Join(member(1, "John Smith", Grade::Vip)))
        );
    }

    #[test]
    fn test_parse_join_name_equal_to_grade_keyword() {
        // テスト項目: 名前が 1 語だけの場合はグレード名と同じでも名前として扱う
        let result = Command::parse("join 1 vip");

        assert_eq!(result, Ok(Command::Join(member(1, "vip", Grade::Basic))));
    }

    #[test]
    fn test_parse_find() {
        // テスト項目: find をパースできる
        assert_eq!(
            Command::parse("find 999"),
            Ok(Command::Find(MemberId::new(999)))
        );
        assert_eq!(
            Command::parse("find"),
            Err(CommandError::MissingArgument {
                command: "find",
                argument: "id"
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        // テスト項目: 引数なしのコマンドをパースできる
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("dump"), Ok(Command::Dump));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        // テスト項目: 空行・未知のコマンド・余分な引数はエラーになる
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("delete 1"),
            Err(CommandError::Unknown("delete".to_string()))
        );
        assert_eq!(
            Command::parse("list all"),
            Err(CommandError::UnexpectedArgument("all".to_string()))
        );
    }
}
