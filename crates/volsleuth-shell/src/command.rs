/// Input commands for the text frontend.
///
/// Row and volume numbers are 1-based as displayed; they are converted to
/// 0-based indices here so the state machine never sees display numbering.
use std::path::PathBuf;
use thiserror::Error;
use volsleuth_core::analysis::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-run the query for the current directory now.
    Refresh,
    /// Select a volume by index.
    Volume(usize),
    NextVolume,
    PrevVolume,
    /// Enter a row, or the row under the cursor.
    Enter(Option<usize>),
    /// Go up one directory.
    Back,
    /// Move the cursor by the given number of rows.
    Move(isize),
    /// Select a category.
    Category(Category),
    NextCategory,
    /// Stage a row, or the row under the cursor, for deletion.
    Delete(Option<usize>),
    Confirm,
    Cancel,
    /// Show per-category totals for the current directory.
    Breakdown,
    /// Write the current listing to a CSV file.
    Export(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseError::Empty);
        };
        let arg = words.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "ls" | "refresh" | "r" => Self::Refresh,
            "vol" | "v" => match arg {
                Some("next") | Some("+") => Self::NextVolume,
                Some("prev") | Some("-") => Self::PrevVolume,
                Some(n) => Self::Volume(row_index(n).ok_or(ParseError::BadArgument {
                    command: "vol",
                    expected: "a volume number, 'next' or 'prev'",
                })?),
                None => Self::NextVolume,
            },
            "cd" | "enter" => match arg {
                Some("..") => Self::Back,
                Some(n) => Self::Enter(Some(row_index(n).ok_or(ParseError::BadArgument {
                    command: "cd",
                    expected: "a row number or '..'",
                })?)),
                None => Self::Enter(None),
            },
            "back" | ".." | "b" => Self::Back,
            "j" | "down" => Self::Move(step(arg)),
            "k" | "up" => Self::Move(-step(arg)),
            "cat" | "filter" | "c" => match arg {
                Some("next") | None => Self::NextCategory,
                Some(name) => Self::Category(name.parse().map_err(|_| ParseError::BadArgument {
                    command: "cat",
                    expected: "All, Games, MP3, OGG, Photo or Video",
                })?),
            },
            "rm" | "del" | "delete" => match arg {
                Some(n) => Self::Delete(Some(row_index(n).ok_or(ParseError::BadArgument {
                    command: "rm",
                    expected: "a row number",
                })?)),
                None => Self::Delete(None),
            },
            "yes" | "y" => Self::Confirm,
            "no" | "n" => Self::Cancel,
            "stats" | "breakdown" => Self::Breakdown,
            "export" => match arg {
                Some(path) => Self::Export(PathBuf::from(path)),
                None => {
                    return Err(ParseError::BadArgument {
                        command: "export",
                        expected: "a file path",
                    })
                }
            },
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// Convert a 1-based display number into a 0-based index.
fn row_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok()?.checked_sub(1)
}

fn step(arg: Option<&str>) -> isize {
    arg.and_then(|a| a.parse::<isize>().ok()).unwrap_or(1)
}

/// One-screen command reference.
pub const HELP: &str = "\
Commands:
  ls | refresh          rescan the current directory now
  vol N | vol next|prev select a volume
  cd N | cd             enter row N (or the row under the cursor)
  cd .. | back          go up one directory
  j [N] | k [N]         move the cursor down / up
  cat NAME | cat        select a category (All, Games, MP3, OGG, Photo, Video) or cycle
  rm N | rm             stage row N (or the cursor row) for deletion
  yes | no              confirm / cancel a staged deletion
  stats                 per-category totals for the current directory
  export FILE           write the current listing as CSV
  help                  show this text
  quit                  exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_one_based() {
        assert_eq!(Command::parse("cd 1"), Ok(Command::Enter(Some(0))));
        assert_eq!(Command::parse("rm 3"), Ok(Command::Delete(Some(2))));
        assert_eq!(Command::parse("vol 2"), Ok(Command::Volume(1)));
    }

    #[test]
    fn test_row_zero_is_rejected() {
        assert!(matches!(
            Command::parse("cd 0"),
            Err(ParseError::BadArgument { command: "cd", .. })
        ));
    }

    #[test]
    fn test_navigation_aliases() {
        assert_eq!(Command::parse("cd .."), Ok(Command::Back));
        assert_eq!(Command::parse("back"), Ok(Command::Back));
        assert_eq!(Command::parse("cd"), Ok(Command::Enter(None)));
        assert_eq!(Command::parse("vol next"), Ok(Command::NextVolume));
        assert_eq!(Command::parse("vol -"), Ok(Command::PrevVolume));
    }

    #[test]
    fn test_cursor_moves() {
        assert_eq!(Command::parse("j"), Ok(Command::Move(1)));
        assert_eq!(Command::parse("k 5"), Ok(Command::Move(-5)));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Command::parse("cat mp3"), Ok(Command::Category(Category::Mp3)));
        assert_eq!(Command::parse("cat"), Ok(Command::NextCategory));
        assert!(Command::parse("cat flac").is_err());
    }

    #[test]
    fn test_misc() {
        assert_eq!(Command::parse("  QUIT "), Ok(Command::Quit));
        assert_eq!(Command::parse(""), Err(ParseError::Empty));
        assert_eq!(
            Command::parse("export out.csv"),
            Ok(Command::Export(PathBuf::from("out.csv")))
        );
        assert!(matches!(Command::parse("frobnicate"), Err(ParseError::Unknown(_))));
    }
}
