//! Numbered text menu for exploring a network.
//!
//! The menu reads whitespace-separated tokens, so a choice and its arguments
//! may share a line (`4 alice carol`) or be typed one per prompt. The load
//! option reads a whole line for the file name and falls back to
//! [`DEFAULT_NETWORK_FILE`] when that line is blank.
//!
//! End of input ends the session the same way as choosing Exit.

use crate::algorithms::{
    connected_components, recommend_scored, shortest_path, top_by_degree,
    DEFAULT_MAX_RECOMMENDATIONS,
};
use crate::app::Session;
use crate::config::{DEFAULT_CENTRALITY_TOP, DEFAULT_NETWORK_FILE};
use crate::output::{self, color};
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "\
========== SOCIAL NETWORK ANALYZER ==========
1. Load Network from File
2. Display Network Statistics
3. Show Degree Centrality
4. Find Shortest Path
5. Show Connected Components
6. Get Friend Recommendations
7. Exit
============================================";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Load,
    Statistics,
    Centrality,
    ShortestPath,
    Components,
    Recommendations,
    Exit,
}

impl Choice {
    fn from_number(n: i64) -> Option<Self> {
        Some(match n {
            1 => Self::Load,
            2 => Self::Statistics,
            3 => Self::Centrality,
            4 => Self::ShortestPath,
            5 => Self::Components,
            6 => Self::Recommendations,
            7 => Self::Exit,
            _ => return None,
        })
    }

    fn needs_network(self) -> bool {
        !matches!(self, Self::Load | Self::Exit)
    }
}

/// Token reader over line-oriented input.
///
/// Holds the current line and a byte cursor into it, so the unread rest of
/// a line is kept exactly as typed.
struct Prompter<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Prompter<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                self.pos = start + len;
                return Ok(Some(self.line[start..self.pos].to_string()));
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    /// Rest of the current line, or the next line if nothing is left.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let rest = self.line[self.pos..].trim_start();
        if !rest.is_empty() {
            let rest = rest.to_string();
            self.discard_line();
            return Ok(Some(rest));
        }
        if !self.fill()? {
            return Ok(None);
        }
        let line = std::mem::take(&mut self.line);
        self.discard_line();
        Ok(Some(line))
    }

    fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }

    /// Replace the current line with the next one. Returns `false` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn fill(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            self.discard_line();
            return Ok(false);
        }
        self.line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.pos = 0;
        Ok(true)
    }
}

/// Run the menu until the user exits or input ends.
///
/// # Errors
///
/// Returns an error only when reading input or writing output fails.
/// Load failures and unknown users are reported in the output and the menu
/// keeps going.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    let mut prompter = Prompter::new(input);

    writeln!(out, "Welcome to Social Network Analyzer!")?;

    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        write!(out, "Enter choice: ")?;
        out.flush()?;

        let Some(token) = prompter.next_token()? else {
            writeln!(out)?;
            return Ok(());
        };

        let Ok(number) = token.parse::<i64>() else {
            prompter.discard_line();
            let msg = color::error("Invalid input. Please enter a number.", session.config());
            writeln!(out, "{msg}")?;
            continue;
        };

        let Some(choice) = Choice::from_number(number) else {
            let msg = color::error("Invalid choice. Please try again.", session.config());
            writeln!(out, "{msg}")?;
            continue;
        };

        if choice.needs_network() && !session.is_loaded() {
            let msg = color::warning("Please load a network first.", session.config());
            writeln!(out, "{msg}")?;
            continue;
        }

        tracing::debug!(?choice, "Menu selection");

        let keep_going = match choice {
            Choice::Load => load(session, &mut prompter, out)?,
            Choice::Statistics => {
                output::write_statistics(out, session.graph(), session.config())?;
                true
            }
            Choice::Centrality => {
                let entries = top_by_degree(session.graph(), DEFAULT_CENTRALITY_TOP);
                output::write_centrality(out, &entries, DEFAULT_CENTRALITY_TOP, session.config())?;
                true
            }
            Choice::ShortestPath => path(session, &mut prompter, out)?,
            Choice::Components => {
                let components = connected_components(session.graph());
                output::write_components(out, &components, session.config())?;
                true
            }
            Choice::Recommendations => recommendations(session, &mut prompter, out)?,
            Choice::Exit => {
                writeln!(out, "Thank you for using Social Network Analyzer!")?;
                false
            }
        };

        if !keep_going {
            return Ok(());
        }
    }
}

/// Handle menu option 1. Returns `false` if input ended.
fn load<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R>,
    out: &mut W,
) -> io::Result<bool> {
    write!(
        out,
        "Enter filename (or press Enter for '{DEFAULT_NETWORK_FILE}'): "
    )?;
    out.flush()?;

    let Some(line) = prompter.next_line()? else {
        return Ok(false);
    };
    let filename = match line.trim() {
        "" => DEFAULT_NETWORK_FILE.to_string(),
        name => name.to_string(),
    };

    match session.load(&filename) {
        Ok(summary) => {
            output::write_load_summary(out, Path::new(&filename), &summary, session.config())?;
            output::write_statistics(out, session.graph(), session.config())?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "Menu load failed");
            let msg = format!("Error: Could not load file {filename}");
            writeln!(out, "{}", color::error(&msg, session.config()))?;
        }
    }
    Ok(true)
}

/// Handle menu option 4. Returns `false` if input ended.
fn path<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R>,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "\nEnter source user: ")?;
    out.flush()?;
    let Some(source) = prompter.next_token()? else {
        return Ok(false);
    };

    write!(out, "Enter destination user: ")?;
    out.flush()?;
    let Some(destination) = prompter.next_token()? else {
        return Ok(false);
    };

    let found = shortest_path(session.graph(), &source, &destination);
    output::write_path(out, &source, &destination, &found, session.config())?;
    Ok(true)
}

/// Handle menu option 6. Returns `false` if input ended.
fn recommendations<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R>,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "\nEnter user name: ")?;
    out.flush()?;
    let Some(user) = prompter.next_token()? else {
        return Ok(false);
    };

    let recs = recommend_scored(session.graph(), &user, DEFAULT_MAX_RECOMMENDATIONS);
    output::write_recommendations(out, &user, &recs, session.config())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use rstest::rstest;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn network_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"alice bob\nbob carol\nalice dave\n").unwrap();
        file
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn session() -> Session {
        Session::new(OutputConfig::new(false))
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_script(&mut session(), "7\n");

        assert!(out.starts_with("Welcome to Social Network Analyzer!"));
        assert!(out.contains("Thank you for using Social Network Analyzer!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_script(&mut session(), "");
        assert!(out.contains("Enter choice:"));
    }

    #[test]
    fn test_queries_require_loaded_network() {
        let out = run_script(&mut session(), "2\n3\n4\n5\n6\n7\n");
        assert_eq!(out.matches("Please load a network first.").count(), 5);
    }

    #[test]
    fn test_invalid_input() {
        let out = run_script(&mut session(), "abc\n9\n7\n");

        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_invalid_input_discards_rest_of_line() {
        // "x 7" must not be read as an exit request
        let out = run_script(&mut session(), "x 7\n2\n7\n");

        assert!(out.contains("Invalid input."));
        assert!(out.contains("Please load a network first."));
    }

    #[test]
    fn test_load_then_query() {
        let file = network_file();
        let script = format!(
            "1\n{}\n4\nalice\ncarol\n5\n6\nalice\n3\n7\n",
            file.path().display()
        );
        let mut session = session();

        let out = run_script(&mut session, &script);

        assert!(session.is_loaded());
        assert!(out.contains("Network loaded successfully from"));
        assert!(out.contains("Total Users: 4"));
        assert!(out.contains("Total Connections: 3"));
        assert!(out.contains("alice -> bob -> carol"));
        assert!(out.contains("Component 1 (Size: 4):"));
        assert!(out.contains("1. carol"));
        assert!(out.contains("--- Degree Centrality (Top 10) ---"));
    }

    #[test]
    fn test_arguments_on_same_line() {
        let file = network_file();
        let script = format!("1\n{}\n4 alice carol\n7\n", file.path().display());

        let out = run_script(&mut session(), &script);

        assert!(out.contains("alice -> bob -> carol"));
    }

    #[test]
    fn test_load_failure_is_reported() {
        let mut session = session();
        let out = run_script(&mut session, "1\n/no/such/dir/net.txt\n2\n7\n");

        assert!(out.contains("Error: Could not load file /no/such/dir/net.txt"));
        assert!(out.contains("Please load a network first."));
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_blank_filename_uses_default() {
        let out = run_script(&mut session(), "1\n\n7\n");
        assert!(out.contains("Error: Could not load file network.txt"));
    }

    #[test]
    fn test_filename_keeps_inner_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my  network.txt");
        std::fs::write(&path, "alice bob\n").unwrap();
        let script = format!("1 {}\n2\n7\n", path.display());
        let mut session = session();

        let out = run_script(&mut session, &script);

        assert!(session.is_loaded(), "output was: {out}");
        assert_eq!(session.source(), Some(path.as_path()));
        assert!(out.contains("Total Users: 2"));
    }

    #[test]
    fn test_invalid_utf8_is_invalid_input() {
        let mut out = Vec::new();
        run(&mut session(), Cursor::new(&b"\xff\n7\n"[..]), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Thank you for using Social Network Analyzer!"));
    }

    #[rstest]
    #[case("-1")]
    #[case("0")]
    #[case("8")]
    fn test_out_of_range_number_is_invalid_choice(#[case] choice: &str) {
        let out = run_script(&mut session(), &format!("{choice}\n7\n"));

        assert!(out.contains("Invalid choice. Please try again."));
        assert!(!out.contains("Invalid input."));
    }

    #[test]
    fn test_unknown_users_in_queries() {
        let file = network_file();
        let script = format!("1\n{}\n4\nalice\nzoe\n6\nzoe\n7\n", file.path().display());

        let out = run_script(&mut session(), &script);

        assert!(out.contains("No path found between alice and zoe"));
        assert!(out.contains("No recommendations available for zoe"));
    }
}
