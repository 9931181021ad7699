//! Blocking console prompts
//!
//! The quit-and-save flow talks to the player on the terminal after the
//! window is gone. [`Prompt`] keeps that flow testable.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented question/answer channel
pub trait Prompt {
    /// Show one line of text
    fn say(&mut self, line: &str);
    /// Block until the player enters a line; the line ending is stripped
    fn ask(&mut self) -> io::Result<String>;
}

/// Stdin/stdout prompt used by the binary
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn ask(&mut self) -> io::Result<String> {
        io::stdout().flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Prompt fed from a fixed list of answers, recording everything said
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
    pub questions_asked: usize,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            questions_asked: 0,
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask(&mut self) -> io::Result<String> {
        self.questions_asked += 1;
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left"))
    }
}

/// Read one answer line; a closed input is an error, not an empty answer
fn read_answer(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Ask for the name to record the score under
pub fn ask_player_name(prompt: &mut impl Prompt) -> io::Result<String> {
    prompt.say("Введите имя");
    prompt.ask()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending_keeps_inner_spaces() {
        assert_eq!(strip_line_ending("Y\n"), "Y");
        assert_eq!(strip_line_ending("Y\r\n"), "Y");
        assert_eq!(strip_line_ending(" Ann Lee \n"), " Ann Lee ");
    }

    #[test]
    fn test_read_answer_rejects_closed_input() {
        let err = read_answer(&mut &b""[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_answer_takes_one_line() {
        let mut input = &b"Alice\nY\n"[..];
        assert_eq!(read_answer(&mut input).unwrap(), "Alice");
        assert_eq!(read_answer(&mut input).unwrap(), "Y");
        // An empty line is still an answer
        assert_eq!(read_answer(&mut &b"\n"[..]).unwrap(), "");
    }

    #[test]
    fn test_scripted_prompt_runs_dry() {
        let mut prompt = ScriptedPrompt::new(["Alice"]);
        assert_eq!(ask_player_name(&mut prompt).unwrap(), "Alice");
        assert_eq!(prompt.transcript, vec!["Введите имя"]);
        assert!(prompt.ask().is_err());
    }
}
