use anyhow::Result;
use std::io::Write;

use crate::output::{Message, QuizOutput};

const DIVIDER: &str = "----------------------------------------";

pub struct TerminalOutput<W: Write> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn say(&mut self, message: &Message) -> Result<()> {
        writeln!(self.writer, "{}", format_message(message))?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn format_message(message: &Message) -> String {
    match message {
        Message::Loading => "Loading...".to_owned(),
        Message::NoData => "No data available.".to_owned(),
        Message::Help => "Commands: [enter] show answer, [n] next card, [q] quit".to_owned(),
        Message::Card(view) => {
            let mut lines = vec![
                format!("Card {} / {}", view.position, view.total),
                String::new(),
                view.prompt.clone(),
                view.hint.clone(),
                DIVIDER.to_owned(),
            ];
            match &view.answer {
                Some(answer) => lines.push(format!("Answer: {}", answer)),
                None => lines.push("[enter] show answer".to_owned()),
            }
            lines.push("[n] next card".to_owned());
            lines.join("\n")
        }
    }
}
