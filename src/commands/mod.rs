use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::output::{render, Message, QuizOutput};
use crate::session::{Availability, Session};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Reveal,
    Advance,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(input: &str) -> Command {
        match input.trim().to_lowercase().as_str() {
            "" | "a" | "answer" => Command::Reveal,
            "n" | "next" => Command::Advance,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

/// Shows the session and feeds it commands, one per input line, until the
/// input ends or the user quits. A session without cards is shown once and
/// nothing is read.
pub async fn run<I, O>(session: &mut Session, input: I, mut output: O) -> Result<()>
where
    I: AsyncBufRead + Unpin,
    O: QuizOutput,
{
    render(session, &mut output)?;
    if session.availability() != Availability::Ready {
        return Ok(());
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        debug!("Received command: {:?}", command);
        match command {
            Command::Quit => break,
            Command::Reveal => {
                session.reveal()?;
                render(session, &mut output)?;
            }
            Command::Advance => {
                session.advance()?;
                render(session, &mut output)?;
            }
            Command::Unknown => output.say(&Message::Help)?,
        }
    }
    Ok(())
}
