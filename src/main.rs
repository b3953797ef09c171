use anyhow::Result;
use env_logger::Env;
use tokio::io::BufReader;

use crate::loader::{HttpSource, Loader};
use crate::output::terminal::TerminalOutput;
use crate::output::{Message, QuizOutput};
use crate::session::Session;
use crate::settings::Settings;

mod commands;
mod deck;
mod loader;
mod output;
mod session;
mod settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    let source = HttpSource::new(&settings.source_url, settings.fetch_timeout);
    let loader = Loader::new(source, settings.dialect);

    let mut output = TerminalOutput::new(std::io::stdout());
    output.say(&Message::Loading)?;

    let mut session = Session::new();
    session.start(&loader).await?;

    commands::run(&mut session, BufReader::new(tokio::io::stdin()), output).await
}
