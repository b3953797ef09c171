use anyhow::Result;

use crate::session::{Session, Status};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardView {
    pub position: usize,
    pub total: usize,
    pub prompt: String,
    pub hint: String,
    pub answer: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Loading,
    NoData,
    Card(CardView),
    Help,
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message) -> Result<()>;
}

impl CardView {
    pub fn from_session(session: &Session) -> Option<CardView> {
        let (position, total) = session.progress()?;
        let card = session.current_card()?;
        Some(CardView {
            position,
            total,
            prompt: card.prompt().to_owned(),
            hint: card.hint().to_owned(),
            answer: session.is_revealed().then(|| card.answer().to_owned()),
        })
    }
}

pub fn message_for(session: &Session) -> Message {
    match session.status() {
        Status::Uninitialized | Status::Loading => Message::Loading,
        Status::Empty | Status::Failed(_) => Message::NoData,
        Status::Ready(_) => match CardView::from_session(session) {
            Some(view) => Message::Card(view),
            None => Message::NoData,
        },
    }
}

pub fn render<O: QuizOutput>(session: &Session, output: &mut O) -> Result<()> {
    output.say(&message_for(session))
}
