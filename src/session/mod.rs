use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::fmt;

use crate::deck::{Card, Deck};
use crate::loader::{LoadError, Loader, Source};


/// Deck plus cursor. Only ever built from a non-empty deck.
#[derive(Debug)]
pub struct ReadyState {
    deck: Deck,
    cursor: usize,
    revealed: bool,
}

impl ReadyState {
    fn new(deck: Deck) -> Self {
        ReadyState {
            deck,
            cursor: 0,
            revealed: false,
        }
    }

    fn reveal(&mut self) {
        self.revealed = true;
    }

    // Wraps to the first card, no reshuffle.
    fn advance(&mut self) {
        self.revealed = false;
        self.cursor = (self.cursor + 1) % self.deck.len();
    }

    fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }
}

#[derive(Debug)]
pub enum Status {
    Uninitialized,
    Loading,
    Ready(ReadyState),
    Empty,
    Failed(LoadError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Uninitialized => write!(f, "Uninitialized"),
            Status::Loading => write!(f, "Loading"),
            Status::Ready(state) => write!(f, "Ready ({} cards)", state.deck.len()),
            Status::Empty => write!(f, "Empty"),
            Status::Failed(e) => write!(f, "Failed ({})", e),
        }
    }
}

/// What the user gets to see: a deck is either on its way, usable, or not
/// coming. Empty and failed sessions look the same from here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Availability {
    Loading,
    Ready,
    Unavailable,
}

#[derive(Debug)]
pub struct Session {
    status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            status: Status::Uninitialized,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn availability(&self) -> Availability {
        match self.status {
            Status::Uninitialized | Status::Loading => Availability::Loading,
            Status::Ready(_) => Availability::Ready,
            Status::Empty | Status::Failed(_) => Availability::Unavailable,
        }
    }

    fn set_status(&mut self, status: Status) {
        info!("Entering session status: {}", status);
        self.status = status;
    }

    /// Loads the deck and settles on Ready, Empty or Failed. Load problems end
    /// up in the session status, not in the returned result.
    pub async fn start<S: Source>(&mut self, loader: &Loader<S>) -> Result<()> {
        match self.status {
            Status::Uninitialized => (),
            _ => return Err(anyhow!("Session was already started")),
        }

        self.set_status(Status::Loading);
        let status = match loader.load().await {
            Ok(deck) if deck.is_empty() => {
                warn!("Dataset has no rows besides the header");
                Status::Empty
            }
            Ok(deck) => Status::Ready(ReadyState::new(deck)),
            Err(e) => {
                error!("Could not load deck: {}", e);
                Status::Failed(e)
            }
        };
        self.set_status(status);
        Ok(())
    }

    pub fn reveal(&mut self) -> Result<()> {
        match &mut self.status {
            Status::Ready(state) => {
                state.reveal();
                debug!("Revealed card {}", state.cursor + 1);
                Ok(())
            }
            _ => Err(anyhow!("There is no card to reveal")),
        }
    }

    pub fn advance(&mut self) -> Result<()> {
        match &mut self.status {
            Status::Ready(state) => {
                state.advance();
                if let Some(card) = state.current_card() {
                    debug!("Moved to card {}: {:?}", state.cursor + 1, card.fields());
                }
                Ok(())
            }
            _ => Err(anyhow!("There is no card to move past")),
        }
    }

    /// One-based position of the current card and the deck size.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.status {
            Status::Ready(state) => Some((state.cursor + 1, state.deck.len())),
            _ => None,
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        match &self.status {
            Status::Ready(state) => state.current_card(),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        match &self.status {
            Status::Ready(state) => state.revealed,
            _ => false,
        }
    }
}
