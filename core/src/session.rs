use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::*;

/// Notifications a [`GameSession`] hands to its subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    BoardReady { token: SessionToken },
    AssemblyFailed { token: SessionToken, error: TriviaError },
    StaleResultDiscarded { token: SessionToken },
    ClueChanged { coords: Coord2, showing: Showing },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    Failed,
    Discarded,
}

impl PublishOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Published | Self::Failed => true,
            Self::Discarded => false,
        }
    }
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// Sole owner of the active board.
///
/// Every rebuild gets a fresh [`SessionToken`]; results are only accepted for
/// the newest token, so a slow assembly can never replace a newer board.
pub struct GameSession {
    config: BoardConfig,
    board: Option<Board>,
    token: SessionToken,
    loading: bool,
    last_error: Option<TriviaError>,
    listeners: Vec<Listener>,
}

impl GameSession {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: None,
            token: SessionToken::default(),
            loading: false,
            last_error: None,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&TriviaError> {
        self.last_error.as_ref()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Starts a new assembly attempt and supersedes any attempt still in flight.
    pub fn begin_rebuild(&mut self) -> SessionToken {
        self.token = self.token.next();
        self.loading = true;
        log::debug!("rebuild {} started", self.token);
        self.token
    }

    /// Hands in the result of the assembly started under `token`.
    ///
    /// Results for superseded tokens are dropped. A failed assembly keeps
    /// whatever board was active before.
    pub fn publish(&mut self, token: SessionToken, result: Result<Board>) -> PublishOutcome {
        if token != self.token {
            log::warn!("discarding result of {}, current rebuild is {}", token, self.token);
            emit(&mut self.listeners, &SessionEvent::StaleResultDiscarded { token });
            return PublishOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(board) => {
                log::debug!("board {} ready", token);
                self.board = Some(board);
                self.last_error = None;
                emit(&mut self.listeners, &SessionEvent::BoardReady { token });
                PublishOutcome::Published
            }
            Err(error) => {
                log::warn!("board assembly {} failed: {}", token, error);
                self.last_error = Some(error.clone());
                emit(
                    &mut self.listeners,
                    &SessionEvent::AssemblyFailed { token, error },
                );
                PublishOutcome::Failed
            }
        }
    }

    /// Assembles and publishes a board in one go. Suited to hosts where the
    /// session is driven by a single task.
    pub async fn rebuild<S: TriviaSource>(&mut self, source: &S, seed: u64) -> PublishOutcome {
        let token = self.begin_rebuild();
        let config = self.config;
        let result = assemble_board(source, &config, seed).await;
        self.publish(token, result)
    }

    /// Advances the clue at `coords` on the active board.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Reveal<'_>> {
        let Some(board) = self.board.as_mut() else {
            log::warn!("reveal at {:?} before any board was loaded", coords);
            return Err(TriviaError::InvalidCoordinate);
        };

        match board.reveal(coords) {
            Ok(reveal) => {
                if let Some(showing) = reveal.showing() {
                    emit(
                        &mut self.listeners,
                        &SessionEvent::ClueChanged { coords, showing },
                    );
                }
                Ok(reveal)
            }
            Err(err) => {
                log::warn!("ignoring reveal at {:?}: {}", coords, err);
                Err(err)
            }
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("token", &self.token)
            .field("loading", &self.loading)
            .field("last_error", &self.last_error)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn emit(listeners: &mut [Listener], event: &SessionEvent) {
    for listener in listeners.iter_mut() {
        listener(event);
    }
}
