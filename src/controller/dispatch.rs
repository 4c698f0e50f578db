use crate::detail::{DetailLoader, DetailRecord, SkinVariant};
use crate::error::AppError;
use crate::session::{RequestKind, RequestToken};
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, error};

/// One on-demand fetch, tagged with the token it must be reconciled against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub token: RequestToken,
}

impl FetchJob {
    pub fn run(self, loader: &DetailLoader) -> Completion {
        let id = self.token.champion_id.clone();
        match self.token.kind {
            RequestKind::Detail => Completion::Detail {
                result: loader.load_detail(&id),
                token: self.token,
            },
            RequestKind::Skins => Completion::Skins {
                result: loader.load_skins(&id),
                token: self.token,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Detail {
        token: RequestToken,
        result: Result<DetailRecord, AppError>,
    },
    Skins {
        token: RequestToken,
        result: Result<Vec<SkinVariant>, AppError>,
    },
}

impl Completion {
    pub fn token(&self) -> &RequestToken {
        match self {
            Completion::Detail { token, .. } | Completion::Skins { token, .. } => token,
        }
    }
}

/// Runs fetch jobs somewhere and reports their completions back to the owning loop.
pub trait Dispatcher {
    fn dispatch(&self, job: FetchJob);
}

/// Runs each job on its own thread and sends the completion over a channel.
pub struct ThreadDispatcher<T> {
    loader: DetailLoader,
    sink: Sender<T>,
}

impl<T> ThreadDispatcher<T>
where
    T: From<Completion> + Send + 'static,
{
    pub fn new(loader: DetailLoader, sink: Sender<T>) -> Self {
        ThreadDispatcher { loader, sink }
    }
}

impl<T> Dispatcher for ThreadDispatcher<T>
where
    T: From<Completion> + Send + 'static,
{
    fn dispatch(&self, job: FetchJob) {
        let loader = self.loader.clone();
        let sink = self.sink.clone();
        debug!(
            champion = %job.token.champion_id,
            kind = ?job.token.kind,
            "dispatching fetch"
        );
        thread::spawn(move || {
            let completion = job.run(&loader);
            if sink.send(T::from(completion)).is_err() {
                error!("event loop gone, completion discarded");
            }
        });
    }
}
