//! Background execution of solver requests

use super::contract::{SolveRequest, SolverError, SolverService};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

/// A committed row waiting to be solved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTicket {
    /// Monotonic submission number
    pub seq: u64,
    pub row: usize,
    pub request: SolveRequest,
}

/// Outcome of one ticket
#[derive(Debug)]
pub struct Completion {
    pub seq: u64,
    pub row: usize,
    pub result: Result<Vec<String>, SolverError>,
}

/// Receives tickets from the dispatcher
pub trait Submitter {
    fn submit(&mut self, ticket: SolveTicket);
}

/// Collects tickets without sending them anywhere
impl Submitter for Vec<SolveTicket> {
    fn submit(&mut self, ticket: SolveTicket) {
        self.push(ticket);
    }
}

/// Runs tickets on one background worker and queues the completions
///
/// Tickets are solved one at a time in submission order. Requests are never
/// cancelled; a ticket queued behind a slow one still runs, and the session's
/// sequence guard decides whether its answer is used.
pub struct Pipeline<S> {
    service: Arc<S>,
    jobs: Option<Sender<SolveTicket>>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl<S: SolverService + 'static> Pipeline<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            service: Arc::new(service),
            jobs: None,
            tx,
            rx,
        }
    }

    /// Completions that have arrived so far, in arrival order
    pub fn drain(&self) -> Vec<Completion> {
        self.rx.try_iter().collect()
    }

    /// Block until the next completion or until `timeout` elapses
    pub fn wait(&self, timeout: Duration) -> Option<Completion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    fn start_worker(&self) -> Option<Sender<SolveTicket>> {
        let (jobs, queue) = mpsc::channel();
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name("solver-worker".to_string())
            .spawn(move || work(service.as_ref(), &queue, &tx));

        match spawned {
            Ok(_) => Some(jobs),
            Err(e) => {
                error!(error = %e, "could not start solver worker");
                None
            }
        }
    }

    fn reject(&self, seq: u64, row: usize) {
        let _ = self.tx.send(Completion {
            seq,
            row,
            result: Err(SolverError::Service(
                "solver worker is not running".to_string(),
            )),
        });
    }
}

/// Worker loop; ends when the pipeline drops its ticket sender or its receiver
fn work<S: SolverService + ?Sized>(
    service: &S,
    queue: &Receiver<SolveTicket>,
    tx: &Sender<Completion>,
) {
    for SolveTicket { seq, row, request } in queue {
        let result = service.solve(&request);
        if let Err(ref e) = result {
            warn!(seq, row, error = %e, "solver request failed");
        }
        if tx.send(Completion { seq, row, result }).is_err() {
            break;
        }
    }
}

impl<S: SolverService + 'static> Submitter for Pipeline<S> {
    fn submit(&mut self, ticket: SolveTicket) {
        info!(
            seq = ticket.seq,
            row = ticket.row,
            letters = ?ticket.request.letters,
            "submitting row"
        );

        if self.jobs.is_none() {
            self.jobs = self.start_worker();
        }
        let Some(jobs) = self.jobs.as_ref() else {
            self.reject(ticket.seq, ticket.row);
            return;
        };

        if let Err(SendError(ticket)) = jobs.send(ticket) {
            error!(seq = ticket.seq, "solver worker has stopped");
            self.jobs = None;
            self.reject(ticket.seq, ticket.row);
        }
    }
}
