//! Network actor - runs scoring requests in the Tokio async runtime

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, score_essay};

/// Tracks an active request for cancellation
struct ActiveRequest {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes scoring commands
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
    cancel_handles: HashMap<u64, ActiveRequest>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, base_url: String) -> Self {
        NetworkActor {
            client: create_client(),
            base_url,
            response_tx,
            active_requests: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::ScoreEssay { id, request }) => {
                            let (cancel_tx, mut cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, ActiveRequest { cancel_tx });

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, essay_len = request.essay.len(), "Submitting essay for scoring");
                                tokio::select! {
                                    _ = &mut cancel_rx => {
                                        // Cancelled response is sent by the command handler
                                        tracing::info!(id, "Scoring request aborted");
                                    }
                                    result = score_essay(&client, &base_url, request, id) => {
                                        tracing::info!(id, "Scoring request completed");
                                        let _ = response_tx.send(result);
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::CancelRequest(id)) => {
                            if let Some(active) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling request");
                                let _ = active.cancel_tx.send(());
                                let _ = self.response_tx.send(NetworkResponse::Cancelled { id });
                            }
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, active) in self.cancel_handles.drain() {
                                let _ = active.cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - cleanup is handled by the tasks themselves
                }
            }
        }
    }
}
