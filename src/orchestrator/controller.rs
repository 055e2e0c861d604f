//! Load/submit lifecycle controller.
//!
//! Owns the API client and record store, executes UI commands, and emits
//! events for presentation layers. Collection loads run as an abortable
//! task: a refresh issued while one is in flight aborts it first, so a
//! slow fetch can never land on top of a newer one.

use crate::api::{ApiClient, ClientError};
use crate::cli::Cli;
use crate::model::{AppEvent, ApplicantRecord, UiCommand};
use crate::store::RecordStore;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

type LoadHandle = JoinHandle<Result<Vec<ApplicantRecord>, ClientError>>;

/// Spawn a collection load. Events for its outcome are emitted by the
/// controller loop once the task joins.
fn start_load(
    client: ApiClient,
    store: RecordStore,
    event_tx: &UnboundedSender<AppEvent>,
    initial: bool,
) -> LoadHandle {
    let _ = event_tx.send(AppEvent::LoadStarted);
    tokio::spawn(async move {
        if initial {
            store.load_initial(&client).await
        } else {
            store.refresh(&client).await
        }
    })
}

/// Banner text for a rejected submit: server-supplied detail when the
/// server spoke, the transport error otherwise.
fn submit_message(action: &str, err: &ClientError) -> String {
    match err {
        ClientError::Api { detail, .. } => format!("Failed to {action}: {detail}"),
        other => format!("Failed to {action}: {other}"),
    }
}

/// Execute UI commands and emit events until `Quit` or the command
/// channel closes.
pub(crate) async fn run_controller(
    args: &Cli,
    event_tx: UnboundedSender<AppEvent>,
    mut cmd_rx: UnboundedReceiver<UiCommand>,
) -> Result<()> {
    let client = ApiClient::new(&args.base_url, args.csrf_token.clone())?;
    let store = RecordStore::new(args.data.clone());
    let redirect_delay = Duration::from(args.redirect_delay);

    let mut load_handle: Option<LoadHandle> = Some(start_load(
        client.clone(),
        store.clone(),
        &event_tx,
        true,
    ));

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UiCommand::Refresh) => {
                        // Serialized: a superseded in-flight load is aborted
                        // before the new one starts, so results cannot apply
                        // out of order.
                        if let Some(h) = load_handle.take() {
                            h.abort();
                        }
                        load_handle = Some(start_load(client.clone(), store.clone(), &event_tx, false));
                    }
                    Some(UiCommand::LoadDetail { id }) => {
                        match client.get(id).await {
                            Ok(record) => {
                                let _ = event_tx.send(AppEvent::DetailLoaded { record: Box::new(record) });
                            }
                            Err(e) => {
                                tracing::warn!("detail load for applicant {id} failed: {e}");
                                let _ = event_tx.send(AppEvent::DetailFailed {
                                    message: "Failed to load applicant details. Please try again.".into(),
                                });
                            }
                        }
                    }
                    Some(UiCommand::Create { payload, resume }) => {
                        let attachment = match resume {
                            Some(path) => match tokio::fs::read(&path).await {
                                Ok(bytes) => {
                                    let filename = path
                                        .file_name()
                                        .map(|n| n.to_string_lossy().to_string())
                                        .unwrap_or_else(|| "resume".to_string());
                                    Some((filename, bytes))
                                }
                                Err(e) => {
                                    let _ = event_tx.send(AppEvent::SubmitFailed {
                                        message: format!("Failed to read resume file {}: {e}", path.display()),
                                    });
                                    continue;
                                }
                            },
                            None => None,
                        };
                        match client.create(&payload, attachment).await {
                            Ok(record) => {
                                let id = record.ident();
                                let _ = event_tx.send(AppEvent::Created { record: Box::new(record) });
                                // Navigate to the new record's detail view
                                // after the user-visible delay.
                                let tx = event_tx.clone();
                                tokio::spawn(async move {
                                    tokio::time::sleep(redirect_delay).await;
                                    let _ = tx.send(AppEvent::OpenDetail { id });
                                });
                            }
                            Err(e) => {
                                let _ = event_tx.send(AppEvent::SubmitFailed {
                                    message: submit_message("create applicant", &e),
                                });
                            }
                        }
                    }
                    Some(UiCommand::Update { id, patch }) => {
                        match client.update(id, &patch).await {
                            Ok(record) => {
                                let _ = event_tx.send(AppEvent::Updated { record: Box::new(record) });
                                // Refresh the collection so server-derived
                                // changes reconcile into the table.
                                if let Some(h) = load_handle.take() {
                                    h.abort();
                                }
                                load_handle = Some(start_load(client.clone(), store.clone(), &event_tx, false));
                            }
                            Err(e) => {
                                let _ = event_tx.send(AppEvent::SubmitFailed {
                                    message: submit_message("update applicant", &e),
                                });
                            }
                        }
                    }
                    Some(UiCommand::Quit) | None => break,
                }
            }
            // Do not take the JoinHandle before this branch wins; otherwise it
            // can be dropped if another select branch is chosen, and we'll
            // never observe completion.
            maybe_done = async {
                if let Some(h) = load_handle.as_mut() {
                    return Some(h.await);
                }
                futures::future::pending().await
            } => {
                if let Some(join_res) = maybe_done {
                    load_handle = None;
                    match join_res {
                        Ok(Ok(records)) => {
                            let _ = event_tx.send(AppEvent::Loaded { records });
                        }
                        Ok(Err(e)) => {
                            tracing::warn!("applicant load failed: {e}");
                            let _ = event_tx.send(AppEvent::LoadFailed {
                                message: "Failed to load applicants. Please try again.".into(),
                            });
                        }
                        Err(e) if e.is_cancelled() => {
                            // Superseded load; the replacement already
                            // announced itself with LoadStarted.
                        }
                        Err(e) => {
                            let _ = event_tx.send(AppEvent::LoadFailed {
                                message: format!("Load task failed: {e}"),
                            });
                        }
                    }
                }
            }
        }
    }

    if let Some(h) = load_handle.take() {
        h.abort();
    }
    Ok(())
}
