//! Worker thread implementation for asynchronous storage operations.
//!
//! This module implements the Zellij worker thread interface, persisting the
//! search history off the main plugin thread so rendering never waits on the
//! filesystem. It includes distributed tracing support for cross-thread
//! observability.

use crate::domain::error::{Result, ZflickError};
use crate::domain::HistoryEntry;
use crate::infrastructure::paths;
use crate::storage::backend::HistoryStore;
use crate::storage::models::QueryRecord;
use crate::storage::JsonHistoryStore;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling storage operations.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The storage backend is
/// initialized lazily on first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct ZflickWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn HistoryStore>>,
}

impl ZflickWorker {
    /// Creates a new worker with an initialized storage backend.
    ///
    /// Uses JSON file storage for persisting submitted queries.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("history.json");
        let store: Box<dyn HistoryStore> = Box::new(JsonHistoryStore::new(path)?);
        Ok(Self { store: Some(store) })
    }

    /// Returns a mutable reference to the storage backend, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage has not been initialized yet.
    fn get_store(&mut self) -> Result<&mut Box<dyn HistoryStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| ZflickError::Worker("Storage not initialized".to_string()))
    }

    /// Converts a storage-layer `QueryRecord` to a domain `HistoryEntry`.
    ///
    /// This transformation is necessary because the worker returns domain types
    /// to the main thread, not storage types.
    fn query_record_to_entry(record: QueryRecord) -> HistoryEntry {
        HistoryEntry {
            query: record.query,
            searched_at: record.searched_at,
        }
    }

    /// Helper for handling storage operation results with consistent logging.
    ///
    /// This function standardizes error handling and success logging across all
    /// storage operations in the worker.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadHistory` message.
    ///
    /// Retrieves the persisted history from storage, newest entries first.
    fn handle_load_history(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load history",
            self.get_store().and_then(|store| store.load_history()),
            |records| {
                tracing::debug!(entry_count = records.len(), "history loaded from storage");
                let entries = records
                    .into_iter()
                    .map(Self::query_record_to_entry)
                    .collect();
                WorkerResponse::HistoryLoaded { entries }
            },
        )
    }

    /// Handles the `RecordQuery` message.
    ///
    /// Appends a completed search to the persisted history.
    fn handle_record_query(&mut self, query: String, searched_at: i64) -> WorkerResponse {
        let record = QueryRecord {
            query: query.clone(),
            searched_at,
        };

        Self::handle_store_result(
            "record query",
            self.get_store().and_then(|store| store.record_query(&record)),
            |()| {
                tracing::debug!(query = %query, searched_at = searched_at, "query recorded");
                WorkerResponse::QueryRecorded { query }
            },
        )
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// This function reconstructs the OpenTelemetry context from the serialized
    /// trace information in the message, allowing spans created in the worker
    /// thread to be linked to their parent spans in the main thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = match message {
            WorkerMessage::LoadHistory { trace_context, .. }
            | WorkerMessage::RecordQuery { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant. Automatically attaches trace context
    /// and creates a tracing span for the operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadHistory { .. } => self.handle_load_history(),

            WorkerMessage::RecordQuery {
                query, searched_at, ..
            } => self.handle_record_query(query, searched_at),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZflickWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the storage backend if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.store = worker.store;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize storage");
                    let error_response = WorkerResponse::Error {
                        message: format!("Failed to initialize storage: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn worker_with_tempdir() -> (ZflickWorker, TempDir) {
        let dir = TempDir::new().unwrap();
        let store: Box<dyn HistoryStore> =
            Box::new(JsonHistoryStore::new(dir.path().join("history.json")).unwrap());
        (
            ZflickWorker {
                store: Some(store),
            },
            dir,
        )
    }

    #[test]
    fn record_then_load_round_trips_newest_first() {
        let (mut worker, _dir) = worker_with_tempdir();

        let response = worker.handle_message(WorkerMessage::RecordQuery {
            query: "foxes".to_string(),
            searched_at: 100,
            trace_context: None,
        });
        assert_eq!(
            response,
            WorkerResponse::QueryRecorded {
                query: "foxes".to_string()
            }
        );

        worker.handle_message(WorkerMessage::RecordQuery {
            query: "owls".to_string(),
            searched_at: 200,
            trace_context: None,
        });

        let response = worker.handle_message(WorkerMessage::LoadHistory {
            trace_context: None,
        });
        let WorkerResponse::HistoryLoaded { entries } = response else {
            panic!("expected HistoryLoaded, got {response:?}");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "owls");
        assert_eq!(entries[1].query, "foxes");
    }

    #[test]
    fn uninitialized_store_reports_error() {
        let mut worker = ZflickWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadHistory {
            trace_context: None,
        });
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
