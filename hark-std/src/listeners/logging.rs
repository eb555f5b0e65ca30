//! Logging listener for event observation.

use hark_core::Listener;
use std::fmt::Debug;

/// A listener that logs every event it receives.
///
/// Register it globally to trace all traffic through a dispatcher. Emits
/// through `tracing` when the `tracing` feature is enabled and does nothing
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingListener;

impl<Id, E> Listener<Id, E> for LoggingListener
where
    Id: Debug,
    E: Debug,
{
    fn receive(&self, id: &Id, payload: &E) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(?id, ?payload, "received event");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (id, payload);
        }
    }
}
