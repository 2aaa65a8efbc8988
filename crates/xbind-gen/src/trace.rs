//! Generation-pass tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect what the
//! driver emits.

use xbind_schema::types::TypePath;

///
/// TraceSink
///

pub trait TraceSink {
    fn on_event(&self, event: TraceEvent);
}

///
/// TraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    /// Classification of the discovered declarations finished.
    DeclarationsFound { records: usize, enumerations: usize },

    /// The singleton-enumeration lookup was built.
    SingletonsClassified { count: usize },

    /// One builder artifact was submitted to the emission backend.
    BuilderGenerated { path: TypePath },

    /// One record failed; the rest of the batch continues.
    RecordFailed { path: TypePath },
}

///
/// NullTrace
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn on_event(&self, _event: TraceEvent) {}
}
