use crate::{
    Error,
    adapt::{adapt, declaration_path},
    emit::Emitter,
    source::MetadataSource,
    trace::{NullTrace, TraceEvent, TraceSink},
};
use std::path::PathBuf;
use xbind_schema::prelude::*;

///
/// RecordFailure
///

#[derive(Debug)]
pub struct RecordFailure {
    pub path: TypePath,
    pub error: Error,
}

///
/// RunReport
///
/// Outcome of one generation pass. Failure isolation is per record: a
/// malformed type lands in `failures` and the rest of the batch still
/// emits. The host decides whether failures abort the run.
///

#[derive(Debug, Default)]
pub struct RunReport {
    pub generated: Vec<TypePath>,
    pub failures: Vec<RecordFailure>,
}

impl RunReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

///
/// Driver
///
/// Orchestrates one full generation pass: discover declarations, partition
/// them into records and enumerations, classify singleton enumerations, and
/// synthesize plus submit one builder per record. All intermediate state is
/// discarded once the report is returned.
///

pub struct Driver<'a, S, E> {
    source: &'a S,
    emitter: &'a mut E,
    trace: &'a dyn TraceSink,
}

const NULL_TRACE: NullTrace = NullTrace;

impl<'a, S, E> Driver<'a, S, E>
where
    S: MetadataSource,
    E: Emitter,
{
    #[must_use]
    pub fn new(source: &'a S, emitter: &'a mut E) -> Self {
        Self {
            source,
            emitter,
            trace: &NULL_TRACE,
        }
    }

    #[must_use]
    pub fn with_trace(source: &'a S, emitter: &'a mut E, trace: &'a dyn TraceSink) -> Self {
        Self {
            source,
            emitter,
            trace,
        }
    }

    /// Run one generation pass.
    ///
    /// A duplicate enumeration identity fails the whole pass, because the
    /// singleton lookup cannot be built; every other failure is isolated to
    /// its record.
    pub fn run(&mut self) -> Result<RunReport, Error> {
        let declarations = self.source.declarations()?;

        let mut records: Vec<(Record, PathBuf)> = Vec::new();
        let mut enumerations: Vec<Enumeration> = Vec::new();
        let mut report = RunReport::default();

        for declaration in &declarations {
            match adapt(declaration) {
                Ok(Some(Node::Record(record))) => {
                    records.push((record, declaration.provenance.clone()));
                }
                Ok(Some(Node::Enumeration(enumeration))) => enumerations.push(enumeration),
                Ok(None) => {}
                Err(err) => {
                    // Identity is known for any declaration the adapter
                    // got far enough to reject.
                    if let Some(path) = declaration_path(declaration) {
                        self.trace
                            .on_event(TraceEvent::RecordFailed { path: path.clone() });
                        report.failures.push(RecordFailure {
                            path,
                            error: err.into(),
                        });
                    }
                }
            }
        }

        self.trace.on_event(TraceEvent::DeclarationsFound {
            records: records.len(),
            enumerations: enumerations.len(),
        });

        let singletons = SingletonEnums::classify(&enumerations)?;
        self.trace.on_event(TraceEvent::SingletonsClassified {
            count: singletons.len(),
        });

        for (record, provenance) in records {
            let path = record.path.clone();
            let outcome = synthesize(&record, &singletons)
                .map_err(Error::from)
                .and_then(|builder| {
                    self.emitter
                        .submit(&builder, &provenance)
                        .map_err(Error::from)
                });

            match outcome {
                Ok(()) => {
                    self.trace
                        .on_event(TraceEvent::BuilderGenerated { path: path.clone() });
                    report.generated.push(path);
                }
                Err(error) => {
                    self.trace
                        .on_event(TraceEvent::RecordFailed { path: path.clone() });
                    report.failures.push(RecordFailure { path, error });
                }
            }
        }

        Ok(report)
    }
}
