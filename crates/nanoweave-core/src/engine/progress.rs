/// Progress events emitted during a construction run.
///
/// Phases map to the fixed pipeline order (allocate, base strands, loops,
/// crossovers, sticky ends); `directives` is the number of per-directive
/// ticks the phase will emit.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart {
        name: &'static str,
        directives: u64,
    },
    DirectiveFinish,
    PhaseFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Callback seam for progress consumers (CLI progress bars, tests).
///
/// The default reporter drops every event, so library callers pay nothing
/// for progress they do not observe.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn default_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::PhaseStart {
            name: "Loops",
            directives: 2,
        });
        reporter.report(Progress::DirectiveFinish);
        reporter.report(Progress::PhaseFinish);

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(events[0].contains("Loops"));
    }
}
