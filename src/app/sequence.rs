// GaitLab - app/sequence.rs
//
// Pipeline run lifecycle management. Emits the script's step lines on a
// background thread, sending progress messages to the UI thread via an
// mpsc channel.
//
// Architecture:
//   - `SequenceManager` lives on the UI thread; `run_pipeline` runs on a
//     background thread.
//   - An `Arc<AtomicBool>` busy flag is the sole re-entrancy guard: at most
//     one run is active at a time, and a start request while busy is a
//     silent no-op.
//   - All cross-thread communication is via `RunProgress` channel messages.
//
// There is deliberately no cancellation path: once started, a run proceeds
// to completion. The busy flag clears after the final step's delay, before
// completion is reported.

use crate::core::model::{RunProgress, RunSummary, TerminalLine};
use crate::core::script::PipelineScript;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Instant;

/// Manages a pipeline run on a background thread.
pub struct SequenceManager {
    /// Channel receiver for the UI to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<RunProgress>>,

    /// Busy flag shared with the background thread.
    busy: Arc<AtomicBool>,
}

impl SequenceManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a run of `script`, assigning emitted lines IDs starting at
    /// `start_id`.
    ///
    /// Returns `true` when a worker thread was spawned. If a run is already
    /// in progress the request is a no-op with no side effects and `false`
    /// is returned.
    pub fn start_run(&mut self, script: PipelineScript, start_id: u64) -> bool {
        // swap() both tests and sets the guard, so two start requests can
        // never both pass even if a second caller existed.
        if self.busy.swap(true, Ordering::SeqCst) {
            tracing::debug!("Run already in progress; ignoring start request");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let busy = Arc::clone(&self.busy);
        std::thread::spawn(move || {
            run_pipeline(script, start_id, tx, busy);
        });

        tracing::info!("Pipeline run started");
        true
    }

    /// Whether a run is currently active.
    pub fn is_running(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Poll for progress messages without blocking.
    ///
    /// Returns at most `limit` pending messages; the remainder stay queued
    /// for subsequent frames.
    pub fn poll_progress(&self, limit: usize) -> Vec<RunProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while messages.len() < limit {
                match rx.try_recv() {
                    Ok(msg) => messages.push(msg),
                    Err(_) => break,
                }
            }
        }
        messages
    }
}

impl Default for SequenceManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background run worker
// =============================================================================

/// Emit each script step in order with the script's delay after every step,
/// then clear the busy flag and report completion.
///
/// Runs on a background thread. Sends `RunProgress` messages to `tx`.
/// Send failures mean the receiver was dropped (UI closed); the worker then
/// exits quietly without touching the busy flag: the manager only replaces
/// the channel while idle, so a live manager is never left stuck busy.
fn run_pipeline(
    script: PipelineScript,
    start_id: u64,
    tx: mpsc::Sender<RunProgress>,
    busy: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return;
            }
        };
    }

    let run_start = Instant::now();

    send!(RunProgress::Started {
        total_steps: script.len(),
    });

    for (i, step) in script.steps.iter().enumerate() {
        let line = TerminalLine {
            id: start_id + i as u64,
            emitted_at: chrono::Utc::now(),
            text: step.clone(),
        };
        tracing::debug!(id = line.id, text = %line.text, "Pipeline step emitted");
        send!(RunProgress::Line { line });

        // The delay applies after every step, including the last one:
        // the run is not complete until the final delay has elapsed.
        std::thread::sleep(script.step_delay);
    }

    // The guard clears here, after the final step's delay and before
    // completion is reported.
    busy.store(false, Ordering::SeqCst);

    let summary = RunSummary {
        lines_emitted: script.len(),
        duration: run_start.elapsed(),
    };

    tracing::info!(
        lines = summary.lines_emitted,
        duration_ms = summary.duration.as_millis() as u64,
        "Pipeline run complete"
    );

    send!(RunProgress::Completed { summary });
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A five-step script with a delay short enough for unit tests.
    fn quick_script() -> PipelineScript {
        PipelineScript {
            steps: crate::core::script::STANDARD_STEPS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            step_delay: Duration::from_millis(5),
        }
    }

    /// Drain messages until `Completed` arrives or the deadline passes.
    fn collect_until_complete(manager: &SequenceManager) -> Vec<RunProgress> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut messages = Vec::new();
        while Instant::now() < deadline {
            for msg in manager.poll_progress(usize::MAX) {
                let done = matches!(msg, RunProgress::Completed { .. });
                messages.push(msg);
                if done {
                    return messages;
                }
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        panic!("run did not complete within deadline; got {messages:?}");
    }

    #[test]
    fn run_emits_all_steps_in_order_then_completes() {
        let mut manager = SequenceManager::new();
        assert!(manager.start_run(quick_script(), 0));

        let messages = collect_until_complete(&manager);

        assert!(matches!(
            messages.first(),
            Some(RunProgress::Started { total_steps: 5 })
        ));

        let lines: Vec<&TerminalLine> = messages
            .iter()
            .filter_map(|m| match m {
                RunProgress::Line { line } => Some(line),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.id, i as u64);
            assert_eq!(line.text, crate::core::script::STANDARD_STEPS[i]);
        }

        match messages.last() {
            Some(RunProgress::Completed { summary }) => {
                assert_eq!(summary.lines_emitted, 5);
            }
            other => panic!("expected Completed last, got {other:?}"),
        }
        assert!(!manager.is_running());
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let mut manager = SequenceManager::new();
        assert!(manager.start_run(quick_script(), 0));
        assert!(manager.is_running());

        // Second invocation while busy must be rejected without side effects.
        assert!(!manager.start_run(quick_script(), 100));

        let messages = collect_until_complete(&manager);
        let line_count = messages
            .iter()
            .filter(|m| matches!(m, RunProgress::Line { .. }))
            .count();
        assert_eq!(line_count, 5, "rejected run must not emit lines");
    }

    #[test]
    fn line_ids_start_at_the_requested_offset() {
        let mut manager = SequenceManager::new();
        assert!(manager.start_run(quick_script(), 42));

        let messages = collect_until_complete(&manager);
        let first_line = messages.iter().find_map(|m| match m {
            RunProgress::Line { line } => Some(line.id),
            _ => None,
        });
        assert_eq!(first_line, Some(42));
    }

    #[test]
    fn empty_script_completes_without_lines() {
        let mut manager = SequenceManager::new();
        let script = PipelineScript {
            steps: Vec::new(),
            step_delay: Duration::from_millis(1),
        };
        assert!(manager.start_run(script, 0));

        let messages = collect_until_complete(&manager);
        assert!(messages
            .iter()
            .all(|m| !matches!(m, RunProgress::Line { .. })));
        assert!(!manager.is_running());
    }
}
