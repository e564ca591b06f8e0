// GaitLab - tests/e2e_sequence.rs
//
// End-to-end tests for the pipeline run lifecycle and screen navigation.
//
// These tests exercise the real worker thread, the real mpsc progress
// channel, and real wall-clock timing: no mocks, no stubs. The standard
// script is used where timing fidelity matters (one full run takes
// 5 x 800 ms); shorter delays are used where only ordering and the
// re-entrancy guard are under test.

use gaitlab::app::sequence::SequenceManager;
use gaitlab::app::state::AppState;
use gaitlab::core::model::{RunProgress, ScreenMode};
use gaitlab::core::script::{PipelineScript, STANDARD_STEPS};
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// A standard-content script with a short delay for guard/accumulation tests.
fn quick_script() -> PipelineScript {
    PipelineScript {
        steps: STANDARD_STEPS.iter().map(|s| s.to_string()).collect(),
        step_delay: Duration::from_millis(10),
    }
}

/// Poll the manager, applying messages to `state` the way the GUI update
/// loop does, until `Completed` arrives or the deadline passes.
fn drive_to_completion(manager: &SequenceManager, state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        for msg in manager.poll_progress(usize::MAX) {
            match msg {
                RunProgress::Started { .. } => state.run_in_progress = true,
                RunProgress::Line { line } => state.push_line(line),
                RunProgress::Completed { .. } => {
                    state.run_in_progress = false;
                    return;
                }
            }
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("run did not complete within deadline");
}

// =============================================================================
// Navigation E2E
// =============================================================================

/// launch() from Login yields Dashboard; a repeat call is a no-op.
#[test]
fn e2e_launch_reaches_dashboard_and_stays_there() {
    let mut state = AppState::new(false);
    assert_eq!(state.screen, ScreenMode::Login);

    state.launch();
    assert_eq!(state.screen, ScreenMode::Dashboard);

    state.launch();
    assert_eq!(state.screen, ScreenMode::Dashboard);
}

// =============================================================================
// Run lifecycle E2E
// =============================================================================

/// Full timing fidelity: the standard script emits exactly the five lines
/// in order, the busy flag holds for the whole run (including the delay
/// after the final line), and the run takes at least 5 x 800 ms.
#[test]
fn e2e_standard_run_emits_five_lines_with_real_timing() {
    let mut state = AppState::new(false);
    state.launch();

    let mut manager = SequenceManager::new();
    assert!(!manager.is_running());

    let script = PipelineScript::standard();
    let expected = script.expected_duration();
    let started = Instant::now();
    assert!(manager.start_run(script, state.next_line_id()));
    assert!(manager.is_running(), "busy must be observable immediately");

    drive_to_completion(&manager, &mut state);
    let elapsed = started.elapsed();

    assert!(!manager.is_running(), "busy must clear after completion");
    assert!(
        elapsed >= expected,
        "run finished in {elapsed:?}, expected at least {expected:?}"
    );

    let texts: Vec<&str> = state.terminal.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "> Connecting to OpenCap...",
            "> Fetching session_id: 8821-X",
            "> Running biomechanical_eval.py",
            "> Processing RL Gait weights...",
            "> Syncing MuJoCo frames...",
        ]
    );
}

/// A start request made mid-run is a silent no-op: the terminal still
/// holds exactly five lines after the first run completes, with no
/// duplicates or interleaving.
#[test]
fn e2e_start_during_run_is_rejected_without_side_effects() {
    let mut state = AppState::new(false);
    let mut manager = SequenceManager::new();

    assert!(manager.start_run(quick_script(), state.next_line_id()));

    // Re-invoke immediately, before the first run can have finished.
    assert!(!manager.start_run(quick_script(), state.next_line_id()));

    drive_to_completion(&manager, &mut state);

    assert_eq!(state.terminal.len(), 5);
    let texts: Vec<&str> = state.terminal.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, STANDARD_STEPS.to_vec());
}

/// N completed non-overlapping runs leave 5*N lines, concatenated in
/// invocation order, with IDs monotonically increasing across runs.
#[test]
fn e2e_completed_runs_accumulate_in_order() {
    let mut state = AppState::new(false);
    let mut manager = SequenceManager::new();

    for run in 0..3 {
        assert!(
            manager.start_run(quick_script(), state.next_line_id()),
            "run {run} should start from idle"
        );
        drive_to_completion(&manager, &mut state);
    }

    assert_eq!(state.terminal.len(), 15);

    for (i, line) in state.terminal.iter().enumerate() {
        assert_eq!(line.id, i as u64, "IDs must be monotonic across runs");
        assert_eq!(line.text, STANDARD_STEPS[i % 5], "order must repeat per run");
    }
}

/// The busy flag is observable as set between every emitted line while a
/// run is in flight.
#[test]
fn e2e_busy_flag_holds_between_lines() {
    let mut state = AppState::new(false);
    let mut manager = SequenceManager::new();

    let script = PipelineScript {
        steps: STANDARD_STEPS.iter().map(|s| s.to_string()).collect(),
        step_delay: Duration::from_millis(40),
    };
    assert!(manager.start_run(script, 0));

    let deadline = Instant::now() + Duration::from_secs(10);
    let mut lines_seen = 0;
    'outer: while Instant::now() < deadline {
        for msg in manager.poll_progress(usize::MAX) {
            match msg {
                RunProgress::Line { line } => {
                    lines_seen += 1;
                    state.push_line(line);
                    if lines_seen < 5 {
                        assert!(
                            manager.is_running(),
                            "busy must hold after line {lines_seen}"
                        );
                    }
                }
                RunProgress::Completed { .. } => break 'outer,
                RunProgress::Started { .. } => {}
            }
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    assert_eq!(lines_seen, 5);
    assert!(!manager.is_running());
}

/// Full session walkthrough: fresh state, launch, one run to completion,
/// a rejected mid-run re-invocation, final state checks.
#[test]
fn e2e_full_session_scenario() {
    let mut state = AppState::new(false);
    let mut manager = SequenceManager::new();

    // Fresh session → launch → Dashboard.
    state.launch();
    assert_eq!(state.screen, ScreenMode::Dashboard);

    // First run to completion.
    assert!(manager.start_run(quick_script(), state.next_line_id()));
    drive_to_completion(&manager, &mut state);
    assert_eq!(state.terminal.len(), 5);

    // Second run; a third invocation lands mid-run and must be a no-op.
    assert!(manager.start_run(quick_script(), state.next_line_id()));
    assert!(!manager.start_run(quick_script(), state.next_line_id()));
    drive_to_completion(&manager, &mut state);

    assert_eq!(state.terminal.len(), 10);
    assert!(!state.run_in_progress);
    assert_eq!(state.screen, ScreenMode::Dashboard);
}
