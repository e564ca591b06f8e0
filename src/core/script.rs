// GaitLab - core/script.rs
//
// Pipeline scripts: the ordered step messages a run emits and the fixed
// delay between them. The standard script mirrors the processing stages of
// an OpenCap session (capture fetch, biomechanical evaluation, RL weight
// processing, MuJoCo frame sync).

use crate::util::constants::STEP_DELAY_MS;
use std::time::Duration;

/// The step texts of the standard processing pipeline, in emission order.
///
/// The leading "> " is part of the message text, not a rendering concern:
/// consumers display lines verbatim.
pub const STANDARD_STEPS: [&str; 5] = [
    "> Connecting to OpenCap...",
    "> Fetching session_id: 8821-X",
    "> Running biomechanical_eval.py",
    "> Processing RL Gait weights...",
    "> Syncing MuJoCo frames...",
];

/// An ordered list of step texts plus the inter-step delay.
///
/// A run emits each step in order, sleeping `step_delay` after every step
/// (including the last, before the run is considered complete).
#[derive(Debug, Clone)]
pub struct PipelineScript {
    /// Step messages, emitted in order.
    pub steps: Vec<String>,

    /// Delay observed after each emitted step.
    pub step_delay: Duration,
}

impl PipelineScript {
    /// The standard five-step OpenCap processing script.
    pub fn standard() -> Self {
        Self {
            steps: STANDARD_STEPS.iter().map(|s| s.to_string()).collect(),
            step_delay: Duration::from_millis(STEP_DELAY_MS),
        }
    }

    /// Number of steps (and therefore lines) this script emits.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the script has no steps. A run of an empty script emits
    /// nothing and completes immediately.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total wall-clock time a run of this script occupies the sequencer.
    pub fn expected_duration(&self) -> Duration {
        self.step_delay * self.steps.len() as u32
    }
}

impl Default for PipelineScript {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_script_has_five_steps_in_order() {
        let script = PipelineScript::standard();
        assert_eq!(script.len(), 5);
        assert_eq!(script.steps[0], "> Connecting to OpenCap...");
        assert_eq!(script.steps[1], "> Fetching session_id: 8821-X");
        assert_eq!(script.steps[2], "> Running biomechanical_eval.py");
        assert_eq!(script.steps[3], "> Processing RL Gait weights...");
        assert_eq!(script.steps[4], "> Syncing MuJoCo frames...");
    }

    #[test]
    fn standard_script_uses_fixed_step_delay() {
        let script = PipelineScript::standard();
        assert_eq!(script.step_delay, Duration::from_millis(STEP_DELAY_MS));
        assert_eq!(script.expected_duration(), Duration::from_millis(STEP_DELAY_MS * 5));
    }
}
