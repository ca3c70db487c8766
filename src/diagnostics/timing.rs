use serde::Serialize;
use std::time::Instant;

/// Wall-clock duration of one stage of a detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Per-stage timings of a detection run, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Records the time elapsed since `start` under `label` and returns a
    /// fresh instant for the next stage.
    pub fn lap(&mut self, label: &'static str, start: Instant) -> Instant {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming { label, elapsed_ms });
        Instant::now()
    }

    pub fn stage(&self, label: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.label == label)
    }
}
