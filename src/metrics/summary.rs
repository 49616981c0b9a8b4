use crate::timeline::SimulationResult;
use serde::Serialize;

/// Aggregate statistics derived from one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub avg_completion: f64,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,

    /// Processes completed per tick over `[origin, end_time)`
    pub throughput: f64,

    pub total_processes: usize,
    pub end_time: u64,
}

impl MetricsSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        let n = result.results.len();
        let count = n.max(1) as f64;

        let mut completion = 0.0;
        let mut turnaround = 0.0;
        let mut waiting = 0.0;
        let mut response = 0.0;
        for record in result.results.values() {
            completion += record.completion as f64;
            turnaround += record.turnaround as f64;
            waiting += record.waiting as f64;
            response += record.response as f64;
        }

        let span = result.end_time - result.origin;
        let throughput = if span == 0 {
            n as f64
        } else {
            n as f64 / span as f64
        };

        Self {
            avg_completion: completion / count,
            avg_turnaround: turnaround / count,
            avg_waiting: waiting / count,
            avg_response: response / count,
            throughput,
            total_processes: n,
            end_time: result.end_time,
        }
    }

    pub fn print(&self) {
        println!("\n=== Aggregate Metrics ===\n");
        println!("  Processes:      {}", self.total_processes);
        println!("  End time:       {}", self.end_time);
        println!("  Avg completion: {:.2}", self.avg_completion);
        println!("  Avg turnaround: {:.2}", self.avg_turnaround);
        println!("  Avg waiting:    {:.2}", self.avg_waiting);
        println!("  Avg response:   {:.2}", self.avg_response);
        println!("  Throughput:     {:.4} proc/tick", self.throughput);
    }
}
