use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks generations and live cells for periodic progress reports
pub struct SimpleRecord {
    generations: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            generations: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.generations += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.generations, self.alive
        )
    }
}
