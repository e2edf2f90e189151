// Viewer state for the terminal chart: a pannable, zoomable window over the trace.

use lif_core::SPIKE_VOLTAGE;

const MIN_WIDTH: usize = 10;

pub struct App {
    pub trace: Vec<f64>,
    pub threshold: f64,
    pub offset: usize, // first visible step
    pub width: usize,  // visible steps
}

impl App {
    pub fn new(trace: Vec<f64>, threshold: f64, width: usize) -> Self {
        let width = width.clamp(MIN_WIDTH.min(trace.len().max(1)), trace.len().max(1));
        Self {
            trace,
            threshold,
            offset: 0,
            width,
        }
    }

    fn max_offset(&self) -> usize {
        self.trace.len().saturating_sub(self.width)
    }

    pub fn pan_left(&mut self) {
        self.offset = self.offset.saturating_sub((self.width / 4).max(1));
    }

    pub fn pan_right(&mut self) {
        self.offset = (self.offset + (self.width / 4).max(1)).min(self.max_offset());
    }

    pub fn jump_start(&mut self) {
        self.offset = 0;
    }

    pub fn jump_end(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn zoom_in(&mut self) {
        let floor = MIN_WIDTH.min(self.trace.len().max(1));
        self.width = (self.width / 2).max(floor);
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn zoom_out(&mut self) {
        self.width = (self.width * 2).min(self.trace.len().max(1));
        self.offset = self.offset.min(self.max_offset());
    }

    /// Visible samples as (step, voltage) points for the chart.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let end = (self.offset + self.width).min(self.trace.len());
        self.trace[self.offset..end]
            .iter()
            .enumerate()
            .map(|(k, &v)| ((self.offset + k) as f64, v))
            .collect()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let start = self.offset as f64;
        [start, start + self.width.saturating_sub(1).max(1) as f64]
    }

    /// Vertical range covering the whole run, threshold and spike value included.
    pub fn y_bounds(&self) -> [f64; 2] {
        let lo = self.trace.iter().copied().fold(self.threshold.min(0.0), f64::min);
        let hi = self.trace.iter().copied().fold(self.threshold.max(SPIKE_VOLTAGE), f64::max);
        [lo, hi]
    }

    pub fn spikes_in_view(&self) -> usize {
        self.points().iter().filter(|&&(_, v)| v == SPIKE_VOLTAGE).count()
    }
}
