/// Progress indicator for the sequential region scan, rendered as
/// `[####----] 50.0%` and rewritten in place on the same terminal line.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    current: u64,
    total: u64,
    width: usize,
}

impl ProgressBar {
    pub fn new(total: u64) -> Self {
        Self {
            current: 0,
            total,
            width: 40,
        }
    }

    pub fn set_progress(&mut self, current: u64) {
        self.current = current.min(self.total);
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f64 / self.total as f64) * 100.0
    }

    pub fn render(&self) -> String {
        let pct = self.percentage();
        let filled = ((pct / 100.0) * self.width as f64).round() as usize;
        format!(
            "[{}{}] {:>5.1}%",
            "#".repeat(filled),
            "-".repeat(self.width - filled),
            pct
        )
    }
}
