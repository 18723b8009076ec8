//! Score-to-color banding shared by every score display.

use super::labels::Tone;

/// Five-step band on the 0..=100 scale. One table drives text and fill
/// colors so the badge, the bar and the ring always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl ScoreBand {
    /// `>= 80` excellent, `>= 70` good, `>= 60` fair, `>= 40` poor, else
    /// critical. Total on every input, including out-of-range scores.
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else if score >= 40.0 {
            ScoreBand::Poor
        } else {
            ScoreBand::Critical
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ScoreBand::Excellent => Tone::Green,
            ScoreBand::Good => Tone::Blue,
            ScoreBand::Fair => Tone::Yellow,
            ScoreBand::Poor => Tone::Orange,
            ScoreBand::Critical => Tone::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
            ScoreBand::Critical => "Critical",
        }
    }

    /// Text color class, e.g. `text-green-600`.
    pub fn text_class(self) -> String {
        format!("text-{}-600", self.tone().name())
    }

    /// Fill color class, e.g. `bg-green-500`.
    pub fn fill_class(self) -> String {
        format!("bg-{}-500", self.tone().name())
    }

    /// Stroke color for the progress ring.
    pub fn stroke_hex(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#10B981",
            ScoreBand::Good => "#3B82F6",
            ScoreBand::Fair => "#F59E0B",
            ScoreBand::Poor => "#F97316",
            ScoreBand::Critical => "#EF4444",
        }
    }
}

/// Bar fill percentage. Only the upper bound is clamped.
pub fn bar_width(score: f64) -> f64 {
    score.min(100.0)
}

/// A fixed-width text bar, `width` cells at 100%.
pub fn text_bar(score: f64, width: usize) -> String {
    let filled = ((bar_width(score).max(0.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
