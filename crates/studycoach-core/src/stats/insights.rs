//! Qualitative study feedback derived from a daily statistics snapshot.
//!
//! Four insight dimensions, each classified by a fixed threshold ladder
//! checked highest-first: session count, average session length, average
//! focus score, and total focus time. The engine is a pure read and always
//! produces the four insights in that order; presentation layers choose
//! the subset they show. An empty day classifies every dimension at its
//! lowest tier instead of dividing by zero.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::DailyStats;

/// Severity/flavor of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Success,
    Warning,
    Info,
}

impl InsightCategory {
    pub fn label(&self) -> &'static str {
        match self {
            InsightCategory::Success => "success",
            InsightCategory::Warning => "warning",
            InsightCategory::Info => "info",
        }
    }
}

/// One qualitative observation about today's studying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub title: String,
    pub description: String,
    pub tip: String,
}

/// Threshold ladder settings for the four insight dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Sessions/day considered a consistent pattern.
    pub strong_session_count: u32,
    /// Sessions/day considered decent momentum.
    pub fair_session_count: u32,
    /// Mean session length considered optimal for deep work.
    pub optimal_session_secs: u64,
    /// Mean session length considered workable.
    pub fair_session_secs: u64,
    /// Average focus score considered exceptional.
    pub sharp_focus_score: u32,
    /// Average focus score considered solid.
    pub fair_focus_score: u32,
    /// Total focus time marking an excellent study day.
    pub strong_day_secs: u64,
    /// Total focus time marking a solid foundation.
    pub fair_day_secs: u64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            strong_session_count: 5,
            fair_session_count: 3,
            optimal_session_secs: 1800,
            fair_session_secs: 900,
            sharp_focus_score: 90,
            fair_focus_score: 70,
            strong_day_secs: 10800,
            fair_day_secs: 3600,
        }
    }
}

/// Derives the daily insight report from a [`DailyStats`] snapshot.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    thresholds: InsightThresholds,
}

impl InsightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// All four insights in fixed order: session count, session length,
    /// focus score, total time.
    pub fn analyze(&self, stats: &DailyStats) -> Vec<Insight> {
        vec![
            self.session_count_insight(stats),
            self.session_length_insight(stats),
            self.focus_score_insight(stats),
            self.total_time_insight(stats),
        ]
    }

    fn session_count_insight(&self, stats: &DailyStats) -> Insight {
        let n = stats.sessions_completed;
        if n >= self.thresholds.strong_session_count {
            Insight {
                category: InsightCategory::Success,
                title: "Consistent Study Pattern".into(),
                description: format!(
                    "You've completed {n} sessions today. This shows excellent study discipline!"
                ),
                tip: "Maintain this rhythm for optimal learning retention.".into(),
            }
        } else if n >= self.thresholds.fair_session_count {
            Insight {
                category: InsightCategory::Warning,
                title: "Good Progress".into(),
                description: format!(
                    "{n} sessions completed. Consider adding 1-2 more short sessions."
                ),
                tip: "Try the Pomodoro technique: 25min study + 5min break.".into(),
            }
        } else {
            Insight {
                category: InsightCategory::Warning,
                title: "Room for Improvement".into(),
                description: format!("Only {n} sessions today. Aim for at least 3 focused sessions."),
                tip: "Start with 15-minute sessions and gradually increase duration.".into(),
            }
        }
    }

    fn session_length_insight(&self, stats: &DailyStats) -> Insight {
        // average_session_secs() is 0 on an empty day, landing in the
        // lowest tier rather than dividing by zero.
        let avg_secs = stats.average_session_secs();
        let minutes = (avg_secs + 30) / 60;
        if avg_secs >= self.thresholds.optimal_session_secs {
            Insight {
                category: InsightCategory::Success,
                title: "Optimal Session Length".into(),
                description: format!("Average session: {minutes} minutes. Perfect for deep learning!"),
                tip: "Your attention span is well-developed. Consider tackling complex topics."
                    .into(),
            }
        } else if avg_secs >= self.thresholds.fair_session_secs {
            Insight {
                category: InsightCategory::Info,
                title: "Good Session Length".into(),
                description: format!("Average session: {minutes} minutes. Good for focused work."),
                tip: "Try extending sessions by 5-10 minutes for better retention.".into(),
            }
        } else {
            Insight {
                category: InsightCategory::Warning,
                title: "Short Sessions".into(),
                description: format!("Average session: {minutes} minutes. Consider longer sessions."),
                tip: "Build up gradually: 15min -> 20min -> 25min -> 30min.".into(),
            }
        }
    }

    fn focus_score_insight(&self, stats: &DailyStats) -> Insight {
        let score = stats.average_focus_score;
        if score >= self.thresholds.sharp_focus_score {
            Insight {
                category: InsightCategory::Success,
                title: "Exceptional Focus".into(),
                description: format!("{score}% focus score! You're in the zone consistently."),
                tip: "This is your peak performance time. Schedule important topics now.".into(),
            }
        } else if score >= self.thresholds.fair_focus_score {
            Insight {
                category: InsightCategory::Info,
                title: "Good Focus Level".into(),
                description: format!("{score}% focus score. Solid concentration skills."),
                tip: "Identify what helps you focus and eliminate distractions.".into(),
            }
        } else {
            Insight {
                category: InsightCategory::Warning,
                title: "Focus Needs Work".into(),
                description: format!("{score}% focus score. Distractions are affecting learning."),
                tip: "Try: phone in another room, noise-canceling headphones, or study in a quiet space."
                    .into(),
            }
        }
    }

    fn total_time_insight(&self, stats: &DailyStats) -> Insight {
        let total = stats.total_focus_secs;
        let formatted = format_duration(total);
        if total >= self.thresholds.strong_day_secs {
            Insight {
                category: InsightCategory::Success,
                title: "Excellent Study Day".into(),
                description: format!("{formatted} of focused study! You're making great progress."),
                tip: "Take breaks every 45-60 minutes to maintain this level.".into(),
            }
        } else if total >= self.thresholds.fair_day_secs {
            Insight {
                category: InsightCategory::Info,
                title: "Solid Study Session".into(),
                description: format!("{formatted} of study time. Good foundation for learning."),
                tip: "Add 30-60 minutes more for optimal daily learning.".into(),
            }
        } else {
            Insight {
                category: InsightCategory::Warning,
                title: "Minimal Study Time".into(),
                description: format!("Only {formatted} today. Every minute counts for learning."),
                tip: "Start with 15-minute blocks. Consistency beats duration.".into(),
            }
        }
    }
}

/// Render seconds as "2h 15m" (or "45m" below one hour).
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Daily motivation shown next to the insight report.
pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "The expert in anything was once a beginner.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Learning never exhausts the mind.",
    "The only way to learn mathematics is to do mathematics.",
    "Study hard, for the well is deep, and our brains are shallow.",
];

/// Pick one motivational quote at random.
pub fn motivation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())]
}
