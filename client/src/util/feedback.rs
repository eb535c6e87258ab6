//! Player-facing copy for scores and the result reveal.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Tiered verdict for a final percentage score.
#[must_use]
pub fn score_message(score: u32) -> &'static str {
    if score >= 95 {
        "Perfect! You're a circle master!"
    } else if score >= 90 {
        "Almost perfect! Impressive!"
    } else if score >= 80 {
        "Great job! Very circular!"
    } else if score >= 70 {
        "Good effort! Keep practicing!"
    } else if score >= 50 {
        "Not bad, but you can do better!"
    } else {
        "That's more of an... abstract shape."
    }
}

/// Step size for the result screen's count-up animation.
#[must_use]
pub fn count_up_increment(target: u32) -> u32 {
    (target / 50).max(1)
}

/// Prompt shown over the canvas while waiting for a stroke.
pub const DRAW_PROMPT: &str = "Draw a circle around the dot";

/// Shown when a stroke ends with too few samples to judge.
pub const INCOMPLETE_STROKE: &str = "Draw a complete circle";

/// Generic internal-error fallback; the attempt is simply retried.
pub const RETRY_PROMPT: &str = "Something went wrong. Please try again";
