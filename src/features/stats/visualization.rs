//! Terminal charts for study statistics.

use chrono::Weekday;

use super::week::WeeklySummary;

const FULL_BLOCK: char = '█';

/// Render the week as horizontal bars, one line per day.
///
/// The line for `today` is marked with an arrow.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_week_chart(summary: &WeeklySummary, today: Weekday, bar_width: usize) -> String {
    if summary.days.is_empty() {
        return String::new();
    }

    summary
        .days
        .iter()
        .map(|day| {
            let len = (summary.bar_fraction(day.hours) * bar_width as f64).round() as usize;
            let marker = if day.day == today { "▶" } else { " " };
            format!(
                "{marker} {} {:<width$} {:.1}h",
                day.day,
                FULL_BLOCK.to_string().repeat(len),
                day.hours,
                width = bar_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a count as a row of dots, capped at `max`.
pub fn render_session_dots(count: u32, max: u32) -> String {
    let shown = count.min(max);
    let mut dots = "●".repeat(shown as usize);
    if count > max {
        dots.push_str(&format!(" +{}", count - max));
    }
    dots
}
