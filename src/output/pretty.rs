use chrono::Weekday;
use colored::Colorize;

use crate::features::focus::{format_duration_mmss, render_progress_bar, TimerSnapshot};
use crate::features::stats::{render_week_chart, WeeklySummary};
use crate::records::{habits_met, Habit, Priority, TaskItem};

/// Format tasks as a pretty list
pub fn format_tasks_pretty(tasks: &[&TaskItem], completed: usize) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No tasks".to_string();
    }

    let mut output = format!("Tasks ({}/{} done)\n", completed, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let title = if task.completed {
            task.title.strikethrough().dimmed().to_string()
        } else {
            task.title.bold().to_string()
        };

        let priority = match task.priority {
            Priority::High => "!!!".red(),
            Priority::Medium => "!! ".yellow(),
            Priority::Low => "!  ".blue(),
        };

        let mut line = format!("{} {} {}", status_icon, priority, title);
        line.push_str(&format!("  {}", task.subject.dimmed()));

        // Due labels are noise once a task is done
        if let Some(due) = task.due.as_ref().filter(|_| !task.completed) {
            line.push_str(&format!("  {}", due.yellow()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format habits with weekly progress bars
pub fn format_habits_pretty(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "Habits (0)\n  No habits".to_string();
    }

    let mut output = format!(
        "Habits ({}/{} complete)\n",
        habits_met(habits),
        habits.len()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        output.push_str(&format!(
            "{:<16} {} {}/{}  {}\n",
            habit.name.bold(),
            render_progress_bar(habit.progress(), 14),
            habit.completed,
            habit.target,
            format!("{}d streak", habit.streak).cyan()
        ));
    }

    output
}

/// Format the weekly study chart with totals
pub fn format_week_pretty(summary: &WeeklySummary, today: Weekday) -> String {
    let mut output = "This Week\n".to_string();
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&render_week_chart(summary, today, 30));
    output.push('\n');
    output.push_str(&format!(
        "\n  {}: {:.1}h   {}: {}h/day\n",
        "Total".dimmed(),
        summary.total_hours,
        "Average".dimmed(),
        summary.format_average()
    ));
    output
}

/// Format a timer snapshot
pub fn format_timer_pretty(snapshot: &TimerSnapshot) -> String {
    let remaining = chrono::Duration::seconds(i64::from(snapshot.remaining_seconds));
    let state = if snapshot.is_running {
        "running".green()
    } else {
        "paused".yellow()
    };

    let mut output = format!(
        "{} {}  [{}]\n",
        snapshot.mode.to_string().bold(),
        format_duration_mmss(remaining).bold(),
        state
    );
    output.push_str(&format!(
        "{} {:.0}%\n",
        render_progress_bar(snapshot.progress, 30),
        snapshot.progress * 100.0
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sessions".dimmed(),
        snapshot.sessions_completed
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::TimerSession;
    use crate::records::{RecordStore, SampleRecords, TaskList};

    #[test]
    fn test_format_tasks_pretty() {
        colored::control::set_override(false);
        let list = TaskList::new(SampleRecords.tasks());
        let out = format_tasks_pretty(&list.ordered(), list.completed_count());

        assert!(out.starts_with("Tasks (2/6 done)"));
        assert!(out.contains("[ ] !!! Review Calculus Ch. 12"));
        assert!(out.contains("Today 5PM"));
        assert!(!out.contains("Done"));
    }

    #[test]
    fn test_format_habits_pretty() {
        colored::control::set_override(false);
        let out = format_habits_pretty(&SampleRecords.habits());

        assert!(out.starts_with("Habits (1/4 complete)"));
        assert!(out.contains("7/7"));
        assert!(out.contains("15d streak"));
    }

    #[test]
    fn test_format_empty_tasks() {
        assert_eq!(format_tasks_pretty(&[], 0), "Tasks (0 items)\n  No tasks");
    }

    #[test]
    fn test_format_timer_pretty() {
        colored::control::set_override(false);
        let out = format_timer_pretty(&TimerSession::new().snapshot());

        assert!(out.starts_with("Focus 25:00"));
        assert!(out.contains("paused"));
        assert!(out.contains("0%"));
    }
}
