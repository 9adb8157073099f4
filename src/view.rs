/// Server-rendered HTML for the habit list page
///
/// The page is rebuilt on every request. The progress function is passed
/// in by the caller rather than looked up from a global registry.

use std::fmt::Write;

use crate::domain::Habit;

/// Render the index page for the given habits
///
/// `progress` maps a streak to the 0-100 percentage shown in each bar.
pub fn render_index<F>(habits: &[Habit], progress: F) -> String
where
    F: Fn(i64) -> i64,
{
    let mut rows = String::new();
    for habit in habits {
        let percent = progress(habit.streak).min(100);
        // Writing into a String cannot fail
        let _ = write!(
            rows,
            r#"
      <li class="habit">
        <div class="habit-header">
          <span class="habit-name">{name}</span>
          <span class="habit-streak">Streak: {streak}</span>
          <a class="mark-done" href="/mark_done/{id}">Mark done</a>
        </div>
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{percent}">
          <div class="progress-bar" style="width: {percent}%">{percent}%</div>
        </div>
      </li>"#,
            name = escape_html(&habit.name),
            streak = habit.streak,
            id = habit.id,
            percent = percent,
        );
    }

    let list = if habits.is_empty() {
        r#"<p class="empty">No habits yet. Add one above to start a streak.</p>"#.to_string()
    } else {
        format!("<ul class=\"habits\">{}\n    </ul>", rows)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Habit Tracker</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main>
    <h1>Habit Tracker</h1>
    <form class="add-habit" action="/add" method="post">
      <input type="text" name="name" placeholder="New habit" required>
      <button type="submit">Add</button>
    </form>
    {list}
    <form class="delete-all" action="/delete_all" method="post">
      <button type="submit">Delete all habits</button>
    </form>
  </main>
</body>
</html>
"#,
        list = list,
    )
}

/// Escape text for use inside HTML element content and attribute values
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
