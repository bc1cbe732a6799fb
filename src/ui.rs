use crate::models::StatsView;

pub fn render_index(view: &StatsView) -> String {
    let day = &view.day;
    INDEX_HTML
        .replace("{{DATE}}", &day.date.format("%a %-d %b %Y").to_string())
        .replace("{{STEPS}}", &day.steps_taken.to_string())
        .replace("{{CALORIES}}", &day.calorie_burned.to_string())
        .replace("{{DISTANCE}}", &format!("{:.2}", day.distance_travelled))
        .replace("{{CO2}}", &format!("{:.2}", day.carbon_dioxide_saved))
        .replace("{{GOAL_HIDDEN}}", hidden(day.goal_reached))
        .replace("{{PREV_HIDDEN}}", hidden(view.can_go_previous))
        .replace("{{NEXT_HIDDEN}}", hidden(view.can_go_next))
        .replace("{{PAGE}}", &view.chart_page.to_string())
        .replace("{{PAGE_COUNT}}", &view.week_count.to_string())
}

fn hidden(visible: bool) -> &'static str {
    if visible { "" } else { "hidden" }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Step Tracker</title>
  <style>
    :root {
      --bg: #eef5ec;
      --ink: #1f2a22;
      --accent: #3c8d4f;
      --muted: #6d786f;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #f8fbf6 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: 0 20px 50px rgba(31, 42, 34, 0.14);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    .day-switch {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .day-switch h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .day-switch form[hidden] {
      visibility: hidden;
      display: block;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      border: 1px solid rgba(31, 42, 34, 0.08);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .goal {
      color: var(--accent);
      font-weight: 600;
    }

    #chart {
      width: 100%;
      height: 180px;
      display: block;
    }

    .bar {
      fill: var(--accent);
    }

    .bar-label {
      fill: var(--muted);
      font-size: 11px;
    }
  </style>
</head>
<body>
  <main class="app">
    <section class="day-switch">
      <form method="post" action="/day/previous" {{PREV_HIDDEN}}>
        <button type="submit">&larr; Previous</button>
      </form>
      <h1>{{DATE}}</h1>
      <form method="post" action="/day/next" {{NEXT_HIDDEN}}>
        <button type="submit">Next &rarr;</button>
      </form>
    </section>

    <p class="goal" {{GOAL_HIDDEN}}>Daily goal reached</p>

    <section class="panel">
      <div class="stat">
        <span class="label">Steps</span>
        <span class="value">{{STEPS}}</span>
      </div>
      <div class="stat">
        <span class="label">Calories</span>
        <span class="value">{{CALORIES}} kcal</span>
      </div>
      <div class="stat">
        <span class="label">Distance</span>
        <span class="value">{{DISTANCE}} km</span>
      </div>
      <div class="stat">
        <span class="label">CO2 saved</span>
        <span class="value">{{CO2}} kg</span>
      </div>
    </section>

    <section>
      <p class="label">Week {{PAGE}} of {{PAGE_COUNT}} back</p>
      <svg id="chart" viewBox="0 0 560 180" role="img" aria-label="Steps per day"></svg>
    </section>
  </main>

  <script>
    const chartEl = document.getElementById('chart');

    const renderBars = (days) => {
      const max = Math.max(1, ...days.map((day) => day.steps));
      const slot = 560 / days.length;
      chartEl.innerHTML = days
        .map((day, index) => {
          const height = Math.round((day.steps / max) * 140);
          const x = index * slot + 10;
          return `<rect class="bar" x="${x}" y="${150 - height}" width="${slot - 20}" height="${height}" rx="6" />` +
            `<text class="bar-label" x="${x + (slot - 20) / 2}" y="170" text-anchor="middle">${day.date.slice(5)}</text>`;
        })
        .join('');
    };

    fetch('/api/chart/{{PAGE}}')
      .then((res) => (res.ok ? res.json() : Promise.reject(res.status)))
      .then((page) => renderBars(page.days))
      .catch(() => {
        chartEl.innerHTML = '<text class="bar-label" x="50%" y="50%" text-anchor="middle">No chart data</text>';
      });
  </script>
</body>
</html>
"#;
