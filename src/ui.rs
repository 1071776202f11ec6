use crate::models::ViewResponse;
use crate::window::INTERVAL_PRESETS;

pub fn render_index(view: &ViewResponse) -> String {
    let initial = serde_json::to_string(view)
        .map(|json| json.replace("</", "<\\/"))
        .unwrap_or_else(|_| "null".to_string());
    let file_status = match &view.file_name {
        Some(name) if view.loaded => format!("Загружен: {}", escape_html(name)),
        _ if view.loaded => "Загружен".to_string(),
        _ => "Файл не выбран".to_string(),
    };

    INDEX_HTML
        .replace("{{INTERVAL_BUTTONS}}", &interval_buttons(view))
        .replace("{{FILE_STATUS}}", &file_status)
        .replace("{{INITIAL_VIEW}}", &initial)
}

fn interval_buttons(view: &ViewResponse) -> String {
    INTERVAL_PRESETS
        .iter()
        .map(|days| {
            let active = if *days == view.interval_days { " active" } else { "" };
            let disabled = if view.loaded { "" } else { " disabled" };
            format!(
                r#"<button class="interval-btn{active}" type="button" data-days="{days}"{disabled}>{days} дней</button>"#
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Водный баланс</title>
  <style>
    :root {
      --bg-1: #eef7f8;
      --ink: #23343a;
      --primary: #44b7c2;
      --primary-edge: #1a8791;
      --secondary: #ffad49;
      --secondary-edge: #db841a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(26, 135, 145, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), #ffffff 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .file-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    .file-label {
      background: var(--primary);
      color: white;
      border-radius: 999px;
      padding: 10px 18px;
      cursor: pointer;
      font-weight: 600;
    }

    .file-label input {
      display: none;
    }

    #current-file-name {
      color: #5b6b70;
    }

    #current-file-name[data-type="error"] {
      color: #ff6b6b;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .intervals,
    .nav {
      display: flex;
      gap: 6px;
      align-items: center;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(26, 135, 145, 0.1);
      color: var(--ink);
    }

    button.active {
      background: var(--primary-edge);
      color: white;
    }

    button:disabled {
      opacity: 0.4;
      cursor: default;
    }

    #period-display {
      min-width: 200px;
      text-align: center;
      font-weight: 600;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(26, 135, 145, 0.1);
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-grid {
      stroke: rgba(35, 52, 58, 0.1);
    }

    .chart-label {
      fill: #6b7b80;
      font-size: 11px;
    }

    .bar-primary {
      fill: var(--primary);
      stroke: var(--primary-edge);
    }

    .bar-secondary {
      fill: var(--secondary);
      stroke: var(--secondary-edge);
    }

    .legend {
      display: flex;
      gap: 16px;
      font-size: 0.85rem;
      margin-bottom: 8px;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 12px;
      height: 12px;
      margin-right: 6px;
      border-radius: 3px;
      vertical-align: -1px;
    }

    .legend .primary::before {
      background: var(--primary);
    }

    .legend .secondary::before {
      background: var(--secondary);
    }

    #no-data-message {
      text-align: center;
      color: #6b7b80;
    }

    #stats-container {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .stat-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border-top: 4px solid var(--primary);
      display: grid;
      gap: 8px;
    }

    .stat-card.secondary {
      border-top-color: var(--secondary);
    }

    .stat-card.combined {
      border-top-color: var(--ink);
    }

    .stat-card h3 {
      margin: 0 0 4px;
      font-size: 1.05rem;
    }

    .stat-item {
      display: flex;
      justify-content: space-between;
      gap: 8px;
    }

    .stat-label {
      color: #6b7b80;
    }

    .stat-value {
      font-weight: 600;
    }

    .hint {
      margin: 0;
      color: #6b7b80;
      font-size: 0.85rem;
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Водный баланс</h1>
    </header>

    <section class="file-row">
      <label class="file-label">
        Выбрать файл
        <input id="data-file" type="file" accept=".txt,.csv,text/plain" />
      </label>
      <span id="current-file-name">{{FILE_STATUS}}</span>
    </section>

    <section class="controls">
      <div class="intervals">{{INTERVAL_BUTTONS}}</div>
      <div class="nav">
        <button id="prev-period" type="button" disabled>&#8249; Назад</button>
        <span id="period-display">Загрузите файл с данными</span>
        <button id="next-period" type="button" disabled>Вперёд &#8250;</button>
      </div>
    </section>

    <section class="chart-card">
      <div class="legend">
        <span class="primary">Выпил</span>
        <span class="secondary">Вышло</span>
      </div>
      <svg id="chart" viewBox="0 0 600 300" aria-label="Объём по дням" role="img"></svg>
      <p id="no-data-message">Нет данных. Загрузите файл.</p>
    </section>

    <section id="stats-container"></section>

    <p class="hint">Формат строки: ДД.ММ.ГГГГ;время;выпито;вышло. Некорректные строки пропускаются.</p>
  </main>

  <script>
    const ERROR_RESET_MS = 3000;
    const intervalButtons = Array.from(document.querySelectorAll('.interval-btn'));
    const prevPeriodBtn = document.getElementById('prev-period');
    const nextPeriodBtn = document.getElementById('next-period');
    const periodDisplay = document.getElementById('period-display');
    const chartEl = document.getElementById('chart');
    const noDataMessage = document.getElementById('no-data-message');
    const statsContainer = document.getElementById('stats-container');
    const fileInput = document.getElementById('data-file');
    const fileNameDisplay = document.getElementById('current-file-name');

    let view = {{INITIAL_VIEW}};
    let errorTimer = null;

    const setFileStatus = (message, type) => {
      fileNameDisplay.textContent = message;
      fileNameDisplay.dataset.type = type || '';
    };

    const loadedStatus = () => {
      if (!view || !view.loaded) {
        return 'Файл не выбран';
      }
      const name = view.file_name ? `Загружен: ${view.file_name}` : 'Загружен';
      return view.warning_count > 0 ? `${name} (пропущено строк: ${view.warning_count})` : name;
    };

    const showError = (message) => {
      setFileStatus(message, 'error');
      clearTimeout(errorTimer);
      errorTimer = setTimeout(() => setFileStatus('Файл не выбран', ''), ERROR_RESET_MS);
    };

    const formatML = (value) => (value >= 1000 ? `${(value / 1000).toFixed(1)} л` : `${value} мл`);

    const periodText = (label) => {
      switch (label.kind) {
        case 'latest':
          return `Последние ${label.days} дней`;
        case 'range':
          return `${label.first} - ${label.last}`;
        case 'empty':
          return 'Нет данных для периода';
        default:
          return 'Загрузите файл с данными';
      }
    };

    const escapeText = (text) =>
      String(text).replace(/[&<>"]/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' })[c]);

    const renderBarChart = (days) => {
      if (!days.length) {
        chartEl.innerHTML = '';
        chartEl.style.display = 'none';
        noDataMessage.style.display = 'block';
        return;
      }
      chartEl.style.display = 'block';
      noDataMessage.style.display = 'none';

      const width = 600;
      const height = 300;
      const paddingLeft = 60;
      const paddingRight = 16;
      const paddingBottom = 40;
      const top = 16;

      const peak = Math.max(1, ...days.map((day) => Math.max(day.primary_total, day.secondary_total)));
      const plotHeight = height - top - paddingBottom;
      const groupWidth = (width - paddingLeft - paddingRight) / days.length;
      const barWidth = Math.max(2, groupWidth * 0.35);
      const y = (value) => height - paddingBottom - (value / peak) * plotHeight;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = Math.round((peak * i) / ticks);
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingLeft}" y1="${yPos}" x2="${width - paddingRight}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingLeft - 8}" y="${yPos + 4}" text-anchor="end">${value} мл</text>`;
      }

      const labelEvery = Math.ceil(days.length / 10);
      const bars = days
        .map((day, index) => {
          const groupX = paddingLeft + index * groupWidth + (groupWidth - barWidth * 2) / 2;
          const tooltip = `<title>${escapeText(day.date_text)}\nВыпил: ${day.primary_total} мл\nВышло: ${day.secondary_total} мл\nВсего: ${day.combined_total} мл</title>`;
          const primary = `<rect class="bar-primary" x="${groupX}" y="${y(day.primary_total)}" width="${barWidth}" height="${y(0) - y(day.primary_total)}">${tooltip}</rect>`;
          const secondary = `<rect class="bar-secondary" x="${groupX + barWidth}" y="${y(day.secondary_total)}" width="${barWidth}" height="${y(0) - y(day.secondary_total)}">${tooltip}</rect>`;
          const label = index % labelEvery === 0
            ? `<text class="chart-label" x="${groupX + barWidth}" y="${height - paddingBottom + 18}" text-anchor="middle">${escapeText(day.date_text.slice(0, 5))}</text>`
            : '';
          return primary + secondary + label;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = grid + bars;
    };

    const statCard = (title, css, channel) => `
      <div class="stat-card ${css}">
        <h3>${title}</h3>
        <div class="stat-item">
          <span class="stat-label">Всего за период</span>
          <span class="stat-value">${channel.total_text}</span>
        </div>
        <div class="stat-item">
          <span class="stat-label">Среднее в день</span>
          <span class="stat-value">${channel.average_text}</span>
        </div>
        <div class="stat-item">
          <span class="stat-label">Максимум ${escapeText(channel.max_date || 'Нет данных')}</span>
          <span class="stat-value">${channel.max_text}</span>
        </div>
      </div>`;

    const renderStats = () => {
      if (!view.loaded) {
        statsContainer.style.display = 'none';
        return;
      }
      statsContainer.style.display = 'grid';
      statsContainer.innerHTML =
        statCard('Основная вода', 'primary', view.stats.primary) +
        statCard('Другая вода', 'secondary', view.stats.secondary) +
        statCard('Всего', 'combined', view.stats.combined);
    };

    const render = () => {
      if (!view) {
        return;
      }
      periodDisplay.textContent = periodText(view.label);
      prevPeriodBtn.disabled = !view.can_go_previous;
      nextPeriodBtn.disabled = !view.can_go_next;
      intervalButtons.forEach((button) => {
        button.disabled = !view.loaded;
        button.classList.toggle('active', Number(button.dataset.days) === view.interval_days);
      });
      renderBarChart(view.days);
      renderStats();
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Ошибка запроса');
      }
      view = await res.json();
      render();
    };

    const post = (url, body) =>
      request(url, {
        method: 'POST',
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });

    intervalButtons.forEach((button) => {
      button.addEventListener('click', () => {
        post('/api/interval', { days: Number(button.dataset.days) }).catch((err) => showError(err.message));
      });
    });

    prevPeriodBtn.addEventListener('click', () => {
      post('/api/period/previous').catch((err) => showError(err.message));
    });

    nextPeriodBtn.addEventListener('click', () => {
      post('/api/period/next').catch((err) => showError(err.message));
    });

    fileInput.addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file) {
        return;
      }
      setFileStatus(`Загружаем: ${file.name}`, 'info');
      try {
        const body = await file.arrayBuffer();
        await request(`/api/upload?name=${encodeURIComponent(file.name)}`, {
          method: 'POST',
          headers: { 'content-type': 'application/octet-stream' },
          body
        });
        setFileStatus(loadedStatus(), 'ok');
      } catch (err) {
        showError(`Ошибка обработки: ${err.message}`);
      } finally {
        fileInput.value = '';
      }
    });

    render();
    if (view && view.loaded) {
      setFileStatus(loadedStatus(), 'ok');
    }
  </script>
</body>
</html>
"##;
