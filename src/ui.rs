use crate::models::CollectionKind;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{CSS}}", SHARED_CSS)
}

pub fn render_collection(kind: CollectionKind) -> String {
    let range = kind.range();
    let subtitle = format!("{} - {}", range.format(range.min), range.format(range.max));
    COLLECTION_HTML
        .replace("{{CSS}}", SHARED_CSS)
        .replace("{{TITLE}}", kind.title())
        .replace("{{SUBTITLE}}", &subtitle)
        .replace("{{KIND}}", kind.slug())
        .replace("{{MIN}}", &range.format(range.min))
        .replace("{{MAX}}", &range.format(range.max))
}

const SHARED_CSS: &str = r#"
    :root {
      --bg-1: #f1f5f9;
      --bg-2: #dbe7f4;
      --ink: #0f172a;
      --muted: #64748b;
      --accent: #2563eb;
      --danger: #dc2626;
      --ok: #16a34a;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(15, 23, 42, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 18px 48px;
    }

    .wrap {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    header .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border-radius: 14px;
      border: 1px solid rgba(15, 23, 42, 0.08);
      padding: 16px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent);
    }

    button:disabled {
      opacity: 0.55;
      cursor: wait;
    }

    button.danger {
      background: var(--danger);
    }

    input {
      width: 100%;
      border: 1px solid rgba(15, 23, 42, 0.18);
      border-radius: 10px;
      padding: 12px;
      font-size: 1.05rem;
      font-family: "Consolas", monospace;
      text-align: center;
    }

    .status {
      min-height: 1.3em;
      font-size: 0.95rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--ok);
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Jantrik Collection</title>
  <style>
    {{CSS}}

    .choices {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 24px;
    }

    .choice h2 {
      margin: 0 0 6px;
    }

    .choice p {
      margin: 0 0 16px;
      color: var(--muted);
    }

    .choice .count {
      font-size: 2rem;
      font-weight: 700;
      margin-bottom: 16px;
    }

    .choice a {
      display: inline-block;
      text-decoration: none;
      color: white;
      background: var(--accent);
      border-radius: 10px;
      padding: 12px 18px;
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main class="wrap">
    <header>
      <h1>Jantrik Collection</h1>
      <p class="subtitle">Add numbers, track amounts, and export your collection data.</p>
    </header>

    <section class="choices">
      <div class="card choice">
        <h2>3up Collection</h2>
        <p>Manage numbers from 000 to 999</p>
        <div class="count">1,000</div>
        <a href="/collection/3up">Access 3up Collection</a>
      </div>
      <div class="card choice">
        <h2>Down Collection</h2>
        <p>Manage numbers from 00 to 99</p>
        <div class="count">100</div>
        <a href="/collection/down">Access Down Collection</a>
      </div>
    </section>
  </main>
</body>
</html>
"#;

const COLLECTION_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    {{CSS}}

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .toolbar .actions {
      display: flex;
      gap: 10px;
    }

    .toolbar a {
      color: var(--accent);
      text-decoration: none;
      font-weight: 600;
    }

    .columns {
      display: grid;
      grid-template-columns: minmax(260px, 1fr) 2fr;
      gap: 24px;
    }

    form .field {
      margin-bottom: 14px;
    }

    form label {
      display: block;
      margin-bottom: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    form button {
      width: 100%;
    }

    .list-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 14px;
    }

    .list-head input {
      width: 220px;
      text-align: left;
      font-family: inherit;
    }

    #entries {
      max-height: 540px;
      overflow-y: auto;
      display: grid;
      gap: 8px;
    }

    .entry {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 10px 14px;
      border-radius: 10px;
      background: rgba(37, 99, 235, 0.06);
    }

    .entry .number {
      font-family: "Consolas", monospace;
      font-size: 1.2rem;
      font-weight: 600;
    }

    .entry .amount {
      font-weight: 600;
      color: var(--accent);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 32px 0;
    }

    @media (max-width: 720px) {
      .columns {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="wrap">
    <header class="toolbar">
      <div>
        <a href="/">&larr; Home</a>
        <h1>{{TITLE}}</h1>
        <p class="subtitle">{{SUBTITLE}}</p>
      </div>
      <div class="actions">
        <button id="export-btn" type="button">Export Excel</button>
        <button id="reset-btn" class="danger" type="button">Reset Collection</button>
      </div>
    </header>

    <section class="stat-grid">
      <div class="stat">
        <span class="label">Active Numbers</span>
        <span class="value" id="active-count">0</span>
      </div>
      <div class="stat">
        <span class="label">Total Amount</span>
        <span class="value" id="total-amount">0</span>
      </div>
      <div class="stat">
        <span class="label">Available Numbers</span>
        <span class="value" id="available-count">0</span>
      </div>
    </section>

    <div class="columns">
      <div class="card">
        <h2>Add Amount</h2>
        <form id="add-form">
          <div class="field">
            <label for="number">Number ({{SUBTITLE}})</label>
            <input id="number" name="number" inputmode="numeric" placeholder="Enter {{MIN}}-{{MAX}}" required />
          </div>
          <div class="field">
            <label for="amount">Amount</label>
            <input id="amount" name="amount" inputmode="decimal" placeholder="Enter amount" required />
          </div>
          <button id="add-btn" type="submit">Add Amount</button>
        </form>
        <div class="status" id="status"></div>
      </div>

      <div class="card">
        <div class="list-head">
          <h2>Collection Numbers</h2>
          <input id="search" type="search" placeholder="Search numbers..." />
        </div>
        <div id="entries"></div>
      </div>
    </div>
  </main>

  <script>
    const kind = '{{KIND}}';
    const statusEl = document.getElementById('status');
    const entriesEl = document.getElementById('entries');
    const searchEl = document.getElementById('search');
    const addForm = document.getElementById('add-form');
    const addBtn = document.getElementById('add-btn');
    const exportBtn = document.getElementById('export-btn');
    const resetBtn = document.getElementById('reset-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderEntries = (data) => {
      document.getElementById('active-count').textContent = data.active_count;
      document.getElementById('total-amount').textContent = data.total_amount.toLocaleString();
      document.getElementById('available-count').textContent = data.available_count.toLocaleString();

      if (!data.entries.length) {
        entriesEl.innerHTML = '<div class="empty">No numbers found. Start by adding amounts.</div>';
        return;
      }

      entriesEl.innerHTML = data.entries
        .map((entry) =>
          `<div class="entry"><span class="number">${entry.number}</span>` +
          `<span class="amount">${entry.amount.toLocaleString()}</span></div>`
        )
        .join('');
    };

    const loadEntries = async () => {
      const term = encodeURIComponent(searchEl.value);
      const res = await fetch(`/api/${kind}/entries?search=${term}`);
      if (!res.ok) {
        throw new Error('Unable to load collection');
      }
      renderEntries(await res.json());
    };

    addForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (addBtn.disabled) return;
      addBtn.disabled = true;
      try {
        const res = await fetch(`/api/${kind}/add`, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            number: document.getElementById('number').value,
            amount: document.getElementById('amount').value
          })
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        const result = await res.json();
        addForm.reset();
        setStatus(`Added ${result.amount} to number ${result.number}. New total: ${result.new_total}`, 'ok');
        await loadEntries();
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        addBtn.disabled = false;
      }
    });

    exportBtn.addEventListener('click', async () => {
      if (exportBtn.disabled) return;
      exportBtn.disabled = true;
      try {
        const res = await fetch(`/api/${kind}/export`);
        if (!res.ok) {
          throw new Error(await res.text() || 'Export failed');
        }
        const disposition = res.headers.get('content-disposition') || '';
        const match = disposition.match(/filename="([^"]+)"/);
        const blob = await res.blob();
        const link = document.createElement('a');
        link.href = URL.createObjectURL(blob);
        link.download = match ? match[1] : `${kind}-collection.xlsx`;
        link.click();
        URL.revokeObjectURL(link.href);
        setStatus('Collection exported', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        exportBtn.disabled = false;
      }
    });

    resetBtn.addEventListener('click', async () => {
      if (resetBtn.disabled) return;
      if (!confirm('Reset this collection? All accumulated amounts will be deleted permanently.')) {
        return;
      }
      resetBtn.disabled = true;
      try {
        const res = await fetch(`/api/${kind}/reset`, { method: 'POST' });
        if (!res.ok) {
          throw new Error(await res.text() || 'Reset failed');
        }
        renderEntries(await res.json());
        searchEl.value = '';
        setStatus('Collection has been reset', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        resetBtn.disabled = false;
      }
    });

    searchEl.addEventListener('input', () => {
      loadEntries().catch((err) => setStatus(err.message, 'error'));
    });

    loadEntries().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
