pub const APP_STYLE: &str = r#"
:root {
    color-scheme: light;
    font-family: 'Noto Kufi Arabic', 'Segoe UI', Tahoma, system-ui, sans-serif;
    background-color: #f3f4f6;
    color: #1f2937;
}

body {
    margin: 0;
}

.app {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

header {
    padding: 24px 32px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    background: #ffffff;
    box-shadow: 0 2px 8px rgba(15, 23, 42, 0.08);
}

header h1 {
    margin: 0;
    font-size: 28px;
    font-weight: 700;
    color: #111827;
}

.header-meta {
    display: flex;
    align-items: center;
    gap: 16px;
}

.helper {
    color: #6b7280;
    font-size: 13px;
}

main {
    padding: 32px;
    max-width: 1280px;
    width: 100%;
    margin: 0 auto;
    box-sizing: border-box;
}

.card {
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 12px 32px rgba(15, 23, 42, 0.1);
    padding: 32px;
}

.status-message {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 256px;
    font-size: 20px;
    font-weight: 600;
    color: #374151;
}

.status-message.error {
    color: #ef4444;
}

button {
    background: #2563eb;
    border: none;
    border-radius: 6px;
    padding: 8px 24px;
    color: #ffffff;
    font-weight: 500;
    font-family: inherit;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
    gap: 8px;
    transition: background 160ms ease;
}

button:hover:not(:disabled) {
    background: #1d4ed8;
}

button.secondary {
    background: #e5e7eb;
    color: #1f2937;
}

button.secondary:hover:not(:disabled) {
    background: #d1d5db;
}

button.danger {
    background: #fee2e2;
    color: #991b1b;
}

button.toggle.active {
    background: #16a34a;
}

button:disabled,
button.disabled {
    background: #e5e7eb;
    color: #9ca3af;
    cursor: not-allowed;
}

.badge {
    background: #ffffff;
    color: #16a34a;
    font-size: 12px;
    font-weight: 700;
    border-radius: 999px;
    min-width: 24px;
    padding: 0 6px;
    text-align: center;
}

.toolbar {
    display: flex;
    justify-content: center;
    gap: 16px;
    margin-bottom: 16px;
}

.filter-panel {
    margin-bottom: 32px;
    padding: 24px;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
}

.filter-panel h2 {
    margin: 0 0 16px;
    font-size: 20px;
    color: #1d4ed8;
}

.filter-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 24px;
}

.field {
    display: flex;
    flex-direction: column;
    gap: 4px;
    font-size: 14px;
    color: #374151;
}

input {
    border: 1px solid #d1d5db;
    border-radius: 6px;
    padding: 8px 16px;
    font-size: 14px;
    font-family: inherit;
}

input:focus {
    outline: 2px solid #3b82f6;
}

.filter-actions {
    display: flex;
    justify-content: center;
    gap: 16px;
    margin-top: 24px;
}

.filter-status {
    margin-top: 16px;
    text-align: center;
    font-size: 14px;
    color: #2563eb;
}

.table-wrap {
    overflow-x: auto;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
    margin-bottom: 32px;
}

.logs-table {
    width: 100%;
    border-collapse: separate;
    border-spacing: 20px;
}

.logs-table th {
    padding: 24px 32px;
    text-align: center;
    font-size: 14px;
    font-weight: 700;
    color: #1d4ed8;
    background: #eff6ff;
    border-radius: 4px;
}

.logs-table td {
    padding: 24px 32px;
    font-size: 14px;
    color: #374151;
    background: #ffffff;
    border-radius: 4px;
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
}

.logs-table tr:hover td {
    background: #f9fafb;
}

.logs-table tr.outstanding td:first-child {
    border-inline-start: 4px solid #f59e0b;
}

.logs-table td.empty-row {
    padding: 40px 32px;
    text-align: center;
    color: #6b7280;
}

.pager {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
}

.page-position {
    font-size: 14px;
    font-weight: 500;
    color: #374151;
}

.filter-summary {
    margin-inline-start: 8px;
}

.pager-buttons {
    display: flex;
    gap: 16px;
}

.diagnostics {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.diagnostics h2 {
    margin: 0;
    font-size: 24px;
}

.probe-status {
    padding: 12px;
    border-radius: 6px;
}

.probe-status.ok { background: #dcfce7; color: #166534; }
.probe-status.warn { background: #ffedd5; color: #9a3412; }
.probe-status.pending { background: #f3f4f6; color: #374151; }

.probe-label {
    font-weight: 600;
    margin-bottom: 8px;
}

.probe-body pre {
    background: #f3f4f6;
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
    max-height: 384px;
    margin: 0;
    font-size: 12px;
}

.diagnostics > button {
    align-self: flex-start;
}

.hints {
    padding: 16px;
    background: #eff6ff;
    border: 1px solid #bfdbfe;
    border-radius: 6px;
}

.hints h3 {
    margin: 0 0 8px;
    font-size: 16px;
}

.hints ul {
    margin: 0;
    padding-left: 20px;
}
"#;
