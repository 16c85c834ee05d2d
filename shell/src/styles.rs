//! CSS styles and security headers for the shell page.
//!
//! This module contains the complete CSS for the shell layout, the light
//! and dark palettes, and the category color tokens.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use fleet_shell::styles::SHELL_CSS;
//!
//! let my_css = ".brand-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", SHELL_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Light palette by default, dark palette under `html.dark`
//! - Collapsible sidebar (icon-only rail when collapsed)
//! - Category accent colors (`cat-red`, `cat-blue`, ...)
//! - Full-bleed embed area with a loading overlay

/// Complete CSS for the shell.
pub const SHELL_CSS: &str = r#"
:root {
    --bg-app: #f3f4f6;
    --bg-panel: #ffffff;
    --bg-hover: #f1f5f9;
    --bg-active: #e0ecff;
    --text-main: #111827;
    --text-dim: #4b5563;
    --text-muted: #9ca3af;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-soft: rgba(37, 99, 235, 0.12);
    --cat-red: #dc2626;
    --cat-blue: #2563eb;
    --cat-amber: #d97706;
    --cat-cyan: #0891b2;
    --cat-violet: #7c3aed;
    --cat-slate: #475569;
    --sidebar-width: 272px;
    --sidebar-rail: 64px;
    --topbar-height: 60px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

html.dark {
    --bg-app: #0b0f17;
    --bg-panel: #111827;
    --bg-hover: #1f2937;
    --bg-active: #1e3a8a;
    --text-main: #f3f4f6;
    --text-dim: #cbd5e1;
    --text-muted: #6b7280;
    --border: #1f2937;
    --accent: #60a5fa;
    --accent-soft: rgba(96, 165, 250, 0.16);
    --cat-red: #f87171;
    --cat-blue: #60a5fa;
    --cat-amber: #fbbf24;
    --cat-cyan: #22d3ee;
    --cat-violet: #a78bfa;
    --cat-slate: #94a3b8;
    color-scheme: dark;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    height: 100%;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-app);
    color: var(--text-main);
    font-size: 14px;
    line-height: 1.5;
}

button {
    font: inherit;
    color: inherit;
    background: none;
    border: 0;
    cursor: pointer;
}

code {
    font-family: var(--font-mono);
    font-size: 12px;
    background: var(--bg-hover);
    padding: 1px 6px;
    border-radius: 4px;
}

.app-shell {
    display: flex;
    flex-direction: column;
    height: 100vh;
}

.app-body {
    display: flex;
    flex: 1;
    min-height: 0;
}

.app-main {
    flex: 1;
    min-width: 0;
    display: flex;
}

/* Top bar */
.shell-topbar {
    height: var(--topbar-height);
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 0 20px;
    background: var(--bg-panel);
    border-bottom: 1px solid var(--border);
}

.brand {
    display: flex;
    align-items: center;
    gap: 10px;
}

.brand-mark {
    display: flex;
    padding: 8px;
    border-radius: 10px;
    background: var(--accent);
    color: #ffffff;
}

.brand-text {
    display: flex;
    flex-direction: column;
    line-height: 1.2;
}

.brand-title {
    font-weight: 700;
}

.brand-subtitle {
    font-size: 12px;
    color: var(--text-muted);
}

.search-box {
    flex: 1;
    max-width: 420px;
    margin-left: auto;
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 6px 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg-app);
    color: var(--text-muted);
}

.search-box input {
    flex: 1;
    border: 0;
    outline: 0;
    background: transparent;
    color: var(--text-main);
    font: inherit;
}

.theme-toggle {
    display: flex;
    padding: 8px;
    border-radius: 8px;
    color: var(--text-dim);
}

.theme-toggle:hover {
    background: var(--bg-hover);
}

/* Sidebar */
.shell-sidebar {
    width: var(--sidebar-width);
    flex-shrink: 0;
    display: flex;
    flex-direction: column;
    background: var(--bg-panel);
    border-right: 1px solid var(--border);
    transition: width 0.2s ease;
}

.shell-sidebar.collapsed {
    width: var(--sidebar-rail);
}

.sidebar-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 14px 16px;
    border-bottom: 1px solid var(--border);
}

.shell-sidebar.collapsed .sidebar-header {
    justify-content: center;
    padding: 14px 0;
}

.sidebar-title {
    font-size: 12px;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.06em;
    color: var(--text-muted);
}

.sidebar-toggle {
    display: flex;
    padding: 4px;
    border-radius: 6px;
    color: var(--text-dim);
}

.sidebar-toggle:hover {
    background: var(--bg-hover);
}

.sidebar-nav {
    flex: 1;
    overflow-y: auto;
    padding: 8px;
}

.nav-empty,
.nav-group-empty {
    margin: 8px 12px;
    font-size: 12px;
    color: var(--text-muted);
}

.nav-group + .nav-group {
    margin-top: 4px;
}

.nav-group-header {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 8px 10px;
    border-radius: 8px;
    font-weight: 600;
    text-align: left;
}

.nav-group-header:hover {
    background: var(--bg-hover);
}

.shell-sidebar.collapsed .nav-group-header {
    justify-content: center;
}

.nav-group-label {
    flex: 1;
}

.nav-group-count {
    font-size: 11px;
    padding: 0 7px;
    border-radius: 999px;
    background: var(--bg-hover);
    color: var(--text-dim);
}

.nav-caret {
    color: var(--text-muted);
}

.cat-red .nav-group-icon { color: var(--cat-red); }
.cat-blue .nav-group-icon { color: var(--cat-blue); }
.cat-amber .nav-group-icon { color: var(--cat-amber); }
.cat-cyan .nav-group-icon { color: var(--cat-cyan); }
.cat-violet .nav-group-icon { color: var(--cat-violet); }
.cat-slate .nav-group-icon { color: var(--cat-slate); }

.nav-group-items {
    padding: 2px 0 6px 12px;
}

.shell-sidebar.collapsed .nav-group-items {
    padding-left: 0;
}

.nav-item {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 7px 10px;
    border-radius: 8px;
    color: var(--text-dim);
    text-align: left;
}

.shell-sidebar.collapsed .nav-item {
    justify-content: center;
}

.nav-item:hover {
    background: var(--bg-hover);
    color: var(--text-main);
}

.nav-item.active {
    background: var(--bg-active);
    color: var(--accent);
    font-weight: 600;
}

.nav-item.pending {
    box-shadow: inset 2px 0 0 var(--accent);
}

.nav-item-name {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.sidebar-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 16px;
    border-top: 1px solid var(--border);
    font-size: 12px;
    color: var(--text-muted);
}

.shell-sidebar.collapsed .sidebar-footer {
    justify-content: center;
    padding: 12px 0;
}

.footer-count {
    font-weight: 700;
    color: var(--text-main);
}

/* Viewer */
.shell-viewer {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 0;
}

.shell-viewer.viewer-embed {
    align-items: stretch;
}

.viewer-message {
    max-width: 480px;
    padding: 24px;
    text-align: center;
}

.viewer-message h3 {
    margin: 0 0 8px;
    font-size: 22px;
}

.viewer-message p {
    margin: 0 0 12px;
    color: var(--text-dim);
}

.viewer-badge {
    display: inline-flex;
    padding: 20px;
    margin-bottom: 20px;
    border-radius: 16px;
    color: #ffffff;
}

.badge-accent { background: var(--accent); }
.badge-red { background: var(--cat-red); }
.badge-amber { background: var(--cat-amber); }

.viewer-hint {
    display: inline-block;
    padding: 6px 14px;
    border-radius: 999px;
    background: var(--bg-hover);
    font-size: 12px;
    color: var(--text-muted);
}

.config-steps {
    margin-top: 12px;
    padding: 14px 18px;
    text-align: left;
    border: 1px solid var(--cat-amber);
    border-radius: 10px;
    background: var(--bg-panel);
}

.config-steps p {
    font-weight: 600;
    color: var(--text-main);
}

.config-steps ol {
    margin: 0;
    padding-left: 20px;
    color: var(--text-dim);
}

.embed-wrap {
    position: relative;
    flex: 1;
}

.embed-frame {
    width: 100%;
    height: 100%;
    border: 0;
    display: block;
}

.loading-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    background: var(--bg-app);
    color: var(--text-muted);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
}

.loading-overlay.visible {
    opacity: 1;
}

.spin {
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;

/// Content-Security-Policy for the shell page.
///
/// Embeds may come from any http(s) origin; everything else stays
/// same-origin. `wasm-unsafe-eval` lets the browser module instantiate.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; connect-src 'self'; frame-src http: https:; font-src 'self' data:;";

/// Response headers a host should send with the shell page.
///
/// `frame-ancestors` is ignored in a `<meta>` policy, so framing of the
/// shell itself can only be restricted through headers.
pub const RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("X-Frame-Options", "SAMEORIGIN"),
    ("Content-Security-Policy", "frame-ancestors 'self'"),
];
