//! Root document component - the complete HTML page
//!
//! Implements the App Shell layout: top bar, sidebar and viewer, plus the
//! boot block that hands the catalog to the browser module.

use super::{Sidebar, Topbar, ViewerPanel};
use crate::navigation::NavModel;
use crate::styles::{CSP, SHELL_CSS};
use crate::types::{Brand, Theme};
use crate::viewer::ViewerState;
use crate::ShellAssets;
use leptos::prelude::*;

/// The complete HTML document for the shell
#[component]
pub fn ShellDocument(
    brand: Brand,
    theme: Theme,
    model: NavModel,
    viewer: ViewerState,
    /// Loading overlay visible on first paint
    #[prop(default = false)]
    loading: bool,
    /// Catalog the browser module boots from, as JSON
    catalog_json: String,
    assets: ShellAssets,
) -> impl IntoView {
    let title = brand.title.clone();
    let filter = model.filter.clone();

    view! {
        <html lang="en" class=theme.as_str()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{SHELL_CSS}</style>
            </head>
            <body>
                <div class="app-shell">
                    <Topbar brand=brand theme=theme filter=filter />
                    <div class="app-body">
                        <Sidebar model=model />
                        <main class="app-main">
                            <ViewerPanel state=viewer loading=loading />
                        </main>
                    </div>
                </div>
                <BootScripts catalog_json=catalog_json assets=assets />
            </body>
        </html>
    }
}

/// Catalog payload and the module loader
#[component]
fn BootScripts(catalog_json: String, assets: ShellAssets) -> impl IntoView {
    let glue = assets.wasm_glue_path;

    view! {
        <script type="application/json" id="shell-boot" data-glue=glue>
            {catalog_json}
        </script>
        <script type="module">{APP_SCRIPT}</script>
    }
}

/// Boots the wasm shell and wires DOM events to it.
///
/// Without a glue path the page stays static: the server-rendered state is
/// shown and nothing is interactive.
const APP_SCRIPT: &str = r#"
(async () => {
  const boot = document.getElementById('shell-boot');
  if (!boot || !boot.dataset.glue) return;

  let shell;
  try {
    const mod = await import(boot.dataset.glue);
    await mod.default();
    shell = new mod.ShellHandle(boot.textContent);
  } catch (err) {
    console.error('[fleet-shell] boot failed', err);
    // The page stays static; nothing else would clear the overlay.
    const overlay = document.getElementById('loading-overlay');
    if (overlay) overlay.classList.remove('visible');
    return;
  }

  const replace = (id, html) => {
    const el = document.getElementById(id);
    if (el) el.outerHTML = html;
  };

  const wireFrame = () => {
    const frame = document.querySelector('iframe.embed-frame');
    if (!frame) return;
    frame.addEventListener('load', () => {
      send({ type: 'frame_loaded', value: frame.dataset.frameKey });
    }, { once: true });
  };

  const apply = (update) => {
    if (update.theme) {
      document.documentElement.className = shell.theme();
      const btn = document.getElementById('theme-toggle');
      if (btn) btn.outerHTML = shell.render_theme_toggle();
    }
    if (update.sidebar) replace('shell-sidebar', shell.render_sidebar());
    if (update.viewer || update.remount_frame) {
      replace('shell-viewer', shell.render_viewer());
      wireFrame();
    } else if (update.loading) {
      const overlay = document.getElementById('loading-overlay');
      if (overlay) overlay.classList.toggle('visible', shell.is_loading());
    }
  };

  const send = (event) => {
    try {
      apply(JSON.parse(shell.dispatch(JSON.stringify(event))));
    } catch (err) {
      console.error('[fleet-shell] event failed', event, err);
    }
  };

  document.addEventListener('click', (e) => {
    const el = e.target.closest('[data-action]');
    if (!el) return;
    switch (el.dataset.action) {
      case 'select-report':
        send({ type: 'select_report', value: el.dataset.reportId });
        break;
      case 'toggle-category':
        send({ type: 'toggle_category', value: el.dataset.category });
        break;
      case 'toggle-panel':
        send({ type: 'toggle_panel' });
        break;
      case 'toggle-theme':
        send({ type: 'toggle_theme' });
        break;
    }
  });

  const search = document.getElementById('shell-search');
  if (search) {
    search.addEventListener('input', () => send({ type: 'search', value: search.value }));
  }

  window.addEventListener('popstate', () => send({ type: 'location_changed' }));

  // Stored preferences and the real location may differ from the server render.
  apply({ theme: true, sidebar: true, viewer: true });
})();
"#;
