//! Static shell page from the builtin catalog.
//!
//! Run with: `cargo run --example render_shell`

use fleet_shell::catalog::CatalogConfig;
use fleet_shell::location::MemoryLocation;
use fleet_shell::preferences::{MemoryBackend, PreferenceStore};
use fleet_shell::shell::DashboardShell;
use fleet_shell::{render_shell, ShellAssets};

fn main() {
    let config = CatalogConfig::builtin();

    // Open on the trip report, dark theme
    let prefs = PreferenceStore::load(MemoryBackend::default(), || true);
    let shell = DashboardShell::new(&config, MemoryLocation::new("reportId=dashboard-1"), prefs);

    // No glue path - the page is static
    let html = render_shell(&shell, &config, &ShellAssets::default());

    let output_path = "fleet_shell.html";
    std::fs::write(output_path, &html).expect("Failed to write shell page");

    println!("Shell written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
