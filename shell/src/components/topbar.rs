//! Top bar: brand, report search and theme toggle.

use super::{Icon, ICON_MAGNIFYING_GLASS, ICON_MOON, ICON_SUN, ICON_TRUCK};
use crate::types::{Brand, Theme};
use leptos::prelude::*;

/// The header strip above the viewer.
#[component]
pub fn Topbar(
    brand: Brand,
    theme: Theme,
    /// Current search text
    #[prop(default = String::new())]
    filter: String,
) -> impl IntoView {
    view! {
        <header class="shell-topbar">
            <div class="brand">
                <div class="brand-mark">
                    <Icon path=ICON_TRUCK size="22" />
                </div>
                <div class="brand-text">
                    <span class="brand-title">{brand.title}</span>
                    <span class="brand-subtitle">{brand.subtitle}</span>
                </div>
            </div>

            <label class="search-box">
                <Icon path=ICON_MAGNIFYING_GLASS size="16" class="search-icon" />
                <input
                    type="search"
                    id="shell-search"
                    data-action="search"
                    placeholder="Search reports..."
                    autocomplete="off"
                    value=filter
                />
            </label>

            <ThemeToggle theme=theme />
        </header>
    }
}

/// Light/dark switch; the icon shows the theme it switches to.
#[component]
pub fn ThemeToggle(theme: Theme) -> impl IntoView {
    let (icon, title) = match theme {
        Theme::Light => (ICON_MOON, "Switch to dark mode"),
        Theme::Dark => (ICON_SUN, "Switch to light mode"),
    };

    view! {
        <button
            class="theme-toggle"
            id="theme-toggle"
            data-action="toggle-theme"
            data-theme=theme.as_str()
            title=title
        >
            <Icon path=icon size="18" />
        </button>
    }
}
