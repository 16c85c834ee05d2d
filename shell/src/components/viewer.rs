//! Main area: onboarding, not-found, configuration hint, or the embed.

use super::{Icon, ICON_SPINNER, ICON_TREND_UP, ICON_WARNING, ICON_WARNING_CIRCLE};
use crate::viewer::{EmbedFrame, ViewerState, EMBED_SANDBOX};
use leptos::prelude::*;

/// Renders one [`ViewerState`].
#[component]
pub fn ViewerPanel(
    state: ViewerState,
    /// Loading overlay visible
    #[prop(default = false)]
    loading: bool,
) -> impl IntoView {
    let class = format!("shell-viewer viewer-{}", state.label());

    let body = match state {
        ViewerState::Empty => view! {
            <div class="viewer-message">
                <div class="viewer-badge badge-accent">
                    <Icon path=ICON_TREND_UP size="40" />
                </div>
                <h3>"Welcome to Dashboard"</h3>
                <p>"Select a report from the sidebar to view detailed fleet analytics and monitoring dashboards"</p>
                <span class="viewer-hint">"Choose a report to get started"</span>
            </div>
        }
        .into_any(),
        ViewerState::NotFound { id } => view! {
            <div class="viewer-message">
                <div class="viewer-badge badge-red">
                    <Icon path=ICON_WARNING_CIRCLE size="40" />
                </div>
                <h3>"Report Not Found"</h3>
                <p>
                    "No report with id " <code>{id}</code>
                    " exists. Please select a different report from the sidebar."
                </p>
            </div>
        }
        .into_any(),
        ViewerState::Misconfigured { report } => view! {
            <div class="viewer-message">
                <div class="viewer-badge badge-amber">
                    <Icon path=ICON_WARNING size="40" />
                </div>
                <h3>"Configuration Required"</h3>
                <p>
                    "The view URL for " <strong>{report.name}</strong>
                    " has not been configured yet."
                </p>
                <div class="config-steps">
                    <p>"To configure this report:"</p>
                    <ol>
                        <li>"Open the catalog file"</li>
                        <li>"Find the report with id " <code>{report.id}</code></li>
                        <li>"Set its " <code>"view_url"</code> " field"</li>
                    </ol>
                </div>
            </div>
        }
        .into_any(),
        ViewerState::Embed { frame } => view! { <EmbedView frame=frame loading=loading /> }.into_any(),
    };

    view! {
        <section class=class id="shell-viewer">
            {body}
        </section>
    }
}

/// The sandboxed iframe plus its loading overlay.
#[component]
fn EmbedView(frame: EmbedFrame, loading: bool) -> impl IntoView {
    let overlay_class = if loading {
        "loading-overlay visible"
    } else {
        "loading-overlay"
    };
    let key = frame.key;
    let wrap_key = key.clone();

    view! {
        <div class="embed-wrap" data-frame-key=wrap_key>
            <iframe
                class="embed-frame"
                src=frame.src
                title=frame.title
                sandbox=EMBED_SANDBOX
                allow="fullscreen"
                data-frame-key=key
            ></iframe>
            <div class=overlay_class id="loading-overlay">
                <Icon path=ICON_SPINNER size="32" class="spin" />
                <p>"Loading dashboard..."</p>
            </div>
        </div>
    }
}
