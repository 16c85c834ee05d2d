//! Sidebar: category groups with report rows, width toggle, report count.
//!
//! Every interactive element carries a `data-action` attribute; the boot
//! script turns clicks on them into shell events.

use super::{icon_path, Icon, ICON_CARET_DOWN, ICON_CARET_LEFT, ICON_CARET_RIGHT};
use crate::navigation::{NavGroup, NavItem, NavModel};
use leptos::prelude::*;

/// The navigation sidebar.
#[component]
pub fn Sidebar(model: NavModel) -> impl IntoView {
    let collapsed = model.collapsed;
    let aside_class = if collapsed {
        "shell-sidebar collapsed"
    } else {
        "shell-sidebar"
    };
    let (toggle_icon, toggle_title) = if collapsed {
        (ICON_CARET_RIGHT, "Expand sidebar")
    } else {
        (ICON_CARET_LEFT, "Minimize sidebar")
    };
    let no_matches = model.groups.is_empty() && !model.filter.is_empty();
    let filter = model.filter;
    let total = model.total_reports;

    view! {
        <aside class=aside_class id="shell-sidebar">
            <div class="sidebar-header">
                {(!collapsed).then(|| view! { <span class="sidebar-title">"Reports"</span> })}
                <button class="sidebar-toggle" data-action="toggle-panel" title=toggle_title>
                    <Icon path=toggle_icon size="16" />
                </button>
            </div>

            <nav class="sidebar-nav">
                {no_matches.then(|| view! {
                    <p class="nav-empty">"No reports match \"" {filter} "\""</p>
                })}
                {model.groups.into_iter().map(|group| {
                    view! { <CategoryGroup group=group collapsed=collapsed /> }
                }).collect::<Vec<_>>()}
            </nav>

            <div class="sidebar-footer">
                {if collapsed {
                    view! {
                        <span class="footer-count" title="Total Reports">{total}</span>
                    }.into_any()
                } else {
                    view! {
                        <span class="footer-label">"Total Reports"</span>
                        <span class="footer-count">{total}</span>
                    }.into_any()
                }}
            </div>
        </aside>
    }
}

/// One collapsible category group.
#[component]
fn CategoryGroup(group: NavGroup, collapsed: bool) -> impl IntoView {
    let category = group.category;
    let expanded = group.expanded;
    let count = group.items.len();
    let caret = if expanded { ICON_CARET_DOWN } else { ICON_CARET_RIGHT };
    let header_class = format!("nav-group-header cat-{}", category.color_token);

    view! {
        <div class="nav-group" data-category=category.id.as_str()>
            <button
                class=header_class
                data-action="toggle-category"
                data-category=category.id.as_str()
                aria-expanded=expanded.to_string()
                title=category.label.clone()
            >
                <Icon path=icon_path(&category.icon_key) size="18" class="nav-group-icon" />
                {(!collapsed).then(|| view! {
                    <span class="nav-group-label">{category.label.clone()}</span>
                    <span class="nav-group-count">{count}</span>
                    <Icon path=caret size="14" class="nav-caret" />
                })}
            </button>
            {expanded.then(|| view! {
                <div class="nav-group-items">
                    {if group.items.is_empty() {
                        view! { <p class="nav-group-empty">"No reports"</p> }.into_any()
                    } else {
                        group.items.into_iter().map(|item| {
                            view! { <ReportRow item=item collapsed=collapsed /> }
                        }).collect::<Vec<_>>().into_any()
                    }}
                </div>
            })}
        </div>
    }
}

/// A selectable report row.
#[component]
fn ReportRow(item: NavItem, collapsed: bool) -> impl IntoView {
    let report = item.report;
    let mut class = String::from("nav-item");
    if item.active {
        class.push_str(" active");
    }
    if item.pending {
        class.push_str(" pending");
    }
    let title = if report.description.is_empty() {
        report.name.clone()
    } else {
        format!("{}: {}", report.name, report.description)
    };

    view! {
        <button
            class=class
            data-action="select-report"
            data-report-id=report.id.clone()
            aria-current=item.active.then_some("page")
            title=title
        >
            <Icon path=icon_path(&report.icon_key) size="16" />
            {(!collapsed).then(|| view! { <span class="nav-item-name">{report.name.clone()}</span> })}
        </button>
    }
}
