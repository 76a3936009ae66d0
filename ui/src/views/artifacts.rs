use dioxus::prelude::*;

use crate::core::format::format_dimensions;
use crate::core::image::ImageArtifact;
use crate::core::registry::{ArtifactKind, LayoutHint};
use crate::core::render::{ItemStatus, RenderItem, RenderPlan};
use crate::core::resolver::ArtifactContent;
use crate::t;
use crate::views::DataGrid;

/// Displays a render plan top to bottom; consecutive `Pair` items share a row.
#[component]
pub fn ArtifactPanel(plan: RenderPlan) -> Element {
    let rows = layout_rows(&plan.items);

    rsx! {
        div { class: "artifacts",
            for (idx, row) in rows.into_iter().enumerate() {
                {render_row(idx, row)}
            }
        }
    }
}

fn render_row(idx: usize, row: LayoutRow<'_>) -> Element {
    match row {
        LayoutRow::Single(item) => rsx! {
            div { key: "{idx}", class: "artifacts__row", {render_item(item)} }
        },
        LayoutRow::Columns(items) => rsx! {
            div { key: "{idx}", class: "artifacts__row columns",
                for item in items {
                    div { class: "columns__col", {render_item(item)} }
                }
            }
        },
    }
}

#[derive(Debug, PartialEq)]
enum LayoutRow<'a> {
    Single(&'a RenderItem),
    Columns(Vec<&'a RenderItem>),
}

/// Group items into visual rows, keeping plan order. A run of `Pair` items
/// becomes one column row ordered by slot.
fn layout_rows(items: &[RenderItem]) -> Vec<LayoutRow<'_>> {
    let mut rows = Vec::new();
    let mut pending: Vec<&RenderItem> = Vec::new();

    for item in items {
        if let LayoutHint::Pair(_) = item.layout {
            pending.push(item);
            continue;
        }
        flush_columns(&mut rows, &mut pending);
        rows.push(LayoutRow::Single(item));
    }
    flush_columns(&mut rows, &mut pending);
    rows
}

fn flush_columns<'a>(rows: &mut Vec<LayoutRow<'a>>, pending: &mut Vec<&'a RenderItem>) {
    if pending.is_empty() {
        return;
    }
    let mut columns = std::mem::take(pending);
    columns.sort_by_key(|item| match item.layout {
        LayoutHint::Pair(slot) => slot,
        _ => 0,
    });
    rows.push(LayoutRow::Columns(columns));
}

/// CSS class and inline style for an image under `layout`.
fn image_presentation(layout: LayoutHint) -> (&'static str, String) {
    match layout {
        LayoutHint::FixedWidth(px) => (
            "artifact__image",
            format!("width: {px}px; max-width: 100%;"),
        ),
        LayoutHint::FullWidth | LayoutHint::Pair(_) => {
            ("artifact__image artifact__image--fill", String::new())
        }
        LayoutHint::Inline | LayoutHint::DatasetList => ("artifact__image", String::new()),
    }
}

fn render_item(item: &RenderItem) -> Element {
    match &item.status {
        ItemStatus::Loaded(ArtifactContent::Image(image)) => render_image(item, image),
        ItemStatus::Loaded(ArtifactContent::Table(table)) => rsx! {
            DataGrid { table: table.clone() }
        },
        ItemStatus::Missing => {
            let message = match item.kind {
                ArtifactKind::Image => t!("warning-image-missing", path = item.path.as_str()),
                ArtifactKind::Table => t!("warning-file-missing", path = item.path.as_str()),
            };
            rsx! {
                div { class: "warning", role: "alert", "⚠️ {message}" }
            }
        }
        ItemStatus::Failed(err) => {
            let message = t!("warning-artifact-unusable", path = item.path.as_str());
            let detail = err.to_string();
            rsx! {
                div { class: "warning warning--error", role: "alert",
                    span { "⚠️ {message}" }
                    span { class: "warning__detail", "{detail}" }
                }
            }
        }
    }
}

fn render_image(item: &RenderItem, image: &ImageArtifact) -> Element {
    let (class_name, style) = image_presentation(item.layout);
    let src = image.data_url();
    let alt = item.caption.unwrap_or(item.key.as_str());
    let dimensions = format_dimensions(image.width, image.height);

    rsx! {
        figure { class: "artifact",
            img {
                class: class_name,
                style: "{style}",
                src: "{src}",
                alt: "{alt}",
                title: "{dimensions}",
            }
            if let Some(caption) = item.caption {
                figcaption { class: "artifact__caption", "{caption}" }
            }
        }
    }
}
