use dioxus::prelude::*;
use tracing::warn;

use crate::core::config;
use crate::core::registry::DatasetOption;
use crate::core::render::{RenderItem, RenderPlan};
use crate::core::table::{ColumnType, Table};
use crate::core::{ArtifactResolver, NavigationState, PanelRegistry, ReportRenderer, Section};
use crate::t;
use crate::views::ArtifactPanel;

/// Rows drawn into the DOM; the summary line still reports the full shape.
const MAX_GRID_ROWS: usize = 1_000;

/// Processed Data panel: a dataset picker and the selected table.
#[component]
pub fn DatasetPanel(nav: Signal<NavigationState>) -> Element {
    let registry = PanelRegistry::standard();
    let resolver = ArtifactResolver::from_config(config::installed());
    let renderer = ReportRenderer::new(registry, &resolver);

    let options = renderer.dataset_options();
    let Some(selected) = nav.read().current_dataset(registry) else {
        return rsx! {
            p { class: "panel__placeholder", {t!("datasets-none")} }
        };
    };

    let body = match renderer.render_dataset(&selected.key) {
        Ok(item) => render_dataset_item(item),
        Err(err) => {
            warn!(error = %err, "dataset selection out of sync with registry");
            rsx! {
                div { class: "warning warning--error", role: "alert", "⚠️ {err}" }
            }
        }
    };

    let picker_options = options.clone();
    let mut nav_signal = nav;
    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        let Some(option) = picker_options
            .iter()
            .find(|option| option.key.as_str() == value)
        else {
            warn!(value = %value, "unknown dataset selected");
            return;
        };
        if let Err(err) = nav_signal.with_mut(|state| state.select_dataset(option.key, registry)) {
            warn!(error = %err, "dataset selection rejected");
        }
    };

    rsx! {
        div { class: "datasets",
            label { class: "datasets__prompt", r#for: "dataset-select", {t!("datasets-prompt")} }
            select {
                id: "dataset-select",
                class: "datasets__select",
                value: "{selected.key}",
                onchange: on_change,
                for option in options.iter().copied() {
                    {render_option(option, option == selected)}
                }
            }
            {body}
        }
    }
}

fn render_option(option: DatasetOption, is_selected: bool) -> Element {
    rsx! {
        option {
            key: "{option.key}",
            value: "{option.key}",
            selected: is_selected,
            "{option.display_name}"
        }
    }
}

fn render_dataset_item(item: RenderItem) -> Element {
    if let Some(table) = item.table() {
        return rsx! { DataGrid { table: table.clone() } };
    }
    // Missing or failed: reuse the artifact panel's warnings.
    let plan = RenderPlan {
        section: Section::ProcessedData,
        items: vec![item],
    };
    rsx! { ArtifactPanel { plan } }
}

/// Scrollable grid with a row index column and the shape summary underneath.
#[component]
pub fn DataGrid(table: Table) -> Element {
    let types = table.column_types();
    let header: Vec<(String, &'static str)> = table
        .columns()
        .iter()
        .zip(types.iter())
        .map(|(name, ty)| (name.clone(), cell_class(*ty)))
        .collect();
    let rows: Vec<Vec<(String, &'static str)>> = table
        .rows()
        .iter()
        .take(MAX_GRID_ROWS)
        .map(|row| {
            row.iter()
                .zip(types.iter())
                .map(|(cell, ty)| (cell.to_string(), cell_class(*ty)))
                .collect()
        })
        .collect();
    let truncated = table.row_count() > MAX_GRID_ROWS;
    let shown = rows.len();
    let total = table.row_count();
    let summary = table.summary();

    rsx! {
        div { class: "data-grid",
            table { class: "data-grid__table",
                thead {
                    tr {
                        th { class: "data-grid__index" }
                        for (name, class_name) in header {
                            th { class: class_name, "{name}" }
                        }
                    }
                }
                tbody {
                    for (idx, row) in rows.into_iter().enumerate() {
                        tr { key: "{idx}",
                            td { class: "data-grid__index", "{idx}" }
                            for (value, class_name) in row {
                                td { class: class_name, "{value}" }
                            }
                        }
                    }
                }
            }
        }
        if truncated {
            p { class: "data-grid__note", {t!("datasets-truncated", shown = shown, total = total)} }
        }
        p { class: "data-grid__summary", "{summary}" }
    }
}

fn cell_class(ty: ColumnType) -> &'static str {
    if ty.is_numeric() {
        "data-grid__cell data-grid__cell--numeric"
    } else {
        "data-grid__cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_are_right_aligned() {
        assert!(cell_class(ColumnType::Float).contains("--numeric"));
        assert!(cell_class(ColumnType::Integer).contains("--numeric"));
        assert!(!cell_class(ColumnType::Text).contains("--numeric"));
        assert!(!cell_class(ColumnType::Empty).contains("--numeric"));
    }
}
