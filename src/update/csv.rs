//! Import/export update functions

use crate::commands::Cmd;
use crate::csv::{apply_import, export_csv, export_filename};
use crate::messages::CsvMsg;
use crate::model::{BannerKind, TableModel};
use crate::view;

use super::show_banner;

/// Handle import/export messages
pub fn update_csv(model: &mut TableModel, msg: CsvMsg) -> Option<Cmd> {
    match msg {
        CsvMsg::Import { content } => import(model, &content),
        CsvMsg::Export => export(model),
    }
}

fn import(model: &mut TableModel, content: &str) -> Option<Cmd> {
    match apply_import(model, content) {
        Ok(count) => show_banner(
            model,
            BannerKind::Success,
            format!("Imported {} rows successfully", count),
        ),
        Err(err) => {
            tracing::warn!("CSV import rejected: {}", err);
            show_banner(model, BannerKind::Error, err.to_string())
        }
    }
}

/// Export the full filtered/sorted sequence (pagination ignored),
/// restricted to the visible columns.
fn export(model: &mut TableModel) -> Option<Cmd> {
    let columns = view::visible_columns(&model.columns);
    let filtered = view::filter(model.rows.records(), &model.search_query);
    let sorted = view::sort(filtered, &model.sort);

    match export_csv(&sorted, &columns) {
        Ok(content) => {
            let filename = export_filename(chrono::Local::now().date_naive());
            tracing::info!("exporting {} rows to {}", sorted.len(), filename);
            Some(Cmd::DeliverDownload { filename, content })
        }
        Err(err) => {
            tracing::error!("CSV export failed: {}", err);
            show_banner(model, BannerKind::Error, "Export failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::TableMsg;
    use crate::model::SortDirection;
    use crate::update::update_table;

    #[test]
    fn test_import_success_banner_reports_count() {
        let mut model = TableModel::new();
        let cmd = update_csv(
            &mut model,
            CsvMsg::Import {
                content: "name,email\nA,a@x.com\nB,b@x.com\n".to_string(),
            },
        );

        assert!(matches!(cmd, Some(Cmd::ScheduleBannerDismiss { .. })));
        let banner = model.ui.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert!(banner.text.contains("2 rows"));
        assert_eq!(model.rows.len(), 2);
    }

    #[test]
    fn test_import_failure_banner_and_untouched_store() {
        let mut model = TableModel::with_sample_data();
        let before = model.rows.len();

        update_csv(
            &mut model,
            CsvMsg::Import {
                content: "name\nonly-names\n".to_string(),
            },
        );

        let banner = model.ui.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(model.rows.len(), before);
    }

    #[test]
    fn test_export_covers_full_filtered_set_not_just_page() {
        let mut model = TableModel::with_sample_data();
        model.rows_per_page = 3;
        update_table(&mut model, TableMsg::ToggleSort("name".into()));
        assert_eq!(model.sort.direction, SortDirection::Ascending);

        let cmd = update_csv(&mut model, CsvMsg::Export);

        let Some(Cmd::DeliverDownload { filename, content }) = cmd else {
            panic!("expected a download command");
        };
        assert!(filename.starts_with("table-export-"));
        assert!(filename.ends_with(".csv"));

        // header plus all 12 rows, despite the 3-row page
        let lines: Vec<&str> = content.trim_end().lines().collect();
        assert_eq!(lines.len(), 13);
        // visible columns only: name,email,age,role
        assert_eq!(lines[0], "name,email,age,role");
        // sorted ascending by name
        assert!(lines[1].starts_with("Alice Williams"));
    }
}
