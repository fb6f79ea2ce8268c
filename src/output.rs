use crate::error::Result;
use crate::types::Record;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Markdown table of at most `max_rows` rows.
pub fn render_table<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("{}\n", render_table(rows, max_rows));
    if rows.len() > max_rows {
        println!("({} more rows not shown)\n", rows.len() - max_rows);
    }
}

/// The detail panel shown for a selected table row.
pub fn record_detail(record: &Record) -> String {
    format!(
        "{}. {}\nMobile: {}%\nComputer: {}%",
        record.ordinal, record.country, record.mobile, record.computer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_lists_both_shares() {
        let r = Record::new(3, "Chile", 55.9, 44.1);
        assert_eq!(record_detail(&r), "3. Chile\nMobile: 55.9%\nComputer: 44.1%");
    }

    #[test]
    fn table_has_headers_and_respects_limit() {
        let rows = vec![
            Record::new(1, "A", 80.0, 20.0),
            Record::new(2, "B", 40.0, 60.0),
        ];
        let table = render_table(&rows, 1);
        assert!(table.contains("Mobile (%)"));
        assert!(table.contains("| A "));
        assert!(!table.contains("| B "));
        assert_eq!(render_table::<Record>(&[], 5), "(no rows)");
    }

    #[test]
    fn json_goes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &vec![1, 2, 3]).unwrap();
        let back: Vec<i32> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }
}
