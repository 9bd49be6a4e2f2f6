//! Table-based extraction with purely positional column mapping.

use super::{ExtractStrategy, non_empty};
use crate::parse::Document;
use crate::record::WeatherRecord;

/// Minimum `td` count for a row to qualify as a record.
pub const MIN_COLUMNS: usize = 3;

/// Leading rows assumed to be headers and always skipped, per table.
pub const HEADER_ROWS_SKIPPED: usize = 1;

/// Treats every table row after the header as one candidate record:
/// column 0 is the date, column 1 the condition, column 2 the
/// temperature, and column 3 (when present) the wind. No header-name
/// sniffing is done. All tables in the document are processed and their
/// records concatenated in document order.
pub struct TableBased;

impl ExtractStrategy for TableBased {
    fn name(&self) -> &'static str {
        "table-based"
    }

    fn attempt(&self, doc: &Document) -> Vec<WeatherRecord> {
        let mut records = Vec::new();

        let Ok(tables) = doc.select("table") else {
            return records;
        };

        for table in &tables {
            let Ok(rows) = table.select("tr") else {
                continue;
            };

            for row in rows.iter().skip(HEADER_ROWS_SKIPPED) {
                let Ok(cells) = row.select("td") else {
                    continue;
                };
                if cells.len() < MIN_COLUMNS {
                    continue;
                }

                let record = WeatherRecord {
                    date: cells[0].text(),
                    condition: cells[1].text(),
                    temperature: cells[2].text(),
                    wind: cells.get(3).map(|cell| cell.text()).and_then(non_empty),
                    ..Default::default()
                };

                if record.has_identity() {
                    records.push(record);
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_HTML: &str = r#"
        <table>
            <tr><th>日期</th><th>天气</th><th>温度</th><th>风力</th></tr>
            <tr><td>3月5日</td><td>多云</td><td>12~18°C</td><td>北风3级</td></tr>
            <tr><td>3月6日</td><td>晴</td><td>13~19°C</td></tr>
            <tr><td>3月7日</td><td>小雨</td></tr>
            <tr><td>3月8日</td><td>阴</td><td>11~15°C</td><td></td></tr>
        </table>
    "#;

    #[test]
    fn test_positional_mapping_and_header_skip() {
        let doc = Document::parse(TABLE_HTML);
        let records = TableBased.attempt(&doc);

        // The 2-cell row is skipped; the header contributes nothing.
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, "3月5日");
        assert_eq!(records[0].condition, "多云");
        assert_eq!(records[0].temperature, "12~18°C");
        assert_eq!(records[0].wind.as_deref(), Some("北风3级"));
    }

    #[test]
    fn test_three_column_row_has_no_wind() {
        let doc = Document::parse(TABLE_HTML);
        let records = TableBased.attempt(&doc);

        assert_eq!(records[1].date, "3月6日");
        assert_eq!(records[1].wind, None);
    }

    #[test]
    fn test_empty_fourth_cell_is_none() {
        let doc = Document::parse(TABLE_HTML);
        let records = TableBased.attempt(&doc);

        assert_eq!(records[2].date, "3月8日");
        assert_eq!(records[2].wind, None);
    }

    #[test]
    fn test_multiple_tables_concatenate_in_order() {
        let doc = Document::parse(
            r#"
            <table>
                <tr><th>h</th><th>h</th><th>h</th></tr>
                <tr><td>3月5日</td><td>晴</td><td>18°C</td></tr>
            </table>
            <table>
                <tr><th>h</th><th>h</th><th>h</th></tr>
                <tr><td>3月6日</td><td>雨</td><td>12°C</td></tr>
            </table>
            "#,
        );

        let records = TableBased.attempt(&doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "3月5日");
        assert_eq!(records[1].date, "3月6日");
    }

    #[test]
    fn test_header_only_table_yields_empty() {
        let doc = Document::parse("<table><tr><td>a</td><td>b</td><td>c</td></tr></table>");
        assert!(TableBased.attempt(&doc).is_empty());
    }

    #[test]
    fn test_row_with_empty_identity_cells_is_dropped() {
        let doc = Document::parse(
            r#"
            <table>
                <tr><th>h</th><th>h</th><th>h</th></tr>
                <tr><td></td><td></td><td>18°C</td></tr>
                <tr><td>3月6日</td><td>雨</td><td>12°C</td></tr>
            </table>
            "#,
        );

        let records = TableBased.attempt(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "3月6日");
    }
}
