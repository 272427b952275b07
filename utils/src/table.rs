use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render `rows` as a markdown table, suitable for pasting into a PR or README.
pub fn summary_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::markdown()).to_string()
}
