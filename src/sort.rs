//! Column ordering for the report.

/// A histogram column: the byte value it counts and how often it was seen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Column {
    pub label: usize,
    pub count: u64,
}

/// Pairs every count in `row` with its byte value, in byte value order.
pub fn columns(row: &[u64]) -> Vec<Column> {
    row.iter()
        .enumerate()
        .map(|(label, &count)| Column { label, count })
        .collect()
}

/// Orders `columns` by count, largest first.
///
/// Columns with equal counts keep their relative order, so an unsorted row with ties
/// still lists those values in byte order.
pub fn sort_by_count_descending(columns: &mut [Column]) {
    // `sort_by` is stable.
    columns.sort_by(|a, b| b.count.cmp(&a.count));
}
