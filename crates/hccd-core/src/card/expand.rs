use super::{CardRenderer, RenderedCard};
use crate::config::CopiesValue;
use crate::data::Row;
use std::iter;

/// Number of copies to print for `row`
///
/// Without a copies column, or when the cell is missing or not an integer
/// in `0..=i32::MAX`, the row prints once. `0` omits the row.
pub fn copies_for(row: &Row, copies: CopiesValue) -> usize {
    copies
        .column()
        .and_then(|column| row.get(column))
        .and_then(|cell| cell.parse::<i32>().ok())
        .and_then(|count| usize::try_from(count).ok())
        .unwrap_or(1)
}

/// Repeat a rendered card for its row
pub fn expand(
    card: RenderedCard,
    row: &Row,
    copies: CopiesValue,
) -> impl Iterator<Item = RenderedCard> {
    iter::repeat(card).take(copies_for(row, copies))
}

/// Render every row and flatten the copies into one card sequence, in row order
pub fn render_all(renderer: &CardRenderer, rows: &[Row], copies: CopiesValue) -> Vec<RenderedCard> {
    rows.iter()
        .flat_map(|row| expand(renderer.render(row), row, copies))
        .collect()
}
