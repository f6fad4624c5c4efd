use super::RenderedCard;

/// Pick cards by 1-based card number, in filter order
///
/// Numbers may repeat; numbers outside `1..=cards.len()` are skipped.
/// An empty filter returns every card unchanged.
pub fn select(cards: Vec<RenderedCard>, filter: &[usize]) -> Vec<RenderedCard> {
    if filter.is_empty() {
        return cards;
    }

    filter
        .iter()
        .filter_map(|&number| number.checked_sub(1).and_then(|i| cards.get(i)))
        .cloned()
        .collect()
}
