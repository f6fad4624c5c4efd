//! Card filter expressions such as `"5, 1-3, 1"`

use crate::error::{HccdError, Result};

/// Parse a comma-separated list of 1-based card numbers and inclusive ranges
///
/// Order and repetition are preserved, and a descending range (`4-2`) counts
/// down. An empty or blank expression yields an empty filter, which keeps
/// every card.
pub fn parse_card_filter(expr: &str) -> Result<Vec<usize>> {
    let mut numbers = Vec::new();

    for part in expr.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_card_number(start, part)?;
                let end = parse_card_number(end, part)?;
                if start <= end {
                    numbers.extend(start..=end);
                } else {
                    numbers.extend((end..=start).rev());
                }
            }
            None => numbers.push(parse_card_number(part, part)?),
        }
    }

    Ok(numbers)
}

fn parse_card_number(text: &str, part: &str) -> Result<usize> {
    let number: usize = text.trim().parse().map_err(|_| {
        HccdError::invalid_value("cards.filter", format!("'{}' is not a card number or range", part))
    })?;

    if number == 0 {
        return Err(HccdError::invalid_value(
            "cards.filter",
            format!("card numbers start at 1 in '{}'", part),
        ));
    }

    Ok(number)
}
