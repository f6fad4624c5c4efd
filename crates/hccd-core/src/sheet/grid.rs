use crate::card::RenderedCard;
use crate::error::{HccdError, Result};

/// Cards per page, as rows by columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// # Errors
    ///
    /// `ConfigInvalidValue` when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(HccdError::invalid_value("grid.rows", "must be at least 1"));
        }
        if cols == 0 {
            return Err(HccdError::invalid_value("grid.cols", "must be at least 1"));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn page_capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Pages needed for `cards` cards
    pub fn pages_for(&self, cards: usize) -> usize {
        cards.div_ceil(self.page_capacity())
    }
}

/// Lay cards out row-major, one `<table class="page">` per page
///
/// The last row and the last page may be partial. No cards produce no markup.
pub fn paginate(cards: &[RenderedCard], grid: GridSize) -> String {
    let page = grid.page_capacity();
    let cols = grid.cols;
    let last = cards.len();
    let mut body = String::new();

    for (i, card) in cards.iter().enumerate() {
        if i % page == 0 {
            body.push_str("<table class=\"page\">");
        }
        if i % cols == 0 {
            body.push_str("<tr>");
        }
        body.push_str("<td>");
        body.push_str(card.as_str());
        body.push_str("</td>");
        if (i + 1) % cols == 0 || i + 1 == last {
            body.push_str("</tr>");
        }
        if (i + 1) % page == 0 || i + 1 == last {
            body.push_str("</table>");
        }
    }

    body
}
