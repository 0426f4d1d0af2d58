//! Selection of the largest absolute mover from a scan.

use crate::{Quote, TopMover};

/// Default tracked set: the five tech tickers the tool watches.
pub const DEFAULT_SYMBOLS: [&str; 5] = ["AAPL", "AMZN", "NFLX", "META", "GOOGL"];

/// Pick the quote with the strictly greatest `abs(percent_change)`.
///
/// Pure fold over the slice; ties keep the first-seen candidate. Returns
/// `None` for an empty scan.
pub fn most_volatile(quotes: &[Quote]) -> Option<TopMover> {
    quotes
        .iter()
        .fold(None::<&Quote>, |best, quote| match best {
            Some(current) if quote.abs_percent_change() > current.abs_percent_change() => {
                Some(quote)
            }
            Some(current) => Some(current),
            None => Some(quote),
        })
        .map(TopMover::from_quote)
}
