// storefront/display.rs - Display values derived from products
//
// Formatting used by product cards: fa-IR prices, star breakdowns and
// badge labels. No markup is produced here, only strings and counts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::storefront::model::Product;

/// Shown in place of the grid when a search matches nothing
pub const EMPTY_RESULTS_MESSAGE: &str = "موردی یافت نشد. فیلترها را تغییر دهید.";

pub const CURRENCY_SUFFIX: &str = "تومان";

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const GROUP_SEPARATOR: char = '\u{066C}';

/// Format a whole amount the way fa-IR does: Persian digits, grouped
/// in threes with the Arabic thousands separator.
pub fn format_toman(amount: u64) -> String {
    let digits: Vec<char> = amount
        .to_string()
        .bytes()
        .map(|b| PERSIAN_DIGITS[(b - b'0') as usize])
        .collect();

    let mut out = String::with_capacity(digits.len() * 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(*digit);
    }
    out
}

/// `format_toman` plus the currency name
pub fn price_label(amount: u64) -> String {
    format!("{} {}", format_toman(amount), CURRENCY_SUFFIX)
}

/// How a rating splits into five star slots
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub fn from_rating(rating: Decimal) -> Self {
        let clamped = rating.clamp(Decimal::ZERO, Decimal::from(5));
        let whole = clamped.floor();
        let full = whole.to_u8().unwrap_or(0);
        // a perfect 5 has no room left for a half star
        let half = full < 5 && clamped - whole >= Decimal::new(5, 1);
        let empty = 5 - full - u8::from(half);
        Self { full, half, empty }
    }
}

/// Rating with one decimal, e.g. "4.6".
///
/// Rounds the nearest binary double the way the browser's `toFixed(1)`
/// does, so 4.35 (stored as 4.3499...) shows as "4.3" while 4.25 shows
/// as "4.3".
pub fn rating_label(rating: Decimal) -> String {
    let as_double = rating
        .to_f64()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(rating);
    format!(
        "{:.1}",
        as_double.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Card badges: the category, then at most the first two tags
pub fn card_badges(product: &Product) -> Vec<&'static str> {
    std::iter::once(product.category.label())
        .chain(product.tags.iter().take(2).map(|t| t.label()))
        .collect()
}
