use crate::model::ContainerRecord;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Distance in pounds a `£<amount>` query tolerates around the pre-VAT price.
pub const PRICE_TOLERANCE: f64 = 50.0;

static PRICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£([0-9]+)").expect("price token pattern is valid"));

struct SearchTerm<'q> {
    text: &'q str,
    road: bool,
    heavy: bool,
    price: Option<f64>,
}

impl<'q> SearchTerm<'q> {
    fn parse(text: &'q str) -> Self {
        Self {
            text,
            road: text.contains("road"),
            heavy: text.contains("heavy"),
            price: PRICE_TOKEN
                .captures(text)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok()),
        }
    }

    fn matches(&self, record: &ContainerRecord) -> bool {
        record.size.to_string().contains(self.text)
            || (self.road && record.allowed_on_road)
            || (self.heavy && record.allows_heavy_waste)
            || self
                .price
                .is_some_and(|price| (record.price_before_vat - price).abs() <= PRICE_TOLERANCE)
    }
}

/// Blank queries keep every record. Otherwise a record is kept when any of the
/// size text, capability keywords or `£` price token matches.
pub fn search<'a, I>(records: I, query: &str) -> Vec<&'a ContainerRecord>
where
    I: IntoIterator<Item = &'a ContainerRecord>,
{
    let text = query.trim().to_lowercase();
    if text.is_empty() {
        return records.into_iter().collect();
    }

    let term = SearchTerm::parse(&text);
    let kept = records
        .into_iter()
        .filter(|r| term.matches(r))
        .collect::<Vec<_>>();
    debug!("search `{text}` kept `{}` containers", kept.len());
    kept
}
