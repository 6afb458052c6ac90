use regex::Regex;
use std::sync::LazyLock;

/// `<N> hour` and `<N> min`, each optional. Plural suffixes are left unmatched.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:([0-9]+)\shour)?(?:([0-9]+)\smin)?").unwrap());

/// Total minutes described by free-form travel time such as `"3 hours 30 mins"`.
///
/// When a unit appears more than once the last occurrence wins. Text with no
/// recognizable token is zero minutes.
pub fn parse_minutes(text: &str) -> u64 {
    let mut hours = None;
    let mut minutes = None;

    for caps in DURATION_RE.captures_iter(text) {
        if let Some(h) = caps.get(1) {
            hours = Some(h.as_str());
        }
        if let Some(m) = caps.get(2) {
            minutes = Some(m.as_str());
        }
    }

    let mut total: u64 = 0;
    if let Some(h) = hours.and_then(|digits| parse_count(digits, "hour")) {
        total = total.saturating_add(h.saturating_mul(60));
    }
    if let Some(m) = minutes.and_then(|digits| parse_count(digits, "min")) {
        total = total.saturating_add(m);
    }
    total
}

fn parse_count(digits: &str, unit: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Ignoring {} count '{}': {}", unit, digits, e);
            None
        }
    }
}
