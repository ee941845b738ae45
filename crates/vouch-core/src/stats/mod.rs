//! Message statistics extraction
//!
//! Mines aggregate currency and gift counters out of free-form vouch message
//! bodies. The extractor is a single pass over each message through an ordered
//! table of independent rules; rules never fail, they either contribute or
//! skip. The whole pipeline is pure and order-independent, so the result for a
//! collection of messages equals the field-wise merge over any partition.

use once_cell::sync::Lazy;
use regex::Regex;

/// Per-message INR contributions above this are treated as mis-parses
/// and rejected (1 crore).
pub const INR_SANITY_CEILING: u64 = 10_000_000;

// Amount followed by a rupee token, Indian comma grouping allowed.
static INR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d,]+)\s*(?:inr|rupees?|rs|₹)").unwrap());

// Any mention of nitro gifting or server boosts.
static NITRO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)nitro\s*booster|server\s*boost|gift\s*link|booster|nitro").unwrap());

// Profile decoration mentions.
static DECOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)profile\s*deco(?:ration)?s?|deco(?:ration)?s?").unwrap());

// OwO-bot point currency with optional k/m suffix, e.g. "2.5k owo cash".
static OWO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d.]+)\s*([km])?\s*(?:owo|uwu)(?:\s*cash)?").unwrap());

// Broad crypto mention, including any message with a dollar sign.
static CRYPTO_GIVEAWAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)crypto\s*giveaways?|litecoin|bitcoin|ltc|btc|eth|ethereum|usdt|doge|dogecoin|\$")
        .unwrap()
});

// Dollar-denominated crypto amount, e.g. "0.10$ ltc", "$5 btc", "got 20$ crypto".
static CRYPTO_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\$|usd)?\s*(\d+\.?\d*)\s*(?:\$|usd)?\s*(?:ltc|btc|bitcoin|eth|ethereum|crypto|usdt|doge|dogecoin|litecoin)",
    )
    .unwrap()
});

/// Aggregate counters extracted from a collection of vouch messages
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MessageStats {
    /// Sum of detected INR amounts, whole rupees
    pub total_inr: u64,
    /// Messages mentioning nitro gifting or boosts
    pub nitro: u64,
    /// Messages mentioning profile decorations
    pub decors: u64,
    /// Sum of OwO point currency, floored per message
    pub owo: u64,
    /// Sum of dollar-denominated crypto amounts
    pub crypto: f64,
    /// Messages matching the broad crypto pattern
    pub crypto_giveaways: u64,
}

impl MessageStats {
    /// Run every rule against a single message, accumulating contributions.
    ///
    /// A message may trigger any number of rules; malformed numeric captures
    /// contribute nothing and never error.
    pub fn accumulate(&mut self, message: &str) {
        for rule in RULES {
            (rule.run)(message, self);
        }
    }

    /// Field-wise sum of two accumulators
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_inr += other.total_inr;
        self.nitro += other.nitro;
        self.decors += other.decors;
        self.owo += other.owo;
        self.crypto += other.crypto;
        self.crypto_giveaways += other.crypto_giveaways;
        self
    }

    /// Check if no rule has contributed anything yet
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A named, independent extraction rule over one message
pub struct StatRule {
    /// Short identifier, used in logs and tests
    pub name: &'static str,
    run: fn(&str, &mut MessageStats),
}

impl StatRule {
    /// Apply this rule alone to a message
    pub fn apply(&self, message: &str, stats: &mut MessageStats) {
        (self.run)(message, stats);
    }
}

/// The complete rule table, applied in order to every message
pub const RULES: &[StatRule] = &[
    StatRule { name: "inr", run: inr_rule },
    StatRule { name: "nitro", run: nitro_rule },
    StatRule { name: "decor", run: decor_rule },
    StatRule { name: "owo", run: owo_rule },
    StatRule { name: "crypto_giveaway", run: crypto_giveaway_rule },
    StatRule { name: "crypto_amount", run: crypto_amount_rule },
];

/// Extract aggregate statistics from a sequence of message bodies.
///
/// Total over all string input: empty input yields the zero accumulator and
/// unrecognized messages contribute nothing.
pub fn extract_stats<I, S>(messages: I) -> MessageStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = MessageStats::default();
    for message in messages {
        stats.accumulate(message.as_ref());
    }
    stats
}

fn inr_rule(message: &str, stats: &mut MessageStats) {
    let Some(captures) = INR_RE.captures(message) else {
        return;
    };
    let digits = captures[1].replace(',', "");
    if let Ok(amount) = digits.parse::<u64>() {
        if amount <= INR_SANITY_CEILING {
            stats.total_inr += amount;
        }
    }
}

fn nitro_rule(message: &str, stats: &mut MessageStats) {
    if NITRO_RE.is_match(message) {
        stats.nitro += 1;
    }
}

fn decor_rule(message: &str, stats: &mut MessageStats) {
    if DECOR_RE.is_match(message) {
        stats.decors += 1;
    }
}

fn owo_rule(message: &str, stats: &mut MessageStats) {
    let Some(captures) = OWO_RE.captures(message) else {
        return;
    };
    let Ok(mut amount) = captures[1].parse::<f64>() else {
        return;
    };
    match captures.get(2).map(|m| m.as_str().to_lowercase()) {
        Some(suffix) if suffix == "m" => amount *= 1_000_000.0,
        Some(suffix) if suffix == "k" => amount *= 1_000.0,
        _ => {}
    }
    stats.owo += amount.floor() as u64;
}

fn crypto_giveaway_rule(message: &str, stats: &mut MessageStats) {
    if CRYPTO_GIVEAWAY_RE.is_match(message) {
        stats.crypto_giveaways += 1;
    }
}

fn crypto_amount_rule(message: &str, stats: &mut MessageStats) {
    let Some(captures) = CRYPTO_AMOUNT_RE.captures(message) else {
        return;
    };
    if let Ok(amount) = captures[1].parse::<f64>() {
        stats.crypto += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_one(message: &str) -> MessageStats {
        extract_stats([message])
    }

    #[test]
    fn test_empty_input_is_zero() {
        let stats = extract_stats(Vec::<String>::new());
        assert!(stats.is_zero());
    }

    #[test]
    fn test_unrecognized_message_is_noop() {
        let stats = extract_one("thanks, smooth trade, would recommend");
        assert!(stats.is_zero());
    }

    #[test]
    fn test_inr_with_comma_grouping() {
        let stats = extract_one("Got 12,500 INR today");
        assert_eq!(stats.total_inr, 12_500);
    }

    #[test]
    fn test_inr_variants() {
        assert_eq!(extract_one("paid 500 rs").total_inr, 500);
        assert_eq!(extract_one("received 250rupees").total_inr, 250);
        assert_eq!(extract_one("sent ₹99 fast").total_inr, 0); // glyph before the number
        assert_eq!(extract_one("sent 99₹ fast").total_inr, 99);
    }

    #[test]
    fn test_inr_sanity_ceiling() {
        assert_eq!(extract_one("25000000 inr").total_inr, 0);
        assert_eq!(extract_one("10000000 inr").total_inr, 10_000_000);
    }

    #[test]
    fn test_inr_first_match_only() {
        let stats = extract_one("100 inr and later 200 inr");
        assert_eq!(stats.total_inr, 100);
    }

    #[test]
    fn test_nitro_counts_once_per_message() {
        let stats = extract_one("thanks for the nitro booster!");
        assert_eq!(stats.nitro, 1);
        let stats = extract_one("nitro nitro server boost booster");
        assert_eq!(stats.nitro, 1);
    }

    #[test]
    fn test_decor_variants() {
        assert_eq!(extract_one("got a profile decoration").decors, 1);
        assert_eq!(extract_one("nice decors").decors, 1);
        // no word boundary: "deco" inside a larger word still counts
        assert_eq!(extract_one("redecorated my room").decors, 1);
    }

    #[test]
    fn test_owo_with_k_suffix() {
        let stats = extract_one("2.5k owo cash");
        assert_eq!(stats.owo, 2_500);
    }

    #[test]
    fn test_owo_with_m_suffix_and_floor() {
        assert_eq!(extract_one("1.5m uwu").owo, 1_500_000);
        assert_eq!(extract_one("2.7 owo").owo, 2);
    }

    #[test]
    fn test_owo_comma_grouped_amount_pinned() {
        // The leftmost match lands on the digit run directly before the
        // suffix, so comma-grouped amounts contribute their trailing zeros.
        let stats = extract_one("1,000,000k owo");
        assert_eq!(stats.owo, 0);
    }

    #[test]
    fn test_crypto_amount_and_giveaway() {
        let stats = extract_one("sent $5 btc");
        assert_eq!(stats.crypto_giveaways, 1);
        assert!((stats.crypto - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crypto_suffix_dollar() {
        let stats = extract_one("0.10$ ltc giveaway");
        assert!((stats.crypto - 0.10).abs() < f64::EPSILON);
        assert_eq!(stats.crypto_giveaways, 1);
    }

    #[test]
    fn test_bare_dollar_sign_counts_giveaway_only() {
        let stats = extract_one("worth every $");
        assert_eq!(stats.crypto_giveaways, 1);
        assert!(stats.crypto.abs() < f64::EPSILON);
    }

    #[test]
    fn test_message_triggers_multiple_rules() {
        let stats = extract_one("got 500 inr and a nitro boost");
        assert_eq!(stats.total_inr, 500);
        assert_eq!(stats.nitro, 1);
    }

    #[test]
    fn test_extraction_splits_as_merge() {
        let all = [
            "Got 12,500 INR today",
            "thanks for the nitro booster!",
            "2.5k owo cash",
            "sent $5 btc",
            "nothing to see here",
        ];
        let whole = extract_stats(all);
        let left = extract_stats(&all[..2]);
        let right = extract_stats(&all[2..]);
        assert_eq!(whole, left.merge(right));
        assert_eq!(whole, right.merge(left));
    }

    #[test]
    fn test_rules_are_individually_addressable() {
        let mut stats = MessageStats::default();
        let inr = RULES.iter().find(|r| r.name == "inr").unwrap();
        inr.apply("got 500 inr and a nitro boost", &mut stats);
        assert_eq!(stats.total_inr, 500);
        assert_eq!(stats.nitro, 0);
    }
}
