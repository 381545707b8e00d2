//! Fixed exchange-rate table.

use std::collections::{BTreeSet, HashMap};

use fxquote_common::{Currency, CurrencyPair};
use rust_decimal::Decimal;

/// Immutable source → target → factor mapping.
///
/// Built once at startup and shared read-only, so lookups need no locking.
/// Every currency known to the table converts to itself with factor 1.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<Currency, HashMap<Currency, Decimal>>,
}

impl RateTable {
    /// Start building a table.
    pub fn builder() -> RateTableBuilder {
        RateTableBuilder::new()
    }

    /// The TWD / JPY / USD table the gateway serves.
    pub fn reference() -> Self {
        Self::builder()
            .rate(Currency::twd(), Currency::jpy(), Decimal::new(3669, 3))
            .rate(Currency::twd(), Currency::usd(), Decimal::new(3281, 5))
            .rate(Currency::jpy(), Currency::twd(), Decimal::new(26956, 5))
            .rate(Currency::jpy(), Currency::usd(), Decimal::new(885, 5))
            .rate(Currency::usd(), Currency::twd(), Decimal::new(30444, 3))
            .rate(Currency::usd(), Currency::jpy(), Decimal::new(111801, 3))
            .build()
    }

    /// Factor for the pair, or `None` when either side is unknown.
    pub fn get(&self, pair: &CurrencyPair) -> Option<Decimal> {
        self.rates
            .get(&pair.source)
            .and_then(|targets| targets.get(&pair.target))
            .copied()
    }

    /// Factor such that `converted = amount * factor`.
    ///
    /// Returns zero when the pair is not in the table; callers that need to
    /// tell an unknown pair apart should use [`RateTable::get`].
    pub fn rate(&self, source: &Currency, target: &Currency) -> Decimal {
        self.rates
            .get(source)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// All currencies appearing in the table, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        let set: BTreeSet<&Currency> = self
            .rates
            .iter()
            .flat_map(|(source, targets)| std::iter::once(source).chain(targets.keys()))
            .collect();
        set.into_iter().cloned().collect()
    }

    /// Number of source currencies.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table holds no currencies.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Builder for [`RateTable`].
#[derive(Debug, Default)]
pub struct RateTableBuilder {
    rates: HashMap<Currency, HashMap<Currency, Decimal>>,
}

impl RateTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factor for `source` → `target`.
    ///
    /// Both currencies get their identity entry. A factor given for
    /// `source == target` is ignored.
    pub fn rate(mut self, source: Currency, target: Currency, factor: Decimal) -> Self {
        self.identity(&source);
        self.identity(&target);
        if source != target {
            self.rates.entry(source).or_default().insert(target, factor);
        }
        self
    }

    /// Build the table.
    pub fn build(self) -> RateTable {
        RateTable { rates: self.rates }
    }

    fn identity(&mut self, currency: &Currency) {
        self.rates
            .entry(currency.clone())
            .or_default()
            .insert(currency.clone(), Decimal::ONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_rates() {
        let table = RateTable::reference();

        assert_eq!(table.rate(&Currency::usd(), &Currency::jpy()), dec!(111.801));
        assert_eq!(table.rate(&Currency::usd(), &Currency::twd()), dec!(30.444));
        assert_eq!(table.rate(&Currency::twd(), &Currency::jpy()), dec!(3.669));
        assert_eq!(table.rate(&Currency::jpy(), &Currency::twd()), dec!(0.26956));
    }

    #[test]
    fn test_self_rate_is_one() {
        let table = RateTable::reference();

        for currency in table.currencies() {
            assert_eq!(table.rate(&currency, &currency), Decimal::ONE, "{currency}");
        }
    }

    #[test]
    fn test_unknown_pair_is_zero() {
        let table = RateTable::reference();
        let eur = Currency::new("EUR");

        assert_eq!(table.rate(&Currency::usd(), &eur), Decimal::ZERO);
        assert_eq!(table.rate(&Currency::twd(), &eur), Decimal::ZERO);
        assert_eq!(table.rate(&eur, &Currency::usd()), Decimal::ZERO);
        assert_eq!(table.get(&CurrencyPair::new(Currency::usd(), eur)), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RateTable::reference();

        assert_eq!(
            table.rate(&Currency::new("usd"), &Currency::new("twd")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_builder_adds_identity_for_targets() {
        let table = RateTable::builder()
            .rate(Currency::usd(), Currency::new("EUR"), dec!(0.92))
            .rate(Currency::usd(), Currency::usd(), dec!(5))
            .build();
        let eur = Currency::new("EUR");

        assert_eq!(table.rate(&eur, &eur), Decimal::ONE);
        assert_eq!(table.rate(&Currency::usd(), &Currency::usd()), Decimal::ONE);
        assert_eq!(table.rate(&eur, &Currency::usd()), Decimal::ZERO);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_currencies_sorted() {
        let table = RateTable::reference();

        assert_eq!(
            table.currencies(),
            vec![Currency::jpy(), Currency::twd(), Currency::usd()]
        );
        assert!(!table.is_empty());
        assert!(RateTable::default().is_empty());
    }
}
