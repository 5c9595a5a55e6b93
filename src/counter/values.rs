//! Derivation and caching of the selectable value sequence.

use super::config::CounterConfig;

/// Derive the ordered sequence `min, min+step, …, max`.
///
/// Callers are expected to have validated `config`; a non-positive step or
/// an inverted range yields an empty sequence instead of misbehaving.
pub fn derive(config: &CounterConfig) -> Vec<i64> {
    if config.step <= 0 || config.max_value < config.min_value {
        return Vec::new();
    }
    let count = (config.max_value - config.min_value) / config.step + 1;
    (0..count)
        .map(|i| config.min_value + i * config.step)
        .collect()
}

/// Value sequence memoized against the `(min, max, step)` key.
///
/// Re-deriving on every frame would be wasteful for large ranges, so the
/// sequence is rebuilt only when one of the keyed fields changes.
#[derive(Clone, Debug, Default)]
pub struct ValueSequence {
    key: Option<(i64, i64, i64)>,
    values: Vec<i64>,
}

impl ValueSequence {
    /// Empty sequence; call [`ValueSequence::ensure`] before reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the sequence if any keyed field changed; cheap otherwise.
    pub fn ensure(&mut self, config: &CounterConfig) {
        let key = (config.min_value, config.max_value, config.step);
        if self.key != Some(key) {
            self.values = derive(config);
            self.key = Some(key);
        }
    }

    /// The derived values in ascending order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of selectable values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True before the first `ensure` or for a degenerate configuration.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_yields_121_ascending_values() {
        let values = derive(&CounterConfig::default());
        assert_eq!(values.len(), 121);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&120));
        assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn stepped_range_spaces_values_by_step() {
        let config = CounterConfig {
            min_value: -10,
            max_value: 10,
            step: 5,
            major_division: 5,
            numbered_division: 5,
            ..CounterConfig::default()
        };
        assert_eq!(derive(&config), vec![-10, -5, 0, 5, 10]);
    }

    #[test]
    fn degenerate_configs_yield_empty_sequences() {
        let zero_step = CounterConfig {
            step: 0,
            ..CounterConfig::default()
        };
        assert!(derive(&zero_step).is_empty());

        let inverted = CounterConfig {
            min_value: 10,
            max_value: 0,
            ..CounterConfig::default()
        };
        assert!(derive(&inverted).is_empty());
    }

    #[test]
    fn ensure_recomputes_only_on_key_change() {
        let mut sequence = ValueSequence::new();
        assert!(sequence.is_empty());

        let config = CounterConfig::default();
        sequence.ensure(&config);
        assert_eq!(sequence.len(), 121);

        // Non-key fields do not invalidate the cache.
        let recolored = CounterConfig {
            monochrome: false,
            ..config.clone()
        };
        sequence.ensure(&recolored);
        assert_eq!(sequence.len(), 121);

        let shrunk = CounterConfig {
            max_value: 60,
            ..config
        };
        sequence.ensure(&shrunk);
        assert_eq!(sequence.len(), 61);
        assert_eq!(sequence.get(60), Some(60));
        assert_eq!(sequence.get(61), None);
    }
}
