//! Colour palettes and the marker-symbol mapping for thread configurations.

use std::collections::BTreeMap;

use crate::record::{Kernel, ThreadCombo};

/// Colour used for datasets missing from the palette.
pub const FALLBACK_COLOR: &str = "gray";

/// Plotly marker symbols assigned to thread configurations, in order.
pub const SYMBOL_CYCLE: [&str; 10] = [
    "circle",
    "square",
    "diamond",
    "cross",
    "x",
    "triangle-up",
    "triangle-down",
    "pentagon",
    "hexagon",
    "star",
];

const DEFAULT_PALETTE: [(&str, &str); 7] = [
    ("Benchmark1", "#1f77b4"),
    ("Benchmark2", "#ff7f0e"),
    ("DS3", "#2ca02c"),
    ("DS4", "#d62728"),
    ("DS5", "#9467bd"),
    ("DS6", "#8c564b"),
    ("DS7", "#e377c2"),
];

/// Dataset-name to colour mapping.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE
                .iter()
                .map(|&(name, color)| (name.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Default palette with `overrides` replacing or adding entries.
    #[must_use]
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, color) in overrides {
            self.colors.insert(name.into(), color.into());
        }
        self
    }

    /// Colour for `dataset`, or [`FALLBACK_COLOR`].
    pub fn color(&self, dataset: &str) -> &str {
        self.colors.get(dataset).map_or(FALLBACK_COLOR, String::as_str)
    }
}

/// Fixed colour per kernel variant.
pub fn kernel_color(kernel: Kernel) -> &'static str {
    match kernel {
        Kernel::Native => "#636efa",
        Kernel::BeagleSse => "#ef553b",
    }
}

/// Assigns marker symbols to thread configurations.
///
/// Configurations are ordered ascending and take symbols from
/// [`SYMBOL_CYCLE`] in turn, wrapping when there are more configurations
/// than symbols.
#[derive(Debug, Clone, Default)]
pub struct SymbolMap {
    combos: Vec<ThreadCombo>,
}

impl SymbolMap {
    /// Build the mapping from every configuration present in `combos`.
    pub fn new(combos: impl IntoIterator<Item = ThreadCombo>) -> Self {
        let mut combos: Vec<ThreadCombo> = combos.into_iter().collect();
        combos.sort_unstable();
        combos.dedup();
        Self { combos }
    }

    /// Symbol for `combo`; unknown configurations fall back to `circle`.
    pub fn symbol(&self, combo: ThreadCombo) -> &'static str {
        self.combos
            .binary_search(&combo)
            .map_or(SYMBOL_CYCLE[0], |i| SYMBOL_CYCLE[i % SYMBOL_CYCLE.len()])
    }

    /// Configurations in symbol-assignment order.
    pub fn combos(&self) -> &[ThreadCombo] {
        &self.combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(beast: u32, beagle: u32) -> ThreadCombo {
        ThreadCombo { beast, beagle }
    }

    #[test]
    fn palette_defaults_and_fallback() {
        let palette = Palette::default();
        assert_eq!(palette.color("DS3"), "#2ca02c");
        assert_eq!(palette.color("DS99"), FALLBACK_COLOR);
    }

    #[test]
    fn palette_overrides() {
        let palette = Palette::default().with_overrides([("DS3", "#000000"), ("DS8", "#111111")]);
        assert_eq!(palette.color("DS3"), "#000000");
        assert_eq!(palette.color("DS8"), "#111111");
        assert_eq!(palette.color("DS4"), "#d62728");
    }

    #[test]
    fn symbols_follow_sorted_order() {
        let map = SymbolMap::new([combo(4, 4), combo(1, 1), combo(2, 4), combo(1, 1)]);
        assert_eq!(map.combos().len(), 3);
        assert_eq!(map.symbol(combo(1, 1)), "circle");
        assert_eq!(map.symbol(combo(2, 4)), "square");
        assert_eq!(map.symbol(combo(4, 4)), "diamond");
        assert_eq!(map.symbol(combo(8, 8)), "circle");
    }

    #[test]
    fn symbols_wrap_around() {
        let map = SymbolMap::new((1..=11).map(|n| combo(n, 1)));
        assert_eq!(map.symbol(combo(10, 1)), "star");
        assert_eq!(map.symbol(combo(11, 1)), "circle");
    }
}
