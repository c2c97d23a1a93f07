//! Data models for potion definitions and computed costs

use indexmap::IndexMap;
use serde::Deserialize;

/// A craftable potion as it appears in the dataset.
///
/// Sparse records are common: any of `cost`, `ingredients`, `geodeYield`
/// or `statYield` may be absent and defaults to empty/zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotionDefinition {
    pub name: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub geode_yield: Vec<GeodeYield>,
    #[serde(default)]
    pub stat_yield: Vec<StatYield>,
}

/// One ingredient line of a potion: either a sub-potion reference or,
/// when `name` is the `"nothing"` sentinel, a pure token cost.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    pub amount: f64,
}

impl IngredientEntry {
    pub fn is_token_cost(&self) -> bool {
        self.name == "nothing"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeodeYield {
    pub name: String,
    pub amount: f64,
    pub rarity: u64,
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatYield {
    pub name: String,
    pub amount: f64,
}

/// A geode requirement: a drop chance of 1 in `rarity`, found in the
/// `origin` geode type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeCost {
    pub amount: f64,
    pub rarity: u64,
    pub origin: String,
}

/// One node of the computed cost tree.
///
/// The own-fields hold only costs contributed directly by this potion's
/// definition, scaled by `requested_amount`. Costs from sub-potions live
/// in `children` and are never merged upward.
#[derive(Debug, Clone)]
pub struct CostNode {
    pub name: String,
    pub requested_amount: f64,
    pub own_tokens: f64,
    pub own_geodes: IndexMap<String, GeodeCost>,
    pub own_stats: IndexMap<String, f64>,
    pub children: Vec<CostNode>,
}

impl CostNode {
    pub fn new(name: &str, requested_amount: f64) -> Self {
        CostNode {
            name: name.to_string(),
            requested_amount,
            own_tokens: 0.0,
            own_geodes: IndexMap::new(),
            own_stats: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// True if this node carries any direct cost of its own.
    pub fn has_own_costs(&self) -> bool {
        self.own_tokens > 0.0 || !self.own_geodes.is_empty() || !self.own_stats.is_empty()
    }
}

/// Accumulated costs across an entire computation.
///
/// One instance lives per top-level request; it is threaded by reference
/// through the recursion and each node adds its own contributions exactly
/// once, at the point that node is processed.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    pub tokens: f64,
    pub geodes: IndexMap<String, GeodeCost>,
    pub stats: IndexMap<String, f64>,
}

impl Totals {
    pub fn new() -> Self {
        Totals::default()
    }

    /// Add a geode amount, keeping the first-seen rarity and origin.
    pub fn add_geode(&mut self, name: &str, amount: f64, rarity: u64, origin: &str) {
        self.geodes
            .entry(name.to_string())
            .or_insert_with(|| GeodeCost {
                amount: 0.0,
                rarity,
                origin: origin.to_string(),
            })
            .amount += amount;
    }

    pub fn add_stat(&mut self, name: &str, amount: f64) {
        *self.stats.entry(name.to_string()).or_default() += amount;
    }

    /// Token price after the vendor discount.
    pub fn discounted_tokens(&self) -> f64 {
        (self.tokens * 0.6).round()
    }
}

/// User-adjustable modifiers. Captured and displayed, but not factored
/// into any cost formula.
#[derive(Debug, Clone, Copy)]
pub struct Modifiers {
    pub luck: f64,
    pub roll_speed: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers {
            luck: 1.0,
            roll_speed: 1.0,
        }
    }
}
