//! Recursive crafting cost aggregation
//!
//! `request_costs` resolves a potion's ingredient tree into a per-node
//! cost breakdown and accumulates a grand total across the whole
//! recursion. Each request gets its own [`Totals`] accumulator, threaded
//! by reference through the recursion, so every node's contribution is
//! counted exactly once and sequential requests never see each other's
//! residue.

use thiserror::Error;

use crate::dataset::Dataset;
use crate::models::{CostNode, Totals};

#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("no potion definition named '{0}'")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidInput(String),

    #[error("potion '{0}' is an ingredient of itself")]
    CyclicDefinition(String),
}

/// Result of one top-level cost request.
#[derive(Debug)]
pub struct CostReport {
    pub root: CostNode,
    pub totals: Totals,
}

/// Compute the full crafting cost of `amount` units of `name`.
///
/// The amount must be a positive finite number and the name non-empty;
/// anything else is rejected before any aggregation happens. An unknown
/// top-level name is `NotFound`; unknown names deeper in the tree prune
/// only their branch.
pub fn request_costs(dataset: &Dataset, name: &str, amount: f64) -> Result<CostReport, CostError> {
    if name.is_empty() {
        return Err(CostError::InvalidInput("potion name is empty".to_string()));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CostError::InvalidInput(format!(
            "amount must be a positive number, got {amount}"
        )));
    }

    let mut totals = Totals::new();
    let mut path = Vec::new();
    let root = compute_cost(dataset, name, amount, &mut totals, &mut path)?;

    Ok(CostReport { root, totals })
}

/// One level of the recursion. `path` holds the names currently being
/// resolved, root first; re-entering one of them means the dataset has a
/// reference cycle and the whole computation fails fast.
fn compute_cost(
    dataset: &Dataset,
    name: &str,
    amount: f64,
    totals: &mut Totals,
    path: &mut Vec<String>,
) -> Result<CostNode, CostError> {
    if path.iter().any(|seen| seen == name) {
        return Err(CostError::CyclicDefinition(name.to_string()));
    }

    // NotFound must leave the accumulator untouched, so look up before
    // any mutation.
    let potion = dataset
        .get(name)
        .ok_or_else(|| CostError::NotFound(name.to_string()))?;

    let mut node = CostNode::new(name, amount);
    path.push(name.to_string());

    for entry in &potion.ingredients {
        if entry.amount <= 0.0 {
            continue;
        }

        if entry.is_token_cost() {
            // The only point where tokens enter the accumulator.
            let tokens = potion.cost * amount;
            node.own_tokens += tokens;
            totals.tokens += tokens;
            continue;
        }

        match compute_cost(dataset, &entry.name, entry.amount * amount, totals, path) {
            Ok(child) => node.children.push(child),
            Err(CostError::NotFound(missing)) => {
                log::warn!("Ignoring unknown ingredient '{missing}' of '{name}'");
            }
            Err(err) => {
                path.pop();
                return Err(err);
            }
        }
    }

    for geode in &potion.geode_yield {
        if geode.amount <= 0.0 {
            continue;
        }
        let scaled = geode.amount * amount;
        node.own_geodes.insert(
            geode.name.clone(),
            crate::models::GeodeCost {
                amount: scaled,
                rarity: geode.rarity,
                origin: geode.origin.clone(),
            },
        );
        totals.add_geode(&geode.name, scaled, geode.rarity, &geode.origin);
    }

    for stat in &potion.stat_yield {
        if stat.amount <= 0.0 {
            continue;
        }
        let scaled = stat.amount * amount;
        node.own_stats.insert(stat.name.clone(), scaled);
        totals.add_stat(&stat.name, scaled);
    }

    path.pop();
    Ok(node)
}
