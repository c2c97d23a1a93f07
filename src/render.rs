//! Terminal rendering of cost trees and totals
//!
//! Pure tree-to-view mapping over [`CostNode`]; the calculator knows
//! nothing about any of this. Collapsed entries render with a `+` prefix
//! and hide their contents until `--expand-all`.

use std::fmt;

use crate::format::{abbreviate, plain};
use crate::models::{CostNode, Totals};

/// One entry of the breakdown view.
#[derive(Debug)]
pub struct ViewNode {
    pub title: String,
    pub lines: Vec<String>,
    pub expanded: bool,
    pub children: Vec<ViewNode>,
}

/// Map a cost tree to its view tree.
///
/// The root starts expanded. Every descendant starts collapsed unless it
/// has no own costs at all, in which case there is nothing to hide and it
/// starts expanded.
pub fn build_view(node: &CostNode) -> ViewNode {
    build_view_inner(node, true)
}

fn build_view_inner(node: &CostNode, is_root: bool) -> ViewNode {
    let mut lines = Vec::new();

    if node.own_tokens > 0.0 {
        lines.push(format!("x{} Tokens", abbreviate(node.own_tokens)));
    }
    for (name, geode) in &node.own_geodes {
        lines.push(format!(
            "x{} {} (1/{})",
            abbreviate(geode.amount),
            name,
            geode.rarity
        ));
    }
    for (name, amount) in &node.own_stats {
        lines.push(format!("x{} {}", abbreviate(*amount), name));
    }

    ViewNode {
        title: format!("x{} {}", plain(node.requested_amount), node.name),
        lines,
        expanded: is_root || !node.has_own_costs(),
        children: node
            .children
            .iter()
            .map(|child| build_view_inner(child, false))
            .collect(),
    }
}

/// Render a view tree as an indented list. `expand_all` forces collapsed
/// entries open.
pub fn render_tree(view: &ViewNode, expand_all: bool) -> String {
    let mut output = String::new();
    render_node(view, 0, expand_all, &mut output);
    output
}

fn render_node(view: &ViewNode, indent: usize, expand_all: bool, output: &mut String) {
    let prefix = "  ".repeat(indent);

    if view.expanded || expand_all {
        output.push_str(&format!("{}- {}\n", prefix, view.title));
        for line in &view.lines {
            output.push_str(&format!("{}    {}\n", prefix, line));
        }
        for child in &view.children {
            render_node(child, indent + 1, expand_all, output);
        }
    } else {
        output.push_str(&format!("{}+ {}\n", prefix, view.title));
    }
}

/// The aggregated totals panel, rendered separately from the breakdown.
#[derive(Debug)]
pub struct TotalsPanel<'a> {
    totals: &'a Totals,
}

impl<'a> TotalsPanel<'a> {
    pub fn new(totals: &'a Totals) -> Self {
        TotalsPanel { totals }
    }
}

impl fmt::Display for TotalsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Total Costs ===")?;

        writeln!(f, "Tokens:")?;
        writeln!(
            f,
            "  x{} Tokens or x{} Tokens (discounted)",
            abbreviate(self.totals.tokens),
            abbreviate(self.totals.discounted_tokens())
        )?;

        writeln!(f, "Geodes:")?;
        for (name, geode) in &self.totals.geodes {
            writeln!(
                f,
                "  x{} {} (1/{}), From {} Geode",
                abbreviate(geode.amount),
                name,
                geode.rarity,
                geode.origin
            )?;
        }

        writeln!(f, "Stats:")?;
        for (name, amount) in &self.totals.stats {
            writeln!(f, "  x{} {}", abbreviate(*amount), name)?;
        }

        Ok(())
    }
}
