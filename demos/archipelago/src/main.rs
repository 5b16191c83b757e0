//! archipelago — demo harness for the rust_atlas engine.
//!
//! Builds a small island network with populations, resources, and
//! location-local activities, then runs all three queries from a start
//! island and prints the results:
//!
//! 1. the greedy priority visitation schedule,
//! 2. baseline shortest travel times,
//! 3. effective costs (travel + activity time) with the activities
//!    accumulated along each best path.

use anyhow::Result;
use rustc_hash::FxHashMap;

use atlas_core::Minutes;
use atlas_graph::{Activity, Graph};
use atlas_plan::visit_order;
use atlas_route::{effective_cost_paths, shortest_paths};

// ── Constants ─────────────────────────────────────────────────────────────────

const START: &str = "Oahu";

// ── Sample data ───────────────────────────────────────────────────────────────

fn resources(pairs: &[(&str, u32)]) -> FxHashMap<String, u32> {
    pairs.iter().map(|&(n, q)| (n.to_owned(), q)).collect()
}

/// A five-island network.  Ferry times in minutes; Niihau has an inbound
/// route from Kauai only, and no outbound routes at all.
fn build_islands() -> Result<Graph> {
    let mut g = Graph::new();

    g.add_location(
        "Oahu",
        953_000,
        resources(&[("pineapple", 800), ("taro", 200)]),
        vec![Activity::new("surf lesson", Minutes(120))],
    )?;
    g.add_location(
        "Maui",
        165_000,
        resources(&[("sugarcane", 500)]),
        vec![
            Activity::new("luau", Minutes(60)),
            Activity::new("crater hike", Minutes(90)),
        ],
    )?;
    g.add_location(
        "Hawaii",
        200_000,
        resources(&[("coffee", 950), ("macadamia", 400)]),
        vec![Activity::new("volcano tour", Minutes(180))],
    )?;
    g.add_location(
        "Kauai",
        73_000,
        resources(&[("taro", 600)]),
        vec![],
    )?;
    g.add_location("Niihau", 170, resources(&[("shells", 90)]), vec![])?;

    g.add_link("Oahu", "Maui", Minutes(75))?;
    g.add_link("Oahu", "Kauai", Minutes(90))?;
    g.add_link("Maui", "Oahu", Minutes(75))?;
    g.add_link("Maui", "Hawaii", Minutes(60))?;
    g.add_link("Hawaii", "Maui", Minutes(60))?;
    g.add_link("Kauai", "Oahu", Minutes(90))?;
    g.add_link("Kauai", "Niihau", Minutes(30))?;

    Ok(g)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let graph = build_islands()?;

    let plan = visit_order(&graph, START)?;
    println!("Visitation schedule from {START}:");
    for (i, name) in plan.names(&graph).enumerate() {
        println!("  {:>2}. {name}", i + 1);
    }

    let costs = shortest_paths(&graph, START)?;
    println!("\nShortest travel times from {START}:");
    for (name, cost) in costs.named(&graph) {
        match cost {
            Some(c) => println!("  {name:<8} {c}"),
            None => println!("  {name:<8} unreachable"),
        }
    }

    let eff = effective_cost_paths(&graph, START)?;
    println!("\nEffective costs from {START} (travel + activities en route):");
    for id in graph.ids() {
        let name = graph.name(id);
        match eff.cost(id) {
            Some(c) => {
                let acts = eff.activity_names(&graph, id);
                let acts = if acts.is_empty() {
                    "-".to_owned()
                } else {
                    acts.join(", ")
                };
                println!("  {name:<8} {:<9} [{acts}]", c.to_string());
            }
            None => println!("  {name:<8} unreachable"),
        }
    }

    Ok(())
}
