//! Unit tests for atlas-route.
//!
//! All tests use small hand-crafted graphs so expected costs can be checked
//! by hand.

#[cfg(test)]
mod helpers {
    use atlas_core::Minutes;
    use atlas_graph::{Activity, Graph};
    use rustc_hash::FxHashMap;

    /// Four-island network.
    ///
    /// Links (travel minutes):
    ///   oahu → maui  (30)
    ///   oahu → kauai (100)
    ///   maui → kauai (40)
    ///   lanai → oahu (10)     — nothing links *to* lanai
    ///
    /// Activities: oahu has "surf" (120); maui has "luau" (60) and
    /// "hike" (90); kauai and lanai have none.
    ///
    /// Baseline from oahu: maui = 30, kauai = 70 (via maui), lanai = None.
    /// Effective from oahu: maui = 150, kauai = 220 (direct — the via-maui
    /// path costs 340 once maui's activities are charged), lanai = None.
    pub fn islands() -> Graph {
        let mut g = Graph::new();
        g.add_location(
            "oahu",
            950,
            FxHashMap::default(),
            vec![Activity::new("surf", Minutes(120))],
        )
        .unwrap();
        g.add_location(
            "maui",
            750,
            FxHashMap::default(),
            vec![
                Activity::new("luau", Minutes(60)),
                Activity::new("hike", Minutes(90)),
            ],
        )
        .unwrap();
        g.add_location("kauai", 70, FxHashMap::default(), vec![])
            .unwrap();
        g.add_location("lanai", 3, FxHashMap::default(), vec![])
            .unwrap();
        g.add_link("oahu", "maui", Minutes(30)).unwrap();
        g.add_link("oahu", "kauai", Minutes(100)).unwrap();
        g.add_link("maui", "kauai", Minutes(40)).unwrap();
        g.add_link("lanai", "oahu", Minutes(10)).unwrap();
        g
    }
}

// ── Baseline search ───────────────────────────────────────────────────────────

#[cfg(test)]
mod baseline {
    use atlas_core::Minutes;
    use atlas_graph::{Graph, GraphError};
    use rustc_hash::FxHashMap;

    use crate::{shortest_paths, RouteError};

    #[test]
    fn start_costs_zero() {
        let g = super::helpers::islands();
        let costs = shortest_paths(&g, "oahu").unwrap();
        assert_eq!(costs.cost(g.id_of("oahu").unwrap()), Some(Minutes::ZERO));
    }

    #[test]
    fn takes_cheaper_indirect_path() {
        let g = super::helpers::islands();
        let costs = shortest_paths(&g, "oahu").unwrap();
        assert_eq!(costs.cost(g.id_of("maui").unwrap()), Some(Minutes(30)));
        // Direct link is 100; via maui is 30 + 40 = 70.
        assert_eq!(costs.cost(g.id_of("kauai").unwrap()), Some(Minutes(70)));
    }

    #[test]
    fn unreachable_is_none() {
        let g = super::helpers::islands();
        let costs = shortest_paths(&g, "oahu").unwrap();
        let lanai = g.id_of("lanai").unwrap();
        assert_eq!(costs.cost(lanai), None);
        assert!(!costs.is_reachable(lanai));
    }

    #[test]
    fn relaxation_fixpoint() {
        let g = super::helpers::islands();
        let costs = shortest_paths(&g, "oahu").unwrap();
        // For every link (k, d, w) with k reached: cost(d) <= cost(k) + w.
        for id in g.ids() {
            let Some(from_cost) = costs.cost(id) else { continue };
            for link in &g.get(id).links {
                let dest = g.id_of(&link.dest).unwrap();
                let via = from_cost + link.travel;
                let dest_cost = costs.cost(dest).expect("relaxed dest must be reached");
                assert!(dest_cost <= via, "{} not at fixpoint", link.dest);
            }
        }
    }

    #[test]
    fn duplicate_links_traversed_independently() {
        let mut g = super::helpers::islands();
        // A second, cheaper parallel link must win.
        g.add_link("oahu", "kauai", Minutes(15)).unwrap();
        let costs = shortest_paths(&g, "oahu").unwrap();
        assert_eq!(costs.cost(g.id_of("kauai").unwrap()), Some(Minutes(15)));
    }

    #[test]
    fn single_location_graph() {
        let mut g = Graph::new();
        let only = g
            .add_location("atoll", 12, FxHashMap::default(), vec![])
            .unwrap();
        let costs = shortest_paths(&g, "atoll").unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs.cost(only), Some(Minutes::ZERO));
    }

    #[test]
    fn empty_graph_rejected() {
        let g = Graph::new();
        assert!(matches!(
            shortest_paths(&g, "oahu"),
            Err(RouteError::EmptyGraph)
        ));
    }

    #[test]
    fn unknown_start_rejected() {
        let g = super::helpers::islands();
        assert!(matches!(
            shortest_paths(&g, "niihau"),
            Err(RouteError::Graph(GraphError::UnknownLocation(n))) if n == "niihau"
        ));
    }

    #[test]
    fn dangling_destination_fails_not_skipped() {
        let mut g = super::helpers::islands();
        g.add_link("kauai", "phantom", Minutes(5)).unwrap();
        // kauai is reachable from oahu, so the dangling link is traversed
        // and must fail the whole query.
        assert!(matches!(
            shortest_paths(&g, "oahu"),
            Err(RouteError::Graph(GraphError::UnknownLocation(n))) if n == "phantom"
        ));
    }

    #[test]
    fn idempotent_on_unmodified_graph() {
        let g = super::helpers::islands();
        let a = shortest_paths(&g, "oahu").unwrap();
        let b = shortest_paths(&g, "oahu").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn named_iteration_in_insertion_order() {
        let g = super::helpers::islands();
        let costs = shortest_paths(&g, "oahu").unwrap();
        let named: Vec<_> = costs.named(&g).collect();
        assert_eq!(named[0], ("oahu", Some(Minutes::ZERO)));
        assert_eq!(named[1], ("maui", Some(Minutes(30))));
        assert_eq!(named[3], ("lanai", None));
    }
}

// ── Cost-augmented search ─────────────────────────────────────────────────────

#[cfg(test)]
mod effective {
    use atlas_core::Minutes;
    use atlas_graph::{Activity, Graph, GraphError};
    use rustc_hash::FxHashMap;

    use crate::{effective_cost_paths, shortest_paths, RouteError};

    #[test]
    fn activity_cost_charged_on_departure_only() {
        // A(pop 100) → B(pop 50), travel 5, B has one activity of duration 3.
        // B's activity must not affect the cost of reaching B, nor appear in
        // B's reported set.
        let mut g = Graph::new();
        g.add_location("A", 100, FxHashMap::default(), vec![])
            .unwrap();
        g.add_location(
            "B",
            50,
            FxHashMap::default(),
            vec![Activity::new("rest", Minutes(3))],
        )
        .unwrap();
        g.add_link("A", "B", Minutes(5)).unwrap();

        let base = shortest_paths(&g, "A").unwrap();
        let a = g.id_of("A").unwrap();
        let b = g.id_of("B").unwrap();
        assert_eq!(base.cost(a), Some(Minutes::ZERO));
        assert_eq!(base.cost(b), Some(Minutes(5)));

        let eff = effective_cost_paths(&g, "A").unwrap();
        assert_eq!(eff.cost(a), Some(Minutes::ZERO));
        assert_eq!(eff.cost(b), Some(Minutes(5)));
        assert!(eff.activities(a).is_empty());
        assert!(eff.activities(b).is_empty());
    }

    #[test]
    fn local_cost_repaid_on_every_hop_out() {
        let g = super::helpers::islands();
        let eff = effective_cost_paths(&g, "oahu").unwrap();
        // oahu's surf (120) is charged on both of its outgoing links.
        assert_eq!(eff.cost(g.id_of("maui").unwrap()), Some(Minutes(150)));
        // Via maui the path would repay maui's 150 min of activities
        // (30 + 120 + 40 + 150 = 340), so the direct 100-min link wins
        // even though the baseline search preferred the indirect path.
        assert_eq!(eff.cost(g.id_of("kauai").unwrap()), Some(Minutes(220)));
    }

    #[test]
    fn best_path_activities_snapshot() {
        let g = super::helpers::islands();
        let eff = effective_cost_paths(&g, "oahu").unwrap();
        // maui's best path departs only from oahu.
        assert_eq!(
            eff.activity_names(&g, g.id_of("maui").unwrap()),
            ["surf"]
        );
        // kauai's best path is the direct link — maui's luau/hike belong to
        // the superseded path and must not leak in.
        assert_eq!(
            eff.activity_names(&g, g.id_of("kauai").unwrap()),
            ["surf"]
        );
        // Unreachable locations report an empty set.
        assert!(eff.activities(g.id_of("lanai").unwrap()).is_empty());
    }

    #[test]
    fn activities_accumulate_along_chain() {
        let mut g = Graph::new();
        g.add_location(
            "a",
            1,
            FxHashMap::default(),
            vec![Activity::new("fish", Minutes(10))],
        )
        .unwrap();
        g.add_location(
            "b",
            1,
            FxHashMap::default(),
            vec![Activity::new("camp", Minutes(20))],
        )
        .unwrap();
        g.add_location("c", 1, FxHashMap::default(), vec![])
            .unwrap();
        g.add_link("a", "b", Minutes(5)).unwrap();
        g.add_link("b", "c", Minutes(5)).unwrap();

        let eff = effective_cost_paths(&g, "a").unwrap();
        // b: 5 travel + 10 fishing at a.
        assert_eq!(eff.cost(g.id_of("b").unwrap()), Some(Minutes(15)));
        // c: 15 + 5 travel + 20 camping at b.
        assert_eq!(eff.cost(g.id_of("c").unwrap()), Some(Minutes(40)));
        assert_eq!(eff.activity_names(&g, g.id_of("b").unwrap()), ["fish"]);
        assert_eq!(
            eff.activity_names(&g, g.id_of("c").unwrap()),
            ["camp", "fish"]
        );
    }

    #[test]
    fn equal_candidate_does_not_replace() {
        // Two equal-cost paths into d; the first-settled predecessor's
        // activity snapshot must survive.  Zero-duration activities keep the
        // costs identical while making the winning path observable.
        let mut g = Graph::new();
        g.add_location("s", 1, FxHashMap::default(), vec![]).unwrap();
        g.add_location(
            "x",
            1,
            FxHashMap::default(),
            vec![Activity::new("via-x", Minutes::ZERO)],
        )
        .unwrap();
        g.add_location(
            "y",
            1,
            FxHashMap::default(),
            vec![Activity::new("via-y", Minutes::ZERO)],
        )
        .unwrap();
        g.add_location("d", 1, FxHashMap::default(), vec![]).unwrap();
        g.add_link("s", "x", Minutes(5)).unwrap();
        g.add_link("s", "y", Minutes(5)).unwrap();
        g.add_link("x", "d", Minutes(5)).unwrap();
        g.add_link("y", "d", Minutes(5)).unwrap();

        let eff = effective_cost_paths(&g, "s").unwrap();
        let d = g.id_of("d").unwrap();
        assert_eq!(eff.cost(d), Some(Minutes(10)));
        // x precedes y in insertion order, so x settles first and its
        // relaxation of d is never displaced by y's equal candidate.
        assert_eq!(eff.activity_names(&g, d), ["via-x"]);
    }

    #[test]
    fn never_cheaper_than_baseline() {
        let g = super::helpers::islands();
        let base = shortest_paths(&g, "oahu").unwrap();
        let eff = effective_cost_paths(&g, "oahu").unwrap();
        for id in g.ids() {
            match (base.cost(id), eff.cost(id)) {
                (Some(b), Some(e)) => assert!(e >= b, "{} got cheaper", g.name(id)),
                (None, None) => {}
                (b, e) => panic!("reachability mismatch at {}: {b:?} vs {e:?}", g.name(id)),
            }
        }
    }

    #[test]
    fn error_taxonomy_matches_baseline() {
        let g = Graph::new();
        assert!(matches!(
            effective_cost_paths(&g, "oahu"),
            Err(RouteError::EmptyGraph)
        ));

        let mut g = super::helpers::islands();
        assert!(matches!(
            effective_cost_paths(&g, "niihau"),
            Err(RouteError::Graph(GraphError::UnknownLocation(_)))
        ));

        g.add_link("maui", "phantom", Minutes(1)).unwrap();
        assert!(matches!(
            effective_cost_paths(&g, "oahu"),
            Err(RouteError::Graph(GraphError::UnknownLocation(n))) if n == "phantom"
        ));
    }

    #[test]
    fn idempotent_on_unmodified_graph() {
        let g = super::helpers::islands();
        let a = effective_cost_paths(&g, "oahu").unwrap();
        let b = effective_cost_paths(&g, "oahu").unwrap();
        assert_eq!(a.costs(), b.costs());
        for id in g.ids() {
            assert_eq!(a.activities(id), b.activities(id));
        }
    }
}
