use chrono::{TimeZone, Utc};
use slate_core::types::SelectionRound;
use slate_core::{AllocationConfig, Capacity, ContentItem, SlateBuilder};

fn item(id: &str, content_type: &str, trending: bool, t: i64) -> ContentItem {
    ContentItem::new(id, content_type, trending, Utc.timestamp_opt(t, 0).unwrap())
}

fn ids(slate: &slate_core::Slate) -> Vec<&str> {
    slate.ids().map(|id| id.as_str()).collect()
}

#[test]
fn scenario_exact_fit_keeps_pool_order() {
    let pool = vec![
        item("N1", "News", false, 1),
        item("E1", "ExpertOpinion", false, 9),
        item("N2", "News", true, 5),
        item("R1", "ResearchReport", true, 2),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(4)).unwrap();

    assert_eq!(ids(&slate), vec!["N1", "E1", "N2", "R1"]);
    assert!(slate.allocation.exact_fit);
    assert!(slate.entries.iter().all(|e| e.round == SelectionRound::ExactFit));
    assert_eq!(slate.allocation.diversity_picks, 0);
    assert_eq!(slate.allocation.backfill_picks, 0);
}

#[test]
fn scenario_diversity_then_backfill() {
    let pool = vec![
        item("n1", "News", false, 1),
        item("n2", "News", true, 5),
        item("n3", "News", false, 3),
        item("e1", "ExpertOpinion", false, 2),
    ];

    let builder = SlateBuilder::new(AllocationConfig::v0()).unwrap();
    let slate = builder.build(&pool, Capacity::new(3)).unwrap();

    assert_eq!(ids(&slate), vec!["n2", "e1", "n3"]);

    let rounds: Vec<SelectionRound> = slate.entries.iter().map(|e| e.round).collect();
    assert_eq!(
        rounds,
        vec![SelectionRound::Diversity, SelectionRound::Diversity, SelectionRound::Backfill]
    );

    let ranks: Vec<usize> = slate.entries.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    assert_eq!(slate.allocation.items_considered, 4);
    assert_eq!(slate.allocation.items_selected, 3);
    assert_eq!(slate.allocation.diversity_picks, 2);
    assert_eq!(slate.allocation.backfill_picks, 1);
    assert_eq!(slate.allocation.items_excluded_by_capacity, 1);
    assert!(!slate.allocation.exact_fit);
}

#[test]
fn scenario_capacity_larger_than_pool() {
    let pool = vec![
        item("a", "Infographic", false, 1),
        item("b", "Interview", true, 2),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(5)).unwrap();

    // Type order puts Infographic ahead of Interview regardless of trending
    assert_eq!(ids(&slate), vec!["a", "b"]);
    assert_eq!(slate.allocation.diversity_picks, 2);
    assert_eq!(slate.allocation.backfill_picks, 0);
    assert_eq!(slate.allocation.capacity, 5);
}

#[test]
fn scenario_zero_or_negative_capacity_yields_empty_slate() {
    let pool = vec![
        item("a", "News", true, 1),
        item("b", "Interview", false, 2),
    ];
    let builder = SlateBuilder::default();

    for raw in [0, -1, i64::MIN] {
        let slate = builder.build(&pool, Capacity::from_raw(raw)).unwrap();
        assert!(slate.is_empty(), "capacity {raw} should yield nothing");
        assert_eq!(slate.allocation.items_excluded_by_capacity, 2);
    }
}

#[test]
fn empty_pool_yields_empty_slate() {
    let slate = SlateBuilder::default().build(&[], Capacity::new(3)).unwrap();
    assert!(slate.is_empty());
    assert_eq!(slate.allocation.items_considered, 0);
}

#[test]
fn diversity_round_stops_at_capacity() {
    let pool = vec![
        item("i1", "Interview", true, 9),
        item("n1", "News", false, 1),
        item("r1", "ResearchReport", false, 2),
        item("e1", "ExpertOpinion", false, 3),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(2)).unwrap();

    // News and ExpertOpinion come first in type order; the trending interview waits
    assert_eq!(ids(&slate), vec!["n1", "e1"]);
    assert_eq!(slate.allocation.backfill_picks, 0);
}

#[test]
fn unrecognized_types_compete_only_in_backfill() {
    let pool = vec![
        item("p1", "Podcast", true, 100),
        item("n1", "News", false, 1),
        item("n2", "News", false, 2),
        item("e1", "ExpertOpinion", false, 3),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(3)).unwrap();

    // Trending podcast outranks the leftover news item in backfill
    assert_eq!(ids(&slate), vec!["n2", "e1", "p1"]);
    assert_eq!(slate.entries[2].round, SelectionRound::Backfill);
}

#[test]
fn backfill_ties_keep_group_then_pool_order() {
    let pool = vec![
        item("x1", "Podcast", false, 5),
        item("e1", "ExpertOpinion", false, 9),
        item("e2", "ExpertOpinion", false, 5),
        item("n1", "News", false, 9),
        item("n2", "News", false, 5),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(4)).unwrap();

    // Leftovers [n2, e2, x1] all tie; concatenation order wins
    assert_eq!(ids(&slate), vec!["n1", "e1", "n2", "e2"]);
}

#[test]
fn pool_with_only_one_type_is_ranked_by_priority() {
    let pool = vec![
        item("a", "News", false, 1),
        item("b", "News", false, 3),
        item("c", "News", true, 0),
        item("d", "News", false, 2),
    ];

    let slate = SlateBuilder::default().build(&pool, Capacity::new(3)).unwrap();

    assert_eq!(ids(&slate), vec!["c", "b", "d"]);
}
