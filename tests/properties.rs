//! Randomized invariant checks over seeded target sets.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use plunder::collections::{merge_sort_by_key, MaxHeap, OrderedIndex};
use plunder::{Archipelago, BatchNavigator, DispatchNavigator, Target};

const SEEDS: std::ops::Range<u64> = 0..40;

fn random_sea(rng: &mut SmallRng) -> Archipelago {
    let n = rng.gen_range(0..40);
    (0..n)
        .map(|i| {
            // Round resources to whole units so sums stay exact.
            let resource = rng.gen_range(0..2_000) as f64;
            let defense = if rng.gen_bool(0.1) { 0 } else { rng.gen_range(1..300) };
            Target::new(format!("T{}", i), resource, defense)
        })
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn sweep_matches_naive_and_is_monotonic() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sea = random_sea(&mut rng);
        let nav = BatchNavigator::new(&sea, 0);
        let crews: Vec<u64> = (0..rng.gen_range(0..60))
            .map(|_| rng.gen_range(0..sea.total_defense() + 50))
            .collect();

        let swept = nav.allocate_for_many(&sea, &crews);
        assert_eq!(swept.len(), crews.len());
        for (crew, got) in crews.iter().zip(&swept) {
            let naive = nav.plunder_for_crew(&sea, *crew);
            assert!(close(naive, *got), "seed {} crew {}: {} vs {}", seed, crew, naive, got);
            if *crew == 0 {
                assert_eq!(*got, 0.0);
            }
            assert!(*got <= sea.total_resource() + 1e-6);
        }

        let mut pairs: Vec<(u64, f64)> = crews.iter().copied().zip(swept).collect();
        pairs.sort_by_key(|&(c, _)| c);
        for w in pairs.windows(2) {
            assert!(w[1].1 + 1e-6 >= w[0].1, "seed {}: not monotonic {:?}", seed, w);
        }
    }
}

#[test]
fn allocate_once_never_overspends() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sea = random_sea(&mut rng);
        let budget = rng.gen_range(0..5_000);
        let nav = BatchNavigator::new(&sea, budget);
        let plan = nav.allocate_once(&sea);
        let sent: u64 = plan.iter().map(|a| a.crew).sum();
        assert!(plan.iter().all(|a| a.crew <= sea[a.target].defense_cost));
        assert!(sent <= budget);
        if sea.total_defense() >= budget {
            assert_eq!(sent, budget);
        }
    }
}

#[test]
fn dispatch_never_overdraws() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut sea = random_sea(&mut rng);
        let units = rng.gen_range(0..12);
        let mut nav = DispatchNavigator::new(units);
        nav.add_targets(sea.ids().collect::<Vec<_>>());

        for _ in 0..8 {
            let crew = rng.gen_range(0..120);
            let before = sea.total_resource();
            let round = nav.run_round(&mut sea, crew);
            assert_eq!(round.len(), units);
            for s in &round {
                assert!(s.crew <= crew);
                if s.is_idle() {
                    assert_eq!(s.crew, 0);
                }
            }
            for (_, t) in sea.iter() {
                assert!(t.resource >= 0.0);
            }
            assert!(sea.total_resource() <= before);
        }
    }
}

#[test]
fn dispatch_on_exhausted_sea_is_idle() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut sea: Archipelago = (0..20)
        .map(|i| Target::new(format!("dry{}", i), 0.0, rng.gen_range(0..50)))
        .collect();
    let mut nav = DispatchNavigator::new(6);
    nav.add_targets(sea.ids().collect::<Vec<_>>());
    for crew in [0, 1, 10, 1_000] {
        let round = nav.run_round(&mut sea, crew);
        assert_eq!(round.len(), 6);
        assert!(round.iter().all(|s| s.is_idle() && s.crew == 0));
    }
}

#[test]
fn containers_agree_with_std_sorting() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let keys: Vec<u32> = (0..rng.gen_range(0..200)).map(|_| rng.gen_range(0..50)).collect();

        let tagged: Vec<(u32, usize)> = keys.iter().copied().zip(0..).collect();
        let mut expected = tagged.clone();
        expected.sort_by_key(|&(k, _)| k);
        assert_eq!(merge_sort_by_key(&tagged, |&(k, _)| k), expected);

        let mut index = OrderedIndex::new();
        for &(k, i) in &tagged {
            index.insert(k as f64, i);
        }
        let traversed: Vec<usize> = index.in_order().map(|(_, i)| *i).collect();
        let stable: Vec<usize> = expected.iter().map(|&(_, i)| i).collect();
        assert_eq!(traversed, stable);

        let mut desc = keys.clone();
        desc.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(MaxHeap::heapify(keys).into_sorted_desc(), desc);
    }
}
