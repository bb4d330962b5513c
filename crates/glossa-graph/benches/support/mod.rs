#![allow(dead_code)]

use glossa_core::model::{Definitions, Term};

#[derive(Clone, Copy, Debug)]
pub struct BenchmarkTier {
    pub name: &'static str,
    pub term_count: usize,
    pub mentions_per_term: usize,
}

pub const TIER_S: BenchmarkTier = BenchmarkTier {
    name: "S",
    term_count: 50,
    mentions_per_term: 3,
};

pub const TIER_M: BenchmarkTier = BenchmarkTier {
    name: "M",
    term_count: 250,
    mentions_per_term: 4,
};

pub const TIER_L: BenchmarkTier = BenchmarkTier {
    name: "L",
    term_count: 1_000,
    mentions_per_term: 5,
};

pub const TIERS: [BenchmarkTier; 3] = [TIER_S, TIER_M, TIER_L];

#[derive(Clone, Copy, Debug)]
struct Prng(u64);

impl Prng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // 64-bit LCG constants from Numerical Recipes.
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    fn next_index(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u64() as usize) % upper_exclusive
    }
}

/// Generate one synthetic category: every definition mentions a handful of
/// random other titles, giving the scanner and sorter realistic cross-link
/// density.
pub fn generate_category(tier: BenchmarkTier, seed: u64) -> Vec<Term> {
    generate_category_with_term_limit(tier, seed, tier.term_count)
}

/// Tier generation honoring `GLOSSA_BENCH_MAX_TERMS` (default 300) so the
/// L tier stays tractable on developer machines.
pub fn generate_category_for_bench(tier: BenchmarkTier, seed: u64) -> Vec<Term> {
    let max_terms = std::env::var("GLOSSA_BENCH_MAX_TERMS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(300);
    generate_category_with_term_limit(tier, seed, tier.term_count.min(max_terms))
}

pub fn generate_category_with_term_limit(
    tier: BenchmarkTier,
    seed: u64,
    term_limit: usize,
) -> Vec<Term> {
    let mut prng = Prng::new(seed);
    let titles: Vec<String> = (0..term_limit).map(|i| format!("Concept{i}")).collect();

    (0..term_limit)
        .map(|i| {
            let mut text = String::from("Builds on");
            let mut mentioned_any = false;
            for _ in 0..tier.mentions_per_term {
                let j = prng.next_index(term_limit);
                if j == i {
                    continue;
                }
                if mentioned_any {
                    text.push_str(" and");
                }
                text.push(' ');
                text.push_str(&titles[j]);
                mentioned_any = true;
            }
            if !mentioned_any {
                text = "Stands alone".to_string();
            }

            Term {
                id: format!("term-{i}"),
                title: titles[i].clone(),
                definitions: Definitions {
                    istilah: Some(text),
                    bahasa: Some("from synthetic benchmark vocabulary".to_string()),
                    ..Definitions::default()
                },
                is_understood: None,
            }
        })
        .collect()
}
