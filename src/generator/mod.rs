//! Constrained random scramble generation.
//!
//! Each move is built by drawing a face uniformly until it satisfies the
//! active [`Constraints`] against the previous face (rejection sampling,
//! no backtracking), then drawing a modifier uniformly. Modifiers are never
//! constrained.
//!
//! The random source is always passed in explicitly. A batch owns a single
//! source for its whole run, so a seeded batch is reproducible.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scrambler::core::Constraints;
//! use scrambler::generator::generate_one;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let scramble = generate_one(20, &Constraints::default(), &mut rng);
//!
//! assert_eq!(scramble.len(), 20);
//! assert!(scramble.violations(&Constraints::default()).is_empty());
//! ```

mod context;

pub use context::GenerationContext;

use crate::builder::BatchRequest;
use crate::core::{Constraints, Face, Modifier, Move, Scramble};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produce one scramble of exactly `length` moves.
///
/// `length` is not validated here; callers bound it beforehand (see
/// [`crate::limits`]). A length of zero yields an empty scramble.
pub fn generate_one<R: Rng + ?Sized>(
    length: usize,
    constraints: &Constraints,
    rng: &mut R,
) -> Scramble {
    let mut ctx = GenerationContext::new();
    let mut moves = Vec::with_capacity(length);

    for _ in 0..length {
        debug_assert!(
            constraints.is_feasible(ctx.last_face()),
            "no face may follow {:?} under {:?}",
            ctx.last_face(),
            constraints
        );

        let face = draw_face(&ctx, constraints, rng);
        let modifier = Modifier::ALL[rng.random_range(0..Modifier::ALL.len())];

        moves.push(Move::new(face, modifier));
        ctx.record(face);
    }

    Scramble::new(moves)
}

fn draw_face<R: Rng + ?Sized>(
    ctx: &GenerationContext,
    constraints: &Constraints,
    rng: &mut R,
) -> Face {
    loop {
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        if ctx.accepts(constraints, face) {
            return face;
        }
        tracing::trace!(rejected = %face, previous = ?ctx.last_face(), "redrawing face");
    }
}

/// Produce `count` scrambles from one source, in order.
///
/// Scramble 0 consumes all of its draws before scramble 1 starts.
pub fn generate_batch_with<R: Rng + ?Sized>(
    count: usize,
    length: usize,
    constraints: &Constraints,
    rng: &mut R,
) -> Vec<Scramble> {
    (0..count)
        .map(|_| generate_one(length, constraints, rng))
        .collect()
}

/// Build the random source for a batch.
///
/// A seed gives a deterministic source; without one the source is seeded
/// from operating-system entropy.
pub fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Produce the scrambles described by `request`.
///
/// Re-running with the same seed, length, count and constraints returns
/// identical scrambles.
///
/// # Example
///
/// ```rust
/// use scrambler::builder::BatchRequestBuilder;
/// use scrambler::generator::generate_batch;
///
/// let request = BatchRequestBuilder::new()
///     .count(5)
///     .length(20)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let first = generate_batch(&request);
/// let second = generate_batch(&request);
///
/// assert_eq!(first.len(), 5);
/// assert_eq!(first, second);
/// ```
pub fn generate_batch(request: &BatchRequest) -> Vec<Scramble> {
    tracing::debug!(
        count = request.count,
        length = request.length,
        avoid_same_face = request.constraints.avoid_same_face,
        avoid_same_axis = request.constraints.avoid_same_axis,
        seeded = request.seed.is_some(),
        "generating scramble batch"
    );

    let mut rng = random_source(request.seed);
    generate_batch_with(
        request.count,
        request.length,
        &request.constraints,
        &mut rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BatchRequestBuilder;
    use std::collections::HashMap;

    fn all_constraints() -> Vec<Constraints> {
        vec![
            Constraints::new(false, false),
            Constraints::new(true, false),
            Constraints::new(false, true),
            Constraints::new(true, true),
        ]
    }

    #[test]
    fn generates_exact_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 2, 8, 20, 200] {
            let scramble = generate_one(length, &Constraints::default(), &mut rng);
            assert_eq!(scramble.len(), length);
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_one(0, &Constraints::default(), &mut rng).is_empty());
    }

    #[test]
    fn honours_every_constraint_combination() {
        let mut rng = StdRng::seed_from_u64(99);
        for constraints in all_constraints() {
            for _ in 0..50 {
                let scramble = generate_one(40, &constraints, &mut rng);
                assert!(scramble.violations(&constraints).is_empty());
            }
        }
    }

    #[test]
    fn unconstrained_eventually_repeats_a_face() {
        let mut rng = StdRng::seed_from_u64(5);
        let scramble = generate_one(500, &Constraints::unconstrained(), &mut rng);
        let repeats = scramble
            .moves()
            .windows(2)
            .filter(|pair| pair[0].face == pair[1].face)
            .count();
        assert!(repeats > 0);
    }

    #[test]
    fn modifiers_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let constraints = Constraints::new(true, true);
        let mut counts: HashMap<Modifier, usize> = HashMap::new();

        for _ in 0..300 {
            for mv in &generate_one(20, &constraints, &mut rng) {
                *counts.entry(mv.modifier).or_default() += 1;
            }
        }

        let total: usize = counts.values().sum();
        assert_eq!(total, 6000);
        for modifier in Modifier::ALL {
            let share = counts.get(&modifier).copied().unwrap_or(0) as f64 / total as f64;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.05,
                "{modifier:?} share {share}"
            );
        }
    }

    #[test]
    fn seeded_batches_repeat() {
        for constraints in all_constraints() {
            let request = BatchRequestBuilder::new()
                .count(5)
                .length(20)
                .avoid_same_face(constraints.avoid_same_face)
                .avoid_same_axis(constraints.avoid_same_axis)
                .seed(42)
                .build()
                .unwrap();

            assert_eq!(generate_batch(&request), generate_batch(&request));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let base = BatchRequestBuilder::new().count(1).length(20);
        let a = generate_batch(&base.clone().seed(1).build().unwrap());
        let b = generate_batch(&base.seed(2).build().unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn batch_draws_from_one_source_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let constraints = Constraints::default();
        let expected: Vec<Scramble> = (0..3)
            .map(|_| generate_one(12, &constraints, &mut rng))
            .collect();

        let request = BatchRequestBuilder::new()
            .count(3)
            .length(12)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(generate_batch(&request), expected);
    }

    #[test]
    fn batch_has_requested_count() {
        for count in [1, 2, 10, 57] {
            let request = BatchRequestBuilder::new()
                .count(count)
                .length(8)
                .build()
                .unwrap();
            assert_eq!(generate_batch(&request).len(), count);
        }
    }

    #[test]
    fn unseeded_batches_differ() {
        let request = BatchRequestBuilder::new()
            .count(1)
            .length(20)
            .unseeded()
            .build()
            .unwrap();
        // 20 moves over 18 tokens: a collision is astronomically unlikely.
        assert_ne!(generate_batch(&request), generate_batch(&request));
    }
}
