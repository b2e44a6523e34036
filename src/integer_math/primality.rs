// src/integer_math/primality.rs
//
// Miller-Rabin style primality checks over any NaturalNumber backend.
//
// is_prime1 is deterministic (witnesses 2 and n - 2) and exact for every
// n < 2047; is_prime2 draws its witnesses at random and is the one used for
// prime generation.

use log::{debug, trace};
use rand::Rng;
use std::cmp::Ordering;
use crate::core::arithmetic::NaturalNumber;
use crate::core::natural_number::RADIX;
use crate::integer_math::modular::{is_even, power_mod, reduce_mod};

/// Uniformly random value in `[0, n]`.
///
/// Draws as many random decimal digits as `n` has and rejects candidates above
/// `n`. A candidate is accepted with probability `(n + 1) / 10^len`, which is
/// never below 1/10, so the expected number of draws is at most ten.
pub fn random_number<N: NaturalNumber, R: Rng>(rng: &mut R, n: &N) -> N {
    let length = n.to_decimal().len();
    loop {
        let mut candidate = n.new_instance();
        for _ in 0..length {
            candidate.multiply_by_radix(rng.random_range(0..RADIX));
        }
        if candidate.compare_to(n) != Ordering::Greater {
            return candidate;
        }
    }
}

/// True iff `w` proves `n` composite (strong probable-prime test to base `w`).
///
/// Writes `n - 1 = 2^s * d` with `d` odd and checks whether `w^d` is 1 or
/// reaches `n - 1` within `s - 1` squarings.
///
/// # Panics
/// Unless `n > 2` and `1 < w < n - 1`.
pub fn is_witness_to_compositeness<N: NaturalNumber>(w: &N, n: &N) -> bool {
    let one = N::from_u64(1);
    let two = N::from_u64(2);
    assert!(n.compare_to(&two) == Ordering::Greater, "Violation of: n > 2");

    let mut n_minus_one = n.clone();
    n_minus_one.decrement();
    assert!(
        w.compare_to(&one) == Ordering::Greater && w.compare_to(&n_minus_one) == Ordering::Less,
        "Violation of: 1 < w < n - 1"
    );

    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while !d.is_zero() && is_even(&d) {
        d.divide(&two);
        s += 1;
    }

    let mut x = w.clone();
    power_mod(&mut x, &d, n);
    if x == one || x == n_minus_one {
        return false;
    }
    for _ in 1..s {
        let factor = x.clone();
        x.multiply(&factor);
        reduce_mod(&mut x, n);
        if x == n_minus_one {
            return false;
        }
        if x == one {
            return true;
        }
    }
    true
}

/// Deterministic check with witnesses 2 and `n - 2`.
///
/// # Panics
/// If `n <= 1`.
pub fn is_prime1<N: NaturalNumber>(n: &N) -> bool {
    let one = N::from_u64(1);
    let three = N::from_u64(3);
    assert!(n.compare_to(&one) == Ordering::Greater, "Violation of: n > 1");

    if n.compare_to(&three) != Ordering::Greater {
        return true;
    }
    if is_even(n) {
        return false;
    }
    let two = N::from_u64(2);
    let mut n_minus_two = n.clone();
    n_minus_two.subtract(&two);
    !is_witness_to_compositeness(&two, n) && !is_witness_to_compositeness(&n_minus_two, n)
}

/// Probabilistic check with `rounds` witnesses drawn uniformly from `[2, n - 2]`.
/// A composite survives all rounds with probability at most `4^-rounds`.
///
/// # Panics
/// If `n <= 1`.
pub fn is_prime2<N: NaturalNumber, R: Rng>(rng: &mut R, n: &N, rounds: usize) -> bool {
    let one = N::from_u64(1);
    let three = N::from_u64(3);
    assert!(n.compare_to(&one) == Ordering::Greater, "Violation of: n > 1");

    if n.compare_to(&three) != Ordering::Greater {
        return true;
    }
    if is_even(n) {
        return false;
    }

    // n is odd and at least 5 here, so n - 4 does not underflow
    let two = N::from_u64(2);
    let mut span = n.clone();
    span.subtract(&N::from_u64(4));

    for round in 0..rounds {
        let mut witness = random_number(rng, &span);
        witness.add(&two);
        if is_witness_to_compositeness(&witness, n) {
            trace!(
                "is_prime2: {} is a witness that {} is composite (round {})",
                witness.to_decimal(),
                n.to_decimal(),
                round
            );
            return false;
        }
    }
    true
}

/// Updates `n` to the smallest value `>= n` that passes [`is_prime2`].
///
/// # Panics
/// If `n <= 1`.
pub fn generate_next_likely_prime<N: NaturalNumber, R: Rng>(rng: &mut R, n: &mut N, rounds: usize) {
    let one = N::from_u64(1);
    let two = N::from_u64(2);
    assert!(n.compare_to(&one) == Ordering::Greater, "Violation of: n > 1");

    if *n == two {
        return;
    }
    if is_even(n) {
        n.increment();
    }
    let mut candidates = 1u32;
    while !is_prime2(rng, n, rounds) {
        n.add(&two);
        candidates += 1;
    }
    debug!("generate_next_likely_prime: {} after {} candidates", n.to_decimal(), candidates);
}
