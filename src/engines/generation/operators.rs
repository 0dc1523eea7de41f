use super::chromosome::Chromosome;
use crate::types::Move;
use rand::seq::index;
use rand::Rng;

/// Generate a random chromosome of `length` moves.
pub fn random_chromosome<R: Rng>(length: usize, rng: &mut R) -> Chromosome {
    (0..length)
        .map(|_| Move::ALL[rng.gen_range(0..4)])
        .collect()
}

/// Tournament selection: draw `tournament_size` distinct indices and
/// return the one with the highest fitness. An oversized tournament is
/// clamped to the population rather than rejected.
pub fn tournament_selection<R: Rng>(
    fitnesses: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    let k = tournament_size.min(fitnesses.len());
    let contenders = index::sample(rng, fitnesses.len(), k);

    let mut best_idx = contenders.index(0);
    for i in 1..k {
        let idx = contenders.index(i);
        if fitnesses[idx] > fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Single-point crossover at a uniform cut in `[1, len-1]`. Parents must
/// have equal length; a mismatch is a programming error, not a runtime
/// condition.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    assert_eq!(parent1.len(), parent2.len(), "crossover parents differ in length");

    let len = parent1.len();
    if len < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.gen_range(1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[cut..].copy_from_slice(&parent2[cut..]);
    child2[cut..].copy_from_slice(&parent1[cut..]);

    (child1, child2)
}

/// Mutation: each gene is redrawn with probability `mutation_rate`. A
/// mutated gene is guaranteed to differ from the original; if the redraw
/// matches, a random offset in {1,2,3} mod 4 is applied instead.
pub fn mutate<R: Rng>(genes: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            let old = *gene;
            *gene = Move::ALL[rng.gen_range(0..4)];
            if *gene == old {
                let offset = rng.gen_range(1..4u8);
                *gene = Move::ALL[((old.code() + offset) % 4) as usize];
            }
        }
    }
}
