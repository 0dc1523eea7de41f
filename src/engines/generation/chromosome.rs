/// Chromosome representation for the path search
///
/// A chromosome is a fixed-length sequence of move codes; each gene is
/// one attempted step through the maze. The length (`max_steps`) is set
/// once per run and never changes: crossover swaps segments between
/// equal-length parents and mutation rewrites genes in place, so no
/// operator can resize an individual.
///
/// # Why a flat move sequence?
///
/// Genetic operators work best on simple, linear structures:
/// - **Crossover**: swapping tails is array slicing
/// - **Mutation**: changing one gene is a single write
/// - **No invalid states**: any gene sequence is a simulatable path;
///   illegal moves are handled by the simulator as collisions, not
///   rejected up front
pub type Chromosome = Vec<crate::types::Move>;
