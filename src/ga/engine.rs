//! Evolution engine: configuration, population, and the generation loop.
//!
//! One [`EvolutionEngine::evolve`] call replaces the population
//! wholesale: elites are carried unchanged, the remaining slots are
//! filled by uniform crossover of the two best elites, every non-elite
//! is mutated against a fresh random donor, and on every
//! `adaptation_cycle`-th generation the conflicted genes of non-elites
//! go through the greedy repair pass. The resulting population is
//! re-evaluated and sorted best-first; the caller decides when to stop
//! (generation cap or fitness saturation at 1.0).
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning" (elitist generational replacement)

use rand::Rng;

use super::chromosome::Timetable;
use super::operators::{adaptive_repair, donor_mutation, uniform_crossover};
use crate::models::Catalog;

/// Configuration for the evolutionary search.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.elite_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Number of timetables in the population.
    pub population_size: usize,
    /// Per-gene probability of donor substitution during mutation.
    pub mutation_rate: f64,
    /// Number of best timetables carried unchanged each generation.
    ///
    /// Must be at least 2: the first two elites are the fixed crossover
    /// parents for the whole generation.
    pub elite_count: usize,
    /// Repair runs on generations divisible by this cycle length.
    pub adaptation_cycle: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.1,
            elite_count: 2,
            adaptation_cycle: 5,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the adaptation cycle length.
    pub fn with_adaptation_cycle(mut self, cycle: usize) -> Self {
        self.adaptation_cycle = cycle;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.elite_count < 2 {
            return Err("elite_count must be at least 2 (elites are the crossover parents)".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must leave room for offspring".into());
        }
        if self.adaptation_cycle == 0 {
            return Err("adaptation_cycle must be at least 1".into());
        }
        Ok(())
    }
}

/// A fixed-size set of candidate timetables.
#[derive(Debug, Clone)]
pub struct Population {
    /// Candidate timetables; best-first after an [`EvolutionEngine::evolve`] call.
    pub chromosomes: Vec<Timetable>,
}

impl Population {
    /// Creates a population of randomly initialized timetables.
    pub fn random<R: Rng>(size: usize, catalog: &Catalog, rng: &mut R) -> Self {
        let chromosomes = (0..size).map(|_| Timetable::random(catalog, rng)).collect();
        Self { chromosomes }
    }

    /// Best timetable by last-evaluated fitness.
    pub fn best(&self) -> Option<&Timetable> {
        self.chromosomes
            .iter()
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }

    /// Number of timetables.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}

/// Stateful controller for the evolutionary search.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    generation: usize,
}

impl EvolutionEngine {
    /// Creates an engine with a validated configuration.
    pub fn new(config: EvolutionConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            generation: 0,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs one generation and returns the replacement population.
    ///
    /// Phases: crossover (elites carried, children from the two best
    /// elites), mutation of non-elites, periodic adaptive repair of
    /// non-elites, then full re-evaluation and a best-first stable sort.
    pub fn evolve<R: Rng>(
        &mut self,
        population: Population,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Population {
        self.generation += 1;

        let mut next = self.crossover_population(population, catalog, rng);
        self.mutate_population(&mut next, catalog, rng);
        if self.generation % self.config.adaptation_cycle == 0 {
            self.adapt_population(&mut next, catalog, rng);
        }

        for chromosome in &mut next.chromosomes {
            chromosome.calculate_fitness();
        }
        next.chromosomes
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        next
    }

    /// Evolves until `max_generations` or a perfect-fitness timetable.
    pub fn run<R: Rng>(
        &mut self,
        mut population: Population,
        max_generations: usize,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Population {
        for _ in 0..max_generations {
            population = self.evolve(population, catalog, rng);
            if population
                .chromosomes
                .first()
                .is_some_and(|best| best.fitness >= 1.0)
            {
                break;
            }
        }
        population
    }

    /// Carries the elites and fills the rest with crossover children.
    ///
    /// The two best incoming timetables are the parents for *every*
    /// child of this generation.
    fn crossover_population<R: Rng>(
        &self,
        population: Population,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Population {
        let mut chromosomes = population.chromosomes;
        assert!(
            chromosomes.len() >= self.config.elite_count,
            "population smaller than elite_count"
        );
        chromosomes.truncate(self.config.elite_count);

        let mut children = Vec::with_capacity(self.config.population_size - self.config.elite_count);
        for _ in 0..self.config.population_size - self.config.elite_count {
            children.push(uniform_crossover(
                &chromosomes[0],
                &chromosomes[1],
                catalog,
                rng,
            ));
        }
        chromosomes.append(&mut children);
        Population { chromosomes }
    }

    /// Mutates every non-elite against one fresh random donor each.
    fn mutate_population<R: Rng>(
        &self,
        population: &mut Population,
        catalog: &Catalog,
        rng: &mut R,
    ) {
        for chromosome in population.chromosomes.iter_mut().skip(self.config.elite_count) {
            let donor = Timetable::random(catalog, rng);
            donor_mutation(chromosome, &donor, self.config.mutation_rate, rng);
        }
    }

    /// Runs the greedy repair pass on every non-elite.
    fn adapt_population<R: Rng>(
        &self,
        population: &mut Population,
        catalog: &Catalog,
        rng: &mut R,
    ) {
        for chromosome in population.chromosomes.iter_mut().skip(self.config.elite_count) {
            let donor = Timetable::random(catalog, rng);
            adaptive_repair(chromosome, &donor);
        }
    }
}
