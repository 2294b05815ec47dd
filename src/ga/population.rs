//! Steady-state population engine.
//!
//! [`Population`] owns the individuals, the RNG and the evaluation counter.
//! Each call to [`step`](Population::step) runs one generation:
//! selection → crossover → mutation → evaluation → replacement.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::GaConfig;
use super::runner::GenerationStats;
use super::selection::tournament_pair;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::GaError;
use crate::random::rng_from_seed;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best individual reached [`GaProblem::optimal_fitness`].
    Solved,
    /// The evaluation budget ran out first. Not an error.
    BudgetExhausted,
}

/// Lifecycle of a [`Population`].
///
/// Initialization happens entirely inside [`Population::new`], so a
/// constructed population is already past that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// [`Population::step`] will run another generation.
    Evolving,
    /// No further generations will run.
    Terminated(Termination),
}

/// A fixed-size population kept sorted by descending fitness.
///
/// Ties keep their previous relative order: incumbents stay ahead of
/// offspring with equal fitness.
pub struct Population<'a, P: GaProblem> {
    problem: &'a P,
    config: GaConfig,
    rng: StdRng,
    seed: u64,
    members: Vec<P::Individual>,
    evaluations: usize,
    generation: usize,
}

impl<'a, P: GaProblem> Population<'a, P> {
    /// Creates and evaluates a random population.
    ///
    /// Costs exactly `config.population_size` evaluations.
    pub fn new(problem: &'a P, config: GaConfig) -> Result<Self, GaError> {
        config.validate()?;

        let (rng, seed) = rng_from_seed(config.seed);
        let mut population = Self {
            problem,
            members: Vec::with_capacity(config.population_size),
            config,
            rng,
            seed,
            evaluations: 0,
            generation: 0,
        };

        for _ in 0..population.config.population_size {
            let mut ind = problem.create_individual(&mut population.rng);
            population.evaluate(&mut ind);
            population.members.push(ind);
        }
        population.sort_members();

        tracing::debug!(
            seed,
            size = population.members.len(),
            best = ?population.best().fitness(),
            "initialized population"
        );

        Ok(population)
    }

    /// Current lifecycle state.
    ///
    /// A solved population reports `Solved` even if the budget is also spent.
    pub fn status(&self) -> Status {
        let best = self.best().fitness();
        if self.problem.optimal_fitness().is_some_and(|opt| best >= opt) {
            Status::Terminated(Termination::Solved)
        } else if self.evaluations >= self.config.max_evaluations {
            Status::Terminated(Termination::BudgetExhausted)
        } else {
            Status::Evolving
        }
    }

    /// Runs one generation.
    ///
    /// Returns `None` without touching the population once it has
    /// terminated.
    pub fn step(&mut self) -> Option<GenerationStats<<P::Individual as Individual>::Fitness>> {
        if self.status() != Status::Evolving {
            return None;
        }

        let previous_best = self.best().fitness();

        let (i1, i2) = tournament_pair(&self.members, self.config.tournament_size, &mut self.rng);
        let (mut child1, mut child2) =
            self.problem.crossover(&self.members[i1], &self.members[i2], &mut self.rng);

        for child in [&mut child1, &mut child2] {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                self.problem.mutate(child, &mut self.rng);
            }
            self.evaluate(child);
        }

        // Elitist replacement: the two worst make way for the offspring.
        let n = self.members.len();
        self.members[n - 2] = child1;
        self.members[n - 1] = child2;
        self.sort_members();

        self.generation += 1;
        let stats = GenerationStats {
            generation: self.generation,
            evaluations: self.evaluations,
            best_fitness: self.best().fitness(),
            average_fitness: self.average_fitness(),
        };

        if stats.best_fitness > previous_best {
            tracing::debug!(
                generation = stats.generation,
                evaluations = stats.evaluations,
                best = ?stats.best_fitness,
                "new best"
            );
        }

        self.problem.on_generation(&stats);
        Some(stats)
    }

    /// Members, best first.
    pub fn members(&self) -> &[P::Individual] {
        &self.members
    }

    /// The fittest member.
    pub fn best(&self) -> &P::Individual {
        &self.members[0]
    }

    /// Mean fitness over the whole population.
    pub fn average_fitness(&self) -> f64 {
        let total: f64 = self.members.iter().map(|m| m.fitness().to_f64()).sum();
        total / self.members.len() as f64
    }

    /// Fitness evaluations consumed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Generations completed so far (initialization is generation 0).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The seed the RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The validated configuration this population runs with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Consumes the population, returning its best member.
    pub fn into_best(mut self) -> P::Individual {
        self.members.swap_remove(0)
    }

    fn evaluate(&mut self, ind: &mut P::Individual) {
        let fitness = self.problem.evaluate(ind);
        ind.set_fitness(fitness);
        self.evaluations += 1;
    }

    fn sort_members(&mut self) {
        // Stable: equal-fitness members keep their relative order.
        self.members.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::NQueens;
    use std::cell::Cell;

    fn config(seed: u64) -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_max_evaluations(400)
            .with_seed(seed)
    }

    fn assert_sorted<P: GaProblem>(pop: &Population<'_, P>) {
        for pair in pop.members().windows(2) {
            assert!(
                pair[0].fitness() >= pair[1].fitness(),
                "population not sorted descending"
            );
        }
    }

    #[test]
    fn test_init_costs_population_size() {
        let problem = NQueens::new(8).unwrap();
        let pop = Population::new(&problem, config(1)).unwrap();
        assert_eq!(pop.config().population_size, 20);
        assert_eq!(pop.evaluations(), 20);
        assert_eq!(pop.members().len(), 20);
        assert_eq!(pop.generation(), 0);
        assert_sorted(&pop);
    }

    #[test]
    fn test_each_step_costs_two_and_stays_sorted() {
        // N=3 has no solution, so the run cannot stop early.
        let problem = NQueens::new(3).unwrap();
        let mut pop = Population::new(&problem, config(5)).unwrap();

        let mut expected = 20;
        while let Some(stats) = pop.step() {
            expected += 2;
            assert_eq!(pop.evaluations(), expected);
            assert_eq!(stats.evaluations, expected);
            assert_eq!(pop.members().len(), 20);
            assert_sorted(&pop);
        }
        assert_eq!(pop.evaluations(), 400);
        assert_eq!(pop.generation(), 190);
        assert_eq!(
            pop.status(),
            Status::Terminated(Termination::BudgetExhausted)
        );
    }

    #[test]
    fn test_best_never_regresses() {
        let problem = NQueens::new(10).unwrap();
        let mut pop = Population::new(&problem, config(9)).unwrap();
        let mut last = pop.best().fitness();
        while let Some(stats) = pop.step() {
            assert!(stats.best_fitness >= last);
            last = stats.best_fitness;
        }
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let problem = NQueens::new(3).unwrap();
        let cfg = config(2).with_max_evaluations(20);
        let mut pop = Population::new(&problem, cfg).unwrap();
        assert_eq!(
            pop.status(),
            Status::Terminated(Termination::BudgetExhausted)
        );
        assert!(pop.step().is_none());
        assert_eq!(pop.evaluations(), 20);
        assert_eq!(pop.generation(), 0);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let problem = NQueens::new(8).unwrap();
        let mut a = Population::new(&problem, config(77)).unwrap();
        let mut b = Population::new(&problem, config(77)).unwrap();
        loop {
            match (a.step(), b.step()) {
                (Some(x), Some(y)) => assert_eq!(x, y),
                (None, None) => break,
                _ => panic!("runs diverged"),
            }
        }
        assert_eq!(a.best().placements(), b.best().placements());
    }

    #[test]
    fn test_average_within_bounds() {
        let problem = NQueens::new(8).unwrap();
        let pop = Population::new(&problem, config(3)).unwrap();
        let avg = pop.average_fitness();
        assert!(avg >= 0.0 && avg <= 28.0);
        assert!(avg <= pop.best().fitness() as f64);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let problem = NQueens::new(8).unwrap();
        let cfg = GaConfig::default().with_population_size(4);
        assert!(matches!(
            Population::new(&problem, cfg),
            Err(GaError::PopulationTooSmall { .. })
        ));
    }

    // ---- Replacement: scripted fitness values ----

    #[derive(Clone, Debug)]
    struct Tagged {
        id: usize,
        score: u32,
        fitness: u32,
    }

    impl Individual for Tagged {
        type Fitness = u32;
        fn fitness(&self) -> u32 {
            self.fitness
        }
        fn set_fitness(&mut self, f: u32) {
            self.fitness = f;
        }
    }

    /// Incumbents get scores from `initial`; every offspring scores
    /// `offspring_score` and is tagged with an id from 100 upwards.
    struct Scripted {
        initial: Vec<u32>,
        offspring_score: u32,
        next_id: Cell<usize>,
        next_child: Cell<usize>,
    }

    impl GaProblem for Scripted {
        type Individual = Tagged;

        fn create_individual<R: Rng + ?Sized>(&self, _rng: &mut R) -> Tagged {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            Tagged {
                id,
                score: self.initial[id],
                fitness: 0,
            }
        }

        fn evaluate(&self, ind: &Tagged) -> u32 {
            ind.score
        }

        fn crossover<R: Rng + ?Sized>(&self, _p1: &Tagged, _p2: &Tagged, _rng: &mut R) -> (Tagged, Tagged) {
            let id = 100 + self.next_child.get();
            self.next_child.set(self.next_child.get() + 2);
            let child = |id| Tagged {
                id,
                score: self.offspring_score,
                fitness: 0,
            };
            (child(id), child(id + 1))
        }

        fn mutate<R: Rng + ?Sized>(&self, _ind: &mut Tagged, _rng: &mut R) {}
    }

    fn scripted(initial: &[u32], offspring_score: u32) -> Scripted {
        Scripted {
            initial: initial.to_vec(),
            offspring_score,
            next_id: Cell::new(0),
            next_child: Cell::new(0),
        }
    }

    fn ids<P: GaProblem<Individual = Tagged>>(pop: &Population<'_, P>) -> Vec<usize> {
        pop.members().iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_offspring_replace_two_worst_behind_equal_incumbents() {
        let problem = scripted(&[5, 4, 3, 3, 1, 0], 3);
        let cfg = GaConfig::default()
            .with_population_size(6)
            .with_max_evaluations(100)
            .with_seed(1);
        let mut pop = Population::new(&problem, cfg).unwrap();
        assert_eq!(ids(&pop), vec![0, 1, 2, 3, 4, 5]);

        pop.step().unwrap();

        // Ids 4 and 5 (scores 1 and 0) are gone; the offspring tie with
        // ids 2 and 3 and must rank after them.
        assert_eq!(ids(&pop), vec![0, 1, 2, 3, 100, 101]);
        assert_sorted(&pop);
    }

    #[test]
    fn test_better_offspring_move_to_front() {
        let problem = scripted(&[5, 4, 3, 3, 1, 0], 9);
        let cfg = GaConfig::default()
            .with_population_size(6)
            .with_max_evaluations(100)
            .with_seed(1);
        let mut pop = Population::new(&problem, cfg).unwrap();

        pop.step().unwrap();
        assert_eq!(ids(&pop), vec![100, 101, 0, 1, 2, 3]);

        // Next round: the worst are now ids 2 and 3; the new offspring tie
        // with the previous ones and queue up behind them.
        pop.step().unwrap();
        assert_eq!(ids(&pop), vec![100, 101, 102, 103, 0, 1]);
    }
}
