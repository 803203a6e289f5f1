//! Weekly class timetabling via genetic search.
//!
//! Searches the space of (course, lecturer, room, day, shift)
//! assignments with an elitist genetic algorithm: uniform crossover from
//! the two best elites, whole-gene donor mutation, and a periodic greedy
//! repair pass that resamples only the genes flagged as conflicted by
//! the last fitness evaluation.
//!
//! # Modules
//!
//! - **`models`**: Reference data — `Lecturer`, `Room`, `Shift`,
//!   `Course`, and the validated, index-interned `Catalog`
//! - **`ga`**: The search core — `ClassSection` gene, `Timetable`
//!   chromosome, genetic operators, and the `EvolutionEngine`
//! - **`io`**: JSON catalog loading and grouped result persistence
//! - **`validation`**: Fail-fast integrity checks on the reference data
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_timetable::ga::{EvolutionConfig, EvolutionEngine, Population};
//! use u_timetable::models::{Catalog, Course, Lecturer, Room, Shift};
//!
//! let catalog = Catalog::new(
//!     vec![Lecturer::new("L1", "Dr. Tran")],
//!     vec![Room::new(1, "B105"), Room::new(2, "B106")],
//!     vec![Shift::new(1, "07:00-09:00"), Shift::new(2, "09:30-11:30")],
//!     vec![Course::new("C1", "Algorithms", vec![0], 2, false)],
//! )
//! .unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut engine = EvolutionEngine::new(EvolutionConfig::default()).unwrap();
//! let population = Population::random(10, &catalog, &mut rng);
//! let population = engine.run(population, 50, &catalog, &mut rng);
//!
//! let best = population.best().unwrap();
//! assert!(best.fitness > 0.0 && best.fitness <= 1.0);
//! ```
//!
//! # Reference
//!
//! - Colorni, Dorigo & Maniezzo (1991), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod ga;
pub mod io;
pub mod models;
pub mod validation;
