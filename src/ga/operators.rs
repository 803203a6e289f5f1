//! Genetic operators for timetable chromosomes.
//!
//! All three operators work gene-wise on the positional encoding: a
//! section is only ever replaced as a whole, never field-by-field, and
//! always by the section occupying the *same slot* in the other
//! timetable. Parents and donors must therefore come from the same
//! catalog; mismatched lengths are a fatal invariant violation.
//!
//! # Reference
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Burke, Newall & Weare (1996), "A Memetic Algorithm for University
//!   Exam Timetabling" (repair-style local search)

use rand::Rng;

use super::chromosome::Timetable;
use crate::models::Catalog;

/// Produces one child by uniform crossover of two fixed parents.
///
/// The child starts as a fresh random timetable, then every slot is
/// overwritten by an independent fair coin flip choosing that slot's
/// section from `parent1` or `parent2`. Fitness is recomputed
/// immediately after assembly.
pub fn uniform_crossover<R: Rng>(
    parent1: &Timetable,
    parent2: &Timetable,
    catalog: &Catalog,
    rng: &mut R,
) -> Timetable {
    assert_eq!(
        parent1.sections.len(),
        parent2.sections.len(),
        "crossover parents must come from the same catalog"
    );

    let mut child = Timetable::random(catalog, rng);
    for i in 0..child.sections.len() {
        let source = if rng.random_bool(0.5) { parent1 } else { parent2 };
        child.sections[i] = source.sections[i].clone();
    }
    child.calculate_fitness();
    child
}

/// Mutates a timetable by whole-section substitution from one donor.
///
/// Each slot is independently replaced with probability `mutation_rate`
/// by the donor's section at the same slot. The single donor is reused
/// across all mutated slots. Fitness is *not* recomputed here; the
/// engine re-evaluates the whole population at the end of a generation.
pub fn donor_mutation<R: Rng>(
    timetable: &mut Timetable,
    donor: &Timetable,
    mutation_rate: f64,
    rng: &mut R,
) {
    assert_eq!(
        timetable.sections.len(),
        donor.sections.len(),
        "mutation donor must come from the same catalog"
    );

    for i in 0..timetable.sections.len() {
        if rng.random_bool(mutation_rate) {
            timetable.sections[i] = donor.sections[i].clone();
        }
    }
}

/// Greedy single-pass repair of conflicted genes.
///
/// Works on a full copy (`trial`) of the subject, scanning the subject's
/// conflict flags as of its last evaluation in slot order. Every flagged
/// slot is rewritten in `trial` with the donor's section, the *entire*
/// trial is then re-evaluated, and the rewrite is committed back into the
/// subject only if that slot's own flag cleared. Trial edits persist for
/// later slots whether or not they were committed, so each decision sees
/// the cumulative effect of the pass so far.
///
/// The pass is sequential and order-dependent; reordering or
/// parallelizing it changes the output.
pub fn adaptive_repair(subject: &mut Timetable, donor: &Timetable) {
    assert_eq!(
        subject.sections.len(),
        donor.sections.len(),
        "repair donor must come from the same catalog"
    );

    let mut trial = subject.clone();
    for i in 0..subject.sections.len() {
        if subject.sections[i].conflict {
            trial.sections[i] = donor.sections[i].clone();
            trial.calculate_fitness();
            if !trial.sections[i].conflict {
                subject.sections[i] = donor.sections[i].clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::ClassSection;
    use crate::models::{Course, Lecturer, Room, Shift};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_catalog() -> Catalog {
        let lecturers = vec![
            Lecturer::new("L1", "Dr. Tran"),
            Lecturer::new("L2", "Dr. Pham"),
        ];
        let rooms = vec![
            Room::new(1, "A201"),
            Room::new(2, "B105"),
            Room::new(3, "B106"),
        ];
        let shifts = vec![
            Shift::new(1, "07:00-09:00"),
            Shift::new(2, "09:30-11:30"),
            Shift::new(3, "13:00-15:00"),
            Shift::new(4, "15:30-17:30"),
        ];
        let courses = vec![
            Course::new("C1", "Algorithms", vec![0, 1], 3, false),
            Course::new("C2", "OS Lab", vec![1], 2, true),
        ];
        Catalog::new(lecturers, rooms, shifts, courses).unwrap()
    }

    /// One lecture room and one shift: conflicts depend on days alone.
    fn tight_catalog(num_sections: usize) -> Catalog {
        Catalog::new(
            vec![Lecturer::new("L1", "Dr. Tran")],
            vec![Room::new(1, "B105")],
            vec![Shift::new(1, "07:00-09:00")],
            vec![Course::new("C1", "Algorithms", vec![0], num_sections, false)],
        )
        .unwrap()
    }

    fn assignment(section: &ClassSection) -> (usize, usize, usize, usize, usize) {
        (
            section.course,
            section.lecturer,
            section.room,
            section.day,
            section.shift,
        )
    }

    fn days_timetable(catalog: &Catalog, days: &[usize]) -> Timetable {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut tt = Timetable::random(catalog, &mut rng);
        for (section, &day) in tt.sections.iter_mut().zip(days) {
            section.day = day;
        }
        tt
    }

    #[test]
    fn test_crossover_sections_come_from_parents() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Timetable::random(&catalog, &mut rng);
        let p2 = Timetable::random(&catalog, &mut rng);

        for _ in 0..20 {
            let child = uniform_crossover(&p1, &p2, &catalog, &mut rng);
            assert_eq!(child.sections.len(), p1.sections.len());
            for (i, section) in child.sections.iter().enumerate() {
                let tuple = assignment(section);
                assert!(
                    tuple == assignment(&p1.sections[i]) || tuple == assignment(&p2.sections[i]),
                    "slot {i} holds a section from neither parent"
                );
            }
        }
    }

    #[test]
    fn test_crossover_evaluates_child() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Timetable::random(&catalog, &mut rng);
        let p2 = Timetable::random(&catalog, &mut rng);

        let child = uniform_crossover(&p1, &p2, &catalog, &mut rng);
        assert!(child.fitness > 0.0 && child.fitness <= 1.0);
    }

    #[test]
    fn test_crossover_draws_from_both_parents() {
        // Parents pinned to disjoint day sets so provenance is visible.
        let catalog = tight_catalog(8);
        let p1 = days_timetable(&catalog, &[0; 8]);
        let p2 = days_timetable(&catalog, &[1; 8]);

        let mut rng = SmallRng::seed_from_u64(42);
        let mut from_p1 = 0;
        let mut from_p2 = 0;
        for _ in 0..50 {
            let child = uniform_crossover(&p1, &p2, &catalog, &mut rng);
            for section in &child.sections {
                match section.day {
                    0 => from_p1 += 1,
                    1 => from_p2 += 1,
                    _ => panic!("section from neither parent"),
                }
            }
        }
        // 400 fair coin flips: both sides must show up in force.
        assert!(from_p1 > 100);
        assert!(from_p2 > 100);
    }

    #[test]
    #[should_panic(expected = "crossover parents")]
    fn test_crossover_rejects_mismatched_parents() {
        let catalog = sample_catalog();
        let small = tight_catalog(2);
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Timetable::random(&catalog, &mut rng);
        let p2 = Timetable::random(&small, &mut rng);
        uniform_crossover(&p1, &p2, &catalog, &mut rng);
    }

    #[test]
    fn test_mutation_substitutes_whole_sections() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Timetable::random(&catalog, &mut rng);
        let donor = Timetable::random(&catalog, &mut rng);

        let mut mutated = original.clone();
        donor_mutation(&mut mutated, &donor, 0.5, &mut rng);

        for i in 0..mutated.sections.len() {
            let tuple = assignment(&mutated.sections[i]);
            assert!(
                tuple == assignment(&original.sections[i])
                    || tuple == assignment(&donor.sections[i]),
                "slot {i} is neither the original nor the donor section"
            );
        }
    }

    #[test]
    fn test_mutation_rate_zero_and_one() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Timetable::random(&catalog, &mut rng);
        let donor = Timetable::random(&catalog, &mut rng);

        let mut untouched = original.clone();
        donor_mutation(&mut untouched, &donor, 0.0, &mut rng);
        for (a, b) in untouched.sections.iter().zip(&original.sections) {
            assert_eq!(assignment(a), assignment(b));
        }

        let mut replaced = original.clone();
        donor_mutation(&mut replaced, &donor, 1.0, &mut rng);
        for (a, b) in replaced.sections.iter().zip(&donor.sections) {
            assert_eq!(assignment(a), assignment(b));
        }
    }

    #[test]
    fn test_mutation_empirical_rate() {
        // A roomy catalog keeps donor sections distinguishable from the
        // originals at almost every slot, so counting changed slots
        // estimates the substitution rate.
        let catalog = Catalog::new(
            vec![Lecturer::new("L1", "Dr. Tran")],
            vec![Room::new(1, "B105"), Room::new(2, "B106")],
            vec![
                Shift::new(1, "07:00-09:00"),
                Shift::new(2, "09:30-11:30"),
                Shift::new(3, "13:00-15:00"),
                Shift::new(4, "15:30-17:30"),
            ],
            vec![Course::new("C1", "Algorithms", vec![0], 30, false)],
        )
        .unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let mut changed = 0usize;
        let mut total = 0usize;
        for _ in 0..200 {
            let original = Timetable::random(&catalog, &mut rng);
            let donor = Timetable::random(&catalog, &mut rng);
            let mut mutated = original.clone();
            donor_mutation(&mut mutated, &donor, 0.1, &mut rng);
            for i in 0..mutated.sections.len() {
                total += 1;
                if assignment(&mutated.sections[i]) != assignment(&original.sections[i]) {
                    changed += 1;
                }
            }
        }
        let rate = changed as f64 / total as f64;
        // Expect ~0.1 minus the small chance a donor section equals the
        // original (1/48 here). Loose bounds keep the test stable.
        assert!(rate > 0.06 && rate < 0.14, "empirical rate {rate}");
    }

    #[test]
    fn test_repair_commits_when_conflict_clears() {
        let catalog = tight_catalog(2);
        let mut subject = days_timetable(&catalog, &[0, 0]);
        subject.calculate_fitness();
        assert!(subject.sections[0].conflict);

        // Donor moves slot 0 to a free day.
        let donor = days_timetable(&catalog, &[1, 5]);
        adaptive_repair(&mut subject, &donor);

        assert_eq!(subject.sections[0].day, 1);
        assert_eq!(subject.sections[1].day, 0);
        subject.calculate_fitness();
        assert_eq!(subject.conflict_count, 0);
    }

    #[test]
    fn test_repair_skips_when_conflict_persists() {
        let catalog = tight_catalog(2);
        let mut subject = days_timetable(&catalog, &[0, 0]);
        subject.calculate_fitness();
        let fitness_before = subject.fitness;

        // Donor offers the same colliding day: the trial stays
        // conflicted, so nothing may be committed.
        let donor = days_timetable(&catalog, &[0, 0]);
        adaptive_repair(&mut subject, &donor);

        assert_eq!(subject.sections[0].day, 0);
        assert!(subject.sections[0].conflict);
        assert_eq!(subject.fitness, fitness_before);
    }

    #[test]
    fn test_repair_only_touches_flagged_slots() {
        let catalog = tight_catalog(3);
        // Days [0, 0, 2]: only slot 0 is flagged.
        let mut subject = days_timetable(&catalog, &[0, 0, 2]);
        subject.calculate_fitness();
        assert!(subject.sections[0].conflict);
        assert!(!subject.sections[1].conflict);
        assert!(!subject.sections[2].conflict);

        let donor = days_timetable(&catalog, &[4, 5, 5]);
        adaptive_repair(&mut subject, &donor);

        // Unflagged slots keep their assignments even though the donor
        // disagrees with them.
        assert_eq!(subject.sections[0].day, 4);
        assert_eq!(subject.sections[1].day, 0);
        assert_eq!(subject.sections[2].day, 2);
    }

    #[test]
    fn test_repair_rejects_edit_colliding_with_later_slot() {
        let catalog = tight_catalog(3);
        // All three sections collide on day 0; slots 0 and 1 are flagged.
        let mut subject = days_timetable(&catalog, &[0, 0, 0]);
        subject.calculate_fitness();
        assert!(subject.sections[0].conflict);
        assert!(subject.sections[1].conflict);
        assert!(!subject.sections[2].conflict);

        // Slot 0 moves to a free day. Slot 1's donor day still collides
        // with slot 2, so its trial flag stays set and it stays put.
        let donor = days_timetable(&catalog, &[1, 0, 3]);
        adaptive_repair(&mut subject, &donor);

        assert_eq!(subject.sections[0].day, 1);
        assert_eq!(subject.sections[1].day, 0);
        assert_eq!(subject.sections[2].day, 0);
    }

    #[test]
    fn test_repair_commit_checks_rewritten_index_only() {
        let catalog = tight_catalog(3);
        let mut subject = days_timetable(&catalog, &[0, 0, 0]);
        subject.calculate_fitness();

        // Both flagged slots get donor day 1. The second edit collides
        // with the first *inside the trial*, but that collision flags the
        // earlier index, so slot 1's own flag clears and it commits.
        let donor = days_timetable(&catalog, &[1, 1, 3]);
        adaptive_repair(&mut subject, &donor);

        assert_eq!(subject.sections[0].day, 1);
        assert_eq!(subject.sections[1].day, 1);
        assert_eq!(subject.sections[2].day, 0);
    }

    #[test]
    fn test_repair_can_fully_resolve() {
        let catalog = tight_catalog(3);
        let mut subject = days_timetable(&catalog, &[0, 0, 0]);
        subject.calculate_fitness();

        let donor = days_timetable(&catalog, &[1, 2, 5]);
        adaptive_repair(&mut subject, &donor);

        // Slots 0 and 1 were flagged and both donor days are free:
        // [1, 2, 0] has no collisions left.
        assert_eq!(subject.sections[0].day, 1);
        assert_eq!(subject.sections[1].day, 2);
        assert_eq!(subject.sections[2].day, 0);
        subject.calculate_fitness();
        assert_eq!(subject.conflict_count, 0);
    }
}
