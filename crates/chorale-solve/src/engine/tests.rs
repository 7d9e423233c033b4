//! Tests for the engine over harmony models.

use std::collections::BTreeSet;
use std::time::Duration;

use chorale_model::{
    Constraint, HarmonyConfig, HarmonyProblem, Limits, Mode, Model, Search, SearchOutcome, Step,
    Structure, Voice, Voicing,
};

use super::*;

fn drain(engine: &mut Engine) -> Vec<Vec<i32>> {
    let mut out = Vec::new();
    loop {
        match engine.advance() {
            Step::Solution(values) => out.push(values),
            Step::Done(_) => return out,
        }
    }
}

/// A bare four-voice model without structure flags, branched per voice.
fn voicing_model(events: usize, low: i32, high: i32) -> (Model, Voicing) {
    let mut model = Model::new();
    let voicing = Voicing::build(&mut model, events, low, high).unwrap();
    for voice in Voice::ALL {
        model.add_branch_group(voicing.voice(voice).to_vec());
    }
    (model, voicing)
}

fn chord(voicing: &Voicing, values: &[i32], event: usize) -> [i32; 4] {
    [
        values[voicing.voice(Voice::Soprano)[event].index()],
        values[voicing.voice(Voice::Alto)[event].index()],
        values[voicing.voice(Voice::Tenor)[event].index()],
        values[voicing.voice(Voice::Bass)[event].index()],
    ]
}

#[test]
fn enumerates_degenerate_domain_exactly() {
    // Reference set by direct enumeration: non-increasing 4-tuples over {1, 2}.
    let mut reference = Vec::new();
    for s in 1..=2 {
        for a in 1..=2 {
            for t in 1..=2 {
                for b in 1..=2 {
                    if s >= a && a >= t && t >= b {
                        reference.push([s, a, t, b]);
                    }
                }
            }
        }
    }
    assert_eq!(reference.len(), 5);

    let (model, voicing) = voicing_model(4, 1, 2);
    let mut engine = Engine::new(&model, Limits::none());
    let solutions = drain(&mut engine);
    assert_eq!(engine.outcome(), Some(SearchOutcome::Exhausted));

    // Events are independent, so the solution count is 5^4.
    assert_eq!(solutions.len(), 625);
    let mut seen = BTreeSet::new();
    for values in &solutions {
        let tuples: Vec<[i32; 4]> = (0..4).map(|i| chord(&voicing, values, i)).collect();
        for tuple in &tuples {
            assert!(reference.contains(tuple), "unexpected chord {:?}", tuple);
        }
        assert!(seen.insert(tuples), "duplicate assignment");
    }
}

#[test]
fn min_value_first_enumeration_order() {
    let (model, voicing) = voicing_model(1, 1, 2);
    let mut engine = Engine::new(&model, Limits::none());
    let order: Vec<[i32; 4]> = drain(&mut engine)
        .iter()
        .map(|values| chord(&voicing, values, 0))
        .collect();
    assert_eq!(
        order,
        vec![
            [1, 1, 1, 1],
            [2, 1, 1, 1],
            [2, 2, 1, 1],
            [2, 2, 2, 1],
            [2, 2, 2, 2],
        ]
    );
}

#[test]
fn assignments_satisfy_ordering_and_structure() {
    let problem = HarmonyProblem::new(HarmonyConfig {
        events: 2,
        low: 55,
        high: 70,
        tonic: 0,
        mode: Mode::Major,
        scale_only: false,
    })
    .unwrap();
    let engine = Engine::new(
        problem.model(),
        Limits {
            max_solutions: Some(500),
            ..Limits::none()
        },
    );

    let mut count = 0;
    for assignment in problem.solutions(engine) {
        count += 1;
        for i in 0..assignment.len() {
            let [s, a, t, b] = assignment.chord(i);
            assert!(s >= a && a >= t && t >= b);

            let interval = assignment.interval(i);
            assert!(interval >= 0);
            let flags = [
                assignment.close[i],
                assignment.open[i],
                assignment.neutral[i],
            ];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
            assert_eq!(assignment.close[i], interval < 12);
            assert_eq!(assignment.open[i], interval > 12);
            assert_eq!(assignment.neutral[i], interval == 12);
        }
    }
    assert_eq!(count, 500);
}

#[test]
fn deadline_stop_is_distinguishable_from_exhaustion() {
    let problem = HarmonyProblem::new(HarmonyConfig::default()).unwrap();
    let mut engine = Engine::new(
        problem.model(),
        Limits {
            deadline: Some(Duration::ZERO),
            ..Limits::none()
        },
    );
    assert_eq!(
        engine.advance(),
        Step::Done(SearchOutcome::DeadlineExpired)
    );
    assert_eq!(engine.outcome(), Some(SearchOutcome::DeadlineExpired));
    // The outcome is sticky.
    assert_eq!(
        engine.advance(),
        Step::Done(SearchOutcome::DeadlineExpired)
    );
}

#[test]
fn solution_limit_bounds_enumeration() {
    let (model, _) = voicing_model(1, 1, 2);
    let mut engine = Engine::new(
        &model,
        Limits {
            max_solutions: Some(3),
            ..Limits::none()
        },
    );
    let solutions = drain(&mut engine);
    assert_eq!(solutions.len(), 3);
    assert_eq!(engine.outcome(), Some(SearchOutcome::SolutionLimit));
}

#[test]
fn step_limit_bounds_enumeration() {
    let (model, _) = voicing_model(1, 1, 2);
    let mut engine = Engine::new(
        &model,
        Limits {
            max_steps: Some(0),
            ..Limits::none()
        },
    );
    assert_eq!(engine.advance(), Step::Done(SearchOutcome::StepLimit));
}

#[test]
fn unsatisfiable_instance_is_exhausted_not_an_error() {
    let mut model = Model::new();
    let voicing = Voicing::build(&mut model, 1, 60, 64).unwrap();
    for voice in Voice::ALL {
        model.add_branch_group(voicing.voice(voice).to_vec());
    }
    // Bass above soprano contradicts the ordering chain.
    model.post(Constraint::Fix(voicing.voice(Voice::Soprano)[0], 60));
    model.post(Constraint::Fix(voicing.voice(Voice::Bass)[0], 64));

    let mut engine = Engine::new(&model, Limits::none());
    assert_eq!(drain(&mut engine), Vec::<Vec<i32>>::new());
    assert_eq!(engine.outcome(), Some(SearchOutcome::Exhausted));
    assert!(engine.statistics().failures > 0);
}

#[test]
fn scale_only_solutions_stay_on_scale_degrees() {
    let problem = HarmonyProblem::new(HarmonyConfig {
        events: 1,
        low: 60,
        high: 72,
        tonic: 0,
        mode: Mode::Major,
        scale_only: true,
    })
    .unwrap();
    let scale = problem.tonality().scale_pitch_classes();
    let engine = Engine::new(
        problem.model(),
        Limits {
            max_solutions: Some(100),
            ..Limits::none()
        },
    );
    let mut count = 0;
    for assignment in problem.solutions(engine) {
        count += 1;
        let [s, a, t, b] = assignment.chord(0);
        for pitch in [s, a, t, b] {
            let pc = pitch.rem_euclid(12) as u8;
            assert!(scale.contains(&pc), "pitch {} off scale", pitch);
        }
    }
    assert_eq!(count, 100);
}

/// One event over [48, 72] with alto, tenor, and bass pinned to 48, so the
/// soprano alone decides the interval.
fn pinned_structure_model() -> (Model, Voicing, Structure) {
    let mut model = Model::new();
    let voicing = Voicing::build(&mut model, 1, 48, 72).unwrap();
    let structure = Structure::build(&mut model, &voicing);
    for voice in [Voice::Alto, Voice::Tenor, Voice::Bass] {
        model.post(Constraint::Fix(voicing.voice(voice)[0], 48));
    }
    for voice in Voice::ALL {
        model.add_branch_group(voicing.voice(voice).to_vec());
    }
    (model, voicing, structure)
}

#[test]
fn forcing_close_flags_prunes_intervals() {
    let (mut model, voicing, structure) = pinned_structure_model();
    Structure::force_all(&mut model, structure.close(), true);
    let mut engine = Engine::new(&model, Limits::none());
    let sopranos: Vec<i32> = drain(&mut engine)
        .iter()
        .map(|values| values[voicing.voice(Voice::Soprano)[0].index()])
        .collect();
    // Intervals below an octave: sopranos 48..=59.
    assert_eq!(sopranos, (48..=59).collect::<Vec<i32>>());
}

#[test]
fn forcing_neutral_flags_pins_the_octave() {
    let (mut model, voicing, structure) = pinned_structure_model();
    Structure::force_all(&mut model, structure.neutral(), true);
    let mut engine = Engine::new(&model, Limits::none());
    let sopranos: Vec<i32> = drain(&mut engine)
        .iter()
        .map(|values| values[voicing.voice(Voice::Soprano)[0].index()])
        .collect();
    assert_eq!(sopranos, vec![60]);
}

#[test]
fn forcing_open_flags_prunes_intervals() {
    let (mut model, voicing, structure) = pinned_structure_model();
    Structure::force_all(&mut model, structure.open(), true);
    let mut engine = Engine::new(&model, Limits::none());
    let sopranos: Vec<i32> = drain(&mut engine)
        .iter()
        .map(|values| values[voicing.voice(Voice::Soprano)[0].index()])
        .collect();
    assert_eq!(sopranos, (61..=72).collect::<Vec<i32>>());
}

#[test]
fn enumeration_is_deterministic() {
    let config = HarmonyConfig {
        events: 2,
        low: 58,
        high: 66,
        tonic: 7,
        mode: Mode::HarmonicMinor,
        scale_only: true,
    };
    let limits = Limits {
        max_solutions: Some(50),
        ..Limits::none()
    };

    let first_problem = HarmonyProblem::new(config.clone()).unwrap();
    let first: Vec<_> = first_problem
        .solutions(Engine::new(first_problem.model(), limits))
        .collect();

    let second_problem = HarmonyProblem::new(config).unwrap();
    let second: Vec<_> = second_problem
        .solutions(Engine::new(second_problem.model(), limits))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn statistics_track_progress() {
    let (model, _) = voicing_model(1, 1, 2);
    let mut engine = Engine::new(&model, Limits::none());
    let solutions = drain(&mut engine);
    let stats = engine.statistics();
    assert_eq!(stats.solutions, solutions.len() as u64);
    assert!(stats.nodes >= stats.solutions);
}

#[test]
fn solutions_iterator_reports_outcome() {
    let problem = HarmonyProblem::new(HarmonyConfig {
        events: 1,
        low: 60,
        high: 61,
        tonic: 0,
        mode: Mode::Major,
        scale_only: false,
    })
    .unwrap();
    let mut solutions = problem.solutions(Engine::new(problem.model(), Limits::none()));
    assert_eq!(solutions.outcome(), None);
    let found: Vec<_> = solutions.by_ref().collect();
    assert_eq!(found.len(), 5);
    assert_eq!(solutions.outcome(), Some(SearchOutcome::Exhausted));
}
