//! Randomized checks of the elimination invariants.

use linsys::{assert_approx_eq, Decimal, Equation, LinearSystem, Vector};

const ROUNDS: usize = 200;

fn random_system(rng: &mut fastrand::Rng) -> LinearSystem {
    let rows = rng.usize(2..=4);
    let equations = (0..rows).map(|_| {
        let normal = Vector::from_fn(3, |_| Decimal::from(rng.i32(-3..=3)));
        Equation::new(normal, Decimal::from(rng.i32(-3..=3)))
    });
    LinearSystem::new(equations.collect::<Vec<_>>()).unwrap()
}

#[test]
fn triangular_form_is_idempotent() {
    linsys::init_logger!();

    let mut rng = fastrand::Rng::with_seed(0x7121_a9b1);
    for _ in 0..ROUNDS {
        let mut once = random_system(&mut rng);
        let first = once.compute_triangular_form().unwrap();

        let mut twice = once.clone();
        let second = twice.compute_triangular_form().unwrap();

        assert_eq!(first, second, "{once}");
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a, b, "{once}\n{twice}");
        }
    }
}

#[test]
fn rref_has_unit_pivot_columns() {
    linsys::init_logger!();

    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..ROUNDS {
        let mut system = random_system(&mut rng);
        let reduction = system.compute_rref().unwrap();
        if !reduction.degenerate.is_empty() {
            continue;
        }

        let processed = reduction
            .stopped_at
            .unwrap_or(system.len())
            .min(system.dimension());
        for row in 0..processed {
            let column = row;
            assert_approx_eq!(system[row].coefficient(column), Decimal::ONE, "{system}");
            assert_eq!(system[row].first_nonzero_index(), Ok(column), "{system}");
            for other in (0..system.len()).filter(|&other| other != row) {
                assert_approx_eq!(system[other].coefficient(column), Decimal::ZERO, "{system}")
                    .abs(system.tolerance().epsilon());
            }
        }
    }
}

#[test]
fn unique_solutions_satisfy_every_equation() {
    linsys::init_logger!();

    let mut rng = fastrand::Rng::with_seed(0xd0_5011e);
    let mut unique = 0;
    for _ in 0..ROUNDS {
        let system = random_system(&mut rng);
        let linsys::Solution::Unique(point) = system.clone().solve().unwrap() else {
            continue;
        };
        unique += 1;

        for eq in &system {
            assert_approx_eq!(eq.normal().inner_product(&point), eq.constant(), "{system}");
        }
    }

    assert!(unique > 0);
}
