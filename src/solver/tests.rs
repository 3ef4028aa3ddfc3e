use crate::solver::{
    format_value, Hint, Operator, Solver, SolverConfig, Step, NO_SOLUTION_MESSAGE,
};

fn values(numbers: &[u32]) -> Vec<f64> {
    numbers.iter().map(|&n| f64::from(n)).collect()
}

fn assert_step_consistent(step: &Step) {
    let recomputed = step.operator.apply(step.lhs, step.rhs);
    assert!(recomputed.is_some(), "step {} is not computable", step);
    if let Some(value) = recomputed {
        assert!((value - step.result).abs() < 1e-9, "inconsistent step {}", step);
    }
}

#[test]
fn test_four_sixes_are_solvable() {
    let solver = Solver::default();
    let path = solver.solve(&values(&[6, 6, 6, 6]));
    assert_eq!(
        path,
        Some(vec![
            Step::new(6.0, Operator::Add, 6.0, 12.0),
            Step::new(6.0, Operator::Add, 6.0, 12.0),
            Step::new(12.0, Operator::Add, 12.0, 24.0),
        ])
    );
}

#[test]
fn test_four_ones_have_no_solution() {
    let solver = Solver::default();
    let numbers = values(&[1, 1, 1, 1]);
    assert!(!solver.is_solvable(&numbers));

    let hint = solver.hint(&numbers);
    assert_eq!(hint, Hint::NoSolution);
    assert_eq!(hint.to_string(), NO_SOLUTION_MESSAGE);
}

#[test]
fn test_single_value_base_case() {
    let solver = Solver::default();
    assert_eq!(solver.solve(&[24.0]), Some(Vec::new()));
    assert_eq!(solver.solve(&[23.9999995]), Some(Vec::new()));
    assert_eq!(solver.solve(&[23.99]), None);
    assert_eq!(solver.hint(&[24.0]), Hint::Solved);
    assert!(solver.hint(&[23.99]).is_no_solution());
}

#[test]
fn test_empty_input_has_no_solution() {
    let solver = Solver::default();
    assert!(!solver.is_solvable(&[]));
}

#[test]
fn test_hint_is_first_step_only() {
    let solver = Solver::default();
    let hint = solver.hint(&values(&[1, 2, 3, 4]));
    assert_eq!(hint, Hint::Step(Step::new(1.0, Operator::Add, 2.0, 3.0)));
    assert_eq!(hint.to_string(), "Hint: 1 + 2 = 3");
}

#[test]
fn test_hint_on_reduced_state() {
    let solver = Solver::default();
    assert_eq!(solver.hint(&[3.0, 8.0]).to_string(), "Hint: 3 × 8 = 24");
    assert_eq!(solver.hint(&[2.0, 3.0, 4.0]).to_string(), "Hint: 2 × 3 = 6");
}

#[test]
fn test_hint_on_fractional_cards() {
    // 12 ÷ 5 与 1 ÷ 10 之后剩下 2.4, 0.1
    let solver = Solver::default();
    let hint = solver.hint(&[2.4, 0.1]);
    assert!(!hint.is_no_solution());
    assert_eq!(hint.to_string(), "Hint: 2.4 ÷ 0.1 = 24");

    // 0.3 % 0.1 的余数接近 0.1 而不是 0
    let hint = solver.hint(&[0.3, 0.1, 8.0]);
    assert_eq!(hint.to_string(), "Hint: 0.3 ÷ 0.1 = 3");
    if let Some(step) = hint.step() {
        assert_step_consistent(step);
    }

    let path = solver.solve(&[0.3, 0.1, 8.0]).unwrap_or_default();
    assert_eq!(path.len(), 2);
    for step in &path {
        assert_step_consistent(step);
    }
}

#[test]
fn test_search_order_prefers_addition_then_multiplication() {
    let solver = Solver::default();
    // 12 + 12 先于 1 × 1 被找到
    let path = solver.solve(&values(&[12, 12, 1, 1]));
    assert_eq!(
        path.as_ref().and_then(|steps| steps.first().copied()),
        Some(Step::new(12.0, Operator::Add, 12.0, 24.0))
    );
}

#[test]
fn test_exact_division_path() {
    let solver = Solver::default();
    let path = solver.solve(&values(&[4, 4, 10, 10]));
    assert_eq!(
        path,
        Some(vec![
            Step::new(10.0, Operator::Multiply, 10.0, 100.0),
            Step::new(100.0, Operator::Subtract, 4.0, 96.0),
            Step::new(96.0, Operator::Divide, 4.0, 24.0),
        ])
    );
}

#[test]
fn test_fractional_only_deals_are_rejected() {
    // 这些牌只能借助分数得到 24，例如 8 / (3 - 8 / 3)
    let solver = Solver::default();
    for deal in [[3, 3, 8, 8], [1, 5, 5, 5], [3, 3, 7, 7], [1, 4, 5, 6]] {
        assert!(!solver.is_solvable(&values(&deal)), "{:?}", deal);
    }
}

#[test]
fn test_division_steps_are_exact() {
    let solver = Solver::default();
    for deal in [[5, 5, 5, 9], [4, 4, 10, 10], [6, 10, 12, 13], [1, 2, 3, 4]] {
        let path = solver.solve(&values(&deal));
        assert!(path.is_some(), "{:?}", deal);
        for step in path.unwrap_or_default() {
            assert_step_consistent(&step);
            if step.operator == Operator::Divide {
                assert!(step.rhs.abs() > 1e-6);
                assert!((step.result - step.result.round()).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_no_negative_intermediates() {
    let solver = Solver::default();
    for deal in [[1, 2, 3, 4], [5, 6, 7, 8], [1, 3, 9, 10], [9, 8, 3, 3]] {
        let path = solver.solve(&values(&deal)).unwrap_or_default();
        assert!(!path.is_empty(), "{:?}", deal);
        for step in path {
            assert!(step.result >= 0.0, "negative step {} in {:?}", step, deal);
        }
    }
}

#[test]
fn test_solver_does_not_mutate_input() {
    let solver = Solver::default();
    let numbers = values(&[5, 6, 7, 8]);
    let before = numbers.clone();
    let _ = solver.solve(&numbers);
    assert_eq!(numbers, before);
}

#[test]
fn test_solver_is_deterministic() {
    let solver = Solver::default();
    let numbers = values(&[6, 10, 12, 13]);
    assert_eq!(solver.solve(&numbers), solver.solve(&numbers));
}

#[test]
fn test_solver_with_custom_target() {
    let solver = Solver::new(SolverConfig {
        target: 10.0,
        epsilon: 1e-6,
    });
    assert!(solver.is_solvable(&values(&[1, 2, 3, 4])));
    assert!(!solver.is_solvable(&values(&[1, 1])));
}

#[test]
fn test_operator_exact_policy() {
    assert_eq!(Operator::Subtract.apply_exact(3.0, 5.0, 1e-6), None);
    assert_eq!(Operator::Subtract.apply_exact(5.0, 5.0, 1e-6), Some(0.0));
    assert_eq!(Operator::Divide.apply_exact(7.0, 2.0, 1e-6), None);
    assert_eq!(Operator::Divide.apply_exact(7.0, 0.0, 1e-6), None);
    assert_eq!(Operator::Divide.apply_exact(8.0, 2.0, 1e-6), Some(4.0));
    assert!(Operator::Divide.apply_exact(0.3, 0.1, 1e-6).is_some());
    assert_eq!(Operator::Divide.apply_exact(0.3, 0.2, 1e-6), None);
    assert_eq!(Operator::Subtract.apply(3.0, 5.0), Some(-2.0));
    assert_eq!(Operator::Divide.apply(7.0, 2.0), Some(3.5));
    assert_eq!(Operator::Divide.apply(7.0, 0.0), None);
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(24.0), "24");
    assert_eq!(format_value(23.9999999), "24");
    assert_eq!(format_value(3.5), "3.5");
    assert_eq!(format_value(1.0 / 3.0), "0.33");
    assert_eq!(format_value(-2.0), "-2");
}
