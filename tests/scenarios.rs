use approx::assert_relative_eq;

use lp2d::{
    Comp, Constraint, FeasibleRegion, OptDir, Point, Problem, Simplex, SolveError,
};

fn reference_constraints() -> Vec<Constraint> {
    vec![
        Constraint::new(1, 0, Comp::Le, 4),
        Constraint::new(0, 2, Comp::Le, 12),
        Constraint::new(3, 2, Comp::Le, 18),
    ]
}

fn reference_problem(opt_dir: OptDir, c1: f64, c2: f64) -> Problem {
    let mut problem = Problem::new(opt_dir);
    problem.set_obj_fn(opt_dir, c1, c2);
    problem.set_constraints(reference_constraints());
    problem
}

#[test]
fn solver_and_region_agree_on_the_optimum() {
    let problem = reference_problem(OptDir::Max, 3.0, 5.0);
    let solution = Simplex::new().solve(&problem).unwrap();

    assert_relative_eq!(solution.objective_value(), 36.0);

    let region = FeasibleRegion::new().compute(problem.constraints());
    let optimum = Point::new(solution.var_value(0), solution.var_value(1));

    // the optimum sits on a vertex of the feasible polygon
    assert!(region
        .vertices
        .iter()
        .any(|v| (v.x - optimum.x).abs() < 1e-9 && (v.y - optimum.y).abs() < 1e-9));

    // and no vertex scores better
    let score = |p: &Point| 3.0 * p.x + 5.0 * p.y;
    for vertex in &region.vertices {
        assert!(score(vertex) <= solution.objective_value() + 1e-9);
    }
}

#[test]
fn min_max_round_trip() {
    let max = reference_problem(OptDir::Max, 3.0, 5.0);
    let min = reference_problem(OptDir::Min, -3.0, -5.0);

    let solver = Simplex::new();
    let max_solution = solver.solve(&max).unwrap();
    let min_solution = solver.solve(&min).unwrap();

    assert_relative_eq!(
        min_solution.objective_value(),
        -max_solution.objective_value()
    );
    assert_relative_eq!(min_solution.var_value(0), max_solution.var_value(0));
    assert_relative_eq!(min_solution.var_value(1), max_solution.var_value(1));
}

#[test]
fn unbounded_problem_is_diagnosed() {
    let mut problem = Problem::new(OptDir::Max);
    problem.set_obj_fn(OptDir::Max, 1, 0);
    problem.add_constraint(Constraint::new(1, 0, Comp::Ge, 0));

    assert_eq!(
        Simplex::new().solve(&problem).unwrap_err(),
        SolveError::Unbounded
    );
}

#[test]
fn origin_excluding_system_is_diagnosed() {
    let mut problem = Problem::new(OptDir::Max);
    problem.set_obj_fn(OptDir::Max, 1, 1);
    problem.add_constraint(Constraint::new(1, 1, Comp::Le, 8));
    problem.add_constraint(Constraint::new(1, 1, Comp::Ge, 2));

    assert_eq!(
        Simplex::new().solve(&problem).unwrap_err(),
        SolveError::OriginInfeasible { index: 1 }
    );
}

#[test]
fn region_polygon_for_the_reference_problem() {
    let region = FeasibleRegion::new().compute(&reference_constraints());

    // corner points of the feasible polygon, in boundary order
    assert_eq!(region.vertices.len(), 4);
    assert_eq!(region.vertices[0], Point::new(4.0, 0.0));
    assert_eq!(region.vertices[1], Point::new(4.0, 3.0));
    assert_eq!(region.vertices[2], Point::new(2.0, 6.0));
    assert_eq!(region.vertices[3], Point::new(0.0, 6.0));

    // one boundary segment per constraint
    assert_eq!(region.boundaries.len(), 3);
    for boundary in &region.boundaries {
        assert_eq!(boundary.len(), 2);
    }
}

#[test]
fn solution_report_renders() {
    let problem = reference_problem(OptDir::Max, 3.0, 5.0);
    let solution = Simplex::new().solve(&problem).unwrap();

    let report = format!("{}", solution);
    assert!(report.contains("Objective value = 36.000"));
    assert!(report.contains("X1"));
    assert!(report.contains("X2"));

    let model = format!("{}", problem);
    assert!(model.contains("Max:"));
}
