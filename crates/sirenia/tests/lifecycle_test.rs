use sirenia::{ClassicOptions, ForceLayout, Graph, Model, Phase, Placement, Termination};

fn path() -> Graph {
    let mut g = Graph::new();
    g.add_node("a").add_node("b").add_node("c");
    g.add_edge("a", "b", None).add_edge("b", "c", None);
    g
}

#[test]
fn positions_are_available_before_the_run_completes() {
    let mut run = ForceLayout::new(&path(), &Model::default(), &Placement::new()).unwrap();
    assert!(!run.has_run());
    assert_eq!(run.summary(), None);
    assert!(run.energy().is_nan());

    let start = run.positions();
    assert_eq!(start.len(), 3);
    assert_eq!(run.position(&"a".to_string()), Some(start["a"]));

    run.step();
    assert_eq!(run.phase(), Phase::Running);
    assert_ne!(run.position(&"a".to_string()), Some(start["a"]));
    assert!(run.energy().is_finite());
}

#[test]
fn manual_stepping_matches_a_full_run() {
    let model = Model::Classic(ClassicOptions {
        max_steps: 30,
        ..Default::default()
    });
    let mut stepped = ForceLayout::new(&path(), &model, &Placement::new()).unwrap();
    while !stepped.has_run() {
        stepped.step();
    }

    let mut full = ForceLayout::new(&path(), &model, &Placement::new()).unwrap();
    let summary = full.run();

    assert_eq!(stepped.summary(), Some(summary));
    assert_eq!(stepped.positions(), full.positions());
}

#[test]
fn abandoned_runs_report_their_progress() {
    let mut run = ForceLayout::new(&path(), &Model::default(), &Placement::new()).unwrap();
    for _ in 0..3 {
        run.step();
    }
    let result = run.into_result();
    assert_eq!(result.summary.steps, 3);
    assert_eq!(
        result.summary.termination,
        Termination::StepBudgetExhausted
    );
}

#[test]
fn unknown_vertices_have_no_position() {
    let mut run = ForceLayout::new(&path(), &Model::default(), &Placement::new()).unwrap();
    run.run();
    assert_eq!(run.position(&"nope".to_string()), None);
}
