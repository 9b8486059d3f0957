use sirenia::{ClassicOptions, Error, ForceAtlas2Options, Graph, Model, Placement};

#[test]
fn empty_objects_select_documented_defaults() {
    let model = Model::from_json(r#"{"classic": {}}"#).unwrap();
    assert_eq!(model, Model::Classic(ClassicOptions::default()));
    assert_eq!(model.max_steps(), 400);
    assert_eq!(model.delta_time(), 0.1);

    let model = Model::from_json(r#"{"forceAtlas2": {}}"#).unwrap();
    assert_eq!(model, Model::ForceAtlas2(ForceAtlas2Options::default()));
    assert_eq!(model.max_steps(), 1000);
    assert_eq!(model.delta_time(), 1.0);
}

#[test]
fn camel_case_keys_override_defaults() {
    let model = Model::from_json(
        r#"{"forceAtlas2": {"kRepulsion": 4.0, "strongGravity": true, "maxSteps": 50}}"#,
    )
    .unwrap();
    let Model::ForceAtlas2(opts) = model else {
        panic!("expected forceAtlas2");
    };
    assert_eq!(opts.k_repulsion, 4.0);
    assert!(opts.strong_gravity);
    assert_eq!(opts.max_steps, 50);
    assert_eq!(opts.k_gravity, 1.0);
}

#[test]
fn options_round_trip_through_json() {
    let model = Model::Classic(ClassicOptions {
        attract_to_center: false,
        random_seed: 99,
        ..Default::default()
    });
    let text = serde_json::to_string(&model).unwrap();
    assert!(text.contains("\"attractToCenter\":false"));
    assert_eq!(Model::from_json(&text).unwrap(), model);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Model::from_json(r#"{"spiral": {}}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn invalid_values_are_rejected_before_running() {
    let err = Model::from_json(r#"{"classic": {"deltaTime": 0}}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidOption {
            option: "deltaTime",
            ..
        }
    ));

    let mut g = Graph::new();
    g.add_node("a");
    let model = Model::ForceAtlas2(ForceAtlas2Options {
        k_max_speed: -1.0,
        ..Default::default()
    });
    let err = sirenia::layout(&g, &model, &Placement::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid layout option `kMaxSpeed`: must be greater than zero"
    );
}
