use osu_api::{
    render, validate, EndpointRegistry, EndpointSpec, OsuApiError, ParamValue, ParameterErrorKind,
    ParameterSet, QueryEncoding,
};

const BASE: &str = "https://osu.ppy.sh/api/get_scores?k=KEY";

fn scores_spec() -> EndpointSpec {
    EndpointSpec::new("get_scores", ["m"], ["m", "u"]).unwrap()
}

fn invalid(err: OsuApiError) -> (ParameterErrorKind, String) {
    match err {
        OsuApiError::InvalidParameters { kind, name } => (kind, name),
        other => panic!("expected invalid parameters, got {other}"),
    }
}

#[test]
fn every_missing_required_name_is_reported() {
    let registry = EndpointRegistry::default();
    for (endpoint, spec) in registry.iter() {
        for required in spec.required() {
            let params: ParameterSet = spec
                .required()
                .iter()
                .filter(|name| *name != required)
                .map(|name| (name.clone(), "1"))
                .collect();
            let (kind, name) = invalid(validate(spec, &params).unwrap_err());
            assert_eq!(kind, ParameterErrorKind::MissingRequired, "{endpoint}");
            assert_eq!(&name, required);
        }
    }
}

#[test]
fn unknown_name_is_reported() {
    let params = ParameterSet::new().with("m", 0).with("bogus", 1);
    let (kind, name) = invalid(validate(&scores_spec(), &params).unwrap_err());
    assert_eq!(kind, ParameterErrorKind::UnknownParameter);
    assert_eq!(name, "bogus");
}

#[test]
fn first_violation_wins() {
    let spec = EndpointSpec::new("get_replay", ["b", "u"], ["b", "u"]).unwrap();

    let (kind, name) = invalid(validate(&spec, &ParameterSet::new().with("x", 1)).unwrap_err());
    assert_eq!((kind, name.as_str()), (ParameterErrorKind::MissingRequired, "b"));

    let params = ParameterSet::new()
        .with("b", 1)
        .with("u", 2)
        .with("y", 3)
        .with("x", 4);
    let (kind, name) = invalid(validate(&spec, &params).unwrap_err());
    assert_eq!((kind, name.as_str()), (ParameterErrorKind::UnknownParameter, "y"));
}

#[test]
fn valid_params_render_one_pair_each() {
    let params = ParameterSet::new()
        .with("m", 0)
        .omit("s")
        .with("u", "cookiezi");
    let spec = EndpointSpec::new("get_scores", ["m"], ["m", "u", "s"]).unwrap();
    validate(&spec, &params).expect("params are valid");

    let url = render(BASE, &params, QueryEncoding::Percent);
    assert_eq!(url.matches("&m=0").count(), 1);
    assert_eq!(url.matches("&u=cookiezi").count(), 1);
    assert!(!url.contains("&s="));
    assert_eq!(url, format!("{BASE}&m=0&u=cookiezi"));
}

#[test]
fn render_is_idempotent() {
    let params = ParameterSet::new().with("u", "a b&c").with("m", 3);
    for encoding in [QueryEncoding::Percent, QueryEncoding::Legacy] {
        assert_eq!(
            render(BASE, &params, encoding),
            render(BASE, &params, encoding)
        );
    }
}

#[test]
fn legacy_mode_inserts_values_verbatim() {
    let params = ParameterSet::new().with("u", "a&b=c");
    assert_eq!(
        render(BASE, &params, QueryEncoding::Legacy),
        format!("{BASE}&u=a&b=c")
    );
}

#[test]
fn percent_mode_escapes_reserved_characters() {
    let params = ParameterSet::new().with("u", "a&b=c");
    assert_eq!(
        render(BASE, &params, QueryEncoding::Percent),
        format!("{BASE}&u=a%26b%3Dc")
    );
}

#[test]
fn integer_values_render_as_decimal() {
    let params: ParameterSet = vec![("mods", ParamValue::Integer(72)), ("m", ParamValue::Integer(-1))]
        .into_iter()
        .collect();
    assert_eq!(
        render(BASE, &params, QueryEncoding::Percent),
        format!("{BASE}&mods=72&m=-1")
    );
}
