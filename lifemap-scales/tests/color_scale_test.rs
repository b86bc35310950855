use lifemap_scales::color::continuous::ContinuousColorScale;
use lifemap_scales::color::{BinnedColorScale, BinnedSource, ColorScale, ColorScaleKind};
use lifemap_scales::config::{parse_color, ScaleSpec};
use lifemap_scales::error::LifemapScaleError;
use lifemap_scales::numeric::ContinuousNumericScale;
use rstest::rstest;

#[rstest]
#[case(r#"{"type": "threshold", "thresholds": [1], "domain": [0, 2], "colors": ["red", "blue"]}"#, ColorScaleKind::Binned)]
#[case(r#"{"type": "quantile", "samples": [1, 2, 3, 4], "colors": ["red", "blue"]}"#, ColorScaleKind::Binned)]
#[case(r#"{"type": "linear", "domain": [0, 2], "colors": ["red", "blue"], "color_space": "lab"}"#, ColorScaleKind::Continuous)]
#[case(r#"{"type": "log", "domain": [1, 100], "colors": ["red", "blue"], "nice": true}"#, ColorScaleKind::Continuous)]
#[case(r#"{"type": "ordinal", "categories": ["x", "y"], "colors": ["red", "blue"]}"#, ColorScaleKind::Nominal)]
fn test_spec_kinds(#[case] json: &str, #[case] kind: ColorScaleKind) -> Result<(), LifemapScaleError> {
    let scale = ScaleSpec::from_json(json)?.build()?;
    assert_eq!(scale.kind(), kind);
    Ok(())
}

#[test]
fn test_threshold_spec_with_unsorted_thresholds_fails() {
    let spec = ScaleSpec::Threshold {
        thresholds: vec![20.0, 10.0],
        domain: (0.0, 30.0),
        colors: vec!["red".into(), "green".into(), "blue".into()],
    };
    assert_eq!(
        spec.build().err(),
        Some(LifemapScaleError::ThresholdsNotAscending(vec![20.0, 10.0]))
    );
}

#[test]
fn test_threshold_spec_with_bad_color_fails() {
    let spec = ScaleSpec::Threshold {
        thresholds: vec![10.0],
        domain: (0.0, 30.0),
        colors: vec!["red".into(), "chartreusish".into()],
    };
    assert_eq!(
        spec.build().err(),
        Some(LifemapScaleError::InvalidColor("chartreusish".to_string()))
    );
}

#[test]
fn test_quantile_population_scale() -> Result<(), LifemapScaleError> {
    let populations = [
        3.5e5, 1.2e6, 4.8e6, 9.9e6, 2.1e7, 6.7e7, 1.4e8, 3.3e8, 1.4e9,
    ];
    let colors = ["#eff3ff", "#bdd7e7", "#6baed6", "#2171b5"]
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<Vec<_>, _>>()?;
    let scale = BinnedColorScale::from_quantiles(&populations, colors.clone())?;

    assert_eq!(scale.source(), BinnedSource::Quantiles);
    assert_eq!(scale.domain(), (3.5e5, 1.4e9));
    assert_eq!(scale.breakpoints().len(), 3);
    assert!(scale.breakpoints().windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(scale.color(1.0e5), colors[0]);
    assert_eq!(scale.color(2.0e9), colors[3]);
    Ok(())
}

#[test]
fn test_continuous_color_domain_nice() -> Result<(), LifemapScaleError> {
    let white = parse_color("white")?;
    let green = parse_color("green")?;
    let scale = ContinuousColorScale::new_linear((41.3, 84.7), &[white, green], Default::default(), Some(10))?;
    assert_eq!(scale.domain(), (40.0, 85.0));
    assert_eq!(scale.numeric_scale().range(), (0.0, 1.0));

    let scale: ColorScale = scale.into();
    assert_eq!(scale.numeric_domain(), Some((40.0, 85.0)));
    Ok(())
}
