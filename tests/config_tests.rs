// Host-side tests for configuration parsing and clamping.

use canvas_fx::constants::{DEFAULT_PARTICLE_COUNT, FALLBACK_COLOR, MAX_PARTICLE_COUNT};
use canvas_fx::core::{FxConfig, Palette, PaletteSpec, RenderMode, ViewportMetrics};
use canvas_fx::FxError;

#[test]
fn parses_host_config_object() {
    let json = r##"{
        "renderMode": "particle-field",
        "particleCount": 80,
        "palette": ["#fff", "rgba(0, 0, 0, 0.5)"],
        "interactive": true,
        "mouseResponsive": false
    }"##;
    let config = FxConfig::from_json(json).unwrap();
    assert_eq!(config.render_mode, RenderMode::ParticleField);
    let (resolved, issues) = config.resolve();
    assert!(issues.is_empty());
    assert_eq!(resolved.particle_count, 80);
    assert_eq!(resolved.palette.colors(), &["#fff", "rgba(0, 0, 0, 0.5)"]);
    assert!(resolved.tracks_pointer());
}

#[test]
fn missing_fields_take_defaults() {
    let config = FxConfig::from_json("{}").unwrap();
    let (resolved, issues) = config.resolve();
    assert!(issues.is_empty());
    assert_eq!(resolved.render_mode, RenderMode::None);
    assert_eq!(resolved.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(resolved.palette.colors(), &[FALLBACK_COLOR]);
    assert!(!resolved.tracks_pointer());
}

#[test]
fn render_modes_use_kebab_case() {
    for (text, mode) in [
        ("none", RenderMode::None),
        ("particle-field", RenderMode::ParticleField),
        ("wave", RenderMode::Wave),
    ] {
        let c = FxConfig::from_json(&format!(r#"{{"renderMode":"{text}"}}"#)).unwrap();
        assert_eq!(c.render_mode, mode);
    }
    assert!(RenderMode::Wave.is_animated());
    assert!(!RenderMode::None.is_animated());
}

#[test]
fn unknown_render_mode_resolves_to_none() {
    for mode in [r#""sparkles""#, "7", "null"] {
        let c = FxConfig::from_json(&format!(r#"{{"renderMode":{mode}}}"#)).unwrap();
        let (resolved, issues) = c.resolve();
        assert_eq!(resolved.render_mode, RenderMode::None, "{mode}");
        assert_eq!(issues.len(), 1, "{mode}");
        assert!(matches!(issues[0], FxError::ConfigInvalid(_)));
    }
}

#[test]
fn fractional_count_is_truncated() {
    let c = FxConfig::from_json(r#"{"particleCount":12.5}"#).unwrap();
    let (resolved, issues) = c.resolve();
    assert_eq!(resolved.particle_count, 12);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].to_string().contains("not whole"));

    let whole = FxConfig::from_json(r#"{"particleCount":40.0}"#).unwrap();
    let (resolved, issues) = whole.resolve();
    assert_eq!(resolved.particle_count, 40);
    assert!(issues.is_empty());
}

#[test]
fn numeric_string_count_is_accepted() {
    let c = FxConfig::from_json(r#"{"particleCount":" 40 "}"#).unwrap();
    let (resolved, issues) = c.resolve();
    assert_eq!(resolved.particle_count, 40);
    assert!(issues.is_empty());

    let (resolved, issues) = FxConfig::from_json(r#"{"particleCount":"7.9"}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.particle_count, 7);
    assert_eq!(issues.len(), 1);
}

#[test]
fn unusable_count_takes_default() {
    for count in ["null", r#""lots""#, "true", "[3]"] {
        let c = FxConfig::from_json(&format!(r#"{{"particleCount":{count}}}"#)).unwrap();
        let (resolved, issues) = c.resolve();
        assert_eq!(resolved.particle_count, DEFAULT_PARTICLE_COUNT, "{count}");
        assert_eq!(issues.len(), 1, "{count}");
        assert!(issues[0].to_string().contains("not a number"));
    }
}

#[test]
fn negative_string_count_still_clamps() {
    let (resolved, issues) = FxConfig::from_json(r#"{"particleCount":"-3"}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.particle_count, 0);
    assert_eq!(issues.len(), 1);
}

#[test]
fn non_list_palette_falls_back() {
    for palette in ["null", "42", r#"{"a":1}"#] {
        let c = FxConfig::from_json(&format!(r#"{{"palette":{palette}}}"#)).unwrap();
        assert!(matches!(c.palette, PaletteSpec::Invalid(_)), "{palette}");
        let (resolved, issues) = c.resolve();
        assert_eq!(resolved.palette, Palette::fallback());
        assert_eq!(issues.len(), 1);
    }
}

#[test]
fn mouse_responsive_alone_tracks_pointer() {
    let c = FxConfig::from_json(r#"{"mouseResponsive":true}"#).unwrap();
    assert!(c.resolve().0.tracks_pointer());
}

#[test]
fn delimited_palette_string() {
    let c = FxConfig::from_json(r#"{"palette":" #a1b2c3, hsl(10, 50%, 50%) ,, red "}"#).unwrap();
    assert!(matches!(c.palette, PaletteSpec::Delimited(_)));
    let (resolved, issues) = c.resolve();
    assert!(issues.is_empty());
    assert_eq!(
        resolved.palette.colors(),
        &["#a1b2c3", "hsl(10, 50%, 50%)", "red"]
    );
}

#[test]
fn empty_palette_falls_back() {
    for palette in [r#"[]"#, r#""""#, r#"" , ,""#, r#"["  "]"#] {
        let c = FxConfig::from_json(&format!(r#"{{"palette":{palette}}}"#)).unwrap();
        let (resolved, issues) = c.resolve();
        assert_eq!(resolved.palette, Palette::fallback(), "{palette}");
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], FxError::ConfigInvalid(_)));
    }
}

#[test]
fn negative_count_clamps_to_zero() {
    let c = FxConfig::from_json(r#"{"particleCount":-5}"#).unwrap();
    let (resolved, issues) = c.resolve();
    assert_eq!(resolved.particle_count, 0);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].to_string().contains("negative"));
}

#[test]
fn oversized_count_clamps_to_max() {
    let c = FxConfig::from_json(r#"{"particleCount":1000000}"#).unwrap();
    let (resolved, issues) = c.resolve();
    assert_eq!(resolved.particle_count, MAX_PARTICLE_COUNT);
    assert_eq!(issues.len(), 1);
}

#[test]
fn reseed_needed_only_for_count_or_palette() {
    let base = FxConfig::default().resolve().0;
    let mut other = base.clone();
    other.interactive = true;
    other.render_mode = RenderMode::Wave;
    assert!(!base.needs_reseed(&other));
    other.particle_count += 1;
    assert!(base.needs_reseed(&other));
    let mut recolored = base.clone();
    recolored.palette = Palette::parse("red, blue").unwrap();
    assert!(base.needs_reseed(&recolored));
}

#[test]
fn palette_lookup_wraps() {
    let p = Palette::parse("a,b,c").unwrap();
    assert_eq!(p.len(), 3);
    assert_eq!(p.get(4), "b");
}

#[test]
fn viewport_metrics_scale_by_dpr() {
    let m = ViewportMetrics::from_css_box(300.0, 150.0, 2.0);
    assert_eq!((m.backing_width, m.backing_height), (600, 300));
    assert!(m.is_ready());

    let odd = ViewportMetrics::from_css_box(100.0, 100.0, f64::NAN);
    assert_eq!(odd.device_pixel_ratio, 1.0);
    assert_eq!(odd.backing_width, 100);

    let empty = ViewportMetrics::from_css_box(0.0, 40.0, 2.0);
    assert!(!empty.is_ready());
    assert_eq!(empty.backing_width, 0);

    assert!(!ViewportMetrics::from_css_box(-3.0, 40.0, 1.0).is_ready());
}

#[test]
fn error_messages_are_descriptive() {
    let e = FxError::LayoutNotReady {
        width: 0.0,
        height: 10.0,
    };
    assert!(e.to_string().contains("layout not ready"));
    assert!(FxError::ContextUnavailable("x".into())
        .to_string()
        .contains("2d context unavailable"));
}
