use slide_carousel::config::CarouselConfig;
use slide_carousel::slide::SlideSpec;
use std::io::Write;
use std::time::Duration;

#[test]
fn empty_document_uses_defaults() {
    let cfg: CarouselConfig = serde_yaml::from_str("{}").unwrap();
    assert!(!cfg.auto_rotation);
    assert_eq!(cfg.time_interval, Duration::from_millis(5_000));
    assert_eq!(cfg.label, "Cats are Social");
    assert_eq!(cfg.slides.len(), 3);
    assert_eq!(cfg.slides[1].alt.as_deref(), Some("Cats In Fish Market"));
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
auto-rotation: true
time-interval: 1500ms
label: "Dogs, mostly"
slides:
  - url: "/img/a.jpg"
    alt: "A dog"
  - url: "/img/b.jpg"
"#;
    let cfg = CarouselConfig::from_yaml_str(yaml)
        .unwrap()
        .validated()
        .unwrap();
    assert!(cfg.auto_rotation);
    assert_eq!(cfg.time_interval, Duration::from_millis(1_500));
    assert_eq!(
        cfg.slides,
        vec![
            SlideSpec {
                url: "/img/a.jpg".into(),
                alt: Some("A dog".into()),
            },
            SlideSpec {
                url: "/img/b.jpg".into(),
                alt: None,
            },
        ]
    );

    let options = cfg.options().unwrap();
    assert_eq!(options.label, "Dogs, mostly");
    assert_eq!(options.slides[1].alt(), "Slide 2 of 2");
}

#[test]
fn explicit_empty_slide_list_is_kept() {
    let cfg = CarouselConfig::from_yaml_str("slides: []")
        .unwrap()
        .validated()
        .unwrap();
    assert!(cfg.options().unwrap().slides.is_empty());
}

#[test]
fn bare_integer_interval_is_milliseconds() {
    let cfg = CarouselConfig::from_yaml_str("time-interval: 5000")
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.time_interval, Duration::from_millis(5_000));

    let cfg = CarouselConfig::from_yaml_str("time-interval: 250").unwrap();
    assert_eq!(cfg.time_interval, Duration::from_millis(250));
}

#[test]
fn zero_millisecond_interval_is_rejected() {
    let err = CarouselConfig::from_yaml_str("time-interval: 0")
        .unwrap()
        .validated()
        .unwrap_err();
    assert!(err.to_string().contains("time-interval"));
}

#[test]
fn malformed_interval_fails_to_parse() {
    assert!(CarouselConfig::from_yaml_str("time-interval: soon").is_err());
    assert!(CarouselConfig::from_yaml_str("time-interval: -5").is_err());
}

#[test]
fn zero_interval_is_rejected() {
    let err = CarouselConfig::from_yaml_str("time-interval: 0s")
        .unwrap()
        .validated()
        .unwrap_err();
    assert!(err.to_string().contains("time-interval"));
}

#[test]
fn blank_slide_url_is_rejected() {
    let yaml = r#"
slides:
  - url: "ok.jpg"
  - url: "  "
"#;
    let err = CarouselConfig::from_yaml_str(yaml)
        .unwrap()
        .validated()
        .unwrap_err();
    assert!(err.to_string().contains("slides[1].url"));
}

#[test]
fn blank_label_is_rejected() {
    let err = CarouselConfig::from_yaml_str("label: \"   \"")
        .unwrap()
        .validated()
        .unwrap_err();
    assert!(err.to_string().contains("label"));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(CarouselConfig::from_yaml_str("autoRotation: true").is_err());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "time-interval: 2s\nauto-rotation: true").unwrap();
    let cfg = CarouselConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(cfg.time_interval, Duration::from_secs(2));
    assert!(cfg.auto_rotation);
}
