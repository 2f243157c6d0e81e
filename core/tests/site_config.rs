use arukoto_core::site::{SiteConfig, SiteConfigError, DEFAULT_BLUR_PX};
use arukoto_core::SizePolicy;

#[test]
fn embedded_config_is_valid() {
    let config = SiteConfig::embedded().expect("embedded site config");
    assert!(!config.assets.default_background.is_empty());
    assert!(config.reveal.policy.desktop_size > 0.0);
}

#[test]
fn empty_config_uses_defaults() {
    let config = SiteConfig::from_toml_str("").expect("empty config");
    assert_eq!(config.reveal.policy, SizePolicy::default());
    assert_eq!(config.reveal.blur_px, DEFAULT_BLUR_PX);
    assert_eq!(config.assets.default_background, "/images/todaiback2.jpg");
    assert_eq!(config.analytics.script_src(), None);
}

#[test]
fn reveal_section_overrides_policy() {
    let raw = r#"
        [reveal]
        mobile_breakpoint = 600.0
        desktop_size = 180
    "#;
    let config = SiteConfig::from_toml_str(raw).expect("config");
    assert_eq!(config.reveal.policy.mobile_breakpoint, 600.0);
    assert_eq!(config.reveal.policy.desktop_size, 180.0);
    assert_eq!(config.reveal.policy.mobile_max, 140.0);
}

#[test]
fn analytics_script_is_trimmed() {
    let raw = r#"
        [analytics]
        script_src = "  /_vercel/insights/script.js "
    "#;
    let config = SiteConfig::from_toml_str(raw).expect("config");
    assert_eq!(config.analytics.script_src(), Some("/_vercel/insights/script.js"));

    let raw = "[analytics]\nscript_src = \"   \"\n";
    let config = SiteConfig::from_toml_str(raw).expect("config");
    assert_eq!(config.analytics.script_src(), None);
}

#[test]
fn invalid_ratio_is_rejected() {
    let raw = "[reveal]\nmobile_ratio = 1.5\n";
    match SiteConfig::from_toml_str(raw) {
        Err(SiteConfigError::Invalid { field, .. }) => assert_eq!(field, "reveal.mobile_ratio"),
        other => panic!("expected invalid ratio, got {other:?}"),
    }
}

#[test]
fn data_url_background_is_rejected() {
    let raw = "[assets]\ndefault_background = \"data:image/png;base64,AA\"\n";
    match SiteConfig::from_toml_str(raw) {
        Err(SiteConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "assets.default_background")
        }
        other => panic!("expected invalid background, got {other:?}"),
    }
}

#[test]
fn social_url_must_be_http() {
    let raw = "[social]\nurl = \"javascript:alert(1)\"\n";
    let err = SiteConfig::from_toml_str(raw).expect_err("bad url");
    assert!(err.to_string().contains("social.url"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = SiteConfig::from_toml_str("[reveal\nmobile_ratio = ").expect_err("parse");
    assert!(matches!(err, SiteConfigError::Parse(_)));
}
