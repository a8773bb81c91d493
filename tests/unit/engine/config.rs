use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let o = EngineOpts::default();
    assert_eq!(o.load_timeout, Duration::from_secs(10));
    assert_eq!(o.default_color, Color::rgb(0xf2, 0xf2, 0xf2));
    assert_eq!(o.default_style, MockupStyle::Realistic);
    assert_eq!(o.output, OutputFormat::Png);
}

#[test]
fn env_overrides_apply() {
    let o = EngineOpts::from_lookup(lookup(&[
        (ENV_LOAD_TIMEOUT_MS, "2500"),
        (ENV_MAX_DESIGN_BYTES, "1024"),
        (ENV_DEFAULT_COLOR, "#112233"),
    ]));
    assert_eq!(o.load_timeout, Duration::from_millis(2500));
    assert_eq!(o.max_design_bytes, 1024);
    assert_eq!(o.default_color, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(o.loader_opts().max_bytes, 1024);
}

#[test]
fn invalid_env_values_fall_back() {
    let o = EngineOpts::from_lookup(lookup(&[
        (ENV_LOAD_TIMEOUT_MS, "0"),
        (ENV_MAX_DESIGN_BYTES, "lots"),
        (ENV_DEFAULT_COLOR, "#zz"),
    ]));
    assert_eq!(o, EngineOpts::default());
}

#[test]
fn builders_chain() {
    let o = EngineOpts::default()
        .with_default_style(MockupStyle::Minimal)
        .with_output(OutputFormat::jpeg())
        .with_load_timeout(Duration::from_millis(5));
    assert_eq!(o.default_style, MockupStyle::Minimal);
    assert_eq!(o.output.mime(), "image/jpeg");
    assert_eq!(o.loader_opts().timeout, Duration::from_millis(5));
}
