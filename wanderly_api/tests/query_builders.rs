use url::Url;
use wanderly_api::{Query, SearchFilters};

fn base_url() -> Url {
    Url::parse("https://example.com/api/v1/deals").unwrap()
}

fn values(url: &Url, key: &str) -> Vec<String> {
    url.query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

#[test]
fn one_from_locations_entry_per_code_in_order() {
    let cases: &[&[&str]] = &[
        &["DUB"],
        &["ORK", "DUB"],
        &["KIR", "NOC", "SNN", "ORK", "DUB"],
    ];
    for codes in cases {
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let url = SearchFilters::default()
            .with_origins(&codes)
            .with_duration(7)
            .add_to_url(&base_url());
        assert_eq!(values(&url, "from_locations"), codes);
    }
}

#[test]
fn from_locations_are_not_comma_joined() {
    let url = SearchFilters::default()
        .with_origins(&["DUB".to_string(), "ORK".to_string()])
        .with_duration(7)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("from_locations=DUB&from_locations=ORK"));
}

#[test]
fn durations_joined_in_given_order() {
    let cases: &[(&[u32], &str)] = &[
        (&[7], "7"),
        (&[3, 7, 14], "3,7,14"),
        (&[21, 3, 10], "21,3,10"),
    ];
    for (durations, expected) in cases {
        let url = SearchFilters::default()
            .with_origin("DUB")
            .with_durations(durations)
            .add_to_url(&base_url());
        assert_eq!(values(&url, "durations"), vec![expected.to_string()]);
    }
}

#[test]
fn durations_commas_are_sent_unescaped() {
    let url = SearchFilters::default()
        .with_origin("DUB")
        .with_durations(&[3, 7, 14])
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("&durations=3,7,14&"));
    assert!(!query.contains("%2C"));
}

#[test]
fn durations_without_origins_has_no_leading_separator() {
    let url = SearchFilters::default()
        .with_duration(7)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().starts_with("durations=7&"));
}

#[test]
fn horizon_and_price_are_single_values() {
    let url = SearchFilters::default()
        .with_origin("DUB")
        .with_duration(5)
        .with_horizon_days(30)
        .with_max_price(99.5)
        .add_to_url(&base_url());
    assert_eq!(values(&url, "horizon_days"), vec!["30"]);
    assert_eq!(values(&url, "max_price"), vec!["99.5"]);
}

#[test]
fn defaults_carry_horizon_and_price() {
    let url = SearchFilters::default()
        .with_origin("DUB")
        .with_duration(7)
        .add_to_url(&base_url());
    assert_eq!(values(&url, "horizon_days"), vec!["90"]);
    assert_eq!(values(&url, "max_price"), vec!["150"]);
}
