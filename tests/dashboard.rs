use std::io::Write;
use usage_dash::dashboard::{Analysis, Kpis};
use usage_dash::export::{from_csv, to_csv};
use usage_dash::loader::load_dataset;
use usage_dash::session::{LoadState, Session};
use usage_dash::stats::{average, pearson_correlation};
use usage_dash::{charts, filter, top_n, Bucket, Dataset, Metric, Record};

const SAMPLE: &str = r#"[
    {"no": 1, "country": "A", "mobile": 80, "computer": 20},
    {"no": 2, "country": "B", "mobile": 40, "computer": 60}
]"#;

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

#[test]
fn worked_example_end_to_end() {
    let file = sample_file();
    let (ds, _) = load_dataset(file.path()).unwrap();

    assert_eq!(average(&ds.values(Metric::Mobile)).unwrap(), 60.0);

    let top = top_n(&ds, Metric::Mobile, 1).unwrap();
    assert_eq!(top.leaders, vec![Record::new(1, "A", 80.0, 20.0)]);
    assert_eq!(top.remainder, 40.0);

    let high = filter(&ds, "", Bucket::MobileGt60);
    assert_eq!(high, vec![Record::new(1, "A", 80.0, 20.0)]);

    assert_eq!(
        to_csv(&ds).unwrap(),
        "no,country,mobile,computer\n1,A,80,20\n2,B,40,60"
    );
}

#[test]
fn views_never_mutate_the_dataset() {
    let file = sample_file();
    let (ds, _) = load_dataset(file.path()).unwrap();
    let before = ds.clone();

    top_n(&ds, Metric::Computer, 1).unwrap();
    filter(&ds, "a", Bucket::MobileLt50);
    charts::all_charts(&ds).unwrap();
    Analysis::compute(&ds).unwrap();

    assert_eq!(ds, before);
}

#[test]
fn larger_dataset_properties() {
    let records: Vec<Record> = [
        ("Indonesia", 65.2),
        ("Brazil", 58.0),
        ("Germany", 45.1),
        ("Korea, Republic of", 60.0),
        ("India", 78.0),
        ("Netherlands", 50.0),
        ("Chile", 55.9),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (c, m))| Record::new(i as u32 + 1, c, m, ((100.0 - m) * 10.0f64).round() / 10.0))
    .collect();
    let ds = Dataset::new(records).unwrap();

    assert_eq!(filter(&ds, "", Bucket::None), ds.records().to_vec());
    assert_eq!(from_csv(&to_csv(&ds).unwrap()).unwrap(), ds.records().to_vec());

    let m = ds.values(Metric::Mobile);
    let c = ds.values(Metric::Computer);
    let r = pearson_correlation(&m, &c).unwrap();
    assert_eq!(r, pearson_correlation(&c, &m).unwrap());
    assert!(r < -0.99);

    let kpis = Kpis::compute(&ds).unwrap();
    assert_eq!(kpis.top_country, "India");

    let top = top_n(&ds, Metric::Mobile, 5).unwrap();
    let kept: f64 = top.leaders.iter().map(|r| r.mobile).sum();
    let total: f64 = m.iter().sum();
    assert!((kept + top.remainder - total).abs() < 1e-9);
}

#[test]
fn session_lifecycle_over_a_file() {
    let file = sample_file();
    let session = Session::new();
    assert_eq!(session.state(), LoadState::Unloaded);
    session.load(file.path()).unwrap();
    assert_eq!(session.state(), LoadState::Loaded);
    assert_eq!(session.dataset().unwrap().len(), 2);
}
