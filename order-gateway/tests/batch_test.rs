use order_gateway::io::requests;
use order_gateway::{Gateway, Settings, Summary};
use std::fs;
use std::path::Path;

#[test]
fn test_sample_batch_with_configured_prefix() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        r#"
[clordid]
prefix = "T-"

[sessions.fix42]
begin_string = "FIX.4.2"
sender_comp_id = "TW"
target_comp_id = "ISLD"

[sessions.fixt11]
begin_string = "FIXT.1.1"
sender_comp_id = "TW"
target_comp_id = "ISLD"
"#,
    )
    .unwrap();
    let settings =
        Settings::load_from(dir.path().to_str().unwrap(), None, "OG_BATCH_TEST").unwrap();

    let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("requests.sample.json");
    let batch = requests::load(Some(sample.as_path())).unwrap();
    let gateway = Gateway::from_settings(&settings);

    let mut out = Vec::new();
    let summary = gateway.run(batch, &mut out).unwrap();

    assert_eq!(
        summary,
        Summary {
            sent: 4,
            recorded: 1,
            failed: 0
        }
    );
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert!(lines[0].contains("|11=T-1|"));
    assert!(lines[1].starts_with("8=FIXT.1.1|35=D|1128=7|"));
    assert!(lines[1].contains("|99=190.00|"));
    assert!(lines[2].contains("|35=s|"));
    assert!(lines[3].contains("|41=T-1|"));
    assert_eq!(gateway.manager().order_count(), 2);
    assert_eq!(gateway.manager().cross_count(), 1);
}
