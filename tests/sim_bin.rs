use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2-2", "0-0", "bogus"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["rows"], 5);
    assert_eq!(v["cols"], 5);
    assert_eq!(v["board"].as_array().map(Vec::len), Some(5));
    assert!(v["won"].is_boolean());
    let rejected = v["rejected"].as_array().expect("rejected list");
    assert!(rejected.iter().any(|r| r["key"] == "bogus"));
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42", "1-1"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
