//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Record real filesystem reads through the recording adapter.
//! 2. Replay the cassette using `ServiceContext::replaying()`.
//! 3. Assert identical outputs between recording and replaying.
//! 4. Replay a second time and assert determinism.

use std::path::{Path, PathBuf};

use slurp::context::ServiceContext;
use slurp::reader::ReadError;

/// Exercises both port methods on the given context against a fixed set of
/// paths, returning a snapshot of all outputs for comparison.
fn exercise_ports(
    ctx: &ServiceContext,
    present: &Path,
    text: &Path,
    missing: &Path,
) -> (Vec<u8>, String, ReadError) {
    let bytes = ctx.fs.read(present).unwrap();
    let string = ctx.fs.read_to_string(text).unwrap();
    let err = ctx.fs.read(missing).unwrap_err();
    (bytes, string, err)
}

#[test]
fn record_then_replay_produces_identical_outputs() {
    let root = std::env::temp_dir().join("slurp_record_replay_test");
    let data_dir = root.join("data");
    let cassette_root = root.join("cassettes");
    std::fs::create_dir_all(&data_dir).unwrap();

    let present = data_dir.join("present.bin");
    std::fs::write(&present, [0u8, 7, 0, 42]).unwrap();
    let text = data_dir.join("note.txt");
    std::fs::write(&text, "recorded text").unwrap();
    let missing = data_dir.join("missing.bin");

    // --- Phase 1: Record real reads through the recording adapter ---
    let (ctx, session) = ServiceContext::recording_at(cassette_root).unwrap();
    let (live_bytes, live_string, live_err) = exercise_ports(&ctx, &present, &text, &missing);
    drop(ctx);
    let output_dir = session.finish().expect("recording should succeed");
    let cassette_path = output_dir.join("fs.cassette.yaml");
    assert!(cassette_path.exists());

    assert_eq!(live_bytes, [0u8, 7, 0, 42]);
    assert_eq!(live_string, "recorded text");
    assert!(matches!(live_err, ReadError::NotFound { .. }));

    // The replayed run must work with the data files gone; nothing may
    // touch the real disk.
    std::fs::remove_dir_all(&data_dir).unwrap();

    // --- Phase 2: Replay and verify identical outputs ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let (bytes1, string1, err1) = exercise_ports(&ctx1, &present, &text, &missing);

    assert_eq!(bytes1, live_bytes, "fs read replay mismatch");
    assert_eq!(string1, live_string, "fs read_to_string replay mismatch");
    assert_eq!(err1, live_err, "fs error replay mismatch");

    // --- Phase 3: Replay a second time, determinism check ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let (bytes2, string2, err2) = exercise_ports(&ctx2, &present, &text, &missing);

    assert_eq!(bytes1, bytes2, "determinism: read outputs differ between replays");
    assert_eq!(string1, string2, "determinism: read_to_string outputs differ between replays");
    assert_eq!(err1, err2, "determinism: errors differ between replays");

    // Cleanup
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn replayed_errors_match_like_live_ones() {
    use chrono::Utc;
    use serde_json::json;
    use slurp::cassette::format::{Cassette, Interaction};

    let dir = std::env::temp_dir().join("slurp_replay_errors_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("errors.cassette.yaml");

    let cassette = Cassette {
        name: "errors".into(),
        recorded_at: Utc::now(),
        commit: "abc123".into(),
        interactions: vec![
            Interaction {
                seq: 0,
                port: "fs".into(),
                method: "read".into(),
                input: json!({"path": "/locked"}),
                output: json!({"err": {"kind": "permission_denied", "path": "/locked"}}),
            },
            Interaction {
                seq: 1,
                port: "fs".into(),
                method: "read".into(),
                input: json!({"path": "/dev/null"}),
                output: json!({"err": {"kind": "not_a_file", "path": "/dev/null"}}),
            },
        ],
    };
    std::fs::write(&cassette_path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();

    let err = ctx.fs.read(Path::new("/locked")).unwrap_err();
    assert_eq!(err, ReadError::PermissionDenied { path: PathBuf::from("/locked") });

    let err = ctx.fs.read(Path::new("/dev/null")).unwrap_err();
    assert_eq!(err, ReadError::NotAFile { path: PathBuf::from("/dev/null") });

    let _ = std::fs::remove_dir_all(&dir);
}
