//! Failure propagation tests.
//!
//! Every stage failure must abort the launch immediately: later stages
//! are never invoked, nothing is rolled back, and the error carries the
//! failing command text and exit code.

use skylift::core::TaskGraph;
use skylift::orchestration::Launcher;
use skylift::Error;

use crate::fixtures::{RecordingRunner, TestWorkspace};

/// Test: graph shape is rejected before any side effect.
#[test]
fn test_empty_graph_has_no_side_effects() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::ok();
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let err = launcher.launch(&TaskGraph::new()).unwrap_err();

    assert!(matches!(err, Error::UnsupportedGraphShape { count: 0 }));
    assert_eq!(runner.call_count(), 0);
    assert!(!ws.rendered_config().exists());
}

#[test]
fn test_multi_task_graph_has_no_side_effects() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::ok();
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let mut graph = TaskGraph::new();
    graph.push(ws.aws_task("echo a"));
    graph.push(ws.aws_task("echo b"));

    let err = launcher.launch(&graph).unwrap_err();

    assert!(matches!(err, Error::UnsupportedGraphShape { count: 2 }));
    assert_eq!(runner.call_count(), 0);
    assert!(!ws.rendered_config().exists());
}

/// Test: provisioning failure aborts before sync and execute.
#[test]
fn test_provision_failure_aborts_launch() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::failing_on(" up ", 2);
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let err = launcher
        .launch(&TaskGraph::single(ws.aws_task("echo hi")))
        .unwrap_err();

    match err {
        Error::Provisioning { command, code } => {
            assert!(command.contains("--no-config-cache"));
            assert_eq!(code, 2);
        }
        other => panic!("expected Provisioning error, got {:?}", other),
    }

    // Only the provision command ran; neither sync nor execute happened
    let commands = runner.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains(" up "));

    // The materialized config stays in place; no rollback
    assert!(ws.rendered_config().exists());
}

/// Test: sync failure aborts before execute.
#[test]
fn test_sync_failure_aborts_launch() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::failing_on("rsync_up", 23);
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let err = launcher
        .launch(&TaskGraph::single(ws.aws_task("echo hi")))
        .unwrap_err();

    match err {
        Error::Sync { command, code } => {
            assert!(command.contains("rsync_up"));
            assert_eq!(code, 23);
        }
        other => panic!("expected Sync error, got {:?}", other),
    }

    let commands = runner.commands();
    assert_eq!(commands.len(), 2);
    assert!(commands[0].contains(" up "));
    assert!(commands[1].contains("rsync_up"));
}

/// Test: execution failure carries the exact constructed remote command.
#[test]
fn test_execution_failure_carries_exact_command() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::failing_on(" exec ", 1);
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let err = launcher
        .launch(&TaskGraph::single(ws.aws_task("echo hi")))
        .unwrap_err();

    match err {
        Error::Execution { command, code } => {
            assert_eq!(
                command,
                format!(
                    "ray exec {} \"cd /tmp/workdir && : && cd /tmp/workdir && echo hi\"",
                    ws.rendered_config().display()
                )
            );
            assert_eq!(code, 1);
        }
        other => panic!("expected Execution error, got {:?}", other),
    }

    // All three stages were attempted; the failure was the last one
    assert_eq!(runner.call_count(), 3);
}

/// Test: teardown is explicitly unimplemented and runs nothing.
#[test]
fn test_teardown_not_implemented() {
    let ws = TestWorkspace::new();
    let runner = RecordingRunner::ok();
    let launcher = Launcher::new(&ws.config, &ws.registry, &runner);

    let err = launcher
        .teardown(&TaskGraph::single(ws.aws_task("echo hi")))
        .unwrap_err();

    assert!(matches!(err, Error::NotImplemented(_)));
    assert_eq!(runner.call_count(), 0);
}
