// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fatal entry point tests.
//!
//! Failing calls terminate the process, so each failure scenario re-runs this
//! test binary as a child with `HPI_FATAL_SCENARIO` set and inspects its
//! stdout and exit status.

use std::ffi::{CStr, CString};
use std::process::{Command, Output};

use hpi_dynamic_c::*;

const SCENARIO_VAR: &str = "HPI_FATAL_SCENARIO";
const CONFIG_PATH_VAR: &str = "HPI_TEST_CONFIG_PATH";

fn run_child(test_name: &str, scenario: &str, extra_env: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    let mut cmd = Command::new(exe);
    cmd.args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(SCENARIO_VAR, scenario)
        .env_remove("HPI_RUNTIME_CONFIG");
    for (k, v) in extra_env {
        cmd.env(k, v);
    }
    cmd.output().expect("spawn child test process")
}

fn scenario() -> Option<String> {
    std::env::var(SCENARIO_VAR).ok()
}

unsafe fn trigger(scenario: &str) {
    match scenario {
        "parse" => {
            let text = CString::new("{").unwrap();
            hpi_parse_json(text.as_ptr());
        }
        "cast" => {
            // Differing kinds at differing depth.
            let as_type = hpi_type_new(HpiTypeKind::HpiTypeInt, 1);
            let from_type = hpi_type_new(HpiTypeKind::HpiTypeString, 0);
            hpi_validate_runtime_cast(as_type, from_type);
        }
        "marshal" => {
            let ty = hpi_type_new(HpiTypeKind::HpiTypeBool, 0);
            let value = hpi_any_value_string(CString::new("x").unwrap().as_ptr());
            hpi_marshal_json(ty, value);
        }
        "configured" => {
            assert_eq!(hpi_runtime_init(), HpiError::HpiOk);
            let text = CString::new("[1,").unwrap();
            hpi_parse_json(text.as_ptr());
        }
        "configure_after_cast" => {
            // A cast before configuration must not lock in the defaults.
            let int = hpi_type_new(HpiTypeKind::HpiTypeInt, 0);
            let float = hpi_type_new(HpiTypeKind::HpiTypeFloat, 0);
            hpi_validate_runtime_cast(int, float);

            assert_eq!(hpi_runtime_configure(std::ptr::null()), HpiError::HpiInvalidArgument);
            let path = CString::new(std::env::var(CONFIG_PATH_VAR).unwrap()).unwrap();
            assert_eq!(hpi_runtime_configure(path.as_ptr()), HpiError::HpiOk);
            assert_eq!(hpi_runtime_configure(path.as_ptr()), HpiError::HpiAlreadyInitialized);

            println!("configured");
            hpi_validate_runtime_cast(int, float);
        }
        "logging_before_init" => {
            assert_eq!(hpi_logging_init_env(HpiLogLevel::HpiLogInfo), HpiError::HpiOk);
            // The host's logger stays; runtime init still succeeds.
            assert_eq!(hpi_runtime_init(), HpiError::HpiOk);
            assert_eq!(hpi_logging_init(HpiLogLevel::HpiLogTrace), HpiError::HpiAlreadyInitialized);
        }
        other => panic!("unknown scenario {other}"),
    }
}

#[test]
fn test_parse_failure_exits() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let out = run_child("test_parse_failure_exits", "parse", &[]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Runtime JSON parse error: `"),
        "unexpected stdout: {stdout}"
    );
}

#[test]
fn test_cast_failure_exits() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let out = run_child("test_cast_failure_exits", "cast", &[]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(
            "Runtime error: Unsupported cast: Cannot cast value of type `Zeichenkette` to `Zahl`"
        ),
        "unexpected stdout: {stdout}"
    );
}

#[test]
fn test_marshal_failure_exits() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let out = run_child("test_marshal_failure_exits", "marshal", &[]);
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Runtime JSON marshal error"), "unexpected stdout: {stdout}");
}

#[test]
fn test_configured_exit_code() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runtime.toml");
    std::fs::write(&path, "fatal_exit_code = 3\nlog_level = \"error\"\n").unwrap();

    let path = path.to_string_lossy().into_owned();
    let out = run_child(
        "test_configured_exit_code",
        "configured",
        &[("HPI_RUNTIME_CONFIG", path.as_str())],
    );
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn test_successful_calls_return() {
    if scenario().is_some() {
        return;
    }
    unsafe {
        let text = CString::new(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
        let value = hpi_parse_json(text.as_ptr());
        assert_eq!(hpi_any_value_kind(value), HpiTypeKind::HpiTypeAnyObject);

        let ty = hpi_type_object_new(0);
        let id = CString::new("id").unwrap();
        let tags = CString::new("tags").unwrap();
        hpi_type_object_add_field(ty, id.as_ptr(), hpi_type_new(HpiTypeKind::HpiTypeInt, 0));
        hpi_type_object_add_field(
            ty,
            tags.as_ptr(),
            hpi_type_list_of(hpi_type_new(HpiTypeKind::HpiTypeString, 0), 0),
        );

        let json = hpi_marshal_json(ty, value);
        assert_eq!(
            CStr::from_ptr(json).to_str().unwrap(),
            r#"{"id":7,"tags":["a","b"]}"#
        );
        hpi_string_free(json);

        // Same kind always passes; a record descriptor accepts a boxed record.
        let from = hpi_any_value_type(value);
        hpi_validate_runtime_cast(ty, from);
        let int = hpi_type_new(HpiTypeKind::HpiTypeInt, 0);
        hpi_validate_runtime_cast(int, int);

        hpi_type_destroy(int);
        hpi_type_destroy(from);
        hpi_type_destroy(ty);
        hpi_any_value_destroy(value);
    }
}

#[test]
fn test_configure_selects_structural_policy() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("structural.toml");
    std::fs::write(&path, "cast_policy = \"structural\"\n").unwrap();

    let path = path.to_string_lossy().into_owned();
    let out = run_child(
        "test_configure_selects_structural_policy",
        "configure_after_cast",
        &[(CONFIG_PATH_VAR, path.as_str())],
    );
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("configured\n"), "unexpected stdout: {stdout}");
    assert!(
        stdout.contains(
            "Runtime error: Unsupported cast: Cannot cast value of type `Fließkommazahl` to `Zahl`"
        ),
        "unexpected stdout: {stdout}"
    );
}

#[test]
fn test_host_logger_survives_runtime_init() {
    if let Some(s) = scenario() {
        unsafe { trigger(&s) };
        return;
    }
    let out = run_child("test_host_logger_survives_runtime_init", "logging_before_init", &[]);
    assert!(
        out.status.success(),
        "child failed: {}",
        String::from_utf8_lossy(&out.stdout)
    );
}
