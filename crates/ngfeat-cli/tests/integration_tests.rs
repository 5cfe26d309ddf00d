//! Integration tests for the ngfeat binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `ngfeat` running in `dir` with no user or environment configuration.
fn ngfeat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ngfeat").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("NGFEAT_SCAFFOLD__APP_ROOT")
        .env_remove("NGFEAT_SCAFFOLD__LAYOUT")
        .env_remove("NGFEAT_TEMPLATES__DIR");
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();
    ngfeat(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    ngfeat(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── leaf feature ─────────────────────────────────────────────────────────────

#[test]
fn interactive_leaf_feature() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .write_stdin("widgets\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name feature (camelCase): "))
        .stdout(predicate::str::contains("Is it a nested component? (y/n): "))
        .stdout(predicate::str::contains("Name of the child component").not())
        .stdout(predicate::str::contains(
            "Structure for 'widgets' created successfully.",
        ));

    let root = tmp.path().join("src/app/widgets");
    for dir in ["data", "ui", "feature"] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }
    assert!(read(root.join("data/widgets.service.ts")).contains("export class WidgetsService"));
    assert!(read(root.join("data/widgets.store.ts")).contains("export class WidgetsStore"));
    assert!(
        read(root.join("feature/widgets.component.ts")).contains("export class WidgetsComponent")
    );
    assert!(!root.join("widgets.routes.ts").exists());
}

// ── nested feature, first and second child ───────────────────────────────────

#[test]
fn interactive_nested_feature_then_second_child() {
    let tmp = TempDir::new().unwrap();
    let routes = tmp.path().join("src/app/orders/orders.routes.ts");

    ngfeat(tmp.path())
        .write_stdin("orders\ny\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Structure for 'orders' with nested 'list' created successfully.",
        ));

    let first = read(&routes);
    assert!(first.contains("import { ListComponent } from './list/feature/list.component';"));
    assert!(first.contains("  { path: 'list', component: ListComponent },"));
    for file in [
        "src/app/orders/list/data/list.service.ts",
        "src/app/orders/list/data/list.store.ts",
        "src/app/orders/list/feature/list.component.html",
    ] {
        assert!(tmp.path().join(file).is_file(), "missing {file}");
    }
    assert!(tmp.path().join("src/app/orders/list/ui").is_dir());

    ngfeat(tmp.path())
        .args(["new", "orders", "--nested", "--child", "detail"])
        .assert()
        .success();

    let second = read(&routes);
    let list_at = second.find("path: 'list'").unwrap();
    let detail_at = second.find("path: 'detail'").unwrap();
    assert!(list_at < detail_at);
    for line in first.lines() {
        assert!(second.contains(line), "line changed: {line}");
    }
}

#[test]
fn nested_without_child_writes_no_routes() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .write_stdin("orders\ny\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Structure for 'orders' created successfully.",
        ));

    assert!(tmp.path().join("src/app/orders/data/orders.service.ts").is_file());
    assert!(!tmp.path().join("src/app/orders/orders.routes.ts").exists());
}

#[test]
fn under_feature_layout_from_flag() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .args(["new", "orders", "--nested", "--child", "list", "--layout", "under-feature"])
        .assert()
        .success();

    assert!(
        tmp.path()
            .join("src/app/orders/feature/list/feature/list.component.ts")
            .is_file()
    );
}

#[test]
fn app_root_from_local_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".ngfeat.toml"),
        "[scaffold]\napp_root = \"projects/shop/src/app\"\n",
    )
    .unwrap();

    ngfeat(tmp.path()).args(["new", "cart"]).assert().success();

    assert!(
        tmp.path()
            .join("projects/shop/src/app/cart/data/cart.service.ts")
            .is_file()
    );
}

#[test]
fn app_root_from_environment() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .env("NGFEAT_SCAFFOLD__APP_ROOT", "web/app")
        .args(["new", "cart"])
        .assert()
        .success();

    assert!(tmp.path().join("web/app/cart/feature/cart.component.ts").is_file());
}

// ── dry run / json ───────────────────────────────────────────────────────────

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .args(["new", "orders", "--nested", "--child", "list", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list.component.ts"))
        .stdout(predicate::str::contains("{ path: 'list', component: ListComponent },"));

    assert!(!tmp.path().join("src").exists());
}

#[test]
fn json_report() {
    let tmp = TempDir::new().unwrap();

    let assert = ngfeat(tmp.path())
        .args(["--output-format", "json", "new", "orders", "--nested", "--child", "list"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["routes"]["created"], true);
    assert_eq!(report["routes"]["entries"], 1);
    assert_eq!(report["files"].as_array().unwrap().len(), 7);
}

// ── config / init / completions ──────────────────────────────────────────────

#[test]
fn init_local_then_refuse_overwrite() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path()).args(["init", "--local"]).assert().success();
    let written = read(tmp.path().join(".ngfeat.toml"));
    assert!(written.contains("app_root = \"src/app\""));

    ngfeat(tmp.path())
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    ngfeat(tmp.path())
        .args(["init", "--local", "--force"])
        .assert()
        .success();
}

#[test]
fn config_get_reads_layered_value() {
    let tmp = TempDir::new().unwrap();

    ngfeat(tmp.path())
        .env("NGFEAT_SCAFFOLD__LAYOUT", "under-feature")
        .args(["config", "get", "scaffold.layout"])
        .assert()
        .success()
        .stdout(predicate::str::diff("under-feature\n"));
}

#[test]
fn completions_bash() {
    let tmp = TempDir::new().unwrap();
    ngfeat(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ngfeat"));
}
