#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_config_path_honors_config_dir_override() {
        let config_dir = tempfile::tempdir().unwrap();
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.env("CONTXT_CONFIG_DIR", config_dir.path())
            .arg("config")
            .arg("path");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(config_dir.path().to_str().unwrap()))
            .stdout(predicate::str::contains("config.yml"));
    }

    #[test]
    fn test_config_set_then_get_round_trips_the_organization() {
        let config_dir = tempfile::tempdir().unwrap();

        let mut set = Command::cargo_bin("contxt").unwrap();
        set.env("CONTXT_CONFIG_DIR", config_dir.path())
            .arg("config")
            .arg("set")
            .arg("--org")
            .arg("org-123");
        set.assert().success();

        let mut get = Command::cargo_bin("contxt").unwrap();
        get.env("CONTXT_CONFIG_DIR", config_dir.path())
            .arg("config")
            .arg("get");
        get.assert()
            .success()
            .stdout(predicate::str::contains("active_organization_id: org-123"));
    }

    #[test]
    fn test_config_set_without_options_warns() {
        let config_dir = tempfile::tempdir().unwrap();
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.env("CONTXT_CONFIG_DIR", config_dir.path())
            .arg("config")
            .arg("set");

        cmd.assert()
            .success()
            .stderr(predicate::str::contains("Nothing to set"));
    }
}
