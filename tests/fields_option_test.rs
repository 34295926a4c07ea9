#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_unknown_field_token_is_rejected_before_any_request() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("facility")
            .arg("list")
            .arg("--fields")
            .arg("id,zip");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("'zip' is not valid"))
            .stderr(predicate::str::contains("Choose from"));
    }

    #[test]
    fn test_invalid_date_is_rejected_before_any_request() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("ems")
            .arg("spend")
            .arg("--facility")
            .arg("42")
            .arg("--start")
            .arg("03/09/2024");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Expected format: YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("org").arg("list").arg("--format").arg("xml");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("invalid value 'xml'"));
    }

    #[test]
    fn test_commands_require_credentials() {
        let config_dir = tempfile::tempdir().unwrap();
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.env("CONTXT_CONFIG_DIR", config_dir.path())
            .arg("org")
            .arg("list");

        cmd.assert()
            .failure()
            .code(100)
            .stderr(predicate::str::contains("no stored credentials"));
    }
}
