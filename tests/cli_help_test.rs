#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_top_level_help_lists_command_topics() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("auth"))
            .stdout(predicate::str::contains("org"))
            .stdout(predicate::str::contains("asset"))
            .stdout(predicate::str::contains("facility"))
            .stdout(predicate::str::contains("iot"))
            .stdout(predicate::str::contains("ems"));
    }

    #[test]
    fn test_facility_list_help_shows_projection_options() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("facility").arg("list").arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("--fields"))
            .stdout(predicate::str::contains("--sort"))
            .stdout(predicate::str::contains("--format"));
    }

    #[test]
    fn test_ems_spend_help_shows_date_options() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("ems").arg("spend").arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("--start"))
            .stdout(predicate::str::contains("--end"))
            .stdout(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_auth_login_help() {
        let mut cmd = Command::cargo_bin("contxt").unwrap();
        cmd.arg("auth").arg("login").arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("--client-id"))
            .stdout(predicate::str::contains("--client-secret"));
    }
}
