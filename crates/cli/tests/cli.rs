use assert_cmd::Command;

#[test]
fn help_succeeds() {
    Command::cargo_bin("biblio")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn subcommand_help_succeeds() {
    for sub in ["books", "users", "loans"] {
        Command::cargo_bin("biblio")
            .unwrap()
            .args([sub, "--help"])
            .assert()
            .success();
    }
}

#[test]
fn unreachable_server_exits_nonzero() {
    Command::cargo_bin("biblio")
        .unwrap()
        .args(["--base-url", "http://127.0.0.1:1/api", "books", "list"])
        .assert()
        .failure();
}
