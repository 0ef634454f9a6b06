#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    use assert_cmd::Command;

    tests! {
        empty_file in misc is OK
    }

    tests! {
        pure_expressions in misc is OK
    }

    tests! {
        precedence in misc is OK
        "14"
        "8"
        "4"
        "0"
        "true"
        "true"
        "true"
        "true"
        "0"
        "0"
        "4"
    }

    tests! {
        argument_order in misc is OK
        "a"
        "b"
        "c"
        "6"
    }

    tests! {
        clock in misc is OK
        "true"
        "true"
    }

    tests! {
        unexpected_character in misc is ERR
        "[line 3] Error: Unexpected character '&'."
    }

    #[test]
    fn usage_exit_code() {
        Command::cargo_bin("lox").unwrap()
            .args(["one.lox", "two.lox"])
            .assert()
            .stdout("Usage: lox [script]\n")
            .code(64);
    }

    #[test]
    fn syntax_error_exit_code() {
        Command::cargo_bin("lox").unwrap()
            .arg("tests/target/assignment/grouping.lox")
            .assert()
            .code(65);
    }

    #[test]
    fn runtime_error_exit_code() {
        Command::cargo_bin("lox").unwrap()
            .arg("tests/target/operator/subtract_nonnum.lox")
            .assert()
            .code(70);
    }
}
