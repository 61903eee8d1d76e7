mod common;

use common::TestEnv;
use predicates::str::contains;

fn grade(env: &TestEnv, text: &str) -> String {
    let out = env
        .cmd("readability")
        .write_stdin(format!("{}\n", text))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out)
        .expect("utf8 stdout")
        .trim_start_matches("Text: ")
        .to_string()
}

#[test]
fn labels_reference_passages() {
    let env = TestEnv::new();
    assert_eq!(grade(&env, "One fish. Two fish. Red fish. Blue fish."), "Before Grade 1\n");
    assert_eq!(grade(&env, "Congratulations! Today is your day."), "Grade 6\n");
    assert_eq!(
        grade(&env, "Harry Potter was a highly unusual boy in many ways. For one thing, he hated the summer holidays more than any other time of year. For another, he really wanted to do his homework, but was forced to do it in secret, in the dead of the night. And he also happened to be a wizard."),
        "Grade 5\n"
    );
    assert_eq!(
        grade(&env, "A large class of computational problems involve the determination of properties of graphs, digraphs, integers, arrays of integers, finite families of finite sets, boolean formulas and elements of other countable domains."),
        "Grade 16+\n"
    );
}

#[test]
fn prompt_precedes_result() {
    let env = TestEnv::new();
    env.cmd("readability")
        .write_stdin("Hello\n")
        .assert()
        .success()
        .stdout("Text: Grade 14\n");
}

#[test]
fn blank_text_is_an_error() {
    let env = TestEnv::new();
    for text in ["\n", "    \n"] {
        env.cmd("readability")
            .write_stdin(text)
            .assert()
            .code(1)
            .stdout("Text: ")
            .stderr(contains("text contains no words"));
    }
}

#[test]
fn json_report() {
    let env = TestEnv::new();
    let v = env.run_json("readability", &[], "Congratulations! Today is your day.\n");
    assert_eq!(v["data"]["letters"], 29);
    assert_eq!(v["data"]["words"], 5);
    assert_eq!(v["data"]["sentences"], 2);
    assert_eq!(v["data"]["label"], "Grade 6");
}

#[test]
fn debug_logs_go_to_stderr() {
    let env = TestEnv::new();
    env.cmd("readability")
        .env("DRILLS_LOG", "debug")
        .write_stdin("Hello\n")
        .assert()
        .success()
        .stdout("Text: Grade 14\n")
        .stderr(contains("text scored"));
}

#[test]
fn non_utf8_input_is_rejected() {
    let env = TestEnv::new();
    env.cmd("readability")
        .write_stdin(vec![b'H', b'i', 0xff, b'.', b'\n'])
        .assert()
        .code(1)
        .stderr(contains("IO error"));
}
