#![allow(missing_docs)]
use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn caesar_round_trips_on_stdout() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "caesar", "Hello, World!", "--key", "3"])
        .assert()
        .success()
        .stdout("Khoor, Zruog!\n");

    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["decrypt", "caesar", "Khoor, Zruog!", "--key", "3"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn playfair_round_trips_through_files() {
    // 1. Write the plaintext to a file
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let encrypted_path = temp_dir.path().join("encrypted.txt");
    fs::write(&input_path, "hide the gold in the tree stump").unwrap();

    // 2. Encrypt the file
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .arg("encrypt")
        .arg("playfair")
        .arg("--key")
        .arg("playfair example")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&encrypted_path)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&encrypted_path).unwrap(),
        "BMODZBXDNABEKUDMUIXMMOUVIF"
    );

    // 3. Decrypt it again; fillers from preparation stay in place
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .arg("decrypt")
        .arg("playfair")
        .arg("--key")
        .arg("playfair example")
        .arg("--input")
        .arg(&encrypted_path)
        .assert()
        .success()
        .stdout("HIDETHEGOLDINTHETREXESTUMP\n");
}

#[test]
fn vigenere_without_letters_in_the_key_fails() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "vigenere", "HELLO", "--key", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "key must contain at least one letter",
        ));
}

#[test]
fn missing_key_is_reported_per_family() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "caesar", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs --key <SHIFT>"));
}

#[test]
fn hill_rejects_a_non_2x2_key_shape() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "hill", "HELP", "--key", "3 3 3;2 5 7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key matrix must be 2x2"));
}

#[test]
fn hill_reports_a_singular_key_on_decryption() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["decrypt", "hill", "ABCD", "--key", "2 4;1 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matrix not invertible modulo 26"));
}

#[test]
fn generated_hill_keys_are_accepted_back() {
    // 1. Generate a key
    let output = Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["keygen", "hill"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let key = String::from_utf8(output.stdout).unwrap().trim().to_string();

    // 2. Encrypt with it
    let encrypted = Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "hill", "SECRET", "--key", &key])
        .output()
        .unwrap();
    assert!(encrypted.status.success());
    let ciphertext = String::from_utf8(encrypted.stdout)
        .unwrap()
        .trim()
        .to_string();

    // 3. Decrypt back to the (even-length) plaintext
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["decrypt", "hill", &ciphertext, "--key", &key])
        .assert()
        .success()
        .stdout("SECRET\n");
}

#[test]
fn keygen_phrase_honours_the_requested_length() {
    let output = Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["keygen", "vigenere", "--length", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let phrase = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert_eq!(phrase.len(), 12);
    assert!(phrase.chars().all(|ch| ch.is_ascii_uppercase()));
}

#[test]
fn keygen_refuses_the_keyless_family() {
    Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["keygen", "atbash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("keyless"));
}

#[test]
fn json_output_is_parseable() {
    let output = Command::cargo_bin("ciphers-cli")
        .unwrap()
        .args(["encrypt", "atbash", "ABC", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["cipher"], "atbash");
    assert_eq!(record["mode"], "encrypt");
    assert_eq!(record["output"], "ZYX");
}
