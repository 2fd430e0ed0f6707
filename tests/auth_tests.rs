// tests for the fake otp login flow

use medibud::{Error, send_otp};

#[test]
fn test_valid_phone_gets_challenge() {
    let challenge = send_otp("9876543210").unwrap();
    assert_eq!(challenge.phone(), "9876543210");
    assert_eq!(challenge.code().len(), 6);
    assert!(challenge.code().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_short_phone_rejected() {
    assert!(matches!(send_otp("12345").unwrap_err(), Error::InvalidPhone));
}

#[test]
fn test_non_digit_phone_rejected() {
    assert!(send_otp("98765abc10").is_err());
    assert!(send_otp("+919876543210").is_err());
}

#[test]
fn test_phone_is_trimmed() {
    assert!(send_otp(" 9876543210 ").is_ok());
}

#[test]
fn test_verify_round_trip() {
    let challenge = send_otp("9876543210").unwrap();
    let code = challenge.code().to_string();
    assert!(challenge.verify(&code).is_ok());
}

#[test]
fn test_wrong_code_rejected() {
    let challenge = send_otp("9876543210").unwrap();
    let mut wrong = challenge.code().to_string();
    // flip the last digit
    let last = wrong.pop().unwrap();
    wrong.push(if last == '0' { '1' } else { '0' });
    assert!(matches!(challenge.verify(&wrong).unwrap_err(), Error::InvalidOtp));
}

#[test]
fn test_otp_must_be_six_digits() {
    let challenge = send_otp("9876543210").unwrap();
    assert!(challenge.verify("123").is_err());
    assert!(challenge.verify("abcdef").is_err());
}

#[test]
fn test_challenge_is_debuggable() {
    // unwrap_err/assert output needs Debug on the challenge
    let challenge = send_otp("9876543210").unwrap();
    let dump = format!("{challenge:?}");
    assert!(dump.contains("OtpChallenge"));
}

#[test]
fn test_errors_surface_as_diagnostics() {
    // the cli converts Error into a miette report with `?`
    let err = send_otp("123").unwrap_err();
    let report = miette::Report::new(err);
    assert!(report.to_string().contains("phone number"));
}

#[test]
fn test_same_phone_same_code() {
    // demo codes are deterministic per phone
    let a = send_otp("9876543210").unwrap();
    let b = send_otp("9876543210").unwrap();
    assert_eq!(a.code(), b.code());
}
