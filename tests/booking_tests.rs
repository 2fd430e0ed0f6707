// tests for the simulated booking flow

use medibud::{Directory, Error, PaymentMethod, book_appointment, book_service, quote};

#[test]
fn test_quote_multiplies_by_days() {
    let directory = Directory::new();
    let icu = directory.service(1).unwrap();
    assert_eq!(quote(icu, 1), 15000);
    assert_eq!(quote(icu, 3), 45000);
}

#[test]
fn test_book_service_produces_receipt() {
    let directory = Directory::new();
    let room = directory.service(3).unwrap();

    let receipt = book_service(room, 2, PaymentMethod::Upi).unwrap();
    assert_eq!(receipt.amount, 10000);
    assert!(receipt.reference.starts_with("MB-"));
    assert!(receipt.message.contains("Private Rooms"));
    assert!(receipt.message.contains("UPI"));
}

#[test]
fn test_zero_days_rejected() {
    let directory = Directory::new();
    let room = directory.service(3).unwrap();

    let err = book_service(room, 0, PaymentMethod::Card).unwrap_err();
    assert!(matches!(err, Error::InvalidDuration(0)));
}

#[test]
fn test_absurd_duration_rejected() {
    let directory = Directory::new();
    let room = directory.service(3).unwrap();
    assert!(book_service(room, 5000, PaymentMethod::Card).is_err());
}

#[test]
fn test_appointment_uses_doctor_fee() {
    let directory = Directory::new();
    let doctor = directory.doctor(1).unwrap();

    let receipt = book_appointment(doctor, PaymentMethod::Card).unwrap();
    assert_eq!(receipt.amount, doctor.fee);
    assert!(receipt.message.contains(doctor.name));
}

#[test]
fn test_appointment_rejects_unaccepted_method() {
    let directory = Directory::new();
    // dr. verma only takes card and cash
    let doctor = directory.doctor(2).unwrap();

    let err = book_appointment(doctor, PaymentMethod::Upi).unwrap_err();
    assert!(matches!(err, Error::PaymentNotAccepted { .. }));
}

#[test]
fn test_payment_method_parsing() {
    assert_eq!(PaymentMethod::parse("card").unwrap(), PaymentMethod::Card);
    assert_eq!(PaymentMethod::parse("UPI").unwrap(), PaymentMethod::Upi);
    assert_eq!(
        PaymentMethod::parse("net banking").unwrap(),
        PaymentMethod::NetBanking
    );
    assert_eq!(
        PaymentMethod::parse("netbanking").unwrap(),
        PaymentMethod::NetBanking
    );
    assert!(PaymentMethod::parse("bitcoin").is_err());
}
