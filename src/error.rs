use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please enter a valid OTP")]
    InvalidOtp,

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("{doctor} does not accept {method} payments")]
    PaymentNotAccepted { method: String, doctor: String },

    #[error("Booking duration must be at least 1 day, got {0}")]
    InvalidDuration(u32),

    #[error("No {0} with id {1}")]
    NotFound(&'static str, u32),

    #[error("Server error: {0}")]
    Server(String),
}
