// core logic - health assistant, static directory, booking and login flows

mod auth;
mod bot;
mod booking;
mod directory;

pub use auth::{OtpChallenge, send_otp};
pub use booking::{PaymentMethod, Receipt, book_appointment, book_service, quote};
pub use bot::HealthBot;
pub use directory::{
    Directory, Doctor, DoctorFilter, Hospital, HospitalFilter, Listing, Service,
};
