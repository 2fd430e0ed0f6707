// medibud library - healthcare resource discovery for the terminal

pub mod cli;
mod core;
mod error;
mod output;
mod server;
pub mod tui;

pub use core::{
    Directory, Doctor, DoctorFilter, HealthBot, Hospital, HospitalFilter, Listing, OtpChallenge,
    PaymentMethod, Receipt, Service, book_appointment, book_service, quote, send_otp,
};
pub use error::Error;
pub use server::Server;
