// simulated booking flow
// computes totals and hands back a fabricated receipt, nothing is persisted

use crate::Error;
use crate::core::{Doctor, Service};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Cash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "netbanking" | "net banking" => Ok(PaymentMethod::NetBanking),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(Error::UnknownPaymentMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub amount: u64,
    pub message: String,
}

// bookings longer than this are handled offline by the care team
const MAX_BOOKING_DAYS: u32 = 90;

pub fn quote(service: &Service, days: u32) -> u64 {
    service.price_per_day * u64::from(days)
}

pub fn book_service(service: &Service, days: u32, method: PaymentMethod) -> Result<Receipt, Error> {
    if days == 0 || days > MAX_BOOKING_DAYS {
        return Err(Error::InvalidDuration(days));
    }

    let amount = quote(service, days);
    Ok(Receipt {
        reference: reference(),
        amount,
        message: format!(
            "Booking confirmed: {} for {} day(s), \u{20b9}{} via {}. You will receive a confirmation shortly.",
            service.title,
            days,
            amount,
            method.name()
        ),
    })
}

pub fn book_appointment(doctor: &Doctor, method: PaymentMethod) -> Result<Receipt, Error> {
    if !doctor.payment_methods.contains(&method.name()) {
        return Err(Error::PaymentNotAccepted {
            method: method.name().to_string(),
            doctor: doctor.name.to_string(),
        });
    }

    Ok(Receipt {
        reference: reference(),
        amount: doctor.fee,
        message: format!(
            "Appointment booked with {} ({}). Consultation fee \u{20b9}{} via {}.",
            doctor.name,
            doctor.specialty,
            doctor.fee,
            method.name()
        ),
    })
}

// fabricated reference, unique enough for a demo
fn reference() -> String {
    format!("MB-{}", chrono::Utc::now().timestamp_millis())
}
