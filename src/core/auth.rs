// fake otp login flow
// no sms, no real verification - the code is derived from the phone number
// so the demo round-trips deterministically

use crate::Error;

#[derive(Debug)]
pub struct OtpChallenge {
    phone: String,
    code: String,
}

pub fn send_otp(phone: &str) -> Result<OtpChallenge, Error> {
    let phone = phone.trim();
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidPhone);
    }

    Ok(OtpChallenge {
        phone: phone.to_string(),
        code: derive_code(phone),
    })
}

impl OtpChallenge {
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// What the "sms" would have said. The tui login popup shows it so the
    /// demo flow can actually be completed.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn verify(&self, otp: &str) -> Result<(), Error> {
        let otp = otp.trim();
        if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidOtp);
        }
        if otp != self.code {
            return Err(Error::InvalidOtp);
        }
        Ok(())
    }
}

fn derive_code(phone: &str) -> String {
    let sum: u64 = phone.bytes().map(|b| u64::from(b - b'0')).sum();
    // spread the digit sum into a stable six digit code
    format!("{:06}", (sum * 13_579 + 24_680) % 1_000_000)
}
