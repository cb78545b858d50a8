use chrono::{Local, Months, NaiveDate};
use log::{info, warn};

use crate::api::VoterService;
use crate::error::{Error, Result};
use crate::model::{Cin, Voter};

use super::Notice;

/// Years a voter must have been alive for.
const MINIMUM_AGE: u32 = 18;

const DUPLICATE_CIN_MESSAGE: &str = "This CIN is already registered.";

/// The six fields a would-be voter fills in, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub cin: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO date, e.g. `1990-04-02`.
    pub date_of_birth: String,
    pub address: String,
}

impl RegistrationForm {
    /// Shape-check the form and build the record to submit, without touching
    /// the network. The registry stays authoritative; this only refuses
    /// requests that cannot possibly succeed. New voters start active and
    /// with no vote cast.
    pub fn validate(&self) -> Result<Voter> {
        self.validate_at(Local::now().date_naive())
    }

    fn validate_at(&self, today: NaiveDate) -> Result<Voter> {
        for (value, label) in [
            (&self.cin, "CIN"),
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.email, "email"),
            (&self.date_of_birth, "date of birth"),
            (&self.address, "address"),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid(format!("The {label} field is required")));
            }
        }

        let cin: Cin = self.cin.parse().map_err(|err| Error::invalid(format!("{err}")))?;

        if !self.email.contains('@') {
            return Err(Error::invalid(format!(
                "`{}` is not a valid email address",
                self.email
            )));
        }

        let date_of_birth: NaiveDate = self.date_of_birth.parse().map_err(|_| {
            Error::invalid(format!(
                "`{}` is not a valid date (expected YYYY-MM-DD)",
                self.date_of_birth
            ))
        })?;
        let latest_allowed = today
            .checked_sub_months(Months::new(12 * MINIMUM_AGE))
            .unwrap_or(today);
        if date_of_birth > latest_allowed {
            return Err(Error::invalid(format!(
                "You must be at least {MINIMUM_AGE} years old to register"
            )));
        }

        Ok(Voter {
            cin,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            date_of_birth,
            address: self.address.trim().to_string(),
            is_active: true,
            has_voted: false,
        })
    }
}

/// Registration flow: one form, at most one POST per submit, one notice.
pub struct RegistrationFlow {
    registry: VoterService,
    form: RegistrationForm,
}

impl RegistrationFlow {
    pub fn new(registry: VoterService) -> Self {
        Self {
            registry,
            form: RegistrationForm::default(),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    /// Validate and submit the form. On success the form is cleared and the
    /// notice greets the new voter by first name; on failure the form is
    /// left as typed so it can be corrected and resubmitted. A rejection
    /// that looks like the CIN unique index gets the dedicated message.
    pub async fn submit(&mut self) -> Notice {
        let voter = match self.form.validate() {
            Ok(voter) => voter,
            Err(err) => return Notice::error(err.to_string()),
        };

        match self.registry.register(&voter).await {
            Ok(()) => {
                info!("Registered voter {}", voter.cin);
                let notice = Notice::success(format!(
                    "Registration complete, welcome {}! You can now cast your vote.",
                    voter.first_name
                ));
                self.form = RegistrationForm::default();
                notice
            }
            Err(err) if err.is_duplicate_cin() => {
                warn!("Registration rejected, CIN {} already taken", voter.cin);
                Notice::error(DUPLICATE_CIN_MESSAGE)
            }
            Err(err) => {
                warn!("Registration failed: {err}");
                Notice::error(err.to_string())
            }
        }
    }
}
