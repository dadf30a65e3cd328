use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{choice, present, required_text, Validate};
use crate::errors::ValidationError;

pub const APPOINTMENT_COLLECTION: &str = "appointment";

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ServiceType {
    #[serde(rename = "APK")]
    Apk,
    #[serde(rename = "Auto onderhoud")]
    AutoOnderhoud,
    #[serde(rename = "Diagnose")]
    Diagnose,
    #[serde(rename = "Tractorreparatie")]
    Tractorreparatie,
    #[serde(rename = "Hydrauliek")]
    Hydrauliek,
    #[serde(rename = "Onderhoud op locatie")]
    OnderhoudOpLocatie,
    #[default]
    #[serde(rename = "Overig")]
    Overig,
}

impl ServiceType {
    pub const ALL: [ServiceType; 7] = [
        ServiceType::Apk,
        ServiceType::AutoOnderhoud,
        ServiceType::Diagnose,
        ServiceType::Tractorreparatie,
        ServiceType::Hydrauliek,
        ServiceType::OnderhoudOpLocatie,
        ServiceType::Overig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Apk => "APK",
            ServiceType::AutoOnderhoud => "Auto onderhoud",
            ServiceType::Diagnose => "Diagnose",
            ServiceType::Tractorreparatie => "Tractorreparatie",
            ServiceType::Hydrauliek => "Hydrauliek",
            ServiceType::OnderhoudOpLocatie => "Onderhoud op locatie",
            ServiceType::Overig => "Overig",
        }
    }
}

impl AsRef<str> for ServiceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An appointment request from the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    /// Customer name
    pub name: String,
    /// Phone number
    pub phone: String,
    pub email: Option<String>,
    pub service_type: ServiceType,
    /// Preferred date, free text
    pub preferred_date: Option<String>,
    /// Short explanation or licence plate
    pub message: Option<String>,
}

/// Incoming body for `POST /api/appointments`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AppointmentPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// One of the fixed service types (default Overig)
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub service_type: Option<Option<String>>,
    pub preferred_date: Option<String>,
    pub message: Option<String>,
}

impl Validate for Appointment {
    type Payload = AppointmentPayload;

    fn validate(payload: AppointmentPayload) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let name = required_text(&mut errors, "name", payload.name, MIN_NAME_CHARS);
        let phone = required_text(&mut errors, "phone", payload.phone, MIN_PHONE_CHARS);
        let service_type = choice(
            &mut errors,
            "service_type",
            payload.service_type,
            &ServiceType::ALL,
        );

        errors.into_result()?;

        Ok(Appointment {
            name: name.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            email: payload.email,
            service_type: service_type.unwrap_or_default(),
            preferred_date: payload.preferred_date,
            message: payload.message,
        })
    }
}
