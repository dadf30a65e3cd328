use super::Database;
use crate::errors::StoreError;
use crate::models::{Appointment, APPOINTMENT_COLLECTION};

impl Database {
    pub async fn create_appointment(
        &self,
        appointment: &Appointment,
    ) -> Result<String, StoreError> {
        self.insert(APPOINTMENT_COLLECTION, appointment).await
    }
}
