use async_trait::async_trait;
use uuid::Uuid;

use nephrite_core::models::appointment::Appointment;
use nephrite_core::models::doctor::Doctor;
use nephrite_core::models::patient::Patient;

use crate::error::StoreError;

/// CRUD boundary over clinic records, keyed by opaque ids.
/// Implementations own their own locking. `get`, `update`, and `delete`
/// of an absent id are `NotFound`, never silent no-ops.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError>;
    async fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError>;
    async fn create_patient(&self, patient: Patient) -> Result<(), StoreError>;
    async fn update_patient(&self, patient: Patient) -> Result<(), StoreError>;
    async fn delete_patient(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list_doctors(&self) -> Result<Vec<Doctor>, StoreError>;
    async fn get_doctor(&self, id: Uuid) -> Result<Doctor, StoreError>;
    async fn create_doctor(&self, doctor: Doctor) -> Result<(), StoreError>;
    async fn update_doctor(&self, doctor: Doctor) -> Result<(), StoreError>;
    async fn delete_doctor(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError>;
    async fn get_appointment(&self, id: Uuid) -> Result<Appointment, StoreError>;
    async fn create_appointment(&self, appointment: Appointment) -> Result<(), StoreError>;
    async fn update_appointment(&self, appointment: Appointment) -> Result<(), StoreError>;
    async fn delete_appointment(&self, id: Uuid) -> Result<(), StoreError>;
}
