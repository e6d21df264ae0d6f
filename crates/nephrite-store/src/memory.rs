//! In-memory store used by tests and database-less local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use nephrite_core::models::appointment::Appointment;
use nephrite_core::models::doctor::Doctor;
use nephrite_core::models::patient::Patient;

use crate::error::StoreError;
use crate::store::RecordStore;

#[derive(Default)]
pub struct MemoryStore {
    patients: RwLock<HashMap<Uuid, Patient>>,
    doctors: RwLock<HashMap<Uuid, Doctor>>,
    appointments: RwLock<HashMap<Uuid, Appointment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        Ok(self.patients.read().await.values().cloned().collect())
    }

    async fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError> {
        self.patients
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create_patient(&self, patient: Patient) -> Result<(), StoreError> {
        self.patients.write().await.insert(patient.id, patient);
        Ok(())
    }

    async fn update_patient(&self, patient: Patient) -> Result<(), StoreError> {
        let mut patients = self.patients.write().await;
        if !patients.contains_key(&patient.id) {
            return Err(StoreError::NotFound { id: patient.id });
        }
        patients.insert(patient.id, patient);
        Ok(())
    }

    async fn delete_patient(&self, id: Uuid) -> Result<(), StoreError> {
        self.patients
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, StoreError> {
        Ok(self.doctors.read().await.values().cloned().collect())
    }

    async fn get_doctor(&self, id: Uuid) -> Result<Doctor, StoreError> {
        self.doctors
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create_doctor(&self, doctor: Doctor) -> Result<(), StoreError> {
        self.doctors.write().await.insert(doctor.id, doctor);
        Ok(())
    }

    async fn update_doctor(&self, doctor: Doctor) -> Result<(), StoreError> {
        let mut doctors = self.doctors.write().await;
        if !doctors.contains_key(&doctor.id) {
            return Err(StoreError::NotFound { id: doctor.id });
        }
        doctors.insert(doctor.id, doctor);
        Ok(())
    }

    async fn delete_doctor(&self, id: Uuid) -> Result<(), StoreError> {
        self.doctors
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        Ok(self.appointments.read().await.values().cloned().collect())
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Appointment, StoreError> {
        self.appointments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create_appointment(&self, appointment: Appointment) -> Result<(), StoreError> {
        self.appointments
            .write()
            .await
            .insert(appointment.id, appointment);
        Ok(())
    }

    async fn update_appointment(&self, appointment: Appointment) -> Result<(), StoreError> {
        let mut appointments = self.appointments.write().await;
        if !appointments.contains_key(&appointment.id) {
            return Err(StoreError::NotFound { id: appointment.id });
        }
        appointments.insert(appointment.id, appointment);
        Ok(())
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), StoreError> {
        self.appointments
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
