use jiff::Timestamp;
use uuid::Uuid;

use nephrite_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use nephrite_core::models::doctor::Doctor;
use nephrite_core::models::patient::Patient;
use nephrite_store::error::StoreError;
use nephrite_store::memory::MemoryStore;
use nephrite_store::store::RecordStore;

fn sample_patient() -> Patient {
    let now = Timestamp::now();
    Patient {
        id: Uuid::new_v4(),
        full_name: "Alex Rivera".to_string(),
        email: "alex@example.test".to_string(),
        blood_type: Some("O+".to_string()),
        allergies: None,
        chronic_conditions: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        height_cm: Some(172.0),
        weight_kg: Some(70.5),
        created_at: now,
        updated_at: now,
    }
}

fn sample_doctor() -> Doctor {
    let now = Timestamp::now();
    Doctor {
        id: Uuid::new_v4(),
        full_name: "Dana Okafor".to_string(),
        email: "dana@example.test".to_string(),
        license_number: "MD-44871".to_string(),
        specialization: "Urology".to_string(),
        qualifications: Some("MD, FACS".to_string()),
        experience_years: 12,
        consultation_fee: 150.0,
        hospital_department: Some("Nephrology".to_string()),
        is_available: true,
        created_at: now,
        updated_at: now,
    }
}

fn sample_appointment(patient_id: Uuid, doctor_id: Uuid) -> Appointment {
    let now = Timestamp::now();
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        doctor_id,
        kind: AppointmentType::Consultation,
        status: AppointmentStatus::Scheduled,
        scheduled_at: now,
        duration_minutes: 30,
        is_virtual: false,
        meeting_link: None,
        location: Some("Clinic room 4".to_string()),
        reason_for_visit: Some("Flank pain, suspected stone".to_string()),
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn patient_crud_round_trips() {
    let store = MemoryStore::new();
    let mut patient = sample_patient();
    store.create_patient(patient.clone()).await.unwrap();

    let fetched = store.get_patient(patient.id).await.unwrap();
    assert_eq!(fetched, patient);

    patient.blood_type = Some("AB-".to_string());
    store.update_patient(patient.clone()).await.unwrap();
    assert_eq!(
        store.get_patient(patient.id).await.unwrap().blood_type.as_deref(),
        Some("AB-")
    );

    assert_eq!(store.list_patients().await.unwrap().len(), 1);

    store.delete_patient(patient.id).await.unwrap();
    assert!(matches!(
        store.get_patient(patient.id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(store.list_patients().await.unwrap().is_empty());
}

#[tokio::test]
async fn doctor_crud_round_trips() {
    let store = MemoryStore::new();
    let mut doctor = sample_doctor();
    store.create_doctor(doctor.clone()).await.unwrap();

    doctor.is_available = false;
    store.update_doctor(doctor.clone()).await.unwrap();
    assert!(!store.get_doctor(doctor.id).await.unwrap().is_available);

    store.delete_doctor(doctor.id).await.unwrap();
    assert!(store.list_doctors().await.unwrap().is_empty());
}

#[tokio::test]
async fn appointment_status_updates_persist() {
    let store = MemoryStore::new();
    let patient = sample_patient();
    let doctor = sample_doctor();
    let mut appointment = sample_appointment(patient.id, doctor.id);

    store.create_appointment(appointment.clone()).await.unwrap();
    appointment.status = AppointmentStatus::Confirmed;
    store.update_appointment(appointment.clone()).await.unwrap();

    let fetched = store.get_appointment(appointment.id).await.unwrap();
    assert_eq!(fetched.status, AppointmentStatus::Confirmed);
    assert_eq!(fetched.patient_id, patient.id);
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();
    assert!(matches!(
        store.get_doctor(id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_appointment(id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_patient(sample_patient()).await,
        Err(StoreError::NotFound { .. })
    ));
}
