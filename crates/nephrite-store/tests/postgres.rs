//! Live CRUD against a real Postgres instance.
//!
//! Requires `DATABASE_URL` pointing at a database this role can create
//! tables in.
//!
//! Run with: `cargo test -p nephrite-store --test postgres -- --ignored`

use jiff::Timestamp;
use uuid::Uuid;

use nephrite_core::models::patient::Patient;
use nephrite_store::error::StoreError;
use nephrite_store::postgres::PostgresStore;
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

#[tokio::test]
#[ignore]
async fn patient_crud_round_trips_through_postgres() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = PostgresStore::connect(&url).await.expect("connect");

    let mut patient = sample_patient();
    store.create_patient(patient.clone()).await.unwrap();

    let fetched = store.get_patient(patient.id).await.unwrap();
    assert_eq!(fetched, patient);

    patient.weight_kg = Some(71.2);
    store.update_patient(patient.clone()).await.unwrap();
    assert_eq!(
        store.get_patient(patient.id).await.unwrap().weight_kg,
        Some(71.2)
    );

    store.delete_patient(patient.id).await.unwrap();
    assert!(matches!(
        store.get_patient(patient.id).await,
        Err(StoreError::NotFound { .. })
    ));
}
