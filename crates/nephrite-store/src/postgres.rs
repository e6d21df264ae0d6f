//! Postgres-backed record store. Records are stored as serialized JSON
//! documents keyed by id, one table per entity; the schema is
//! bootstrapped on connect.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio_postgres::{Client, NoTls};
use tracing::error;
use uuid::Uuid;

use nephrite_core::models::appointment::Appointment;
use nephrite_core::models::doctor::Doctor;
use nephrite_core::models::patient::Patient;

use crate::error::StoreError;
use crate::store::RecordStore;

const TABLES: &[&str] = &["patients", "doctors", "appointments"];

pub struct PostgresStore {
    client: Mutex<Client>,
}

impl PostgresStore {
    /// Connect and bootstrap the schema. The connection driver is spawned
    /// onto the runtime; dropping the store ends it.
    pub async fn connect(conn_str: &str) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(conn_str, NoTls)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("postgres connection error: {e}");
            }
        });

        for table in TABLES {
            let sql =
                format!("CREATE TABLE IF NOT EXISTS {table} (id UUID PRIMARY KEY, data BYTEA NOT NULL)");
            client
                .execute(sql.as_str(), &[])
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        Ok(PostgresStore {
            client: Mutex::new(client),
        })
    }
}

async fn fetch_all<T: DeserializeOwned>(
    client: &Client,
    table: &str,
) -> Result<Vec<T>, StoreError> {
    let sql = format!("SELECT data FROM {table}");
    let rows = client
        .query(sql.as_str(), &[])
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;
    rows.iter()
        .map(|row| {
            let data: Vec<u8> = row.get(0);
            serde_json::from_slice(&data).map_err(StoreError::from)
        })
        .collect()
}

async fn fetch_one<T: DeserializeOwned>(
    client: &Client,
    table: &str,
    id: Uuid,
) -> Result<T, StoreError> {
    let sql = format!("SELECT data FROM {table} WHERE id = $1");
    let rows = client
        .query(sql.as_str(), &[&id])
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;
    let row = rows.first().ok_or(StoreError::NotFound { id })?;
    let data: Vec<u8> = row.get(0);
    Ok(serde_json::from_slice(&data)?)
}

async fn insert<T: Serialize>(
    client: &Client,
    table: &str,
    id: Uuid,
    record: &T,
) -> Result<(), StoreError> {
    let data = serde_json::to_vec(record)?;
    let sql = format!("INSERT INTO {table} (id, data) VALUES ($1, $2)");
    client
        .execute(sql.as_str(), &[&id, &data])
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;
    Ok(())
}

async fn update<T: Serialize>(
    client: &Client,
    table: &str,
    id: Uuid,
    record: &T,
) -> Result<(), StoreError> {
    let data = serde_json::to_vec(record)?;
    let sql = format!("UPDATE {table} SET data = $2 WHERE id = $1");
    let updated = client
        .execute(sql.as_str(), &[&id, &data])
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;
    if updated == 0 {
        return Err(StoreError::NotFound { id });
    }
    Ok(())
}

async fn remove(client: &Client, table: &str, id: Uuid) -> Result<(), StoreError> {
    let sql = format!("DELETE FROM {table} WHERE id = $1");
    let deleted = client
        .execute(sql.as_str(), &[&id])
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;
    if deleted == 0 {
        return Err(StoreError::NotFound { id });
    }
    Ok(())
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        let client = self.client.lock().await;
        fetch_all(&client, "patients").await
    }

    async fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError> {
        let client = self.client.lock().await;
        fetch_one(&client, "patients", id).await
    }

    async fn create_patient(&self, patient: Patient) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        insert(&client, "patients", patient.id, &patient).await
    }

    async fn update_patient(&self, patient: Patient) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        update(&client, "patients", patient.id, &patient).await
    }

    async fn delete_patient(&self, id: Uuid) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        remove(&client, "patients", id).await
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, StoreError> {
        let client = self.client.lock().await;
        fetch_all(&client, "doctors").await
    }

    async fn get_doctor(&self, id: Uuid) -> Result<Doctor, StoreError> {
        let client = self.client.lock().await;
        fetch_one(&client, "doctors", id).await
    }

    async fn create_doctor(&self, doctor: Doctor) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        insert(&client, "doctors", doctor.id, &doctor).await
    }

    async fn update_doctor(&self, doctor: Doctor) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        update(&client, "doctors", doctor.id, &doctor).await
    }

    async fn delete_doctor(&self, id: Uuid) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        remove(&client, "doctors", id).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        let client = self.client.lock().await;
        fetch_all(&client, "appointments").await
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Appointment, StoreError> {
        let client = self.client.lock().await;
        fetch_one(&client, "appointments", id).await
    }

    async fn create_appointment(&self, appointment: Appointment) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        insert(&client, "appointments", appointment.id, &appointment).await
    }

    async fn update_appointment(&self, appointment: Appointment) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        update(&client, "appointments", appointment.id, &appointment).await
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        remove(&client, "appointments", id).await
    }
}
