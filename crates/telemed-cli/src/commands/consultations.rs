use anyhow::{anyhow, Result};

use telemed_client::{AccessPolicy, ApiClient, SessionStore};

use super::require;
use crate::render::print_consultations;

/// Patient-side history: the whole record, or the single note behind one
/// completed appointment.
pub async fn cmd_consultation_history(
    client: &ApiClient,
    store: &SessionStore,
    appointment: Option<i64>,
) -> Result<()> {
    require(store, AccessPolicy::PatientsOnly)?;

    let consultations = match appointment {
        Some(appointment_id) => client
            .get_consultation_by_appointment(appointment_id)
            .await
            .map(|c| vec![c]),
        None => client.get_consultation_history(None).await,
    }
    .map_err(|_| anyhow!("Failed to load consultation history"))?;

    if consultations.is_empty() {
        println!("No consultations found.");
        return Ok(());
    }
    print_consultations(&consultations);
    Ok(())
}
