use crate::{
    database::DocumentStore,
    models::{AddFunFactRequest, FunFact},
    utils::error::AppError,
};

/// Number of facts returned by each random lookup
pub const SAMPLE_SIZE: usize = 2;

/// GET /getFunFact - Amostra aleatória; coleção vazia retorna lista vazia
pub async fn random_fun_facts(db: &dyn DocumentStore) -> Result<Vec<FunFact>, AppError> {
    db.sample_fun_facts(SAMPLE_SIZE).await
}

/// POST /addFunFact
pub async fn add_fun_fact(db: &dyn DocumentStore, request: AddFunFactRequest) -> Result<FunFact, AppError> {
    let fact = match request.fact {
        Some(fact) if !fact.trim().is_empty() => fact,
        _ => return Err(AppError::Validation("A fun fact is required".into())),
    };

    let saved = db.insert_fun_fact(FunFact { id: None, fact }).await?;

    log::info!("✅ Fun fact saved: {:?}", saved.id);
    Ok(saved)
}
