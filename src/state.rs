use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::repository::{
    CategoryRepository, QuestionRepository, memory::InMemoryStore, postgres::PgRepository,
};

pub type DynQuestionRepository = Arc<dyn QuestionRepository>;
pub type DynCategoryRepository = Arc<dyn CategoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub questions: DynQuestionRepository,
    pub categories: DynCategoryRepository,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        let repository = Arc::new(PgRepository::new(pool));
        Self {
            questions: repository.clone(),
            categories: repository,
        }
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            questions: store.clone(),
            categories: store,
        }
    }
}

impl FromRef<AppState> for DynQuestionRepository {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for DynCategoryRepository {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}
