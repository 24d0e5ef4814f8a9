use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxSavedJobRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAppliedJobRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}
