#![allow(dead_code)]

use std::sync::Arc;

use auth::HashCost;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::grpc::AuthGrpcService;
use auth_service::outbound::database;
use auth_service::outbound::repositories::SqliteStorage;
use chrono::Duration;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";
pub const OTHER_APP_ID: i32 = 2;
pub const OTHER_APP_SECRET: &str = "other-test-secret";
pub const TOKEN_TTL_SECONDS: i64 = 3600;

pub type TestAuthService = AuthService<SqliteStorage, SqliteStorage, SqliteStorage>;

/// Auth service wired to a fresh in-memory database
pub struct TestApp {
    pub grpc: AuthGrpcService<TestAuthService>,
    pub db: TestDb,
    pub token_issuer: TokenIssuer,
}

/// Test database helper
pub struct TestDb {
    pub pool: SqlitePool,
}

impl TestApp {
    /// Build the service stack on top of a migrated, seeded database
    pub async fn spawn() -> Self {
        let db = TestDb::new().await;
        db.seed_apps().await;

        let storage = Arc::new(SqliteStorage::new(db.pool.clone()));
        let token_issuer = TokenIssuer::new(Duration::seconds(TOKEN_TTL_SECONDS));

        // Cheap work factor keeps the suite fast
        let password_hasher = PasswordHasher::with_cost(HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to create password hasher");

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&storage),
            Arc::clone(&storage),
            Arc::clone(&storage),
            password_hasher,
            token_issuer.clone(),
        ));

        Self {
            grpc: AuthGrpcService::new(auth_service),
            db,
            token_issuer,
        }
    }
}

impl TestDb {
    /// Create a new in-memory database with migrations applied
    pub async fn new() -> Self {
        // A single long-lived connection: every in-memory connection is its own database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Provision the applications tests log into
    pub async fn seed_apps(&self) {
        sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?, ?, ?), (?, ?, ?)")
            .bind(APP_ID)
            .bind("test")
            .bind(APP_SECRET)
            .bind(OTHER_APP_ID)
            .bind("other")
            .bind(OTHER_APP_SECRET)
            .execute(&self.pool)
            .await
            .expect("Failed to seed apps");
    }

    pub async fn count_users(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }

    pub async fn make_admin(&self, user_id: i64) {
        sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("Failed to grant admin");
    }
}
