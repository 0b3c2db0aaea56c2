pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::notifier;
pub use modules::profile;
pub use modules::recommendation;

use crate::auth::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::profile::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::outgoing::resume_storage_local::LocalResumeStorage;
use crate::profile::use_cases::{
    create_profile::{CreateProfileUseCase, ICreateProfileUseCase},
    delete_resume::{DeleteResumeUseCase, IDeleteResumeUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
    upload_resume::{IUploadResumeUseCase, UploadResumeUseCase},
};

use crate::notifier::deadline_notifier::DeadlineNotifier;
use crate::notifier::outgoing::sms_log_sender::SmsLogSender;
use crate::recommendation::domain::candidate_pool::CandidatePool;
use crate::recommendation::domain::catalog::job_catalog;
use crate::recommendation::use_cases::recommend_jobs::{
    IRecommendJobsUseCase, RecommendJobsUseCase,
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user: Arc<dyn IRegisterUserUseCase>,
    pub login_user: Arc<dyn ILoginUserUseCase>,
    pub logout_user: Arc<dyn ILogoutUseCase>,
    pub create_profile: Arc<dyn ICreateProfileUseCase>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase>,
    pub upload_resume: Arc<dyn IUploadResumeUseCase>,
    pub delete_resume: Arc<dyn IDeleteResumeUseCase>,
    pub recommend_jobs: Arc<dyn IRecommendJobsUseCase>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    use crate::auth::outgoing::bcrypt_hasher::BcryptHasher;
    use crate::auth::ports::outgoing::{PasswordHasher, TokenBlacklist, TokenProvider};
    use crate::profile::ports::outgoing::ResumeStorage;
    use tokio::sync::watch;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    dotenvy::dotenv().ok();

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    let notifier_interval_secs: u64 = env::var("NOTIFIER_INTERVAL_SECS")
        .unwrap_or_else(|_| "86400".to_string())
        .parse()
        .expect("NOTIFIER_INTERVAL_SECS must be a number");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run database migrations");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let token_blacklist = RedisTokenBlacklist::new(Arc::clone(&redis_arc));

    let register_user = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
    );
    let login_user = LoginUserUseCase::new(
        user_query,
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let logout_user = LogoutUseCase::new(token_blacklist.clone());

    // Profile components
    let resume_storage: Arc<dyn ResumeStorage> = Arc::new(LocalResumeStorage::new(upload_dir));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));

    let create_profile = CreateProfileUseCase::new(profile_repo.clone(), resume_storage.clone());
    let fetch_profile = FetchProfileUseCase::new(profile_repo.clone());
    let update_profile = UpdateProfileUseCase::new(profile_repo.clone());
    let upload_resume = UploadResumeUseCase::new(profile_repo.clone(), resume_storage.clone());
    let delete_resume = DeleteResumeUseCase::new(profile_repo, resume_storage);

    // Recommendation components, shared with the deadline notifier
    let candidate_pool = Arc::new(CandidatePool::new());
    let recommend_jobs = RecommendJobsUseCase::new(Arc::clone(&candidate_pool), job_catalog());

    let state = AppState {
        register_user: Arc::new(register_user),
        login_user: Arc::new(login_user),
        logout_user: Arc::new(logout_user),
        create_profile: Arc::new(create_profile),
        fetch_profile: Arc::new(fetch_profile),
        update_profile: Arc::new(update_profile),
        upload_resume: Arc::new(upload_resume),
        delete_resume: Arc::new(delete_resume),
        recommend_jobs: Arc::new(recommend_jobs),
    };

    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let token_blacklist_arc: Arc<dyn TokenBlacklist> = Arc::new(token_blacklist);

    // Daily deadline scan, stopped when the server exits
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let deadline_notifier = DeadlineNotifier::new(
        Arc::clone(&candidate_pool),
        job_catalog(),
        Arc::new(SmsLogSender),
    );
    tokio::spawn(deadline_notifier.run(
        Duration::from_secs(notifier_interval_secs),
        shutdown_rx,
    ));

    let db_for_server = Arc::clone(&db_arc);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&token_blacklist_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await;

    let _ = shutdown_tx.send(true);
    server
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::web::routes::register_handler);
    cfg.service(crate::auth::web::routes::login_handler);
    cfg.service(crate::auth::web::routes::logout_handler);
    // Profile
    cfg.service(crate::profile::web::routes::create_profile_handler);
    cfg.service(crate::profile::web::routes::get_my_profile_handler);
    cfg.service(crate::profile::web::routes::update_profile_handler);
    cfg.service(crate::profile::web::routes::upload_resume_handler);
    cfg.service(crate::profile::web::routes::delete_resume_handler);
    // Recommendation
    cfg.service(crate::recommendation::web::routes::recommend_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
