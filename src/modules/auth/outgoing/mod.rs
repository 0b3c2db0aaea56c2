pub mod bcrypt_hasher;
pub mod entity;
pub mod jwt;
pub mod token_blacklist_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;
