//! Password hashing and bearer token adapters.

mod argon2_hasher;
mod hs256_token_codec;

pub use argon2_hasher::Argon2PasswordHasher;
pub use hs256_token_codec::{DEFAULT_TOKEN_TTL, Hs256TokenCodec, MIN_SECRET_LEN};
