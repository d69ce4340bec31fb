use std::{fs, path::PathBuf};

use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

/// Mint an EdDSA access token (JWT) carrying a `roles` claim, for local testing
/// of role-protected routes.
///
/// Role names are passed through as-is; the server ignores names it does not know.
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Path to the issuer's Ed25519 private key in PEM (PKCS#8)
    #[arg(long, value_name = "FILE")]
    private_key_pem: PathBuf,

    /// Subject (must be a UUID). Default: random UUID v4.
    #[arg(long)]
    sub: Option<Uuid>,

    /// Role to grant; repeat for several (e.g. --role Superadmin --role Editor)
    #[arg(long = "role")]
    roles: Vec<String>,

    /// `iss` claim; must match AUTH_ISSUER on the server
    #[arg(long, env = "AUTH_ISSUER")]
    issuer: String,

    /// `aud` claim; must match AUTH_AUDIENCE on the server
    #[arg(long, env = "AUTH_AUDIENCE")]
    audience: String,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = 600)]
    ttl_seconds: i64,

    /// Override jti. Default: random UUID v4.
    #[arg(long)]
    jti: Option<String>,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct AccessTokenClaims {
    iss: String,
    aud: String,
    sub: String,
    iat: i64,
    exp: i64,
    jti: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let pem = fs::read_to_string(&args.private_key_pem)?;
    let encoding_key = EncodingKey::from_ed_pem(pem.as_bytes())?;

    let now = chrono::Utc::now().timestamp();
    let claims = AccessTokenClaims {
        iss: args.issuer,
        aud: args.audience,
        sub: args.sub.unwrap_or_else(Uuid::new_v4).to_string(),
        iat: now,
        exp: now + args.ttl_seconds,
        jti: args.jti.unwrap_or_else(|| Uuid::new_v4().to_string()),
        roles: args.roles,
    };

    let mut header = Header::new(Algorithm::EdDSA);
    header.typ = Some("JWT".to_string());
    let token = jsonwebtoken::encode(&header, &claims, &encoding_key)?;

    if args.quiet {
        println!("{}", token);
        return Ok(());
    }

    println!("access_token: {}", token);
    println!("claims: {}", serde_json::to_string_pretty(&claims)?);

    Ok(())
}
