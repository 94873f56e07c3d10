//! Uploads a local file to the media library.
//!
//! Usage: `demo-03-upload-media <file>` with `WP_BASE_URL`,
//! `WP_USERNAME` and `WP_PASSWORD` set.

use wordpress_client::types::MediaFields;
use wordpress_client::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: demo-03-upload-media <file>"))?;

    let client = Client::new();
    let media = client
        .media()
        .upload(
            &path,
            &MediaFields {
                title: Some("Uploaded from Rust".into()),
                ..Default::default()
            },
        )
        .await?;

    println!(
        "uploaded #{} -> {}",
        media["id"],
        media["source_url"].as_str().unwrap_or("(no url)")
    );

    Ok(())
}
