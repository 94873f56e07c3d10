//! Creates a draft post, then publishes it with a partial update.
//!
//! Requires `WP_BASE_URL`, `WP_USERNAME` and `WP_PASSWORD`.

use wordpress_client::types::{CreatePost, UpdatePost};
use wordpress_client::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = Client::new();

    let draft = client
        .posts()
        .create(&CreatePost::new(
            "Hello from wordpress_client",
            "<p>This post was created from Rust.</p>",
        ))
        .await?;
    let id = draft["id"]
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("created post has no id"))?;
    println!("created draft #{id}");

    let published = client
        .posts()
        .update(
            id,
            &UpdatePost {
                status: Some("publish".into()),
                ..Default::default()
            },
        )
        .await?;
    println!(
        "published: {}",
        published["link"].as_str().unwrap_or("(no link)")
    );

    Ok(())
}
