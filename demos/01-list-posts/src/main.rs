//! Lists the five most recent published posts.
//!
//! Configure via `.env` or the environment:
//! `WP_BASE_URL`, and optionally `WP_USERNAME` / `WP_PASSWORD`.

use wordpress_client::{Client, types::ListPosts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = Client::new();

    let posts = client
        .posts()
        .list(&ListPosts {
            limit: 5,
            status: Some("publish".into()),
            ..Default::default()
        })
        .await?;

    println!("{} post(s):", posts.len());
    for post in &posts {
        let title = post["title"]["rendered"].as_str().unwrap_or("(untitled)");
        println!("  #{} {}", post["id"], title);
    }

    Ok(())
}
