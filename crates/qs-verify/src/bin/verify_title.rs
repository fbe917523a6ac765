// Verifies the root page's title and social metadata: exact-match checks
// on the document title, og:title, author, and twitter:site, printing a
// PASSED/FAILED line per check. Failed checks do not fail the run.

use std::path::Path;

use qs_verify::{flows, target, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qs_verify::init_tracing();

    let session = Session::launch().await?;
    let outcome = flows::verify_title(
        session.page(),
        target::BASE_URL,
        Path::new(target::SCREENSHOT_PATH),
    )
    .await;

    if let Err(err) = outcome {
        println!("Error: {err}");
    }

    session.close().await?;
    Ok(())
}
