// Verifies the AuthModules login screen renders: waits for the form,
// checks the page for the "Entrar" label, and captures a screenshot.
//
// Run with the app serving http://localhost:8080/AuthModules/ and the
// Playwright browsers installed (npx playwright install chromium).

use std::path::Path;

use qs_verify::{flows, target, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qs_verify::init_tracing();

    let session = Session::launch().await?;
    let outcome = flows::verify_login(
        session.page(),
        target::AUTH_MODULES_URL,
        Path::new(target::SCREENSHOT_PATH),
    )
    .await;

    if let Err(err) = outcome {
        println!("Error: {err}");
        session
            .try_screenshot(Path::new(target::FAILURE_SCREENSHOT_PATH))
            .await;
    }

    session.close().await?;
    Ok(())
}
