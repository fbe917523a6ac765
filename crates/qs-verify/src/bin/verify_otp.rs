// Verifies OTP entry on the verification tab: screenshots the empty code
// field, types the sample code "123456", waits for the slot UI to settle,
// and screenshots the filled state.

use std::path::Path;

use qs_verify::{flows, target, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qs_verify::init_tracing();

    let session = Session::launch().await?;
    let outcome = flows::verify_otp(
        session.page(),
        target::AUTH_MODULES_URL,
        Path::new(target::OTP_EMPTY_SCREENSHOT_PATH),
        Path::new(target::OTP_FILLED_SCREENSHOT_PATH),
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
