// Earlier draft of the OTP check, kept as-is: opens the verification tab,
// waits for the "Verificar e-mail" heading, and screenshots to a fixed
// absolute path only if the code field is visible.

use std::path::Path;

use qs_verify::{flows, target, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qs_verify::init_tracing();

    let session = Session::launch().await?;
    let outcome = flows::verify_otp_tab(
        session.page(),
        target::AUTH_MODULES_URL,
        Path::new(target::OTP_TAB_SCREENSHOT_PATH),
    )
    .await;

    if let Err(err) = outcome {
        println!("Error: {err}");
    }

    session.close().await?;
    Ok(())
}
