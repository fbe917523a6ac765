//! Hardcoded verification targets.
//!
//! The scripts are deliberately unparameterized: URLs, selectors, expected
//! strings, and output paths are fixed literals, collected here so every
//! binary reads the same values.

use std::time::Duration;

/// Root of the app under verification; must already be running.
pub const BASE_URL: &str = "http://localhost:8080";
/// The authentication modules screen.
pub const AUTH_MODULES_URL: &str = "http://localhost:8080/AuthModules/";

// Expected metadata on the root page
pub const EXPECTED_TITLE: &str = "QuantumShards Auth";
pub const EXPECTED_OG_TITLE: &str = "QuantumShards Auth";
pub const EXPECTED_AUTHOR: &str = "QuantumShards";
pub const EXPECTED_TWITTER_SITE: &str = "@QuantumShards";

pub const OG_TITLE_SELECTOR: &str = r#"meta[property="og:title"]"#;
pub const AUTHOR_SELECTOR: &str = r#"meta[name="author"]"#;
pub const TWITTER_SITE_SELECTOR: &str = r#"meta[name="twitter:site"]"#;

// Login screen
pub const LOGIN_FORM_SELECTOR: &str = "form";
/// Label of the login submit button; its presence in the page HTML is the
/// login-screen check.
pub const LOGIN_MARKER: &str = "Entrar";

// Verification (OTP) screen
pub const VERIFY_TAB_SELECTOR: &str = r#"role=tab[name="Verificação"]"#;
pub const VERIFY_HEADING_SELECTOR: &str = "text=Verificar e-mail";
pub const OTP_INPUT_SELECTOR: &str = r#"input[aria-label="Código de verificação"]"#;
/// Sample 6-digit code typed into the verification field.
pub const OTP_SAMPLE_CODE: &str = "123456";

pub const NAV_TIMEOUT: Duration = Duration::from_secs(10);
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);
/// Delay after typing the code, so the slot UI finishes animating before
/// the filled screenshot.
pub const OTP_SETTLE: Duration = Duration::from_millis(500);

// Screenshot output paths
pub const SCREENSHOT_PATH: &str = "verification_screenshot.png";
pub const FAILURE_SCREENSHOT_PATH: &str = "verification_error_failed.png";
pub const OTP_EMPTY_SCREENSHOT_PATH: &str = "verification_empty.png";
pub const OTP_FILLED_SCREENSHOT_PATH: &str = "verification_filled.png";
/// The superseded tab-check draft wrote to a fixed absolute path.
pub const OTP_TAB_SCREENSHOT_PATH: &str = "/home/jules/verification/verification.png";
