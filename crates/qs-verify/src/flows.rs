// Verification flows - the script bodies
//
// Each function is one script's navigate → wait → check → screenshot
// sequence, taking the target URL and output paths as arguments so the
// integration tests can aim it at a fixture server and a temp directory.
// The binaries pass the hardcoded values from `target`.

use std::path::Path;
use std::time::Duration;

use playwright_rs::{expect, GotoOptions, Page, WaitUntil};
use tracing::debug;

use crate::error::{Error, Result};
use crate::report::Report;
use crate::target;

/// Login screen verification: wait for the form, check the page HTML for
/// the "Entrar" label, capture a screenshot.
pub async fn verify_login(page: &Page, url: &str, screenshot: &Path) -> Result<Report> {
    println!("Navigating to {url}");
    navigate(page, url, GotoOptions::new().timeout(target::NAV_TIMEOUT)).await?;

    println!("Waiting for login form...");
    wait_visible(page, target::LOGIN_FORM_SELECTOR, target::WAIT_TIMEOUT).await?;

    println!("Checking content...");
    let content = page.content().await.map_err(Error::PageState)?;
    let mut report = Report::new();
    report.note(
        content.contains(target::LOGIN_MARKER),
        &format!("Found '{}' text.", target::LOGIN_MARKER),
        &format!("Could not find '{}' text.", target::LOGIN_MARKER),
    );

    capture(page, screenshot).await?;
    Ok(report)
}

/// Root page metadata verification: exact-match checks on the title and
/// three meta tags, then a screenshot.
pub async fn verify_title(page: &Page, url: &str, screenshot: &Path) -> Result<Report> {
    navigate(
        page,
        url,
        GotoOptions::new().wait_until(WaitUntil::NetworkIdle),
    )
    .await?;

    let mut report = Report::new();

    let title = page.title().await.map_err(Error::PageState)?;
    println!("Page title: {title}");
    report.check("Title", title == target::EXPECTED_TITLE);

    let meta_checks = [
        ("og:title", target::OG_TITLE_SELECTOR, target::EXPECTED_OG_TITLE),
        ("author", target::AUTHOR_SELECTOR, target::EXPECTED_AUTHOR),
        (
            "twitter:site",
            target::TWITTER_SITE_SELECTOR,
            target::EXPECTED_TWITTER_SITE,
        ),
    ];
    for (name, selector, expected) in meta_checks {
        let value = meta_content(page, selector).await?;
        println!("{name}: {value}");
        report.check(name, value == expected);
    }

    capture(page, screenshot).await?;
    Ok(report)
}

/// OTP entry verification: open the verification tab, screenshot the empty
/// code field, type the sample code, and screenshot the filled state after
/// the settle delay.
pub async fn verify_otp(
    page: &Page,
    url: &str,
    empty_shot: &Path,
    filled_shot: &Path,
) -> Result<()> {
    println!("Navigating to {url}");
    navigate(page, url, GotoOptions::new().timeout(target::NAV_TIMEOUT)).await?;

    click(page, target::VERIFY_TAB_SELECTOR).await?;
    wait_visible(page, target::VERIFY_HEADING_SELECTOR, target::WAIT_TIMEOUT).await?;

    capture(page, empty_shot).await?;

    let code_field = page.locator(target::OTP_INPUT_SELECTOR).await;
    code_field
        .fill(target::OTP_SAMPLE_CODE, None)
        .await
        .map_err(|source| Error::Interaction {
            selector: target::OTP_INPUT_SELECTOR.to_string(),
            source,
        })?;

    tokio::time::sleep(target::OTP_SETTLE).await;
    capture(page, filled_shot).await?;
    Ok(())
}

/// Superseded draft of the OTP check: open the verification tab, wait for
/// the heading, and screenshot only if the code field is visible.
///
/// Returns whether the field was visible (and the screenshot taken). An
/// invisible field prints `Input not visible!` and is not an error.
pub async fn verify_otp_tab(page: &Page, url: &str, screenshot: &Path) -> Result<bool> {
    navigate(page, url, GotoOptions::new().timeout(target::NAV_TIMEOUT)).await?;

    click(page, target::VERIFY_TAB_SELECTOR).await?;
    wait_visible(page, target::VERIFY_HEADING_SELECTOR, target::WAIT_TIMEOUT).await?;

    let code_field = page.locator(target::OTP_INPUT_SELECTOR).await;
    let visible = code_field.is_visible().await.map_err(Error::PageState)?;
    if !visible {
        println!("Input not visible!");
        return Ok(false);
    }

    capture(page, screenshot).await?;
    Ok(true)
}

async fn navigate(page: &Page, url: &str, options: GotoOptions) -> Result<()> {
    page.goto(url, Some(options))
        .await
        .map_err(|source| Error::Navigation {
            url: url.to_string(),
            source,
        })?;
    debug!(url, "navigation complete");
    Ok(())
}

async fn wait_visible(page: &Page, selector: &str, timeout: Duration) -> Result<()> {
    let locator = page.locator(selector).await;
    expect(locator)
        .with_timeout(timeout)
        .to_be_visible()
        .await
        .map_err(|source| Error::Wait {
            selector: selector.to_string(),
            source,
        })
}

async fn click(page: &Page, selector: &str) -> Result<()> {
    let locator = page.locator(selector).await;
    locator.click(None).await.map_err(|source| Error::Interaction {
        selector: selector.to_string(),
        source,
    })
}

async fn meta_content(page: &Page, selector: &str) -> Result<String> {
    let locator = page.locator(selector).await;
    locator
        .get_attribute("content")
        .await
        .map_err(Error::PageState)?
        .ok_or_else(|| Error::MissingAttribute {
            selector: selector.to_string(),
            attribute: "content".to_string(),
        })
}

async fn capture(page: &Page, path: &Path) -> Result<()> {
    println!("Taking screenshot...");
    page.screenshot_to_file(path, None)
        .await
        .map_err(|source| Error::Screenshot {
            path: path.to_path_buf(),
            source,
        })?;
    println!("Screenshot saved to {}", path.display());
    Ok(())
}
