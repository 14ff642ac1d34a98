use std::time::Duration;

use thirtyfour::{error::WebDriverError, prelude::ElementQueryable, By, WebDriver, WebElement};

use crate::domain::{
    modal::{extract_modal_details, ModalDetails},
    project::{ProjectRecord, FIELD_PLACEHOLDER},
};

pub const DASHBOARD_URL: &str = "https://hprera.nic.in/PublicDashboard";

const PROJECT_LINK_XPATH: &str = "//a[@title='View Application']";
const PAGINATION_LINK_TEXT: &str = "Previous Detail >>";
const MAX_PROJECTS: usize = 6;

const WAIT_TIMEOUT: Duration = Duration::from_secs(20);
const POLL_INTERVAL: Duration = Duration::from_millis(500);
const MODAL_SETTLE_DELAY: Duration = Duration::from_secs(2);
const LINK_COOLDOWN: Duration = Duration::from_secs(1);

/// Scrapes the public dashboard: one record per project link, each enriched
/// with PAN/GSTIN from the detail popup. A link that fails is logged and
/// skipped; a failure before the first link is found aborts the run.
pub async fn scrape_public_dashboard(
    driver: &WebDriver,
) -> Result<Vec<ProjectRecord>, WebDriverError> {
    driver.goto(DASHBOARD_URL).await?;

    driver
        .query(By::XPath(PROJECT_LINK_XPATH))
        .wait(WAIT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?;

    let mut labelled_links = vec![];
    for link in driver.find_all(By::XPath(PROJECT_LINK_XPATH)).await? {
        let code = link.text().await?.trim().to_string();
        labelled_links.push((link, code));
    }

    let links = filter_project_links(labelled_links);
    let total = links.len();
    log::info!("Found {} project links", total);

    let mut projects: Vec<ProjectRecord> = vec![];
    for (i, (link, code)) in links.into_iter().enumerate() {
        log::info!("Processing project {}/{}: {}", i + 1, total, code);

        match scrape_project(driver, &link, code.clone()).await {
            Ok(record) => projects.push(record),
            Err(e) => log::error!("Failed to process project {}: {}", code, e),
        }

        tokio::time::sleep(LINK_COOLDOWN).await;
    }

    Ok(projects)
}

/// Drops the empty-text and pagination pseudo-links, then truncates. Excluded
/// entries do not consume one of the six slots.
fn filter_project_links<T>(links: Vec<(T, String)>) -> Vec<(T, String)> {
    links
        .into_iter()
        .filter(|(_, code)| !code.is_empty() && !code.contains(PAGINATION_LINK_TEXT))
        .take(MAX_PROJECTS)
        .collect()
}

async fn scrape_project(
    driver: &WebDriver,
    link: &WebElement,
    code: String,
) -> Result<ProjectRecord, WebDriverError> {
    let inline = read_inline_fields(link).await?;

    driver
        .execute("arguments[0].click();", vec![link.to_json()?])
        .await?;
    tokio::time::sleep(MODAL_SETTLE_DELAY).await;

    let details = match extract_popup_details(driver).await {
        Ok(details) => details,
        Err(e) => {
            log::error!("Error extracting popup data: {}", e);
            ModalDetails::default()
        }
    };

    Ok(ProjectRecord {
        code,
        name: inline.name,
        project_type: inline.project_type,
        phone: inline.phone,
        email: inline.email,
        address: inline.address,
        valid_upto: inline.valid_upto,
        pan: details.pan,
        gstin: details.gstin,
    })
}

struct InlineFields {
    name: String,
    project_type: String,
    phone: String,
    email: String,
    address: String,
    valid_upto: String,
}

/// Reads the listing-card fields surrounding a project link. Contact spans
/// fall back to a placeholder; a missing name, type or validity element is a
/// per-link failure.
async fn read_inline_fields(link: &WebElement) -> Result<InlineFields, WebDriverError> {
    let name = link
        .find(By::XPath(
            "./ancestor::div[contains(@class, 'shadow')]//span[@class='font-lg fw-600']",
        ))
        .await?
        .text()
        .await?
        .trim()
        .to_string();

    let project_type = link
        .find(By::XPath("./following::span[1]"))
        .await?
        .text()
        .await?
        .trim()
        .to_string();

    let contact_div = link
        .find(By::XPath(
            "./ancestor::div[contains(@class, 'shadow')]//div[@class='mt-1']",
        ))
        .await?;
    let spans = contact_div.find_all(By::XPath(".//span")).await?;
    let phone = span_text_or_placeholder(&spans, 0).await?;
    let email = span_text_or_placeholder(&spans, 1).await?;
    let address = span_text_or_placeholder(&spans, 2).await?;

    let valid_upto = link
        .find(By::XPath(
            "./ancestor::div[contains(@class, 'shadow')]//span[@class='text-orange ml-1']",
        ))
        .await?
        .text()
        .await?
        .trim()
        .to_string();

    Ok(InlineFields {
        name,
        project_type,
        phone,
        email,
        address,
        valid_upto,
    })
}

async fn span_text_or_placeholder(
    spans: &[WebElement],
    index: usize,
) -> Result<String, WebDriverError> {
    match spans.get(index) {
        Some(span) => Ok(span.text().await?.trim().to_string()),
        None => Ok(FIELD_PLACEHOLDER.to_string()),
    }
}

/// Waits for the popup to render, parses its markup for PAN/GSTIN and closes
/// it again. The caller treats any error here as "identifiers absent".
async fn extract_popup_details(driver: &WebDriver) -> Result<ModalDetails, WebDriverError> {
    let modal = driver
        .query(By::ClassName("modal-content"))
        .wait(WAIT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?;
    wait_until_spinner_gone(driver).await?;

    let modal_html = modal.inner_html().await?;
    let details = extract_modal_details(&modal_html);

    let close_button = driver.find(By::ClassName("close")).await?;
    driver
        .execute("arguments[0].click();", vec![close_button.to_json()?])
        .await?;

    Ok(details)
}

/// Polls until no visible loading spinner remains. An absent spinner element
/// counts as gone.
async fn wait_until_spinner_gone(driver: &WebDriver) -> Result<(), WebDriverError> {
    let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;

    loop {
        let visible = match driver.find(By::ClassName("spinner-border")).await {
            Ok(spinner) => spinner.is_displayed().await.unwrap_or(false),
            Err(_) => false,
        };
        if !visible {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(WebDriverError::Timeout(
                "loading spinner still visible in popup".to_string(),
            ));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
