use thirtyfour::{error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::configuration::WebDriverSettings;

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &WebDriverSettings) -> Result<Self, WebDriverError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }

        let driver = WebDriver::new(&settings.server_url, caps).await?;
        driver.maximize_window().await?;

        Ok(Droid { driver })
    }

    pub async fn quit(self) -> Result<(), WebDriverError> {
        self.driver.quit().await
    }
}
