use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebDriverSettings,
}

#[derive(Deserialize, Clone)]
pub struct WebDriverSettings {
    /// Address of a chromedriver-compatible WebDriver server.
    pub server_url: String,
    pub headless: bool,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .build()?;

    settings.try_deserialize::<Settings>()
}
