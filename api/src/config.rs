use std::env;

#[derive(Clone)]
pub struct Config {
    /// API key for the weather provider. Required.
    pub weather_api_key: String,
    /// Base URL of the geocoding provider.
    pub viacep_url: String,
    /// Base URL of the weather provider.
    pub weather_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            weather_api_key: env::var("WEATHER_API_KEY").expect("WEATHER_API_KEY must be set"),
            viacep_url: env::var("VIACEP_URL")
                .unwrap_or_else(|_| "https://viacep.com.br".to_string()),
            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "http://api.weatherapi.com".to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
        }
    }
}
