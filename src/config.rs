// Remote asset identifiers default to the academy's published Drive files so
// the service runs without any environment setup.
const DEFAULT_LOGO_ID: &str = "1BGvxglcgZ2G6FdVelLjXZVo-_v4e4a42";
const DEFAULT_SIGNATURE_ID: &str = "1U0es4MVJgGniK27rcrA6hiLFFRazmwCs";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub asset_base_url: String,
    pub logo_file_id: String,
    pub signature_file_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        let asset_base_url = std::env::var("ASSET_BASE_URL")
            .unwrap_or_else(|_| "https://drive.google.com".to_string());
        let logo_file_id =
            std::env::var("LOGO_FILE_ID").unwrap_or_else(|_| DEFAULT_LOGO_ID.to_string());
        let signature_file_id = std::env::var("SIGNATURE_FILE_ID")
            .unwrap_or_else(|_| DEFAULT_SIGNATURE_ID.to_string());

        Ok(Self {
            host,
            port,
            asset_base_url,
            logo_file_id,
            signature_file_id,
        })
    }
}
