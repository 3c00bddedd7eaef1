/// Runtime knobs for the worker. `Settings::default()` is what ships.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Endpoint returning `{"message": "<image url>", "status": "success"}`.
    pub random_image_url: String,
    /// Host that image URLs from the API must point at.
    pub image_host: String,
    /// Base URL that `/images/...` requests are proxied to.
    pub image_base_url: String,
    /// Fetch-and-lookup attempts per page view.
    pub max_attempts: u32,
    pub request_timeout_ms: i32,
    /// Bins per numeric comparison histogram.
    pub histogram_bins: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            random_image_url: "https://dog.ceo/api/breeds/image/random".to_owned(),
            image_host: "images.dog.ceo".to_owned(),
            image_base_url: "https://images.dog.ceo".to_owned(),
            max_attempts: 5,
            request_timeout_ms: 8_000,
            histogram_bins: 10,
        }
    }
}
