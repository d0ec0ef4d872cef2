use serde::{Deserialize, Serialize};

/// One entry of the iTunes lookup payload. Every field is optional because
/// the provider omits keys freely (e.g. `releaseNotes` on first releases).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawApp {
    pub wrapper_type: Option<String>,
    pub track_id: Option<i64>,
    pub bundle_id: Option<String>,
    pub track_name: Option<String>,
    pub track_view_url: Option<String>,
    pub description: Option<String>,
    pub artwork_url512: Option<String>,
    pub artwork_url100: Option<String>,
    pub artwork_url60: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub genre_ids: Vec<String>,
    pub primary_genre_name: Option<String>,
    pub primary_genre_id: Option<i64>,
    pub content_advisory_rating: Option<String>,
    #[serde(rename = "languageCodesISO2A", default)]
    pub language_codes: Vec<String>,
    pub file_size_bytes: Option<String>,
    pub minimum_os_version: Option<String>,
    pub release_date: Option<String>,
    pub current_version_release_date: Option<String>,
    pub release_notes: Option<String>,
    pub version: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub artist_id: Option<i64>,
    pub artist_name: Option<String>,
    pub artist_view_url: Option<String>,
    pub seller_url: Option<String>,
    pub average_user_rating: Option<f64>,
    pub user_rating_count: Option<i64>,
    pub average_user_rating_for_current_version: Option<f64>,
    pub user_rating_count_for_current_version: Option<i64>,
    #[serde(default)]
    pub screenshot_urls: Vec<String>,
    #[serde(default)]
    pub ipad_screenshot_urls: Vec<String>,
    #[serde(default)]
    pub appletv_screenshot_urls: Vec<String>,
    #[serde(default)]
    pub supported_devices: Vec<String>,
}

impl RawApp {
    pub fn is_software(&self) -> bool {
        matches!(self.wrapper_type.as_deref(), None | Some("software"))
    }
}

/// Full app record as returned by `/search-app` and as `appInfo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: Option<i64>,
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub genres: Vec<String>,
    pub genre_ids: Vec<String>,
    pub primary_genre: Option<String>,
    pub primary_genre_id: Option<i64>,
    pub content_rating: Option<String>,
    pub languages: Vec<String>,
    pub size: Option<String>,
    pub required_os_version: Option<String>,
    pub released: Option<String>,
    pub updated: Option<String>,
    pub release_notes: Option<String>,
    pub version: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub free: bool,
    pub developer_id: Option<i64>,
    pub developer: Option<String>,
    pub developer_url: Option<String>,
    pub developer_website: Option<String>,
    pub score: Option<f64>,
    pub reviews: Option<i64>,
    pub current_version_score: Option<f64>,
    pub current_version_reviews: Option<i64>,
    pub screenshots: Vec<String>,
    pub ipad_screenshots: Vec<String>,
    pub appletv_screenshots: Vec<String>,
    pub supported_devices: Vec<String>,
}

impl From<RawApp> for App {
    fn from(raw: RawApp) -> Self {
        let updated = raw
            .current_version_release_date
            .or_else(|| raw.release_date.clone());
        Self {
            id: raw.track_id,
            app_id: raw.bundle_id,
            title: raw.track_name,
            url: raw.track_view_url,
            description: raw.description,
            icon: raw
                .artwork_url512
                .or(raw.artwork_url100)
                .or(raw.artwork_url60),
            genres: raw.genres,
            genre_ids: raw.genre_ids,
            primary_genre: raw.primary_genre_name,
            primary_genre_id: raw.primary_genre_id,
            content_rating: raw.content_advisory_rating,
            languages: raw.language_codes,
            size: raw.file_size_bytes,
            required_os_version: raw.minimum_os_version,
            released: raw.release_date,
            updated,
            release_notes: raw.release_notes,
            version: raw.version,
            free: raw.price == Some(0.0),
            price: raw.price,
            currency: raw.currency,
            developer_id: raw.artist_id,
            developer: raw.artist_name,
            developer_url: raw.artist_view_url,
            developer_website: raw.seller_url,
            score: raw.average_user_rating,
            reviews: raw.user_rating_count,
            current_version_score: raw.average_user_rating_for_current_version,
            current_version_reviews: raw.user_rating_count_for_current_version,
            screenshots: raw.screenshot_urls,
            ipad_screenshots: raw.ipad_screenshot_urls,
            appletv_screenshots: raw.appletv_screenshot_urls,
            supported_devices: raw.supported_devices,
        }
    }
}

/// Listing view of an [`App`]: same keys minus device support, pricing,
/// size, genre ids, developer id and description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedApp {
    pub id: Option<i64>,
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub genres: Vec<String>,
    pub primary_genre: Option<String>,
    pub primary_genre_id: Option<i64>,
    pub content_rating: Option<String>,
    pub languages: Vec<String>,
    pub required_os_version: Option<String>,
    pub released: Option<String>,
    pub updated: Option<String>,
    pub release_notes: Option<String>,
    pub version: Option<String>,
    pub developer: Option<String>,
    pub developer_url: Option<String>,
    pub developer_website: Option<String>,
    pub score: Option<f64>,
    pub reviews: Option<i64>,
    pub current_version_score: Option<f64>,
    pub current_version_reviews: Option<i64>,
    pub screenshots: Vec<String>,
    pub ipad_screenshots: Vec<String>,
    pub appletv_screenshots: Vec<String>,
}

impl From<&App> for ListedApp {
    fn from(app: &App) -> Self {
        Self {
            id: app.id,
            app_id: app.app_id.clone(),
            title: app.title.clone(),
            url: app.url.clone(),
            icon: app.icon.clone(),
            genres: app.genres.clone(),
            primary_genre: app.primary_genre.clone(),
            primary_genre_id: app.primary_genre_id,
            content_rating: app.content_rating.clone(),
            languages: app.languages.clone(),
            required_os_version: app.required_os_version.clone(),
            released: app.released.clone(),
            updated: app.updated.clone(),
            release_notes: app.release_notes.clone(),
            version: app.version.clone(),
            developer: app.developer.clone(),
            developer_url: app.developer_url.clone(),
            developer_website: app.developer_website.clone(),
            score: app.score,
            reviews: app.reviews,
            current_version_score: app.current_version_score,
            current_version_reviews: app.current_version_reviews,
            screenshots: app.screenshots.clone(),
            ipad_screenshots: app.ipad_screenshots.clone(),
            appletv_screenshots: app.appletv_screenshots.clone(),
        }
    }
}
