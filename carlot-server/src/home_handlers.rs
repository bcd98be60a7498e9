//! Landing page content.

use axum::Json;
use serde::Serialize;

use crate::api_types::ApiResponse;

/// One slide of the landing page carousel.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselItem {
    pub image: &'static str,
    pub caption: &'static str,
    pub subtitle: &'static str,
}

/// Promotional carousel rendered on the home page.
pub async fn home_content() -> Json<ApiResponse<Vec<CarouselItem>>> {
    let items = vec![
        CarouselItem {
            image: "https://www-asia.nissan-cdn.net/content/dam/Nissan/AU/Images/homepage/redesign/compressed/award-NIS4334_Qashqai_2022_homepage_d-with-GDA-2-2000x821.jpg.ximg.full.hero.jpg",
            caption: "New Nissan Qashqai",
            subtitle: "Runout Sale.",
        },
        CarouselItem {
            image: "https://www-asia.nissan-cdn.net/content/dam/Nissan/AU/Images/homepage/new-navara-pro-4x-homepage-banner-3840x1574.jpg.ximg.full.hero.jpg",
            caption: "Unbeatable Nissan Navara",
            subtitle: "Unstoppable Deal.",
        },
        CarouselItem {
            image: "https://www-asia.nissan-cdn.net/content/dam/Nissan/new-zealand/images/homepage/NIS5140-13_Nissan-X-TRAIL-Production_Digital_HeroDesktop_1620x1152-v.jpg.ximg.full.hero.jpg",
            caption: "Innovative E-Power technology",
            subtitle: "Factory Bonus Offers.",
        },
    ];

    Json(ApiResponse::success(items))
}
