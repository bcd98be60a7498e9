//! Development utilities and handlers
//!
//! Endpoints for populating a fresh store with sample data during
//! development and testing. They go through the normal listing write path,
//! so reference data deduplicates the same way form submissions do.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;

use carlot_core::CatalogRepository;
use carlot_model::{NewListing, StockId};

use crate::{AppState, api_types::ApiResponse, errors::AppResult};

/// Result of a seeding run.
#[derive(Debug, Serialize)]
pub struct SeedResult {
    /// Number of listings created
    pub created: usize,
    /// Stock ids of the created listings
    pub stock_ids: Vec<StockId>,
}

struct FleetCar {
    manufacturer: &'static str,
    bodystyle: &'static str,
    model: &'static str,
    horsepower: i64,
    torque: i64,
    eco_rating: i64,
    safety_rating: i64,
    seats: i64,
    year: &'static str,
    price: f64,
    distance: i64,
}

const FLEET: [FleetCar; 10] = [
    FleetCar {
        manufacturer: "Toyota",
        bodystyle: "Sedan",
        model: "Corolla",
        horsepower: 140,
        torque: 126,
        eco_rating: 9,
        safety_rating: 8,
        seats: 5,
        year: "2021",
        price: 22000.0,
        distance: 15000,
    },
    FleetCar {
        manufacturer: "Toyota",
        bodystyle: "SUV",
        model: "RAV4",
        horsepower: 203,
        torque: 184,
        eco_rating: 7,
        safety_rating: 9,
        seats: 5,
        year: "2021",
        price: 28000.0,
        distance: 12000,
    },
    FleetCar {
        manufacturer: "Toyota",
        bodystyle: "Hatchback",
        model: "Prius",
        horsepower: 121,
        torque: 105,
        eco_rating: 10,
        safety_rating: 8,
        seats: 5,
        year: "2022",
        price: 26000.0,
        distance: 8000,
    },
    FleetCar {
        manufacturer: "Honda",
        bodystyle: "Sedan",
        model: "Civic",
        horsepower: 158,
        torque: 138,
        eco_rating: 8,
        safety_rating: 9,
        seats: 5,
        year: "2022",
        price: 23000.0,
        distance: 10000,
    },
    FleetCar {
        manufacturer: "Honda",
        bodystyle: "SUV",
        model: "CR-V",
        horsepower: 190,
        torque: 179,
        eco_rating: 7,
        safety_rating: 9,
        seats: 5,
        year: "2021",
        price: 27000.0,
        distance: 18000,
    },
    FleetCar {
        manufacturer: "Honda",
        bodystyle: "Sedan",
        model: "Accord",
        horsepower: 192,
        torque: 192,
        eco_rating: 8,
        safety_rating: 9,
        seats: 5,
        year: "2020",
        price: 24500.0,
        distance: 22000,
    },
    FleetCar {
        manufacturer: "Honda",
        bodystyle: "Hatchback",
        model: "Fit",
        horsepower: 130,
        torque: 114,
        eco_rating: 9,
        safety_rating: 7,
        seats: 5,
        year: "2021",
        price: 18000.0,
        distance: 25000,
    },
    FleetCar {
        manufacturer: "Ford",
        bodystyle: "Sedan",
        model: "Mustang",
        horsepower: 310,
        torque: 350,
        eco_rating: 5,
        safety_rating: 7,
        seats: 4,
        year: "2021",
        price: 35000.0,
        distance: 8500,
    },
    FleetCar {
        manufacturer: "Ford",
        bodystyle: "SUV",
        model: "Explorer",
        horsepower: 300,
        torque: 310,
        eco_rating: 6,
        safety_rating: 8,
        seats: 7,
        year: "2020",
        price: 32000.0,
        distance: 30000,
    },
    FleetCar {
        manufacturer: "Ford",
        bodystyle: "Hatchback",
        model: "Focus",
        horsepower: 160,
        torque: 146,
        eco_rating: 8,
        safety_rating: 8,
        seats: 5,
        year: "2021",
        price: 20000.0,
        distance: 15500,
    },
];

impl FleetCar {
    fn to_listing(&self) -> NewListing {
        NewListing {
            manufacturer: self.manufacturer.to_string(),
            bodystyle: self.bodystyle.to_string(),
            model_name: self.model.to_string(),
            horsepower: self.horsepower,
            torque: self.torque,
            eco_rating: self.eco_rating,
            safety_rating: self.safety_rating,
            seats: self.seats,
            year: self.year.to_string(),
            price: self.price,
            distance: self.distance,
            image: Some(
                format!("{}_{}.jpg", self.model, self.year).into_bytes(),
            ),
        }
    }
}

/// Seed a single sample listing.
pub async fn seed_sample(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SeedResult>>> {
    let listing = NewListing {
        manufacturer: "Toyota".to_string(),
        bodystyle: "Sedan".to_string(),
        model_name: "Camry".to_string(),
        horsepower: 200,
        torque: 180,
        eco_rating: 8,
        safety_rating: 9,
        seats: 5,
        year: "2020".to_string(),
        price: 25000.0,
        distance: 5000,
        image: Some(b"sample_image_data".to_vec()),
    };

    let stock_id = state.catalog.add_listing(listing).await?;
    info!(%stock_id, "sample listing seeded");

    Ok(Json(ApiResponse::success(SeedResult {
        created: 1,
        stock_ids: vec![stock_id],
    })))
}

/// Seed a ten-car fleet across three manufacturers and three bodystyles.
pub async fn seed_fleet(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SeedResult>>> {
    let mut stock_ids = Vec::with_capacity(FLEET.len());
    for car in &FLEET {
        stock_ids.push(state.catalog.add_listing(car.to_listing()).await?);
    }

    info!(count = stock_ids.len(), "fleet seeded");
    Ok(Json(ApiResponse::success(SeedResult {
        created: stock_ids.len(),
        stock_ids,
    })))
}
