//! Demo driver: place nearby markers around a fixed user location
//!
//! Fetches live results when `TOMTOM_API_KEY` is set in the environment,
//! otherwise falls back to a bundled sample payload, then prints the AR
//! placement transform and the 2D map artifacts for each place.

use geoplacement::{
    annotations, GeoPoint, HttpPlacesClient, MapRegion, MarkerBuilder, NearbySearchResponse,
    Place, PlacesClient, SearchConfig,
};
use tracing_subscriber::EnvFilter;

const SAMPLE_RESPONSE: &str = r#"
{
  "summary": { "queryType": "NEARBY", "numResults": 3 },
  "results": [
    {
      "poi": { "name": "Central Market Hall", "categories": ["market"] },
      "position": { "lat": 47.4871, "lon": 19.0589 },
      "dist": 1430.0
    },
    {
      "poi": { "name": "Chain Bridge", "categories": ["important tourist attraction"] },
      "position": { "lat": 47.4990, "lon": 19.0437 },
      "dist": 290.0
    },
    {
      "poi": { "name": "Heroes' Square", "categories": ["monument"] },
      "position": { "lat": 47.5150, "lon": 19.0770 },
      "dist": 3350.0
    }
  ]
}
"#;

fn sample_places() -> Vec<Place> {
    serde_json::from_str::<NearbySearchResponse>(SAMPLE_RESPONSE)
        .map(|response| response.places())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Deak Ferenc ter, Budapest
    let origin = GeoPoint::new(47.4979, 19.0402);
    let heading_rad = 0.0;

    let places = match std::env::var("TOMTOM_API_KEY") {
        Ok(api_key) => match HttpPlacesClient::new(SearchConfig::new(api_key)) {
            Ok(client) => client.fetch_nearby(origin).await,
            Err(err) => {
                eprintln!("Invalid search configuration: {err}");
                return;
            }
        },
        Err(_) => sample_places(),
    };

    if places.is_empty() {
        println!("No places to display");
        return;
    }

    let region = MapRegion::around(origin, SearchConfig::default().radius_miles);
    println!("User at {origin}, map span {:.4} deg", region.span_degrees);

    println!("\nAR markers:");
    let builder = MarkerBuilder::default();
    for marker in builder.build(origin, heading_rad, &places) {
        let name = marker.place.name.as_deref().unwrap_or("(unnamed)");
        let placement = &marker.placement;
        println!(
            "  {name:<28} pos ({:9.1}, {:4.1}, {:9.1})  rot {:+.3} rad  scale {:.2}",
            placement.position.x,
            placement.position.y,
            placement.position.z,
            placement.rotation_radians,
            placement.scale,
        );
    }

    println!("\nMap pins:");
    for annotation in annotations(&places) {
        println!(
            "  {} {} / {}",
            annotation.position,
            annotation.title.as_deref().unwrap_or("(unnamed)"),
            annotation.subtitle.as_deref().unwrap_or("-"),
        );
    }
}
