use anyhow::Result;
use httpmock::prelude::*;
use nearby_places::core::collector::PlacesCollector;
use nearby_places::{Category, Coordinate, GoogleMapsClient};
use std::time::Duration;

fn place(id: &str) -> serde_json::Value {
    serde_json::json!({
        "place_id": id,
        "name": format!("Place {}", id),
        "vicinity": "Chiyoda",
        "geometry": {"location": {"lat": 35.0, "lng": 139.0}}
    })
}

#[tokio::test]
async fn test_collects_every_page_and_deduplicates_across_categories() -> Result<()> {
    let server = MockServer::start_async().await;

    let restaurant_first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("type", "restaurant");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "next_page_token": "restaurant-2",
                "results": [place("r1"), place("shared")]
            }));
        })
        .await;
    let restaurant_second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("pagetoken", "restaurant-2");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "next_page_token": "restaurant-3",
                "results": [place("r2"), place("r1")]
            }));
        })
        .await;
    let restaurant_third = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("pagetoken", "restaurant-3");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [place("r3")]
            }));
        })
        .await;
    let bar = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("type", "bar");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "results": [place("shared"), place("b1")]
            }));
        })
        .await;

    let provider = GoogleMapsClient::new("test-key").with_base_url(server.base_url());
    let places = PlacesCollector::new(&provider)
        .with_page_delay(Duration::ZERO)
        .collect(
            Coordinate::new(35.0, 139.0),
            &[Category::Restaurant, Category::Bar],
            500,
        )
        .await?;

    restaurant_first.assert_hits_async(1).await;
    restaurant_second.assert_hits_async(1).await;
    restaurant_third.assert_hits_async(1).await;
    bar.assert_hits_async(1).await;

    let ids: Vec<&str> = places.iter().map(|p| p.place_id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "shared", "r2", "r3", "b1"]);

    let shared = places.iter().find(|p| p.place_id == "shared").unwrap();
    assert_eq!(shared.category, Category::Restaurant);
    Ok(())
}

#[tokio::test]
async fn test_error_on_second_page_aborts() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("type", "cafe");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "next_page_token": "not-ready",
                "results": [place("c1")]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/place/nearbysearch/json")
                .query_param("pagetoken", "not-ready");
            then.status(200).json_body(serde_json::json!({
                "status": "INVALID_REQUEST",
                "results": []
            }));
        })
        .await;

    let provider = GoogleMapsClient::new("test-key").with_base_url(server.base_url());
    let result = PlacesCollector::new(&provider)
        .with_page_delay(Duration::ZERO)
        .collect(Coordinate::new(35.0, 139.0), &[Category::Cafe], 500)
        .await;

    let err = result.unwrap_err();
    assert!(err.is_provider_failure());
    assert!(err.to_string().contains("INVALID_REQUEST"));
    Ok(())
}
