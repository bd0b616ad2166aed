// End-to-end flow: pincode entry, persistence across sessions, category lookups
use delivery_pricing::error::{ServiceError, StoreError};
use delivery_pricing::utils::geocoder::StaticGeocoder;
use delivery_pricing::utils::location_store::{JsonFileStore, LocationStore};
use delivery_pricing::{
    CartLine, Coordinate, DeliveryService, GeocodingError, ProductCategory, WarehouseConfig,
    WarehouseRegistry,
};
use std::error::Error;

fn hyderabad_service(store: JsonFileStore) -> DeliveryService<StaticGeocoder, JsonFileStore> {
    DeliveryService::new(
        StaticGeocoder::hyderabad(),
        store,
        WarehouseRegistry::default(),
    )
}

#[test]
fn unknown_category_falls_back_to_base_price() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut service = hyderabad_service(JsonFileStore::new(dir.path().join("location.json")));
    service.change_pincode("500001")?;

    assert!(service.delivery_info_for_category("Paint").is_none());
    assert_eq!(service.calculate_product_price(100.0, "Paint", 2), 200.0);
    Ok(())
}

#[test]
fn location_survives_restart() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("location.json");

    let first_quote = {
        let mut service = hyderabad_service(JsonFileStore::new(&path));
        service.change_pincode("500081")?;
        service.calculate_product_price(380.0, "Steel", 4)
    };

    let mut restarted = hyderabad_service(JsonFileStore::new(&path));
    let snapshot = restarted.restore()?.ok_or("saved location was not restored")?;

    assert_eq!(snapshot.location().pincode.as_str(), "500081");
    assert_eq!(snapshot.location().district.as_deref(), Some("Madhapur"));
    assert_eq!(restarted.calculate_product_price(380.0, "Steel", 4), first_quote);
    Ok(())
}

#[test]
fn changing_pincode_recomputes_everything() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileStore::new(dir.path().join("location.json"));
    let mut service = hyderabad_service(store.clone());

    let city = service.change_pincode("500001")?;
    let far = service.change_pincode("530001")?;

    for category in ProductCategory::ALL {
        let near_info = city.get(category).ok_or("missing city info")?;
        let far_info = far.get(category).ok_or("missing far info")?;
        assert!(far_info.distance_km > near_info.distance_km);
        assert!(far_info.delivery_charge >= near_info.delivery_charge);
    }

    // Visakhapatnam is over 500 km from every Hyderabad warehouse
    let cement = service
        .delivery_info_for_category("Cement")
        .ok_or("missing cement info")?;
    assert_eq!(cement.delivery_time.label(), "5-7 days delivery available");

    assert_eq!(
        store.load()?.map(|location| location.pincode.to_string()),
        Some("530001".to_string())
    );
    Ok(())
}

#[test]
fn geocoding_errors_pass_through_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = hyderabad_service(JsonFileStore::new(dir.path().join("location.json")));

    match service.change_pincode("400001") {
        Err(ServiceError::Geocoding(GeocodingError::NotFound(pincode))) => {
            assert_eq!(pincode, "400001")
        }
        other => panic!("expected a geocoding error, got {other:?}"),
    }
    assert!(service.location().is_none());
}

#[test]
fn failed_save_keeps_previous_location() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("location.json");
    let mut service = hyderabad_service(JsonFileStore::new(&path));
    let before = service.change_pincode("500001")?;

    // A directory in place of the file makes the next save fail
    std::fs::remove_file(&path)?;
    std::fs::create_dir(&path)?;

    match service.change_pincode("530001") {
        Err(ServiceError::Store(StoreError::Io { path: failed, .. })) => assert_eq!(failed, path),
        other => panic!("expected a store error, got {other:?}"),
    }

    let current = service.cache().snapshot().ok_or("snapshot was dropped")?;
    assert!(std::sync::Arc::ptr_eq(&current, &before));
    assert_eq!(service.location().map(|l| l.pincode.to_string()), Some("500001".to_string()));
    Ok(())
}

#[test]
fn registry_from_file_limits_categories() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let registry_path = dir.path().join("warehouses.json");
    std::fs::write(
        &registry_path,
        r#"{"warehouses":[{"category":"Cement","name":"Abids Depot",
            "location":{"latitude":17.3850,"longitude":78.4867},"rate_per_km":8}]}"#,
    )?;

    let registry = WarehouseRegistry::from_json_file(&registry_path)?;
    assert_eq!(
        registry.get(ProductCategory::Cement),
        Some(&WarehouseConfig::new(
            "Abids Depot",
            Coordinate::new(17.3850, 78.4867),
            8.0
        )?)
    );

    let mut service = DeliveryService::new(
        StaticGeocoder::hyderabad(),
        JsonFileStore::new(dir.path().join("location.json")),
        registry,
    );
    let snapshot = service.change_pincode("500001")?;
    assert_eq!(snapshot.len(), 1);

    let cart = [
        CartLine::new("OPC 53 Grade", "Cement", 400.0, 2),
        CartLine::new("TMT Bar 12mm", "Steel", 750.0, 10),
    ];
    let quote = service.quote_cart(&cart);
    assert_eq!(quote.lines[0].total, 850.0);
    // No steel warehouse in this registry, so no delivery line item
    assert_eq!(quote.lines[1].total, 7500.0);
    assert_eq!(quote.lines_without_delivery().count(), 1);
    assert_eq!(quote.total, 8350.0);
    Ok(())
}
