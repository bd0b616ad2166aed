use delivery_pricing::service::DeliveryService;
use delivery_pricing::utils::config::PricingConfig;
use delivery_pricing::utils::geocoder::StaticGeocoder;
use delivery_pricing::utils::location_store::JsonFileStore;
use delivery_pricing::{FlooredRatePricer, WarehouseRegistry};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: delivery-quote <pincode> [category] [base-price] [quantity]";

// Optional path to a warehouse registry JSON file
const REGISTRY_ENV: &str = "DELIVERY_WAREHOUSES";
// Optional path to a pricing settings JSON file
const PRICING_ENV: &str = "DELIVERY_PRICING";
const LOCATION_FILE_ENV: &str = "DELIVERY_LOCATION_FILE";
const DEFAULT_LOCATION_FILE: &str = "delivery_location.json";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,delivery_pricing=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(pincode) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let registry = match env::var(REGISTRY_ENV) {
        Ok(path) => match WarehouseRegistry::from_json_file(&path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error loading warehouse registry: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => WarehouseRegistry::default(),
    };

    let pricing = match env::var(PRICING_ENV) {
        Ok(path) => match PricingConfig::from_json_file(&path) {
            Ok(pricing) => pricing,
            Err(e) => {
                eprintln!("Error loading pricing config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => PricingConfig::default(),
    };
    let pricer = FlooredRatePricer::new(&pricing);

    let location_file =
        env::var(LOCATION_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOCATION_FILE.to_string());
    let mut service = DeliveryService::with_pricer(
        StaticGeocoder::hyderabad(),
        JsonFileStore::new(location_file),
        registry,
        pricer,
    );

    let snapshot = match service.change_pincode(pincode) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Could not set delivery location: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let location = snapshot.location();
    println!(
        "Delivering to {} ({:.4}, {:.4})",
        location.address.as_deref().unwrap_or(location.pincode.as_str()),
        location.coordinate.latitude,
        location.coordinate.longitude
    );
    println!("Minimum delivery charge: Rs. {:.2}", pricer.floor_charge());
    println!("------------------------------------------");

    for info in snapshot.iter() {
        println!("{}:", info.category);
        println!("  Warehouse: {}", info.warehouse_name);
        println!("  Distance: {:.2} km", info.distance_km);
        println!("  Delivery charge: Rs. {:.2}", info.delivery_charge);
        println!("  {}", info.delivery_time);
    }

    for category in snapshot.omitted() {
        println!("{}: delivery info unavailable", category);
    }

    if let Some((category, warehouse, distance)) = service.nearest_warehouse() {
        println!(
            "\nNearest warehouse: {} ({}) at {:.2} km",
            warehouse.name, category, distance
        );
    }

    if let Some(category) = args.get(1) {
        let base_price = args.get(2).and_then(|p| p.parse::<f64>().ok());
        let quantity = args.get(3).and_then(|q| q.parse::<u32>().ok()).unwrap_or(1);

        let Some(base_price) = base_price else {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        };

        let total = service.calculate_product_price(base_price, category, quantity.max(1));
        match service.delivery_info_for_category(category) {
            Some(info) => println!(
                "\n{} x {} at Rs. {:.2}: Rs. {:.2} (incl. Rs. {:.2} delivery)",
                quantity.max(1),
                category,
                base_price,
                total,
                info.delivery_charge
            ),
            None => println!(
                "\n{} x {} at Rs. {:.2}: Rs. {:.2} (no delivery info)",
                quantity.max(1),
                category,
                base_price,
                total
            ),
        }
    }

    ExitCode::SUCCESS
}
