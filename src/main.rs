use anyhow::Context;
use nestwise_homes::auth::AuthService;
use nestwise_homes::config::AppConfig;
use nestwise_homes::dashboard::sections_for;
use nestwise_homes::error::describe_failure;
use nestwise_homes::inquiries::{InquiryDraft, InquiryService};
use nestwise_homes::listings::{featured, record_view, ListingDraft, ListingService};
use nestwise_homes::models::PropertyType;
use nestwise_homes::search::{suggest, FilterSpec, MockCatalog, PropertySource};
use nestwise_homes::storage::{FileStore, KeyValueStore};
use nestwise_homes::wishlist::WishlistService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 NestWise Homes - listing demo");
    info!("=================================");

    let store: Arc<dyn KeyValueStore> = Arc::new(
        FileStore::open(config.data_dir.clone())
            .await
            .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?,
    );
    info!("Using {} store at {}", store.backend_name(), config.data_dir.display());

    let delay = config.simulated_delay;
    let catalog = MockCatalog::new(delay).with_store(store.clone());
    let auth = Arc::new(AuthService::new(store.clone()));
    let wishlist = WishlistService::new(store.clone(), auth.clone());
    let inquiries = InquiryService::new(store.clone(), auth.clone(), delay);
    let listings = ListingService::new(store.clone(), auth.clone(), delay);

    // Browse as a buyer
    let (session, notice) = auth.sign_in("buyer@example.com", "demo").await?;
    info!("{}", notice);

    let spec = FilterSpec::new().min_price(300_000).city("dhaka");
    let mut results = catalog.search(&spec).await.context("Search failed")?;
    info!("\n✅ {} properties found\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.formatted_price());
        println!("   {}, {}, {}", property.address, property.city, property.state);
        if let Some(bedrooms) = property.bedrooms {
            println!("   {} bed, {} bath", bedrooms, property.bathrooms.unwrap_or(0.0));
        }
        println!("   Type: {}", property.property_type);
        println!("   Amenities: {}", property.amenities.join(", "));
        println!("   Image: {}", property.cover_image());
        println!();
    }

    for suggestion in suggest(&results, "condo") {
        info!("Suggestion: {} in {}", suggestion.title, suggestion.city);
    }

    let all = catalog.fetch_all().await?;
    info!("{} featured listings", featured(&all).len());

    if let Some(first_id) = results.first().map(|p| p.id.clone()) {
        if let Some(viewed) = record_view(&mut results, &first_id) {
            info!("{} now has {} views", viewed.title, viewed.views_count);
        }

        let change = wishlist.toggle(&first_id).await?;
        info!("{}", change.notice());

        if let Some(property) = catalog.find(&first_id).await? {
            let draft = InquiryDraft {
                message: "Is this property still available?".to_string(),
                contact_email: Some(session.user.email.clone()),
                contact_phone: None,
            };
            match inquiries.submit(&property, draft).await {
                Ok((_, notice)) => info!("{}", notice),
                Err(err) => warn!("{}", describe_failure(&err.into())),
            }
        }
    }

    let profile = auth.require_profile().await?;
    let sections = sections_for(Some(profile.role));
    info!(
        "Dashboard for {}: {:?}",
        profile.role,
        sections.dashboard.iter().map(|s| s.key()).collect::<Vec<_>>()
    );

    // Submit a listing as a seller, then approve it as an admin
    auth.sign_in("seller@example.com", "demo").await?;
    let draft = ListingDraft {
        title: "Lakeside Family Home".to_string(),
        description: "Quiet street, ten minutes from the lake.".to_string(),
        price: Some(420_000),
        property_type: Some(PropertyType::House),
        bedrooms: Some(3),
        bathrooms: Some(2.5),
        address: "14 Lake Circus".to_string(),
        city: "Dhaka".to_string(),
        state: "Dhaka".to_string(),
        amenities: vec!["Garden".to_string(), "Parking".to_string()],
        ..ListingDraft::default()
    };
    let listing = match listings.create(draft).await {
        Ok((listing, notice)) => {
            info!("{}", notice);
            Some(listing)
        }
        Err(err) => {
            warn!("{}", describe_failure(&err.into()));
            None
        }
    };

    if let Some(listing) = listing {
        auth.sign_in("admin@example.com", "demo").await?;
        let notice = listings.set_approval(&listing.id, true).await?;
        info!("{}", notice);
        info!("{} registered users", auth.directory().await?.len());
    }

    auth.sign_in("buyer@example.com", "demo").await?;
    let saved = wishlist.properties(&catalog).await?;
    info!("Wishlist holds {} properties", saved.len());

    // Save results next to the store
    let json = serde_json::to_string_pretty(&results)?;
    let out = config.data_dir.join("search_results.json");
    tokio::fs::write(&out, json).await?;
    info!("💾 Saved search results to {}", out.display());

    let notice = auth.sign_out().await?;
    info!("{}", notice);

    Ok(())
}
