//! Compiled-in seed content
//!
//! Written to an empty store by [`ContentStore::initialize`](super::ContentStore::initialize).
//! Translations are deliberately sparse; readers fall back to English.

use crate::storage::types::{
    BlogPost, Category, Language, LocalizedList, LocalizedText, Service, SiteConfig,
};
use Language::*;

fn service(
    id: &str,
    icon: &str,
    category: Category,
    title: &[(Language, &str)],
    description: &[(Language, &str)],
    details: Vec<(Language, Vec<&'static str>)>,
) -> Service {
    Service {
        id: id.to_string(),
        title: LocalizedText::from_pairs(title.iter().copied()),
        description: LocalizedText::from_pairs(description.iter().copied()),
        details: LocalizedList::from_pairs(details),
        icon: icon.to_string(),
        category,
    }
}

/// Default service catalogue
pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "housekeeping",
            "Sparkles",
            Category::Maintenance,
            &[
                (En, "Housekeeping & Cleaning"),
                (Me, "Održavanje i čišćenje"),
                (Sr, "Održavanje i čišćenje"),
                (Ru, "Уборка и содержание"),
                (De, "Reinigung & Haushalt"),
            ],
            &[
                (En, "Regular and pre-arrival cleaning so your property is always guest-ready."),
                (Me, "Redovno čišćenje i priprema prije dolaska gostiju."),
                (De, "Regelmäßige Reinigung und Vorbereitung vor der Ankunft."),
            ],
            vec![
                (En, vec!["Weekly cleaning", "Linen change", "Pre-arrival preparation"]),
                (De, vec!["Wöchentliche Reinigung", "Wäschewechsel", "Vorbereitung vor Ankunft"]),
            ],
        ),
        service(
            "pool-spa",
            "Waves",
            Category::Maintenance,
            &[
                (En, "Pool & Spa Care"),
                (Me, "Održavanje bazena"),
                (Ru, "Обслуживание бассейна"),
                (De, "Pool- & Spa-Pflege"),
            ],
            &[
                (En, "Water testing, chemical balancing and equipment checks all season."),
                (Ru, "Контроль воды и оборудования в течение всего сезона."),
            ],
            vec![(En, vec!["Water chemistry", "Filter cleaning", "Seasonal opening and closing"])],
        ),
        service(
            "repairs",
            "Wrench",
            Category::Maintenance,
            &[
                (En, "Repairs & Technical Maintenance"),
                (Me, "Popravke i tehničko održavanje"),
                (De, "Reparaturen & Technik"),
            ],
            &[(En, "Plumbing, electrical and HVAC handled by vetted local tradespeople.")],
            vec![(En, vec!["Plumbing", "Electrical", "Air conditioning service"])],
        ),
        service(
            "garden",
            "Trees",
            Category::Maintenance,
            &[
                (En, "Garden & Grounds"),
                (Me, "Bašta i okućnica"),
                (Tr, "Bahçe bakımı"),
            ],
            &[(En, "Lawn care, irrigation and seasonal planting.")],
            vec![(En, vec!["Lawn mowing", "Irrigation checks", "Hedge trimming"])],
        ),
        service(
            "inspections",
            "ShieldCheck",
            Category::Security,
            &[
                (En, "Property Inspections"),
                (Me, "Inspekcija nekretnine"),
                (Ru, "Осмотр недвижимости"),
                (De, "Objektkontrolle"),
            ],
            &[(En, "Scheduled visits with photo reports while you are away.")],
            vec![(En, vec!["Bi-weekly visits", "Photo reports", "Storm checks"])],
        ),
        service(
            "key-holding",
            "KeyRound",
            Category::Security,
            &[(En, "Key Holding & Alarm Response"), (Me, "Čuvanje ključeva")],
            &[(En, "Secure key storage and on-call response to alarm events.")],
            vec![(En, vec!["Secure key safe", "Alarm call-outs", "Contractor access"])],
        ),
        service(
            "rental-management",
            "Building2",
            Category::Assets,
            &[
                (En, "Rental Management"),
                (Me, "Upravljanje izdavanjem"),
                (Ru, "Управление арендой"),
                (De, "Vermietungsmanagement"),
            ],
            &[(En, "Listings, guest communication, check-ins and monthly statements.")],
            vec![(En, vec!["Listing management", "Guest check-in", "Monthly statements"])],
        ),
        service(
            "concierge",
            "ConciergeBell",
            Category::Lifestyle,
            &[(En, "Concierge"), (Me, "Konsijerž"), (Es, "Conserjería")],
            &[(En, "Airport transfers, restaurant bookings and anything in between.")],
            vec![(En, vec!["Airport transfers", "Restaurant bookings", "Event planning"])],
        ),
        service(
            "boat-car",
            "Sailboat",
            Category::Lifestyle,
            &[(En, "Boat & Car Care"), (Me, "Održavanje plovila i vozila")],
            &[(En, "Berth coordination, hull cleaning and vehicle servicing.")],
            vec![(En, vec!["Boat cleaning", "Berth coordination", "Car servicing"])],
        ),
    ]
}

/// Default blog posts
pub fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "winterizing-your-villa".to_string(),
            title: LocalizedText::from_pairs([
                (En, "Winterizing Your Coastal Villa"),
                (Me, "Priprema vile za zimu"),
                (De, "Ihre Küstenvilla winterfest machen"),
            ]),
            content: LocalizedText::from_pairs([(
                En,
                "Salt air and winter storms are hard on empty homes. Here is our checklist for closing a property for the off-season.",
            )]),
            date: "2024-10-15".to_string(),
            image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750".to_string(),
        },
        BlogPost {
            id: "rental-season-prep".to_string(),
            title: LocalizedText::from_pairs([
                (En, "Getting Ready for Rental Season"),
                (Ru, "Подготовка к сезону аренды"),
            ]),
            content: LocalizedText::from_pairs([(
                En,
                "From deep cleaning to pool start-up, a well-prepared property earns better reviews from the first guest onward.",
            )]),
            date: "2025-03-02".to_string(),
            image: "https://images.unsplash.com/photo-1566073771259-6a8506099945".to_string(),
        },
    ]
}

/// Default site configuration
pub fn default_config() -> SiteConfig {
    SiteConfig {
        primary_color: "#107490".to_string(),
        accent_color: "#f59e0b".to_string(),
        contact_email: "info@mps-montenegro.com".to_string(),
        phone_number: "+382 67 123 456".to_string(),
        address: "Budva, Montenegro".to_string(),
        about_title: LocalizedText::from_pairs([
            (En, "About Us"),
            (Me, "O nama"),
            (Sr, "O nama"),
            (Hr, "O nama"),
            (Ru, "О нас"),
            (De, "Über uns"),
        ]),
        about_subtitle: LocalizedText::from_pairs([
            (En, "Your property, cared for while you are away"),
            (Me, "Vaša nekretnina u sigurnim rukama"),
            (De, "Ihre Immobilie in guten Händen"),
        ]),
        about_content: LocalizedText::from_pairs([
            (
                En,
                "We are a local team looking after homes, villas and apartments along the Montenegrin coast: maintenance, security and everything that keeps a property ready for its owners and guests.",
            ),
            (
                Me,
                "Mi smo lokalni tim koji brine o kućama, vilama i apartmanima duž crnogorskog primorja.",
            ),
        ]),
    }
}
