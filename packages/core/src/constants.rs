// ABOUTME: Seed catalogue used to populate an empty database
// ABOUTME: Shared by startup seeding and the reset-database operation

/// Categories inserted on first start and on reset, in insertion order
pub const SEED_CATEGORIES: &[&str] = &[
    "B2B Portal",
    "Consumer Site",
    "Manuals/Docs",
    "Tech Specs",
    "Warranty Info",
    "Support/Contact",
    "Ordering System",
    "Training Resources",
    "News/Updates",
    "Other",
];

/// Brands inserted on first start and on reset, in insertion order
pub const SEED_BRANDS: &[&str] = &["Shimano", "SRAM", "Trek", "Specialized", "Giant"];

/// A sample link, referencing its brand and category by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedLink {
    pub brand: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const SEED_LINKS: &[SeedLink] = &[
    SeedLink {
        brand: "Shimano",
        category: "B2B Portal",
        title: "Shimano B2B Portal",
        url: "https://b2b.shimano.com",
        description: "Dealer ordering and account management",
    },
    SeedLink {
        brand: "Shimano",
        category: "Tech Specs",
        title: "Tech Docs",
        url: "https://si.shimano.com",
        description: "Technical documents and specifications",
    },
    SeedLink {
        brand: "SRAM",
        category: "B2B Portal",
        title: "SRAM B2B",
        url: "https://b2b.sram.com",
        description: "SRAM dealer portal",
    },
    SeedLink {
        brand: "SRAM",
        category: "Manuals/Docs",
        title: "Service Manuals",
        url: "https://www.servicearchive.sram.com",
        description: "Complete service documentation",
    },
    SeedLink {
        brand: "Trek",
        category: "B2B Portal",
        title: "Trek B2B",
        url: "https://b2b.trekbikes.com",
        description: "Trek dealer portal",
    },
    SeedLink {
        brand: "Trek",
        category: "Warranty Info",
        title: "Warranty Portal",
        url: "https://warranty.trekbikes.com",
        description: "Submit and track warranty claims",
    },
    SeedLink {
        brand: "Specialized",
        category: "B2B Portal",
        title: "Specialized B2B",
        url: "https://b2b.specialized.com",
        description: "Specialized dealer portal",
    },
    SeedLink {
        brand: "Specialized",
        category: "Training Resources",
        title: "SBCU",
        url: "https://sbcu.specialized.com",
        description: "Specialized Bicycle Components University",
    },
    SeedLink {
        brand: "Giant",
        category: "B2B Portal",
        title: "Giant B2B",
        url: "https://b2b.giant-bicycles.com",
        description: "Giant dealer portal",
    },
    SeedLink {
        brand: "Giant",
        category: "Consumer Site",
        title: "Giant Bicycles",
        url: "https://www.giant-bicycles.com",
        description: "Consumer website and bike finder",
    },
];
