//! Hardcoded stories, regions and links shown on the portal.

#[derive(Debug, PartialEq)]
pub struct StoryItem {
    pub category: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub published: &'static str,
    pub image: &'static str,
    pub reads: u32,
}

#[derive(Debug, PartialEq)]
pub struct RegionHeadline {
    pub headline: &'static str,
    pub published: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct RegionPanel {
    pub name: &'static str,
    pub badge: &'static str,
    pub headlines: &'static [RegionHeadline],
}

#[derive(Debug, PartialEq)]
pub struct OpinionPiece {
    pub author: &'static str,
    pub title: &'static str,
    pub teaser: &'static str,
    pub published: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct GalleryImage {
    pub location: &'static str,
    pub label: &'static str,
    pub src: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TagItem {
    pub label: &'static str,
    pub featured: bool,
}

#[derive(Debug, PartialEq)]
pub enum LinkTarget {
    /// Not built yet; clicking surfaces the message.
    Placeholder(&'static str),
    InquiryPage,
}

#[derive(Debug, PartialEq)]
pub struct QuickLink {
    pub name: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const TICKER_HEADLINES: &[&str] = &[
    "Nepal's Prime Minister announces new economic reforms",
    "Heavy rainfall expected in eastern regions",
    "National football team advances to semifinals",
    "Government unveils new infrastructure plan",
    "International aid arrives for flood victims in southern districts",
];

pub const LEAD_STORY: StoryItem = StoryItem {
    category: "Politics",
    headline: "Nepal Parliament Passes Historic Infrastructure Bill",
    summary: "The bill aims to modernize Nepal's infrastructure with a focus on sustainable development and earthquake-resistant construction techniques. It includes provisions for new highways, bridges, and public transportation systems.",
    published: "2 hours ago",
    image: "/assets/1.jpg",
    reads: 0,
};

pub const FEATURED_STORIES: &[StoryItem] = &[
    StoryItem {
        category: "Economy",
        headline: "Nepal's Currency Strengthens Against US Dollar",
        summary: "Economic experts attribute the strengthening to increased remittances and foreign investment in the tourism sector.",
        published: "5 hours ago",
        image: "/assets/2.jpeg",
        reads: 0,
    },
    StoryItem {
        category: "Sports",
        headline: "National Cricket Team Secures Victory in Asian Cup",
        summary: "The team's outstanding performance has sparked celebrations across the country as they advance to the finals.",
        published: "8 hours ago",
        image: "/assets/3.jpg",
        reads: 0,
    },
];

pub const TOP_STORIES: &[StoryItem] = &[
    StoryItem {
        category: "Tourism",
        headline: "Nepal's Tourism Industry Shows Strong Recovery Post-Pandemic",
        summary: "Tourism numbers have increased by 45% compared to last year, bringing economic benefits to local communities and boosting the hospitality sector.",
        published: "2 hours ago",
        image: "/assets/4.jpg",
        reads: 245,
    },
    StoryItem {
        category: "Politics",
        headline: "Prime Minister Announces Cabinet Reshuffle Amid Policy Changes",
        summary: "Three key ministries will see new leadership as the government pivots to focus on economic development and infrastructure projects.",
        published: "3 hours ago",
        image: "/assets/5.jpeg",
        reads: 312,
    },
    StoryItem {
        category: "Health",
        headline: "New Medical Facility Opens in Kathmandu with Advanced Technology",
        summary: "The state-of-the-art hospital features the latest medical equipment and aims to reduce the need for citizens to seek treatment abroad.",
        published: "5 hours ago",
        image: "/assets/6.jpeg",
        reads: 187,
    },
    StoryItem {
        category: "Education",
        headline: "Government Launches Digital Education Initiative for Rural Schools",
        summary: "The program will provide tablets and internet access to over 500 schools in remote areas, benefiting thousands of students.",
        published: "6 hours ago",
        image: "/assets/7.png",
        reads: 156,
    },
    StoryItem {
        category: "Environment",
        headline: "Nepal Commits to Ambitious Carbon Neutrality Goals by 2045",
        summary: "The plan includes major investments in renewable energy, forest conservation, and sustainable transportation infrastructure.",
        published: "8 hours ago",
        image: "/assets/8.webp",
        reads: 142,
    },
    StoryItem {
        category: "Technology",
        headline: "Nepali Tech Startup Secures $5 Million in International Funding",
        summary: "The Kathmandu-based company specializes in AI solutions for agriculture and will use the funding to expand operations across South Asia.",
        published: "10 hours ago",
        image: "/assets/9.jpeg",
        reads: 203,
    },
];

pub const REGIONS: &[RegionPanel] = &[
    RegionPanel {
        name: "Kathmandu Valley",
        badge: "Capital",
        headlines: &[
            RegionHeadline { headline: "Traffic management plan implemented in key intersections", published: "3 hours ago" },
            RegionHeadline { headline: "Cultural heritage sites see increase in local tourists", published: "5 hours ago" },
            RegionHeadline { headline: "New water supply project to benefit 30,000 households", published: "8 hours ago" },
        ],
    },
    RegionPanel {
        name: "Pokhara",
        badge: "Tourism",
        headlines: &[
            RegionHeadline { headline: "Record number of tourists visit Phewa Lake this month", published: "2 hours ago" },
            RegionHeadline { headline: "New paragliding routes approved by aviation authority", published: "6 hours ago" },
            RegionHeadline { headline: "Local businesses report 40% increase in revenue", published: "10 hours ago" },
        ],
    },
    RegionPanel {
        name: "Eastern Nepal",
        badge: "Agriculture",
        headlines: &[
            RegionHeadline { headline: "Tea exports reach all-time high in first quarter", published: "4 hours ago" },
            RegionHeadline { headline: "New agricultural techniques boost crop yields by 25%", published: "7 hours ago" },
            RegionHeadline { headline: "Government subsidies help small-scale farmers", published: "12 hours ago" },
        ],
    },
];

pub const OPINION: &[OpinionPiece] = &[
    OpinionPiece {
        author: "Editorial Board",
        title: "Infrastructure Must Be Built to Survive the Next Earthquake",
        teaser: "The new bill is a start, but enforcement of building codes will decide whether it matters.",
        published: "4 hours ago",
    },
    OpinionPiece {
        author: "Guest Column",
        title: "Remittances Cannot Carry the Economy Forever",
        teaser: "A stronger rupee is welcome news; the harder task is creating jobs that keep young people home.",
        published: "9 hours ago",
    },
    OpinionPiece {
        author: "Readers' Desk",
        title: "Rural Classrooms Need Teachers as Much as Tablets",
        teaser: "Devices arrive quickly. Training and reliable power take longer and deserve the same attention.",
        published: "1 day ago",
    },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { location: "Kathmandu", label: "Kathmandu Durbar Square", src: "/assets/10.jpeg" },
    GalleryImage { location: "Everest", label: "Mount Everest Base Camp", src: "/assets/11.jpg" },
    GalleryImage { location: "Pokhara", label: "Phewa Lake, Pokhara", src: "/assets/12.jpeg" },
    GalleryImage { location: "Chitwan", label: "Chitwan National Park", src: "/assets/13.jpg" },
];

pub const TAGS: &[TagItem] = &[
    TagItem { label: "#NepalPolitics", featured: true },
    TagItem { label: "#Tourism", featured: false },
    TagItem { label: "#MountEverest", featured: false },
    TagItem { label: "#NepalEconomy", featured: false },
    TagItem { label: "#COVID19", featured: true },
    TagItem { label: "#Agriculture", featured: false },
    TagItem { label: "#Education", featured: false },
    TagItem { label: "#NepalCricket", featured: true },
    TagItem { label: "#Infrastructure", featured: false },
    TagItem { label: "#ClimateChange", featured: false },
];

pub const FOOTER_CATEGORIES: &[&str] = &["Politics", "Economy", "Sports", "Entertainment", "Technology", "Health"];

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink { name: "About Us", target: LinkTarget::Placeholder("Opening About Us page") },
    QuickLink { name: "Contact Us", target: LinkTarget::InquiryPage },
    QuickLink { name: "Advertise", target: LinkTarget::Placeholder("Opening Advertise page") },
    QuickLink { name: "Privacy Policy", target: LinkTarget::Placeholder("Opening Privacy Policy page") },
    QuickLink { name: "Terms of Service", target: LinkTarget::Placeholder("Opening Terms of Service page") },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Facebook", href: "https://www.facebook.com/profile.php?id=61559843632740" },
    SocialLink { name: "TikTok", href: "https://www.tiktok.com/@nepalinlast24hour_" },
    SocialLink { name: "Instagram", href: "https://www.instagram.com/nepalinlast24hours/" },
];

pub const CONTACT_ADDRESS: &str = "Kathmandu, Nepal";
pub const CONTACT_EMAIL: &str = "nepalinlast24hour@gmail.com";
pub const CONTACT_PHONE: &str = "+977 9763487935";
pub const WHATSAPP_NUMBER: &str = "9779763487935";
pub const WHATSAPP_GREETING: &str = "Hello, I would like to know more about your services.";
