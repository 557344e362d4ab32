use crate::logo::LogoVariant;

pub struct Config {
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub logo: LogoVariant,
    pub hero_image_url: &'static str,
    /// How long the mocked pre-order request takes to "respond".
    pub submission_delay_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            brand_name: "Niramaya",
            tagline: "Ayurveda • Personalization • Science",
            logo: LogoVariant::Leaf,
            hero_image_url: "https://images.unsplash.com/photo-1506806732259-39c2d0268443?q=80&w=800&auto=format&fit=crop&ixlib=rb-4.0.3&s=placeholder",
            submission_delay_ms: 600,
        }
    }
}

pub const CONFIG: Config = Config::new();
