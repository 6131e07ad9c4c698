pub mod clients;
pub mod cta;
pub mod hero;
pub mod portfolio;
pub mod showcase;

pub use clients::ClientsSection;
pub use cta::CtaSection;
pub use hero::HeroSection;
pub use portfolio::PortfolioSection;
pub use showcase::ShowcaseSection;
