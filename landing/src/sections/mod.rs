// Landing page sections

mod download;
mod features;
mod footer;
mod hero;
mod icons;

pub use download::DownloadSection;
pub use features::FeatureShowcase;
pub use footer::Footer;
pub use hero::Hero;
