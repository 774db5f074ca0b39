// Landing page routes

mod home;
mod not_found;
mod privacy_policy;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy_policy::PrivacyPolicyPage;
