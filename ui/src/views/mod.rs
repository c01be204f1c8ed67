mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod not_found;
pub use not_found::NotFound;
