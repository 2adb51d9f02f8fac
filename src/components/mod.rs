pub mod avatar;
pub mod header;
pub mod loading;
pub mod toast;

pub use avatar::Avatar;
pub use header::Header;
pub use loading::Loading;
pub use toast::Toast;
