mod banner;

pub use banner::{Banner, BannerPosition};
