//! 도메인 모델 정의.

pub mod company;
pub mod favorite;
pub mod news;

pub use company::{CompanyDirectory, CompanyProfile};
pub use favorite::FavoriteItem;
pub use news::{NewsKeyword, NewsKeywordFeed};
