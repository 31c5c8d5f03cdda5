//! Public pages: landing, journal catalogue, blog and news.

mod blog;
mod catalogue;
mod landing;
mod news;

pub use blog::{BlogList, BlogPost};
pub use catalogue::{JournalCatalogue, JournalPage};
pub use landing::Landing;
pub use news::NewsFeed;
