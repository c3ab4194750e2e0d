mod catalog;

pub use catalog::CatalogCacheManager;
