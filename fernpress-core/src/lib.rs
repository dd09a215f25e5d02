//! # fernpress-core
//!
//! Core library for the fernpress static site generator.
//!
//! This crate provides the content pipeline: scanning a markdown tree,
//! parsing front matter, rendering HTML with site-absolute links, and
//! deriving the query and navigation views consumed by the build driver.

pub mod config;
pub mod frontmatter;
pub mod generator;
pub mod markdown;
pub mod models;
pub mod scanner;
pub mod sidebar;
pub mod store;
pub mod templating;
pub mod titles;

pub use config::SiteConfig;
pub use models::{
    ContentEntry, ContentSet, DirectoryDescriptor, Metadata, SidebarNode, ROOT_DIRECTORY,
};
pub use scanner::{ScanError, Scanner};
pub use sidebar::{build_full_sidebar, build_sidebar};
pub use store::ContentStore;
pub use templating::TemplateVars;
pub use titles::format_title;
