//! On-disk storage for the Ads Document and its rolling backups.

pub mod document;
