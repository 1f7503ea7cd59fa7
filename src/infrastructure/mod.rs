//! Infrastructure layer: storage backends and external integrations.

pub mod persistence;
