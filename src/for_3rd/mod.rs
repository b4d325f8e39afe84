//! Third-party crate integrations.

pub(crate) mod de;
mod ser;
