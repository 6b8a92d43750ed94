/// Analysis kind listing command.
pub mod kinds;
/// Reply rendering command.
pub mod render;
/// Shared input helpers.
pub(crate) mod util;
