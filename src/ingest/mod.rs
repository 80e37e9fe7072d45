/// Upstream API clients.
///
/// Submodules:
/// - `nws`:  active weather alerts from the National Weather Service.
/// - `fema`: historical disaster declarations from OpenFEMA.

pub mod fema;
pub mod nws;
