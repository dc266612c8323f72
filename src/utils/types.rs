/// Alias to a scalar floating type.
///
/// NOTE: Currently, prefer to use `f64` as a default floating type: fitness aggregation over
/// a whole population quickly loses precision with `f32` and no clear performance benefits
/// were found with it.
pub type Float = f64;
